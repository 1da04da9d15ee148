//! Part number field and its editor

use std::fmt;

use bytes::BytesMut;
use tracing::{debug, instrument};

use super::checksum::{checksum_of, with_repaired_checksum};
use super::frame::validate_dump;
use super::hex::{byte_to_prefixed_token, byte_to_token, bytes_to_tokens, tokens_to_bytes};
use super::{
    CHECKSUM_OFFSET, CHECKSUM_SPAN, DUMP_HEADER, DUMP_LENGTH, Error, MAX_DATA_BYTE,
    PART_MIRROR_OFFSET, PART_OFFSET, Result, SYSEX_END, SysExFrame,
};

/// XG part number (a single MIDI data byte, 0..=127)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct PartNumber(u8);

impl PartNumber {
    /// Lowest part number
    pub const MIN: Self = Self(0);
    /// Highest part number
    pub const MAX: Self = Self(MAX_DATA_BYTE);

    /// Get the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Two-digit uppercase token, no prefix (`"0C"`)
    #[must_use]
    pub fn to_token(self) -> String {
        byte_to_token(self.0)
    }

    /// `0x`-prefixed token (`"0x0C"`)
    #[must_use]
    pub fn to_prefixed_token(self) -> String {
        byte_to_prefixed_token(self.0)
    }
}

impl TryFrom<u8> for PartNumber {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        if value > MAX_DATA_BYTE {
            return Err(Error::InvalidPartNumber {
                value: i64::from(value),
            });
        }
        Ok(Self(value))
    }
}

impl TryFrom<i64> for PartNumber {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        u8::try_from(value)
            .map_err(|_| Error::InvalidPartNumber { value })
            .and_then(Self::try_from)
    }
}

impl From<PartNumber> for u8 {
    fn from(part: PartNumber) -> Self {
        part.0
    }
}

impl fmt::Display for PartNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read the part number of a valid dump
#[instrument(level = "trace", skip(frame), fields(len = frame.len()))]
pub fn get_part_number(frame: &[u8]) -> Result<PartNumber> {
    if let Err(err) = validate_dump(frame) {
        debug!(error = %err, "cannot read part number");
        return Err(err);
    }

    // Validation guarantees a 7-bit data byte
    Ok(PartNumber(frame[PART_OFFSET]))
}

/// Move a valid dump onto another part
///
/// Writes `new_part` to both mirrored offsets and recomputes the checksum.
/// The input frame is left untouched.
#[instrument(level = "debug", skip(frame), fields(len = frame.len()))]
pub fn set_part_number(frame: &SysExFrame, new_part: u8) -> Result<SysExFrame> {
    if let Err(err) = validate_dump(frame.as_bytes()) {
        debug!(error = %err, "refusing to edit frame");
        return Err(err);
    }

    let part = PartNumber::try_from(new_part)?;
    let old = frame.as_bytes()[PART_OFFSET];

    let mut bytes = BytesMut::from(frame.as_bytes());
    bytes[PART_OFFSET] = part.value();
    bytes[PART_MIRROR_OFFSET] = part.value();

    let edited = with_repaired_checksum(&SysExFrame::from_bytes(bytes.freeze()))?;
    debug!(
        old,
        new = part.value(),
        checksum = edited.as_bytes()[CHECKSUM_OFFSET],
        "part number rewritten"
    );
    Ok(edited)
}

/// Token-level [`set_part_number`] for captures held as hex text
///
/// Returns `0x`-prefixed tokens.
pub fn set_part_number_tokens<S: AsRef<str>>(tokens: &[S], new_part: u8) -> Result<Vec<String>> {
    let frame = SysExFrame::from_bytes(tokens_to_bytes(tokens)?);
    let edited = set_part_number(&frame, new_part)?;
    Ok(bytes_to_tokens(edited.as_bytes(), true))
}

impl SysExFrame {
    /// Part number of a valid dump
    pub fn part_number(&self) -> Result<PartNumber> {
        get_part_number(self.as_bytes())
    }

    /// Copy of this dump moved onto `part`
    pub fn with_part_number(&self, part: PartNumber) -> Result<Self> {
        set_part_number(self, part.value())
    }

    /// All-zero parameter dump for `part` with a correct checksum
    #[must_use]
    pub fn blank_dump(part: PartNumber) -> Self {
        let mut bytes = BytesMut::zeroed(DUMP_LENGTH);
        bytes[..DUMP_HEADER.len()].copy_from_slice(&DUMP_HEADER);
        bytes[PART_OFFSET] = part.value();
        bytes[PART_MIRROR_OFFSET] = part.value();
        bytes[DUMP_LENGTH - 1] = SYSEX_END;
        let checksum = checksum_of(&bytes[CHECKSUM_SPAN]);
        bytes[CHECKSUM_OFFSET] = checksum;
        Self::from_bytes(bytes.freeze())
    }
}
