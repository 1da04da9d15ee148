//! SysEx frame value and Multi Part Dump validation

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use tracing::trace;

use super::checksum::compute_checksum;
use super::hex::{byte_to_prefixed_token, bytes_to_tokens, parse_token_stream, tokens_to_bytes};
use super::{
    CHECKSUM_OFFSET, DUMP_HEADER, DUMP_LENGTH, Error, InvalidDumpReason, MAX_DATA_BYTE,
    PART_MIRROR_OFFSET, PART_OFFSET, Result, SYSEX_END, SYSEX_START, is_dump_request,
};

/// One complete SysEx message
///
/// Frames are immutable. Cloning shares the underlying buffer and every edit
/// produces a new frame, so a caller holding the original never observes a
/// change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SysExFrame {
    bytes: Bytes,
}

impl SysExFrame {
    /// Wrap raw bytes without validating them
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Build a frame from hex tokens (`"0xF0"`, `"43"`, ...)
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        tokens_to_bytes(tokens).map(Self::from_bytes)
    }

    /// Get the raw bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Frame length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the frame holds no bytes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Render as hex tokens
    #[must_use]
    pub fn to_tokens(&self, prefixed: bool) -> Vec<String> {
        bytes_to_tokens(&self.bytes, prefixed)
    }

    /// Raw bytes as stored in a `.syx` file
    #[must_use]
    pub fn to_syx(&self) -> Bytes {
        self.bytes.clone()
    }

    /// Check the structural Multi Part Dump invariants
    #[must_use]
    pub fn is_valid_dump(&self) -> bool {
        is_valid_dump(&self.bytes)
    }

    /// Classify the frame
    #[must_use]
    pub fn kind(&self) -> DumpKind {
        classify(&self.bytes)
    }
}

impl AsRef<[u8]> for SysExFrame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for SysExFrame {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<SysExFrame> for Bytes {
    fn from(frame: SysExFrame) -> Self {
        frame.bytes
    }
}

impl FromStr for SysExFrame {
    type Err = Error;

    /// Parse whitespace-separated hex tokens
    fn from_str(text: &str) -> Result<Self> {
        parse_token_stream(text).map(Self::from_bytes)
    }
}

impl fmt::Display for SysExFrame {
    /// `0x`-prefixed tokens separated by single spaces
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&byte_to_prefixed_token(*byte))?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SysExFrame {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SysExFrame {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// What a captured buffer looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DumpKind {
    /// Structurally valid Multi Part Dump
    MultiPartDump,
    /// Multi Part Dump request
    DumpRequest,
    /// Anything else
    Other,
}

/// Classify a buffer without raising
#[must_use]
pub fn classify(frame: &[u8]) -> DumpKind {
    if is_valid_dump(frame) {
        DumpKind::MultiPartDump
    } else if is_dump_request(frame) {
        DumpKind::DumpRequest
    } else {
        DumpKind::Other
    }
}

/// Check a frame against the Multi Part Dump layout
///
/// Checks, in order: length 52, `F0` start, `F7` end, the fixed header,
/// every byte between the markers being a 7-bit MIDI data byte (< 0x80),
/// and the part number matching its mirror. The data byte rule is stricter
/// than the frame shape alone; it keeps every dump a legal SysEx body and
/// the part number inside 0..=127.
///
/// Reports the first violated invariant. The checksum is not part of this
/// check, see [`verify_dump`].
pub fn validate_dump(frame: &[u8]) -> Result<()> {
    if frame.len() != DUMP_LENGTH {
        return Err(InvalidDumpReason::Length { found: frame.len() }.into());
    }

    if frame[0] != SYSEX_START {
        return Err(InvalidDumpReason::MissingStart.into());
    }

    if frame[DUMP_LENGTH - 1] != SYSEX_END {
        return Err(InvalidDumpReason::MissingEnd.into());
    }

    if frame[..DUMP_HEADER.len()] != DUMP_HEADER {
        return Err(InvalidDumpReason::Header.into());
    }

    // Everything between the markers must be a 7-bit data byte
    if let Some(offset) = (1..DUMP_LENGTH - 1).find(|&i| frame[i] > MAX_DATA_BYTE) {
        return Err(InvalidDumpReason::DataByte { offset }.into());
    }

    let (part, mirror) = (frame[PART_OFFSET], frame[PART_MIRROR_OFFSET]);
    if part != mirror {
        return Err(InvalidDumpReason::MirrorMismatch { part, mirror }.into());
    }

    Ok(())
}

/// Probe whether a frame is a structurally valid Multi Part Dump
///
/// Same rules as [`validate_dump`], including the 7-bit data byte rule, so
/// a frame carrying a status byte (>= 0x80) between its markers is invalid.
#[must_use]
pub fn is_valid_dump(frame: &[u8]) -> bool {
    match validate_dump(frame) {
        Ok(()) => true,
        Err(err) => {
            trace!(error = %err, "not a multi part dump");
            false
        }
    }
}

/// Probe a frame still in token form
///
/// Malformed tokens make the frame invalid rather than raising.
#[must_use]
pub fn is_valid_dump_tokens<S: AsRef<str>>(tokens: &[S]) -> bool {
    tokens_to_bytes(tokens).is_ok_and(|bytes| is_valid_dump(&bytes))
}

/// Strict check: structural validity plus a matching checksum
pub fn verify_dump(frame: &[u8]) -> Result<()> {
    validate_dump(frame)?;

    let expected = compute_checksum(frame)?;
    let found = frame[CHECKSUM_OFFSET];
    if expected != found {
        return Err(Error::ChecksumMismatch { expected, found });
    }

    Ok(())
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::sysex::PartNumber;

    #[test]
    fn test_frame_serializes_as_token_text() {
        let frame = SysExFrame::blank_dump(PartNumber::try_from(3u8).unwrap());
        let json = serde_json::to_string(&frame).unwrap();
        assert_eq!(json, format!("\"{frame}\""));

        let decoded: SysExFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, frame);
    }

    #[test]
    fn test_frame_rejects_malformed_token_text() {
        assert!(serde_json::from_str::<SysExFrame>("\"0xF0 0xZZ\"").is_err());
    }

    #[test]
    fn test_part_number_serializes_as_integer() {
        let part = PartNumber::try_from(12u8).unwrap();
        assert_eq!(serde_json::to_string(&part).unwrap(), "12");
        assert_eq!(serde_json::from_str::<PartNumber>("12").unwrap(), part);
        assert_eq!(serde_json::from_str::<PartNumber>("127").unwrap(), PartNumber::MAX);
    }

    #[test]
    fn test_part_number_rejects_out_of_range() {
        assert!(serde_json::from_str::<PartNumber>("128").is_err());
        assert!(serde_json::from_str::<PartNumber>("200").is_err());
        assert!(serde_json::from_str::<PartNumber>("-1").is_err());
    }
}
