//! Yamaha checksum
//!
//! The checksum byte makes the 7-bit sum of the checksum span, checksum
//! included, come out to zero.

use bytes::BytesMut;
use tracing::trace;

use super::{
    CHECKSUM_OFFSET, CHECKSUM_SPAN, DUMP_LENGTH, InvalidDumpReason, Result, SysExFrame,
};

/// Checksum over an arbitrary span
pub(crate) fn checksum_of(span: &[u8]) -> u8 {
    // 128 divides 256, so a wrapping byte sum keeps the low 7 bits exact
    let sum = span.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    (0x80 - (sum & 0x7F)) & 0x7F
}

/// Compute the checksum a 52-byte dump should carry
pub fn compute_checksum(frame: &[u8]) -> Result<u8> {
    if frame.len() != DUMP_LENGTH {
        return Err(InvalidDumpReason::Length { found: frame.len() }.into());
    }

    Ok(checksum_of(&frame[CHECKSUM_SPAN]))
}

/// Check the stored checksum against the computed one
#[must_use]
pub fn verify_checksum(frame: &[u8]) -> bool {
    compute_checksum(frame).is_ok_and(|expected| frame[CHECKSUM_OFFSET] == expected)
}

/// Copy of the frame with the checksum byte recomputed
///
/// Returns a clone sharing the original buffer when the checksum is already
/// correct.
pub fn with_repaired_checksum(frame: &SysExFrame) -> Result<SysExFrame> {
    let expected = compute_checksum(frame.as_bytes())?;
    let found = frame.as_bytes()[CHECKSUM_OFFSET];
    if expected == found {
        return Ok(frame.clone());
    }

    trace!(expected, found, "repairing checksum");
    let mut bytes = BytesMut::from(frame.as_bytes());
    bytes[CHECKSUM_OFFSET] = expected;
    Ok(SysExFrame::from_bytes(bytes.freeze()))
}

impl SysExFrame {
    /// See [`with_repaired_checksum`]
    pub fn with_repaired_checksum(&self) -> Result<Self> {
        with_repaired_checksum(self)
    }

    /// See [`verify_checksum`]
    #[must_use]
    pub fn verify_checksum(&self) -> bool {
        verify_checksum(self.as_bytes())
    }
}
