//! XG SysEx error types

use std::fmt;

use thiserror::Error;

/// XG SysEx errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A hex token could not be parsed into a byte
    #[error("malformed hex token {token:?} at position {position}")]
    MalformedToken {
        /// Offending token text
        token: String,
        /// Index of the token in its sequence
        position: usize,
    },

    /// Frame is not a well-formed Multi Part Dump
    #[error("invalid XG Multi Part Dump: {reason}")]
    InvalidDumpFormat {
        /// First invariant the frame violated
        reason: InvalidDumpReason,
    },

    /// Part number outside the MIDI data byte range
    #[error("invalid part number: {value} (expected 0..=127)")]
    InvalidPartNumber {
        /// Rejected value
        value: i64,
    },

    /// Stored checksum differs from the computed one
    #[error("checksum mismatch: expected {expected:#04x}, got {found:#04x}")]
    ChecksumMismatch {
        /// Checksum computed over the frame
        expected: u8,
        /// Checksum stored in the frame
        found: u8,
    },
}

impl Error {
    pub(crate) fn malformed(token: impl Into<String>, position: usize) -> Self {
        Self::MalformedToken {
            token: token.into(),
            position,
        }
    }
}

impl From<InvalidDumpReason> for Error {
    fn from(reason: InvalidDumpReason) -> Self {
        Self::InvalidDumpFormat { reason }
    }
}

/// Why a frame failed dump validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidDumpReason {
    /// Frame is not exactly 52 bytes long
    Length {
        /// Actual length
        found: usize,
    },
    /// First byte is not `F0`
    MissingStart,
    /// Last byte is not `F7`
    MissingEnd,
    /// Manufacturer/model header does not match
    Header,
    /// A byte between the markers has its high bit set
    DataByte {
        /// Offset of the offending byte
        offset: usize,
    },
    /// Part number and its mirror disagree
    MirrorMismatch {
        /// Byte at the part number offset
        part: u8,
        /// Byte at the mirror offset
        mirror: u8,
    },
    /// One of the tokens did not decode to a byte
    MalformedToken,
}

impl fmt::Display for InvalidDumpReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { found } => {
                write!(f, "length {found} bytes (expected {})", super::DUMP_LENGTH)
            }
            Self::MissingStart => write!(f, "missing SysEx start byte"),
            Self::MissingEnd => write!(f, "missing SysEx end byte"),
            Self::Header => write!(f, "not an XG Multi Part header"),
            Self::DataByte { offset } => write!(f, "non-data byte at offset {offset}"),
            Self::MirrorMismatch { part, mirror } => {
                write!(f, "part number {part:#04x} differs from mirror {mirror:#04x}")
            }
            Self::MalformedToken => write!(f, "malformed hex token"),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failure() {
        let err = Error::from(InvalidDumpReason::Length { found: 10 });
        assert_eq!(
            err.to_string(),
            "invalid XG Multi Part Dump: length 10 bytes (expected 52)"
        );

        let err = Error::ChecksumMismatch {
            expected: 0x05,
            found: 0x7f,
        };
        assert_eq!(err.to_string(), "checksum mismatch: expected 0x05, got 0x7f");

        let err = Error::malformed("0xZZ", 3);
        assert_eq!(err.to_string(), "malformed hex token \"0xZZ\" at position 3");
    }
}
