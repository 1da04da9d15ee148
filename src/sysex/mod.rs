//! XG Multi Part Dump core
//!
//! This module provides the frame layout constants, hex token codec,
//! validator, checksum engine, part-number editor and request builder.
//!
//! # Frame Layout
//!
//! ```text
//! offset  0    1    2    3    4    5    6     7 .. 11  12      13 .. 49  50   51
//!        +----+----+----+----+----+----+-----+--------+-------+--------+----+----+
//!        | F0 | 43 | 20 | 4C | 08 | .. | prt |  data  | prt'  |  data  | ck | F7 |
//!        +----+----+----+----+----+----+-----+--------+-------+--------+----+----+
//! ```
//!
//! `prt` is the part number, `prt'` its mirror, `ck` the checksum over
//! bytes 5..=49.

mod checksum;
mod error;
mod frame;
mod hex;
mod part;
mod request;

use std::ops::Range;

pub use checksum::{compute_checksum, verify_checksum, with_repaired_checksum};
pub use error::{Error, InvalidDumpReason, Result};
pub use frame::{
    DumpKind, SysExFrame, classify, is_valid_dump, is_valid_dump_tokens, validate_dump,
    verify_dump,
};
pub use hex::{
    byte_to_prefixed_token, byte_to_token, bytes_to_tokens, parse_packed_hex, parse_token_stream,
    token_to_byte, tokens_to_bytes,
};
pub use part::{PartNumber, get_part_number, set_part_number, set_part_number_tokens};
pub use request::{build_request, build_request_tokens, is_dump_request};

/// SysEx start marker
pub const SYSEX_START: u8 = 0xF0;

/// SysEx end marker
pub const SYSEX_END: u8 = 0xF7;

/// Yamaha manufacturer ID
pub const YAMAHA_ID: u8 = 0x43;

/// XG model ID
pub const XG_MODEL_ID: u8 = 0x4C;

/// Fixed header every Multi Part Dump starts with
pub const DUMP_HEADER: [u8; 5] = [SYSEX_START, YAMAHA_ID, 0x20, XG_MODEL_ID, 0x08];

/// Multi Part Dump frame length in bytes
pub const DUMP_LENGTH: usize = 52;

/// Offset of the part number
pub const PART_OFFSET: usize = 6;

/// Offset of the byte mirroring the part number
pub const PART_MIRROR_OFFSET: usize = 12;

/// Offset of the checksum byte (last byte before the end marker)
pub const CHECKSUM_OFFSET: usize = DUMP_LENGTH - 2;

/// Bytes summed into the checksum, checksum byte excluded
///
/// Yamaha bulk dumps checksum only what follows the manufacturer/model
/// header, so the fixed header bytes 0..=4 are left out along with the
/// checksum itself and the end marker.
pub const CHECKSUM_SPAN: Range<usize> = DUMP_HEADER.len()..CHECKSUM_OFFSET;

/// Dump request length in bytes
pub const REQUEST_LENGTH: usize = 8;

/// Offset of the part number inside a dump request
pub const REQUEST_PART_OFFSET: usize = 5;

/// Highest value a MIDI data byte can carry
pub const MAX_DATA_BYTE: u8 = 0x7F;
