//! Yamaha XG Multi Part Dump SysEx codec, validator and editor
//!
//! This library reads, validates and rewrites the 52-byte XG "Multi Part"
//! System Exclusive dumps a synthesizer sends back for one part, and builds
//! the short request message that asks the device for such a dump.
//!
//! # Quick Start
//!
//! ```rust
//! use xg_multipart::{PartNumber, SysExFrame, build_request};
//!
//! // Ask the device for part 12
//! let request = build_request(12)?;
//! assert_eq!(request.to_string(), "0xF0 0x43 0x20 0x4C 0x08 0x0C 0x00 0xF7");
//!
//! // Move a captured dump onto another part
//! # let capture = SysExFrame::blank_dump(PartNumber::MIN).to_string();
//! let dump: SysExFrame = capture.parse()?;
//! let moved = dump.with_part_number(PartNumber::try_from(3u8)?)?;
//! assert_eq!(moved.part_number()?.value(), 3);
//! # Ok::<(), xg_multipart::Error>(())
//! ```
//!
//! # Features
//!
//! - **Immutable frames** - edits return a new frame, the original stays intact
//! - **Probe or raise** - boolean validators for exploration, `Result` for mutators
//! - **Checksum repair** - Yamaha modulo-128 checksum recomputed after every edit
//! - **Hex token I/O** - accepts and produces `0xNN` token text

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod sysex;

pub use sysex::{
    DUMP_HEADER, DUMP_LENGTH, DumpKind, Error, InvalidDumpReason, PartNumber, Result,
    SysExFrame, build_request, get_part_number, is_valid_dump, set_part_number,
};
