//! Multi Part Dump request builder

use tracing::trace;

use super::{
    DUMP_HEADER, MAX_DATA_BYTE, PartNumber, REQUEST_LENGTH, REQUEST_PART_OFFSET, Result,
    SYSEX_END, SysExFrame,
};

/// Request template, part number byte left at zero
///
/// ```text
/// F0 43 20 4C 08 <part> 00 F7
/// ```
const REQUEST_TEMPLATE: [u8; REQUEST_LENGTH] = [
    DUMP_HEADER[0],
    DUMP_HEADER[1],
    DUMP_HEADER[2],
    DUMP_HEADER[3],
    DUMP_HEADER[4],
    0x00,
    0x00,
    SYSEX_END,
];

/// Build the request asking the device to dump `part_number`
pub fn build_request(part_number: u8) -> Result<SysExFrame> {
    PartNumber::try_from(part_number).map(SysExFrame::dump_request)
}

/// [`build_request`] as `0x`-prefixed tokens
pub fn build_request_tokens(part_number: u8) -> Result<Vec<String>> {
    build_request(part_number).map(|frame| frame.to_tokens(true))
}

/// Check whether a buffer has the 8-byte request shape
#[must_use]
pub fn is_dump_request(frame: &[u8]) -> bool {
    frame.len() == REQUEST_LENGTH
        && frame[..REQUEST_PART_OFFSET] == REQUEST_TEMPLATE[..REQUEST_PART_OFFSET]
        && frame[REQUEST_PART_OFFSET] <= MAX_DATA_BYTE
        && frame[REQUEST_PART_OFFSET + 1..] == REQUEST_TEMPLATE[REQUEST_PART_OFFSET + 1..]
}

impl SysExFrame {
    /// Dump request for `part`
    #[must_use]
    pub fn dump_request(part: PartNumber) -> Self {
        let mut bytes = REQUEST_TEMPLATE;
        bytes[REQUEST_PART_OFFSET] = part.value();
        trace!(part = part.value(), "built dump request");
        Self::from_bytes(bytes.to_vec())
    }
}
