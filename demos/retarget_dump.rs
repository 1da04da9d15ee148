//! Retarget a captured XG Multi Part Dump onto another part

use xg_multipart::sysex::verify_dump;
use xg_multipart::{PartNumber, SysExFrame, build_request};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("XG Multi Part Dump Example");
    println!("==========================\n");

    // What the shell sends to the device to ask for part 3
    let request = build_request(3)?;
    println!("Request:  {request}");

    // Stand-in for the reply captured from the MIDI input
    let capture = SysExFrame::blank_dump(PartNumber::try_from(3u8)?).to_string();
    let dump: SysExFrame = capture.parse()?;
    println!("Captured: part {} ({} bytes)", dump.part_number()?, dump.len());

    let moved = dump.with_part_number(PartNumber::try_from(10u8)?)?;
    verify_dump(moved.as_bytes())?;
    println!("Moved:    part {}", moved.part_number()?);
    println!("{moved}");

    println!("\n.syx export is {} bytes", moved.to_syx().len());

    Ok(())
}
