use xg_multipart::sysex::{
    CHECKSUM_OFFSET, PART_MIRROR_OFFSET, PART_OFFSET, build_request_tokens, classify,
    is_valid_dump_tokens, parse_packed_hex, set_part_number_tokens, verify_dump,
};
use xg_multipart::{DumpKind, Error, InvalidDumpReason, PartNumber, SysExFrame};

/// Capture of part 3 with a few non-zero parameters, as token text
fn captured_text() -> String {
    let mut bytes = SysExFrame::blank_dump(PartNumber::try_from(3u8).unwrap())
        .as_bytes()
        .to_vec();
    bytes[7] = 0x01;
    bytes[9] = 0x30;
    bytes[20] = 0x40;
    bytes[33] = 0x7F;
    SysExFrame::from(bytes)
        .with_repaired_checksum()
        .unwrap()
        .to_string()
}

#[test]
fn capture_is_retargeted_and_stays_valid() {
    let capture: SysExFrame = captured_text().parse().unwrap();
    assert_eq!(capture.kind(), DumpKind::MultiPartDump);
    verify_dump(capture.as_bytes()).unwrap();
    assert_eq!(capture.part_number().unwrap().value(), 3);

    let moved = capture
        .with_part_number(PartNumber::try_from(10u8).unwrap())
        .unwrap();
    verify_dump(moved.as_bytes()).unwrap();
    assert_eq!(moved.part_number().unwrap().value(), 10);

    // Only the part fields and the checksum change
    for (i, (before, after)) in capture.as_bytes().iter().zip(moved.as_bytes()).enumerate() {
        if ![PART_OFFSET, PART_MIRROR_OFFSET, CHECKSUM_OFFSET].contains(&i) {
            assert_eq!(before, after, "byte {i} changed");
        }
    }

    // The capture is still usable afterwards
    assert_eq!(capture.part_number().unwrap().value(), 3);
}

#[test]
fn token_pipeline_matches_frame_pipeline() {
    let capture: SysExFrame = captured_text().parse().unwrap();
    let tokens = capture.to_tokens(true);
    assert!(is_valid_dump_tokens(&tokens));

    let edited_tokens = set_part_number_tokens(&tokens, 0x21).unwrap();
    let edited = capture.with_part_number(PartNumber::try_from(0x21u8).unwrap()).unwrap();
    assert_eq!(edited_tokens, edited.to_tokens(true));
    assert!(edited_tokens.iter().all(|t| t.len() == 4 && t.starts_with("0x")));
}

#[test]
fn packed_export_text_parses_to_same_frame() {
    let capture: SysExFrame = captured_text().parse().unwrap();
    let packed: String = capture.to_tokens(false).concat();
    let bytes = parse_packed_hex(&packed).unwrap();
    assert_eq!(bytes, capture.to_syx().as_ref());
}

#[test]
fn tampered_capture_is_reported_then_repaired() {
    let mut bytes = captured_text().parse::<SysExFrame>().unwrap().as_bytes().to_vec();
    bytes[40] = 0x22;
    let tampered = SysExFrame::from(bytes);

    assert!(tampered.is_valid_dump());
    assert!(matches!(
        verify_dump(tampered.as_bytes()),
        Err(Error::ChecksumMismatch { .. })
    ));

    let repaired = tampered.with_repaired_checksum().unwrap();
    verify_dump(repaired.as_bytes()).unwrap();
}

#[test]
fn malformed_input_is_rejected() {
    let err = "0xF0 0x43 0xGG".parse::<SysExFrame>().unwrap_err();
    assert!(matches!(err, Error::MalformedToken { position: 2, .. }));

    let short = SysExFrame::from(vec![0u8; 10]);
    assert_eq!(
        short.part_number(),
        Err(Error::InvalidDumpFormat {
            reason: InvalidDumpReason::Length { found: 10 }
        })
    );
}

#[test]
fn request_round_trip_through_classifier() {
    let tokens = build_request_tokens(12).unwrap();
    assert_eq!(tokens.join(" "), "0xF0 0x43 0x20 0x4C 0x08 0x0C 0x00 0xF7");

    let frame = SysExFrame::from_tokens(&tokens).unwrap();
    assert_eq!(classify(frame.as_bytes()), DumpKind::DumpRequest);
}
