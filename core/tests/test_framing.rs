// Validates the Frame Streams control frame codec:
//
// * exact wire bytes for ACCEPT / FINISH
// * encode → parse agreement for frames with content types
// * rejection of unknown types, bad lengths and overrunning fields

#[cfg(test)]
mod tests {
    use dnscap_core::dnstap::framing::{
        encode_control_frame, encode_data_frame, make_accept, make_finish, make_ready, make_stop,
        parse_control_frame, validate_control_len, ControlFrame, ControlType, FrameError,
    };

    fn body(wire: &[u8]) -> &[u8] {
        &wire[8..]
    }

    #[test]
    fn accept_wire_bytes() {
        let mut expected = vec![
            0, 0, 0, 0, // escape
            0, 0, 0, 0x22, // control length: 4 + 8 + 22
            0, 0, 0, 1, // ACCEPT
            0, 0, 0, 1, // CONTENT_TYPE
            0, 0, 0, 0x16, // 22
        ];
        expected.extend_from_slice(b"protobuf:dnstap.Dnstap");

        assert_eq!(make_accept("protobuf:dnstap.Dnstap"), expected);
    }

    #[test]
    fn finish_wire_bytes() {
        assert_eq!(make_finish(), vec![0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 5]);
    }

    #[test]
    fn data_frame_wire_bytes() {
        assert_eq!(encode_data_frame(b"abc"), vec![0, 0, 0, 3, b'a', b'b', b'c']);
    }

    #[test]
    fn ready_with_several_content_types_parses_back() {
        let wire = make_ready(&["protobuf:dnstap.Dnstap", "application/other"]);
        let frame = parse_control_frame(body(&wire)).unwrap();

        assert_eq!(frame.control_type, ControlType::Ready);
        assert_eq!(frame.content_types.len(), 2);
        assert!(frame.offers("protobuf:dnstap.Dnstap"));
        assert!(frame.offers("application/other"));
        assert!(!frame.offers("protobuf:other"));
    }

    #[test]
    fn control_length_matches_body() {
        let frame = ControlFrame::new(ControlType::Start).with_content_type("x");
        let wire = encode_control_frame(&frame);
        let declared = u32::from_be_bytes([wire[4], wire[5], wire[6], wire[7]]) as usize;

        assert_eq!(declared, frame.body_len());
        assert_eq!(wire.len(), 8 + declared);
    }

    #[test]
    fn stop_has_no_fields() {
        let frame = parse_control_frame(body(&make_stop())).unwrap();
        assert_eq!(frame, ControlFrame::new(ControlType::Stop));
    }

    #[test]
    fn unknown_control_type_is_rejected() {
        let err = parse_control_frame(&[0, 0, 0, 0x42]).unwrap_err();
        assert!(matches!(err, FrameError::UnknownControlType(0x42)));
        assert_eq!(err.to_string(), "unknown control frame type: 0x42");
    }

    #[test]
    fn unknown_field_type_is_skipped() {
        let mut b = vec![0, 0, 0, 2]; // START
        b.extend_from_slice(&[0, 0, 0, 9, 0, 0, 0, 2, 0xde, 0xad]);
        let frame = parse_control_frame(&b).unwrap();
        assert_eq!(frame.control_type, ControlType::Start);
        assert!(frame.content_types.is_empty());
    }

    #[test]
    fn field_overrunning_body_is_rejected() {
        let mut b = vec![0, 0, 0, 4]; // READY
        b.extend_from_slice(&[0, 0, 0, 1, 0, 0, 0, 10, b'a']);
        assert!(matches!(
            parse_control_frame(&b),
            Err(FrameError::FieldOverrun { offset: 12, declared: 10, available: 1 })
        ));
    }

    #[test]
    fn short_field_header_is_rejected() {
        let b = [0, 0, 0, 2, 0, 0, 0, 1]; // START + half a field header
        assert!(matches!(
            parse_control_frame(&b),
            Err(FrameError::FieldOverrun { offset: 4, declared: 8, available: 4 })
        ));
    }

    #[test]
    fn huge_field_length_is_rejected() {
        let mut b = vec![0, 0, 0, 2]; // START
        b.extend_from_slice(&[0, 0, 0, 1, 0xff, 0xff, 0xff, 0xff, b'x']);
        assert!(matches!(
            parse_control_frame(&b),
            Err(FrameError::FieldOverrun { declared, .. }) if declared == u32::MAX as usize
        ));
    }

    #[test]
    fn oversize_content_type_is_rejected() {
        let long = "x".repeat(300);
        let wire = make_accept(&long);
        assert!(matches!(
            parse_control_frame(body(&wire)),
            Err(FrameError::ContentTypeLength(300))
        ));
    }

    #[test]
    fn control_length_bounds() {
        assert!(validate_control_len(3).is_err());
        assert_eq!(validate_control_len(4).unwrap(), 4);
        assert_eq!(validate_control_len(512).unwrap(), 512);
        assert!(matches!(validate_control_len(513), Err(FrameError::ControlLength(513))));
    }
}
