#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::config::Limits;
    use proptest::prelude::*;

    #[test]
    fn test_route_binary_to_hex() {
        let codec = Codec::default();
        let hex = codec
            .convert(Representation::Binary, Representation::Hex, "01001000 01101001")
            .unwrap();
        assert_eq!(hex, "48 69");
    }

    #[test]
    fn test_same_representation_is_still_validated() {
        let codec = Codec::default();
        assert!(matches!(
            codec.convert(Representation::Hex, Representation::Hex, "not even hex"),
            Err(CodecError::InvalidInput { position: 0, .. })
        ));
        assert!(codec
            .convert(Representation::Binary, Representation::Binary, "0100000 1")
            .is_err());
    }

    #[test]
    fn test_same_representation_normalizes() {
        let codec = Codec::default();
        assert_eq!(
            codec
                .convert(Representation::Hex, Representation::Hex, "4A 69")
                .unwrap(),
            "4a 69"
        );
        assert_eq!(
            codec
                .convert(Representation::Binary, Representation::Binary, "1")
                .unwrap(),
            "00000001"
        );
        assert_eq!(
            codec
                .convert(Representation::Text, Representation::Text, "as is")
                .unwrap(),
            "as is"
        );
    }

    #[test]
    fn test_route_rejects_whole_input() {
        let codec = Codec::default();
        let err = codec
            .convert(Representation::Hex, Representation::Text, "48 zz 69")
            .unwrap_err();
        assert!(matches!(err, CodecError::InvalidInput { position: 1, .. }));
    }

    #[test]
    fn test_limit_is_enforced_before_decoding() {
        let codec = Codec::new(Limits { max_input_bytes: 4 });
        let err = codec
            .convert(Representation::Text, Representation::Binary, "hello")
            .unwrap_err();
        assert!(matches!(err, CodecError::InputTooLarge(_)));
        assert!(codec
            .convert(Representation::Text, Representation::Binary, "hell")
            .is_ok());
    }

    #[test]
    fn test_representation_names() {
        assert_eq!("bin".parse::<Representation>(), Ok(Representation::Binary));
        assert_eq!("hex".parse::<Representation>(), Ok(Representation::Hex));
        assert!("base64".parse::<Representation>().is_err());
    }

    proptest! {
        #[test]
        fn binary_round_trips_latin1(s in "[\\x00-\\xff]*") {
            prop_assert_eq!(binary_to_text(&text_to_binary(&s)).unwrap(), s);
        }

        #[test]
        fn hex_round_trips_latin1(s in "[\\x00-\\xff]*") {
            prop_assert_eq!(hex_to_text(&text_to_hex(&s)).unwrap(), s);
        }

        #[test]
        fn encoded_groups_are_full_width(s in "[\\x00-\\xff]{1,32}") {
            for group in text_to_binary(&s).split(' ') {
                prop_assert_eq!(group.len(), 8);
            }
            for group in text_to_hex(&s).split(' ') {
                prop_assert_eq!(group.len(), 2);
            }
        }
    }
}
