// Sample packing: widths, padding, nesting, ragged layout, extra data.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use trs_core::traces::{
        pack, pack_trace_set, validate_equal_length, validate_extra_data, ExtraData, PackError,
        SampleCoding, SampleWidth, TraceLayout,
    };

    fn w(width: u8) -> SampleWidth {
        SampleWidth::new(width).unwrap()
    }

// # ✅ 1. Widths and padding

    #[test]
    fn natural_widths() {
        assert_eq!(SampleWidth::of::<u8>().get(), 1);
        assert_eq!(SampleWidth::of::<i16>().get(), 2);
        assert_eq!(SampleWidth::of::<u32>().get(), 4);
        assert_eq!(SampleWidth::of::<f32>().get(), 4);
    }

    #[test]
    fn sample_coding_byte() {
        assert_eq!(SampleCoding::of::<u8>(w(1)).raw(), 0x01);
        assert_eq!(SampleCoding::of::<u16>(w(2)).raw(), 0x02);
        assert_eq!(SampleCoding::of::<u32>(w(4)).raw(), 0x04);

        let float = SampleCoding::of::<f32>(w(4));
        assert_eq!(float.raw(), 0x14);
        assert!(float.is_float());
        assert_eq!(float.width(), 4);
    }

    #[test]
    fn u8_widened_to_four_bytes() {
        assert_eq!(pack(&vec![1u8, 2, 3], w(4)).unwrap(), vec![0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3]);
    }

    #[test]
    fn u32_narrowed_when_values_fit() {
        assert_eq!(pack(&vec![1u32, 0x0203], w(2)).unwrap(), vec![0x00, 0x01, 0x02, 0x03]);
    }

    #[test]
    fn u32_values_big_endian() {
        assert_eq!(pack(&vec![299_999_999u32], w(4)).unwrap(), vec![0x11, 0xE1, 0xA2, 0xFF]);
    }

    #[test]
    fn negative_samples_keep_twos_complement() {
        assert_eq!(pack(&vec![-1i16], w(2)).unwrap(), vec![0xFF, 0xFF]);
        assert!(matches!(
            pack(&vec![-1i16], w(1)),
            Err(PackError::SampleOverflow { needed: 2, .. })
        ));
    }

    #[test]
    fn single_sample_packs() {
        assert_eq!(pack(&7u16, w(4)).unwrap(), vec![0, 0, 0, 7]);
    }

    #[test]
    fn float_samples() {
        assert_eq!(
            pack(&vec![2.0f32, 3.0], w(4)).unwrap(),
            vec![0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x40]
        );
    }

// # ❌ 2. Width errors

    #[test]
    fn invalid_widths() {
        for width in [0u8, 3, 5, 8, 16] {
            assert_eq!(SampleWidth::new(width), Err(PackError::InvalidSampleWidth { width }));
        }
    }

    #[test]
    fn overflow_reports_value_and_width() {
        let err = pack(&vec![1u32, 70_000], w(2)).unwrap_err();
        assert!(matches!(err, PackError::SampleOverflow { needed: 3, width: 2, .. }));
        assert!(err.to_string().contains("70000"));
    }

// # ✅ 3. Nested containers

    #[test]
    fn nested_equal_siblings() {
        let nested = vec![vec![1u8, 2, 3], vec![4, 5, 6]];
        assert_eq!(pack(&nested, w(1)).unwrap(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn nested_slice_input() {
        let nested: &[Vec<u16>] = &[vec![1, 2], vec![3, 4]];
        assert_eq!(pack(nested, w(2)).unwrap(), vec![0, 1, 0, 2, 0, 3, 0, 4]);
    }

    #[test]
    fn nested_unequal_siblings() {
        let nested = vec![vec![1u8, 2, 3], vec![4, 5]];
        assert!(matches!(pack(&nested, w(1)), Err(PackError::StructuralMismatch { .. })));
    }

    #[test]
    fn equal_length_check() {
        assert_eq!(validate_equal_length::<Vec<u8>, u8>(&[]), Ok(0));
        assert_eq!(validate_equal_length(&[vec![1u8, 2], vec![3, 4]]), Ok(2));
        assert!(validate_equal_length(&[vec![1u8, 2], vec![3]]).is_err());
    }

// # ✅ 4. Trace sets

    #[test]
    fn strict_set_rejects_ragged() {
        let traces = vec![vec![1u8], vec![2, 3]];
        assert!(matches!(
            pack_trace_set(&traces, None, w(1), TraceLayout::Strict),
            Err(PackError::StructuralMismatch { .. })
        ));
    }

    #[test]
    fn ragged_set_pads_to_longest() {
        let traces = vec![vec![1u16], vec![2, 3]];
        let packed = pack_trace_set(&traces, None, w(2), TraceLayout::Ragged).unwrap();
        assert_eq!(packed, vec![0, 1, 0, 0, 0, 2, 0, 3]);
    }

    #[test]
    fn ragged_float_padding_is_zero() {
        let traces = vec![vec![1.0f32, 1.0], vec![]];
        let packed = pack_trace_set(&traces, None, w(4), TraceLayout::Ragged).unwrap();
        assert_eq!(&packed[8..], &[0u8; 8]);
    }

    #[test]
    fn extra_data_precedes_each_trace() {
        let traces = vec![vec![1u8, 2], vec![3, 4]];
        let extra = vec![ExtraData::from("ab"), ExtraData::from(vec![0xFF, 0xEE])];
        let packed = pack_trace_set(&traces, Some(&extra), w(1), TraceLayout::Strict).unwrap();
        assert_eq!(packed, vec![b'a', b'b', 1, 2, 0xFF, 0xEE, 3, 4]);
    }

    #[test]
    fn extra_data_lengths_must_match() {
        let extra = vec![ExtraData::from("abc"), ExtraData::from("ab")];
        assert!(matches!(
            validate_extra_data(&extra),
            Err(PackError::StructuralMismatch { .. })
        ));
        assert_eq!(validate_extra_data(&extra[..1]), Ok(3));
    }

    #[test]
    fn extra_data_from_hex() {
        assert_eq!(ExtraData::from_hex("6789").unwrap().as_bytes(), &[0x67, 0x89]);
        assert_eq!(ExtraData::from_hex("ABCD").unwrap().as_bytes(), &[0xAB, 0xCD]);
        assert!(ExtraData::from_hex("abc").is_err());
    }

// # 🎲 5. Properties

    proptest! {
        #[test]
        fn prop_packed_len_is_count_times_width(
            samples in proptest::collection::vec(any::<u8>(), 0..64),
            width in prop_oneof![Just(1u8), Just(2), Just(4)],
        ) {
            let packed = pack(&samples, w(width)).unwrap();
            prop_assert_eq!(packed.len(), samples.len() * width as usize);
        }

        #[test]
        fn prop_u16_roundtrips_big_endian(samples in proptest::collection::vec(any::<u16>(), 0..64)) {
            let packed = pack(&samples, w(2)).unwrap();
            let back: Vec<u16> = packed
                .chunks(2)
                .map(|c| u16::from_be_bytes([c[0], c[1]]))
                .collect();
            prop_assert_eq!(back, samples);
        }
    }
}
