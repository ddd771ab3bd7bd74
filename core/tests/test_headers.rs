// Header store: ordering, replacement, length fields, tag gating.

mod common;

#[cfg(test)]
mod tests {
    use super::common::parse;
    use trs_core::headers::{encode_length, tag_name, HeaderError, HeaderStore, Tag};
    use trs_core::prelude::tags;

// # ✅ 1. Ordering and replacement

    #[test]
    fn renders_in_ascending_tag_order() {
        let mut store = HeaderStore::new();
        store.set(tags::SCOPE_ID, "scope").unwrap();
        store.set(tags::NUMBER_OF_TRACES, &2u32).unwrap();
        store.set(tags::TRACE_TITLE, "t").unwrap();
        store.set(0x5D, "undocumented").unwrap();

        let parsed = parse(&store.render());
        assert_eq!(parsed.order, vec![0x41, 0x46, 0x59, 0x5D]);
        assert!(parsed.traces.is_empty());
    }

    #[test]
    fn axis_scale_y_before_axis_offset_x() {
        let mut store = HeaderStore::new();
        store.set(tags::AXIS_SCALE_Y, &1.0f32).unwrap();
        store.set(tags::AXIS_OFFSET_X, &0u32).unwrap();
        assert_eq!(parse(&store.render()).order, vec![0x48, 0x4C]);
    }

    #[test]
    fn later_set_wins() {
        let mut store = HeaderStore::new();
        store.set(tags::AXIS_OFFSET_X, &1u32).unwrap();
        store.set(tags::AXIS_OFFSET_X, &4081u32).unwrap();
        assert_eq!(store.render(), vec![0x48, 0x02, 0xF1, 0x0F, 0x5F, 0x00]);
    }

    #[test]
    fn encoded_len_matches_render() {
        let mut store = HeaderStore::new();
        store.set(tags::DESCRIPTION, "d".repeat(300).as_str()).unwrap();
        store.set(tags::SAMPLE_CODING, &0x14u8).unwrap();
        assert_eq!(store.encoded_len(), store.render().len());
    }

// # ✅ 2. Length fields

    #[test]
    fn length_field_forms() {
        assert_eq!(encode_length(127), vec![0x7F]);
        assert_eq!(encode_length(130), vec![0x81, 0x82]);
        assert_eq!(encode_length(300), vec![0x82, 0x2C, 0x01]);
    }

    #[test]
    fn extended_length_on_the_wire() {
        let mut store = HeaderStore::new();
        let text = "A".repeat(130);
        store.set(tags::DESCRIPTION, text.as_str()).unwrap();

        let rendered = store.render();
        assert_eq!(&rendered[..3], &[0x47, 0x81, 0x82]);
        assert_eq!(rendered.len(), 3 + 130 + 2);

        let parsed = parse(&rendered);
        assert_eq!(parsed.length_fields[&tags::DESCRIPTION], vec![0x81, 0x82]);
        assert_eq!(parsed.headers[&tags::DESCRIPTION], text.into_bytes());
    }

// # ❌ 3. Invalid tags

    #[test]
    fn reserved_tags_are_rejected() {
        let mut store = HeaderStore::new();
        for tag in 0x4F..=0x54u8 {
            assert_eq!(store.set(tag, &1u8), Err(HeaderError::InvalidTag { tag }));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn marker_tag_is_rejected() {
        let mut store = HeaderStore::new();
        assert_eq!(
            store.set(tags::TRACE_BLOCK_MARKER, &0u8),
            Err(HeaderError::InvalidTag { tag: 0x5F })
        );
    }

// # ❌ 4. External clock gating

    #[test]
    fn clock_tags_need_clock_used() {
        let mut store = HeaderStore::new();
        for tag in 0x61..=0x67u8 {
            let err = store.set(tag, &1u32).unwrap_err();
            assert!(matches!(
                err,
                HeaderError::PreconditionNotMet { requires: 0x60, setter: "set_external_clock_used", .. }
            ));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn clock_tags_after_clock_used() {
        let mut store = HeaderStore::new();
        store.set(tags::EXTERNAL_CLOCK_USED, &true).unwrap();
        for tag in [0x61u8, 0x63, 0x66, 0x67] {
            store.set(tag, &1u32).unwrap();
        }
        assert_eq!(parse(&store.render()).order, vec![0x60, 0x61, 0x63, 0x66, 0x67]);
    }

    #[test]
    fn clock_used_false_still_blocks() {
        let mut store = HeaderStore::new();
        store.set(tags::EXTERNAL_CLOCK_USED, &false).unwrap();
        assert!(store.set(tags::EXTERNAL_CLOCK_FREQUENCY, &3.4f32).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn resampler_mask_needs_resampler_enabled() {
        let mut store = HeaderStore::new();
        store.set(tags::EXTERNAL_CLOCK_USED, &true).unwrap();

        let err = store.set(tags::EXTERNAL_CLOCK_RESAMPLER_MASK, &7u32).unwrap_err();
        assert_eq!(
            err,
            HeaderError::PreconditionNotMet {
                tag: 0x64,
                requires: 0x65,
                setter: "set_external_clock_resampler_enabled",
            }
        );

        store.set(tags::EXTERNAL_CLOCK_RESAMPLER_ENABLED, &true).unwrap();
        store.set(tags::EXTERNAL_CLOCK_RESAMPLER_MASK, &7u32).unwrap();
        assert!(store.contains(tags::EXTERNAL_CLOCK_RESAMPLER_MASK));
    }

    #[test]
    fn precondition_message_names_the_setter() {
        let err = HeaderStore::new().set(tags::EXTERNAL_CLOCK_TIME_BASE, &9u32).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ExternalClockTimeBase"), "{msg}");
        assert!(msg.contains("set_external_clock_used()"), "{msg}");
    }

// # ✅ 5. Tag names

    #[test]
    fn tag_names() {
        assert_eq!(tag_name(0x41u8), "NumberOfTraces");
        assert_eq!(tag_name(0x5Du8), "0x5d");
        assert_eq!(u8::from(Tag::ExternalClockUsed), 0x60);
        assert_eq!(Tag::try_from(0x4Bu8).unwrap(), Tag::AxisScaleX);
    }
}
