//! Property-based tests - pragmatic approach testing the streaming
//! equivalence guarantee across generated documents.
//!
//! The core property: streaming a template whose regions are backed by
//! in-memory data produces bytes that parse to exactly the document you
//! would get by materializing every region up front.

use json_drip::{
    to_string, to_writer_with_options, LazyRegion, StreamOptions, Template, TemplateMap,
};
use proptest::prelude::*;
use std::io::{self, Write};

fn json_to_template(value: &serde_json::Value) -> Template {
    match value {
        serde_json::Value::Null => Template::Null,
        serde_json::Value::Bool(b) => Template::from(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Template::from(i)
            } else {
                Template::from(n.as_f64().unwrap_or(0.0))
            }
        }
        serde_json::Value::String(s) => Template::from(s.as_str()),
        serde_json::Value::Array(items) => {
            Template::Array(items.iter().map(json_to_template).collect())
        }
        serde_json::Value::Object(map) => Template::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_template(v)))
                .collect::<TemplateMap>(),
        ),
    }
}

/// Finite floats with a fractional part: whole floats would parse back as
/// integers and trip the serde_json::Value comparison without being a real
/// mismatch.
fn arb_fractional_float() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite, non-whole float", |f| {
        f.is_finite() && f.fract() != 0.0
    })
}

fn arb_json() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::Bool),
        any::<i64>().prop_map(|n| serde_json::Value::from(n)),
        arb_fractional_float().prop_map(|f| serde_json::Value::from(f)),
        ".{0,12}".prop_map(serde_json::Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(serde_json::Value::Array),
            prop::collection::btree_map(".{0,8}", inner, 0..4).prop_map(|m| {
                serde_json::Value::Object(m.into_iter().collect())
            }),
        ]
    })
}

#[derive(Default)]
struct FlushTap {
    bytes: Vec<u8>,
    flushes: usize,
}

impl Write for FlushTap {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

proptest! {
    #[test]
    fn prop_plain_templates_parse_back(value in arb_json()) {
        let out = to_string(json_to_template(&value)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn prop_streamed_region_equals_materialized(
        meta in arb_json(),
        rows in prop::collection::vec(arb_json(), 0..12),
    ) {
        let region = LazyRegion::from_values(
            rows.iter().map(json_to_template).collect::<Vec<_>>(),
        );

        let mut doc = TemplateMap::new();
        doc.insert("data".to_string(), Template::Lazy(region));
        doc.insert("meta".to_string(), json_to_template(&meta));

        let out = to_string(Template::Object(doc)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let expected = serde_json::json!({ "data": rows, "meta": meta });
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn prop_flush_count_matches_cadence(
        len in 0usize..40,
        threshold in 1usize..8,
    ) {
        let region = LazyRegion::from_values(
            (0..len).map(|i| Template::from(i as i64)).collect::<Vec<_>>(),
        );

        let mut tap = FlushTap::default();
        to_writer_with_options(
            Template::Lazy(region),
            &mut tap,
            StreamOptions::new().with_flush_threshold(threshold),
        )
        .unwrap();

        // A flush fires after item K, 2K, ... but never after the last item.
        let expected = if len == 0 { 0 } else { (len - 1) / threshold };
        prop_assert_eq!(tap.flushes, expected);
    }

    #[test]
    fn prop_string_escaping_roundtrips(s in ".{0,24}") {
        let out = to_string(Template::from(s.as_str())).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        prop_assert_eq!(parsed, serde_json::Value::String(s));
    }

    #[test]
    fn prop_ascii_escaped_output_stays_ascii(s in ".{0,24}") {
        let out = to_string_ascii(&s);
        prop_assert!(out.is_ascii());
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        prop_assert_eq!(parsed, serde_json::Value::String(s));
    }
}

fn to_string_ascii(s: &str) -> String {
    json_drip::to_string_with_options(
        Template::from(s),
        StreamOptions::new().with_escape_non_ascii(true),
    )
    .unwrap()
}
