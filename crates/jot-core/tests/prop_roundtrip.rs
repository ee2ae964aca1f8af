/// Property-Based Roundtrip Tests for the JOT Document Model
///
/// Uses the `proptest` crate to generate random document trees and verify
/// that `parse(document.to_string()) == document` holds for all generated
/// inputs. This catches edge cases that hand-written tests might miss.
///
/// Strategies generate:
/// - Random number literals (integers, floats, exponent forms)
/// - Random string spans (ASCII runs, escape pairs, multi-byte text)
/// - Random booleans
/// - Random arrays and objects (up to 3 levels deep)
/// - Random documents (zero or more top-level values)
///
/// String strategies emit raw source spans, so they only produce spans that
/// are themselves valid literals: no unescaped quotes, no lone backslashes,
/// and no raw newlines (which would otherwise split a rendered line).
use proptest::prelude::*;

use jot_core::{parse, Attribute, Document, Value};

// ============================================================================
// Strategies for generating document trees
// ============================================================================

/// Generate a number literal the scanner reads as a single token.
fn arb_number_literal() -> impl Strategy<Value = String> {
    prop::string::string_regex("-?[0-9]{1,6}(\\.[0-9]{1,4})?([eE][+-]?[0-9]{1,2})?").unwrap()
}

/// Generate a number value whose converted form matches its literal.
fn arb_number() -> impl Strategy<Value = Value> {
    arb_number_literal().prop_map(|literal| {
        let value = literal.parse().unwrap();
        Value::Number { literal, value }
    })
}

/// Generate a raw string span with edge cases.
fn arb_raw_string() -> impl Strategy<Value = String> {
    prop_oneof![
        // Simple ASCII runs
        "[a-zA-Z0-9:,;(){}\\[\\]\\-\\. _]{0,20}",
        // Edge case: empty string
        Just("".to_string()),
        // Edge case: spans that look like other literals
        Just("true".to_string()),
        Just("42".to_string()),
        // Escape pairs stay undecoded in the tree
        Just(r"tab\tseparated".to_string()),
        Just(r#"say \"hi\""#.to_string()),
        Just(r"c:\\temp\\file".to_string()),
        Just(r"slash\/path".to_string()),
        Just(r"\b\f\n\r\t".to_string()),
        // Multi-byte text
        Just("caf\u{00e9}".to_string()),
        Just("\u{6570}\u{5024}".to_string()),
    ]
}

/// Generate an object key (the renderer quotes it).
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,12}").unwrap()
}

/// Generate a leaf value (number, string, or boolean).
fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_number(),
        arb_raw_string().prop_map(Value::String),
        any::<bool>().prop_map(Value::Boolean),
    ]
}

/// Generate a value with limited nesting (recursive).
fn arb_value(depth: u32) -> BoxedStrategy<Value> {
    if depth == 0 {
        arb_leaf().boxed()
    } else {
        prop_oneof![
            4 => arb_leaf(),
            2 => prop::collection::vec(arb_value(depth - 1), 0..5).prop_map(Value::Array),
            2 => prop::collection::vec((arb_key(), arb_value(depth - 1)), 0..5).prop_map(|pairs| {
                Value::Object(
                    pairs
                        .into_iter()
                        .map(|(key, value)| Attribute { key, value })
                        .collect(),
                )
            }),
        ]
        .boxed()
    }
}

/// Top-level strategy: a document of zero or more values (up to 3 levels deep).
fn arb_document() -> impl Strategy<Value = Document> {
    prop::collection::vec(arb_value(3), 0..4).prop_map(|values| Document { values })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Core roundtrip property: parsing a rendered document reproduces the tree.
    #[test]
    fn roundtrip_preserves_tree(document in arb_document()) {
        let rendered = document.to_string();
        let reparsed = parse(&rendered).unwrap();
        prop_assert_eq!(
            document,
            reparsed,
            "Roundtrip failed for rendered text {:?}",
            rendered
        );
    }

    /// Rendering is a fixed point: render(parse(render(tree))) == render(tree).
    #[test]
    fn rendering_is_idempotent(document in arb_document()) {
        let rendered = document.to_string();
        let again = parse(&rendered).unwrap().to_string();
        prop_assert_eq!(rendered, again);
    }

    /// Rendered output never has a trailing newline.
    #[test]
    fn rendering_has_no_trailing_newline(document in arb_document()) {
        let rendered = document.to_string();
        prop_assert!(
            !rendered.ends_with('\n'),
            "rendered output must not end with newline: {:?}",
            rendered
        );
    }

    /// Each top-level value renders on its own line.
    #[test]
    fn one_value_per_line(document in arb_document()) {
        let rendered = document.to_string();
        prop_assert_eq!(rendered.lines().count(), document.values.len());
    }

    /// Number literals survive rendering byte for byte.
    #[test]
    fn number_literals_render_verbatim(literal in arb_number_literal()) {
        let document = parse(&literal).unwrap();
        prop_assert_eq!(document.to_string(), literal);
    }

    /// Parsing arbitrary input returns a result (never panics).
    #[test]
    fn parse_never_panics(input in any::<String>()) {
        let _ = parse(&input);
    }
}
