use pretty_assertions::assert_eq;
use sprig::parse::{parse_document, serialize_document};
use std::fs;
use std::path::Path;

/// Helper: load a fixture, parse it, serialize it, and assert byte-for-byte
/// equality.
fn assert_round_trip(fixture_name: &str) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(fixture_name);
    let source = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Could not read fixture {}: {}", fixture_name, e));

    let doc = parse_document(&source);
    let output = serialize_document(&doc);

    assert_eq!(
        output, source,
        "Round-trip failed for fixture: {}",
        fixture_name
    );
}

#[test]
fn round_trip_simple() {
    assert_round_trip("simple.md");
}

#[test]
fn round_trip_nested() {
    assert_round_trip("nested.md");
}

#[test]
fn round_trip_unicode() {
    assert_round_trip("unicode.md");
}

// ============================================================================
// Normalization: messy input parses to a well-formed outline and reserializes
// in canonical form
// ============================================================================

#[test]
fn messy_input_normalizes_to_canonical_form() {
    let source = "\
intro prose that is not a task

# Lists

- [ ] A
      - [X] B jumps three levels
  - [ ] C

> stray quote
- [ ] D
";
    let doc = parse_document(source);

    let levels: Vec<usize> = doc.items.iter().map(|i| i.level).collect();
    assert_eq!(levels, vec![0, 1, 1, 0]);
    assert!(doc.items[1].completed);

    assert_eq!(
        serialize_document(&doc),
        "\
# Lists

- [ ] A
  - [x] B jumps three levels
  - [ ] C
- [ ] D
"
    );
}

#[test]
fn parse_is_idempotent_after_one_normalization() {
    let source = "- [ ] A\n        - [ ] deep\n- [ ] B\n";
    let once = serialize_document(&parse_document(source));
    let twice = serialize_document(&parse_document(&once));
    assert_eq!(once, twice);
}
