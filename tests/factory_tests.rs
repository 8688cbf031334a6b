use pattern_codec::{
    pattern_factory, to_pattern, Anything, Bool, DirectoryName, Double, Error, FileName, FileType,
    Integer, List, Map, MultipleSelection, OutputStyle, Pattern, Selection,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

fn assert_roundtrip(pattern: &Pattern) {
    let description = pattern.description(OutputStyle::Machine);
    let rebuilt = pattern_factory(&description)
        .unwrap_or_else(|e| panic!("failed to rebuild {description}: {e}"));
    assert_eq!(rebuilt.description(OutputStyle::Machine), description);
    assert_eq!(&rebuilt, pattern);
}

#[test]
fn test_every_variant_roundtrips() {
    let patterns = vec![
        Pattern::from(Integer::new(-10, 10)),
        Pattern::from(Integer::default()),
        Pattern::from(Double::new(0.0, 1e-10)),
        Pattern::from(Double::new(-1.5, 1e20)),
        Pattern::from(Double::default()),
        Pattern::from(Selection::new("ucd|gmv|eps")),
        Pattern::from(MultipleSelection::new("ucd|gmv|eps").unwrap()),
        Pattern::from(Bool::new()),
        Pattern::from(Anything),
        Pattern::from(FileName::new(FileType::Input)),
        Pattern::from(FileName::new(FileType::Output)),
        Pattern::from(DirectoryName),
        Pattern::from(List::new(Bool::new().into(), 0, 3, ";").unwrap()),
        Pattern::from(Map::new(Anything.into(), Integer::new(0, 5).into(), 2, 4, ",", "=").unwrap()),
    ];
    for pattern in &patterns {
        assert_roundtrip(pattern);
    }
}

#[test]
fn test_inverted_bounds_roundtrip_through_bare_tag() {
    let integer = Pattern::from(Integer::new(5, 2));
    assert_eq!(integer.description(OutputStyle::Machine), "[Integer]");
    let rebuilt = pattern_factory("[Integer]").unwrap();
    assert_eq!(rebuilt.description(OutputStyle::Machine), "[Integer]");
    assert!(rebuilt.matches("12345678901234567890"));

    let double = Pattern::from(Double::new(1.0, 0.0));
    assert_eq!(double.description(OutputStyle::Machine), "[Double]");
    assert!(pattern_factory("[Double]").unwrap().matches("-3e300"));
}

#[test]
fn test_derived_patterns_roundtrip() {
    assert_roundtrip(&to_pattern::<u8>());
    assert_roundtrip(&to_pattern::<f32>());
    assert_roundtrip(&to_pattern::<char>());
    assert_roundtrip(&to_pattern::<Vec<Vec<i64>>>());
    assert_roundtrip(&to_pattern::<[f64; 3]>());
    assert_roundtrip(&to_pattern::<HashSet<String>>());
    assert_roundtrip(&to_pattern::<BTreeMap<Vec<u32>, Vec<f64>>>());
    assert_roundtrip(&to_pattern::<BTreeMap<String, BTreeMap<u8, bool>>>());
    assert_roundtrip(&to_pattern::<(String, Vec<u16>)>());
}

#[test]
fn test_rebuilt_pattern_accepts_same_text() {
    let original = to_pattern::<BTreeMap<String, Vec<f64>>>();
    let rebuilt = pattern_factory(&original.to_string()).unwrap();
    for text in ["", "a: 1", "a: 1, 2; b: 0.5", "a: x", "a 1"] {
        assert_eq!(original.matches(text), rebuilt.matches(text), "{text}");
    }
}

#[test]
fn test_deeply_nested_description() {
    let description = "[List of <[List of <[List of <[Integer range 0...1 (inclusive)]> \
                       of length 0...4294967295 (inclusive)]> of length 0...4294967295 \
                       (inclusive) separated by <;>]> of length 1...2 (inclusive) separated by <|>]";
    let pattern = pattern_factory(description).unwrap();
    assert_eq!(pattern.to_string(), description);
    assert!(pattern.matches("0, 1; 1 | 0"));
    assert!(!pattern.matches("0, 2"));
}

#[test]
fn test_unknown_tag_is_reported() {
    for description in ["[Float]", "Integer", "", "[Integer"] {
        assert!(
            matches!(pattern_factory(description), Err(Error::UnknownTag(_))),
            "{description}"
        );
    }
}

#[test]
fn test_malformed_descriptions() {
    let cases = [
        "[Integer range one...two (inclusive)]",
        "[Double range 0...1]",
        "[Selection a|b]",
        "[List of [Bool] of length 0...1 (inclusive)]",
        "[List of <[Bool] of length 0...1 (inclusive)]",
        "[Map of <[Bool]> of length 0...1 (inclusive)]",
        "[FileName (Type: socket)]",
        "[DirectoryName here]",
    ];
    for description in cases {
        assert!(
            matches!(
                pattern_factory(description),
                Err(Error::MalformedDescription { .. })
            ),
            "{description}"
        );
    }
}

#[test]
fn test_nested_failure_propagates() {
    let err = pattern_factory("[List of <[Nope]> of length 0...1 (inclusive)]").unwrap_err();
    assert_eq!(err, Error::UnknownTag("[Nope]".to_string()));

    let err = pattern_factory("[MultipleSelection a,b|c ]").unwrap_err();
    assert!(matches!(err, Error::CommasNotAllowed { position: 1, .. }));
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Parameter {
    name: String,
    value: String,
    pattern: Pattern,
}

#[test]
fn test_pattern_persists_as_description() {
    let parameter = Parameter {
        name: "refinement".to_string(),
        value: "1, 2, 3".to_string(),
        pattern: List::new(Integer::new(0, 8).into(), 1, 5, ",").unwrap().into(),
    };
    let json = serde_json::to_string(&parameter).unwrap();
    assert!(json.contains(
        r#""pattern":"[List of <[Integer range 0...8 (inclusive)]> of length 1...5 (inclusive)]""#
    ));

    let back: Parameter = serde_json::from_str(&json).unwrap();
    assert_eq!(back, parameter);
    assert!(back.pattern.matches(&back.value));
}

#[test]
fn test_invalid_persisted_pattern_is_rejected() {
    let json = r#"{"name":"x","value":"1","pattern":"[Integer range 1...]"}"#;
    let err = serde_json::from_str::<Parameter>(json).unwrap_err();
    assert!(err.to_string().contains("Malformed [Integer description"));
}
