use json2go::{translate, Json2GoError};

#[test]
fn malformed_json_returns_error_variant_only() {
    let err = translate(r#"{"a":}"#).unwrap_err();
    assert!(matches!(err, Json2GoError::ParseError(_)));
    assert!(err.to_string().starts_with("json parse error:"));
}

#[test]
fn top_level_non_object_values_are_typed_errors() {
    for input in [r#"[1, 2, 3]"#, r#""hello""#, "true", "null", "3.5"] {
        let err = translate(input).unwrap_err();
        assert!(
            matches!(err, Json2GoError::InputError(_)),
            "expected input error for {input}, got: {err}"
        );
    }
}

#[test]
fn translation_is_deterministic_across_calls() {
    let input = r#"{"id":1,"tags":["a","b"],"meta":{"ok":true}}"#;
    let first = translate(input).unwrap();
    let second = translate(input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn numeric_classification_follows_fractional_part() {
    let output = translate(r#"{"count":7,"ratio":7.5,"offset":-0.0}"#).unwrap();
    assert!(output.type_declaration.contains("\tCount int "));
    assert!(output.type_declaration.contains("\tRatio float64 "));
    assert!(output.type_declaration.contains("\tOffset int "));
}

#[test]
fn string_escaping_keeps_literal_well_formed() {
    let output = translate(r#"{"note":"line one\nsaid \"hi\""}"#).unwrap();
    assert!(output
        .initializer
        .contains("\tNote: \"line one\\nsaid \\\"hi\\\"\","));
}

#[test]
fn field_tags_reference_original_keys() {
    let output = translate(r#"{"userName":"x"}"#).unwrap();
    assert!(output
        .type_declaration
        .contains("\tUserName string `json:\"userName\"`"));
}

#[test]
fn deep_nesting_terminates_with_matching_closers() {
    let input = r#"{"a":{"b":{"c":{"d":{"e":1}}}}}"#;
    let output = translate(input).unwrap();
    assert!(output.type_declaration.contains("\t\t\t\t\tE int `json:\"e\"`"));
    assert!(output.type_declaration.ends_with("\t} `json:\"a\"`\n}"));
    assert!(output.initializer.ends_with("\t},\n}"));
}
