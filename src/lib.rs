pub mod error;
pub mod go_codegen;

use serde_json::Value as JsonValue;

pub use error::Json2GoError;
pub use go_codegen::{generate_go, Translation, ROOT_TYPE_NAME};

/// Translates a raw JSON document into a Go type declaration and a matching
/// composite-literal initializer.
///
/// Returns the complete output pair or a single error, never partial output.
/// The top-level JSON value must be an object; field order in both outputs
/// follows key order in the source text.
pub fn translate(input: &str) -> Result<Translation, Json2GoError> {
    let value: JsonValue =
        serde_json::from_str(input).map_err(|e| Json2GoError::ParseError(e.to_string()))?;

    let JsonValue::Object(fields) = value else {
        return Err(Json2GoError::InputError(
            "top-level JSON value must be an object".to_string(),
        ));
    };

    generate_go(&fields)
}

#[cfg(test)]
mod tests {
    use crate::translate;

    #[test]
    fn translates_flat_object() {
        let output = translate(r#"{"id":1,"active":true}"#).unwrap();
        assert_eq!(
            output.type_declaration,
            "type Result struct {\n\tID int `json:\"id\"`\n\tActive bool `json:\"active\"`\n}"
        );
        assert_eq!(
            output.initializer,
            "Result{\n\tID: 1,\n\tActive: true,\n}"
        );
    }

    #[test]
    fn malformed_input_surfaces_parser_diagnostic() {
        let err = translate(r#"{"a":}"#).unwrap_err();
        assert!(err.to_string().starts_with("json parse error:"));
    }

    #[test]
    fn top_level_array_is_rejected() {
        let err = translate(r#"[1, 2]"#).unwrap_err();
        assert!(err.to_string().contains("must be an object"));
    }

    #[test]
    fn top_level_scalar_is_rejected() {
        let err = translate("42").unwrap_err();
        assert!(err.to_string().contains("must be an object"));
    }

    #[test]
    fn empty_object_translates_to_empty_block() {
        let output = translate("{}").unwrap();
        assert_eq!(output.type_declaration, "type Result struct {\n}");
        assert_eq!(output.initializer, "Result{\n}");
    }
}
