//! Error definitions for the `json2go` translation pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
/// Top-level error type returned by public APIs.
pub enum Json2GoError {
    /// Malformed JSON input text; carries the parser's diagnostic verbatim.
    #[error("json parse error: {0}")]
    ParseError(String),
    /// Well-formed JSON whose top-level value cannot be translated.
    #[error("input error: {0}")]
    InputError(String),
    /// Object key that cannot become a Go field (empty key, or two keys
    /// mapping to the same exported identifier).
    #[error("field error: {0}")]
    FieldError(String),
    /// Array with no deterministic element type.
    #[error("array error: {0}")]
    ArrayError(String),
    /// Filesystem I/O error from the CLI or callers that propagate I/O.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
