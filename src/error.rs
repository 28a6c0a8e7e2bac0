//! Error types for the JSON and CLI surfaces.
//!
//! The geometry functions themselves never fail. Errors only come from
//! decoding requests, reading files, or a malformed command line.

use thiserror::Error;

/// The error type returned by the JSON entry points and the CLI.
#[derive(Debug, Error)]
pub enum LabelError {
    /// Input failed to parse as a valid request.
    #[error("Failed to parse request: {source}{}", format_hint(.hint))]
    Parse {
        #[source]
        source: serde_json::Error,
        hint: String,
    },
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The command line could not be understood.
    #[error("Usage error: {0}")]
    Usage(String),
}

fn format_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

/// What to tell the caller about a request that failed to decode.
fn request_hint(e: &serde_json::Error) -> &'static str {
    use serde_json::error::Category;

    match e.classify() {
        Category::Syntax => "The request is not valid JSON (trailing comma, missing quote or stray character?).",
        Category::Data => concat!(
            "The JSON does not match any request shape. A layout job needs `labelDimensions` ",
            "and optional `pageSettings`, `labels`, `queue`; a snap request needs `rect` and `canvas`; ",
            "a resize request adds `anchor` (n, s, e, w, ne, nw, se, sw); a distribution request ",
            "needs `elements` and `direction`. Field names are camelCase, lengths are mm."
        ),
        Category::Eof => "The request ends early. Is the JSON truncated?",
        Category::Io => "",
    }
}

impl From<serde_json::Error> for LabelError {
    fn from(e: serde_json::Error) -> Self {
        let hint = request_hint(&e).to_string();
        LabelError::Parse { source: e, hint }
    }
}
