use thiserror::Error;

/// Error taxonomy for extraction and scoring.
///
/// Only `MissingInputs` is fatal to a scoring call. Recovery failures resolve
/// to a default record inside `extraction::extract_record`, and the
/// per-entry variants are logged and absorbed where they occur.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("LLM response is empty")]
    EmptyResponse,

    #[error("No JSON object found (no opening brace)")]
    NoOpeningBrace,

    #[error("JSON could not be recovered after all repair tiers")]
    Unparseable,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    #[error("Invalid date entry: {0}")]
    InvalidDateEntry(String),

    #[error("Both resume and requirement inputs are missing")]
    MissingInputs,

    #[error("Unknown document kind: {0}")]
    UnknownDocumentKind(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MatchError {
    /// Whether this error originates in the recovery pipeline and should be
    /// answered with a default record rather than propagated.
    pub fn is_recovery_failure(&self) -> bool {
        matches!(
            self,
            MatchError::EmptyResponse | MatchError::NoOpeningBrace | MatchError::Unparseable
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_fields() {
        let err = MatchError::MissingRequiredFields(vec!["role".into(), "skills".into()]);
        assert_eq!(err.to_string(), "Missing required fields: role, skills");
    }

    #[test]
    fn test_recovery_failures_are_classified() {
        assert!(MatchError::NoOpeningBrace.is_recovery_failure());
        assert!(MatchError::Unparseable.is_recovery_failure());
        assert!(!MatchError::MissingInputs.is_recovery_failure());
    }
}
