// Text-to-object recovery for raw LLM output.
// Fence stripping and boundary detection live in `extract`, the textual
// repair pass in `repair`, and the tiered parser in `parse`.

pub mod extract;
pub mod parse;
pub mod repair;
mod scan;

use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::MatchError;

pub use extract::{recover, strip_code_fences};
pub use parse::parse_object;
pub use repair::repair;

/// Runs the full pipeline: locate the object, then parse it through all tiers.
pub fn recover_object(raw: &str) -> Result<Map<String, Value>, MatchError> {
    debug!("Processing response: {} chars", raw.len());
    let text = recover(raw)?;
    parse_object(&text)
}

/// Acceptance check for a raw model response.
///
/// A response is accepted when it is non-empty and the recovery pipeline can
/// produce an object from it. Callers re-prompt the model on rejection.
pub fn validate_response(raw: &str) -> Result<(), MatchError> {
    recover_object(raw).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RESUME_JSON: &str = r#"{
        "role": "Senior Software Engineer",
        "totalYearsExperience": 8,
        "experienceDetails": [
            {"role": "Senior Software Engineer", "company": "TechCorp", "startDate": "2020", "endDate": "Present"},
            {"role": "Software Engineer", "company": "DataSystems", "startDate": "2018", "endDate": "2020"}
        ],
        "skills": [{"name": "Python"}, {"name": "React"}, {"name": "Kubernetes"}],
        "education": [{"degree": "B.Tech", "field": "Computer Science", "year": 2016}],
        "certifications": ["AWS Certified Solutions Architect"],
        "summary": "Full-stack engineer with {braces} and [brackets] in prose."
    }"#;

    /// Byte offsets just past each structural character outside string literals.
    fn structural_cut_points(doc: &str) -> Vec<usize> {
        let mut cuts = Vec::new();
        let mut in_string = false;
        let mut escaped = false;
        for (i, c) in doc.char_indices() {
            if in_string {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '"' {
                    in_string = false;
                }
                continue;
            }
            match c {
                '"' => in_string = true,
                '{' | '[' | '}' | ']' | ',' if i > 0 => cuts.push(i + 1),
                _ => {}
            }
        }
        cuts
    }

    #[test]
    fn test_truncated_documents_always_recover_to_an_object() {
        for cut in structural_cut_points(RESUME_JSON) {
            let truncated = &RESUME_JSON[..cut];
            let result = recover_object(truncated);
            assert!(result.is_ok(), "failed to recover prefix:\n{truncated}");
        }
    }

    #[test]
    fn test_recovery_is_identity_on_valid_json() {
        let original: Value = serde_json::from_str(RESUME_JSON).unwrap();
        let recovered = recover_object(RESUME_JSON).unwrap();
        assert_eq!(Value::Object(recovered), original);
    }

    #[test]
    fn test_fenced_response_with_prose() {
        let raw = "Here you go:\n```json\n{\"jobTitle\": \"Data Engineer\", \"minExperienceYears\": 3}\n```\nThanks!";
        let obj = recover_object(raw).unwrap();
        assert_eq!(Value::Object(obj), json!({"jobTitle": "Data Engineer", "minExperienceYears": 3}));
    }

    #[test]
    fn test_validate_response_accepts_repairable_output() {
        assert!(validate_response("{'jobTitle': 'QA Engineer', 'requiredSkills': ['Selenium',]}").is_ok());
    }

    #[test]
    fn test_validate_response_rejects_empty_and_braceless() {
        assert!(matches!(validate_response(""), Err(MatchError::EmptyResponse)));
        assert!(matches!(
            validate_response("Sorry, I cannot help with that."),
            Err(MatchError::NoOpeningBrace)
        ));
    }
}
