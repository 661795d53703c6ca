// Extraction prompt templates. Replace `{content}` before sending.
// The schemas here are what `normalize` expects back from the model.

use crate::extraction::schema::DocumentKind;

/// Documents longer than this are cut before templating.
pub const MAX_DOCUMENT_CHARS: usize = 3000;

pub const EXTRACTION_PROMPT_RESUME: &str = r#"TASK: Extract EXACTLY this JSON from resume. Return ONLY the JSON object, no text before/after.

RESUME:
{content}

REQUIRED JSON (return exactly this structure):
{
  "role": "current or most recent job title",
  "totalYearsExperience": (total years as INTEGER),
  "experienceDetails": [
    {
      "role": "job title",
      "company": "company name",
      "startDate": "YYYY",
      "endDate": "YYYY or Current"
    }
  ],
  "skills": [
    {
      "name": "technical skill name"
    }
  ],
  "education": [
    {
      "degree": "degree type",
      "field": "field of study",
      "year": (graduation year as INTEGER)
    }
  ],
  "certifications": ["certification name"],
  "summary": "brief summary"
}

RULES:
1. totalYearsExperience = SUM of all job years
2. role = Most recent job title ONLY
3. skills = ONLY technical/professional skills (NO soft skills)
4. Return ONLY valid JSON, nothing else
5. All fields must be present (use null for missing values)
6. No trailing commas"#;

pub const EXTRACTION_PROMPT_JD: &str = r#"TASK: Extract EXACTLY this JSON from job description. Return ONLY the JSON object, no text before/after.

JOB DESCRIPTION:
{content}

REQUIRED JSON (return exactly this structure):
{
  "jobTitle": "primary job title",
  "minExperienceYears": (minimum years required as INTEGER),
  "requiredEducation": "education requirement",
  "requiredSkills": ["skill1", "skill2", "skill3"],
  "preferredSkills": ["preferred_skill1", "preferred_skill2"],
  "description": "job description summary",
  "responsibilities": ["responsibility 1", "responsibility 2"],
  "benefits": ["benefit 1", "benefit 2"]
}

RULES:
1. jobTitle = Main job title
2. minExperienceYears = Integer (e.g., "5 years" -> 5)
3. requiredEducation = Degree requirement
4. requiredSkills = Required technical skills
5. Return ONLY valid JSON, nothing else
6. All fields must be present (use null for missing values)
7. No trailing commas"#;

pub fn template_for(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Resume => EXTRACTION_PROMPT_RESUME,
        DocumentKind::JobDescription => EXTRACTION_PROMPT_JD,
    }
}

/// Fills the template for `kind` with the first 3000 characters of `document`.
pub fn build_prompt(kind: DocumentKind, document: &str) -> String {
    let content: String = document.chars().take(MAX_DOCUMENT_CHARS).collect();
    template_for(kind).replace("{content}", &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_inserts_document() {
        let prompt = build_prompt(DocumentKind::JobDescription, "Senior Rust Engineer, 5+ years");
        assert!(prompt.contains("JOB DESCRIPTION:\nSenior Rust Engineer, 5+ years\n"));
        assert!(!prompt.contains("{content}"));
        assert!(prompt.contains("\"requiredSkills\""));
    }

    #[test]
    fn test_build_prompt_truncates_long_documents() {
        let document = "é".repeat(MAX_DOCUMENT_CHARS + 500);
        let prompt = build_prompt(DocumentKind::Resume, &document);
        assert_eq!(prompt.matches('é').count(), MAX_DOCUMENT_CHARS);
    }

    #[test]
    fn test_templates_request_the_normalized_field_names() {
        for field in DocumentKind::Resume.required_fields() {
            assert!(EXTRACTION_PROMPT_RESUME.contains(&format!("\"{field}\"")));
        }
        for field in DocumentKind::JobDescription.required_fields() {
            assert!(EXTRACTION_PROMPT_JD.contains(&format!("\"{field}\"")));
        }
    }
}
