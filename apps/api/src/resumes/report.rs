//! Per-upload report assembly: field selection, extraction, scoring.

use serde::{Deserialize, Serialize};

use crate::catalog::{name_key, SkillCatalog};
use crate::errors::AppError;
use crate::extraction::{ExtractionResult, FieldExtractor};
use crate::matching::{MatchResult, MatchScorer};

pub const NOT_FOUND: &str = "Not found";

/// A validated field choice with the required skills in catalog spelling.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSelection {
    pub field: String,
    pub required_skills: Vec<String>,
}

/// Resolves the user's field and skill choice against the catalog.
///
/// Returns `None` when no field was chosen. Skills must belong to the chosen
/// field's checklist; naming skills without a field is rejected.
pub fn resolve_selection(
    catalog: &SkillCatalog,
    field: Option<&str>,
    skills: &[String],
) -> Result<Option<FieldSelection>, AppError> {
    let field = field.map(str::trim).filter(|f| !f.is_empty());

    let Some(field_name) = field else {
        if skills.is_empty() {
            return Ok(None);
        }
        return Err(AppError::Validation(
            "skills were selected without a field".to_string(),
        ));
    };

    let field_skills = catalog.fields.get(field_name).ok_or_else(|| {
        let available: Vec<&str> = catalog.fields.names().collect();
        AppError::Validation(format!(
            "Unknown field '{field_name}'. Available fields: {}",
            available.join(", ")
        ))
    })?;

    let mut required_skills: Vec<String> = Vec::with_capacity(skills.len());
    for requested in skills {
        let key = name_key(requested);
        let canonical = field_skills
            .skills
            .iter()
            .find(|s| name_key(s) == key)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Skill '{}' is not part of field '{}'",
                    requested.trim(),
                    field_skills.name
                ))
            })?;
        if !required_skills.contains(canonical) {
            required_skills.push(canonical.clone());
        }
    }

    Ok(Some(FieldSelection {
        field: field_skills.name.clone(),
        required_skills,
    }))
}

/// Splits repeated and comma-separated skill inputs into one list.
pub fn split_skill_list<I, S>(inputs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .flat_map(|raw| {
            raw.as_ref()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Report
// ────────────────────────────────────────────────────────────────────────────

/// Pre-formatted values, ready to show as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDisplay {
    pub name: String,
    pub emails: String,
    pub phone_numbers: String,
    pub skills: String,
    pub match_percentage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeReport {
    pub extraction: ExtractionResult,
    pub field: Option<String>,
    #[serde(rename = "match")]
    pub match_result: Option<MatchResult>,
    pub scorer_backend: Option<String>,
    pub display: ReportDisplay,
}

/// Extracts fields from `text` and, when a field was selected, scores them.
pub fn build_report(
    text: &str,
    catalog: &SkillCatalog,
    extractor: &FieldExtractor,
    scorer: &dyn MatchScorer,
    selection: Option<&FieldSelection>,
) -> ResumeReport {
    let extraction = extractor.extract(text, &catalog.skills);
    debug_assert!(extraction.skills.iter().all(|s| catalog.skills.contains(s)));
    let match_result =
        selection.map(|sel| scorer.score(&extraction.skills, &sel.required_skills));

    let display = ReportDisplay {
        name: extraction
            .name
            .clone()
            .unwrap_or_else(|| NOT_FOUND.to_string()),
        emails: join_or_not_found(&extraction.emails),
        phone_numbers: join_or_not_found(&extraction.phone_numbers),
        skills: join_or_not_found(&extraction.skills),
        match_percentage: match_result
            .as_ref()
            .map(|m| format_percentage(m.percentage)),
    };

    ResumeReport {
        field: selection.map(|s| s.field.clone()),
        scorer_backend: selection.map(|_| scorer.backend().to_string()),
        extraction,
        match_result,
        display,
    }
}

pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn join_or_not_found(items: &[String]) -> String {
    if items.is_empty() {
        NOT_FOUND.to_string()
    } else {
        items.join(", ")
    }
}
