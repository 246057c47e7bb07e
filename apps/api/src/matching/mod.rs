//! Match Scorer: compares the skills found in a resume with the skills the
//! user selected for a field.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`; `ExactMatchScorer` is the
//! default and only backend.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::name_key;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Percentage of required skills present, plus the breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0.0 – 100.0, one decimal place.
    pub percentage: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring strategies without touching the handlers.
pub trait MatchScorer: Send + Sync {
    fn score(&self, extracted_skills: &[String], required_skills: &[String]) -> MatchResult;

    /// Label reported alongside results.
    fn backend(&self) -> &'static str;
}

/// Exact, case-insensitive set intersection. No fuzzy matching or synonyms.
pub struct ExactMatchScorer;

impl MatchScorer for ExactMatchScorer {
    fn score(&self, extracted_skills: &[String], required_skills: &[String]) -> MatchResult {
        compute_match(extracted_skills, required_skills)
    }

    fn backend(&self) -> &'static str {
        "exact"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

/// percentage = |required ∩ extracted| / |required| × 100
///
/// Required skills are deduplicated ignoring case; `matched` and `missing`
/// keep their order and spelling. An empty requirement list scores 0 with
/// both lists empty.
pub fn compute_match(extracted_skills: &[String], required_skills: &[String]) -> MatchResult {
    let extracted: HashSet<String> = extracted_skills.iter().map(|s| name_key(s)).collect();

    let mut seen = HashSet::new();
    let required: Vec<&str> = required_skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && seen.insert(name_key(s)))
        .collect();

    if required.is_empty() {
        return MatchResult::default();
    }

    let (matched, missing): (Vec<&str>, Vec<&str>) = required
        .iter()
        .copied()
        .partition(|s| extracted.contains(&name_key(s)));

    let ratio = matched.len() as f64 / required.len() as f64;
    let percentage = round_to_tenth(ratio * 100.0).clamp(0.0, 100.0);

    MatchResult {
        percentage,
        matched: matched.into_iter().map(str::to_string).collect(),
        missing: missing.into_iter().map(str::to_string).collect(),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_of_three_required() {
        let result = compute_match(
            &strings(&["python", "sql"]),
            &strings(&["python", "sql", "java"]),
        );
        assert!((result.percentage - 66.7).abs() < 1e-9, "got {}", result.percentage);
        assert_eq!(result.matched, vec!["python", "sql"]);
        assert_eq!(result.missing, vec!["java"]);
    }

    #[test]
    fn test_empty_required_scores_zero() {
        let result = compute_match(&strings(&["python", "sql"]), &[]);
        assert_eq!(result, MatchResult::default());
        assert_eq!(result.percentage, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_empty_required_ignores_extracted_content() {
        assert_eq!(compute_match(&[], &[]).percentage, 0.0);
        assert_eq!(compute_match(&strings(&["x"; 10]), &[]).percentage, 0.0);
    }

    #[test]
    fn test_blank_required_entries_are_ignored() {
        let result = compute_match(&strings(&["python"]), &strings(&["  ", ""]));
        assert_eq!(result, MatchResult::default());
    }

    #[test]
    fn test_case_insensitive_match_keeps_required_spelling() {
        let result = compute_match(&strings(&["PYTHON"]), &strings(&["Python", "SQL"]));
        assert_eq!(result.matched, vec!["Python"]);
        assert_eq!(result.missing, vec!["SQL"]);
        assert_eq!(result.percentage, 50.0);
    }

    #[test]
    fn test_non_ascii_skills_match_ignoring_case() {
        let result = compute_match(&strings(&["análisis"]), &strings(&["ANÁLISIS", "Análisis"]));
        assert_eq!(result.percentage, 100.0);
        assert_eq!(result.matched, vec!["ANÁLISIS"]);
    }

    #[test]
    fn test_duplicate_required_counted_once() {
        let result = compute_match(
            &strings(&["python"]),
            &strings(&["python", "Python", "java"]),
        );
        assert_eq!(result.percentage, 50.0);
        assert_eq!(result.matched, vec!["python"]);
    }

    #[test]
    fn test_full_match_is_hundred() {
        let result = compute_match(&strings(&["a", "b", "c"]), &strings(&["a", "b"]));
        assert_eq!(result.percentage, 100.0);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_no_overlap_is_zero() {
        let result = compute_match(&strings(&["a"]), &strings(&["b", "c"]));
        assert_eq!(result.percentage, 0.0);
        assert_eq!(result.missing, vec!["b", "c"]);
    }

    #[test]
    fn test_no_fuzzy_matching() {
        let result = compute_match(&strings(&["machine learning"]), &strings(&["machine-learning"]));
        assert_eq!(result.percentage, 0.0);
    }

    #[test]
    fn test_idempotent() {
        let extracted = strings(&["python", "sql", "docker"]);
        let required = strings(&["python", "java", "docker", "nlp", "sql", "aws", "c++"]);
        let first = compute_match(&extracted, &required);
        let second = compute_match(&extracted, &required);
        assert_eq!(first, second);
    }

    #[test]
    fn test_percentage_always_bounded() {
        let extracted = strings(&["a", "b", "c", "d", "e", "f"]);
        for n in 1..=6 {
            let required: Vec<String> = (0..n)
                .map(|i| char::from(b'a' + i as u8 * 2).to_string())
                .collect();
            let result = compute_match(&extracted, &required);
            assert!((0.0..=100.0).contains(&result.percentage));
        }
    }

    #[test]
    fn test_scorer_trait_delegates() {
        let scorer: Box<dyn MatchScorer> = Box::new(ExactMatchScorer);
        let result = scorer.score(&strings(&["sql"]), &strings(&["sql", "java"]));
        assert_eq!(result.percentage, 50.0);
        assert_eq!(scorer.backend(), "exact");
    }
}
