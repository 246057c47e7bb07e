//! Field Extractor: independent heuristics that pull the candidate's name,
//! emails, phone numbers and recognised skills out of raw resume text.
//!
//! Extraction never fails on text input: a miss is an empty list or `None`.

pub mod extractor;
pub mod patterns;

use serde::{Deserialize, Serialize};

pub use extractor::FieldExtractor;

/// Per-resume extraction output. Lists are deduplicated and keep order of
/// first appearance (skills follow dictionary order).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub name: Option<String>,
    pub emails: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub skills: Vec<String>,
}
