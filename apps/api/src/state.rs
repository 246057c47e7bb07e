use std::sync::Arc;

use anyhow::{Context, Result};

use crate::catalog::SkillCatalog;
use crate::config::Config;
use crate::extraction::patterns::{ExtractionPatterns, NameRules};
use crate::extraction::FieldExtractor;
use crate::matching::{ExactMatchScorer, MatchScorer};

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<SkillCatalog>,
    pub extractor: Arc<FieldExtractor>,
    /// Pluggable match scorer. Default: ExactMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
}

impl AppState {
    pub fn new(config: Config, catalog: SkillCatalog) -> Result<Self> {
        let name_rules = NameRules::default().with_scan_lines(config.name_scan_lines);
        let patterns = ExtractionPatterns::with_name_rules(name_rules)
            .context("Failed to compile extraction patterns")?
            .with_skill_mode(config.skill_match_mode);

        Ok(AppState {
            config,
            catalog: Arc::new(catalog),
            extractor: Arc::new(FieldExtractor::new(patterns)),
            scorer: Arc::new(ExactMatchScorer),
        })
    }
}
