// Resume parsing: upload → text → fields → match score → report.
// Each request is independent; nothing is kept between requests.

pub mod handlers;
pub mod render;
pub mod report;

use serde::Serialize;

use crate::resumes::report::ResumeReport;

/// Result for one uploaded file. A failed file never carries a partial report.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Parsed {
        file_name: String,
        report: Box<ResumeReport>,
    },
    Failed {
        file_name: String,
        message: String,
    },
}
