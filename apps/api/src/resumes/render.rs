//! Plain-text rendering of upload results (`?format=text`).

use std::fmt::Write;

use crate::resumes::report::{join_or_not_found, ResumeReport};
use crate::resumes::FileOutcome;

pub fn render_outcomes(outcomes: &[FileOutcome]) -> String {
    let mut out = String::new();
    for (i, outcome) in outcomes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match outcome {
            FileOutcome::Parsed { file_name, report } => {
                let _ = writeln!(out, "== {file_name} ==");
                out.push_str(&render_report(report));
            }
            FileOutcome::Failed { file_name, message } => {
                let _ = writeln!(out, "== {file_name} ==");
                let _ = writeln!(out, "{message}");
            }
        }
    }
    out
}

pub fn render_report(report: &ResumeReport) -> String {
    let display = &report.display;
    let mut out = String::new();

    let _ = writeln!(out, "Name: {}", display.name);
    let _ = writeln!(out, "Emails: {}", display.emails);
    let _ = writeln!(out, "Phone Numbers: {}", display.phone_numbers);
    let _ = writeln!(out, "Extracted Skills: {}", display.skills);

    if let (Some(field), Some(m), Some(pct)) = (
        report.field.as_deref(),
        report.match_result.as_ref(),
        display.match_percentage.as_deref(),
    ) {
        let _ = writeln!(out, "Field: {field}");
        let _ = writeln!(out, "Match Percentage: {pct}");
        let _ = writeln!(out, "Matched Skills: {}", join_or_not_found(&m.matched));
        let _ = writeln!(out, "Missing Skills: {}", join_or_not_found(&m.missing));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::ExtractionResult;
    use crate::matching::MatchResult;
    use crate::resumes::report::{ReportDisplay, NOT_FOUND};

    fn report(match_result: Option<MatchResult>) -> ResumeReport {
        ResumeReport {
            extraction: ExtractionResult {
                name: Some("Jane Doe".to_string()),
                emails: vec!["jane@example.com".to_string()],
                phone_numbers: vec![],
                skills: vec!["python".to_string(), "sql".to_string()],
            },
            field: match_result.as_ref().map(|_| "Computer Science".to_string()),
            display: ReportDisplay {
                name: "Jane Doe".to_string(),
                emails: "jane@example.com".to_string(),
                phone_numbers: NOT_FOUND.to_string(),
                skills: "python, sql".to_string(),
                match_percentage: match_result.as_ref().map(|m| format!("{:.1}%", m.percentage)),
            },
            scorer_backend: match_result.as_ref().map(|_| "exact".to_string()),
            match_result,
        }
    }

    #[test]
    fn test_render_report_without_match() {
        let text = render_report(&report(None));
        assert!(text.contains("Name: Jane Doe"));
        assert!(text.contains("Phone Numbers: Not found"));
        assert!(!text.contains("Match Percentage"));
    }

    #[test]
    fn test_render_report_with_match() {
        let text = render_report(&report(Some(MatchResult {
            percentage: 66.7,
            matched: vec!["python".to_string(), "sql".to_string()],
            missing: vec!["java".to_string()],
        })));
        assert!(text.contains("Field: Computer Science"));
        assert!(text.contains("Match Percentage: 66.7%"));
        assert!(text.contains("Missing Skills: java"));
    }

    #[test]
    fn test_render_failed_outcome() {
        let text = render_outcomes(&[
            FileOutcome::Parsed {
                file_name: "a.txt".to_string(),
                report: Box::new(report(None)),
            },
            FileOutcome::Failed {
                file_name: "b.pdf".to_string(),
                message: "could not read file: PDF extraction failed".to_string(),
            },
        ]);
        assert!(text.contains("== a.txt =="));
        assert!(text.contains("== b.pdf ==\ncould not read file"));
    }
}
