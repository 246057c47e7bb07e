//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::documents::{load_text, UploadedDocument};
use crate::errors::AppError;
use crate::resumes::render::render_outcomes;
use crate::resumes::report::{
    build_report, resolve_selection, split_skill_list, FieldSelection, ResumeReport,
};
use crate::resumes::FileOutcome;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FormatQuery {
    pub format: Option<String>,
}

impl FormatQuery {
    fn wants_text(&self) -> bool {
        self.format
            .as_deref()
            .is_some_and(|f| f.eq_ignore_ascii_case("text"))
    }
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub results: Vec<FileOutcome>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    pub field: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Everything pulled out of the multipart body before any file is parsed.
#[derive(Debug, Default)]
struct UploadForm {
    files: Vec<UploadedDocument>,
    field: Option<String>,
    skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/parse
///
/// Multipart upload of one or more `file` parts plus optional `field` and
/// `skills`. Each file is processed independently; an unreadable file is
/// reported as failed without affecting the others.
pub async fn handle_parse(
    State(state): State<AppState>,
    Query(query): Query<FormatQuery>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let form = read_upload_form(multipart).await?;
    if form.files.is_empty() {
        return Err(AppError::Validation(
            "At least one 'file' part is required".to_string(),
        ));
    }

    let skills = split_skill_list(&form.skills);
    let selection = resolve_selection(&state.catalog, form.field.as_deref(), &skills)?;

    let mut results = Vec::with_capacity(form.files.len());
    for doc in &form.files {
        results.push(process_document(&state, doc, selection.as_ref()).await);
    }

    if query.wants_text() {
        let body = render_outcomes(&results);
        return Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response());
    }
    Ok(Json(ParseResponse { results }).into_response())
}

/// POST /api/v1/resumes/analyze
///
/// Runs extraction and scoring on text the caller already extracted.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ResumeReport>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let skills = split_skill_list(&request.skills);
    let selection = resolve_selection(&state.catalog, request.field.as_deref(), &skills)?;

    let report = build_report(
        &request.text,
        &state.catalog,
        &state.extractor,
        state.scorer.as_ref(),
        selection.as_ref(),
    );
    Ok(Json(report))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let part_name = field.name().unwrap_or_default().to_string();
        match part_name.as_str() {
            "file" | "files" => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("upload-{}", form.files.len() + 1));
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await?;
                form.files.push(UploadedDocument {
                    file_name,
                    content_type,
                    data,
                });
            }
            "field" => form.field = Some(field.text().await?),
            "skills" => form.skills.push(field.text().await?),
            other => debug!(part = other, "Ignoring unknown multipart part"),
        }
    }
    Ok(form)
}

async fn process_document(
    state: &AppState,
    doc: &UploadedDocument,
    selection: Option<&FieldSelection>,
) -> FileOutcome {
    match load_text(doc).await {
        Ok(text) => {
            let report = build_report(
                &text,
                &state.catalog,
                &state.extractor,
                state.scorer.as_ref(),
                selection,
            );
            info!(
                file = %doc.file_name,
                skills = report.extraction.skills.len(),
                percentage = report.match_result.as_ref().map(|m| m.percentage),
                "Resume parsed"
            );
            FileOutcome::Parsed {
                file_name: doc.file_name.clone(),
                report: Box::new(report),
            }
        }
        Err(e) => {
            warn!(file = %doc.file_name, "Resume could not be read: {e}");
            FileOutcome::Failed {
                file_name: doc.file_name.clone(),
                message: e.user_message(),
            }
        }
    }
}
