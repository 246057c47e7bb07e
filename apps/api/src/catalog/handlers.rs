//! Read-only views of the field checklists.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::catalog::FieldSkills;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/fields
pub async fn handle_list_fields(State(state): State<AppState>) -> Json<Vec<FieldSkills>> {
    Json(state.catalog.fields.fields().to_vec())
}

/// GET /api/v1/fields/:name
pub async fn handle_get_field(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<FieldSkills>, AppError> {
    state
        .catalog
        .fields
        .get(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Field '{name}' not found")))
}
