//! Manual journal manager routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;
use tracing::{error, info};
use uuid::Uuid;

use crate::AppState;
use grootboek_core::journal::ManualJournalStatus;
use grootboek_db::ManualJournalRepository;
use grootboek_db::repositories::manual_journal::{
    JournalWithLines, ManualJournalError, NewJournalLine, NewManualJournal,
};

/// Creates the manual journal routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/entities/{entity_id}/journals", post(create_journal))
        .route("/entities/{entity_id}/journals/{journal_id}", get(get_journal))
        .route(
            "/entities/{entity_id}/journals/{journal_id}/approve",
            post(approve_journal),
        )
        .route(
            "/entities/{entity_id}/journals/{journal_id}/reject",
            post(reject_journal),
        )
        .route(
            "/entities/{entity_id}/journals/{journal_id}/post",
            post(post_journal),
        )
}

/// Request body for one journal line.
#[derive(Debug, Deserialize)]
pub struct JournalLineRequest {
    /// Account ID the line posts to.
    pub account_id: Uuid,
    /// Debit amount as a decimal string (default "0").
    #[serde(default = "zero")]
    pub debit: String,
    /// Credit amount as a decimal string (default "0").
    #[serde(default = "zero")]
    pub credit: String,
    /// Optional line memo.
    pub memo: Option<String>,
}

fn zero() -> String {
    "0".to_string()
}

/// Request body for creating a draft journal.
#[derive(Debug, Deserialize)]
pub struct CreateJournalRequest {
    /// Journal date (YYYY-MM-DD).
    pub date: NaiveDate,
    /// Journal description.
    pub description: String,
    /// Journal lines.
    pub lines: Vec<JournalLineRequest>,
}

/// Response for a journal with its lines.
#[derive(Debug, Serialize)]
pub struct JournalResponse {
    /// Journal ID.
    pub id: Uuid,
    /// Journal date.
    pub date: String,
    /// Description.
    pub description: String,
    /// Current status.
    pub status: String,
    /// Lines in order.
    pub lines: Vec<LineResponse>,
}

/// Response for one journal line.
#[derive(Debug, Serialize)]
pub struct LineResponse {
    /// Line ID.
    pub id: Uuid,
    /// Account ID.
    pub account_id: Uuid,
    /// Debit amount.
    pub debit: String,
    /// Credit amount.
    pub credit: String,
    /// Line memo.
    pub memo: Option<String>,
}

impl JournalResponse {
    fn from_result(result: &JournalWithLines) -> Self {
        Self {
            id: result.journal.id,
            date: result.journal.journal_date.to_string(),
            description: result.journal.description.clone(),
            status: ManualJournalStatus::from(&result.journal.status).to_string(),
            lines: result
                .lines
                .iter()
                .map(|line| LineResponse {
                    id: line.id,
                    account_id: line.account_id,
                    debit: line.debit.to_string(),
                    credit: line.credit.to_string(),
                    memo: line.memo.clone(),
                })
                .collect(),
        }
    }
}

/// POST `/entities/{entity_id}/journals` - Create a draft journal.
async fn create_journal(
    State(state): State<AppState>,
    Path(entity_id): Path<Uuid>,
    Json(payload): Json<CreateJournalRequest>,
) -> impl IntoResponse {
    let mut lines = Vec::with_capacity(payload.lines.len());
    for (index, line) in payload.lines.iter().enumerate() {
        let (Ok(debit), Ok(credit)) = (
            Decimal::from_str(&line.debit),
            Decimal::from_str(&line.credit),
        ) else {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_line_amount",
                    "message": format!("Line {index} has a malformed amount")
                })),
            )
                .into_response();
        };
        lines.push(NewJournalLine {
            account_id: line.account_id,
            debit,
            credit,
            memo: line.memo.clone(),
        });
    }

    let repo = ManualJournalRepository::new((*state.db).clone());
    let input = NewManualJournal {
        entity_id,
        journal_date: payload.date,
        description: payload.description,
        lines,
    };

    match repo.create_draft(input).await {
        Ok(result) => {
            info!(entity_id = %entity_id, journal_id = %result.journal.id, "Journal drafted");
            (
                StatusCode::CREATED,
                Json(JournalResponse::from_result(&result)),
            )
                .into_response()
        }
        Err(e) => journal_error_response(&e),
    }
}

/// GET `/entities/{entity_id}/journals/{journal_id}` - Fetch a journal.
async fn get_journal(
    State(state): State<AppState>,
    Path((entity_id, journal_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let repo = ManualJournalRepository::new((*state.db).clone());
    match repo.get_with_lines(entity_id, journal_id).await {
        Ok(result) => {
            (StatusCode::OK, Json(JournalResponse::from_result(&result))).into_response()
        }
        Err(e) => journal_error_response(&e),
    }
}

/// POST `/entities/{entity_id}/journals/{journal_id}/approve`.
async fn approve_journal(
    State(state): State<AppState>,
    Path((entity_id, journal_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let repo = ManualJournalRepository::new((*state.db).clone());
    match repo.approve(entity_id, journal_id).await {
        Ok(journal) => status_response(&journal),
        Err(e) => journal_error_response(&e),
    }
}

/// POST `/entities/{entity_id}/journals/{journal_id}/reject`.
async fn reject_journal(
    State(state): State<AppState>,
    Path((entity_id, journal_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let repo = ManualJournalRepository::new((*state.db).clone());
    match repo.reject(entity_id, journal_id).await {
        Ok(journal) => status_response(&journal),
        Err(e) => journal_error_response(&e),
    }
}

/// POST `/entities/{entity_id}/journals/{journal_id}/post`.
async fn post_journal(
    State(state): State<AppState>,
    Path((entity_id, journal_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let repo = ManualJournalRepository::new((*state.db).clone());
    match repo.post(entity_id, journal_id).await {
        Ok(result) => {
            info!(entity_id = %entity_id, journal_id = %journal_id, "Journal posted");
            (StatusCode::OK, Json(JournalResponse::from_result(&result))).into_response()
        }
        Err(e) => journal_error_response(&e),
    }
}

fn status_response(journal: &grootboek_db::entities::manual_journals::Model) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(json!({
            "id": journal.id,
            "status": ManualJournalStatus::from(&journal.status).to_string(),
        })),
    )
        .into_response()
}

fn journal_error_response(err: &ManualJournalError) -> axum::response::Response {
    match err {
        ManualJournalError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "journal_not_found",
                "message": err.to_string()
            })),
        )
            .into_response(),
        ManualJournalError::Journal(journal_err) => (
            StatusCode::from_u16(journal_err.http_status_code())
                .unwrap_or(StatusCode::UNPROCESSABLE_ENTITY),
            Json(json!({
                "error": journal_err.error_code(),
                "message": err.to_string()
            })),
        )
            .into_response(),
        ManualJournalError::AccountNotFound(_) | ManualJournalError::AccountInactive(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": "account_unavailable",
                "message": err.to_string()
            })),
        )
            .into_response(),
        ManualJournalError::Database(_) => {
            error!(error = %err, "Manual journal operation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred"
                })),
            )
                .into_response()
        }
    }
}
