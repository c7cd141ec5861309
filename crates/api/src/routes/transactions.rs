//! Transaction recording routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;
use tracing::{error, info};
use uuid::Uuid;

use crate::AppState;
use grootboek_core::mapping::TransactionKind;
use grootboek_db::RecordingRepository;
use grootboek_db::repositories::recording::{RecordTransactionInput, RecordingError};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/entities/{entity_id}/transactions",
        post(record_transaction),
    )
}

/// Request body for recording a transaction.
#[derive(Debug, Deserialize)]
pub struct RecordTransactionRequest {
    /// Semantic transaction type.
    #[serde(rename = "type")]
    pub txn_type: String,
    /// Amount as a decimal string (must be positive).
    pub amount: String,
    /// Transaction date (YYYY-MM-DD).
    pub date: NaiveDate,
    /// Description.
    pub description: String,
}

/// Response for a posted journal entry.
#[derive(Debug, Serialize)]
pub struct JournalResponse {
    /// Entry ID.
    pub id: Uuid,
    /// Entry date.
    pub entry_date: String,
    /// Debited account ID.
    pub debit_account_id: Uuid,
    /// Credited account ID.
    pub credit_account_id: Uuid,
    /// Entry amount.
    pub amount: String,
    /// Entry memo.
    pub memo: String,
}

impl JournalResponse {
    fn from_model(entry: &grootboek_db::entities::journal_entries::Model) -> Self {
        Self {
            id: entry.id,
            entry_date: entry.entry_date.to_string(),
            debit_account_id: entry.debit_account_id,
            credit_account_id: entry.credit_account_id,
            amount: entry.amount.to_string(),
            memo: entry.memo.clone(),
        }
    }
}

/// POST `/entities/{entity_id}/transactions` - Record a business transaction.
async fn record_transaction(
    State(state): State<AppState>,
    Path(entity_id): Path<Uuid>,
    Json(payload): Json<RecordTransactionRequest>,
) -> impl IntoResponse {
    // Unknown type strings never reach the mapping table.
    let Ok(kind) = TransactionKind::from_str(&payload.txn_type) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "unknown_transaction_type",
                "message": format!("Unknown transaction type: {}", payload.txn_type)
            })),
        )
            .into_response();
    };

    let amount = match Decimal::from_str(&payload.amount) {
        Ok(amount) if amount > Decimal::ZERO => amount,
        Ok(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_amount",
                    "message": "Amount must be positive"
                })),
            )
                .into_response();
        }
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_amount",
                    "message": "Invalid amount format"
                })),
            )
                .into_response();
        }
    };

    if payload.description.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_description",
                "message": "Description must not be empty"
            })),
        )
            .into_response();
    }

    let repo = RecordingRepository::new((*state.db).clone());
    let input = RecordTransactionInput {
        entity_id,
        kind,
        amount,
        txn_date: payload.date,
        description: payload.description,
    };

    match repo.record(input).await {
        Ok(recorded) => {
            info!(
                entity_id = %entity_id,
                transaction_id = %recorded.transaction.id,
                kind = %kind,
                "Transaction recorded"
            );

            (
                StatusCode::CREATED,
                Json(json!({
                    "transaction": {
                        "id": recorded.transaction.id,
                        "type": kind.as_str(),
                        "amount": recorded.transaction.amount.to_string(),
                        "date": recorded.transaction.txn_date.to_string(),
                        "description": recorded.transaction.description,
                        "apply_vat": recorded.transaction.apply_vat,
                    },
                    "suggested": {
                        "debit": {
                            "id": recorded.debit_account.id,
                            "code": recorded.debit_account.code,
                            "name": recorded.debit_account.name,
                        },
                        "credit": {
                            "id": recorded.credit_account.id,
                            "code": recorded.credit_account.code,
                            "name": recorded.credit_account.name,
                        },
                    },
                    "journal": JournalResponse::from_model(&recorded.journal),
                    "vat_amount": recorded.vat_amount.map(|v| v.to_string()),
                    "vat_journal": recorded.vat_journal.as_ref().map(JournalResponse::from_model),
                })),
            )
                .into_response()
        }
        Err(e) => recording_error_response(&e),
    }
}

/// Maps recording errors onto the API error taxonomy: 400 for malformed
/// input, 404 for unknown entities, 422 for seed/config drift, 500 for
/// the rest.
fn recording_error_response(err: &RecordingError) -> axum::response::Response {
    match err {
        RecordingError::InvalidAmount(_) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_amount",
                "message": err.to_string()
            })),
        )
            .into_response(),
        RecordingError::EntityNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "entity_not_found",
                "message": err.to_string()
            })),
        )
            .into_response(),
        RecordingError::Mapping(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": "mapping_unavailable",
                "message": err.to_string()
            })),
        )
            .into_response(),
        RecordingError::Account(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": "account_not_seeded",
                "message": err.to_string()
            })),
        )
            .into_response(),
        RecordingError::TaxConfigMissing(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": "tax_config_missing",
                "message": err.to_string()
            })),
        )
            .into_response(),
        RecordingError::Posting(_) | RecordingError::Database(_) => {
            error!(error = %err, "Failed to record transaction");
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

#[cfg(test)]
mod tests {
    use super::*;
    use grootboek_db::repositories::account::AccountError;
    use grootboek_db::repositories::mapping::MappingError;
    use rstest::rstest;

    #[rstest]
    #[case::invalid_amount(
        RecordingError::InvalidAmount(Decimal::ZERO),
        StatusCode::BAD_REQUEST
    )]
    #[case::entity_missing(
        RecordingError::EntityNotFound(Uuid::nil()),
        StatusCode::NOT_FOUND
    )]
    #[case::mapping_missing(
        RecordingError::Mapping(MappingError::NotFound(TransactionKind::SaleCash)),
        StatusCode::UNPROCESSABLE_ENTITY
    )]
    #[case::mapping_inactive(
        RecordingError::Mapping(MappingError::Inactive(TransactionKind::SaleCredit)),
        StatusCode::UNPROCESSABLE_ENTITY
    )]
    #[case::code_not_seeded(
        RecordingError::Account(AccountError::CodeNotSeeded {
            entity_id: Uuid::nil(),
            code: "1001".to_string(),
        }),
        StatusCode::UNPROCESSABLE_ENTITY
    )]
    #[case::tax_config_missing(
        RecordingError::TaxConfigMissing(Uuid::nil()),
        StatusCode::UNPROCESSABLE_ENTITY
    )]
    fn test_recording_error_status(#[case] err: RecordingError, #[case] expected: StatusCode) {
        assert_eq!(recording_error_response(&err).status(), expected);
    }
}
