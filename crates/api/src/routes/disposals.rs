//! Fixed-asset disposal routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use std::str::FromStr;
use tracing::{error, info};
use uuid::Uuid;

use crate::AppState;
use grootboek_core::asset::{DisposalError, DisposalMethod};
use grootboek_db::DisposalRepository;
use grootboek_db::repositories::disposal::{DisposalRepoError, DisposeAssetInput};

/// Creates the disposal routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/entities/{entity_id}/assets/{asset_id}/disposal",
        post(dispose_asset),
    )
}

/// Request body for disposing an asset.
#[derive(Debug, Deserialize)]
pub struct DisposeAssetRequest {
    /// Selling price as a decimal string (zero for scrapping).
    pub selling_price: String,
    /// Disposal date (YYYY-MM-DD).
    pub disposal_date: NaiveDate,
    /// Settlement method: cash | credit.
    pub method: String,
}

/// POST `/entities/{entity_id}/assets/{asset_id}/disposal` - Dispose an asset.
async fn dispose_asset(
    State(state): State<AppState>,
    Path((entity_id, asset_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<DisposeAssetRequest>,
) -> impl IntoResponse {
    let Ok(method) = DisposalMethod::from_str(&payload.method) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_method",
                "message": format!("Unknown disposal method: {}", payload.method)
            })),
        )
            .into_response();
    };

    let selling_price = match Decimal::from_str(&payload.selling_price) {
        Ok(price) if price >= Decimal::ZERO => price,
        Ok(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_selling_price",
                    "message": "Selling price cannot be negative"
                })),
            )
                .into_response();
        }
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_selling_price",
                    "message": "Invalid selling price format"
                })),
            )
                .into_response();
        }
    };

    let repo = DisposalRepository::new((*state.db).clone());
    let input = DisposeAssetInput {
        entity_id,
        asset_id,
        disposal_date: payload.disposal_date,
        selling_price,
        method,
    };

    match repo.dispose(input).await {
        Ok(outcome) => {
            info!(
                entity_id = %entity_id,
                asset_id = %asset_id,
                profit_loss = %outcome.plan.profit_loss,
                "Asset disposed"
            );

            (
                StatusCode::CREATED,
                Json(json!({
                    "result": "ok",
                    "profit_loss": outcome.plan.profit_loss.to_string(),
                    "net_book_value": outcome.plan.net_book_value.to_string(),
                    "total_depreciation": outcome.plan.total_depreciation.to_string(),
                    "disposal": {
                        "id": outcome.disposal.id,
                        "asset_id": outcome.disposal.asset_id,
                        "disposal_date": outcome.disposal.disposal_date.to_string(),
                        "selling_price": outcome.disposal.selling_price.to_string(),
                        "journal_entry_id": outcome.disposal.journal_entry_id,
                    }
                })),
            )
                .into_response()
        }
        Err(e) => disposal_error_response(&e),
    }
}

fn disposal_error_response(err: &DisposalRepoError) -> axum::response::Response {
    match err {
        DisposalRepoError::Disposal(DisposalError::AssetNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "asset_not_found",
                "message": err.to_string()
            })),
        )
            .into_response(),
        DisposalRepoError::Disposal(DisposalError::NegativeSellingPrice(_)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_selling_price",
                "message": err.to_string()
            })),
        )
            .into_response(),
        DisposalRepoError::Disposal(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": "disposal_rejected",
                "message": err.to_string()
            })),
        )
            .into_response(),
        DisposalRepoError::Mapping(_) | DisposalRepoError::Account(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": "configuration_drift",
                "message": err.to_string()
            })),
        )
            .into_response(),
        DisposalRepoError::Posting(_) | DisposalRepoError::Database(_) => {
            error!(error = %err, "Failed to dispose asset");
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
    use rstest::rstest;

    #[rstest]
    #[case::asset_missing(DisposalError::AssetNotFound(Uuid::nil()), StatusCode::NOT_FOUND)]
    #[case::already_disposed(
        DisposalError::AlreadyDisposed(Uuid::nil()),
        StatusCode::UNPROCESSABLE_ENTITY
    )]
    #[case::negative_price(
        DisposalError::NegativeSellingPrice(Decimal::NEGATIVE_ONE),
        StatusCode::BAD_REQUEST
    )]
    fn test_disposal_error_status(#[case] err: DisposalError, #[case] expected: StatusCode) {
        let response = disposal_error_response(&DisposalRepoError::Disposal(err));
        assert_eq!(response.status(), expected);
    }
}
