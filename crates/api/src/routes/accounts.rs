//! Chart-of-accounts routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::AppState;
use grootboek_db::{AccountRepository, EntityRepository};

/// Creates the account routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/entities/{entity_id}/accounts", get(list_accounts))
}

/// Response for one chart account.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    /// Account ID.
    pub id: Uuid,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    #[serde(rename = "type")]
    pub account_type: String,
    /// Running balance.
    pub balance: String,
    /// Whether the account accepts postings.
    pub is_active: bool,
}

/// GET `/entities/{entity_id}/accounts` - List the entity's chart.
async fn list_accounts(
    State(state): State<AppState>,
    Path(entity_id): Path<Uuid>,
) -> impl IntoResponse {
    let entity_repo = EntityRepository::new((*state.db).clone());
    match entity_repo.find_by_id(entity_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "entity_not_found",
                    "message": "Entity not found"
                })),
            )
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "Failed to load entity");
            return internal_error();
        }
    }

    let repo = AccountRepository::new((*state.db).clone());
    match repo.list_for_entity(entity_id).await {
        Ok(accounts) => {
            let items: Vec<AccountResponse> = accounts
                .into_iter()
                .map(|account| AccountResponse {
                    id: account.id,
                    code: account.code,
                    name: account.name,
                    account_type: grootboek_core::ledger::AccountType::from(&account.account_type)
                        .as_str()
                        .to_string(),
                    balance: account.balance.to_string(),
                    is_active: account.is_active,
                })
                .collect();

            (StatusCode::OK, Json(json!({ "accounts": items }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list accounts");
            internal_error()
        }
    }
}

fn internal_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": "An error occurred"
        })),
    )
        .into_response()
}
