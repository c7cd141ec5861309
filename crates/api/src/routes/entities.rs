//! Entity setup routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;
use tracing::{error, info};
use uuid::Uuid;

use crate::AppState;
use grootboek_core::coa::OwnershipForm;
use grootboek_db::repositories::entity::{EntitySetupError, SetupEntityInput};
use grootboek_db::EntityRepository;

/// Creates the entity routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/entities/setup", post(setup_entity))
}

/// Request body for setting up a new entity.
#[derive(Debug, Deserialize)]
pub struct SetupEntityRequest {
    /// Entity display name.
    pub name: String,
    /// Ownership form: sole | partnership | llc | corporation.
    pub ownership: String,
    /// Optional postal address.
    pub address: Option<String>,
    /// Optional fiscal year start month (1-12).
    pub fiscal_year_start_month: Option<i16>,
}

/// Response for a seeded account preview line.
#[derive(Debug, Serialize)]
pub struct AccountPreview {
    /// Account ID.
    pub id: Uuid,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    #[serde(rename = "type")]
    pub account_type: String,
}

/// POST `/entities/setup` - Create an entity with tax config and chart.
async fn setup_entity(
    State(state): State<AppState>,
    Json(payload): Json<SetupEntityRequest>,
) -> impl IntoResponse {
    if payload.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_name",
                "message": "Entity name must not be empty"
            })),
        )
            .into_response();
    }

    let Ok(ownership) = OwnershipForm::from_str(&payload.ownership) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_ownership_form",
                "message": format!("Unknown ownership form: {}", payload.ownership)
            })),
        )
            .into_response();
    };

    if let Some(month) = payload.fiscal_year_start_month {
        if !(1..=12).contains(&month) {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_fiscal_year_start",
                    "message": "Fiscal year start month must be between 1 and 12"
                })),
            )
                .into_response();
        }
    }

    let repo = EntityRepository::new((*state.db).clone());
    let input = SetupEntityInput {
        name: payload.name,
        ownership_form: ownership,
        address: payload.address,
        fiscal_year_start_month: payload.fiscal_year_start_month,
    };

    match repo.setup(input).await {
        Ok(setup) => {
            info!(
                entity_id = %setup.entity.id,
                ownership = %ownership,
                "Entity created"
            );

            let preview: Vec<AccountPreview> = setup
                .accounts
                .iter()
                .map(|account| AccountPreview {
                    id: account.id,
                    code: account.code.clone(),
                    name: account.name.clone(),
                    account_type: grootboek_core::ledger::AccountType::from(&account.account_type)
                        .as_str()
                        .to_string(),
                })
                .collect();

            (
                StatusCode::CREATED,
                Json(json!({
                    "entity": {
                        "id": setup.entity.id,
                        "name": setup.entity.name,
                        "ownership": ownership.as_str(),
                        "vat_rate": setup.tax_config.vat_rate.to_string(),
                    },
                    "accounts_preview": preview
                })),
            )
                .into_response()
        }
        Err(EntitySetupError::TemplateNotFound(form)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": "template_not_found",
                "message": format!("No chart-of-accounts template for ownership form '{form}'")
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to set up entity");
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
