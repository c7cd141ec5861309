//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod accounts;
pub mod disposals;
pub mod entities;
pub mod health;
pub mod journals;
pub mod transactions;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(entities::routes())
        .merge(accounts::routes())
        .merge(transactions::routes())
        .merge(disposals::routes())
        .merge(journals::routes())
}
