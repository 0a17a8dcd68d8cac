//! # Customer Routes
//!
//! One handler per endpoint, all with the same shape.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET /customers.blockById?id=42                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiQuery<IdQuery> ──► parse_id ── invalid ──► 400                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  state.db.customers().block_by_id(42)                                  │
//! │       │                                                                 │
//! │       ├── NotFound ──────────────────────────► 404                     │
//! │       ├── any other DbError ─────────────────► 500                     │
//! │       ▼                                                                 │
//! │  Json(customer) ─────────────────────────────► 200 application/json    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::debug;

use clientele_core::validation::{parse_id, parse_optional_id, validate_save};
use clientele_core::Customer;

use crate::error::ApiError;
use crate::extract::{ApiForm, ApiQuery};
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Query string of the id-based endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// Form body of `POST /customers.save`.
#[derive(Debug, Default, Deserialize)]
pub struct SaveForm {
    pub id: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Builds the application router around injected state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/customers.getById", get(get_by_id))
        .route("/customers.getAll", get(get_all))
        .route("/customers.getAllActive", get(get_all_active))
        .route("/customers.save", post(save))
        .route("/customers.removeById", get(remove_by_id))
        .route("/customers.blockById", get(block_by_id))
        .route("/customers.unblockById", get(unblock_by_id))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn get_by_id(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<IdQuery>,
) -> ApiResult<Customer> {
    let id = parse_id(query.id.as_deref())?;
    let customer = state.db.customers().by_id(id).await?;
    Ok(Json(customer))
}

async fn get_all(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Customer>> {
    let customers = state.db.customers().all().await?;
    Ok(Json(customers))
}

async fn get_all_active(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Customer>> {
    let customers = state.db.customers().all_active().await?;
    Ok(Json(customers))
}

async fn save(
    State(state): State<Arc<AppState>>,
    ApiForm(form): ApiForm<SaveForm>,
) -> ApiResult<Customer> {
    let id = parse_optional_id(form.id.as_deref())?;
    let input = validate_save(
        id,
        form.name.as_deref().unwrap_or_default(),
        form.phone.as_deref().unwrap_or_default(),
    )?;

    let customer = state.db.customers().save(&input).await?;
    debug!(id = customer.id, "Customer saved");
    Ok(Json(customer))
}

async fn remove_by_id(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<IdQuery>,
) -> ApiResult<Customer> {
    let id = parse_id(query.id.as_deref())?;
    let customer = state.db.customers().remove_by_id(id).await?;
    Ok(Json(customer))
}

async fn block_by_id(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<IdQuery>,
) -> ApiResult<Customer> {
    let id = parse_id(query.id.as_deref())?;
    let customer = state.db.customers().block_by_id(id).await?;
    Ok(Json(customer))
}

async fn unblock_by_id(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<IdQuery>,
) -> ApiResult<Customer> {
    let id = parse_id(query.id.as_deref())?;
    let customer = state.db.customers().unblock_by_id(id).await?;
    Ok(Json(customer))
}

async fn health(State(state): State<Arc<AppState>>) -> ApiResult<Value> {
    if !state.db.health_check().await {
        return Err(ApiError::unavailable("database health check failed"));
    }
    Ok(Json(json!({ "status": "ok" })))
}
