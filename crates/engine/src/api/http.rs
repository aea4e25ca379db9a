//! HTTP routes.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use pokedex_domain::{CompositeRecord, CreatureId};

use crate::app::App;
use crate::use_cases::catalog::{Navigation, PageLoadError, PageResult};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/pages", get(pagination_info))
        .route("/api/pages/{page}", get(get_page))
        .route("/api/creatures/{id}", get(get_creature))
        .route("/api/viewer", get(get_viewer))
        .route("/api/viewer/pages/{page}", put(load_viewer_page))
        .route("/api/viewer/{direction}", post(navigate_viewer))
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    size: Option<u32>,
}

// =============================================================================
// Pages
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaginationInfo {
    collection_size: u32,
    page_size: u32,
    max_page_size: u32,
    total_pages: u32,
}

async fn pagination_info(State(app): State<Arc<App>>) -> Json<PaginationInfo> {
    let settings = app.use_cases.catalog.page_loader.settings();
    Json(PaginationInfo {
        collection_size: settings.collection_size,
        page_size: settings.page_size,
        max_page_size: settings.max_page_size,
        total_pages: settings.collection_size.div_ceil(settings.page_size.max(1)),
    })
}

/// Stateless page aggregation; concurrent callers never supersede each other.
async fn get_page(
    State(app): State<Arc<App>>,
    Path(page): Path<u32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResult>, ApiError> {
    let window = app
        .use_cases
        .catalog
        .page_loader
        .window(page, query.size)?;
    let result = app.use_cases.catalog.aggregate_page.execute(window).await;
    Ok(Json(result))
}

async fn get_creature(
    State(app): State<Arc<App>>,
    Path(id): Path<u32>,
) -> Result<Json<CompositeRecord>, ApiError> {
    let id = CreatureId::within(id, app.config.catalog.collection_size)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let record = app
        .use_cases
        .catalog
        .aggregate_page
        .execute_one(id)
        .await
        .map_err(|skipped| {
            if skipped.error.is_not_found() {
                ApiError::NotFound
            } else {
                ApiError::BadGateway(skipped.reason)
            }
        })?;
    Ok(Json(record))
}

// =============================================================================
// Viewer (single displayed page)
// =============================================================================

async fn get_viewer(State(app): State<Arc<App>>) -> Result<Json<PageResult>, ApiError> {
    let displayed = app
        .use_cases
        .catalog
        .page_loader
        .displayed()
        .await
        .ok_or(ApiError::NotFound)?;
    Ok(Json(PageResult::clone(&displayed)))
}

async fn load_viewer_page(
    State(app): State<Arc<App>>,
    Path(page): Path<u32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResult>, ApiError> {
    let result = app
        .use_cases
        .catalog
        .page_loader
        .load_page(page, query.size)
        .await?;
    Ok(Json(PageResult::clone(&result)))
}

async fn navigate_viewer(
    State(app): State<Arc<App>>,
    Path(direction): Path<String>,
) -> Result<Json<PageResult>, ApiError> {
    let direction = parse_navigation(&direction)?;
    let result = app
        .use_cases
        .catalog
        .page_loader
        .navigate(direction)
        .await?;
    Ok(Json(PageResult::clone(&result)))
}

fn parse_navigation(value: &str) -> Result<Navigation, ApiError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "first" => Ok(Navigation::First),
        "previous" | "prev" => Ok(Navigation::Previous),
        "next" => Ok(Navigation::Next),
        "last" => Ok(Navigation::Last),
        _ => Err(ApiError::BadRequest("Unknown navigation direction".to_string())),
    }
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Conflict(String),
    BadGateway(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => {
                (axum::http::StatusCode::NOT_FOUND, "Not found").into_response()
            }
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Conflict(msg) => (axum::http::StatusCode::CONFLICT, msg).into_response(),
            ApiError::BadGateway(msg) => {
                (axum::http::StatusCode::BAD_GATEWAY, msg).into_response()
            }
        }
    }
}

impl From<PageLoadError> for ApiError {
    fn from(e: PageLoadError) -> Self {
        match e {
            PageLoadError::InvalidPage(_) => ApiError::BadRequest(e.to_string()),
            PageLoadError::Superseded { .. } => ApiError::Conflict(e.to_string()),
        }
    }
}
