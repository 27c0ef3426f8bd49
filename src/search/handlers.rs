use super::engine;
use super::types::{ErrorBody, ReloadResponse, SearchParams};
use crate::config::ServerConfig;
use crate::directory::loader;
use crate::directory::store::SnapshotStore;
use crate::error::QueryError;
use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use std::sync::Arc;

/// Builds the full route table. Shared by `main` and the end-to-end tests.
pub fn router(store: Arc<SnapshotStore>, config: Arc<ServerConfig>) -> Router {
    Router::new()
        .route("/user/:login", get(handle_lookup))
        .route("/compl", get(handle_search))
        .route("/reload", post(handle_reload))
        .fallback(handle_unknown_route)
        .layer(Extension(store))
        .layer(Extension(config))
}

pub async fn handle_lookup(
    Path(login): Path<String>,
    headers: HeaderMap,
    Extension(store): Extension<Arc<SnapshotStore>>,
) -> Response {
    let snapshot = store.current();
    match snapshot.lookup_by_login(&login) {
        Some(record) => (StatusCode::OK, Json(record.clone())).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "not_found", &headers),
    }
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
    Extension(store): Extension<Arc<SnapshotStore>>,
    Extension(config): Extension<Arc<ServerConfig>>,
) -> Response {
    let raw_query = params.q.unwrap_or_default();
    let limit = params
        .limit
        .unwrap_or(config.result_limit)
        .min(config.result_limit);

    let snapshot = store.current();
    match engine::search(&snapshot, &raw_query, limit) {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(QueryError::BadQuery) => {
            error_response(StatusCode::BAD_REQUEST, "bad_request", &headers)
        }
    }
}

/// Rebuilds the snapshot from the record file and publishes it atomically.
/// On any failure the previous snapshot keeps serving.
pub async fn handle_reload(
    headers: HeaderMap,
    Extension(store): Extension<Arc<SnapshotStore>>,
    Extension(config): Extension<Arc<ServerConfig>>,
) -> Response {
    let records = match loader::load_records(&config.records_path) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Reload failed to read records: {:#}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "reload_failed", &headers);
        }
    };

    match store.replace(records) {
        Ok(snapshot) => {
            tracing::info!(
                "Published snapshot v{} with {} records",
                snapshot.version(),
                snapshot.len()
            );
            (
                StatusCode::OK,
                Json(ReloadResponse {
                    records: snapshot.len(),
                    version: snapshot.version(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Reload failed to build snapshot: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "reload_failed", &headers)
        }
    }
}

pub async fn handle_unknown_route(headers: HeaderMap) -> Response {
    error_response(StatusCode::NOT_FOUND, "not_found", &headers)
}

/// Error bodies are content-negotiated: JSON unless the client's `Accept`
/// asks for something else. Success bodies are always JSON.
fn error_response(status: StatusCode, code: &'static str, headers: &HeaderMap) -> Response {
    if wants_json(headers) {
        (
            status,
            Json(ErrorBody {
                error: code.to_string(),
            }),
        )
            .into_response()
    } else {
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            code,
        )
            .into_response()
    }
}

fn wants_json(headers: &HeaderMap) -> bool {
    match headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) {
        Some(accept) => accept.contains("json") || accept.contains("*/*"),
        None => true,
    }
}
