//! The master's HTTP surface (§4.C), bit-exact.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response as AxumResponse};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::store::Store;

/// Shared state for the master's HTTP handlers.
#[derive(Clone)]
pub struct MasterState {
    /// The specification store for this master's port.
    pub store: Arc<Store>,
    /// The port this master is bound to (used as the store's suffix).
    pub port: String,
}

/// Build the router serving `GET /<name>.yml`, `GET /`, `GET /ping`, and
/// `POST /<name>.yml`.
pub fn router(state: MasterState) -> Router {
    Router::new()
        .route("/", get(list_root))
        .route("/ping", get(ping))
        .route("/{name}", get(get_document).post(post_document))
        .with_state(state)
}

#[derive(Serialize)]
struct RootResponse {
    yamls: Vec<String>,
    masters: Vec<String>,
}

async fn list_root(State(state): State<MasterState>) -> AxumResponse {
    let Ok(yamls) = state.store.list(&state.port) else {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };
    let Ok(default_doc) = state.store.read("default.yml", &state.port) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let masters = match crate::document::parse(&default_doc) {
        Ok(doc) => doc.masters,
        Err(_) => Vec::new(),
    };
    Json(RootResponse { yamls, masters }).into_response()
}

async fn get_document(
    State(state): State<MasterState>,
    Path(name): Path<String>,
) -> AxumResponse {
    match state.store.read(&name, &state.port) {
        Ok(body) => ([("content-type", "text/plain; charset=utf8")], body).into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

#[derive(Deserialize)]
struct PingQuery {
    mynameis: String,
}

async fn ping(State(state): State<MasterState>, Query(query): Query<PingQuery>) -> AxumResponse {
    if let Err(e) = state.store.add_master(&[query.mynameis.clone()], &state.port) {
        warn!(error = %e, "ping add_master failed");
    }
    "Pong\n\n".into_response()
}

async fn post_document(
    State(state): State<MasterState>,
    Path(name): Path<String>,
    body: String,
) -> AxumResponse {
    if let Err(e) = crate::document::forbid_internal_fields(&body) {
        return (StatusCode::FORBIDDEN, e.to_string()).into_response();
    }

    match state.store.write(&name, &body, &state.port, &[], 0) {
        Ok(record) => {
            debug!(name, hash = %record.hash, "accepted deployment");
            "Successful deployment\n".into_response()
        }
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tempfile::tempdir;
    use tower::ServiceExt;

    fn test_state() -> (MasterState, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().to_path_buf()).unwrap();
        let body = "version: \"1\"\nservices:\n  hello:\n    ports:\n      - 80:80\n    containers:\n      - image: nginx\n        tag: latest\n";
        store.write("default.yml", body, "1207", &[], 0).unwrap();
        (
            MasterState {
                store: Arc::new(store),
                port: "1207".to_string(),
            },
            dir,
        )
    }

    #[tokio::test]
    async fn get_existing_document_returns_200() {
        let (state, _dir) = test_state();
        let app = router(state);
        let response = app
            .oneshot(Request::get("/default.yml").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn get_missing_document_returns_404() {
        let (state, _dir) = test_state();
        let app = router(state);
        let response = app
            .oneshot(Request::get("/nope.yml").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_with_hash_field_is_forbidden() {
        let (state, _dir) = test_state();
        let app = router(state);
        let response = app
            .oneshot(
                Request::post("/default.yml")
                    .body(Body::from("version: \"1\"\nhash: abc\n"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn root_lists_yamls_and_masters() {
        let (state, _dir) = test_state();
        let app = router(state);
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn ping_returns_pong() {
        let (state, _dir) = test_state();
        let app = router(state);
        let response = app
            .oneshot(
                Request::get("/ping?mynameis=peer:1207")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
