use std::{path::Path, sync::Arc};

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::Value;
use tower::ServiceExt;

use crate::{
    conf::Settings,
    pkg::internal::{adaptors::jobs::JobStore, search::pagination::PaginationMode},
};

use super::{router::build_routes, state::AppState};

pub const BOUNDARY: &str = "jobboard-test-boundary";

pub fn test_state(
    store: Arc<dyn JobStore>,
    dir: &Path,
    pagination_mode: PaginationMode,
) -> AppState {
    let settings = Settings {
        service_name: "jobboard-test".into(),
        listen_port: 0,
        database_url: "postgres://unused".into(),
        database_pool_max_connections: 1,
        cv_dir: dir.join("CVs").display().to_string(),
        resources_dir: dir.join("applicationresumes").display().to_string(),
        body_limit_mb: 1,
        pagination_mode,
    };
    AppState::with_store(settings, store)
}

pub async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = build_routes(state).oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

pub async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    let (status, body) = send(state, request).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

/// A multipart part: field name, optional file name, content.
pub type Part<'a> = (&'a str, Option<&'a str>, &'a [u8]);

pub fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    let mut body = Vec::new();
    for (name, file_name, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match file_name {
            Some(file_name) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
            ),
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    Request::post(uri)
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap()
}
