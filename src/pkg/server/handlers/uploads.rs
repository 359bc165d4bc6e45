use axum::{
    Json,
    body::Bytes,
    extract::{
        Multipart, Query, State,
        multipart::MultipartRejection,
        rejection::QueryRejection,
    },
};
use serde::Deserialize;
use serde_json::{Value, json};
use validator::Validate;

use crate::{
    pkg::server::state::AppState,
    prelude::{AppError, Result},
};

#[derive(Deserialize, Validate)]
pub struct CvQuery {
    #[serde(rename = "userId")]
    #[validate(length(max = 128))]
    pub user_id: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct ResourceQuery {
    #[serde(rename = "fileName")]
    #[validate(length(max = 255))]
    pub file_name: Option<String>,
}

struct UploadedFile {
    file_name: Option<String>,
    data: Bytes,
}

/// First file part submitted under `field_name`. Plain text parts with the
/// same name do not count as a file.
async fn take_file(multipart: &mut Multipart, field_name: &str) -> Result<UploadedFile> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(field_name) || field.file_name().is_none() {
            continue;
        }
        let file_name = field.file_name().map(str::to_owned);
        let data = field.bytes().await?;
        return Ok(UploadedFile { file_name, data });
    }
    Err(AppError::NoFileProvided)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub async fn upload_cv(
    State(state): State<AppState>,
    query: std::result::Result<Query<CvQuery>, QueryRejection>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>> {
    let Query(query) = query?;
    query.validate()?;
    let mut multipart = multipart?;
    let file = take_file(&mut multipart, "CV").await?;
    let target = match non_blank(query.user_id) {
        Some(user_id) => format!("{}.pdf", user_id.trim()),
        None => file.file_name.unwrap_or_default(),
    };
    let path = state.cv_storage.persist(&target, &file.data).await?;
    tracing::info!("CV uploaded to {}", path.display());
    Ok(Json(json!({
        "success": true,
        "message": "CV uploaded successfully"
    })))
}

pub async fn upload_resource(
    State(state): State<AppState>,
    query: std::result::Result<Query<ResourceQuery>, QueryRejection>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>> {
    let Query(query) = query?;
    query.validate()?;
    let mut multipart = multipart?;
    let file = take_file(&mut multipart, "file").await?;
    let target = non_blank(query.file_name)
        .or(file.file_name)
        .unwrap_or_default();
    let path = state.resource_storage.persist(&target, &file.data).await?;
    tracing::info!("resource uploaded to {}", path.display());
    Ok(Json(json!({
        "success": true,
        "message": "File uploaded successfully."
    })))
}
