use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Serialize;

use crate::{
    pkg::{
        internal::search::{
            SearchRequest,
            filter::build_query,
            pagination::{JobPage, PageRequest, paginate},
        },
        server::state::AppState,
    },
    prelude::Result,
};

#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(flatten)]
    pub page: JobPage,
}

pub async fn find_jobs_home(
    State(state): State<AppState>,
    req: std::result::Result<Query<SearchRequest>, QueryRejection>,
) -> Result<Json<SearchResponse>> {
    let Query(req) = req?;
    let query = build_query(&req)?;
    let page = PageRequest::from_request(&req);
    tracing::debug!("searching jobs: {:?}, {:?}", &query, &page);
    let page = paginate(&*state.jobs, &query, page, state.settings.pagination_mode).await?;
    Ok(Json(SearchResponse { success: true, page }))
}
