use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use voya_store::ActivityLog;

use crate::error::AppError;
use crate::paging::Paging;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/activity", get(recent_activity))
        .route("/v1/activity/search", get(search_activity))
        .route("/v1/activity/user/{user}", get(user_activity))
}

async fn recent_activity(
    State(state): State<AppState>,
    Query(paging): Query<Paging>,
) -> Result<Json<Vec<ActivityLog>>, AppError> {
    Ok(Json(state.activity.recent(paging.skip, paging.take).await?))
}

#[derive(Debug, Deserialize)]
pub struct ActivitySearch {
    pub q: String,
}

async fn search_activity(
    State(state): State<AppState>,
    Query(query): Query<ActivitySearch>,
    Query(paging): Query<Paging>,
) -> Result<Json<Vec<ActivityLog>>, AppError> {
    Ok(Json(
        state
            .activity
            .search(&query.q, paging.skip, paging.take)
            .await?,
    ))
}

async fn user_activity(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Query(paging): Query<Paging>,
) -> Result<Json<Vec<ActivityLog>>, AppError> {
    Ok(Json(
        state
            .activity
            .for_user(&user, paging.skip, paging.take)
            .await?,
    ))
}
