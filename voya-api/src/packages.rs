use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use voya_package::TravelPackage;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/packages/search", get(search_packages))
        .route("/v1/packages/{id}", get(get_package))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
}

async fn search_packages(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<TravelPackage>>, AppError> {
    tracing::info!(
        origin = %query.origin,
        destination = %query.destination,
        departure = %query.departure_date,
        "package search"
    );
    let packages = state
        .synthesizer
        .search_packages(
            &query.origin,
            &query.destination,
            query.departure_date,
            query.return_date,
        )
        .await?;
    Ok(Json(packages))
}

async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TravelPackage>, AppError> {
    let package = state.synthesizer.get_package_by_id(&id)?;
    Ok(Json(package))
}
