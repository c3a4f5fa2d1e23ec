use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use voya_store::{Booking, BookingStatus};

use crate::error::AppError;
use crate::paging::Paging;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/bookings", post(create_booking).get(list_bookings))
        .route("/v1/bookings/user/{email}", get(user_bookings))
        .route("/v1/bookings/{id}", get(get_booking))
        .route("/v1/bookings/{id}/cancel", post(cancel_booking))
}

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub user_email: String,
    pub package_id: String,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub booking_id: u64,
    pub status: BookingStatus,
    pub total_price: rust_decimal::Decimal,
}

async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    if req.user_email.trim().is_empty() {
        return Err(AppError::validation("user_email must not be empty"));
    }

    let package = state.synthesizer.get_package_by_id(&req.package_id)?;
    let booking = state.bookings.create_booking(&req.user_email, package).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            booking_id: booking.id,
            status: booking.status,
            total_price: booking.total_price,
        }),
    ))
}

async fn list_bookings(
    State(state): State<AppState>,
    Query(paging): Query<Paging>,
) -> Result<Json<Vec<Booking>>, AppError> {
    Ok(Json(state.bookings.all_bookings(paging.skip, paging.take).await?))
}

async fn user_bookings(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Booking>>, AppError> {
    Ok(Json(state.bookings.user_bookings(&email).await?))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Booking>, AppError> {
    let booking = state
        .bookings
        .booking(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;
    Ok(Json(booking))
}

#[derive(Debug, Deserialize)]
pub struct CancelBookingRequest {
    pub user_email: String,
}

async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<CancelBookingRequest>,
) -> Result<Json<Value>, AppError> {
    let cancelled = state.bookings.cancel_booking(id, &req.user_email).await?;
    Ok(Json(json!({ "cancelled": cancelled })))
}
