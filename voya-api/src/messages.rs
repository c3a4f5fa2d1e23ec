use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use voya_store::{CustomerInquiry, CustomerMessage, MessagePriority, MessageType};

use crate::error::AppError;
use crate::paging::Paging;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/inquiries", post(submit_inquiry).get(list_inquiries))
        .route("/v1/inquiries/{id}/reply", post(reply_inquiry))
        .route("/v1/messages", post(send_message))
        .route("/v1/messages/customer/{email}", get(customer_messages))
        .route(
            "/v1/messages/customer/{email}/unread-count",
            get(unread_count),
        )
        .route("/v1/messages/{id}/read", post(mark_read))
}

#[derive(Debug, Deserialize)]
pub struct SubmitInquiryRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub subject: String,
    pub message: String,
    pub booking_id: Option<u64>,
}

async fn submit_inquiry(
    State(state): State<AppState>,
    Json(req): Json<SubmitInquiryRequest>,
) -> Result<(StatusCode, Json<CustomerInquiry>), AppError> {
    if req.customer_email.trim().is_empty() || req.message.trim().is_empty() {
        return Err(AppError::validation(
            "customer_email and message must not be empty",
        ));
    }
    let inquiry = state
        .inquiries
        .submit(
            &req.customer_name,
            &req.customer_email,
            &req.subject,
            &req.message,
            req.booking_id,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(inquiry)))
}

async fn list_inquiries(
    State(state): State<AppState>,
    Query(paging): Query<Paging>,
) -> Result<Json<Vec<CustomerInquiry>>, AppError> {
    Ok(Json(state.inquiries.list(paging.skip, paging.take).await?))
}

#[derive(Debug, Deserialize)]
pub struct ReplyRequest {
    pub agent: String,
    pub reply: String,
}

async fn reply_inquiry(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<ReplyRequest>,
) -> Result<Json<CustomerInquiry>, AppError> {
    if req.reply.trim().is_empty() {
        return Err(AppError::validation("reply must not be empty"));
    }
    Ok(Json(state.inquiries.reply(id, &req.agent, &req.reply).await?))
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub sender_id: String,
    pub sender_name: String,
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
    pub message_type: MessageType,
    pub priority: MessagePriority,
    pub related_booking_id: Option<u64>,
}

async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<CustomerMessage>), AppError> {
    if req.recipient_email.trim().is_empty() {
        return Err(AppError::validation("recipient_email must not be empty"));
    }
    let message = state
        .messages
        .send(
            &req.sender_id,
            &req.sender_name,
            &req.recipient_email,
            &req.subject,
            &req.body,
            req.message_type,
            req.priority,
            req.related_booking_id,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(message)))
}

async fn customer_messages(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<CustomerMessage>>, AppError> {
    Ok(Json(state.messages.messages_for(&email).await?))
}

async fn unread_count(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Value>, AppError> {
    let count = state.messages.unread_count(&email).await?;
    Ok(Json(json!({ "unread": count })))
}

#[derive(Debug, Deserialize)]
pub struct MarkReadRequest {
    pub recipient_email: String,
}

async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<MarkReadRequest>,
) -> Result<Json<Value>, AppError> {
    let read = state.messages.mark_read(id, &req.recipient_email).await?;
    Ok(Json(json!({ "read": read })))
}
