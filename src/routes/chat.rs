use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::{SecondsFormat, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    message::{ChatRequest, ChatResponse},
    services::validator::{self, CleanMessage, ValidationError},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(payload) = payload?;
    let request_id = Uuid::new_v4();

    let message = validator::validate_field(payload.message.as_deref())
        .inspect_err(|e| log_rejection(&request_id, e))?;

    Ok(Json(reply(&state, request_id, payload.user_id.as_deref(), message).await))
}

/// Same exchange as [`chat_handler`], validated by the stricter manual
/// pipeline and reporting failures as 400.
pub async fn manual_chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(payload) = payload?;
    let request_id = Uuid::new_v4();

    let message = validator::validate_manual(payload.message.as_deref())
        .inspect_err(|e| log_rejection(&request_id, e))
        .map_err(|e| AppError::BadRequest(e.manual_reason()))?;

    Ok(Json(reply(&state, request_id, payload.user_id.as_deref(), message).await))
}

async fn reply(
    state: &SharedState,
    request_id: Uuid,
    user_id: Option<&str>,
    message: CleanMessage,
) -> ChatResponse {
    info!(%request_id, user_id = ?user_id, message = %message, "📨 message received");

    let result = state.engine.respond(&message).await;
    let processing_time = round_millis(result.elapsed.as_secs_f64());

    let preview: String = result.reply.chars().take(50).collect();
    info!(%request_id, reply = %preview, processing_time, "📤 reply sent");

    ChatResponse {
        reply: result.reply,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        message_length: message.char_len(),
        processing_time,
    }
}

fn log_rejection(request_id: &Uuid, err: &ValidationError) {
    warn!(%request_id, field = err.field(), reason = %err, "message rejected");
}

fn round_millis(secs: f64) -> f64 {
    (secs * 1000.0).round() / 1000.0
}
