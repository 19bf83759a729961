// src/routes/mod.rs
pub mod chat;

use std::any::Any;

use crate::{
    error::AppError,
    message::{HealthStatus, RootMessage},
    state::SharedState,
};
use axum::{
    Json, Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chat::{chat_handler, manual_chat_handler};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    let api_routes = Router::new()
        .route("/chat", post(chat_handler))
        .route("/chat/manual", post(manual_chat_handler));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(panic_response)),
        )
}

async fn root_handler() -> Json<RootMessage> {
    Json(RootMessage {
        message: "Servidor do Chatbot está rodando!".to_string(),
    })
}

async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let context = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    AppError::Internal(context).into_response()
}
