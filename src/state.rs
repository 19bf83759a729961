// src/state.rs
use std::sync::Arc;

use crate::services::chatbot::{DelayRange, ReplyEngine};

pub type SharedState = Arc<AppState>;

// Read-only per process; requests share nothing mutable.
pub struct AppState {
    pub engine: ReplyEngine,
}

impl AppState {
    pub fn new(reply_delay: DelayRange) -> Self {
        Self {
            engine: ReplyEngine::new(reply_delay),
        }
    }
}
