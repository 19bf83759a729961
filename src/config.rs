//! Server configuration.

use std::time::Duration;

use anyhow::{Context, bail};
use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::services::chatbot::DelayRange;

/// Runtime configuration for the chat server.
#[derive(Clone, Debug)]
pub struct Config {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:3002").
    pub bind_addr: String,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
    /// Range of the simulated thinking delay.
    pub reply_delay: DelayRange,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3002".into(),
            cors_origins: Vec::new(),
            reply_delay: DelayRange::default(),
        }
    }
}

impl Config {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable               | Default        |
    /// |------------------------|----------------|
    /// | `BIND_ADDR`            | `0.0.0.0:3002` |
    /// | `CORS_ALLOWED_ORIGINS` | `*`            |
    /// | `REPLY_DELAY_MIN_MS`   | `500`          |
    /// | `REPLY_DELAY_MAX_MS`   | `1500`         |
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR").unwrap_or(defaults.bind_addr);

        let cors_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw),
            None => defaults.cors_origins,
        };

        let min = parse_millis(&lookup, "REPLY_DELAY_MIN_MS")?.unwrap_or(defaults.reply_delay.min);
        let max = parse_millis(&lookup, "REPLY_DELAY_MAX_MS")?.unwrap_or(defaults.reply_delay.max);
        if min > max {
            bail!("REPLY_DELAY_MIN_MS ({min:?}) is greater than REPLY_DELAY_MAX_MS ({max:?})");
        }

        Ok(Self {
            bind_addr,
            cors_origins,
            reply_delay: DelayRange { min, max },
        })
    }

    /// CORS layer for the configured origins. With no explicit origins every
    /// origin, method and header is allowed; do not ship that to production.
    pub fn cors_layer(&self) -> CorsLayer {
        if self.cors_origins.is_empty() {
            return CorsLayer::very_permissive();
        }

        let origins: Vec<HeaderValue> = self
            .cors_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(origin = %origin, error = %e, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

// "*" or an empty list means any origin.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect();
    if origins.iter().any(|o| o == "*") {
        Vec::new()
    } else {
        origins
    }
}

fn parse_millis<F>(lookup: &F, key: &str) -> anyhow::Result<Option<Duration>>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .with_context(|| format!("{key} must be a whole number of milliseconds, got {raw:?}"))
        })
        .transpose()
}
