//! # ChatRS Widget API
//!
//! File: cli/src/commands/srv/api.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Routes behind the chat widget page:
//! - `GET /`: the embedded widget page
//! - `GET /api/settings`: bot name and thinking delay for the page
//! - `POST /api/chat`: one reply for `{"message": "..."}`
//!
//! ## Examples
//!
//! ```bash
//! curl -s localhost:8000/api/chat -H 'content-type: application/json' \
//!      -d '{"message": "Thanks!"}'
//! # {"reply":"You're welcome!","route":"fallback","category":"gratitude","normalized":"thanks"}
//! ```
//!
use chatrs::core::bot::BotProfile;
use chatrs::core::error::ChatrsError;
use chatrs::matcher::{MatchKind, Matcher};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

const INDEX_HTML: &str = include_str!("assets/index.html");

/// Shared, read-only state handed to every request.
#[derive(Debug)]
pub struct AppState {
    pub bot_name: String,
    pub thinking_delay_ms: u64,
    pub matcher: Matcher,
}

impl From<BotProfile> for AppState {
    fn from(profile: BotProfile) -> Self {
        Self {
            bot_name: profile.name,
            thinking_delay_ms: u64::try_from(profile.thinking_delay.as_millis()).unwrap_or(u64::MAX),
            matcher: profile.matcher,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub bot_name: String,
    pub thinking_delay_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(flatten)]
    pub route: MatchKind,
    pub normalized: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Builds the API router for `state`.
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/settings", get(settings))
        .route("/api/chat", post(chat))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn settings(State(state): State<Arc<AppState>>) -> Json<Settings> {
    Json(Settings {
        bot_name: state.bot_name.clone(),
        thinking_delay_ms: state.thinking_delay_ms,
    })
}

async fn chat(State(state): State<Arc<AppState>>, Json(request): Json<ChatRequest>) -> Response {
    if request.message.trim().is_empty() {
        let body = ErrorBody {
            error: ChatrsError::EmptyInput.to_string(),
        };
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }

    let reply = state.matcher.respond(&request.message);
    debug!("Widget message routed to {}", reply.kind);
    Json(ChatResponse {
        reply: reply.text,
        route: reply.kind,
        normalized: reply.normalized,
    })
    .into_response()
}
