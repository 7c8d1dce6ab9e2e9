//! HTTP endpoint handlers

use std::{convert::Infallible, sync::Arc};
use axum::{
    extract::State,
    response::{
        sse::{Event, KeepAlive, Sse},
        Json,
    },
};
use futures::stream::{self, Stream, StreamExt};
use tracing::info;

use crate::state::AppState;
use super::responses::{ApiResponse, HealthResponse, RunningRequest, StatusResponse};

/// Handle POST /start - Start counting
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    info!("Start endpoint called");
    Json(ApiResponse::running(state.set_running(true)))
}

/// Handle POST /pause - Stop counting, keep the elapsed time
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    info!("Pause endpoint called");
    Json(ApiResponse::running(state.set_running(false)))
}

/// Handle POST /running - Set the running flag from the request body
pub async fn running_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RunningRequest>,
) -> Json<ApiResponse> {
    info!("Running endpoint called with running={}", request.running);
    Json(ApiResponse::running(state.set_running(request.running)))
}

/// Handle POST /reset - Reset elapsed time to zero
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    info!("Reset endpoint called");
    Json(ApiResponse::reset(state.reset()))
}

/// Handle GET /status - Return current timer outputs
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let timer = state.snapshot();
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        running: timer.running,
        display_text: timer.display_text,
        reset_hidden: timer.reset_hidden,
        ticks: timer.ticks,
        tick_period_ms: state.timer.tick_period().as_millis() as u64,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /events - Stream output changes as server-sent events
///
/// The current value of each output is sent first, followed by every change.
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let outputs = state.timer.outputs();

    let mut current = vec![
        running_event(outputs.is_running.get()),
        display_event(outputs.display_text.get()),
    ];
    if let Some(hidden) = outputs.is_reset_hidden.get() {
        current.push(reset_hidden_event(Some(hidden)));
    }

    let changes = stream::select_all([
        outputs.is_running.into_stream().map(running_event).boxed(),
        outputs.display_text.into_stream().map(display_event).boxed(),
        outputs.is_reset_hidden.into_stream().map(reset_hidden_event).boxed(),
    ]);

    let events = stream::iter(current).chain(changes).map(Ok);
    Sse::new(events).keep_alive(KeepAlive::default())
}

fn running_event(running: bool) -> Event {
    Event::default().event("running").data(running.to_string())
}

fn display_event(text: String) -> Event {
    Event::default().event("display").data(text)
}

fn reset_hidden_event(hidden: Option<bool>) -> Event {
    Event::default()
        .event("reset_hidden")
        .data(serde_json::json!(hidden).to_string())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
