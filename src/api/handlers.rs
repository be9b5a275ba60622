//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{debug, error, info, warn};

use crate::{
    effects,
    state::{AppState, Board},
    surface::Surface,
};
use super::responses::{
    CardPointerRequest, CountdownResponse, EffectResponse, HealthResponse, KeyRequest,
    PointerRequest, PrayersResponse, StatusResponse, VisibilityRequest,
};

/// Run an effect against the board, mapping lock failures to 500
fn apply_effect<F>(state: &AppState, effect: F) -> Result<bool, StatusCode>
where
    F: FnOnce(&mut Board) -> bool,
{
    state.with_board(effect).map_err(|e| {
        error!("Failed to apply effect: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// 404 unless the element exists
fn require_element(state: &AppState, id: &str) -> Result<(), StatusCode> {
    match state.with_board(|board| board.contains(id)) {
        Ok(true) => Ok(()),
        Ok(false) => {
            debug!("Unknown element: {}", id);
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            error!("Failed to look up element {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /board - Return the whole page model
pub async fn board_handler(State(state): State<Arc<AppState>>) -> Result<Json<Board>, StatusCode> {
    match state.get_board() {
        Ok(board) => Ok(Json(board)),
        Err(e) => {
            error!("Failed to get board: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /countdown - Countdown computed for the current instant
pub async fn countdown_handler(State(state): State<Arc<AppState>>) -> Json<CountdownResponse> {
    let result = state.current_countdown();
    Json(CountdownResponse::new(
        &result,
        state.settings.countdown.target(),
        &state.settings.arrived_label,
    ))
}

/// Handle GET /prayers - Prayer table with the current window
pub async fn prayers_handler(State(state): State<Arc<AppState>>) -> Json<PrayersResponse> {
    Json(PrayersResponse::new(&state.settings.prayers, state.current_prayer()))
}

/// Handle POST /pointer - Parallax on the moon
pub async fn pointer_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PointerRequest>,
) -> Result<Json<EffectResponse>, StatusCode> {
    let reduced_motion = state.settings.reduced_motion;
    let applied = apply_effect(&state, |board| {
        effects::apply_parallax(
            board,
            request.x,
            request.y,
            request.viewport_width,
            request.viewport_height,
            reduced_motion,
        )
    })?;
    Ok(Json(EffectResponse::new(applied)))
}

/// Handle POST /cards/:id/pointer - Hover glow inside a card
pub async fn card_pointer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<CardPointerRequest>,
) -> Result<Json<EffectResponse>, StatusCode> {
    require_element(&state, &id)?;
    let reduced_motion = state.settings.reduced_motion;
    let applied = apply_effect(&state, |board| {
        effects::apply_glow(board, &id, request.x, request.y, &request.rect, reduced_motion)
    })?;
    Ok(Json(EffectResponse::new(applied)))
}

/// Handle POST /cards/:id/visible - Scroll reveal
pub async fn card_visible_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<VisibilityRequest>,
) -> Result<Json<EffectResponse>, StatusCode> {
    require_element(&state, &id)?;

    let delay = match state.begin_reveal(&id, request.intersection_ratio) {
        Ok(delay) => delay,
        Err(e) => {
            error!("Failed to start reveal for {}: {}", id, e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let Some(delay) = delay else {
        return Ok(Json(EffectResponse::new(false)));
    };

    debug!("Revealing {} in {:?}", id, delay);
    let reveal_state = Arc::clone(&state);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if let Err(e) = reveal_state.finish_reveal(&id) {
            warn!("Failed to reveal {}: {}", id, e);
        }
    });

    Ok(Json(EffectResponse::new(true)))
}

/// Handle POST /elements/:id/key - Keyboard activation
pub async fn key_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<KeyRequest>,
) -> Result<Json<EffectResponse>, StatusCode> {
    require_element(&state, &id)?;
    let activated = apply_effect(&state, |board| effects::activate(board, &id, &request.key))?;
    if activated {
        info!("Element {} activated by key {:?}", id, request.key);
    }
    Ok(Json(EffectResponse::new(activated)))
}

/// Handle POST /elements/:id/click - Click, smooth-scrolling from the indicator
pub async fn click_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EffectResponse>, StatusCode> {
    require_element(&state, &id)?;
    let clicked = apply_effect(&state, |board| effects::click(board, &id))?;
    Ok(Json(EffectResponse::new(clicked)))
}

/// Handle GET /status - Return service status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_countdown_tick, last_prayer_tick) = state.get_last_ticks();
    let settings = &state.settings;

    Json(StatusResponse {
        target: settings.countdown.target(),
        countdown_period_ms: settings.countdown_period.as_millis() as u64,
        prayer_period_ms: settings.prayer_period.as_millis() as u64,
        last_countdown_tick,
        last_prayer_tick,
        reduced_motion: settings.reduced_motion,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
