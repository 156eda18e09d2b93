use crate::errors::{AppError, LedgerError};
use crate::ledger;
use crate::models::{LedgerState, Player, RegisterRequest};
use crate::state::AppState;
use crate::storage::persist_state;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let ledger = state.ledger.lock().await;
    Html(render_index(&state.names, &ledger))
}

pub async fn get_state(State(state): State<AppState>) -> Json<LedgerState> {
    let ledger = state.ledger.lock().await;
    Json(ledger.clone())
}

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<LedgerState>, AppError> {
    let winner = Player::from_key(payload.winner.trim())?;
    apply(&state, |next| {
        ledger::register(next, winner);
        Ok(())
    })
    .await
}

pub async fn undo(State(state): State<AppState>) -> Result<Json<LedgerState>, AppError> {
    apply(&state, |next| ledger::undo(next).map(|_| ())).await
}

pub async fn reset(State(state): State<AppState>) -> Result<Json<LedgerState>, AppError> {
    apply(&state, |next| {
        ledger::reset(next);
        Ok(())
    })
    .await
}

/// Runs a transition on a working copy, persists it, then commits it to the
/// shared state. A failure at any step leaves the observable state as it was.
async fn apply(
    state: &AppState,
    transition: impl FnOnce(&mut LedgerState) -> Result<(), LedgerError>,
) -> Result<Json<LedgerState>, AppError> {
    let mut ledger = state.ledger.lock().await;
    let mut next = ledger.clone();
    transition(&mut next)?;

    persist_state(&state.data_path, &next).await?;
    *ledger = next;

    Ok(Json(ledger.clone()))
}
