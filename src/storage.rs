use crate::models::LedgerState;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

/// Loads the persisted ledger, falling back to the empty state when the file
/// is absent, unreadable, or does not parse as a complete `LedgerState`.
pub async fn load_state(path: &Path) -> LedgerState {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(state) => state,
            Err(err) => {
                error!("failed to parse data file: {err}");
                LedgerState::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => LedgerState::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            LedgerState::default()
        }
    }
}

pub async fn persist_state(path: &Path, state: &LedgerState) -> Result<(), std::io::Error> {
    let payload = serde_json::to_vec_pretty(state).map_err(std::io::Error::other)?;
    fs::write(path, payload).await?;
    Ok(())
}
