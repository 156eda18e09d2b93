use crate::models::{LedgerState, PlayerNames};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub names: PlayerNames,
    pub ledger: Arc<Mutex<LedgerState>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, names: PlayerNames, state: LedgerState) -> Self {
        Self {
            data_path,
            names,
            ledger: Arc::new(Mutex::new(state)),
        }
    }
}
