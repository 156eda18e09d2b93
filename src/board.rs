use crate::client::{ApiClient, ApiError};
use crate::errors::LedgerError;
use crate::ledger;
use crate::models::{LedgerState, Player};
use crate::storage::{load_state, persist_state};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}

enum Backend {
    Local { path: PathBuf },
    Remote(ApiClient),
}

/// A scoreboard handle over either backing store, chosen at construction.
///
/// The local variant owns the authoritative state and writes it through to
/// disk; the remote variant treats the server as the source of truth and
/// keeps the last state it returned. Either way, a failed operation leaves
/// the held state at its last known value.
pub struct Scoreboard {
    backend: Backend,
    state: LedgerState,
}

impl Scoreboard {
    /// Opens a scoreboard persisted in a local JSON file, recovering to the
    /// empty state when no usable file exists.
    pub async fn open_local(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = load_state(&path).await;
        Self {
            backend: Backend::Local { path },
            state,
        }
    }

    /// Connects to a remote scoreboard server. The held state starts empty;
    /// call [`Scoreboard::refresh`] to pull the server's current state.
    pub fn connect(base_url: impl Into<String>) -> Self {
        Self {
            backend: Backend::Remote(ApiClient::new(base_url)),
            state: LedgerState::default(),
        }
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    pub async fn refresh(&mut self) -> Result<&LedgerState, BoardError> {
        if let Backend::Remote(client) = &self.backend {
            self.state = client.state().await?;
        }
        Ok(&self.state)
    }

    pub async fn register(&mut self, winner: Player) -> Result<&LedgerState, BoardError> {
        match &self.backend {
            Backend::Local { path } => {
                let mut next = self.state.clone();
                ledger::register(&mut next, winner);
                persist_state(path, &next).await?;
                self.state = next;
            }
            Backend::Remote(client) => {
                self.state = client.register(winner.key()).await?;
            }
        }
        Ok(&self.state)
    }

    pub async fn undo(&mut self) -> Result<&LedgerState, BoardError> {
        match &self.backend {
            Backend::Local { path } => {
                let mut next = self.state.clone();
                ledger::undo(&mut next)?;
                persist_state(path, &next).await?;
                self.state = next;
            }
            Backend::Remote(client) => {
                self.state = client.undo().await?;
            }
        }
        Ok(&self.state)
    }

    pub async fn reset(&mut self) -> Result<&LedgerState, BoardError> {
        match &self.backend {
            Backend::Local { path } => {
                let mut next = self.state.clone();
                ledger::reset(&mut next);
                persist_state(path, &next).await?;
                self.state = next;
            }
            Backend::Remote(client) => {
                self.state = client.reset().await?;
            }
        }
        Ok(&self.state)
    }
}
