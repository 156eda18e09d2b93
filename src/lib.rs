pub mod app;
pub mod board;
pub mod client;
pub mod errors;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use board::Scoreboard;
pub use client::ApiClient;
pub use state::AppState;
pub use storage::{load_state, resolve_data_path};
