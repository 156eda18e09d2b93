use crate::errors::LedgerError;
use serde::{Deserialize, Serialize};
use std::env;

/// The two participants, serialized as the lowercase keys `"a"` and `"b"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Parses a wire key. Anything other than `"a"` or `"b"` is rejected.
    pub fn from_key(key: &str) -> Result<Self, LedgerError> {
        match key {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            other => Err(LedgerError::UnknownPlayer(other.to_string())),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
        }
    }
}

/// One recorded week: who won it, under what display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekResult {
    pub label: String,
    pub winner: Player,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub a: u64,
    pub b: u64,
}

impl Totals {
    pub fn of(&self, player: Player) -> u64 {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }

    pub(crate) fn of_mut(&mut self, player: Player) -> &mut u64 {
        match player {
            Player::A => &mut self.a,
            Player::B => &mut self.b,
        }
    }
}

/// The whole scoreboard: the append-only week history plus derived totals.
///
/// Both fields are required when deserializing; persisted data missing either
/// one fails to parse and the loader falls back to the empty state instead of
/// reconstructing half an aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    pub weeks: Vec<WeekResult>,
    pub totals: Totals,
}

/// Classification of the current totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderSummary {
    NoWins,
    Tie { wins: u64 },
    Leader { player: Player, margin: u64 },
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub winner: String,
}

/// JSON body carried by every non-2xx API response. The `message` alias keeps
/// the client compatible with servers that use that field name instead.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(alias = "message")]
    pub error: String,
}

/// Display names for the two participants. Presentation-only; the persisted
/// model always speaks in `Player` keys.
#[derive(Debug, Clone)]
pub struct PlayerNames {
    pub a: String,
    pub b: String,
}

impl PlayerNames {
    pub fn from_env() -> Self {
        Self {
            a: env::var("PLAYER_A_NAME").unwrap_or_else(|_| "Player A".to_string()),
            b: env::var("PLAYER_B_NAME").unwrap_or_else(|_| "Player B".to_string()),
        }
    }

    pub fn of(&self, player: Player) -> &str {
        match player {
            Player::A => &self.a,
            Player::B => &self.b,
        }
    }
}
