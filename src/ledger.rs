use crate::errors::LedgerError;
use crate::models::{LeaderSummary, LedgerState, Player, WeekResult};
use chrono::{Local, NaiveDate};

/// Records `winner` as this week's result, stamped with today's date.
pub fn register(state: &mut LedgerState, winner: Player) {
    register_at(state, winner, Local::now().date_naive())
}

/// Records `winner` under a label derived from the next sequence number and
/// the given date. Appends exactly one week and bumps exactly one total.
pub fn register_at(state: &mut LedgerState, winner: Player, date: NaiveDate) {
    let label = format!("Week {} ({date})", state.weeks.len() + 1);
    state.weeks.push(WeekResult { label, winner });
    let total = state.totals.of_mut(winner);
    *total = total.saturating_add(1);
}

/// Removes the most recent week and returns it, inverting the matching
/// `register` call. Fails on an empty ledger with the state untouched.
pub fn undo(state: &mut LedgerState) -> Result<WeekResult, LedgerError> {
    let last = state.weeks.pop().ok_or(LedgerError::EmptyLedger)?;
    // Floored at zero: repairs totals that were corrupted outside the ledger
    // instead of underflowing. Unreachable on a well-formed state.
    let total = state.totals.of_mut(last.winner);
    *total = total.saturating_sub(1);
    Ok(last)
}

/// Wipes the board back to the empty initial state. Irreversible; asking the
/// user first is the presentation layer's job.
pub fn reset(state: &mut LedgerState) {
    *state = LedgerState::default();
}

/// Classifies the current totals as no-wins, tie, or leader-with-margin.
pub fn leader_summary(state: &LedgerState) -> LeaderSummary {
    let (a, b) = (state.totals.a, state.totals.b);
    if a == 0 && b == 0 {
        LeaderSummary::NoWins
    } else if a == b {
        LeaderSummary::Tie { wins: a }
    } else {
        let player = if a > b { Player::A } else { Player::B };
        LeaderSummary::Leader {
            player,
            margin: a.abs_diff(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Totals;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 3).unwrap()
    }

    fn assert_totals_match_weeks(state: &LedgerState) {
        for player in [Player::A, Player::B] {
            let counted = state
                .weeks
                .iter()
                .filter(|week| week.winner == player)
                .count() as u64;
            assert_eq!(state.totals.of(player), counted);
        }
    }

    #[test]
    fn register_appends_and_counts() {
        let mut state = LedgerState::default();
        for winner in [Player::A, Player::B, Player::A, Player::A, Player::B] {
            register_at(&mut state, winner, date());
            assert_totals_match_weeks(&state);
        }
        assert_eq!(state.weeks.len(), 5);
        assert_eq!(state.totals, Totals { a: 3, b: 2 });
    }

    #[test]
    fn register_labels_carry_sequence_and_date() {
        let mut state = LedgerState::default();
        register_at(&mut state, Player::A, date());
        register_at(&mut state, Player::B, date());
        assert_eq!(state.weeks[0].label, "Week 1 (2026-08-03)");
        assert_eq!(state.weeks[1].label, "Week 2 (2026-08-03)");
    }

    #[test]
    fn undo_restores_prior_state() {
        let mut state = LedgerState::default();
        register_at(&mut state, Player::B, date());
        register_at(&mut state, Player::A, date());
        let before = state.clone();

        register_at(&mut state, Player::B, date());
        let removed = undo(&mut state).unwrap();

        assert_eq!(removed.winner, Player::B);
        assert_eq!(state, before);
    }

    #[test]
    fn undo_on_empty_ledger_fails_unchanged() {
        let mut state = LedgerState::default();
        assert_eq!(undo(&mut state), Err(LedgerError::EmptyLedger));
        assert_eq!(state, LedgerState::default());
    }

    #[test]
    fn undo_clamps_tampered_totals_at_zero() {
        let mut state = LedgerState::default();
        register_at(&mut state, Player::A, date());
        state.totals.a = 0;

        let removed = undo(&mut state).unwrap();
        assert_eq!(removed.winner, Player::A);
        assert_eq!(state, LedgerState::default());
    }

    #[test]
    fn reset_always_yields_empty_state() {
        let mut state = LedgerState::default();
        for _ in 0..4 {
            register_at(&mut state, Player::A, date());
        }
        reset(&mut state);
        assert_eq!(state, LedgerState::default());
    }

    #[test]
    fn scenario_register_three_then_undo() {
        let mut state = LedgerState::default();
        register_at(&mut state, Player::A, date());
        register_at(&mut state, Player::B, date());
        register_at(&mut state, Player::A, date());
        assert_eq!(state.weeks.len(), 3);
        assert_eq!(state.totals, Totals { a: 2, b: 1 });

        undo(&mut state).unwrap();
        assert_eq!(state.weeks.len(), 2);
        assert_eq!(state.totals, Totals { a: 1, b: 1 });
    }

    #[test]
    fn leader_summary_classifies_totals() {
        let mut state = LedgerState::default();
        assert_eq!(leader_summary(&state), LeaderSummary::NoWins);

        state.totals = Totals { a: 3, b: 3 };
        assert_eq!(leader_summary(&state), LeaderSummary::Tie { wins: 3 });

        state.totals = Totals { a: 5, b: 2 };
        assert_eq!(
            leader_summary(&state),
            LeaderSummary::Leader {
                player: Player::A,
                margin: 3
            }
        );

        state.totals = Totals { a: 1, b: 4 };
        assert_eq!(
            leader_summary(&state),
            LeaderSummary::Leader {
                player: Player::B,
                margin: 3
            }
        );
    }

    #[test]
    fn from_key_rejects_unknown_players() {
        assert_eq!(Player::from_key("a"), Ok(Player::A));
        assert_eq!(Player::from_key("b"), Ok(Player::B));
        assert_eq!(
            Player::from_key("c"),
            Err(LedgerError::UnknownPlayer("c".to_string()))
        );
        assert!(Player::from_key("A").is_err());
        assert!(Player::from_key("").is_err());
    }
}
