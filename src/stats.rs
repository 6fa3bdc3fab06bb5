//! Cumulative play statistics, persisted between sessions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::result::{RoundOutcome, RoundResult};

/// Play statistics carried across sessions.
///
/// The JSON key names match the field names and stay stable across
/// save/load cycles; keys missing from an older or hand-edited file load
/// as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Rounds started.
    #[serde(default)]
    pub total_games: u64,
    /// Rounds won by the player.
    #[serde(default)]
    pub total_wins: u64,
    /// Rounds lost by the player.
    #[serde(default)]
    pub total_losses: u64,
    /// Rounds that ended in a tie.
    #[serde(default)]
    pub total_ties: u64,
    /// Losses where the player busted.
    #[serde(default)]
    pub player_busts: u64,
    /// Wins where the dealer busted.
    #[serde(default)]
    pub dealer_busts: u64,
}

impl GameStats {
    /// Counts a round as started.
    ///
    /// Called exactly once per round, before dealing.
    pub fn start_round(&mut self) {
        self.total_games += 1;
    }

    /// Records the outcome of a completed round.
    ///
    /// Exactly one of wins, losses, and ties is incremented per call; the
    /// bust counters accompany the loss or win they caused.
    pub fn record(&mut self, result: &RoundResult) {
        match result.outcome {
            RoundOutcome::Win => {
                self.total_wins += 1;
                if result.dealer_bust {
                    self.dealer_busts += 1;
                }
            }
            RoundOutcome::Lose => {
                self.total_losses += 1;
                if result.player_bust {
                    self.player_busts += 1;
                }
            }
            RoundOutcome::Push => self.total_ties += 1,
        }
    }

    /// Serializes the statistics to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes statistics from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Loads statistics from a file.
    ///
    /// A missing file surfaces as an [`std::io::ErrorKind::NotFound`] error;
    /// callers usually fall back to [`GameStats::default`] in that case.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StatsError> {
        let json = fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }

    /// Saves statistics to a file, overwriting any previous contents.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StatsError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::GameStats;
    use crate::result::{RoundOutcome, RoundResult};

    fn result(outcome: RoundOutcome, player_bust: bool, dealer_bust: bool) -> RoundResult {
        RoundResult {
            outcome,
            player_value: 0,
            dealer_value: 0,
            player_bust,
            dealer_bust,
        }
    }

    #[test]
    fn record_increments_exactly_one_outcome_counter() {
        let mut stats = GameStats::default();

        stats.record(&result(RoundOutcome::Win, false, false));
        stats.record(&result(RoundOutcome::Lose, false, false));
        stats.record(&result(RoundOutcome::Push, false, false));

        assert_eq!(stats.total_wins, 1);
        assert_eq!(stats.total_losses, 1);
        assert_eq!(stats.total_ties, 1);
        assert_eq!(stats.total_wins + stats.total_losses + stats.total_ties, 3);
        assert_eq!(stats.player_busts, 0);
        assert_eq!(stats.dealer_busts, 0);
    }

    #[test]
    fn bust_counters_accompany_their_outcome() {
        let mut stats = GameStats::default();

        stats.record(&result(RoundOutcome::Lose, true, false));
        assert_eq!(stats.total_losses, 1);
        assert_eq!(stats.player_busts, 1);

        stats.record(&result(RoundOutcome::Win, false, true));
        assert_eq!(stats.total_wins, 1);
        assert_eq!(stats.dealer_busts, 1);
    }

    #[test]
    fn json_keys_are_stable() {
        let mut stats = GameStats::default();
        stats.start_round();
        let json = stats.to_json().unwrap();

        for key in [
            "total_games",
            "total_wins",
            "total_losses",
            "total_ties",
            "player_busts",
            "dealer_busts",
        ] {
            assert!(json.contains(key), "missing key {key}");
        }
        assert!(json.contains("\"total_games\": 1"));
    }

    #[test]
    fn json_round_trip_preserves_counters() {
        let stats = GameStats {
            total_games: 10,
            total_wins: 4,
            total_losses: 3,
            total_ties: 3,
            player_busts: 2,
            dealer_busts: 1,
        };
        let restored = GameStats::from_json(&stats.to_json().unwrap()).unwrap();
        assert_eq!(restored, stats);
    }

    #[test]
    fn missing_keys_default_to_zero() {
        let stats = GameStats::from_json("{\"total_games\": 5}").unwrap();
        assert_eq!(stats.total_games, 5);
        assert_eq!(stats.total_wins, 0);
        assert_eq!(stats.dealer_busts, 0);
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = std::env::temp_dir().join("twentyone_stats_test.json");
        let stats = GameStats {
            total_games: 2,
            total_wins: 1,
            total_losses: 1,
            ..GameStats::default()
        };

        stats.save(&path).unwrap();
        let restored = GameStats::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(restored, stats);
    }
}
