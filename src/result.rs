//! Round result types for showdown.

/// Outcome of a completed round, from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player wins (dealer busts or the player holds the higher total).
    Win,
    /// Player loses (player busts or the dealer holds the higher total).
    Lose,
    /// Push (tie).
    Push,
}

/// Result of a round after showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
