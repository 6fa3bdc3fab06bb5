//! Game state types.

/// Game state.
///
/// A round steps `Ready → PlayerTurn → DealerTurn → RoundOver`; a player
/// bust short-circuits straight from `PlayerTurn` to `RoundOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Ready to deal the next round.
    Ready,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the result can be resolved.
    RoundOver,
}
