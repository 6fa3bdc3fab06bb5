//! A console blackjack engine with persistent play statistics.
//!
//! The crate provides a [`Game`] type that manages one round at a time:
//! dealing, the player's hit/stand decisions, the dealer's fixed-threshold
//! play, and the final resolution. [`GameStats`] carries the cumulative
//! counters persisted between sessions as JSON.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Game, GameState};
//!
//! let mut game = Game::new(42);
//! game.deal().unwrap();
//! assert_eq!(game.state(), GameState::PlayerTurn);
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;
pub mod stats;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, ShowdownError, StatsError};
pub use game::{Game, GameState};
pub use hand::{DealerHand, Hand};
pub use result::{RoundOutcome, RoundResult};
pub use stats::GameStats;
