//! Game engine and state management.

use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::{DealerHand, Hand};
use crate::result::RoundOutcome;

mod actions;
mod dealer;
pub mod state;

pub use state::GameState;

/// A single-player blackjack round engine.
///
/// The game owns the deck, the player's hand, and the dealer's hand, and
/// steps through one round at a time: deal, player turn, dealer turn,
/// showdown. The flow is strictly sequential and single-threaded.
#[derive(Debug)]
pub struct Game {
    deck: Deck,
    player: Hand,
    dealer: DealerHand,
    state: GameState,
    /// Outcome recorded mid-round by a bust on either side. Set at most
    /// once per round; a recorded outcome is final.
    outcome: Option<RoundOutcome>,
}

impl Game {
    /// Creates a new game with a freshly shuffled deck from the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use twentyone::{Game, GameState};
    ///
    /// let mut game = Game::new(42);
    /// game.deal().unwrap();
    /// assert_eq!(game.state(), GameState::PlayerTurn);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            deck: Deck::new(seed),
            player: Hand::new(),
            dealer: DealerHand::new(),
            state: GameState::Ready,
            outcome: None,
        }
    }

    /// Deals the initial two cards each to the player and the dealer.
    ///
    /// Cards are dealt one at a time, alternating player and dealer. The
    /// dealer's second card stays masked until the player stands or busts.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Ready {
            return Err(DealError::InvalidState);
        }

        for _ in 0..2 {
            let card = self.deck.deal();
            self.player.add_card(card);
            let card = self.deck.deal();
            self.dealer.add_card(card);
        }

        self.state = GameState::PlayerTurn;
        Ok(())
    }

    /// Clears both hands and the recorded outcome for a new round.
    ///
    /// The deck carries over; it is not reshuffled between rounds.
    pub fn clear_round(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.outcome = None;
        self.state = GameState::Ready;
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Replaces the deck, typically with a stacked one built by
    /// [`Deck::from_cards`] to drive a known scenario.
    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }
}
