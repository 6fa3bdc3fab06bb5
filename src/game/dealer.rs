use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, GameState};

/// The dealer draws until reaching this total.
const DEALER_STANDS_AT: u8 = 17;

impl Game {
    /// Dealer plays out their hand.
    ///
    /// The dealer draws until reaching 17 or higher, with no regard for the
    /// player's total. The bust check runs after every draw; a dealer bust
    /// records the round as a win for the player and stops the drawing
    /// immediately.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer.reveal_hole();

        let mut drawn = Vec::new();
        while self.dealer.value() < DEALER_STANDS_AT {
            let card = self.deck.deal();
            self.dealer.add_card(card);
            drawn.push(card);

            if self.dealer.is_bust() {
                self.outcome = Some(RoundOutcome::Win);
                break;
            }
        }

        self.state = GameState::RoundOver;
        Ok(drawn)
    }

    /// Resolves the round.
    ///
    /// An outcome recorded during play (either side busting) is final and is
    /// returned without re-comparison. Otherwise both totals are 21 or less:
    /// the higher total wins and equal totals push.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn showdown(&self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let player_value = self.player.value();
        let dealer_value = self.dealer.value();

        let outcome = self.outcome.unwrap_or_else(|| {
            if player_value == dealer_value {
                RoundOutcome::Push
            } else if player_value > dealer_value {
                RoundOutcome::Win
            } else {
                RoundOutcome::Lose
            }
        });

        Ok(RoundResult {
            outcome,
            player_value,
            dealer_value,
            player_bust: player_value > 21,
            dealer_bust: dealer_value > 21,
        })
    }
}
