use crate::card::Card;
use crate::error::ActionError;
use crate::result::RoundOutcome;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the drawn card busts the hand, the round ends immediately: the
    /// loss is recorded, the dealer's hole card is revealed, and the dealer
    /// does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deck.deal();
        self.player.add_card(card);

        if self.player.is_bust() {
            self.outcome = Some(RoundOutcome::Lose);
            self.dealer.reveal_hole();
            self.state = GameState::RoundOver;
        }

        Ok(card)
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// Reveals the dealer's hole card and hands the turn to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.dealer.reveal_hole();
        self.state = GameState::DealerTurn;
        Ok(())
    }
}
