//! Deck lifecycle: build, shuffle, deal.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A shuffled deck of 52 cards.
///
/// Dealing from an exhausted deck transparently rebuilds and reshuffles a
/// fresh deck in place, so cards dealt in earlier rounds may reappear.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a freshly shuffled deck from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::build(&mut rng);
        Self { cards, rng }
    }

    /// Creates a deck with a fixed, unshuffled card order.
    ///
    /// The top of the deck is the *last* element. Useful for stacking known
    /// deal sequences.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// Builds one card per suit and rank combination and shuffles them.
    fn build(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Deals one card from the top of the deck.
    ///
    /// An empty deck is replaced with a freshly shuffled one before the card
    /// is drawn, so dealing never fails.
    pub fn deal(&mut self) -> Card {
        if self.cards.is_empty() {
            self.cards = Self::build(&mut self.rng);
        }
        // a rebuilt deck always holds 52 cards
        self.cards.pop().expect("deck should not be empty")
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::Deck;
    use crate::card::{Card, DECK_SIZE, Rank, Suit};
    use std::collections::HashSet;

    #[test]
    fn fresh_deck_holds_52_unique_cards() {
        let mut deck = Deck::new(7);
        assert_eq!(deck.remaining(), DECK_SIZE);

        let mut seen = HashSet::new();
        for _ in 0..DECK_SIZE {
            assert!(seen.insert(deck.deal()), "duplicate card dealt");
        }
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn dealing_from_an_empty_deck_rebuilds_first() {
        let mut deck = Deck::from_cards(Vec::new());
        let _ = deck.deal();
        assert_eq!(deck.remaining(), DECK_SIZE - 1);
    }

    #[test]
    fn stacked_deck_deals_from_the_top() {
        let two = Card::new(Suit::Hearts, Rank::Two);
        let king = Card::new(Suit::Spades, Rank::King);
        let mut deck = Deck::from_cards(vec![two, king]);

        assert_eq!(deck.deal(), king);
        assert_eq!(deck.deal(), two);
    }

    #[test]
    fn same_seed_produces_same_order() {
        let mut a = Deck::new(42);
        let mut b = Deck::new(42);
        for _ in 0..DECK_SIZE {
            assert_eq!(a.deal(), b.deal());
        }
    }
}
