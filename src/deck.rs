//! Deck construction, shuffling and dealing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, KING, Suit};
use crate::error::DealError;

/// An ordered stack of cards. Cards only ever leave from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the standard 52-card deck.
    ///
    /// Order is suit-major (Hearts, Diamonds, Clubs, Spades) and rank-minor
    /// (Ace through King), so the result is identical on every call.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=KING {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Wraps an arbitrary sequence of cards, front first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns a random permutation of this deck.
    ///
    /// Walks from the last index down to 1, swapping each position with a
    /// uniformly chosen index in `0..=i`.
    #[must_use]
    pub fn shuffle<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.cards.shuffle(rng);
        self
    }

    /// Takes the first `n` cards and returns them with the rest of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if `n` exceeds the deck length.
    /// The deck is consumed either way.
    pub fn deal(mut self, n: usize) -> Result<(Vec<Card>, Self), DealError> {
        if n > self.cards.len() {
            return Err(DealError::NotEnoughCards {
                requested: n,
                available: self.cards.len(),
            });
        }

        let remainder = self.cards.split_off(n);
        Ok((self.cards, Self { cards: remainder }))
    }

    /// Returns the cards in order, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Consumes the deck and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
