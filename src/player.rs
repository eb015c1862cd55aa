//! Player state: hand and capture pile.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::scoring;

/// A seated player.
///
/// The hand only shrinks and the pile only grows; a captured card never goes
/// back to a hand or the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name.
    name: String,
    /// Cards held, in deal order.
    hand: Vec<Card>,
    /// Captured cards, in capture order.
    pile: Vec<Card>,
}

impl Player {
    /// Creates a player holding `hand` with an empty pile.
    #[must_use]
    pub fn new(name: impl Into<String>, hand: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            hand,
            pile: Vec::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in hand.
    ///
    /// Position `i` here is shown to the user as selection `i + 1`.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the captured cards.
    #[must_use]
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    /// Returns the current score, computed from the pile.
    #[must_use]
    pub fn score(&self) -> u32 {
        scoring::score(&self.pile)
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_out_of_cards(&self) -> bool {
        self.hand.is_empty()
    }

    /// Removes the card at the 0-based `index`, keeping the order of the rest.
    pub(crate) fn take_from_hand(&mut self, index: usize) -> Option<Card> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }

    pub(crate) fn capture(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.pile.extend(cards);
    }
}
