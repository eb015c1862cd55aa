//! Outcome types returned by the turn engine.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// Result of a single applied play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    /// Index of the player who acted.
    pub player: usize,
    /// The card taken from the hand.
    pub card: Card,
    /// Cards moved to the player's pile, in table order.
    ///
    /// Always contains `card` itself.
    pub captured: Vec<Card>,
    /// Index of the player whose turn it is now.
    pub next_player: usize,
}

impl Play {
    /// Returns whether the play took any table card besides the played one.
    #[must_use]
    pub fn captured_from_table(&self) -> bool {
        self.captured.len() > 1
    }
}

/// One player's line in the standings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStanding {
    /// The player index.
    pub player: usize,
    /// The player name.
    pub name: String,
    /// Score computed from the pile.
    pub score: u32,
    /// Number of captured cards.
    pub captured: usize,
    /// Number of cards still in hand.
    pub hand_len: usize,
}
