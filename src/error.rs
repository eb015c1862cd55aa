//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// More cards were requested than remain in the deck.
    #[error("not enough cards in the deck: requested {requested}, {available} available")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        available: usize,
    },
}

/// Errors that can occur when playing a card.
///
/// A rejected play never changes the game: hands, table, piles and the turn
/// are exactly as they were before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The 1-based hand index is outside `1..=hand_len`.
    #[error("invalid card selection: {index} (hand holds {hand_len} cards)")]
    InvalidSelection {
        /// The rejected 1-based index.
        index: usize,
        /// Number of cards in the acting player's hand.
        hand_len: usize,
    },
    /// Not this player's turn.
    #[error("not player {player}'s turn (player {current} is to play)")]
    NotYourTurn {
        /// Index of the player who tried to act.
        player: usize,
        /// Index of the player whose turn it is.
        current: usize,
    },
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
}
