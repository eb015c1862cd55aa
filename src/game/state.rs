//! Game state types.

/// Game state.
///
/// There is no terminal state: once both hands are empty the game reports
/// [`GameState::HandsEmpty`] and rejects every selection, but no end-of-game
/// rule is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the given player to choose a card.
    WaitingForInput {
        /// Index of the player to act (0 or 1).
        player: usize,
    },
    /// Neither player holds a card.
    HandsEmpty,
}
