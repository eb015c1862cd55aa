//! Game configuration options.

extern crate alloc;

use alloc::string::{String, ToString};

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use basra::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(4)
///     .with_table_size(4)
///     .with_player_names("Alice", "Bob");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards dealt to each player at the start.
    pub hand_size: usize,
    /// Cards dealt face up to the table at the start.
    pub table_size: usize,
    /// Names of the two players, in seat order.
    pub player_names: [String; 2],
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 4,
            table_size: 4,
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use basra::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(6);
    /// assert_eq!(options.hand_size, 6);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the number of cards dealt to the table.
    ///
    /// # Example
    ///
    /// ```
    /// use basra::GameOptions;
    ///
    /// let options = GameOptions::default().with_table_size(0);
    /// assert_eq!(options.table_size, 0);
    /// ```
    #[must_use]
    pub const fn with_table_size(mut self, table_size: usize) -> Self {
        self.table_size = table_size;
        self
    }

    /// Sets the player names.
    ///
    /// # Example
    ///
    /// ```
    /// use basra::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_names("Alice", "Bob");
    /// assert_eq!(options.player_names[1], "Bob");
    /// ```
    #[must_use]
    pub fn with_player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = [first.into(), second.into()];
        self
    }

    /// Total number of cards the opening deal takes from the deck.
    ///
    /// Saturates at `usize::MAX` instead of overflowing.
    #[must_use]
    pub const fn cards_needed(&self) -> usize {
        self.hand_size
            .saturating_mul(2)
            .saturating_add(self.table_size)
    }
}
