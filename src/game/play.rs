use alloc::vec::Vec;

use crate::card::Card;
use crate::error::PlayError;
use crate::result::Play;

use super::{Game, PLAYERS, parse_selection};

/// Moves every table card of `rank` out of `table`, in table order.
///
/// Cards of other ranks stay behind in their original relative order.
fn take_matching(table: &mut Vec<Card>, rank: u8) -> Vec<Card> {
    let (captured, kept): (Vec<Card>, Vec<Card>) =
        table.drain(..).partition(|card| card.rank == rank);
    *table = kept;
    captured
}

impl Game {
    /// Plays the card at the 1-based `hand_index` from `player`'s hand.
    ///
    /// The card goes onto the table, then every table card of the same rank,
    /// the played card included, moves to the player's pile. The turn then
    /// passes to the other player.
    ///
    /// # Errors
    ///
    /// Returns an error if `player` does not exist, it is not `player`'s
    /// turn, or `hand_index` is outside `1..=hand.len()`. On error nothing
    /// changes, including the turn.
    pub fn play_card(&mut self, player: usize, hand_index: usize) -> Result<Play, PlayError> {
        if player >= PLAYERS {
            return Err(PlayError::PlayerNotFound);
        }

        if player != self.current_turn {
            tracing::debug!(player, current = self.current_turn, "play out of turn rejected");
            return Err(PlayError::NotYourTurn {
                player,
                current: self.current_turn,
            });
        }

        let acting = &mut self.players[player];
        let hand_len = acting.hand().len();
        let Some(card) = hand_index
            .checked_sub(1)
            .and_then(|index| acting.take_from_hand(index))
        else {
            tracing::debug!(player, hand_index, hand_len, "invalid card selection");
            return Err(PlayError::InvalidSelection {
                index: hand_index,
                hand_len,
            });
        };

        self.table.push(card);
        let captured = take_matching(&mut self.table, card.rank);
        for taken in &captured {
            tracing::trace!(player, card = %taken, "captured");
        }
        acting.capture(captured.iter().copied());

        self.current_turn = (self.current_turn + 1) % PLAYERS;

        tracing::debug!(
            player,
            card = %card,
            captured = captured.len(),
            table = self.table.len(),
            "card played"
        );

        Ok(Play {
            player,
            card,
            captured,
            next_player: self.current_turn,
        })
    }

    /// Plays the card at the 1-based `hand_index` for the player to act.
    ///
    /// A front end maps the result to its status line: `Ok` means the play
    /// was applied, and the error's `Display` text is the rejection message.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::InvalidSelection`] if `hand_index` is outside
    /// `1..=hand.len()`.
    pub fn play_current(&mut self, hand_index: usize) -> Result<Play, PlayError> {
        self.play_card(self.current_turn, hand_index)
    }

    /// Parses raw user input as a 1-based selection and plays it.
    ///
    /// Text that does not start with a number is treated as selection 0 and
    /// therefore rejected.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::InvalidSelection`] for malformed or out-of-range
    /// input.
    ///
    /// # Example
    ///
    /// ```
    /// use basra::{Game, GameOptions, PlayError};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7).unwrap();
    /// assert!(matches!(
    ///     game.submit("abc"),
    ///     Err(PlayError::InvalidSelection { index: 0, .. })
    /// ));
    /// assert!(game.submit("1").is_ok());
    /// assert_eq!(game.current_player(), 1);
    /// ```
    pub fn submit(&mut self, input: &str) -> Result<Play, PlayError> {
        self.play_current(parse_selection(input))
    }
}
