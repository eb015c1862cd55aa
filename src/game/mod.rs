//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::PlayerStanding;

mod input;
mod play;
pub mod state;

pub use input::parse_selection;
pub use state::GameState;

/// Number of seats at the table.
pub const PLAYERS: usize = 2;

/// A two-player Basra game.
///
/// The game owns both players, the face-up table and the undealt stock.
/// The front end owns the `Game` and passes `&mut self` into
/// [`Game::play_card`] once per user action; nothing else mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Both players, in seat order.
    players: [Player; PLAYERS],
    /// Face-up cards, in the order they arrived.
    table: Vec<Card>,
    /// Cards left after the opening deal. Never dealt from again.
    stock: Deck,
    /// Index of the player to act.
    current_turn: usize,
}

impl Game {
    /// Builds, shuffles and deals a new game with the given seed.
    ///
    /// Each player receives `hand_size` cards, then `table_size` cards go to
    /// the table. The rest stays in the stock.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the options need more cards
    /// than a standard deck holds.
    ///
    /// # Example
    ///
    /// ```
    /// use basra::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.table().len(), 4);
    /// assert_eq!(game.stock_remaining(), 40);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, DealError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::standard().shuffle(&mut rng);
        let game = Self::deal_from(options, deck)?;

        tracing::debug!(seed, stock = game.stock.len(), "dealt new game");

        Ok(game)
    }

    /// Creates a new game seeded from the system clock.
    ///
    /// Call once per process; every call derives a fresh seed.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] under the same conditions as
    /// [`Game::new`].
    #[cfg(feature = "std")]
    pub fn with_entropy(options: GameOptions) -> Result<Self, DealError> {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64);
        Self::new(options, seed)
    }

    /// Deals the opening layout from an already ordered deck.
    ///
    /// Checked up front so the error reports the whole deal, not the step
    /// that ran short.
    fn deal_from(options: GameOptions, deck: Deck) -> Result<Self, DealError> {
        if options.cards_needed() > deck.len() {
            return Err(DealError::NotEnoughCards {
                requested: options.cards_needed(),
                available: deck.len(),
            });
        }

        let (first, deck) = deck.deal(options.hand_size)?;
        let (second, deck) = deck.deal(options.hand_size)?;
        let (table, stock) = deck.deal(options.table_size)?;

        Ok(Self::from_layout(options, [first, second], table, stock.into_cards()))
    }

    /// Arranges a game in a known layout without shuffling.
    ///
    /// Player 0 is to act. Only the player names are taken from `options`.
    /// Useful for replaying a recorded deal or setting up
    /// a specific position.
    ///
    /// # Example
    ///
    /// ```
    /// use basra::{Card, Game, GameOptions, Suit};
    ///
    /// let game = Game::from_layout(
    ///     GameOptions::default(),
    ///     [vec![Card::new(Suit::Hearts, 1)], vec![Card::new(Suit::Clubs, 5)]],
    ///     vec![Card::new(Suit::Diamonds, 1)],
    ///     Vec::new(),
    /// );
    /// assert_eq!(game.current_player(), 0);
    /// ```
    #[must_use]
    pub fn from_layout(
        options: GameOptions,
        hands: [Vec<Card>; PLAYERS],
        table: Vec<Card>,
        stock: Vec<Card>,
    ) -> Self {
        let [first, second] = hands;
        let [first_name, second_name] = options.player_names;

        Self {
            players: [
                Player::new(first_name, first),
                Player::new(second_name, second),
            ],
            table,
            stock: Deck::from_cards(stock),
            current_turn: 0,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.players.iter().all(Player::is_out_of_cards) {
            GameState::HandsEmpty
        } else {
            GameState::WaitingForInput {
                player: self.current_turn,
            }
        }
    }

    /// Returns the index of the player to act (0 or 1).
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current_turn
    }

    /// Returns the name of the player to act.
    #[must_use]
    pub fn current_player_name(&self) -> &str {
        self.players[self.current_turn].name()
    }

    /// Returns the hand of the player to act.
    ///
    /// Position `i` is presented to the user as selection `i + 1`.
    #[must_use]
    pub fn current_hand(&self) -> &[Card] {
        self.players[self.current_turn].hand()
    }

    /// Returns the player at `index`, if any.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns both players in seat order.
    #[must_use]
    pub const fn players(&self) -> &[Player; PLAYERS] {
        &self.players
    }

    /// Returns the face-up table cards.
    #[must_use]
    pub fn table(&self) -> &[Card] {
        &self.table
    }

    /// Returns the undealt stock, front first.
    #[must_use]
    pub fn stock(&self) -> &[Card] {
        self.stock.cards()
    }

    /// Returns the number of cards left in the stock.
    #[must_use]
    pub fn stock_remaining(&self) -> usize {
        self.stock.len()
    }

    /// Returns the score of the player at `index`.
    ///
    /// Returns `None` if there is no such player.
    #[must_use]
    pub fn score(&self, index: usize) -> Option<u32> {
        self.players.get(index).map(Player::score)
    }

    /// Returns the standings of both players, in seat order.
    #[must_use]
    pub fn standings(&self) -> Vec<PlayerStanding> {
        self.players
            .iter()
            .enumerate()
            .map(|(player, p)| PlayerStanding {
                player,
                name: p.name().into(),
                score: p.score(),
                captured: p.pile().len(),
                hand_len: p.hand().len(),
            })
            .collect()
    }
}
