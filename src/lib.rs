//! A two-player Basra card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that builds and shuffles a deck, deals
//! the opening layout, applies plays with the rank-capture rule, and reports
//! scores. Rendering and input handling are left to the caller.
//!
//! # Example
//!
//! ```
//! use basra::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! let play = game.play_current(1).unwrap();
//! assert!(play.captured.contains(&play.card));
//! assert_eq!(game.current_player(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod scoring;

// Re-export main types
pub use card::{ACE, Card, DECK_SIZE, JACK, KING, QUEEN, ShortCard, Suit};
pub use deck::Deck;
pub use error::{DealError, PlayError};
pub use game::{Game, GameState, PLAYERS, parse_selection};
pub use options::GameOptions;
pub use player::Player;
pub use result::{Play, PlayerStanding};
pub use scoring::{card_points, score};
