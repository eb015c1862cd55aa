//! Point values of captured cards.

use crate::card::{ACE, Card, JACK, Suit};

/// Returns the points a single captured card is worth.
///
/// | Card              | Points |
/// |-------------------|--------|
/// | any Ace           | 1      |
/// | any Jack          | 1      |
/// | 10 of Diamonds    | 3      |
/// | 2 of Clubs        | 2      |
/// | anything else     | 0      |
#[must_use]
pub const fn card_points(card: &Card) -> u32 {
    match (card.rank, card.suit) {
        (ACE | JACK, _) => 1,
        (10, Suit::Diamonds) => 3,
        (2, Suit::Clubs) => 2,
        _ => 0,
    }
}

/// Sums the points of every card in a pile.
///
/// Recomputed from scratch on every call; an empty pile scores 0.
#[must_use]
pub fn score(pile: &[Card]) -> u32 {
    pile.iter().map(card_points).sum()
}
