//! Card system: suits, arcana, card identity, and the deck builder.
//!
//! ## Key Types
//!
//! - `CardId`: identity of a card, unique for the lifetime of a game
//! - `Suit`: the four minor-arcana suits (Cups, Batons, Swords, Coins)
//! - `Arcana`: the five major-arcana challenges with fixed strengths
//! - `Card`: one card - identity is immutable, `value` can be reduced
//!   during challenge resolution
//! - `build_deck`: 41 fresh cards, uniformly shuffled

pub mod card;
pub mod deck;

pub use card::{Arcana, Card, CardId, CardKind, Suit};
pub use deck::{build_deck, DECK_SIZE, MAJOR_COUNT, MINOR_COUNT};
