//! # fools-journey
//!
//! A single-player tarot solitaire game engine.
//!
//! A shuffled deck of 41 tarot cards is drawn into an Adventure Field. The
//! player spends minor-arcana resource cards (Cups, Batons, Swords, Coins),
//! held in a three-card Satchel or equipped as standing resources (Wisdom,
//! Strength, Volition), to resolve major-arcana challenge cards without
//! depleting a bounded vitality pool.
//!
//! ## Design Principles
//!
//! 1. **One owned state struct**: all game state lives in [`GameState`].
//!    Operations are methods that take `&mut self` and return an
//!    [`ActionOutcome`]; there are no globals and no hidden subscriptions.
//!
//! 2. **Guarded transitions**: every operation checks its preconditions
//!    first. A failed guard returns `Rejected(reason)` and leaves both the
//!    state and the play log untouched.
//!
//! 3. **Synchronous settle pass**: after every applied mutation the engine
//!    restores its invariants (refill the adventure field, check for game
//!    over) before control returns to the caller. No background reactivity.
//!
//! 4. **Presentation stays outside**: rendering reads [`Snapshot`] values
//!    and drives the engine through [`ActionKind`]; the engine never talks
//!    to a UI.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG and the play log
//! - `cards`: suits, arcana, card identity, deck builder
//! - `engine`: game state, equipment, selection, legal actions, operations

pub mod core;
pub mod cards;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{GameRng, PlayLog};

pub use crate::cards::{build_deck, Arcana, Card, CardId, CardKind, Suit, DECK_SIZE};

pub use crate::engine::{
    ActionKind, ActionOutcome, Equipment, GameState, RejectReason, Selection, Snapshot, Zone,
    MAX_VITALITY, SATCHEL_CAPACITY, WISDOM_CAPACITY,
};
