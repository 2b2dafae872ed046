//! The game engine: state, equipment, selection, legal actions, and every
//! guarded operation.
//!
//! ## Key Types
//!
//! - `GameState`: the single owned state struct; all operations are
//!   methods on it
//! - `Equipment`: the Wisdom/Strength/Volition slot set
//! - `Zone`, `Selection`: the selectable zones and the transient pointer
//! - `ActionKind`: the action vocabulary, with canonical-order listing
//!   via `GameState::legal_actions`
//! - `ActionOutcome`, `RejectReason`: observable results of guarded
//!   operations - a rejection never mutates state or log
//! - `Snapshot`: the serializable read surface for a presentation layer

pub mod actions;
pub mod equipment;
pub mod ops;
pub mod selection;
pub mod state;

pub use actions::{ActionKind, ActionOutcome, RejectReason};
pub use equipment::{Equipment, WISDOM_CAPACITY};
pub use selection::{Selection, Zone};
pub use state::{GameState, Snapshot, MAX_VITALITY, SATCHEL_CAPACITY};
