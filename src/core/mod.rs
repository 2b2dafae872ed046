//! Core engine plumbing: deterministic RNG and the play log.
//!
//! Nothing in here knows about cards or zones; the rest of the crate
//! builds on these two pieces.

pub mod log;
pub mod rng;

pub use log::PlayLog;
pub use rng::GameRng;
