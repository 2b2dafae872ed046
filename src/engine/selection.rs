//! Card selection: the zones a player can pick from and the transient
//! pointer at the picked card.
//!
//! Only the adventure field and the satchel are selectable; the deck,
//! discard pile, and equipment are render-only. A selection is cleared by
//! every resolving operation, or explicitly by the player.

use serde::{Deserialize, Serialize};

/// A zone the player can select cards from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Cards currently in play.
    Adventure,
    /// Minor cards held in reserve.
    Satchel,
}

impl Zone {
    /// The zone's name as it appears in log entries.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Zone::Adventure => "adventure",
            Zone::Satchel => "satchel",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The currently inspected card: a zone and an index into it.
///
/// Indices are positions in the zone's display order. A selection is only
/// held while the underlying zones are unchanged; every mutating operation
/// clears it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub zone: Zone,
    pub index: usize,
}

impl Selection {
    /// Create a selection.
    #[must_use]
    pub const fn new(zone: Zone, index: usize) -> Self {
        Self { zone, index }
    }
}
