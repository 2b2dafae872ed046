//! The equipment slot set.
//!
//! Three standing resources, each fed by one suit:
//!
//! - **Wisdom**: up to three Coins cards
//! - **Strength**: at most one Batons card
//! - **Volition**: at most one Swords card
//!
//! Capacity guards live in the operations; the mutators here are
//! crate-internal and assert their slot is actually free.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Maximum number of Coins cards equipped as Wisdom.
pub const WISDOM_CAPACITY: usize = 3;

/// The player's equipped cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    wisdom: Vec<Card>,
    strength: Option<Card>,
    volition: Option<Card>,
}

impl Equipment {
    /// Create an empty slot set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The equipped Wisdom cards, oldest first.
    #[must_use]
    pub fn wisdom(&self) -> &[Card] {
        &self.wisdom
    }

    /// The equipped Strength card, if any.
    #[must_use]
    pub fn strength(&self) -> Option<&Card> {
        self.strength.as_ref()
    }

    /// The equipped Volition card, if any.
    #[must_use]
    pub fn volition(&self) -> Option<&Card> {
        self.volition.as_ref()
    }

    /// Check if the Wisdom slots are all taken.
    #[must_use]
    pub fn wisdom_full(&self) -> bool {
        self.wisdom.len() >= WISDOM_CAPACITY
    }

    /// Iterate over every equipped card.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.wisdom
            .iter()
            .chain(self.strength.as_ref())
            .chain(self.volition.as_ref())
    }

    /// Total number of equipped cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.wisdom.len()
            + usize::from(self.strength.is_some())
            + usize::from(self.volition.is_some())
    }

    /// Check if nothing is equipped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn equip_wisdom(&mut self, card: Card) {
        debug_assert!(!self.wisdom_full(), "wisdom slots full");
        self.wisdom.push(card);
    }

    pub(crate) fn equip_strength(&mut self, card: Card) {
        debug_assert!(self.strength.is_none(), "strength slot occupied");
        self.strength = Some(card);
    }

    pub(crate) fn equip_volition(&mut self, card: Card) {
        debug_assert!(self.volition.is_none(), "volition slot occupied");
        self.volition = Some(card);
    }

    pub(crate) fn take_strength(&mut self) -> Option<Card> {
        self.strength.take()
    }

    pub(crate) fn take_volition(&mut self) -> Option<Card> {
        self.volition.take()
    }
}
