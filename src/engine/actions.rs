//! The action vocabulary and the legal-action query.
//!
//! `legal_actions` is a pure read over current state: it never mutates
//! and its order is canonical, so a renderer can turn it straight into a
//! button row and tests can assert on it positionally.
//!
//! The three equip kinds share one operation - the selected card's suit
//! decides which slot it lands in - but they are distinct list entries so
//! each carries its own label.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::selection::Zone;
use super::state::{GameState, MAX_VITALITY, SATCHEL_CAPACITY};
use crate::cards::{CardKind, Suit};

/// Why a guarded operation refused to run.
///
/// A rejected operation leaves state and log untouched; the reason is the
/// only observable difference from not calling it at all.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    #[error("no card is selected")]
    NoSelection,
    #[error("no card at the selected position")]
    NoSuchCard,
    #[error("only minor cards can do that")]
    NotAMinorCard,
    #[error("only major cards can be resolved")]
    NotAMajorCard,
    #[error("only Cups cards replenish vitality")]
    NotACupsCard,
    #[error("Cups cards cannot be equipped")]
    NotEquippable,
    #[error("that equipment slot is occupied")]
    SlotOccupied,
    #[error("the satchel is full")]
    SatchelFull,
    #[error("the card must be in the adventure field")]
    NotInAdventureField,
    #[error("no matching card is equipped")]
    NothingEquipped,
}

/// Result of a guarded operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The transition ran and exactly one log entry was appended.
    Applied,
    /// A precondition failed; nothing changed.
    Rejected(RejectReason),
}

impl ActionOutcome {
    /// Check if the operation ran.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }

    /// The rejection reason, if any.
    #[must_use]
    pub const fn reject_reason(self) -> Option<RejectReason> {
        match self {
            ActionOutcome::Applied => None,
            ActionOutcome::Rejected(reason) => Some(reason),
        }
    }
}

/// An action the player can take on the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    ReplenishVitality,
    EquipStrength,
    EquipVolition,
    EquipWisdom,
    StoreInSatchel,
    Discard,
    ResolveWithVolition,
    ResolveWithStrength,
    ResolveDirectly,
}

impl ActionKind {
    /// The button label a renderer shows for this action.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ActionKind::ReplenishVitality => "Replenish Vitality",
            ActionKind::EquipStrength => "Equip as Strength",
            ActionKind::EquipVolition => "Equip as Volition",
            ActionKind::EquipWisdom => "Equip as Wisdom",
            ActionKind::StoreInSatchel => "Store in Satchel",
            ActionKind::Discard => "Discard",
            ActionKind::ResolveWithVolition => "Resolve with Volition",
            ActionKind::ResolveWithStrength => "Resolve with Strength",
            ActionKind::ResolveDirectly => "Resolve Directly",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl GameState {
    /// List the legal actions for the current selection, in canonical
    /// order. Empty when nothing is selected.
    ///
    /// A selection offers at most three actions, so the list never
    /// allocates.
    #[must_use]
    pub fn legal_actions(&self) -> SmallVec<[ActionKind; 3]> {
        let mut actions = SmallVec::new();
        let Some(sel) = self.selection() else {
            return actions;
        };
        let Some(card) = self.zone_cards(sel.zone).get(sel.index) else {
            return actions;
        };

        match card.kind() {
            CardKind::Minor { suit } => {
                if suit == Suit::Cups && self.vitality() < MAX_VITALITY {
                    actions.push(ActionKind::ReplenishVitality);
                }
                if suit == Suit::Batons && self.equipment().strength().is_none() {
                    actions.push(ActionKind::EquipStrength);
                }
                if suit == Suit::Swords && self.equipment().volition().is_none() {
                    actions.push(ActionKind::EquipVolition);
                }
                if suit == Suit::Coins && !self.equipment().wisdom_full() {
                    actions.push(ActionKind::EquipWisdom);
                }
                if sel.zone == Zone::Adventure && self.satchel().len() < SATCHEL_CAPACITY {
                    actions.push(ActionKind::StoreInSatchel);
                }
                actions.push(ActionKind::Discard);
            }
            CardKind::Major { .. } => {
                if self.equipment().volition().is_some() {
                    actions.push(ActionKind::ResolveWithVolition);
                }
                if self.equipment().strength().is_some() {
                    actions.push(ActionKind::ResolveWithStrength);
                }
                actions.push(ActionKind::ResolveDirectly);
            }
        }

        actions
    }

    /// Run the operation behind an [`ActionKind`].
    ///
    /// The equip kinds all dispatch to [`GameState::equip_card`]; the
    /// selected card's suit picks the slot.
    pub fn apply(&mut self, action: ActionKind) -> ActionOutcome {
        match action {
            ActionKind::ReplenishVitality => self.replenish_vitality(),
            ActionKind::EquipStrength | ActionKind::EquipVolition | ActionKind::EquipWisdom => {
                self.equip_card()
            }
            ActionKind::StoreInSatchel => self.store_in_satchel(),
            ActionKind::Discard => self.discard_card(),
            ActionKind::ResolveWithVolition => self.resolve_with_volition(),
            ActionKind::ResolveWithStrength => self.resolve_with_strength(),
            ActionKind::ResolveDirectly => self.resolve_directly(),
        }
    }
}
