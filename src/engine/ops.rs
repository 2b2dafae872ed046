//! The guarded operations and the settle pass.
//!
//! Every public operation follows the same contract:
//!
//! 1. check preconditions; on failure return `Rejected(reason)` having
//!    touched nothing, not even the log;
//! 2. apply the transition and append exactly one log entry;
//! 3. clear the selection (every operation except select itself);
//! 4. run the settle pass before returning.
//!
//! The settle pass is the invariant-restoration step: refill the
//! adventure field toward 4 when it drops below 2, and log the one-time
//! "Game Over" entry when vitality hits zero. It runs synchronously
//! inside the operation, so callers always observe settled state.

use super::actions::{ActionOutcome, RejectReason};
use super::equipment::Equipment;
use super::selection::{Selection, Zone};
use super::state::{GameState, FIELD_REFILL_THRESHOLD, FIELD_TARGET, SATCHEL_CAPACITY};
use crate::cards::{Card, Suit};

impl GameState {
    // === Selection ===

    /// Select the card at `index` in `zone` for inspection.
    pub fn select_card(&mut self, zone: Zone, index: usize) -> ActionOutcome {
        self.guarded(|state| state.select_card_inner(zone, index))
    }

    /// Drop the current selection. Never logs.
    pub fn clear_selection(&mut self) {
        self.set_selection(None);
    }

    // === Minor-card operations ===

    /// Move the selected card from the adventure field into the satchel.
    pub fn store_in_satchel(&mut self) -> ActionOutcome {
        self.guarded(Self::store_in_satchel_inner)
    }

    /// Equip the selected minor card into its suit's slot.
    pub fn equip_card(&mut self) -> ActionOutcome {
        self.guarded(Self::equip_card_inner)
    }

    /// Spend the selected Cups card to restore vitality.
    pub fn replenish_vitality(&mut self) -> ActionOutcome {
        self.guarded(Self::replenish_vitality_inner)
    }

    /// Move the selected card to the discard pile.
    pub fn discard_card(&mut self) -> ActionOutcome {
        self.guarded(Self::discard_card_inner)
    }

    // === Challenge resolution ===

    /// Resolve the selected challenge with the equipped Volition card.
    pub fn resolve_with_volition(&mut self) -> ActionOutcome {
        self.guarded(Self::resolve_with_volition_inner)
    }

    /// Resolve the selected challenge with the equipped Strength card.
    pub fn resolve_with_strength(&mut self) -> ActionOutcome {
        self.guarded(Self::resolve_with_strength_inner)
    }

    /// Resolve the selected challenge by paying its full value in
    /// vitality.
    pub fn resolve_directly(&mut self) -> ActionOutcome {
        self.guarded(Self::resolve_directly_inner)
    }

    // === Dealing ===

    /// Deal up to `n` cards from the deck to the adventure field.
    ///
    /// Always logs the count actually dealt, zero included. Returns that
    /// count.
    pub fn deal_adventure(&mut self, n: usize) -> usize {
        let dealt = self.deal_logged(n);
        self.settle();
        dealt
    }

    // === Internals ===

    /// Run a guarded transition; settle only if it applied.
    fn guarded(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<(), RejectReason>,
    ) -> ActionOutcome {
        match op(self) {
            Ok(()) => {
                self.settle();
                ActionOutcome::Applied
            }
            Err(reason) => ActionOutcome::Rejected(reason),
        }
    }

    /// Restore engine invariants after a mutation.
    fn settle(&mut self) {
        if self.adventure_field().len() < FIELD_REFILL_THRESHOLD && self.deck_size() > 0 {
            let needed = FIELD_TARGET - self.adventure_field().len();
            self.deal_logged(needed);
        }
        if self.vitality() <= 0 && !self.is_game_over() {
            self.set_game_over();
            self.log_mut().push("Game Over! Vitality depleted.");
        }
        debug_assert!(self.card_ownership_ok(), "card present in more than one zone");
    }

    fn deal_logged(&mut self, n: usize) -> usize {
        let dealt = self.draw_into_field(n);
        self.log_mut()
            .push(format!("Dealt {dealt} card(s) to the Adventure Field."));
        dealt
    }

    /// The current selection together with the card it points at.
    fn selected(&self) -> Result<(Selection, &Card), RejectReason> {
        let sel = self.selection().ok_or(RejectReason::NoSelection)?;
        let card = self
            .zone_cards(sel.zone)
            .get(sel.index)
            .ok_or(RejectReason::NoSuchCard)?;
        Ok((sel, card))
    }

    /// Guard shared by the three resolution operations: a major card,
    /// selected in the adventure field.
    fn selected_challenge(&self) -> Result<Selection, RejectReason> {
        let (sel, card) = self.selected()?;
        if !card.is_major() {
            return Err(RejectReason::NotAMajorCard);
        }
        if sel.zone != Zone::Adventure {
            return Err(RejectReason::NotInAdventureField);
        }
        Ok(sel)
    }

    fn select_card_inner(&mut self, zone: Zone, index: usize) -> Result<(), RejectReason> {
        let card = self
            .zone_cards(zone)
            .get(index)
            .ok_or(RejectReason::NoSuchCard)?;
        let display = card.display();
        self.set_selection(Some(Selection::new(zone, index)));
        self.log_mut().push(format!("Selected {display} from {zone}."));
        Ok(())
    }

    fn store_in_satchel_inner(&mut self) -> Result<(), RejectReason> {
        let (sel, _) = self.selected()?;
        if sel.zone != Zone::Adventure {
            return Err(RejectReason::NotInAdventureField);
        }
        if self.satchel().len() >= SATCHEL_CAPACITY {
            return Err(RejectReason::SatchelFull);
        }

        let card = self.remove_selected(sel);
        let display = card.display();
        self.push_satchel(card);
        self.log_mut().push(format!("Stored {display} in Satchel."));
        self.set_selection(None);
        Ok(())
    }

    fn equip_card_inner(&mut self) -> Result<(), RejectReason> {
        let (sel, card) = self.selected()?;
        let suit = card.suit().ok_or(RejectReason::NotAMinorCard)?;

        match suit {
            Suit::Cups => Err(RejectReason::NotEquippable),
            Suit::Coins if self.equipment().wisdom_full() => Err(RejectReason::SlotOccupied),
            Suit::Batons if self.equipment().strength().is_some() => {
                Err(RejectReason::SlotOccupied)
            }
            Suit::Swords if self.equipment().volition().is_some() => {
                Err(RejectReason::SlotOccupied)
            }
            Suit::Coins => self.finish_equip(sel, "Wisdom", Equipment::equip_wisdom),
            Suit::Batons => self.finish_equip(sel, "Strength", Equipment::equip_strength),
            Suit::Swords => self.finish_equip(sel, "Volition", Equipment::equip_volition),
        }
    }

    fn finish_equip(
        &mut self,
        sel: Selection,
        slot: &str,
        equip: impl FnOnce(&mut Equipment, Card),
    ) -> Result<(), RejectReason> {
        let card = self.remove_selected(sel);
        let display = card.display();
        equip(self.equipment_mut(), card);
        self.log_mut().push(format!("Equipped {display} as {slot}."));
        self.set_selection(None);
        Ok(())
    }

    fn replenish_vitality_inner(&mut self) -> Result<(), RejectReason> {
        let (sel, card) = self.selected()?;
        match card.suit() {
            Some(Suit::Cups) => {}
            Some(_) => return Err(RejectReason::NotACupsCard),
            None => return Err(RejectReason::NotAMinorCard),
        }

        let card = self.remove_selected(sel);
        let gain = card.value();
        self.set_vitality(self.vitality() + gain);
        let new_vitality = self.vitality();
        self.log_mut().push(format!(
            "Used {} to replenish vitality by {gain}. New Vitality: {new_vitality}.",
            card.display()
        ));
        // The spent cups card leaves play entirely; it does not go to the
        // discard pile.
        drop(card);
        self.set_selection(None);
        Ok(())
    }

    fn discard_card_inner(&mut self) -> Result<(), RejectReason> {
        let (sel, _) = self.selected()?;

        let card = self.remove_selected(sel);
        let display = card.display();
        self.push_discard(card);
        self.log_mut().push(format!("Discarded {display}."));
        self.set_selection(None);
        Ok(())
    }

    fn resolve_with_volition_inner(&mut self) -> Result<(), RejectReason> {
        let sel = self.selected_challenge()?;
        let volition = self
            .equipment_mut()
            .take_volition()
            .ok_or(RejectReason::NothingEquipped)?;

        let challenge_value = self.zone_cards(Zone::Adventure)[sel.index].value();
        let challenge_display = self.zone_cards(Zone::Adventure)[sel.index].display();

        if volition.value() >= challenge_value {
            self.log_mut().push(format!(
                "Volition {} overcame challenge {challenge_display}.",
                volition.display()
            ));
            let challenge = self.remove_from_field(sel.index);
            self.push_discard(challenge);
        } else {
            // Partial: the challenge stays in the field, weakened in
            // place. The volition card is consumed either way.
            self.log_mut().push(format!(
                "Volition {} partially reduced challenge {challenge_display}.",
                volition.display()
            ));
            self.field_card_mut(sel.index).reduce_value(volition.value());
        }

        self.set_selection(None);
        Ok(())
    }

    fn resolve_with_strength_inner(&mut self) -> Result<(), RejectReason> {
        let sel = self.selected_challenge()?;
        let strength = self
            .equipment_mut()
            .take_strength()
            .ok_or(RejectReason::NothingEquipped)?;

        let challenge_value = self.zone_cards(Zone::Adventure)[sel.index].value();
        let challenge_display = self.zone_cards(Zone::Adventure)[sel.index].display();
        let strength_value = strength.value();
        let strength_display = strength.display();

        if strength_value > challenge_value {
            // Overkill: the baton stays equipped at its remaining value.
            let remaining = strength_value - challenge_value;
            self.log_mut().push(format!(
                "Strength {strength_display} resolved challenge {challenge_display}. \
                 Remaining Strength: {remaining}."
            ));
            let mut strength = strength;
            strength.reduce_value(challenge_value);
            self.equipment_mut().equip_strength(strength);
        } else if strength_value == challenge_value {
            self.log_mut().push(format!(
                "Strength {strength_display} exactly resolved challenge {challenge_display}."
            ));
        } else {
            // The challenge wins but is removed anyway; the shortfall
            // comes out of vitality.
            let diff = challenge_value - strength_value;
            self.log_mut().push(format!(
                "Strength {strength_display} insufficient; Vitality reduced by {diff}."
            ));
            self.set_vitality(self.vitality() - diff);
        }

        let challenge = self.remove_from_field(sel.index);
        self.push_discard(challenge);
        self.set_selection(None);
        Ok(())
    }

    fn resolve_directly_inner(&mut self) -> Result<(), RejectReason> {
        let sel = self.selected_challenge()?;

        let challenge = self.remove_from_field(sel.index);
        let amount = challenge.value();
        self.log_mut().push(format!(
            "Directly resolved challenge {} - Vitality reduced by {amount}.",
            challenge.display()
        ));
        self.set_vitality(self.vitality() - amount);
        self.push_discard(challenge);
        self.set_selection(None);
        Ok(())
    }
}
