//! Game state: the single owned struct everything operates on.
//!
//! ## Zones
//!
//! - `deck`: ordered, draw-from-front
//! - `adventure_field`: cards in play, refilled toward 4 by the settle pass
//! - `satchel`: minor cards in reserve, capacity 3
//! - `discard_pile`: spent cards, terminal
//! - `equipment`: the Wisdom/Strength/Volition slot set
//!
//! A card lives in exactly one of these at any time; the settle pass
//! asserts that in debug builds.
//!
//! ## Snapshot
//!
//! The presentation layer never touches `GameState` fields. It reads a
//! [`Snapshot`] after every change and forwards player input back through
//! the operation methods.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::equipment::Equipment;
use super::selection::{Selection, Zone};
use crate::cards::{build_deck, Card};
use crate::core::{GameRng, PlayLog};

/// Maximum (and starting) vitality.
pub const MAX_VITALITY: i64 = 25;

/// Maximum number of cards held in the satchel.
pub const SATCHEL_CAPACITY: usize = 3;

/// Cards dealt to the adventure field at game start and by the refill.
pub(crate) const FIELD_TARGET: usize = 4;

/// The adventure field refills whenever it drops below this.
pub(crate) const FIELD_REFILL_THRESHOLD: usize = 2;

/// Complete game state.
///
/// Created with [`GameState::new`] (seeded) or [`GameState::new_random`].
/// All mutation goes through the operation methods in `engine::ops`.
#[derive(Clone, Debug)]
pub struct GameState {
    deck: VecDeque<Card>,
    adventure_field: Vec<Card>,
    satchel: Vec<Card>,
    discard_pile: Vec<Card>,
    equipment: Equipment,
    vitality: i64,
    selection: Option<Selection>,
    log: PlayLog,
    rng: GameRng,
    game_over: bool,
}

impl GameState {
    /// Start a new game with a seeded deck shuffle.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Start a new game with an OS-seeded shuffle.
    #[must_use]
    pub fn new_random() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Start a new game with the given RNG.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        let mut state = Self {
            deck: VecDeque::new(),
            adventure_field: Vec::new(),
            satchel: Vec::new(),
            discard_pile: Vec::new(),
            equipment: Equipment::new(),
            vitality: MAX_VITALITY,
            selection: None,
            log: PlayLog::new(),
            rng,
            game_over: false,
        };
        state.start("Game started. Vitality is 25.");
        state
    }

    /// Reset to a fresh game: new shuffled deck, full vitality, empty
    /// satchel/discard/equipment, cleared selection and log.
    ///
    /// The RNG stream continues, so consecutive games from one seed get
    /// independent deck orders.
    pub fn reset(&mut self) {
        self.start("Game reset. Vitality is 25.");
    }

    /// Shared start/reset path. Emits exactly one log entry; the initial
    /// four-card deal is not logged.
    fn start(&mut self, message: &str) {
        self.deck = build_deck(&mut self.rng).into();
        self.adventure_field.clear();
        self.satchel.clear();
        self.discard_pile.clear();
        self.equipment = Equipment::new();
        self.vitality = MAX_VITALITY;
        self.selection = None;
        self.game_over = false;
        self.log.clear();
        self.log.push(message);
        self.draw_into_field(FIELD_TARGET);
    }

    // === Read surface ===

    /// Number of cards left in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// The remaining deck, front (next to be dealt) first.
    pub fn deck_cards(&self) -> impl Iterator<Item = &Card> {
        self.deck.iter()
    }

    /// Cards currently in play.
    #[must_use]
    pub fn adventure_field(&self) -> &[Card] {
        &self.adventure_field
    }

    /// Cards held in reserve.
    #[must_use]
    pub fn satchel(&self) -> &[Card] {
        &self.satchel
    }

    /// Spent cards, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// The equipped cards.
    #[must_use]
    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    /// Current vitality, always in `[0, 25]`.
    #[must_use]
    pub fn vitality(&self) -> i64 {
        self.vitality
    }

    /// The current selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// The play log.
    #[must_use]
    pub fn log(&self) -> &PlayLog {
        &self.log
    }

    /// Whether vitality has reached zero at some point this game.
    ///
    /// The engine does not lock input when this turns true; it only
    /// guarantees the "Game Over" entry is logged once.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Iterate over every card the game tracks, across all containers.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.deck
            .iter()
            .chain(&self.adventure_field)
            .chain(&self.satchel)
            .chain(&self.discard_pile)
            .chain(self.equipment.cards())
    }

    /// An owned, serializable view of the whole state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            deck: self.deck.iter().cloned().collect(),
            adventure_field: self.adventure_field.clone(),
            satchel: self.satchel.clone(),
            discard_pile: self.discard_pile.clone(),
            wisdom: self.equipment.wisdom().to_vec(),
            strength: self.equipment.strength().cloned(),
            volition: self.equipment.volition().cloned(),
            vitality: self.vitality,
            selection: self.selection,
            play_log: self.log.iter().map(str::to_string).collect(),
            game_over: self.game_over,
        }
    }

    // === Crate-internal mutation helpers ===

    pub(crate) fn equipment_mut(&mut self) -> &mut Equipment {
        &mut self.equipment
    }

    pub(crate) fn log_mut(&mut self) -> &mut PlayLog {
        &mut self.log
    }

    pub(crate) fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }

    pub(crate) fn set_game_over(&mut self) {
        self.game_over = true;
    }

    /// Clamped vitality write. Every vitality change goes through here.
    pub(crate) fn set_vitality(&mut self, value: i64) {
        self.vitality = value.clamp(0, MAX_VITALITY);
    }

    /// The cards of a selectable zone, in display order.
    pub(crate) fn zone_cards(&self, zone: Zone) -> &[Card] {
        match zone {
            Zone::Adventure => &self.adventure_field,
            Zone::Satchel => &self.satchel,
        }
    }

    /// Remove the selected card from its zone.
    ///
    /// Callers must have validated the selection against current zone
    /// contents.
    pub(crate) fn remove_selected(&mut self, selection: Selection) -> Card {
        match selection.zone {
            Zone::Adventure => self.adventure_field.remove(selection.index),
            Zone::Satchel => self.satchel.remove(selection.index),
        }
    }

    /// Remove a card from the adventure field by position.
    pub(crate) fn remove_from_field(&mut self, index: usize) -> Card {
        self.adventure_field.remove(index)
    }

    pub(crate) fn field_card_mut(&mut self, index: usize) -> &mut Card {
        &mut self.adventure_field[index]
    }

    pub(crate) fn push_satchel(&mut self, card: Card) {
        self.satchel.push(card);
    }

    pub(crate) fn push_discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Move up to `n` cards from the front of the deck into the adventure
    /// field. Returns how many actually moved. Does not log.
    pub(crate) fn draw_into_field(&mut self, n: usize) -> usize {
        let mut dealt = 0;
        for _ in 0..n {
            match self.deck.pop_front() {
                Some(card) => {
                    self.adventure_field.push(card);
                    dealt += 1;
                }
                None => break,
            }
        }
        dealt
    }

    /// Every tracked card id appears exactly once across all containers.
    pub(crate) fn card_ownership_ok(&self) -> bool {
        let mut seen = FxHashSet::default();
        let mut total = 0usize;
        for card in self.all_cards() {
            seen.insert(card.id());
            total += 1;
        }
        seen.len() == total
    }
}

/// Read-only view of the game for rendering and harnesses.
///
/// `play_log` is newest first, like [`PlayLog`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub deck: Vec<Card>,
    pub adventure_field: Vec<Card>,
    pub satchel: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub wisdom: Vec<Card>,
    pub strength: Option<Card>,
    pub volition: Option<Card>,
    pub vitality: i64,
    pub selection: Option<Selection>,
    pub play_log: Vec<String>,
    pub game_over: bool,
}
