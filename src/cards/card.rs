//! Card types: identity, suits, arcana, and the card itself.
//!
//! A `Card` couples an immutable identity (`CardId` + `CardKind`) with one
//! mutable field, `value`. Partial challenge resolution reduces a major
//! card's value in place, and an overkilling Strength keeps its baton
//! equipped at a reduced value - in both cases the card keeps its id.
//!
//! The display label is derived, never stored: minors render as
//! `"{value} {suit initial}"`, so the label tracks value changes for free;
//! majors always render their name.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
///
/// Ids are allocated sequentially by the deck builder and are unique
/// across the deck and every zone for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The four minor-arcana suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Replenish vitality.
    Cups,
    /// Equip as Strength.
    Batons,
    /// Equip as Volition.
    Swords,
    /// Equip as Wisdom.
    Coins,
}

impl Suit {
    /// All suits, in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Cups, Suit::Batons, Suit::Swords, Suit::Coins];

    /// The suit's full name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Cups => "Cups",
            Suit::Batons => "Batons",
            Suit::Swords => "Swords",
            Suit::Coins => "Coins",
        }
    }

    /// First letter of the name, used in card labels.
    ///
    /// Cups and Coins share `C`; a "5 C" label may be either suit.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Suit::Cups | Suit::Coins => 'C',
            Suit::Batons => 'B',
            Suit::Swords => 'S',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The five major-arcana challenges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arcana {
    Death,
    TheMagician,
    TheEmpress,
    TheEmperor,
    TheChariot,
}

impl Arcana {
    /// All arcana, in deck-building order.
    pub const ALL: [Arcana; 5] = [
        Arcana::Death,
        Arcana::TheMagician,
        Arcana::TheEmpress,
        Arcana::TheEmperor,
        Arcana::TheChariot,
    ];

    /// The arcana's printed name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Arcana::Death => "Death",
            Arcana::TheMagician => "The Magician",
            Arcana::TheEmpress => "The Empress",
            Arcana::TheEmperor => "The Emperor",
            Arcana::TheChariot => "The Chariot",
        }
    }

    /// The challenge strength the card enters play with.
    #[must_use]
    pub const fn strength(self) -> i64 {
        match self {
            Arcana::Death => 13,
            Arcana::TheMagician => 1,
            Arcana::TheEmpress => 3,
            Arcana::TheEmperor => 4,
            Arcana::TheChariot => 6,
        }
    }
}

impl std::fmt::Display for Arcana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Discriminates resource cards from challenge cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// A suited resource card, rank 2-10.
    Minor { suit: Suit },
    /// A named challenge card.
    Major { arcana: Arcana },
}

/// A single card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    kind: CardKind,
    value: i64,
}

impl Card {
    /// Create a minor-arcana card with the given rank.
    #[must_use]
    pub fn minor(id: CardId, suit: Suit, rank: i64) -> Self {
        debug_assert!((2..=10).contains(&rank), "minor ranks are 2-10");
        Self {
            id,
            kind: CardKind::Minor { suit },
            value: rank,
        }
    }

    /// Create a major-arcana card at its printed strength.
    #[must_use]
    pub fn major(id: CardId, arcana: Arcana) -> Self {
        Self {
            id,
            kind: CardKind::Major { arcana },
            value: arcana.strength(),
        }
    }

    /// The card's id.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// The card's kind.
    #[must_use]
    pub const fn kind(&self) -> CardKind {
        self.kind
    }

    /// The card's current value: rank for minors, remaining challenge
    /// strength for majors.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// The suit, if this is a minor card.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        match self.kind {
            CardKind::Minor { suit } => Some(suit),
            CardKind::Major { .. } => None,
        }
    }

    /// The arcana, if this is a major card.
    #[must_use]
    pub const fn arcana(&self) -> Option<Arcana> {
        match self.kind {
            CardKind::Major { arcana } => Some(arcana),
            CardKind::Minor { .. } => None,
        }
    }

    /// Check if this is a minor card.
    #[must_use]
    pub const fn is_minor(&self) -> bool {
        matches!(self.kind, CardKind::Minor { .. })
    }

    /// Check if this is a major card.
    #[must_use]
    pub const fn is_major(&self) -> bool {
        matches!(self.kind, CardKind::Major { .. })
    }

    /// Reduce the card's value by `amount`.
    ///
    /// Used when a challenge is partially overcome or an equipped Strength
    /// outvalues the challenge it resolves. The id never changes.
    pub fn reduce_value(&mut self, amount: i64) {
        self.value -= amount;
    }

    /// The label a renderer shows for this card.
    #[must_use]
    pub fn display(&self) -> String {
        match self.kind {
            CardKind::Minor { suit } => format!("{} {}", self.value, suit.initial()),
            CardKind::Major { arcana } => arcana.name().to_string(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_card() {
        let card = Card::minor(CardId::new(7), Suit::Batons, 5);

        assert_eq!(card.id(), CardId::new(7));
        assert!(card.is_minor());
        assert!(!card.is_major());
        assert_eq!(card.suit(), Some(Suit::Batons));
        assert_eq!(card.arcana(), None);
        assert_eq!(card.value(), 5);
        assert_eq!(card.display(), "5 B");
    }

    #[test]
    fn test_major_card() {
        let card = Card::major(CardId::new(40), Arcana::Death);

        assert!(card.is_major());
        assert_eq!(card.suit(), None);
        assert_eq!(card.arcana(), Some(Arcana::Death));
        assert_eq!(card.value(), 13);
        assert_eq!(card.display(), "Death");
    }

    #[test]
    fn test_cups_and_coins_share_initial() {
        let cups = Card::minor(CardId::new(0), Suit::Cups, 5);
        let coins = Card::minor(CardId::new(1), Suit::Coins, 5);

        assert_eq!(cups.display(), "5 C");
        assert_eq!(coins.display(), "5 C");
    }

    #[test]
    fn test_reduce_value_keeps_identity_and_tracks_label() {
        let mut card = Card::major(CardId::new(3), Arcana::TheChariot);
        card.reduce_value(2);

        assert_eq!(card.id(), CardId::new(3));
        assert_eq!(card.value(), 4);
        // Major labels never show the value
        assert_eq!(card.display(), "The Chariot");

        let mut baton = Card::minor(CardId::new(4), Suit::Batons, 7);
        baton.reduce_value(4);
        assert_eq!(baton.value(), 3);
        assert_eq!(baton.display(), "3 B");
    }

    #[test]
    fn test_arcana_strengths() {
        assert_eq!(Arcana::Death.strength(), 13);
        assert_eq!(Arcana::TheMagician.strength(), 1);
        assert_eq!(Arcana::TheEmpress.strength(), 3);
        assert_eq!(Arcana::TheEmperor.strength(), 4);
        assert_eq!(Arcana::TheChariot.strength(), 6);
    }

    #[test]
    fn test_serialization() {
        let card = Card::minor(CardId::new(12), Suit::Swords, 9);

        let json = serde_json::to_string(&card).unwrap();
        let restored: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, restored);
    }
}
