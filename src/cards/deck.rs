//! Deck construction.
//!
//! One deck per game: 4 suits x 9 ranks (2 through 10) plus the five
//! major arcana, 41 cards in all, uniformly shuffled. Every call allocates
//! fresh card identities, so games never share card state.

use super::card::{Arcana, Card, CardId, Suit};
use crate::core::GameRng;

/// Minor cards in a deck: 4 suits x ranks 2..=10.
pub const MINOR_COUNT: usize = 36;

/// Major cards in a deck: one per arcana.
pub const MAJOR_COUNT: usize = 5;

/// Total deck size.
pub const DECK_SIZE: usize = MINOR_COUNT + MAJOR_COUNT;

/// Build and shuffle a fresh deck.
///
/// Ids are `0..41`, assigned before the shuffle, unique within the deck.
/// The shuffle is rand's Fisher-Yates, so every ordering is equally likely.
#[must_use]
pub fn build_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    let mut next_id = 0u32;
    let mut alloc = || {
        let id = CardId::new(next_id);
        next_id += 1;
        id
    };

    for suit in Suit::ALL {
        for rank in 2..=10 {
            deck.push(Card::minor(alloc(), suit, rank));
        }
    }

    for arcana in Arcana::ALL {
        deck.push(Card::major(alloc(), arcana));
    }

    rng.shuffle(&mut deck);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;
    use std::collections::HashSet;

    #[test]
    fn test_deck_size_and_composition() {
        let mut rng = GameRng::new(42);
        let deck = build_deck(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);

        let minors = deck.iter().filter(|c| c.is_minor()).count();
        let majors = deck.iter().filter(|c| c.is_major()).count();
        assert_eq!(minors, MINOR_COUNT);
        assert_eq!(majors, MAJOR_COUNT);

        // 9 ranks per suit
        for suit in Suit::ALL {
            let per_suit = deck.iter().filter(|c| c.suit() == Some(suit)).count();
            assert_eq!(per_suit, 9, "{suit} should have 9 ranks");
        }

        // One card per arcana
        for arcana in Arcana::ALL {
            let count = deck.iter().filter(|c| c.arcana() == Some(arcana)).count();
            assert_eq!(count, 1, "{arcana} should appear once");
        }
    }

    #[test]
    fn test_ids_unique() {
        let mut rng = GameRng::new(42);
        let deck = build_deck(&mut rng);

        let ids: HashSet<_> = deck.iter().map(Card::id).collect();
        assert_eq!(ids.len(), DECK_SIZE);
    }

    #[test]
    fn test_minor_ranks_in_range() {
        let mut rng = GameRng::new(42);
        let deck = build_deck(&mut rng);

        for card in deck.iter().filter(|c| c.is_minor()) {
            assert!((2..=10).contains(&card.value()), "bad rank on {card}");
        }
    }

    #[test]
    fn test_majors_at_printed_strength() {
        let mut rng = GameRng::new(42);
        let deck = build_deck(&mut rng);

        for card in &deck {
            if let CardKind::Major { arcana } = card.kind() {
                assert_eq!(card.value(), arcana.strength());
            }
        }
    }

    #[test]
    fn test_shuffle_not_identity() {
        // The unshuffled order is suits then arcana, ids ascending. Over
        // many seeds at least one shuffle must disturb it.
        let mut any_shuffled = false;
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let deck = build_deck(&mut rng);
            let sorted = deck.windows(2).all(|w| w[0].id().raw() < w[1].id().raw());
            if !sorted {
                any_shuffled = true;
            }
        }
        assert!(any_shuffled);
    }

    #[test]
    fn test_fresh_identities_per_call() {
        let mut rng = GameRng::new(42);
        let first = build_deck(&mut rng);
        let second = build_deck(&mut rng);

        // Same id space each game, but independent orderings from the
        // continuing RNG stream.
        assert_eq!(first.len(), second.len());
        let first_ids: Vec<_> = first.iter().map(Card::id).collect();
        let second_ids: Vec<_> = second.iter().map(Card::id).collect();
        assert_ne!(first_ids, second_ids);
    }
}
