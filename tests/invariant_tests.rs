//! Property tests: the engine's invariants hold over arbitrary action
//! sequences.
//!
//! - vitality stays in [0, 25]
//! - every card id lives in exactly one container
//! - capacities: satchel <= 3, wisdom <= 3, one strength, one volition
//! - the settle pass keeps the adventure field at 2+ while the deck lasts
//! - card count only shrinks via replenish (the one consuming operation
//!   that skips the discard pile)

use std::collections::HashSet;

use proptest::prelude::*;

use fools_journey::{
    ActionOutcome, Card, GameState, Suit, Zone, DECK_SIZE, MAX_VITALITY, SATCHEL_CAPACITY,
    WISDOM_CAPACITY,
};

/// A player input, valid or not - the engine has to cope with both.
#[derive(Clone, Debug)]
enum Cmd {
    Select(Zone, usize),
    Clear,
    Store,
    Equip,
    Replenish,
    Discard,
    ResolveVolition,
    ResolveStrength,
    ResolveDirect,
    Deal(usize),
    Reset,
}

fn cmd_strategy() -> impl Strategy<Value = Cmd> {
    prop_oneof![
        8 => (prop_oneof![Just(Zone::Adventure), Just(Zone::Satchel)], 0..12usize)
            .prop_map(|(zone, index)| Cmd::Select(zone, index)),
        1 => Just(Cmd::Clear),
        3 => Just(Cmd::Store),
        4 => Just(Cmd::Equip),
        3 => Just(Cmd::Replenish),
        4 => Just(Cmd::Discard),
        2 => Just(Cmd::ResolveVolition),
        2 => Just(Cmd::ResolveStrength),
        3 => Just(Cmd::ResolveDirect),
        2 => (1..5usize).prop_map(Cmd::Deal),
        1 => Just(Cmd::Reset),
    ]
}

fn apply(state: &mut GameState, cmd: &Cmd) -> ActionOutcome {
    match cmd {
        Cmd::Select(zone, index) => state.select_card(*zone, *index),
        Cmd::Clear => {
            state.clear_selection();
            ActionOutcome::Applied
        }
        Cmd::Store => state.store_in_satchel(),
        Cmd::Equip => state.equip_card(),
        Cmd::Replenish => state.replenish_vitality(),
        Cmd::Discard => state.discard_card(),
        Cmd::ResolveVolition => state.resolve_with_volition(),
        Cmd::ResolveStrength => state.resolve_with_strength(),
        Cmd::ResolveDirect => state.resolve_directly(),
        Cmd::Deal(n) => {
            state.deal_adventure(*n);
            ActionOutcome::Applied
        }
        Cmd::Reset => {
            state.reset();
            ActionOutcome::Applied
        }
    }
}

proptest! {
    #[test]
    fn invariants_hold_over_any_sequence(
        seed in any::<u64>(),
        cmds in proptest::collection::vec(cmd_strategy(), 1..100),
    ) {
        let mut state = GameState::new(seed);
        let mut cups_spent = 0usize;

        for cmd in &cmds {
            let outcome = apply(&mut state, cmd);
            if matches!(cmd, Cmd::Replenish) && outcome.is_applied() {
                cups_spent += 1;
            }
            if matches!(cmd, Cmd::Reset) {
                cups_spent = 0;
            }

            // Vitality bounds
            prop_assert!((0..=MAX_VITALITY).contains(&state.vitality()));

            // Ownership: each id in exactly one container
            let total = state.all_cards().count();
            let unique: HashSet<_> = state.all_cards().map(Card::id).collect();
            prop_assert_eq!(unique.len(), total);

            // Conservation: cards only leave play through replenish
            prop_assert_eq!(total, DECK_SIZE - cups_spent);

            // Capacities
            prop_assert!(state.satchel().len() <= SATCHEL_CAPACITY);
            prop_assert!(state.equipment().wisdom().len() <= WISDOM_CAPACITY);

            // Settle pass keeps the field stocked while the deck lasts
            prop_assert!(state.adventure_field().len() >= 2 || state.deck_size() == 0);

            // Equipment never holds challenge cards
            prop_assert!(state.equipment().cards().all(Card::is_minor));
        }
    }

    #[test]
    fn rejected_operations_never_log(
        seed in any::<u64>(),
        cmds in proptest::collection::vec(cmd_strategy(), 1..60),
    ) {
        let mut state = GameState::new(seed);

        for cmd in &cmds {
            let mark = state.log().len();
            let outcome = apply(&mut state, cmd);
            if let ActionOutcome::Rejected(_) = outcome {
                prop_assert_eq!(state.log().len(), mark);
            }
        }
    }

    #[test]
    fn legal_actions_always_apply(
        seed in any::<u64>(),
        picks in proptest::collection::vec((0..12usize, 0..4usize), 1..40),
    ) {
        let mut state = GameState::new(seed);

        // Select a card, then take one of the actions the engine itself
        // offered; every offered action must apply cleanly.
        for (card_pick, action_pick) in picks {
            let field_len = state.adventure_field().len();
            if field_len == 0 {
                break;
            }
            state.select_card(Zone::Adventure, card_pick % field_len);

            let actions = state.legal_actions();
            prop_assert!(!actions.is_empty(), "a selected card always has actions");
            let action = actions[action_pick % actions.len()];

            let outcome = state.apply(action);
            prop_assert!(
                outcome.is_applied(),
                "offered action {:?} was rejected: {:?}",
                action,
                outcome
            );
        }
    }
}

/// Deterministic check of the refill arithmetic, down to deck exhaustion:
/// whenever the field would drop below 2 with cards still in the deck,
/// the settle pass brings it to min(4, field + deck).
#[test]
fn refill_matches_arithmetic_to_exhaustion() {
    let mut state = GameState::new(99);

    loop {
        let field_before = state.adventure_field().len();
        let deck_before = state.deck_size();
        if field_before == 0 {
            break;
        }

        state.select_card(Zone::Adventure, 0);
        assert!(state.discard_card().is_applied());

        let shrunk = field_before - 1;
        let expected = if shrunk < 2 && deck_before > 0 {
            (shrunk + deck_before).min(4)
        } else {
            shrunk
        };
        assert_eq!(state.adventure_field().len(), expected);
    }

    assert_eq!(state.deck_size(), 0);
    // Everything but the field ended up in the discard pile
    assert_eq!(state.discard_pile().len(), DECK_SIZE);
}

/// Greedily equipping everything equipable still respects the slot caps.
#[test]
fn greedy_equipping_respects_caps() {
    let mut state = GameState::new(100);
    let mut equipped = 0;

    // Greedily equip everything equipable until the deck runs dry.
    loop {
        let Some(idx) = state.adventure_field().iter().position(|c| {
            matches!(
                c.suit(),
                Some(Suit::Batons) | Some(Suit::Swords) | Some(Suit::Coins)
            )
        }) else {
            if state.deck_size() == 0 {
                break;
            }
            state.deal_adventure(4);
            continue;
        };

        state.select_card(Zone::Adventure, idx);
        if state.equip_card().is_applied() {
            equipped += 1;
        } else {
            // Rejections keep the selection, so the discard lands on the
            // same card.
            state.discard_card();
        }
    }

    // 1 strength + 1 volition + 3 wisdom at most
    assert!(equipped <= 5);
    assert!(state.equipment().strength().is_some());
    assert!(state.equipment().volition().is_some());
    assert_eq!(state.equipment().wisdom().len(), WISDOM_CAPACITY);
}
