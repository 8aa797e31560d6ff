use std::cell::Cell;
use std::rc::Rc;

use tracker_core::{
    BoardEntry, EntityKind, RosterStateManager, TrackedCreature, TrackerConfig, TurnChange,
    TurnDirection,
};

fn test_entry() -> BoardEntry {
    BoardEntry::new(1, "Test", EntityKind::Creature)
}

fn heroic_roster(count: usize) -> Vec<TrackedCreature> {
    (0..count)
        .map(|_| TrackedCreature::new(1, "Test").with_effect("Heroism"))
        .collect()
}

fn heroism_rounds(manager: &RosterStateManager, index: usize) -> u32 {
    manager.creature(index).unwrap().effects()[0].rounds_left
}

fn counting_observer() -> (Rc<Cell<usize>>, impl FnMut(&TurnChange)) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    (calls, move |_: &TurnChange| counter.set(counter.get() + 1))
}

#[test]
fn new_creatures_map() {
    let mut manager = RosterStateManager::new();

    manager.remap_creatures(&[test_entry()]);

    assert_eq!(manager.tracked_creatures(), &[TrackedCreature::new(1, "Test")]);
}

#[test]
fn existing_creatures_stay_mapped() {
    let existing = vec![TrackedCreature::new(1, "Test").with_effect("Bless")];
    let mut manager = RosterStateManager::with_roster(existing.clone(), 0);
    manager.update_turn_for_creatures(0, None);

    manager.remap_creatures(&[test_entry()]);

    assert_eq!(manager.tracked_creatures(), existing.as_slice());
}

#[test]
fn missing_creatures_are_removed() {
    let mut manager = RosterStateManager::with_roster(vec![TrackedCreature::new(1, "Test")], 0);

    manager.remap_creatures(&[]);

    assert!(manager.tracked_creatures().is_empty());
}

#[test]
fn every_turn_invokes_observer() {
    let (calls, observer) = counting_observer();
    let mut manager =
        RosterStateManager::with_roster(vec![TrackedCreature::new(1, "Test")], 0).with_observer(observer);

    manager.update_turn_for_creatures(0, None);

    assert_eq!(calls.get(), 1);
}

#[test]
fn advancing_from_first_to_second_decrements_first() {
    let mut manager = RosterStateManager::with_roster(heroic_roster(2), 0);

    manager.update_turn_for_creatures(1, None);

    assert_eq!(heroism_rounds(&manager, 0), 9);
}

#[test]
fn rewinding_from_second_to_first_restores_first() {
    let mut manager = RosterStateManager::with_roster(heroic_roster(2), 0);

    manager.update_turn_for_creatures(1, None);
    assert_eq!(heroism_rounds(&manager, 0), 9);

    manager.update_turn_for_creatures(0, None);
    assert_eq!(heroism_rounds(&manager, 0), 10);
}

#[test]
fn full_round_then_rewind_restores_last_creature() {
    let mut manager = RosterStateManager::with_roster(heroic_roster(3), 0);

    manager.update_turn_for_creatures(1, None);
    manager.update_turn_for_creatures(2, None);
    manager.update_turn_for_creatures(0, Some(TurnDirection::Forward));

    assert_eq!(heroism_rounds(&manager, 2), 9);

    manager.update_turn_for_creatures(2, Some(TurnDirection::Backward));

    assert_eq!(heroism_rounds(&manager, 2), 10);
    assert_eq!(manager.active_creature_index(), 2);
}

#[test]
fn forward_then_backward_round_trip_is_exact() {
    let mut creature = TrackedCreature::new(1, "A").with_effect("Heroism");
    creature.add_effect_for("Bless", 3);
    let mut manager = RosterStateManager::with_roster(vec![creature, TrackedCreature::new(2, "B")], 0);
    let before = manager.tracked_creatures().to_vec();

    manager.update_turn_for_creatures(1, Some(TurnDirection::Forward));
    manager.update_turn_for_creatures(0, Some(TurnDirection::Backward));

    assert_eq!(manager.tracked_creatures(), before.as_slice());
}

#[test]
fn last_creature_removed_while_active_does_not_panic() {
    let (calls, observer) = counting_observer();
    let mut manager = RosterStateManager::with_roster(Vec::new(), 0).with_observer(observer);

    let change = manager.update_turn_for_creatures(0, None);

    assert_eq!(manager.active_creature_index(), 0);
    assert_eq!(change.adjusted_creature, None);
    assert_eq!(calls.get(), 1);
}

#[test]
fn active_creature_removed_clamps_into_roster() {
    let mut manager = RosterStateManager::with_roster(
        vec![TrackedCreature::new(1, "Test"), TrackedCreature::new(1, "Test")],
        2,
    );

    let change = manager.update_turn_for_creatures(0, Some(TurnDirection::Forward));

    assert_eq!(manager.active_creature_index(), 0);
    assert_eq!(change.adjusted_creature, None);
}

#[test]
fn removal_then_turn_keeps_invariant() {
    let mut manager = RosterStateManager::with_roster(
        vec![
            TrackedCreature::new(1, "A"),
            TrackedCreature::new(2, "B"),
            TrackedCreature::new(3, "C"),
        ],
        2,
    );

    manager.remap_creatures(&[BoardEntry::creature(1, "A")]);
    manager.update_turn_for_creatures(3, None);

    assert!(manager.active_creature_index() < manager.len());
}

#[test]
fn display_marks_only_active_entry() {
    let manager = RosterStateManager::with_roster(
        vec![TrackedCreature::new(1, "Test1"), TrackedCreature::new(1, "Test2")],
        1,
    );

    let view = manager.describe_roster_for_display();

    assert_eq!(view.creatures.iter().filter(|c| c.is_active).count(), 1);
    assert_eq!(view.active().unwrap().name, "Test2");
    let text = view.to_string();
    assert!(text.contains("Test1"));
    assert!(text.contains("Test2"));
}

#[test]
fn display_lists_effects_and_conditions() {
    let creature = TrackedCreature::new(1, "Test1")
        .with_effect("Heroism")
        .with_effect("Bless")
        .with_condition("Blinded")
        .with_condition("Charmed");
    let manager = RosterStateManager::with_roster(vec![creature], 0);

    let view = manager.describe_roster_for_display();
    let text = view.to_string();

    for expected in ["Heroism", "Bless", "Blinded", "Charmed"] {
        assert!(text.contains(expected), "missing {expected} in {text}");
    }
    let entry = &view.creatures[0];
    assert!(
        entry
            .effects
            .iter()
            .all(|e| e.rounds_left == TrackerConfig::DEFAULT_EFFECT_ROUNDS)
    );
    assert_eq!(entry.conditions, vec!["Blinded", "Charmed"]);
}

#[test]
fn display_reflects_elapsed_rounds() {
    let mut manager = RosterStateManager::with_roster(heroic_roster(2), 0);

    manager.update_turn_for_creatures(1, None);

    let view = manager.describe_roster_for_display();
    assert_eq!(view.creatures[0].effects[0].rounds_left, 9);
    assert!(view.creatures[1].is_active);
}
