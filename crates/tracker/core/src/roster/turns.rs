use crate::config::TrackerConfig;

use super::RosterStateManager;

/// Direction the turn order moved in.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TurnDirection {
    /// The previous creature finished acting; its effects lose a round.
    Forward,
    /// The turn is handed back; the creature regaining it gets a round back.
    Backward,
}

impl TurnDirection {
    /// Infers the direction from how the index moved.
    ///
    /// Returns None when the index did not move or the previous index no
    /// longer points into the roster.
    fn infer(previous: Option<usize>, next: usize) -> Option<Self> {
        let previous = previous?;
        match next.cmp(&previous) {
            std::cmp::Ordering::Greater => Some(Self::Forward),
            std::cmp::Ordering::Less => Some(Self::Backward),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Outcome of one turn change, handed to the observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnChange {
    /// Active index before the call, possibly stale.
    pub previous_index: usize,
    /// Active index after the call.
    pub active_index: usize,
    /// Direction the durations were adjusted in, if any.
    pub direction: Option<TurnDirection>,
    /// Roster index of the creature whose effect durations changed.
    pub adjusted_creature: Option<usize>,
}

/// Turn scheduling methods for RosterStateManager.
impl RosterStateManager {
    /// Moves the active turn to `new_active_index` and updates effect durations.
    ///
    /// - Forward: each effect of the creature that was active loses one round
    ///   (floored at zero).
    /// - Backward: each effect of the creature becoming active gains one round,
    ///   undoing the round it lost when its turn ended.
    ///
    /// Without an explicit direction it is inferred from the index movement. An
    /// out-of-range index restarts at the top of the order, an empty roster
    /// resets the index to 0, and a creature that is no longer in the roster is
    /// simply not adjusted. That includes a turn holder removed by
    /// reconciliation after the index was re-pointed at someone else. The
    /// observer is notified exactly once on every path.
    pub fn update_turn_for_creatures(
        &mut self,
        new_active_index: usize,
        direction: Option<TurnDirection>,
    ) -> TurnChange {
        let previous_index = self.active_creature_index;
        let turn_holder_removed = std::mem::take(&mut self.turn_holder_removed);

        let change = if self.tracked_creatures.is_empty() {
            self.active_creature_index = TrackerConfig::EMPTY_ROSTER_INDEX;
            TurnChange {
                previous_index,
                active_index: self.active_creature_index,
                direction: None,
                adjusted_creature: None,
            }
        } else {
            let requested = self.index_in_roster(new_active_index);
            let active_index = requested.unwrap_or(TrackerConfig::EMPTY_ROSTER_INDEX);
            let previous = if turn_holder_removed {
                None
            } else {
                self.index_in_roster(previous_index)
            };
            let direction = direction.or_else(|| TurnDirection::infer(previous, active_index));

            let adjusted_creature = match direction {
                Some(TurnDirection::Forward) => self.elapse_round_for(previous),
                Some(TurnDirection::Backward) => self.rewind_round_for(requested),
                None => None,
            };

            self.active_creature_index = active_index;
            TurnChange {
                previous_index,
                active_index,
                direction,
                adjusted_creature,
            }
        };

        tracing::debug!(
            previous = change.previous_index,
            requested = new_active_index,
            active = change.active_index,
            direction = ?change.direction,
            "turn changed"
        );

        self.observer.on_turn_advance(&change);
        change
    }

    fn elapse_round_for(&mut self, index: Option<usize>) -> Option<usize> {
        let index = index?;
        self.tracked_creatures.get_mut(index)?.elapse_round();
        Some(index)
    }

    fn rewind_round_for(&mut self, index: Option<usize>) -> Option<usize> {
        let index = index?;
        self.tracked_creatures.get_mut(index)?.rewind_round();
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::state::TrackedCreature;

    fn heroic(count: usize) -> Vec<TrackedCreature> {
        (0..count)
            .map(|_| TrackedCreature::new(1, "Test").with_effect("Heroism"))
            .collect()
    }

    fn rounds(manager: &RosterStateManager, index: usize) -> u32 {
        manager.creature(index).unwrap().effects()[0].rounds_left
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("Backward".parse::<TurnDirection>().unwrap(), TurnDirection::Backward);
        assert_eq!(TurnDirection::Forward.to_string(), "forward");
    }

    #[test]
    fn forward_decrements_previous_creature() {
        let mut manager = RosterStateManager::with_roster(heroic(2), 0);

        let change = manager.update_turn_for_creatures(1, None);

        assert_eq!(rounds(&manager, 0), 9);
        assert_eq!(rounds(&manager, 1), 10);
        assert_eq!(change.direction, Some(TurnDirection::Forward));
        assert_eq!(change.adjusted_creature, Some(0));
    }

    #[test]
    fn lower_index_is_inferred_backward() {
        let mut manager = RosterStateManager::with_roster(heroic(2), 0);

        manager.update_turn_for_creatures(1, None);
        let change = manager.update_turn_for_creatures(0, None);

        assert_eq!(rounds(&manager, 0), 10);
        assert_eq!(change.direction, Some(TurnDirection::Backward));
    }

    #[test]
    fn same_index_adjusts_nothing() {
        let mut manager = RosterStateManager::with_roster(heroic(1), 0);

        let change = manager.update_turn_for_creatures(0, None);

        assert_eq!(rounds(&manager, 0), 10);
        assert_eq!(change.adjusted_creature, None);
    }

    #[test]
    fn explicit_forward_wraps_to_top() {
        let mut manager = RosterStateManager::with_roster(heroic(3), 2);

        manager.update_turn_for_creatures(0, Some(TurnDirection::Forward));

        assert_eq!(rounds(&manager, 2), 9);
        assert_eq!(rounds(&manager, 0), 10);
    }

    #[test]
    fn expired_effect_stays_at_zero() {
        let mut creature = TrackedCreature::new(1, "Test");
        creature.add_effect_for("Bless", 0);
        let mut manager = RosterStateManager::with_roster(vec![creature, TrackedCreature::new(2, "B")], 0);

        manager.update_turn_for_creatures(1, None);

        assert_eq!(rounds(&manager, 0), 0);
    }

    #[test]
    fn out_of_range_target_clamps_to_top() {
        let mut manager = RosterStateManager::with_roster(heroic(2), 0);

        let change = manager.update_turn_for_creatures(5, None);

        assert_eq!(change.active_index, 0);
        assert_eq!(manager.active_creature_index(), 0);
        assert_eq!(rounds(&manager, 0), 10);
    }

    #[test]
    fn backward_into_missing_creature_is_noop() {
        let mut manager = RosterStateManager::with_roster(heroic(2), 1);

        let change = manager.update_turn_for_creatures(4, Some(TurnDirection::Backward));

        assert_eq!(change.active_index, 0);
        assert_eq!(change.adjusted_creature, None);
        assert_eq!(rounds(&manager, 0), 10);
        assert_eq!(rounds(&manager, 1), 10);
    }

    #[test]
    fn observer_fires_once_per_call() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut manager = RosterStateManager::with_roster(heroic(2), 0)
            .with_observer(move |_: &TurnChange| counter.set(counter.get() + 1));

        manager.update_turn_for_creatures(1, None);
        manager.update_turn_for_creatures(1, None);
        manager.update_turn_for_creatures(9, Some(TurnDirection::Backward));

        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn observer_fires_on_empty_roster() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut manager = RosterStateManager::with_roster(Vec::new(), 3)
            .with_observer(move |_: &TurnChange| counter.set(counter.get() + 1));

        let change = manager.update_turn_for_creatures(2, None);

        assert_eq!(change.active_index, 0);
        assert_eq!(calls.get(), 1);
    }
}
