use crate::config::TrackerConfig;
use crate::feed::BoardEntry;
use crate::state::{CreatureKey, TrackedCreature};

use super::RosterStateManager;

/// Counts of what a reconciliation changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemapSummary {
    pub added: usize,
    pub removed: usize,
    pub retained: usize,
}

impl RemapSummary {
    pub fn is_unchanged(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

/// Reconciliation methods for RosterStateManager.
impl RosterStateManager {
    /// Merges a board snapshot into the roster.
    ///
    /// Only creature entries take part. Tracked creatures still on the board
    /// are kept as they are (effect timers included) in their current order,
    /// creatures no longer on the board are dropped, and unseen creatures are
    /// appended in snapshot order. The active index is left alone; see
    /// [`Self::clamp_active_index`] and [`Self::follow_active_creature`].
    pub fn remap_creatures(&mut self, entries: &[BoardEntry]) -> RemapSummary {
        let incoming: Vec<&BoardEntry> = entries.iter().filter(|e| e.kind.is_creature()).collect();

        let before = self.tracked_creatures.len();
        self.tracked_creatures
            .retain(|creature| incoming.iter().any(|e| creature.is_same_creature(e.id, &e.name)));
        let retained = self.tracked_creatures.len();

        let mut added = 0;
        for entry in incoming {
            let known = self
                .tracked_creatures
                .iter()
                .any(|creature| creature.is_same_creature(entry.id, &entry.name));
            if !known {
                self.tracked_creatures
                    .push(TrackedCreature::new(entry.id, entry.name.clone()));
                added += 1;
            }
        }

        let summary = RemapSummary {
            added,
            removed: before - retained,
            retained,
        };
        tracing::debug!(
            added = summary.added,
            removed = summary.removed,
            retained = summary.retained,
            "roster remapped"
        );
        summary
    }

    /// Pulls a stale active index back into the roster.
    ///
    /// An index past the end of the roster restarts at the top of the order;
    /// an empty roster resets to 0. Returns the corrected index. A corrected
    /// index no longer names the creature whose turn it was, so the next turn
    /// change does not charge anyone a round for the turn it ends.
    pub fn clamp_active_index(&mut self) -> usize {
        let corrected = self
            .index_in_roster(self.active_creature_index)
            .unwrap_or(TrackerConfig::EMPTY_ROSTER_INDEX);
        if corrected != self.active_creature_index {
            tracing::debug!(
                stale = self.active_creature_index,
                corrected,
                "active index clamped"
            );
            self.active_creature_index = corrected;
            self.turn_holder_removed = true;
        }
        corrected
    }

    /// Re-points the active index at `key` after a reconciliation.
    ///
    /// Falls back to [`Self::clamp_active_index`] when the creature is gone or
    /// no key was captured. If the creature is gone, the next turn change skips
    /// the round adjustment for the turn it held.
    pub fn follow_active_creature(&mut self, key: Option<&CreatureKey>) -> usize {
        let position = key.and_then(|key| {
            self.tracked_creatures
                .iter()
                .position(|creature| creature.matches_key(key))
        });
        match position {
            Some(index) => {
                self.active_creature_index = index;
                index
            }
            None => {
                let corrected = self.clamp_active_index();
                if key.is_some() {
                    self.turn_holder_removed = true;
                }
                corrected
            }
        }
    }
}
