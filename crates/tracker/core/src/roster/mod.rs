//! Roster ownership, reconciliation and turn scheduling.
//!
//! The [`RosterStateManager`] is the single owner of the tracked creatures of
//! an encounter. Every mutation (reconciling a board snapshot, moving the
//! active turn, attaching statuses) goes through it, and none of its
//! operations fail: out-of-range indices and empty rosters are clamped or
//! ignored so a misbehaving feed cannot break the session.

mod observer;
mod reconcile;
mod turns;

pub use observer::{LoggingObserver, NoopObserver, TurnObserver};
pub use reconcile::RemapSummary;
pub use turns::{TurnChange, TurnDirection};

use crate::catalog::StatusSelection;
use crate::config::TrackerConfig;
use crate::state::TrackedCreature;

/// Owns the roster of one encounter and the pointer to whose turn it is.
///
/// Invariant: after any turn change, `active_creature_index` is inside the
/// roster, or 0 when the roster is empty. Reconciliation may leave the index
/// stale until [`Self::clamp_active_index`] or the next turn change runs.
pub struct RosterStateManager {
    tracked_creatures: Vec<TrackedCreature>,
    active_creature_index: usize,
    /// Set when the creature holding the turn left the roster and the index was
    /// re-pointed. The next turn change then adjusts nobody for the turn it ended.
    turn_holder_removed: bool,
    observer: Box<dyn TurnObserver>,
    config: TrackerConfig,
}

impl RosterStateManager {
    /// Creates a manager with an empty roster and no observer.
    pub fn new() -> Self {
        Self::with_roster(Vec::new(), TrackerConfig::EMPTY_ROSTER_INDEX)
    }

    /// Creates a manager over an existing roster.
    ///
    /// The index is stored as given so callers can restore a turn pointer that
    /// has since been invalidated; it is corrected on the next turn change.
    pub fn with_roster(tracked_creatures: Vec<TrackedCreature>, active_creature_index: usize) -> Self {
        Self {
            tracked_creatures,
            active_creature_index,
            turn_holder_removed: false,
            observer: Box::new(NoopObserver),
            config: TrackerConfig::default(),
        }
    }

    /// Installs the listener notified after each turn change.
    #[must_use]
    pub fn with_observer(mut self, observer: impl TurnObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// The roster in turn order.
    pub fn tracked_creatures(&self) -> &[TrackedCreature] {
        &self.tracked_creatures
    }

    pub fn active_creature_index(&self) -> usize {
        self.active_creature_index
    }

    pub fn len(&self) -> usize {
        self.tracked_creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked_creatures.is_empty()
    }

    pub fn creature(&self, index: usize) -> Option<&TrackedCreature> {
        self.tracked_creatures.get(index)
    }

    /// The creature whose turn it is, if the active index points into the roster.
    pub fn active_creature(&self) -> Option<&TrackedCreature> {
        self.creature(self.active_creature_index)
    }

    /// Attaches an effect with the configured starting duration.
    ///
    /// Returns false, leaving the roster untouched, if no creature sits at `index`.
    pub fn add_effect(&mut self, index: usize, name: impl Into<String>) -> bool {
        let rounds = self.config.default_effect_rounds;
        self.add_effect_for(index, name, rounds)
    }

    /// Attaches an effect lasting `rounds` rounds.
    pub fn add_effect_for(&mut self, index: usize, name: impl Into<String>, rounds: u32) -> bool {
        match self.tracked_creatures.get_mut(index) {
            Some(creature) => {
                creature.add_effect_for(name, rounds);
                true
            }
            None => {
                tracing::debug!(index, "effect target not in roster");
                false
            }
        }
    }

    /// Attaches a condition. Returns false if no creature sits at `index`.
    pub fn add_condition(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.tracked_creatures.get_mut(index) {
            Some(creature) => {
                creature.add_condition(name);
                true
            }
            None => {
                tracing::debug!(index, "condition target not in roster");
                false
            }
        }
    }

    /// Attaches a status validated by the selection form.
    pub fn apply_selection(&mut self, index: usize, selection: StatusSelection) -> bool {
        match selection {
            StatusSelection::Effect(_) => self.add_effect(index, selection.name()),
            StatusSelection::Condition(_) => self.add_condition(index, selection.name()),
        }
    }

    fn index_in_roster(&self, index: usize) -> Option<usize> {
        (index < self.tracked_creatures.len()).then_some(index)
    }
}

impl Default for RosterStateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RosterStateManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterStateManager")
            .field("tracked_creatures", &self.tracked_creatures)
            .field("active_creature_index", &self.active_creature_index)
            .field("turn_holder_removed", &self.turn_holder_removed)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
