//! Turn-change notification.
//!
//! The roster manager notifies exactly one observer, injected at construction,
//! after every turn change. Observers run synchronously before
//! [`RosterStateManager::update_turn_for_creatures`](super::RosterStateManager::update_turn_for_creatures)
//! returns, including on the empty-roster path.

use super::TurnChange;

/// Listener invoked once per completed turn change.
///
/// Any `FnMut(&TurnChange)` closure is an observer.
pub trait TurnObserver {
    fn on_turn_advance(&mut self, change: &TurnChange);
}

impl<F> TurnObserver for F
where
    F: FnMut(&TurnChange),
{
    fn on_turn_advance(&mut self, change: &TurnChange) {
        self(change)
    }
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl TurnObserver for NoopObserver {
    fn on_turn_advance(&mut self, _change: &TurnChange) {}
}

/// Observer that records each change as a structured log event.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingObserver;

impl TurnObserver for LoggingObserver {
    fn on_turn_advance(&mut self, change: &TurnChange) {
        tracing::info!(
            previous = change.previous_index,
            active = change.active_index,
            direction = ?change.direction,
            adjusted = ?change.adjusted_creature,
            "turn advanced"
        );
    }
}
