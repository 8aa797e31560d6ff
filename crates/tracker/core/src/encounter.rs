//! Routes initiative feed events into a roster.

use crate::catalog::{SelectionError, StatusCategory, StatusSelection};
use crate::feed::{BoardEntry, InitiativeEvent};
use crate::roster::{RemapSummary, RosterStateManager, TurnChange};
use crate::view::RosterView;

/// What handling one event did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    Remapped {
        summary: RemapSummary,
        active_index: usize,
    },
    TurnChanged(TurnChange),
    StatusAttached {
        creature: usize,
        selection: StatusSelection,
    },
    /// The status was valid but no creature sits at that roster index.
    CreatureMissing { creature: usize },
}

/// One tracked encounter: a roster plus the feed handling around it.
#[derive(Debug, Default)]
pub struct Encounter {
    roster: RosterStateManager,
}

impl Encounter {
    pub fn new(roster: RosterStateManager) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &RosterStateManager {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut RosterStateManager {
        &mut self.roster
    }

    pub fn view(&self) -> RosterView {
        self.roster.describe_roster_for_display()
    }

    /// Loads the board as it is when tracking starts.
    pub fn start_tracking(&mut self, entries: &[BoardEntry]) -> RemapSummary {
        let summary = self.roster.remap_creatures(entries);
        self.roster.clamp_active_index();
        tracing::info!(creatures = self.roster.len(), "tracking started");
        summary
    }

    /// Applies one feed event.
    ///
    /// Snapshots keep the turn with whoever held it if they are still on the
    /// board. Only status selections can fail; roster and turn events never do.
    pub fn handle_event(&mut self, event: InitiativeEvent) -> Result<EventOutcome, SelectionError> {
        match event {
            InitiativeEvent::Snapshot { entries } => {
                let active = self.roster.active_creature().map(|creature| creature.key());
                let summary = self.roster.remap_creatures(&entries);
                let active_index = self.roster.follow_active_creature(active.as_ref());
                Ok(EventOutcome::Remapped {
                    summary,
                    active_index,
                })
            }
            InitiativeEvent::Turn { index, direction } => Ok(EventOutcome::TurnChanged(
                self.roster.update_turn_for_creatures(index, direction),
            )),
            InitiativeEvent::Effect { creature, name } => {
                self.attach(creature, StatusCategory::Effect, name.as_deref())
            }
            InitiativeEvent::Condition { creature, name } => {
                self.attach(creature, StatusCategory::Condition, name.as_deref())
            }
        }
    }

    fn attach(
        &mut self,
        creature: usize,
        category: StatusCategory,
        name: Option<&str>,
    ) -> Result<EventOutcome, SelectionError> {
        let selection = StatusSelection::parse(category, name)?;
        if self.roster.apply_selection(creature, selection) {
            Ok(EventOutcome::StatusAttached {
                creature,
                selection,
            })
        } else {
            Ok(EventOutcome::CreatureMissing { creature })
        }
    }
}
