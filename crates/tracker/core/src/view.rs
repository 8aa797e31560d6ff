//! Read-only roster views for renderers.

use std::fmt;

use crate::roster::RosterStateManager;
use crate::state::{ExternalId, TrackedCreature};

/// Display-ready snapshot of the roster, in turn order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterView {
    pub active_index: usize,
    pub creatures: Vec<CreatureView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureView {
    pub index: usize,
    pub external_id: ExternalId,
    pub name: String,
    /// True for the one creature whose turn it is.
    pub is_active: bool,
    pub effects: Vec<EffectView>,
    pub conditions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectView {
    pub name: String,
    pub rounds_left: u32,
}

impl RosterView {
    pub fn from_manager(manager: &RosterStateManager) -> Self {
        let active_index = manager.active_creature_index();
        let creatures = manager
            .tracked_creatures()
            .iter()
            .enumerate()
            .map(|(index, creature)| CreatureView::new(index, creature, index == active_index))
            .collect();

        Self {
            active_index,
            creatures,
        }
    }

    /// The entry marked active, if the active index is inside the roster.
    pub fn active(&self) -> Option<&CreatureView> {
        self.creatures.iter().find(|creature| creature.is_active)
    }
}

impl CreatureView {
    fn new(index: usize, creature: &TrackedCreature, is_active: bool) -> Self {
        Self {
            index,
            external_id: creature.external_id(),
            name: creature.name().to_owned(),
            is_active,
            effects: creature
                .effects()
                .iter()
                .map(|effect| EffectView {
                    name: effect.name.clone(),
                    rounds_left: effect.rounds_left,
                })
                .collect(),
            conditions: creature
                .conditions()
                .iter()
                .map(|condition| condition.name.clone())
                .collect(),
        }
    }
}

impl fmt::Display for EffectView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.rounds_left)
    }
}

/// One line per creature; the active one is prefixed with `> [active]`.
impl fmt::Display for CreatureView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_active {
            write!(f, "> [active] ")?;
        } else {
            write!(f, "  ")?;
        }
        write!(f, "{} {}", self.name, self.external_id)?;

        if !self.effects.is_empty() {
            let effects: Vec<String> = self.effects.iter().map(ToString::to_string).collect();
            write!(f, " | effects: {}", effects.join(", "))?;
        }
        if !self.conditions.is_empty() {
            write!(f, " | conditions: {}", self.conditions.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for RosterView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.creatures.is_empty() {
            return writeln!(f, "(no creatures tracked)");
        }
        for creature in &self.creatures {
            writeln!(f, "{creature}")?;
        }
        Ok(())
    }
}

impl RosterStateManager {
    /// Builds the renderer view of the current roster. Pure query.
    pub fn describe_roster_for_display(&self) -> RosterView {
        RosterView::from_manager(self)
    }
}
