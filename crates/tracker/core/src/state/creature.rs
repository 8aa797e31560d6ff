use crate::config::TrackerConfig;

use super::{Condition, CreatureKey, Effect, ExternalId};

/// A creature on the board together with the statuses attached to it.
///
/// Effects and conditions keep insertion order, which is also display order.
/// Duplicate names are allowed and tracked as independent entries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackedCreature {
    external_id: ExternalId,
    name: String,
    effects: Vec<Effect>,
    conditions: Vec<Condition>,
}

impl TrackedCreature {
    /// Creates a creature with no effects or conditions.
    pub fn new(external_id: impl Into<ExternalId>, name: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            name: name.into(),
            effects: Vec::new(),
            conditions: Vec::new(),
        }
    }

    pub fn external_id(&self) -> ExternalId {
        self.external_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Reconciliation identity: both the external id and the name must match.
    pub fn is_same_creature(&self, external_id: ExternalId, name: &str) -> bool {
        self.external_id == external_id && self.name == name
    }

    pub fn key(&self) -> CreatureKey {
        CreatureKey::new(self.external_id, self.name.clone())
    }

    pub fn matches_key(&self, key: &CreatureKey) -> bool {
        self.is_same_creature(key.external_id, &key.name)
    }

    /// Attaches an effect lasting [`TrackerConfig::DEFAULT_EFFECT_ROUNDS`].
    pub fn add_effect(&mut self, name: impl Into<String>) {
        self.add_effect_for(name, TrackerConfig::DEFAULT_EFFECT_ROUNDS);
    }

    /// Attaches an effect lasting `rounds` rounds.
    pub fn add_effect_for(&mut self, name: impl Into<String>, rounds: u32) {
        self.effects.push(Effect::new(name, rounds));
    }

    pub fn add_condition(&mut self, name: impl Into<String>) {
        self.conditions.push(Condition::new(name));
    }

    /// Builder variant of [`Self::add_effect`].
    #[must_use]
    pub fn with_effect(mut self, name: impl Into<String>) -> Self {
        self.add_effect(name);
        self
    }

    /// Builder variant of [`Self::add_condition`].
    #[must_use]
    pub fn with_condition(mut self, name: impl Into<String>) -> Self {
        self.add_condition(name);
        self
    }

    /// A round elapsed for this creature: every effect loses one round.
    pub fn elapse_round(&mut self) {
        for effect in &mut self.effects {
            effect.elapse_round();
            tracing::trace!(
                creature = %self.name,
                effect = %effect.name,
                rounds_left = effect.rounds_left,
                "effect round elapsed"
            );
        }
    }

    /// A round was rewound for this creature: every effect gains one round.
    pub fn rewind_round(&mut self) {
        for effect in &mut self.effects {
            effect.rewind_round();
            tracing::trace!(
                creature = %self.name,
                effect = %effect.name,
                rounds_left = effect.rounds_left,
                "effect round rewound"
            );
        }
    }
}
