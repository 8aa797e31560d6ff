use std::fmt;

/// Identifier assigned to a board object by the external tabletop feed.
///
/// Ids are not guaranteed to be unique across re-adds, so the tracker never
/// uses them alone as a key. See [`crate::TrackedCreature::is_same_creature`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ExternalId(pub i64);

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<i64> for ExternalId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i32> for ExternalId {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

/// Reconciliation identity of a tracked creature.
///
/// Two creatures are the same when both the external id and the name match.
/// A creature that is removed and re-added under a reused id and the same name
/// is indistinguishable from the original.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureKey {
    pub external_id: ExternalId,
    pub name: String,
}

impl CreatureKey {
    pub fn new(external_id: impl Into<ExternalId>, name: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for CreatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.external_id)
    }
}
