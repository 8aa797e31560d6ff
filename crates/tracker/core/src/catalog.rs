//! Built-in statuses offered by the add-status form.
//!
//! The roster accepts any effect or condition name; this catalog is the list
//! the selection form offers, and [`StatusSelection::parse`] is the validation
//! a form submission goes through before it reaches the roster.

use strum::IntoEnumIterator;

use crate::error::{ErrorSeverity, TrackerError};

/// Timed buffs and debuffs that can be attached as effects.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum EffectKind {
    Aid,
    Bane,
    Barkskin,
    Bless,
    Blur,
    Enlarge,
    FaerieFire,
    Haste,
    Heroism,
    Hex,
    Invisibility,
    MageArmor,
    Reduce,
    ShieldOfFaith,
    Slow,
}

/// Untimed conditions from the standard tabletop rules.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum ConditionKind {
    Blinded,
    Charmed,
    Deafened,
    Exhaustion,
    Frightened,
    Grappled,
    Incapacitated,
    Invisible,
    Paralyzed,
    Petrified,
    Poisoned,
    Prone,
    Restrained,
    Stunned,
    Unconscious,
}

impl EffectKind {
    /// All selectable effects, in menu order.
    pub fn list() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl ConditionKind {
    /// All selectable conditions, in menu order.
    pub fn list() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// Which list a selection was made from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum StatusCategory {
    Effect,
    Condition,
}

/// A validated choice from the add-status form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusSelection {
    Effect(EffectKind),
    Condition(ConditionKind),
}

impl StatusSelection {
    /// Validates the raw value submitted for `category`.
    ///
    /// Missing or blank input means nothing was chosen; anything else must name
    /// a catalog entry (case-insensitive, surrounding whitespace ignored).
    pub fn parse(category: StatusCategory, raw: Option<&str>) -> Result<Self, SelectionError> {
        let name = raw
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(SelectionError::NothingChosen { category })?;

        let unknown = || SelectionError::Unknown {
            category,
            name: name.to_owned(),
        };
        match category {
            StatusCategory::Effect => name.parse().map(Self::Effect).map_err(|_| unknown()),
            StatusCategory::Condition => name.parse().map(Self::Condition).map_err(|_| unknown()),
        }
    }

    pub fn category(&self) -> StatusCategory {
        match self {
            Self::Effect(_) => StatusCategory::Effect,
            Self::Condition(_) => StatusCategory::Condition,
        }
    }

    /// Display name as stored on the creature.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Effect(kind) => (*kind).into(),
            Self::Condition(kind) => (*kind).into(),
        }
    }
}

/// Rejected form submissions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("no {category} was chosen")]
    NothingChosen { category: StatusCategory },

    #[error("unknown {category}: {name}")]
    Unknown {
        category: StatusCategory,
        name: String,
    },
}

impl TrackerError for SelectionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NothingChosen { .. } => ErrorSeverity::Recoverable,
            Self::Unknown { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NothingChosen { .. } => "SELECTION_NOTHING_CHOSEN",
            Self::Unknown { .. } => "SELECTION_UNKNOWN",
        }
    }
}
