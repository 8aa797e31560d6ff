//! Inputs delivered by the tabletop platform's initiative feed.
//!
//! The platform reports the objects on the board and the turn-order control's
//! movements. These types describe that feed; the transport is the caller's
//! concern. With the `serde` feature, events decode from one JSON object per
//! line:
//!
//! ```json
//! {"type":"snapshot","entries":[{"id":1,"name":"Goblin","kind":"creature"}]}
//! {"type":"turn","index":1,"direction":"forward"}
//! {"type":"effect","creature":0,"name":"Bless"}
//! {"type":"condition","creature":0,"name":"Prone"}
//! ```

use crate::roster::TurnDirection;
use crate::state::ExternalId;

/// Kind of board object. Everything that is not a creature is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntityKind {
    Creature,
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

impl EntityKind {
    pub fn is_creature(self) -> bool {
        matches!(self, Self::Creature)
    }
}

/// One object currently on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardEntry {
    pub id: ExternalId,
    pub name: String,
    pub kind: EntityKind,
}

impl BoardEntry {
    pub fn new(id: impl Into<ExternalId>, name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    /// Shorthand for a creature entry.
    pub fn creature(id: impl Into<ExternalId>, name: impl Into<String>) -> Self {
        Self::new(id, name, EntityKind::Creature)
    }
}

/// A single event from the initiative feed or the status form.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum InitiativeEvent {
    /// The full set of objects now on the board.
    Snapshot { entries: Vec<BoardEntry> },

    /// The turn-order control moved to `index`.
    Turn {
        index: usize,
        #[cfg_attr(feature = "serde", serde(default))]
        direction: Option<TurnDirection>,
    },

    /// An effect was picked for the creature at roster index `creature`.
    Effect {
        creature: usize,
        #[cfg_attr(feature = "serde", serde(default))]
        name: Option<String>,
    },

    /// A condition was picked for the creature at roster index `creature`.
    Condition {
        creature: usize,
        #[cfg_attr(feature = "serde", serde(default))]
        name: Option<String>,
    },
}

#[cfg(feature = "serde")]
mod decode {
    use super::InitiativeEvent;
    use crate::error::{ErrorSeverity, TrackerError};

    /// Feed lines that could not be turned into events.
    #[derive(Debug, thiserror::Error)]
    pub enum FeedError {
        #[error("empty feed line")]
        EmptyLine,

        #[error("malformed initiative event: {0}")]
        Malformed(#[from] serde_json::Error),
    }

    impl TrackerError for FeedError {
        fn severity(&self) -> ErrorSeverity {
            ErrorSeverity::Validation
        }

        fn error_code(&self) -> &'static str {
            match self {
                Self::EmptyLine => "FEED_EMPTY_LINE",
                Self::Malformed(_) => "FEED_MALFORMED",
            }
        }
    }

    impl InitiativeEvent {
        /// Decodes one JSON line of the feed.
        pub fn from_json_line(line: &str) -> Result<Self, FeedError> {
            let line = line.trim();
            if line.is_empty() {
                return Err(FeedError::EmptyLine);
            }
            Ok(serde_json::from_str(line)?)
        }
    }
}

#[cfg(feature = "serde")]
pub use decode::FeedError;
