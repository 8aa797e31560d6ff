//! Turn and effect-duration tracking for tabletop encounters.
//!
//! `tracker-core` keeps the roster of creatures on the board, whose turn it
//! is, and the timed effects and untimed conditions attached to each creature.
//! All state lives in [`roster::RosterStateManager`]; [`encounter::Encounter`]
//! routes initiative feed events into it and [`view::RosterView`] is what a
//! renderer consumes.
pub mod catalog;
pub mod config;
pub mod encounter;
pub mod error;
pub mod feed;
pub mod roster;
pub mod state;
pub mod view;

pub use catalog::{ConditionKind, EffectKind, SelectionError, StatusCategory, StatusSelection};
pub use config::TrackerConfig;
pub use encounter::{Encounter, EventOutcome};
pub use error::{ErrorSeverity, TrackerError};
#[cfg(feature = "serde")]
pub use feed::FeedError;
pub use feed::{BoardEntry, EntityKind, InitiativeEvent};
pub use roster::{
    LoggingObserver, NoopObserver, RemapSummary, RosterStateManager, TurnChange, TurnDirection,
    TurnObserver,
};
pub use state::{Condition, CreatureKey, Effect, ExternalId, TrackedCreature};
pub use view::{CreatureView, EffectView, RosterView};
