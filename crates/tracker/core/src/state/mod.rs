//! Per-creature state owned by the roster.
mod common;
mod creature;
mod status;

pub use common::{CreatureKey, ExternalId};
pub use creature::TrackedCreature;
pub use status::{Condition, Effect};
