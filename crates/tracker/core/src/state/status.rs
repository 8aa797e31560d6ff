//! Effects and conditions attached to tracked creatures.
//!
//! # Round-based Duration
//!
//! Effects store the number of rounds they have left. The counter is opaque to
//! the tracker: it only moves down when a round elapses for the owning
//! creature and back up when that round is rewound. It never goes below zero
//! and expired effects are kept so a rewind can bring them back.

/// A named, timed status with a remaining-rounds counter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub name: String,
    /// Rounds left before the effect runs out.
    pub rounds_left: u32,
}

impl Effect {
    pub fn new(name: impl Into<String>, rounds_left: u32) -> Self {
        Self {
            name: name.into(),
            rounds_left,
        }
    }

    /// Consumes one round, stopping at zero.
    pub fn elapse_round(&mut self) {
        self.rounds_left = self.rounds_left.saturating_sub(1);
    }

    /// Gives back one round after a turn is rewound.
    pub fn rewind_round(&mut self) {
        self.rounds_left = self.rounds_left.saturating_add(1);
    }

    /// Returns true once the effect has no rounds left.
    pub fn is_expired(&self) -> bool {
        self.rounds_left == 0
    }
}

/// A named, untimed status. Present or absent, nothing else.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    pub name: String,
}

impl Condition {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
