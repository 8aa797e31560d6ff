/// Tracker configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerConfig {
    /// Starting duration, in rounds, for effects attached through the manager.
    pub default_effect_rounds: u32,
}

impl TrackerConfig {
    // ===== compile-time constants =====
    /// Rounds a freshly attached effect lasts unless configured otherwise.
    pub const DEFAULT_EFFECT_ROUNDS: u32 = 10;

    /// Active index used whenever the roster is empty.
    pub const EMPTY_ROSTER_INDEX: usize = 0;

    pub fn new() -> Self {
        Self {
            default_effect_rounds: Self::DEFAULT_EFFECT_ROUNDS,
        }
    }

    pub fn with_default_effect_rounds(default_effect_rounds: u32) -> Self {
        Self {
            default_effect_rounds,
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new()
    }
}
