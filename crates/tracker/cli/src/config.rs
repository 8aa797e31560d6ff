//! Driver configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use tracker_core::TrackerConfig;

/// Settings for the round-tracker driver.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub tracker: TrackerConfig,
    pub output: OutputConfig,
    /// Directory for `tracker.log`. Stderr-only logging when unset.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TRACKER_DEFAULT_EFFECT_ROUNDS` - Starting rounds for new effects (default: 10)
    /// - `TRACKER_PRINT_VIEW` - Print the roster after each event (default: true)
    /// - `TRACKER_OUTPUT` - `text` or `json` (default: text)
    /// - `TRACKER_LOG_DIR` - Also write logs to `<dir>/tracker.log`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(rounds) = read_env::<u32>("TRACKER_DEFAULT_EFFECT_ROUNDS") {
            config.tracker.default_effect_rounds = rounds.max(1);
        }
        if let Some(print) = read_env_bool("TRACKER_PRINT_VIEW") {
            config.output.print_view = print;
        }
        if let Some(format) = read_env::<String>("TRACKER_OUTPUT") {
            config.output.format = OutputFormat::parse(&format);
        }
        config.log_dir = env::var_os("TRACKER_LOG_DIR").map(PathBuf::from);

        config
    }
}

/// How the roster is written to stdout.
#[derive(Clone, Debug)]
pub struct OutputConfig {
    pub print_view: bool,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            print_view: true,
            format: OutputFormat::Text,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
