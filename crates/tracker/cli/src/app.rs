//! Feed loop: decode events, apply them, print the roster.
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracker_core::{
    Encounter, EventOutcome, InitiativeEvent, LoggingObserver, RosterStateManager, TrackerError,
};

use crate::config::{CliConfig, OutputConfig, OutputFormat};

pub struct TrackerApp {
    encounter: Encounter,
    output: OutputConfig,
}

impl TrackerApp {
    pub fn new(config: CliConfig) -> Self {
        let roster = RosterStateManager::new()
            .with_config(config.tracker)
            .with_observer(LoggingObserver);

        Self {
            encounter: Encounter::new(roster),
            output: config.output,
        }
    }

    /// Processes feed lines until `input` is exhausted.
    pub async fn run<R, W>(mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let mut line_no = 0usize;

        while let Some(line) = lines.next_line().await? {
            line_no += 1;
            if self.handle_line(line_no, &line).is_none() || !self.output.print_view {
                continue;
            }
            let rendered = self.render()?;
            output.write_all(rendered.as_bytes()).await?;
            output.flush().await?;
        }

        tracing::info!(
            lines = line_no,
            creatures = self.encounter.roster().len(),
            "feed closed"
        );
        Ok(())
    }

    /// Applies one feed line. Bad lines are logged and skipped.
    fn handle_line(&mut self, line_no: usize, line: &str) -> Option<EventOutcome> {
        if line.trim().is_empty() {
            return None;
        }

        let event = match InitiativeEvent::from_json_line(line) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(
                    line = line_no,
                    code = err.error_code(),
                    severity = %err.severity(),
                    "skipping feed line: {err}"
                );
                return None;
            }
        };

        match self.encounter.handle_event(event) {
            Ok(outcome) => {
                log_outcome(&outcome);
                Some(outcome)
            }
            Err(err) => {
                tracing::warn!(
                    line = line_no,
                    code = err.error_code(),
                    severity = %err.severity(),
                    "status not attached: {err}"
                );
                None
            }
        }
    }

    fn render(&self) -> Result<String> {
        let view = self.encounter.view();
        Ok(match self.output.format {
            OutputFormat::Text => format!("{view}\n"),
            OutputFormat::Json => format!("{}\n", serde_json::to_string(&view)?),
        })
    }
}

fn log_outcome(outcome: &EventOutcome) {
    match outcome {
        EventOutcome::Remapped {
            summary,
            active_index,
        } => tracing::info!(
            added = summary.added,
            removed = summary.removed,
            active = active_index,
            "board updated"
        ),
        EventOutcome::TurnChanged(_) => {}
        EventOutcome::StatusAttached {
            creature,
            selection,
        } => tracing::info!(
            creature,
            status = selection.name(),
            category = %selection.category(),
            "status attached"
        ),
        EventOutcome::CreatureMissing { creature } => {
            tracing::warn!(creature, "no creature at roster index")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> TrackerApp {
        TrackerApp::new(CliConfig::default())
    }

    #[test]
    fn garbage_lines_are_skipped() {
        let mut app = app();

        assert!(app.handle_line(1, "not json").is_none());
        assert!(app.handle_line(2, "").is_none());
        assert!(
            app.handle_line(3, r#"{"type":"effect","creature":0,"name":""}"#)
                .is_none()
        );
        assert!(app.encounter.roster().is_empty());
    }

    #[tokio::test]
    async fn run_prints_roster_after_each_event() {
        let feed = concat!(
            r#"{"type":"snapshot","entries":[{"id":1,"name":"Orc","kind":"creature"}]}"#,
            "\n",
            "oops\n",
            r#"{"type":"effect","creature":0,"name":"Haste"}"#,
            "\n",
        );
        let mut out = Vec::new();

        app().run(feed.as_bytes(), &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "> [active] Orc #1\n\n> [active] Orc #1 | effects: Haste (10)\n\n"
        );
    }

    #[tokio::test]
    async fn json_output_is_one_object_per_event() {
        let mut config = CliConfig::default();
        config.output.format = OutputFormat::Json;
        let feed = r#"{"type":"snapshot","entries":[{"id":1,"name":"Orc","kind":"creature"}]}"#;
        let mut out = Vec::new();

        TrackerApp::new(config)
            .run(feed.as_bytes(), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["creatures"][0]["name"], "Orc");
    }
}
