use crate::core::calculator::CalculatorModel;
use crate::core::command::Command;
use crate::domain::model::{CalculatorState, StackSnapshot};
use crate::domain::ports::CalculatorListener;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub stop_on_error: bool,
    pub trace_changes: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            stop_on_error: true,
            trace_changes: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub applied: usize,
    pub failed: usize,
}

/// Logs every state change at debug level.
#[derive(Debug, Default)]
pub struct TracingListener {
    changes: u64,
}

impl CalculatorListener for TracingListener {
    fn on_change(&mut self, accumulator: f64, stack: &StackSnapshot) {
        self.changes += 1;
        tracing::debug!(
            "🔄 Change #{}: acc = {}, stack (top first) = {:?}",
            self.changes,
            accumulator,
            stack.as_slice()
        );
    }
}

/// Drives a calculator with a sequence of commands.
pub struct Session {
    model: CalculatorModel,
    settings: SessionSettings,
}

impl Session {
    pub fn new(model: CalculatorModel) -> Self {
        Self::with_settings(model, SessionSettings::default())
    }

    pub fn with_settings(mut model: CalculatorModel, settings: SessionSettings) -> Self {
        if settings.trace_changes {
            model.add_listener(TracingListener::default());
        }
        Self { model, settings }
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        tracing::debug!("▶️ {}", command);
        command.apply(&mut self.model)?;
        Ok(())
    }

    pub fn run<I>(&mut self, commands: I) -> Result<RunSummary>
    where
        I: IntoIterator<Item = Command>,
    {
        let mut summary = RunSummary::default();
        for command in commands {
            let outcome = self.execute(command);
            self.record(outcome, &mut summary)?;
        }
        self.log_summary(&summary);
        Ok(summary)
    }

    /// Parses and runs tokens one at a time, so tokens before a bad one are
    /// already applied when it is reached.
    pub fn run_tokens<S>(&mut self, tokens: &[S]) -> Result<RunSummary>
    where
        S: AsRef<str>,
    {
        let mut summary = RunSummary::default();
        for token in tokens {
            let outcome = token
                .as_ref()
                .parse::<Command>()
                .and_then(|command| self.execute(command));
            self.record(outcome, &mut summary)?;
        }
        self.log_summary(&summary);
        Ok(summary)
    }

    fn record(&self, outcome: Result<()>, summary: &mut RunSummary) -> Result<()> {
        match outcome {
            Ok(()) => {
                summary.applied += 1;
                Ok(())
            }
            Err(e) if self.settings.stop_on_error => {
                tracing::error!("❌ Stopped after {} commands: {}", summary.applied, e);
                Err(e)
            }
            Err(e) => {
                summary.failed += 1;
                tracing::warn!("⏭️ Skipping failed command: {}", e);
                Ok(())
            }
        }
    }

    fn log_summary(&self, summary: &RunSummary) {
        tracing::info!(
            "✅ Session finished: {} applied, {} failed, stack depth {}",
            summary.applied,
            summary.failed,
            self.model.stack_size()
        );
    }

    pub fn state(&self) -> CalculatorState {
        self.model.state()
    }

    pub fn model(&self) -> &CalculatorModel {
        &self.model
    }

    pub fn into_model(self) -> CalculatorModel {
        self.model
    }
}
