//! Progress reporting for route requests

use indicatif::{ProgressBar, ProgressStyle};
use mobility_application::ProgressNotifier;
use mobility_domain::PipelineStage;
use std::time::Duration;

/// Spinner that follows the pipeline stages and clears itself when done
pub struct ProgressReporter {
    spinner: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_prefix("city-mobility");
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self { spinner }
    }

    /// A spinner for single-call commands that have no stages
    pub fn single(message: &str) -> Self {
        let reporter = Self::new();
        reporter.spinner.set_message(message.to_string());
        reporter
    }

    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if !self.spinner.is_finished() {
            self.spinner.finish_and_clear();
        }
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage(&self, stage: PipelineStage) {
        if stage.is_terminal() {
            self.spinner.finish_and_clear();
        } else {
            self.spinner.set_message(format!("{}...", stage.display_name()));
        }
    }
}
