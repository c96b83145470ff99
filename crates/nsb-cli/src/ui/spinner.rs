//! Spinner for steps without a known duration.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Spinner drawn on stderr.
///
/// Nothing is drawn when stderr is not a terminal.
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Create and start a new spinner.
    pub fn new(message: &str) -> Self {
        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("valid template")
                .tick_strings(&["◐", "◓", "◑", "◒", "●"]),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    /// A spinner that never draws, for `--quiet`.
    pub fn hidden() -> Self {
        Self {
            pb: ProgressBar::hidden(),
        }
    }

    /// Update the message while the spinner runs.
    pub fn set_message(&self, message: &str) {
        self.pb.set_message(message.to_string());
    }

    /// Stop the spinner and print a success line.
    pub fn finish(&self, message: &str) {
        self.pb.finish_and_clear();
        if !self.pb.is_hidden() {
            super::success(message);
        }
    }

    /// Stop the spinner and print a failure line.
    pub fn fail(&self, message: &str) {
        self.pb.finish_and_clear();
        if !self.pb.is_hidden() {
            super::error(message);
        }
    }

    /// Stop the spinner without printing anything.
    pub fn clear(&self) {
        self.pb.finish_and_clear();
    }
}
