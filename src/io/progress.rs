//! Phase progress display for the scatter and border sweep stages

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>12} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for the long-running phases of a sweep
///
/// The scatter advances once per scanned column and the border sweep once
/// per seeded border cell. Construction is gated by the quiet flag, so the
/// pipeline only ever carries an `Option` of this.
#[derive(Debug)]
pub struct SweepProgress {
    current: Option<ProgressBar>,
}

impl Default for SweepProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SweepProgress {
    /// Create a progress display with no active phase
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Begin a phase of `len` steps, replacing any active bar
    pub fn start_phase(&mut self, message: &'static str, len: usize) {
        self.finish_phase();
        let bar = ProgressBar::new(len as u64);
        bar.set_style(PHASE_STYLE.clone());
        bar.set_message(message);
        self.current = Some(bar);
    }

    /// Advance the active phase by `by` steps
    pub fn advance(&mut self, by: u64) {
        if let Some(bar) = &self.current {
            bar.inc(by);
        }
    }

    /// Clear the active phase display
    pub fn finish_phase(&mut self) {
        if let Some(bar) = self.current.take() {
            bar.finish_and_clear();
        }
    }
}
