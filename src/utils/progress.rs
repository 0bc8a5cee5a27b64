//! Progress reporting for tile and crop writes
//!
//! Commands draw a bar on stderr. The library facade passes a hidden
//! tracker, so embedding code never sees terminal output.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar counting written (or skipped) tiles and crops
pub struct ProgressTracker {
    bar: ProgressBar,
    noun: &'static str,
}

impl ProgressTracker {
    /// Bar for `total` items, labelled with `noun` ("tiles", "crops")
    pub fn new(total: u64, noun: &'static str) -> Self {
        let bar = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        bar.set_message(format!("writing {}", noun));

        ProgressTracker {
            bar,
            noun,
        }
    }

    /// Tracker that draws nothing
    pub fn hidden() -> Self {
        ProgressTracker {
            bar: ProgressBar::hidden(),
            noun: "items",
        }
    }

    pub fn written(&self) {
        self.bar.inc(1);
    }

    /// Counts item `index` as done without output
    pub fn skipped(&self, index: usize) {
        self.bar.set_message(format!("skipped #{}", index));
        self.bar.inc(1);
    }

    pub fn finish(&self, written: usize) {
        self.bar.finish_with_message(format!("wrote {} {}", written, self.noun));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_written_and_skipped_both_advance() {
        let tracker = ProgressTracker::hidden();
        tracker.written();
        tracker.skipped(1);
        tracker.written();
        assert_eq!(tracker.bar.position(), 3);

        tracker.finish(2);
        assert!(tracker.bar.is_finished());
        assert_eq!(tracker.bar.message(), "wrote 2 items");
    }
}
