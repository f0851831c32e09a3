use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str =
    "{spinner:.green} Checking [{bar:40.cyan/blue}] {pos}/{len} documents ({percent}%)";

/// Progress bar across input documents.
///
/// Rendered on stderr so reports on stdout stay clean. Hidden in quiet
/// mode and when stderr is not a terminal. Clones share the same bar, so
/// rayon workers can advance it concurrently.
#[derive(Clone)]
pub struct CheckProgress {
    bar: ProgressBar,
}

impl CheckProgress {
    /// Bar over `total` documents.
    ///
    /// # Panics
    /// Panics if the bar template is invalid. The template is a constant,
    /// so this cannot happen at runtime.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        Self::with_visibility(total, !quiet && std::io::stderr().is_terminal())
    }

    fn with_visibility(total: u64, visible: bool) -> Self {
        if !visible {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(TEMPLATE)
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        Self { bar }
    }

    /// Advance by one document.
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    /// Remove the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
