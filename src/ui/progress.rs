use indicatif::{ProgressBar, ProgressStyle};

/// Percentage-based progress bar fed by the core's progress callbacks.
///
/// The core reports milestones from 0 to 100; this bar just renders the
/// latest value. Setting a position lower than the current one is ignored
/// so the display can never run backwards.
pub struct PercentBar {
    bar: ProgressBar,
}

impl PercentBar {
    pub fn new(description: &str) -> Self {
        let bar = ProgressBar::new(100);
        let style = ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos:>3}%")
            .expect("valid template")
            .progress_chars("●○ ");

        bar.set_style(style);
        bar.set_message(description.to_string());

        Self { bar }
    }

    /// Renders a new percentage, clamped to 100 and never decreasing.
    pub fn set(&self, percent: u8) {
        let next = u64::from(percent.min(100));
        if next > self.bar.position() {
            self.bar.set_position(next);
        }
    }

    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Done");
    }
}

impl Drop for PercentBar {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish();
        }
    }
}
