//! Progress bar display backed by `indicatif`

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::domain::repositories::progress_display::{ProgressDisplay, ProgressDisplayFactory};

const TEMPLATE: &str = "{msg} [{bar:15}] {bytes}/{total_bytes} ({bytes_per_sec})";

/// Draws one progress bar per uploaded file on stdout
pub struct IndicatifDisplayFactory;

impl IndicatifDisplayFactory {
    pub fn new() -> Self {
        Self
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ")
    }
}

impl Default for IndicatifDisplayFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressDisplayFactory for IndicatifDisplayFactory {
    fn create(&self, file_name: &str, total: u64) -> Box<dyn ProgressDisplay> {
        let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stdout());
        bar.set_style(Self::style());
        bar.set_message(format!("Uploading {}", file_name));
        Box::new(IndicatifDisplay::new(bar))
    }
}

pub struct IndicatifDisplay {
    bar: ProgressBar,
}

impl IndicatifDisplay {
    pub fn new(bar: ProgressBar) -> Self {
        Self { bar }
    }
}

impl ProgressDisplay for IndicatifDisplay {
    fn advance(&mut self, delta: u64) {
        self.bar.inc(delta);
    }

    fn finish(&mut self) {
        self.bar.finish();
    }

    fn abandon(&mut self) {
        self.bar.abandon();
    }
}
