//! Plain line display for `--no-progress`

use crate::domain::repositories::progress_display::{ProgressDisplay, ProgressDisplayFactory};

/// Prints a line when a file starts and when it completes
pub struct LineDisplayFactory;

impl LineDisplayFactory {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LineDisplayFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressDisplayFactory for LineDisplayFactory {
    fn create(&self, file_name: &str, total: u64) -> Box<dyn ProgressDisplay> {
        println!("Uploading {} ({} bytes)...", file_name, total);
        Box::new(LineDisplay::new(file_name, total))
    }
}

pub struct LineDisplay {
    name: String,
    total: u64,
    done: u64,
}

impl LineDisplay {
    pub fn new(name: &str, total: u64) -> Self {
        Self {
            name: name.to_string(),
            total,
            done: 0,
        }
    }

    pub fn done(&self) -> u64 {
        self.done
    }
}

impl ProgressDisplay for LineDisplay {
    fn advance(&mut self, delta: u64) {
        self.done += delta;
    }

    fn finish(&mut self) {
        println!("✓ {} ({} bytes)", self.name, self.done);
    }

    fn abandon(&mut self) {
        println!("✗ {} ({}/{} bytes)", self.name, self.done, self.total);
    }
}
