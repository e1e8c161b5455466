//! Configuration File
//!
//! 任意のJSON設定ファイル。コマンドラインの値が優先される

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::application::dto::upload_request::DEFAULT_CHANNEL_CAPACITY;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub email: Option<String>,
    pub password: Option<String>,

    /// Draw a progress bar per file (plain lines otherwise)
    pub show_progress: bool,

    /// Bounded capacity of the per-file progress channel
    pub progress_channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            email: None,
            password: None,
            show_progress: true,
            progress_channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }
}
