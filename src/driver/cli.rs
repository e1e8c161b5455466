//! CLI Argument Parsing
//!
//! CLIの引数解析

use std::path::PathBuf;

use clap::Parser;

use crate::adapter::config::Config;
use crate::application::dto::upload_request::{UploadRequest, UploadTarget};
use crate::domain::errors::UploadError;

pub const USAGE: &str =
    "Usage: megaup --email <email> --password <password> (--path <filepath> | --file <filepath>)";

/// ファイルまたはディレクトリをMEGAにアップロードするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "megaup", version)]
#[command(about = "Upload a file or directory tree to a MEGA account", long_about = None)]
pub struct Args {
    /// MEGA account email
    #[arg(short, long, env = "MEGA_EMAIL", hide_env_values = true)]
    pub email: Option<String>,

    /// MEGA account password
    #[arg(short, long, env = "MEGA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Path to the file or directory to upload
    #[arg(long, conflicts_with = "file")]
    pub path: Option<String>,

    /// Path to a single file to upload
    #[arg(long)]
    pub file: Option<String>,

    /// Print one line per file instead of a progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    /// 引数と設定ファイルからアップロードリクエストを組み立てる
    ///
    /// コマンドラインの値が設定ファイルより優先される。空文字列は未指定と同じ
    pub fn to_request(&self, config: &Config) -> Result<UploadRequest, UploadError> {
        let email = non_empty(&self.email).or_else(|| non_empty(&config.email));
        let password = non_empty(&self.password).or_else(|| non_empty(&config.password));
        let target = match (non_empty(&self.path), non_empty(&self.file)) {
            (Some(path), _) => Some(UploadTarget::Path(expand_path(&path))),
            (None, Some(file)) => Some(UploadTarget::File(expand_path(&file))),
            (None, None) => None,
        };

        match (email, password, target) {
            (Some(email), Some(password), Some(target)) => Ok(UploadRequest::new(
                email, password, target,
            )
            .with_channel_capacity(config.progress_channel_capacity)),
            _ => Err(UploadError::Usage(USAGE.to_string())),
        }
    }

    /// プログレスバーを表示するかどうか
    pub fn show_progress(&self, config: &Config) -> bool {
        !self.no_progress && config.show_progress
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Expands a leading `~` in the target path
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
