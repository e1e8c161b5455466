//! megaup - MEGA uploader
//!
//! ファイルまたはディレクトリツリーを MEGA にアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::error;

use megaup::adapter::config::Config;
use megaup::adapter::mega::client::MegaConnector;
use megaup::adapter::progress::{IndicatifDisplayFactory, LineDisplayFactory};
use megaup::domain::errors::UploadError;
use megaup::domain::repositories::progress_display::ProgressDisplayFactory;
use megaup::driver::{Args, UploadWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<UploadError>() {
            Some(upload_err @ UploadError::Usage(usage)) => {
                println!("{}", usage);
                let _ = Args::command().print_help();
                ExitCode::from(upload_err.exit_code())
            }
            Some(upload_err) => {
                error!("{:#}", err);
                ExitCode::from(upload_err.exit_code())
            }
            // Configuration failures
            None => {
                error!("{:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
async fn run(args: Args) -> Result<()> {
    // Load configuration only when explicitly requested
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let request = args.to_request(&config)?;

    let displays: Arc<dyn ProgressDisplayFactory> = if args.show_progress(&config) {
        Arc::new(IndicatifDisplayFactory::new())
    } else {
        Arc::new(LineDisplayFactory::new())
    };

    // Create workflow with injected dependencies
    let workflow = UploadWorkflow::new(Arc::new(MegaConnector::new()), displays);

    workflow.execute(request).await?;
    Ok(())
}
