//! Command-line entry point for `s3dump`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use url::Url;

use s3dump::{
    DEFAULT_BATCH_COUNT, DEFAULT_FROM_PREFIX, DEFAULT_TO_PREFIX, DumpConfig, Dumper, Error,
};

/// Dump every object from an open S3-compatible bucket.
#[derive(Debug, Parser)]
#[command(name = "s3dump", version, about)]
struct Args {
    /// Base URL of the bucket listing endpoint
    url: Url,

    /// Number of objects downloaded simultaneously
    #[arg(short, long, default_value_t = DEFAULT_BATCH_COUNT)]
    batch_count: usize,

    /// Output directory for dumped objects
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// First listing prefix to enumerate
    #[arg(short, long, default_value_t = DEFAULT_FROM_PREFIX)]
    from_prefix: u32,

    /// Last listing prefix to enumerate (inclusive)
    #[arg(short, long, default_value_t = DEFAULT_TO_PREFIX)]
    to_prefix: u32,
}

impl Args {
    fn into_config(self) -> DumpConfig {
        let mut config = DumpConfig::new(self.url);
        config.batch_count = self.batch_count;
        config.output_dir = self.output;
        config.from_prefix = self.from_prefix;
        config.to_prefix = self.to_prefix;
        config
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();

    let dumper = match Dumper::new(args.into_config()) {
        Ok(dumper) => dumper,
        Err(error) => {
            tracing::error!(%error, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    match dumper.run().await {
        Ok(report) if report.failed == 0 => {
            tracing::info!(dumped = report.dumped, "dump complete");
            ExitCode::SUCCESS
        }
        Ok(report) => {
            tracing::error!(
                dumped = report.dumped,
                failed = report.failed,
                "dump finished with failures"
            );
            ExitCode::FAILURE
        }
        Err(Error::OutputDirNotFound(dir)) => {
            eprintln!("[!] Unable to find directory {}.", dir.display());
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(%error, "dump aborted");
            ExitCode::FAILURE
        }
    }
}
