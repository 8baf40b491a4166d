use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use shamir_recovery::{Recovery, RecoveryConfig, RecoveryError, RecoveryReport, RecoveryResult};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Recover Shamir secrets from JSON share documents.
#[derive(Debug, Parser)]
#[command(name = "shamir-recovery", version)]
struct Args {
    /// Share documents, one secret each.
    #[arg(default_values = ["test1.json", "test2.json"])]
    files: Vec<PathBuf>,

    /// JSON file with recovery settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Key of the metadata object holding n and k.
    #[arg(long)]
    metadata_key: Option<String>,

    /// Fail when a document's point count differs from n.
    #[arg(long)]
    strict: bool,

    /// Print a JSON array of reports instead of plain lines.
    #[arg(long)]
    json: bool,
}

fn load_config(args: &Args) -> RecoveryResult<RecoveryConfig> {
    let mut config = match &args.config {
        Some(path) => RecoveryConfig::from_file(path)?,
        None => RecoveryConfig::default(),
    };
    if let Some(key) = &args.metadata_key {
        config.metadata_key = key.clone();
    }
    if args.strict {
        config.strict_share_count = true;
    }
    Ok(config)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::from(2);
        }
    };
    let recovery = Recovery::new(config);

    let reports = args
        .files
        .iter()
        .map(|path| {
            let result = fs::read_to_string(path)
                .map_err(RecoveryError::from)
                .and_then(|json| recovery.recover_str(&json));
            if let Err(e) = &result {
                error!(file = %path.display(), "recovery failed: {}", e);
            }
            RecoveryReport::new(path.display().to_string(), &result)
        })
        .collect::<Vec<_>>();

    if args.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to render reports: {}", e);
                return ExitCode::from(2);
            }
        }
    } else {
        for (i, report) in reports.iter().enumerate() {
            match report {
                RecoveryReport::Recovered { secret, .. } => {
                    println!("Secret {}: {}", i + 1, secret)
                }
                RecoveryReport::Failed { source, error } => {
                    eprintln!("Secret {} ({}) failed: {}", i + 1, source, error)
                }
            }
        }
    }

    let failed = reports
        .iter()
        .any(|report| matches!(report, RecoveryReport::Failed { .. }));
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
