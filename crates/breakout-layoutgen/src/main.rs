//! breakout-layoutgen: keeps WGSL declarations in step with the host structs.
//!
//! Generates the shared WGSL prelude from the `breakout-shaders` schemas and
//! checks hand-written shaders for declarations that drifted from them.

mod cli;
mod commands;
mod report;

use std::path::Path;
use std::process::ExitCode;

use breakout_config::LayoutgenConfig;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "breakout=info".parse().unwrap()),
            ),
        )
        .init();
}

fn run(
    args: Args,
    config: LayoutgenConfig,
    config_path: &Path,
) -> breakout_common::Result<ExitCode> {
    match args.command {
        Command::Generate { out, stdout } => {
            if stdout {
                let options = commands::prelude_options(&config);
                print!("{}", breakout_shaders::wgsl::generate_prelude(&options));
            } else {
                let (path, changed) = commands::generate(&config, out.as_deref())?;
                if !changed {
                    tracing::info!("{} already up to date", path.display());
                }
            }
        }
        Command::Check { files } => {
            let summary = commands::check(&config, &files)?;
            if !summary.is_clean() {
                tracing::error!(
                    "{} of {} shader files drifted from the host layout",
                    summary.drifted.len(),
                    summary.checked
                );
                return Ok(ExitCode::from(1));
            }
            tracing::info!("{} shader files match the host layout", summary.checked);
        }
        Command::Report { json } => {
            let reports = report::shared_reports();
            if json {
                let text = serde_json::to_string_pretty(&reports)
                    .map_err(|e| breakout_common::BreakoutError::Other(e.to_string()))?;
                println!("{text}");
            } else {
                print!("{}", report::render_table(&reports));
            }
            if reports.iter().any(|r| r.mismatch.is_some()) {
                return Ok(ExitCode::from(1));
            }
        }
        Command::Init { force } => {
            breakout_config::create_default_config(config_path, force)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = cli::parse();
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(breakout_config::default_config_path);

    // `init` must work without (or with a broken) config file.
    let loaded = match args.command {
        Command::Init { .. } => Ok(LayoutgenConfig::default()),
        _ => breakout_config::load_config(&config_path),
    };

    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => "breakout=info".to_string(),
    };
    init_logging(&directive);

    tracing::debug!("breakout-layoutgen v{}", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("failed to load {}: {e}", config_path.display());
            return ExitCode::FAILURE;
        }
    };

    match run(args, config, &config_path) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
