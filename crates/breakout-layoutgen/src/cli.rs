use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Generate and check the WGSL declarations shared with the breakout host code.
#[derive(Parser, Debug)]
#[command(name = "breakout-layoutgen", version, about)]
pub struct Args {
    /// Config file path override (default: ./layoutgen.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override, as a tracing directive (e.g. `breakout=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the generated WGSL prelude.
    Generate {
        /// Output path (default: `generate.out` from the config).
        #[arg(long)]
        out: Option<PathBuf>,

        /// Print the prelude to stdout instead of writing a file.
        #[arg(long, conflicts_with = "out")]
        stdout: bool,
    },

    /// Check WGSL files for struct declarations that drifted from the host.
    Check {
        /// Files to check (default: `check.shaders` from the config).
        files: Vec<PathBuf>,
    },

    /// Print host and WGSL offsets of every shared struct.
    Report {
        #[arg(long)]
        json: bool,
    },

    /// Write a commented default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check_with_files() {
        let args = Args::parse_from(["breakout-layoutgen", "check", "a.wgsl", "b.wgsl"]);
        match args.command {
            Command::Check { files } => assert_eq!(files.len(), 2),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::parse_from([
            "breakout-layoutgen",
            "report",
            "--json",
            "--config",
            "tools/layoutgen.toml",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("tools/layoutgen.toml")));
        assert!(matches!(args.command, Command::Report { json: true }));
    }

    #[test]
    fn stdout_conflicts_with_out() {
        let result = Args::try_parse_from([
            "breakout-layoutgen",
            "generate",
            "--stdout",
            "--out",
            "x.wgsl",
        ]);
        assert!(result.is_err());
    }
}
