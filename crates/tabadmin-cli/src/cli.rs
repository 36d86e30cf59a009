//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabadmin",
    version,
    about = "Admin panel bootstrap - validate configuration and preview table views",
    long_about = "Bootstraps a table-driven admin panel.\n\n\
                  Loads the YAML panel configuration, reads the bootstrap account and\n\
                  application database settings from the environment, and previews how\n\
                  the configured tables resolve against a reflected schema."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate config and environment, and print the table resolution plan.
    Check(CheckArgs),

    /// Report which required environment variables are set.
    Env,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the panel configuration file.
    #[arg(long = "config", value_name = "PATH", default_value = "config.yaml")]
    pub config: PathBuf,

    /// Reflected-schema snapshot (YAML) to resolve the configuration against.
    ///
    /// Without a snapshot, the check stops after validating the config file
    /// and environment settings.
    #[arg(long = "schema", value_name = "PATH")]
    pub schema: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
