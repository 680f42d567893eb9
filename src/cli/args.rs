//! CLI argument definitions for `gpaadvisor`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gpa_advisor::config::ConfigOverrides;
use gpa_advisor::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `scheme`, `faculty`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show semester-by-semester grades and GPA.
    ///
    /// Reads a student portal JSON response and resolves every attempt
    /// against the configured curriculum.
    Transcript {
        /// Student portal JSON file, or `-` to read it from stdin
        #[arg(value_name = "STUDENT")]
        student: String,

        /// Only show this semester (e.g., 20231)
        #[arg(long, value_name = "ID")]
        semester: Option<String>,

        /// Output format: text (txt), markdown (md), or json
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Append the degree progress report
        #[arg(long)]
        progress: bool,

        /// Also save the report into the configured reports directory
        #[arg(long)]
        save: bool,
    },
    /// Show earned credit hours and remaining curriculum courses.
    Progress {
        /// Student portal JSON file, or `-` to read it from stdin
        #[arg(value_name = "STUDENT")]
        student: String,

        /// Only list remaining courses whose prerequisites are met
        #[arg(long)]
        available: bool,
    },
    /// Check that a student portal response has the expected format.
    Validate {
        /// Student portal JSON file, or `-` to read it from stdin
        #[arg(value_name = "STUDENT")]
        student: String,
    },
    /// Convert a markdown study plan into curriculum JSON.
    Import {
        /// Markdown study plan
        #[arg(value_name = "MARKDOWN")]
        input: PathBuf,

        /// Output JSON path
        #[arg(short, long, value_name = "FILE", default_value = "curriculum.json")]
        output: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gpaadvisor",
    about = "Student GPA and degree progress advisor",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override grading scheme (stepped|banded)
    #[arg(long, value_name = "SCHEME")]
    pub scheme: Option<String>,

    /// Override faculty whose bundled curriculum is used (cs|engineering)
    #[arg(long, value_name = "FACULTY")]
    pub faculty: Option<String>,

    /// Use a curriculum JSON file instead of the bundled one
    #[arg(long, value_name = "FILE")]
    pub curriculum: Option<PathBuf>,

    /// Override reports output directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            scheme: self.scheme.clone(),
            faculty: self.faculty.clone(),
            curriculum: self.curriculum.as_ref().map(path_string),
            reports_dir: self.reports_dir.as_ref().map(path_string),
        }
    }
}
