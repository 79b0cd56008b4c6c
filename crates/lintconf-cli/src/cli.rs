//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use lintconf_fs::Format;

/// lintconf - Resolve layered linter configuration files
#[derive(Parser, Debug)]
#[command(name = "lintconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Merge configuration layers and print the effective configuration
    ///
    /// Layers are applied left to right; later files win. Mappings merge key
    /// by key, everything else is replaced.
    ///
    /// Examples:
    ///   lintconf resolve base.json .eslintrc.yml
    ///   lintconf resolve base.json local.toml --format yaml
    ///   lintconf resolve base.json local.toml -o effective.json
    Resolve {
        /// Layer files in precedence order (TOML, JSON or YAML)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format for stdout
        #[arg(short, long, value_enum, env = "LINTCONF_FORMAT", default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write to this file instead of stdout (format from its extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the effective value of a key and which layer set it
    ///
    /// Examples:
    ///   lintconf explain base.json local.yaml --key rules.indent
    Explain {
        /// Layer files in precedence order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Dot-separated key path, e.g. rules.max-len or rules.max-len.1.code
        ///
        /// Numeric segments index into sequences. Keys containing a dot
        /// cannot be addressed.
        #[arg(short, long)]
        key: String,
    },

    /// List the effective rules with their severity and options
    Rules {
        /// Layer files in precedence order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

/// Output format selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Toml,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Format::Json,
            OutputFormat::Yaml => Format::Yaml,
            OutputFormat::Toml => Format::Toml,
        }
    }
}
