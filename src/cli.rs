use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "wordlit.toml";

#[derive(Parser, Debug)]
#[command(
    name = "wordlit",
    version,
    about = "Turn a word list into a source-code array literal"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Config file (defaults to ./wordlit.toml when present)"
    )]
    pub config: Option<PathBuf>,
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Raise log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append (or write) the declaration to the output file.
    Transcode {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long, help = "Output file receiving the declaration")]
        output: Option<PathBuf>,
        #[arg(long, value_enum)]
        mode: Option<WriteMode>,
    },
    /// Print the declaration to stdout without writing any file.
    Preview {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Report on the input word list without writing anything.
    Inspect {
        #[arg(long, help = "Input word list, one word per line")]
        input: Option<PathBuf>,
    },
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    #[arg(long, help = "Input word list, one word per line")]
    pub input: Option<PathBuf>,
    #[arg(long, help = "Identifier bound to the list")]
    pub name: Option<String>,
    #[arg(long, value_enum)]
    pub syntax: Option<TargetSyntax>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the resolved settings.
    Show,
    /// Write a config file populated with the built-in defaults.
    Init {
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TargetSyntax {
    #[default]
    Js,
    Ts,
    Rust,
    Python,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    #[default]
    Append,
    Overwrite,
}

impl std::fmt::Display for TargetSyntax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TargetSyntax::Js => "js",
            TargetSyntax::Ts => "ts",
            TargetSyntax::Rust => "rust",
            TargetSyntax::Python => "python",
        })
    }
}

impl std::fmt::Display for WriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            WriteMode::Append => "append",
            WriteMode::Overwrite => "overwrite",
        })
    }
}
