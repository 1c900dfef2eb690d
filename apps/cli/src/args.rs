//! # CLI Argument Definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use cpv::domain::{Level, Version};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cpv")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Query the Common Procurement Vocabulary")]
pub struct Cli {
    /// Configuration file (toml, json, yaml). `cpv.*` in the working directory is used when present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding cpvCodes.json and cpvMappings.json
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Display locale; enables the catalog translator
    #[arg(short, long, global = true)]
    pub locale: Option<String>,

    /// Locale consulted when the display locale has no entry
    #[arg(long, global = true)]
    pub fallback: Option<String>,

    /// Directory of {domain}.{locale}.json catalogs
    #[arg(long, global = true)]
    pub translations: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Vocabulary edition selector shared by the lookup commands.
#[derive(Debug, Clone, Copy, Args)]
pub struct EditionArg {
    /// Vocabulary edition: 1 (2003) or 2 (2008)
    #[arg(short, long, default_value = "2")]
    pub edition: Version,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show one code
    Lookup {
        code: String,
        #[command(flatten)]
        edition: EditionArg,
    },
    /// List codes in dataset order
    List {
        /// Only codes at this hierarchy level
        #[arg(long, value_enum)]
        level: Option<LevelArg>,
        /// Only codes of this edition
        #[arg(short, long)]
        edition: Option<Version>,
    },
    /// Number of records in the dataset
    Count,
    /// Show the older-edition code a code replaced
    Mapping {
        code: String,
        #[command(flatten)]
        edition: EditionArg,
    },
    /// Locales the active translator has catalogs for
    Locales,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    Division,
    Group,
    Class,
    Category,
    Subcategory,
}

impl From<LevelArg> for Level {
    fn from(value: LevelArg) -> Self {
        match value {
            LevelArg::Division => Self::Division,
            LevelArg::Group => Self::Group,
            LevelArg::Class => Self::Class,
            LevelArg::Category => Self::Category,
            LevelArg::Subcategory => Self::Subcategory,
        }
    }
}
