//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use doccat::infrastructure::DEFAULT_CATALOG_FILE;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Doccat - browse and search hierarchical document catalogs
#[derive(Parser, Debug)]
#[command(name = "doccat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./doccat.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the catalog once as a tree
    Show {
        /// Catalog file, directory containing docs_tree.json, or http(s) URL
        #[arg(default_value = DEFAULT_CATALOG_FILE)]
        source: String,

        /// Show only this section (raw key, e.g. 01_Reports)
        #[arg(short, long, conflicts_with = "all")]
        section: Option<String>,

        /// Show every section
        #[arg(long)]
        all: bool,

        /// Case-insensitive substring filter on names
        #[arg(short, long)]
        query: Option<String>,

        /// Expand every visible folder
        #[arg(long)]
        expand_all: bool,
    },

    /// List the sections of a catalog
    Sections {
        /// Catalog file, directory containing docs_tree.json, or http(s) URL
        #[arg(default_value = DEFAULT_CATALOG_FILE)]
        source: String,
    },

    /// Browse a catalog interactively
    Browse {
        /// Catalog file, directory containing docs_tree.json, or http(s) URL
        #[arg(default_value = DEFAULT_CATALOG_FILE)]
        source: String,
    },

    /// Scan a documents directory and write the catalog JSON
    Build {
        /// Documents directory (one subdirectory per section)
        docs_dir: PathBuf,

        /// Output file (default: [scan] output, docs_tree.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rebuild the catalog whenever the documents directory changes
    Watch {
        /// Documents directory (one subdirectory per section)
        docs_dir: PathBuf,

        /// Output file (default: [scan] output, docs_tree.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
