//! Doccat CLI - browse and search hierarchical document catalogs
//!
//! Usage: doccat <COMMAND>
//!
//! Commands:
//!   show      Render the catalog once as a tree
//!   sections  List the sections of a catalog
//!   browse    Browse a catalog interactively
//!   build     Scan a documents directory and write the catalog JSON
//!   watch     Rebuild the catalog whenever the documents directory changes

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use doccat::logging::{init_logging, Destination};

use cli::{Cli, Commands};
use commands::show::ShowArgs;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let loaded = commands::load_config(cli.config.as_deref(), &cwd)?;
    let config = loaded.config;
    let ui = ui::context::UiContext::new(cli.json, cli.verbose, cli.color, &config);

    if let Some(path) = &loaded.path {
        if !ui.json && !loaded.warnings.is_empty() {
            ui::output::print_config_warnings(path, &loaded.warnings, ui.unicode);
        }
    }
    if !ui.json && !loaded.env_warnings.is_empty() {
        ui::output::print_env_warnings(&loaded.env_warnings, ui.unicode);
    }

    // The browser owns the terminal; logs may only go to a file.
    let destination = match cli.command {
        Commands::Browse { .. } => Destination::FileOnly,
        _ => Destination::FileOrStderr,
    };
    init_logging(cli.verbose, &config.logging, destination, ui.caps.supports_color)?;
    tracing::debug!(config = ?loaded.path, "configuration loaded");

    match cli.command {
        Commands::Show {
            source,
            section,
            all,
            query,
            expand_all,
        } => commands::show::cmd_show(
            &ui,
            &config,
            ShowArgs {
                source,
                section,
                all,
                query,
                expand_all,
            },
        ),
        Commands::Sections { source } => commands::sections::cmd_sections(&ui, &source),
        Commands::Browse { source } => commands::browse::cmd_browse(&ui, &config, &source),
        Commands::Build { docs_dir, output } => {
            commands::build::cmd_build(&ui, &config, &docs_dir, output)
        }
        Commands::Watch { docs_dir, output } => {
            commands::watch::cmd_watch(&ui, &config, &docs_dir, output)
        }
    }
}
