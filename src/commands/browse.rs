use std::sync::Arc;

use anyhow::{Context, Result};

use doccat::{source_from_id, Catalog, Config};

use crate::ui::context::UiContext;
use crate::ui::widgets::catalog_tree::{run_interactive, BrowseOptions, CatalogBrowser};

pub fn cmd_browse(ui: &UiContext, config: &Config, source: &str) -> Result<()> {
    if ui.json {
        anyhow::bail!("browse is interactive and does not support --json; use `doccat show --json`");
    }
    if !ui.caps.is_tty || !ui.caps.stdin_is_tty {
        anyhow::bail!("browse needs an interactive terminal; use `doccat show` instead");
    }

    let options = BrowseOptions {
        source: Arc::from(source_from_id(source)),
        download_dir: config.download_dir(),
        supports_color: ui.color,
        supports_unicode: ui.unicode,
    };

    let mut browser = CatalogBrowser::new(Catalog::new(config.navigation.initial));
    run_interactive(&mut browser, &options).context("terminal error")?;
    Ok(())
}
