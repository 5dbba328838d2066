use std::path::{Path, PathBuf};

use anyhow::Result;

use doccat::infrastructure::scanner::{scan, write_catalog};
use doccat::Config;

use crate::ui::context::UiContext;
use crate::ui::views::build::{render_build_header, render_build_summary};

pub fn cmd_build(
    ui: &UiContext,
    config: &Config,
    docs_dir: &Path,
    output: Option<PathBuf>,
) -> Result<()> {
    let output = output.unwrap_or_else(|| config.scan.output.clone());
    let output_display = output.display().to_string();

    if !ui.json {
        print!(
            "{}",
            render_build_header(
                &docs_dir.display().to_string(),
                &output_display,
                ui.color,
                ui.unicode
            )
        );
    }

    let tree = scan(docs_dir, &config.scan)?;
    write_catalog(&tree, &output)?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "build_complete",
            "output": output_display,
            "sections": tree.len(),
            "files": tree.file_count(),
        }))?;
    } else {
        print!(
            "{}",
            render_build_summary(
                &output_display,
                tree.len(),
                tree.file_count(),
                ui.color,
                ui.unicode
            )
        );
    }
    Ok(())
}
