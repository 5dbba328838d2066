use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use doccat::infrastructure::watcher::{watch, WatchOptions};
use doccat::Config;

use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_watch_event, render_watch_header};

pub fn cmd_watch(
    ui: &UiContext,
    config: &Config,
    docs_dir: &Path,
    output: Option<PathBuf>,
) -> Result<()> {
    let output = output.unwrap_or_else(|| config.scan.output.clone());
    let options = WatchOptions {
        docs_dir: docs_dir.to_path_buf(),
        output: output.clone(),
        scan: config.scan.clone(),
    };

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install the Ctrl+C handler")?;

    if !ui.json {
        print!(
            "{}",
            render_watch_header(
                &docs_dir.display().to_string(),
                &output.display().to_string(),
                ui.color,
                ui.unicode
            )
        );
    }

    let json = ui.json;
    let (color, unicode) = (ui.color, ui.unicode);
    watch(&options, running, move |event| {
        if json {
            let _ = crate::ui::json::emit_event(&event);
        } else {
            let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
            print!("{}", render_watch_event(&timestamp, &event, color, unicode));
        }
    })?;

    Ok(())
}
