//! Rebuild the catalog when the documents directory changes
//!
//! Change notifications are coalesced for [`DEBOUNCE_MS`] before a rebuild.
//! The loop stops when `running` is cleared (Ctrl+C in the CLI).

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use serde::Serialize;

use crate::config::ScanConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::infrastructure::scanner;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 200;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub docs_dir: PathBuf,
    pub output: PathBuf,
    pub scan: ScanConfig,
}

/// Watch events, emitted as NDJSON in `--json` mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    WatchStarted { docs_dir: String, output: String },
    FileChanged { path: String },
    BuildComplete { sections: usize, files: usize },
    Error { message: String },
    Shutdown,
}

struct WatcherState {
    pending_changes: HashSet<PathBuf>,
    last_change: Option<Instant>,
}

impl WatcherState {
    fn new() -> Self {
        Self {
            pending_changes: HashSet::new(),
            last_change: None,
        }
    }

    fn add_change(&mut self, path: PathBuf) {
        self.pending_changes.insert(path);
        self.last_change = Some(Instant::now());
    }

    fn should_rebuild(&self) -> bool {
        match self.last_change {
            Some(last) => {
                !self.pending_changes.is_empty()
                    && last.elapsed() >= Duration::from_millis(DEBOUNCE_MS)
            }
            None => false,
        }
    }

    fn take_changes(&mut self) -> Vec<PathBuf> {
        self.last_change = None;
        self.pending_changes.drain().collect()
    }
}

/// The output file lives inside the watched tree in some layouts; its own
/// writes must not retrigger a build.
fn is_relevant(path: &Path, output: &Path) -> bool {
    let is_output = match (path.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => path == output,
    };
    let hidden = path
        .file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false);
    !is_output && !hidden
}

/// Build once, then rebuild on every debounced batch of changes.
pub fn watch(
    options: &WatchOptions,
    running: Arc<AtomicBool>,
    event_callback: impl Fn(WatchEvent),
) -> CatalogResult<()> {
    event_callback(WatchEvent::WatchStarted {
        docs_dir: options.docs_dir.display().to_string(),
        output: options.output.display().to_string(),
    });
    rebuild(options, &event_callback);

    let (tx, rx) = channel();
    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| {
            if let Ok(event) = res {
                for path in event.paths {
                    let _ = tx.send(path);
                }
            }
        },
        Config::default(),
    )
    .map_err(|e| CatalogError::Io(std::io::Error::other(e.to_string())))?;

    watcher
        .watch(&options.docs_dir, RecursiveMode::Recursive)
        .map_err(|e| CatalogError::Io(std::io::Error::other(e.to_string())))?;

    let mut state = WatcherState::new();
    while running.load(Ordering::SeqCst) {
        if let Ok(path) = rx.recv_timeout(Duration::from_millis(50)) {
            if is_relevant(&path, &options.output) {
                event_callback(WatchEvent::FileChanged {
                    path: path.display().to_string(),
                });
                state.add_change(path);
            }
        }

        if state.should_rebuild() {
            let changes = state.take_changes();
            tracing::debug!(changes = changes.len(), "rebuilding catalog");
            rebuild(options, &event_callback);
        }
    }

    event_callback(WatchEvent::Shutdown);
    Ok(())
}

/// Scan and write; failures are reported and the watch continues.
fn rebuild(options: &WatchOptions, callback: &impl Fn(WatchEvent)) {
    let result = scanner::scan(&options.docs_dir, &options.scan)
        .and_then(|tree| scanner::write_catalog(&tree, &options.output).map(|_| tree));

    match result {
        Ok(tree) => callback(WatchEvent::BuildComplete {
            sections: tree.len(),
            files: tree.file_count(),
        }),
        Err(e) => {
            tracing::warn!(error = %e, "rebuild failed");
            callback(WatchEvent::Error {
                message: e.to_string(),
            })
        }
    }
}
