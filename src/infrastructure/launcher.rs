//! Open and download actions for file rows
//!
//! Opening hands the resolved location to the platform opener. Downloading
//! copies (or fetches) the document into a destination directory.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::DocumentLocation;
use crate::error::{CatalogError, CatalogResult};

fn opener_command(target: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(target);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(target);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(target);
        cmd
    }
}

fn display_target(location: &DocumentLocation) -> String {
    match location {
        DocumentLocation::Local(path) => path.display().to_string(),
        DocumentLocation::Remote(url) => url.clone(),
    }
}

/// Open a document with the system handler. Does not wait for it to exit.
pub fn open(location: &DocumentLocation) -> CatalogResult<()> {
    let target = display_target(location);
    if let DocumentLocation::Local(path) = location {
        if !path.exists() {
            return Err(CatalogError::Launch {
                action: "open",
                target,
                message: "file not found".to_string(),
            });
        }
    }

    opener_command(&target)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| CatalogError::Launch {
            action: "open",
            target: target.clone(),
            message: e.to_string(),
        })?;

    tracing::info!(target = %target, "opened document");
    Ok(())
}

/// Save a document into `dest_dir`, returning the written path.
pub fn download(location: &DocumentLocation, dest_dir: &Path) -> CatalogResult<PathBuf> {
    let target = display_target(location);
    let fail = |message: String| CatalogError::Launch {
        action: "download",
        target: target.clone(),
        message,
    };

    let file_name = attachment_name(location).ok_or_else(|| fail("no file name".to_string()))?;
    std::fs::create_dir_all(dest_dir)?;
    let dest = dest_dir.join(file_name);

    match location {
        DocumentLocation::Local(path) => {
            std::fs::copy(path, &dest).map_err(|e| fail(e.to_string()))?;
        }
        DocumentLocation::Remote(url) => {
            let response = reqwest::blocking::get(url).map_err(|e| fail(e.to_string()))?;
            if !response.status().is_success() {
                return Err(fail(format!("HTTP {}", response.status())));
            }
            let bytes = response.bytes().map_err(|e| fail(e.to_string()))?;
            std::fs::write(&dest, &bytes)?;
        }
    }

    tracing::info!(target = %target, dest = %dest.display(), "downloaded document");
    Ok(dest)
}

/// Last path segment, used as the saved file name
fn attachment_name(location: &DocumentLocation) -> Option<String> {
    match location {
        DocumentLocation::Local(path) => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned()),
        DocumentLocation::Remote(url) => url
            .split(['?', '#'])
            .next()
            .and_then(|path| path.rsplit('/').next())
            .filter(|name| !name.is_empty())
            .map(str::to_string),
    }
}
