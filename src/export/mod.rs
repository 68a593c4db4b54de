//! Export engine
//!
//! Turns the current draft into artifacts: the standalone HTML document,
//! `portfolio.json`, share links, browser preview/print and QR codes. All
//! of these are user-initiated and report failure through `Result`.

mod clipboard;
mod qr;

pub use clipboard::SystemClipboard;
pub use qr::QrImage;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, error, info};
use url::Url;

use crate::constants::config::APP_DIR;
use crate::constants::export::{HTML_FILENAME, JSON_FILENAME, JSON_VERSION};
use crate::draft::{ProfileDraft, Theme};
use crate::persistence::{encode_token, SharePayload};
use crate::render::{render, render_fragment, standalone_document, DocumentMode};

/// Shape of `portfolio.json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonExport<'a> {
    pub form: &'a ProfileDraft,
    pub theme: Theme,
    pub exported_at: DateTime<Utc>,
    pub version: u32,
}

/// Self-contained fragment for the clipboard
pub fn html_fragment(payload: &SharePayload) -> String {
    render_fragment(&render(&payload.form, payload.theme)).into_string()
}

pub fn html_document(payload: &SharePayload, mode: DocumentMode) -> String {
    standalone_document(&render(&payload.form, payload.theme), mode)
}

pub fn json_document(payload: &SharePayload, exported_at: DateTime<Utc>) -> Result<String> {
    let export = JsonExport {
        form: &payload.form,
        theme: payload.theme,
        exported_at,
        version: JSON_VERSION,
    };
    serde_json::to_string_pretty(&export).context("Failed to serialize portfolio JSON")
}

/// Write `portfolio.html` into `dir`
pub fn write_html(dir: &Path, payload: &SharePayload) -> Result<PathBuf> {
    let path = dir.join(HTML_FILENAME);
    write_artifact(&path, &html_document(payload, DocumentMode::Static))?;
    Ok(path)
}

/// Write `portfolio.json` into `dir`
pub fn write_json(dir: &Path, payload: &SharePayload) -> Result<PathBuf> {
    let path = dir.join(JSON_FILENAME);
    write_artifact(&path, &json_document(payload, Utc::now())?)?;
    Ok(path)
}

/// Write an exported file, creating missing parent directories first
pub(crate) fn write_artifact(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    let contents = contents.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create export directory {:?}", parent))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {:?}", path))?;
    info!(path = %path.display(), bytes = contents.len(), "Exported artifact");
    Ok(())
}

/// Builder origin + path with the share token as fragment
pub fn share_link(base: &Url, payload: &SharePayload) -> Result<Url> {
    let token = encode_token(payload)?;
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(Some(&token));
    Ok(url)
}

/// Write the standalone document to a temp file and hand it to the system
/// browser. With [`DocumentMode::Print`] the page opens the print dialog.
pub fn open_in_browser(payload: &SharePayload, mode: DocumentMode) -> Result<PathBuf> {
    let path = browser_document_path(mode);
    write_artifact(&path, &html_document(payload, mode))?;

    spawn_opener(path.as_os_str()).with_context(|| format!("Failed to open browser for {:?}", path))?;
    info!(path = %path.display(), ?mode, "Opened document in browser");
    Ok(path)
}

/// One reused file per mode, so repeated previews replace the previous
/// document instead of piling up. The browser reads it after we return, so
/// it is not removed afterwards.
fn browser_document_path(mode: DocumentMode) -> PathBuf {
    let name = match mode {
        DocumentMode::Static => "portfolio-preview.html",
        DocumentMode::Print => "portfolio-print.html",
    };
    std::env::temp_dir().join(APP_DIR).join(name)
}

/// Hand a link to the system browser
pub fn open_link(url: &Url) -> Result<()> {
    spawn_opener(OsStr::new(url.as_str()))
        .with_context(|| format!("Failed to open link {url}"))?;
    info!(url = %url, "Opened link in browser");
    Ok(())
}

fn spawn_opener(target: &OsStr) -> Result<()> {
    let mut child = opener_command(target).spawn()?;
    debug!(pid = child.id(), "Spawned browser opener");

    // reap the opener without blocking the caller
    std::thread::spawn(move || {
        if let Err(e) = child.wait() {
            error!(error = ?e, "Failed to wait for browser opener");
        }
    });
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener_command(target: &OsStr) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(target);
    cmd
}

#[cfg(target_os = "windows")]
fn opener_command(target: &OsStr) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(target);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(target: &OsStr) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(target);
    cmd
}
