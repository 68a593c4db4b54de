//! Durable local slot holding the autosaved draft

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::{DecodeError, SharePayload};
use crate::constants::storage::SNAPSHOT_VERSION;
use crate::draft::{ProfileDraft, Theme};

/// A single key-value slot, read and written as whole strings
pub trait DraftSlot {
    /// `Ok(None)` when nothing has been stored yet
    fn read(&self) -> Result<Option<String>>;
    fn write(&mut self, contents: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
    /// Human-readable location for logs and CLI output
    fn describe(&self) -> String;
}

/// Snapshot written on every settled autosave
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSnapshot {
    pub version: u32,
    pub form: ProfileDraft,
    pub theme: Theme,
    pub saved_at: DateTime<Utc>,
}

impl PersistedSnapshot {
    pub fn new(payload: SharePayload, saved_at: DateTime<Utc>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            form: payload.form,
            theme: payload.theme,
            saved_at,
        }
    }
}

/// Read and validate the slot. Anything unreadable counts as "nothing saved".
pub fn read_snapshot(slot: &dyn DraftSlot) -> Option<SharePayload> {
    let raw = match slot.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(slot = %slot.describe(), "No saved draft");
            return None;
        }
        Err(e) => {
            warn!(slot = %slot.describe(), error = ?e, "Could not read saved draft");
            return None;
        }
    };

    match parse_snapshot(&raw) {
        Ok(payload) => Some(payload),
        Err(e) => {
            warn!(slot = %slot.describe(), error = %e, "Could not load saved draft");
            None
        }
    }
}

fn parse_snapshot(raw: &str) -> Result<SharePayload, DecodeError> {
    let value: Value = serde_json::from_str(raw)?;
    // Snapshots written before versioning have no tag and are read as v1
    if let Some(found) = value.get("version").and_then(Value::as_u64)
        && found > u64::from(SNAPSHOT_VERSION)
    {
        return Err(DecodeError::UnsupportedVersion {
            found,
            supported: SNAPSHOT_VERSION,
        });
    }
    SharePayload::from_value(value)
}

/// Slot backed by a JSON file in the platform data directory
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Slot for a storage key, e.g. `portfolioBuilder:v1` → `portfolioBuilder_v1.json`
    pub fn for_key(key: &str) -> Self {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        path.push(format!("{file_name}.json"));
        Self::at(path)
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DraftSlot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read draft from {:?}", self.path)),
        }
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }
        // Write-then-rename so a crash mid-write never leaves a half snapshot
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents).with_context(|| format!("Failed to write draft to {:?}", tmp))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to move draft into place at {:?}", self.path))?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Removed saved draft");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove draft at {:?}", self.path)),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
pub(crate) use memory::MemorySlot;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_slot_round_trip_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::at(dir.path().join("nested").join("draft.json"));

        assert_eq!(slot.read().unwrap(), None);
        slot.write("{\"a\":1}").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("{\"a\":1}"));

        slot.clear().unwrap();
        assert_eq!(slot.read().unwrap(), None);
        // clearing an empty slot is not an error
        slot.clear().unwrap();
    }

    #[test]
    fn test_for_key_sanitizes_file_name() {
        let slot = FileSlot::for_key("portfolioBuilder:v1");
        assert_eq!(
            slot.path().file_name().and_then(|n| n.to_str()),
            Some("portfolioBuilder_v1.json")
        );
    }

    #[test]
    fn test_read_snapshot_accepts_unversioned_blob() {
        let slot = MemorySlot::with_contents(
            r#"{"form":{"name":"Grace"},"theme":"light","savedAt":"2024-01-01T00:00:00.000Z"}"#,
        );
        let payload = read_snapshot(&slot).unwrap();
        assert_eq!(payload.form.name, "Grace");
        assert_eq!(payload.theme, Theme::Light);
    }

    #[test]
    fn test_read_snapshot_rejects_newer_version() {
        let slot = MemorySlot::with_contents(r#"{"version":7,"form":{"name":"Grace"},"theme":"light"}"#);
        assert!(read_snapshot(&slot).is_none());
    }

    #[test]
    fn test_read_snapshot_malformed_is_none() {
        assert!(read_snapshot(&MemorySlot::with_contents("{not json")).is_none());
        assert!(read_snapshot(&MemorySlot::with_contents("null")).is_none());
        assert!(read_snapshot(&MemorySlot::default()).is_none());
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let snapshot = PersistedSnapshot::new(
            SharePayload::new(ProfileDraft::default(), Theme::Dark),
            Utc::now(),
        );
        let value = serde_json::to_value(&snapshot).unwrap();
        assert!(value.get("savedAt").is_some());
        assert_eq!(value["version"], 1);
        assert_eq!(value["theme"], "dark");
    }
}
