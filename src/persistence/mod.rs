//! Draft persistence
//!
//! Two independent paths share the same `{form, theme}` payload:
//! - **autosave**: debounced write-through to a durable local slot
//! - **token**: compact URL-safe share token carried in a link fragment
//!
//! [`bootstrap`] picks the startup draft from either of them.

mod autosave;
mod bootstrap;
mod debounce;
mod slot;
mod token;

pub use autosave::{saved_label, Autosaver};
pub use bootstrap::{bootstrap, LoadSource};
pub use slot::{DraftSlot, FileSlot};
pub use token::encode_token;

#[cfg(test)]
pub(crate) use slot::MemorySlot;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::draft::{ProfileDraft, Theme};

/// `{form, theme}` pair carried by share tokens and slot snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub form: ProfileDraft,
    pub theme: Theme,
}

/// Why a share token or saved snapshot could not be loaded
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("share token is empty")]
    Empty,
    #[error("share token is not valid percent-encoding: {0}")]
    Percent(std::string::FromUtf8Error),
    #[error("share token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("decoded payload is not UTF-8: {0}")]
    Utf8(std::string::FromUtf8Error),
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload has no `form` object")]
    MissingForm,
    #[error("snapshot version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u64, supported: u32 },
}

impl SharePayload {
    pub fn new(form: ProfileDraft, theme: Theme) -> Self {
        Self { form, theme }
    }

    /// Extract the payload from loosely-typed JSON.
    ///
    /// `form` must be an object; its keys are merged over the defaults.
    /// `theme` is only honored when it is a string.
    pub(crate) fn from_value(value: Value) -> Result<Self, DecodeError> {
        let Value::Object(mut map) = value else {
            return Err(DecodeError::MissingForm);
        };
        let form = match map.remove("form") {
            Some(form @ Value::Object(_)) => serde_json::from_value(form)?,
            _ => return Err(DecodeError::MissingForm),
        };
        let theme = map
            .get("theme")
            .and_then(Value::as_str)
            .map(Theme::from_name)
            .unwrap_or_default();
        Ok(Self { form, theme })
    }
}
