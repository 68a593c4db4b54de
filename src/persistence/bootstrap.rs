//! Startup load: share link fragment, then saved draft, then defaults

use tracing::{info, warn};
use url::Url;

use super::slot::{read_snapshot, DraftSlot};
use super::token::decode_token;
use super::SharePayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    ShareLink,
    SavedDraft,
    Defaults,
}

/// Result of the one-time startup load
#[derive(Debug, Clone)]
pub struct Bootstrap {
    pub payload: SharePayload,
    pub source: LoadSource,
    /// The location with a consumed share fragment stripped, so a reload
    /// does not replay it. `None` if no location was given.
    pub location: Option<Url>,
}

/// Pick the startup draft.
///
/// `location` is the page URL the builder was opened with. A share token in
/// its fragment wins; a bare token (not a URL) is accepted too. Any decode
/// failure falls through to the slot, and an unreadable slot falls through
/// to the defaults. Nothing here returns an error.
pub fn bootstrap(location: Option<&str>, slot: &dyn DraftSlot) -> Bootstrap {
    let (url, token) = match location.map(str::trim).filter(|l| !l.is_empty()) {
        None => (None, None),
        Some(raw) => match Url::parse(raw) {
            Ok(url) => {
                let token = url.fragment().filter(|f| !f.is_empty()).map(str::to_string);
                (Some(url), token)
            }
            Err(_) => (None, Some(raw.to_string())),
        },
    };

    if let Some(token) = token {
        match decode_token(&token) {
            Ok(payload) => {
                info!(name = %payload.form.name, theme = %payload.theme, "Loaded portfolio from share link");
                let location = url.map(|mut url| {
                    url.set_fragment(None);
                    url
                });
                return Bootstrap {
                    payload,
                    source: LoadSource::ShareLink,
                    location,
                };
            }
            Err(e) => warn!(error = %e, "Invalid share link, ignoring"),
        }
    }

    if let Some(payload) = read_snapshot(slot) {
        info!(slot = %slot.describe(), "Draft loaded from this device");
        return Bootstrap {
            payload,
            source: LoadSource::SavedDraft,
            location: url,
        };
    }

    Bootstrap {
        payload: SharePayload::default(),
        source: LoadSource::Defaults,
        location: url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{ProfileDraft, Theme};
    use crate::persistence::{encode_token, MemorySlot};

    const BASE: &str = "https://jonascode.dev/portfolio-builder";

    fn shared_payload() -> SharePayload {
        let mut form = ProfileDraft::default();
        form.name = "Ada Lovelace".to_string();
        form.role = "Analyst".to_string();
        form.tagline = "Notes on the Engine ⚙️".to_string();
        SharePayload::new(form, Theme::Light)
    }

    fn saved_slot(name: &str) -> MemorySlot {
        MemorySlot::with_contents(&format!(
            r#"{{"version":1,"form":{{"name":"{name}"}},"theme":"accent","savedAt":"2025-03-01T10:00:00Z"}}"#
        ))
    }

    #[test]
    fn test_share_link_wins_and_fragment_is_stripped() {
        let payload = shared_payload();
        let link = format!("{BASE}?ref=qr#{}", encode_token(&payload).unwrap());

        let boot = bootstrap(Some(&link), &saved_slot("Saved Person"));
        assert_eq!(boot.source, LoadSource::ShareLink);
        assert_eq!(boot.payload, payload);

        let location = boot.location.unwrap();
        assert_eq!(location.fragment(), None);
        assert_eq!(location.as_str(), format!("{BASE}?ref=qr"));
    }

    #[test]
    fn test_bare_token_is_accepted() {
        let payload = shared_payload();
        let token = encode_token(&payload).unwrap();
        let boot = bootstrap(Some(&token), &MemorySlot::default());
        assert_eq!(boot.source, LoadSource::ShareLink);
        assert_eq!(boot.payload, payload);
        assert!(boot.location.is_none());
    }

    #[test]
    fn test_malformed_fragment_falls_back_to_defaults() {
        let boot = bootstrap(Some(&format!("{BASE}#eyJmb3JtIjp7Im5hbW")), &MemorySlot::default());
        assert_eq!(boot.source, LoadSource::Defaults);
        assert_eq!(boot.payload.form, ProfileDraft::default());
        assert_eq!(boot.payload.theme, Theme::Dark);
    }

    #[test]
    fn test_malformed_fragment_falls_back_to_saved_draft() {
        let boot = bootstrap(Some(&format!("{BASE}#%%%")), &saved_slot("Saved Person"));
        assert_eq!(boot.source, LoadSource::SavedDraft);
        assert_eq!(boot.payload.form.name, "Saved Person");
        assert_eq!(boot.payload.form.role, ProfileDraft::default().role);
        assert_eq!(boot.payload.theme, Theme::Accent);
    }

    #[test]
    fn test_no_location_reads_slot() {
        let boot = bootstrap(None, &saved_slot("Grace"));
        assert_eq!(boot.source, LoadSource::SavedDraft);
        assert_eq!(boot.payload.form.name, "Grace");
    }

    #[test]
    fn test_corrupt_slot_keeps_defaults() {
        let boot = bootstrap(Some(BASE), &MemorySlot::with_contents("{\"form\": [1,2"));
        assert_eq!(boot.source, LoadSource::Defaults);
        assert_eq!(boot.payload, SharePayload::default());
        assert_eq!(boot.location.unwrap().as_str(), BASE);
    }
}
