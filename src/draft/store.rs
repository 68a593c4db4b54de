//! Single source of truth for the draft being edited

use std::time::Instant;
use tracing::debug;

use super::{DraftField, ProfileDraft, Theme};
use crate::persistence::{Autosaver, SharePayload};

/// Owns the draft, the selected theme and the autosaver.
///
/// One store exists per builder session. Every mutation goes through here
/// and schedules a debounced save.
pub struct DraftStore {
    draft: ProfileDraft,
    theme: Theme,
    autosave: Autosaver,
}

impl DraftStore {
    pub fn new(payload: SharePayload, autosave: Autosaver) -> Self {
        Self {
            draft: payload.form,
            theme: payload.theme,
            autosave,
        }
    }

    pub fn get(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn payload(&self) -> SharePayload {
        SharePayload::new(self.draft.clone(), self.theme)
    }

    pub fn autosave(&self) -> &Autosaver {
        &self.autosave
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.set_field_at(field, value, Instant::now());
    }

    pub fn set_field_at(&mut self, field: DraftField, value: impl Into<String>, now: Instant) {
        let value = value.into();
        let slot = self.draft.field_mut(field);
        if *slot == value {
            return;
        }
        debug!(field = field.key(), len = value.len(), "Draft field changed");
        *slot = value;
        self.autosave.schedule(&self.draft, self.theme, now);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.set_theme_at(theme, Instant::now());
    }

    pub fn set_theme_at(&mut self, theme: Theme, now: Instant) {
        if self.theme == theme {
            return;
        }
        debug!(theme = %theme, "Theme changed");
        self.theme = theme;
        self.autosave.schedule(&self.draft, self.theme, now);
    }

    /// Schedule a save of the current state without changing it
    pub fn touch(&mut self) {
        self.autosave.schedule(&self.draft, self.theme, Instant::now());
    }

    /// Drive the debounce timer; returns true if the draft was written
    pub fn tick(&mut self, now: Instant) -> bool {
        self.autosave.tick(now)
    }

    pub fn flush(&mut self) -> bool {
        self.autosave.flush()
    }

    /// Forget the saved copy; the in-memory draft is left as is
    pub fn clear_saved(&mut self) -> anyhow::Result<()> {
        self.autosave.clear()
    }
}
