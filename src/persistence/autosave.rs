//! Debounced write-through of the draft to the durable slot

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

use super::debounce::DebounceTimer;
use super::slot::{DraftSlot, PersistedSnapshot};
use super::SharePayload;
use crate::constants::autosave::JUST_NOW_SECS;
use crate::draft::{ProfileDraft, Theme};

/// Owns the durable slot and the debounce timer guarding writes to it.
///
/// Every draft mutation calls [`schedule`](Self::schedule); the event loop
/// calls [`tick`](Self::tick). Write failures are logged and dropped: the
/// slot is a convenience copy, not the source of truth.
pub struct Autosaver {
    slot: Box<dyn DraftSlot>,
    timer: DebounceTimer,
    pending: Option<SharePayload>,
    last_saved_at: Option<DateTime<Utc>>,
}

impl Autosaver {
    pub fn new(slot: Box<dyn DraftSlot>, delay: Duration) -> Self {
        let timer = DebounceTimer::new(delay);
        debug!(slot = %slot.describe(), delay_ms = timer.delay().as_millis() as u64, "Autosave ready");
        Self {
            slot,
            timer,
            pending: None,
            last_saved_at: None,
        }
    }

    pub fn slot(&self) -> &dyn DraftSlot {
        self.slot.as_ref()
    }

    /// Draft previously saved in the slot, if any is readable
    #[cfg(test)]
    pub fn load(&self) -> Option<SharePayload> {
        super::slot::read_snapshot(self.slot.as_ref())
    }

    /// Record the latest draft and restart the quiet period
    pub fn schedule(&mut self, draft: &ProfileDraft, theme: Theme, now: Instant) {
        self.pending = Some(SharePayload::new(draft.clone(), theme));
        self.timer.restart(now);
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Time until the pending save fires, for scheduling the next repaint
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        self.last_saved_at
    }

    /// Write the pending draft if the quiet period has elapsed.
    /// Returns true if a write happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.timer.fire(now) {
            self.write_pending()
        } else {
            false
        }
    }

    /// Write any pending draft immediately (used on shutdown)
    pub fn flush(&mut self) -> bool {
        if self.pending.is_none() {
            return false;
        }
        self.timer.cancel();
        self.write_pending()
    }

    /// Remove the saved draft and drop any pending write
    pub fn clear(&mut self) -> Result<()> {
        self.timer.cancel();
        self.pending = None;
        self.last_saved_at = None;
        self.slot.clear().context("Failed to clear saved draft")
    }

    fn write_pending(&mut self) -> bool {
        let Some(payload) = self.pending.take() else {
            return false;
        };
        let saved_at = Utc::now();
        let snapshot = PersistedSnapshot::new(payload, saved_at);

        let result = serde_json::to_string(&snapshot)
            .context("Failed to serialize draft snapshot")
            .and_then(|json| self.slot.write(&json));

        match result {
            Ok(()) => {
                debug!(slot = %self.slot.describe(), saved_at = %saved_at, "Autosaved draft");
                self.last_saved_at = Some(saved_at);
                true
            }
            Err(e) => {
                error!(slot = %self.slot.describe(), error = ?e, "Auto-save failed");
                false
            }
        }
    }
}

impl Drop for Autosaver {
    fn drop(&mut self) {
        if self.flush() {
            info!(slot = %self.slot.describe(), "Flushed pending draft on shutdown");
        }
    }
}

/// Status line shown next to the action bar
pub fn saved_label(saved_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(saved_at);
    if elapsed.num_seconds() < JUST_NOW_SECS {
        return "Saved just now".to_string();
    }
    let mins = elapsed.num_minutes();
    if mins < 60 {
        return format!("Saved {mins} min ago");
    }
    let hrs = mins / 60;
    format!("Saved {hrs} hr{} ago", if hrs > 1 { "s" } else { "" })
}
