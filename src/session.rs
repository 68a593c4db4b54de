//! One builder session: the bootstrapped store plus the page location

use anyhow::Result;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::config::Settings;
use crate::constants::storage::STORAGE_KEY;
use crate::draft::DraftStore;
use crate::persistence::{bootstrap, Autosaver, DraftSlot, FileSlot, LoadSource};

pub struct Session {
    pub store: DraftStore,
    /// Builder page URL share links are built from
    pub location: Url,
    pub source: LoadSource,
}

impl Session {
    /// Open the session against the default durable slot
    pub fn open(settings: &Settings, link: Option<&str>) -> Result<Self> {
        let slot = FileSlot::for_key(STORAGE_KEY);
        debug!(path = %slot.path().display(), "Using local draft slot");
        Self::open_with_slot(Box::new(slot), settings.autosave_delay(), settings.share_base()?, link)
    }

    pub fn open_with_slot(
        slot: Box<dyn DraftSlot>,
        delay: Duration,
        share_base: Url,
        link: Option<&str>,
    ) -> Result<Self> {
        let autosave = Autosaver::new(slot, delay);
        let boot = bootstrap(link, autosave.slot());
        let location = boot.location.unwrap_or(share_base);

        let mut store = DraftStore::new(boot.payload, autosave);
        // a draft opened from a link replaces the one saved on this device
        if boot.source == LoadSource::ShareLink {
            store.touch();
        }

        info!(source = ?boot.source, location = %location, "Builder session opened");
        Ok(Self {
            store,
            location,
            source: boot.source,
        })
    }
}
