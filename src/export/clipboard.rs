use anyhow::{anyhow, Result};
use tracing::debug;

/// Lazily-opened system clipboard.
///
/// On X11 the copied text is served by this process, so the handle is kept
/// for as long as the owner lives instead of being reopened per copy.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copy_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| anyhow!("Clipboard unavailable: {e}"))?;
            self.inner = Some(clipboard);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(anyhow!("Clipboard unavailable"));
        };
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| anyhow!("Failed to set clipboard: {e}"))?;
        debug!(len = text.len(), "Copied text to clipboard");
        Ok(())
    }
}
