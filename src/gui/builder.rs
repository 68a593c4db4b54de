//! Builder window: draft form on the left, live preview on the right

use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{error, info, warn};

use super::components::qr_overlay::{QrAction, QrOverlay};
use super::components::{draft_form, preview_panel, theme_selector};
use super::constants::*;
use crate::config::Settings;
use crate::constants::export::QR_FILENAME;
use crate::export::{self, QrImage, SystemClipboard};
use crate::persistence::{saved_label, LoadSource};
use crate::render::{render, DocumentMode};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    CopyHtml,
    DownloadHtml,
    Preview,
    Print,
    DownloadJson,
    CopyShareLink,
    GenerateQr,
    ClearSaved,
}

impl Action {
    const BAR: [Action; 8] = [
        Action::CopyHtml,
        Action::DownloadHtml,
        Action::Preview,
        Action::Print,
        Action::DownloadJson,
        Action::CopyShareLink,
        Action::GenerateQr,
        Action::ClearSaved,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::CopyHtml => "Copy HTML",
            Action::DownloadHtml => "Download HTML",
            Action::Preview => "Preview",
            Action::Print => "Print / PDF",
            Action::DownloadJson => "Download JSON",
            Action::CopyShareLink => "Copy Share Link",
            Action::GenerateQr => "QR Code",
            Action::ClearSaved => "Clear Saved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BannerKind {
    Success,
    Error,
}

struct Banner {
    text: String,
    kind: BannerKind,
    shown_at: Instant,
}

impl Banner {
    fn color(&self) -> egui::Color32 {
        match self.kind {
            BannerKind::Success => BANNER_SUCCESS,
            BannerKind::Error => BANNER_ERROR,
        }
    }

    fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= Duration::from_millis(BANNER_LIFETIME_MS)
    }
}

struct BuilderApp {
    settings: Settings,
    session: Session,
    // the copying process serves the selection on X11, keep it alive
    clipboard: SystemClipboard,
    banner: Option<Banner>,
    qr: Option<QrOverlay>,
}

impl BuilderApp {
    fn new(_cc: &CreationContext<'_>, settings: Settings, session: Session) -> Self {
        info!(source = ?session.source, "Initializing builder window");

        let mut app = Self {
            settings,
            session,
            clipboard: SystemClipboard::new(),
            banner: None,
            qr: None,
        };

        if app.session.source == LoadSource::ShareLink {
            app.show_banner(BannerKind::Success, "Loaded portfolio from link.");
        }

        app
    }

    fn show_banner(&mut self, kind: BannerKind, text: impl Into<String>) {
        self.banner = Some(Banner {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
        });
    }

    fn run_action(&mut self, ctx: &egui::Context, action: Action) {
        match self.perform(ctx, action) {
            Ok(Some(message)) => self.show_banner(BannerKind::Success, message),
            Ok(None) => {}
            Err(e) => {
                error!(?action, error = ?e, "Builder action failed");
                self.show_banner(BannerKind::Error, format!("{e}"));
            }
        }
    }

    /// Returns the success banner text, if the action has one
    fn perform(&mut self, ctx: &egui::Context, action: Action) -> Result<Option<String>> {
        let payload = self.session.store.payload();

        match action {
            Action::CopyHtml => {
                self.clipboard
                    .copy_text(&export::html_fragment(&payload))
                    .context("Could not copy HTML")?;
                Ok(Some("HTML copied to clipboard.".to_string()))
            }
            Action::DownloadHtml => {
                let path = export::write_html(&self.settings.export_dir(), &payload)?;
                Ok(Some(format!("Saved {}", path.display())))
            }
            Action::Preview | Action::Print => {
                let mode = if action == Action::Print {
                    DocumentMode::Print
                } else {
                    DocumentMode::Static
                };
                export::open_in_browser(&payload, mode)
                    .context("Could not open a browser window")?;
                Ok(None)
            }
            Action::DownloadJson => {
                let path = export::write_json(&self.settings.export_dir(), &payload)?;
                Ok(Some(format!("Saved {}", path.display())))
            }
            Action::CopyShareLink => {
                let link = export::share_link(&self.session.location, &payload)?;
                self.clipboard
                    .copy_text(link.as_str())
                    .context("Could not copy share link")?;
                Ok(Some("Share link copied.".to_string()))
            }
            Action::GenerateQr => {
                let link = export::share_link(&self.session.location, &payload)?;
                let image = QrImage::encode(link.as_str()).context("Failed to generate QR code")?;
                self.qr = Some(QrOverlay::new(ctx, link, image));
                Ok(None)
            }
            Action::ClearSaved => {
                self.session.store.clear_saved()?;
                Ok(Some("Saved draft removed from this device.".to_string()))
            }
        }
    }

    fn handle_qr_action(&mut self, action: QrAction) {
        let Some(overlay) = &self.qr else {
            return;
        };

        let result = match action {
            QrAction::CopyLink => self
                .clipboard
                .copy_text(overlay.link().as_str())
                .context("Could not copy share link")
                .map(|_| "Share link copied.".to_string()),
            QrAction::OpenLink => {
                if let Err(e) = export::open_link(overlay.link()) {
                    warn!(error = ?e, "Could not open share link");
                    self.show_banner(BannerKind::Error, "Could not open a browser window.");
                }
                return;
            }
            QrAction::SavePng => {
                let path = self.settings.export_dir().join(QR_FILENAME);
                overlay
                    .image()
                    .write_png(&path)
                    .map(|_| format!("Saved {}", path.display()))
            }
            QrAction::Close => {
                self.qr = None;
                return;
            }
        };

        match result {
            Ok(message) => self.show_banner(BannerKind::Success, message),
            Err(e) => {
                warn!(?action, error = ?e, "QR overlay action failed");
                self.show_banner(BannerKind::Error, format!("{e}"));
            }
        }
    }

    fn action_bar(&self, ui: &mut egui::Ui) -> Option<Action> {
        let mut clicked = None;
        ui.horizontal_wrapped(|ui| {
            for action in Action::BAR {
                if ui.button(action.label()).clicked() {
                    clicked = Some(action);
                }
            }
        });

        if let Some(saved_at) = self.session.store.autosave().last_saved_at() {
            ui.add_space(ITEM_SPACING);
            ui.label(egui::RichText::new(saved_label(saved_at, Utc::now())).small().weak());
        }

        clicked
    }
}

impl eframe::App for BuilderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.session.store.tick(now);

        if self.banner.as_ref().is_some_and(|banner| banner.expired(now)) {
            self.banner = None;
        }

        egui::TopBottomPanel::top("builder_header").show(ctx, |ui| {
            ui.add_space(PADDING);
            ui.horizontal(|ui| {
                ui.heading("Portfolio Builder");
                ui.add_space(SECTION_SPACING);
                theme_selector::ui(ui, &mut self.session.store);
                if let Some(banner) = &self.banner {
                    ui.add_space(SECTION_SPACING);
                    ui.colored_label(banner.color(), &banner.text);
                }
            });
            ui.add_space(PADDING);
        });

        let mut action = None;
        egui::SidePanel::left("builder_form")
            .resizable(true)
            .default_width(FORM_PANEL_WIDTH)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(PADDING);
                    draft_form::ui(ui, &mut self.session.store);
                    ui.add_space(SECTION_SPACING);
                    ui.separator();
                    ui.add_space(ITEM_SPACING);
                    action = self.action_bar(ui);
                    ui.add_space(PADDING);
                });
            });

        let layout = render(self.session.store.get(), self.session.store.theme());
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                preview_panel::ui(ui, &layout);
            });
        });

        if let Some(action) = action {
            self.run_action(ctx, action);
        }

        if let Some(qr_action) = self.qr.as_ref().and_then(|overlay| overlay.show(ctx)) {
            self.handle_qr_action(qr_action);
        }

        // wake for the pending save, banner expiry and the saved label
        let mut wake = Duration::from_millis(REPAINT_INTERVAL_MS);
        if let Some(remaining) = self.session.store.autosave().remaining(Instant::now()) {
            wake = wake.min(remaining);
        }
        ctx.request_repaint_after(wake);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.session.store.flush() {
            info!("Flushed pending draft before exit");
        }
        info!("Builder exiting");
    }
}

pub fn run_gui(settings: Settings, session: Session) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Portfolio Builder"),
        ..Default::default()
    };

    eframe::run_native(
        "Portfolio Builder",
        options,
        Box::new(move |cc| Ok(Box::new(BuilderApp::new(cc, settings, session)))),
    )
    .map_err(|err| anyhow!("Failed to launch builder window: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_expires_after_lifetime() {
        let shown_at = Instant::now();
        let banner = Banner {
            text: "HTML copied to clipboard.".to_string(),
            kind: BannerKind::Success,
            shown_at,
        };
        assert!(!banner.expired(shown_at + Duration::from_millis(BANNER_LIFETIME_MS - 1)));
        assert!(banner.expired(shown_at + Duration::from_millis(BANNER_LIFETIME_MS)));
    }

    #[test]
    fn test_action_bar_labels_are_unique() {
        let mut labels: Vec<_> = Action::BAR.iter().map(|a| a.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Action::BAR.len());
    }
}
