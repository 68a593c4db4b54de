//! Modal showing the share link as a QR code

use eframe::egui;
use url::Url;

use crate::export::QrImage;
use crate::gui::constants::{ITEM_SPACING, QR_DISPLAY_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrAction {
    CopyLink,
    OpenLink,
    SavePng,
    Close,
}

pub struct QrOverlay {
    link: Url,
    image: QrImage,
    texture: egui::TextureHandle,
}

impl QrOverlay {
    pub fn new(ctx: &egui::Context, link: Url, image: QrImage) -> Self {
        let size = image.size() as usize;
        let color_image = egui::ColorImage::from_rgba_unmultiplied([size, size], &image.to_rgba());
        // nearest keeps module edges sharp when scaled
        let texture = ctx.load_texture("share_qr", color_image, egui::TextureOptions::NEAREST);
        Self { link, image, texture }
    }

    pub fn link(&self) -> &Url {
        &self.link
    }

    pub fn image(&self) -> &QrImage {
        &self.image
    }

    /// Draw the overlay; returns the action the user picked this frame
    pub fn show(&self, ctx: &egui::Context) -> Option<QrAction> {
        let mut action = None;

        let response = egui::Modal::new(egui::Id::new("qr_overlay")).show(ctx, |ui| {
            ui.set_width(QR_DISPLAY_SIZE + 40.0);
            ui.vertical_centered(|ui| {
                ui.heading("Share via QR");
                ui.add_space(ITEM_SPACING);
                ui.add(
                    egui::Image::new(&self.texture)
                        .fit_to_exact_size(egui::vec2(QR_DISPLAY_SIZE, QR_DISPLAY_SIZE)),
                );
                ui.add_space(ITEM_SPACING);
                ui.label(egui::RichText::new(self.link.as_str()).small().weak());
                ui.add_space(ITEM_SPACING);
                ui.horizontal(|ui| {
                    if ui.button("Copy Link").clicked() {
                        action = Some(QrAction::CopyLink);
                    }
                    if ui.button("Open Link").clicked() {
                        action = Some(QrAction::OpenLink);
                    }
                    if ui.button("Save PNG").clicked() {
                        action = Some(QrAction::SavePng);
                    }
                    if ui.button("Close").clicked() {
                        action = Some(QrAction::Close);
                    }
                });
            });
        });

        // escape or a click outside the modal
        if action.is_none() && response.should_close() {
            action = Some(QrAction::Close);
        }
        action
    }
}
