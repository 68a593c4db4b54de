//! Live preview drawn with egui widgets from the same layout the HTML export uses

use eframe::egui;

use crate::draft::Palette;
use crate::render::Layout;

const CARD_RADIUS: u8 = 12;
const CHIP_RADIUS: u8 = 10;
const CARD_MARGIN: i8 = 16;
const PROJECT_CARD_WIDTH: f32 = 240.0;

/// Resolved egui colors for one palette
struct Colors {
    background: egui::Color32,
    text: egui::Color32,
    border: egui::Color32,
    accent: egui::Color32,
    muted: egui::Color32,
    card_background: egui::Color32,
    card_border: egui::Color32,
    link: egui::Color32,
}

impl Colors {
    fn from_palette(palette: &Palette) -> Self {
        let color = |hex: &str, fallback: egui::Color32| parse_hex_color(hex).unwrap_or(fallback);
        Self {
            background: color(palette.background, egui::Color32::BLACK),
            text: color(palette.text, egui::Color32::WHITE),
            border: color(palette.border, egui::Color32::GRAY),
            accent: color(palette.accent, egui::Color32::LIGHT_BLUE),
            muted: color(palette.muted, egui::Color32::GRAY),
            card_background: color(palette.card_background, egui::Color32::BLACK),
            card_border: color(palette.card_border, egui::Color32::GRAY),
            link: color(palette.link, egui::Color32::LIGHT_BLUE),
        }
    }
}

pub fn ui(ui: &mut egui::Ui, layout: &Layout) {
    let colors = Colors::from_palette(&layout.palette);

    egui::Frame::new()
        .fill(colors.background)
        .stroke(egui::Stroke::new(1.0, colors.border))
        .corner_radius(egui::CornerRadius::same(CARD_RADIUS))
        .inner_margin(egui::Margin::same(CARD_MARGIN))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.visuals_mut().override_text_color = Some(colors.text);

            header(ui, layout, &colors);
            ui.add_space(12.0);

            card(ui, &colors, |ui| {
                ui.label(egui::RichText::new("About").strong().color(colors.accent));
                ui.label(&layout.about);
            });

            if let Some(links) = &layout.links {
                ui.add_space(12.0);
                card(ui, &colors, |ui| {
                    ui.label(egui::RichText::new("Links").strong().color(colors.accent));
                    ui.horizontal_wrapped(|ui| {
                        for link in links {
                            ui.hyperlink_to(
                                egui::RichText::new(link.kind.label()).color(colors.link),
                                &link.href,
                            );
                        }
                    });
                });
            }

            if let Some(skills) = &layout.skills {
                ui.add_space(12.0);
                card(ui, &colors, |ui| {
                    ui.label(egui::RichText::new("Skills").strong().color(colors.accent));
                    ui.horizontal_wrapped(|ui| {
                        for skill in skills {
                            chip(ui, &colors, skill);
                        }
                    });
                });
            }

            if let Some(projects) = &layout.projects {
                ui.add_space(12.0);
                ui.label(egui::RichText::new("Projects").strong().color(colors.accent));
                ui.horizontal_wrapped(|ui| {
                    for project in projects {
                        card(ui, &colors, |ui| {
                            ui.set_width(PROJECT_CARD_WIDTH);
                            ui.label(egui::RichText::new(&project.title).strong());
                            ui.hyperlink_to(
                                egui::RichText::new("Open \u{2197}").color(colors.link),
                                &project.link,
                            );
                        });
                    }
                });
            }
        });
}

fn header(ui: &mut egui::Ui, layout: &Layout, colors: &Colors) {
    ui.label(egui::RichText::new(&layout.header.name).size(28.0).strong());
    ui.label(egui::RichText::new(&layout.header.role).color(colors.accent));
    ui.label(egui::RichText::new(&layout.header.tagline).color(colors.muted));
}

fn card(ui: &mut egui::Ui, colors: &Colors, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::new()
        .fill(colors.card_background)
        .stroke(egui::Stroke::new(1.0, colors.card_border))
        .corner_radius(egui::CornerRadius::same(CARD_RADIUS))
        .inner_margin(egui::Margin::same(CARD_MARGIN))
        .show(ui, |ui| {
            add_contents(ui);
        });
}

fn chip(ui: &mut egui::Ui, colors: &Colors, text: &str) {
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, colors.card_border))
        .corner_radius(egui::CornerRadius::same(CHIP_RADIUS))
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small());
        });
}

/// Parse `#RRGGBB` or `#AARRGGBB`
fn parse_hex_color(hex: &str) -> Option<egui::Color32> {
    let hex = hex.trim_start_matches('#');
    let byte = |i: usize| hex.get(i..i + 2).and_then(|h| u8::from_str_radix(h, 16).ok());

    match hex.len() {
        6 => Some(egui::Color32::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(egui::Color32::from_rgba_unmultiplied(
            byte(2)?,
            byte(4)?,
            byte(6)?,
            byte(0)?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::Theme;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#818cf8"), Some(egui::Color32::from_rgb(0x81, 0x8c, 0xf8)));
        assert_eq!(
            parse_hex_color("#80ffffff"),
            Some(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 0x80))
        );
        assert_eq!(parse_hex_color("#abc"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_every_palette_parses() {
        for theme in Theme::ALL {
            let palette = theme.palette();
            for hex in [
                palette.background,
                palette.text,
                palette.border,
                palette.accent,
                palette.muted,
                palette.card_background,
                palette.card_border,
                palette.link,
            ] {
                assert!(parse_hex_color(hex).is_some(), "{theme}: {hex}");
            }
        }
    }
}
