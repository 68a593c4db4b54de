use eframe::egui;

use crate::draft::{DraftStore, Theme};

/// Theme dropdown; a new selection is applied to the store
pub fn ui(ui: &mut egui::Ui, store: &mut DraftStore) {
    let mut selected = store.theme();

    ui.horizontal(|ui| {
        ui.label("Choose Theme:");
        egui::ComboBox::from_id_salt("theme_selector")
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for theme in Theme::ALL {
                    ui.selectable_value(&mut selected, theme, theme.label());
                }
            });
    });

    // the store ignores an unchanged theme
    store.set_theme(selected);
}
