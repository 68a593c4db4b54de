//! Draft form: one input per field, edits go straight to the store

use eframe::egui;

use crate::draft::{DraftField, DraftStore};
use crate::gui::constants::{ITEM_SPACING, SECTION_SPACING};

const PROFILE_FIELDS: [DraftField; 4] = [
    DraftField::Name,
    DraftField::Role,
    DraftField::Tagline,
    DraftField::Bio,
];

const DETAIL_FIELDS: [DraftField; 5] = [
    DraftField::Website,
    DraftField::Github,
    DraftField::Skills,
    DraftField::Projects,
    DraftField::Linkedin,
];

/// Renders the form; edits are applied to the store as they happen
pub fn ui(ui: &mut egui::Ui, store: &mut DraftStore) {
    ui.group(|ui| {
        for field in PROFILE_FIELDS {
            field_input(ui, store, field);
        }
    });

    ui.add_space(SECTION_SPACING);

    ui.group(|ui| {
        for field in DETAIL_FIELDS {
            field_input(ui, store, field);
        }
    });
}

fn field_input(ui: &mut egui::Ui, store: &mut DraftStore, field: DraftField) {
    ui.label(field.label());

    // edit a copy so every change goes through the store's mutation path
    let mut value = store.get().field(field).to_owned();
    let edit = if field.multiline() {
        egui::TextEdit::multiline(&mut value).desired_rows(4)
    } else {
        egui::TextEdit::singleline(&mut value)
    };
    let response = ui.add(edit.desired_width(f32::INFINITY));

    ui.add_space(ITEM_SPACING);

    if response.changed() {
        store.set_field(field, value);
    }
}
