pub mod draft_form;
pub mod preview_panel;
pub mod qr_overlay;
pub mod theme_selector;
