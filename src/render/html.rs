//! Markup for copy/export: every style is inlined as concrete values so the
//! output renders the same with no stylesheet from this application.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::Layout;
use crate::constants::export::DOCUMENT_MAX_WIDTH_PX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentMode {
    /// Plain standalone page
    Static,
    /// Standalone page that opens the print dialog once loaded
    Print,
}

const FONT_STACK: &str = "ui-sans-serif, system-ui, Segoe UI, Roboto, Helvetica, Arial, sans-serif";

const PRINT_SCRIPT: &str = "window.onload = () => window.print();";

/// Self-contained preview markup (what "Copy HTML" puts on the clipboard)
pub fn render_fragment(layout: &Layout) -> Markup {
    let p = &layout.palette;
    let card = format!(
        "background:{};border:1px solid {};border-radius:12px;padding:16px;margin-top:24px;",
        p.card_background, p.card_border
    );
    let link = format!("color:{};text-decoration:none;", p.link);

    html! {
        div style=(format!(
            "background:{};color:{};border:1px solid {};border-radius:16px;padding:20px;font-family:{};",
            p.background, p.text, p.border, FONT_STACK
        )) {
            span style=(format!(
                "font-size:12px;text-transform:uppercase;font-weight:500;letter-spacing:.05em;color:{};",
                p.accent
            )) { "Portfolio" }
            h2 style="font-size:30px;font-weight:700;margin:12px 0 0;" { (layout.header.name) }
            div style=(format!("font-weight:500;color:{};", p.accent)) { (layout.header.role) }
            p style=(format!("color:{};margin-top:12px;", p.muted)) { (layout.header.tagline) }

            div style=(card) {
                h3 style="font-weight:600;margin:0 0 8px;" { "About" }
                p style=(format!("color:{};line-height:1.6;margin:0;", p.muted)) { (layout.about) }
            }

            @if let Some(links) = &layout.links {
                div style="margin-top:24px;font-size:14px;display:flex;gap:16px;" {
                    @for item in links {
                        a href=(item.href) target="_blank" rel="noreferrer" style=(link) {
                            (item.kind.label())
                        }
                    }
                }
            }

            @if let Some(skills) = &layout.skills {
                div style=(card) {
                    h3 style="font-weight:600;margin:0 0 12px;" { "Skills" }
                    div style="display:flex;flex-wrap:wrap;gap:8px;" {
                        @for skill in skills {
                            span style=(format!(
                                "padding:4px 10px;font-size:12px;font-weight:500;border-radius:8px;border:1px solid {};",
                                p.muted
                            )) { (skill) }
                        }
                    }
                }
            }

            @if let Some(projects) = &layout.projects {
                div style=(card) {
                    h3 style="font-weight:600;margin:0 0 12px;" { "Projects" }
                    ul style="list-style:none;margin:0;padding:0;font-size:14px;" {
                        @for project in projects {
                            li style="margin:4px 0;" {
                                a href=(project.link) target="_blank" rel="noreferrer" style=(link) {
                                    (project.title)
                                    " "
                                    span aria-hidden="true" style="font-size:12px;opacity:.7;" { "↗" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Full HTML document wrapping the fragment, titled `name — role`
pub fn standalone_document(layout: &Layout, mode: DocumentMode) -> String {
    let css = format!(
        ":root {{ color-scheme: {} }}\n\
         body {{ margin:0; font-family: {}; }}\n\
         .wrap {{ max-width: {}px; margin: 48px auto; padding: 0 20px; }}",
        layout.palette.color_scheme, FONT_STACK, DOCUMENT_MAX_WIDTH_PX
    );

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (layout.header.name) " — " (layout.header.role) }
                style { (PreEscaped(css)) }
            }
            body {
                div class="wrap" { (render_fragment(layout)) }
                @if mode == DocumentMode::Print {
                    script { (PreEscaped(PRINT_SCRIPT)) }
                }
            }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{ProfileDraft, Theme};
    use crate::render::render;

    fn layout_for(draft: &ProfileDraft, theme: Theme) -> Layout {
        render(draft, theme)
    }

    #[test]
    fn test_fragment_inlines_theme_colors() {
        let html = render_fragment(&layout_for(&ProfileDraft::default(), Theme::Light)).into_string();
        let palette = Theme::Light.palette();
        assert!(html.contains(palette.background));
        assert!(html.contains(palette.link));
        assert!(!html.contains("class="));
    }

    #[test]
    fn test_fragment_escapes_user_text() {
        let draft = ProfileDraft {
            name: "<script>alert(1)</script>".to_string(),
            bio: "Tom & Jerry".to_string(),
            ..ProfileDraft::default()
        };
        let html = render_fragment(&layout_for(&draft, Theme::Dark)).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
    }

    #[test]
    fn test_fragment_omits_empty_blocks() {
        let draft = ProfileDraft {
            website: "nope".to_string(),
            github: String::new(),
            linkedin: String::new(),
            skills: " , ".to_string(),
            projects: "not a project".to_string(),
            ..ProfileDraft::default()
        };
        let html = render_fragment(&layout_for(&draft, Theme::Dark)).into_string();
        assert!(html.contains("About"));
        assert!(!html.contains("Skills"));
        assert!(!html.contains("Projects"));
        assert!(!html.contains("href="));
    }

    #[test]
    fn test_fragment_lists_projects_and_skills() {
        let draft = ProfileDraft {
            skills: "Rust, SQL".to_string(),
            projects: "Engine - https://engine.dev".to_string(),
            ..ProfileDraft::default()
        };
        let html = render_fragment(&layout_for(&draft, Theme::Dark)).into_string();
        assert!(html.contains(">Rust</span>"));
        assert!(html.contains("href=\"https://engine.dev\""));
        assert!(html.contains("Engine"));
    }

    #[test]
    fn test_fragment_never_links_non_http_projects() {
        let draft = ProfileDraft {
            website: String::new(),
            github: String::new(),
            linkedin: String::new(),
            projects: "Click me - javascript:alert(document.cookie)\nLocal - file:///etc/passwd".to_string(),
            ..ProfileDraft::default()
        };
        let html = render_fragment(&layout_for(&draft, Theme::Dark)).into_string();
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("file://"));
        assert!(!html.contains("href="));
        assert!(!html.contains("Projects"));
    }

    #[test]
    fn test_standalone_document_shell() {
        let draft = ProfileDraft {
            name: "Ada Lovelace".to_string(),
            role: "Analyst".to_string(),
            ..ProfileDraft::default()
        };
        let doc = standalone_document(&layout_for(&draft, Theme::Light), DocumentMode::Static);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<meta charset=\"utf-8\">"));
        assert!(doc.contains("name=\"viewport\""));
        assert!(doc.contains("<title>Ada Lovelace — Analyst</title>"));
        assert!(doc.contains("color-scheme: light"));
        assert!(!doc.contains("window.print"));
    }

    #[test]
    fn test_print_document_triggers_print_dialog() {
        let doc = standalone_document(&layout_for(&ProfileDraft::default(), Theme::Dark), DocumentMode::Print);
        assert!(doc.contains("window.onload = () => window.print();"));
        assert!(doc.contains("color-scheme: dark"));
    }
}
