//! Presentation themes and their resolved color bundles

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Closed set of preview themes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Accent,
}

/// Concrete colors for one theme (CSS hex strings)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
    pub card_background: &'static str,
    pub card_border: &'static str,
    pub link: &'static str,
    /// CSS `color-scheme` of the exported document
    pub color_scheme: &'static str,
}

const DARK: Palette = Palette {
    background: "#020617",
    text: "#f1f5f9",
    border: "#1e293b",
    accent: "#818cf8",
    muted: "#94a3b8",
    card_background: "#0f172a",
    card_border: "#1e293b",
    link: "#818cf8",
    color_scheme: "dark",
};

const LIGHT: Palette = Palette {
    background: "#f9fafb",
    text: "#1f2937",
    border: "#e5e7eb",
    accent: "#4338ca",
    muted: "#6b7280",
    card_background: "#ffffff",
    card_border: "#e5e7eb",
    link: "#4f46e5",
    color_scheme: "light",
};

const ACCENT: Palette = Palette {
    background: "#1e1b4b",
    text: "#eef2ff",
    border: "#312e81",
    accent: "#a5b4fc",
    muted: "#c7d2fe",
    card_background: "#312e81",
    card_border: "#3730a3",
    link: "#a5b4fc",
    color_scheme: "dark",
};

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Light, Theme::Accent];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Accent => "accent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Accent => "Accent",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
            Theme::Accent => ACCENT,
        }
    }

    /// Resolve a stored theme name, falling back to the default for anything unknown
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Theme::Dark,
            "light" => Theme::Light,
            "accent" => Theme::Accent,
            other => {
                warn!(theme = %other, fallback = Theme::default().name(), "Unknown theme, using default");
                Theme::default()
            }
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
