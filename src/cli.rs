//! Command line interface
//!
//! With no subcommand the builder window opens. The other subcommands run
//! the same store and export engine headless.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Settings;
use crate::constants::export::QR_FILENAME;
use crate::draft::{DraftField, Theme};
use crate::export::{self, QrImage, SystemClipboard};
use crate::persistence::saved_label;
use crate::render::{render, DocumentMode};
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(name = "portfolio-builder", version, about = "Fill a few fields, preview a one-page portfolio instantly")]
pub struct Cli {
    /// Share link (or bare share token) to load instead of the saved draft
    #[arg(long, global = true, value_name = "URL")]
    pub link: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the builder window (default)
    Gui,
    /// Print the draft and what the preview shows
    Show,
    /// Set one draft field and save
    Set {
        #[arg(value_enum)]
        field: DraftField,
        value: String,
    },
    /// Select the preview theme and save
    Theme {
        #[arg(value_enum)]
        theme: Theme,
    },
    /// Write portfolio.html or portfolio.json
    Export {
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output directory (defaults to the configured export directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Copy the self-contained preview markup to the clipboard
    CopyHtml,
    /// Print the share link
    Share {
        /// Also copy it to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Save the share link as a QR code PNG
    Qr {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Open the standalone document in the browser
    Preview {
        /// Open the print dialog once the page has loaded
        #[arg(long)]
        print: bool,
    },
    /// Remove the saved draft from this device
    Clear,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Json,
}

pub fn run(cli: Cli, settings: Settings) -> Result<()> {
    let mut session = Session::open(&settings, cli.link.as_deref())?;

    match cli.command.unwrap_or(Commands::Gui) {
        Commands::Gui => return crate::gui::run_gui(settings, session),
        Commands::Show => show(&session),
        Commands::Set { field, value } => {
            session.store.set_field(field, value);
            session.store.flush();
            println!("Saved {}", field.key());
        }
        Commands::Theme { theme } => {
            session.store.set_theme(theme);
            session.store.flush();
            println!("Theme set to {theme}");
        }
        Commands::Export { format, out } => {
            let dir = out.unwrap_or_else(|| settings.export_dir());
            let payload = session.store.payload();
            let path = match format {
                ExportFormat::Html => export::write_html(&dir, &payload)?,
                ExportFormat::Json => export::write_json(&dir, &payload)?,
            };
            println!("Wrote {}", path.display());
        }
        Commands::CopyHtml => {
            let html = export::html_fragment(&session.store.payload());
            SystemClipboard::new()
                .copy_text(&html)
                .context("Could not copy HTML")?;
            println!("HTML copied to clipboard.");
        }
        Commands::Share { copy } => {
            let link = export::share_link(&session.location, &session.store.payload())?;
            println!("{link}");
            if copy {
                SystemClipboard::new()
                    .copy_text(link.as_str())
                    .context("Could not copy share link")?;
                eprintln!("Share link copied.");
            }
        }
        Commands::Qr { out } => {
            let link = export::share_link(&session.location, &session.store.payload())?;
            let path = out.unwrap_or_else(|| settings.export_dir().join(QR_FILENAME));
            QrImage::encode(link.as_str())
                .context("Failed to generate QR code")?
                .write_png(&path)?;
            println!("Wrote {}", path.display());
            println!("{link}");
        }
        Commands::Preview { print } => {
            let mode = if print { DocumentMode::Print } else { DocumentMode::Static };
            let path = export::open_in_browser(&session.store.payload(), mode)
                .context("Could not open a browser window")?;
            println!("Opened {}", path.display());
        }
        Commands::Clear => {
            session.store.clear_saved()?;
            println!("Saved draft removed from this device.");
        }
    }

    Ok(())
}

fn show(session: &Session) {
    let draft = session.store.get();
    let layout = render(draft, session.store.theme());

    println!("{} — {}", layout.header.name, layout.header.role);
    println!("{}", layout.header.tagline);
    println!();
    println!("About: {}", layout.about);
    if let Some(links) = &layout.links {
        for link in links {
            println!("{:<9} {}", format!("{}:", link.kind.label()), link.href);
        }
    }
    if let Some(skills) = &layout.skills {
        println!("Skills:   {}", skills.join(" · "));
    }
    if let Some(projects) = &layout.projects {
        println!("Projects:");
        for project in projects {
            println!("  {} ↗ {}", project.title, project.link);
        }
    }
    println!();
    println!("Theme: {}  (loaded from {:?})", session.store.theme(), session.source);
    if let Some(saved_at) = session.store.autosave().last_saved_at() {
        println!("{}", saved_label(saved_at, Utc::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_gui() {
        let cli = Cli::try_parse_from(["portfolio-builder"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.link.is_none());
    }

    #[test]
    fn test_set_parses_field_names() {
        let cli = Cli::try_parse_from(["portfolio-builder", "set", "linkedin", "https://linkedin.com/in/ada"]).unwrap();
        match cli.command {
            Some(Commands::Set { field, value }) => {
                assert_eq!(field, DraftField::Linkedin);
                assert_eq!(value, "https://linkedin.com/in/ada");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_link_is_global() {
        let cli = Cli::try_parse_from(["portfolio-builder", "export", "json", "--link", "https://x.dev/#abc"]).unwrap();
        assert_eq!(cli.link.as_deref(), Some("https://x.dev/#abc"));
        assert!(matches!(cli.command, Some(Commands::Export { format: ExportFormat::Json, out: None })));
    }

    #[test]
    fn test_theme_and_unknown_field_rejected() {
        assert!(Cli::try_parse_from(["portfolio-builder", "theme", "accent"]).is_ok());
        assert!(Cli::try_parse_from(["portfolio-builder", "theme", "neon"]).is_err());
        assert!(Cli::try_parse_from(["portfolio-builder", "set", "email", "x"]).is_err());
    }
}
