//! Editable profile draft and its derived views
//!
//! The draft is plain text end to end. Structured views (links, skills,
//! projects) are derived on read and never fail: malformed input is simply
//! left out of the derived view.

mod store;
mod theme;

pub use store::DraftStore;
pub use theme::{Palette, Theme};

use serde::{Deserialize, Serialize};

use crate::constants::draft::{LINK_PREFIX, MAX_SKILLS, PROJECT_SEPARATOR};

/// The in-memory profile record edited by the user
///
/// Missing keys deserialize to the placeholder defaults, so a partial
/// `form` object loaded from disk or a share link is merged over them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDraft {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub bio: String,
    pub website: String,
    pub github: String,
    pub linkedin: String,
    /// Comma-separated skill list
    pub skills: String,
    /// One project per line, `Title - https://link`
    pub projects: String,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            role: "Web Developer".to_string(),
            tagline: "I build fast, modern web apps.".to_string(),
            bio: "I’m a front-end developer focused on React, Tailwind, and great UX.".to_string(),
            website: "https://example.com".to_string(),
            github: "https://github.com/yourname".to_string(),
            linkedin: "https://linkedin.com/in/yourname".to_string(),
            skills: "React, Tailwind, Node.js".to_string(),
            projects: String::new(),
        }
    }
}

/// Addressable draft fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum DraftField {
    Name,
    Role,
    Tagline,
    Bio,
    Website,
    Github,
    Skills,
    Projects,
    Linkedin,
}

impl DraftField {
    #[cfg(test)]
    pub const ALL: [DraftField; 9] = [
        DraftField::Name,
        DraftField::Role,
        DraftField::Tagline,
        DraftField::Bio,
        DraftField::Website,
        DraftField::Github,
        DraftField::Skills,
        DraftField::Projects,
        DraftField::Linkedin,
    ];

    /// Serialized key name
    pub fn key(self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Role => "role",
            DraftField::Tagline => "tagline",
            DraftField::Bio => "bio",
            DraftField::Website => "website",
            DraftField::Github => "github",
            DraftField::Skills => "skills",
            DraftField::Projects => "projects",
            DraftField::Linkedin => "linkedin",
        }
    }

    /// Form label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Full name",
            DraftField::Role => "Role / Headline",
            DraftField::Tagline => "One-line tagline",
            DraftField::Bio => "Short bio (2–3 sentences)",
            DraftField::Website => "Website",
            DraftField::Github => "GitHub",
            DraftField::Skills => "Skills (comma-separated)",
            DraftField::Projects => "Projects (one per line, format: Title - https://link.com)",
            DraftField::Linkedin => "LinkedIn",
        }
    }

    /// Whether the field is edited as a multi-line text area
    pub fn multiline(self) -> bool {
        matches!(self, DraftField::Bio | DraftField::Projects)
    }
}

/// A well-formed project line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: String,
    pub link: String,
}

impl ProfileDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Role => &self.role,
            DraftField::Tagline => &self.tagline,
            DraftField::Bio => &self.bio,
            DraftField::Website => &self.website,
            DraftField::Github => &self.github,
            DraftField::Skills => &self.skills,
            DraftField::Projects => &self.projects,
            DraftField::Linkedin => &self.linkedin,
        }
    }

    pub(crate) fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Role => &mut self.role,
            DraftField::Tagline => &mut self.tagline,
            DraftField::Bio => &mut self.bio,
            DraftField::Website => &mut self.website,
            DraftField::Github => &mut self.github,
            DraftField::Skills => &mut self.skills,
            DraftField::Projects => &mut self.projects,
            DraftField::Linkedin => &mut self.linkedin,
        }
    }

    pub fn skill_list(&self) -> Vec<String> {
        parse_skills(&self.skills)
    }

    pub fn project_list(&self) -> Vec<Project> {
        parse_projects(&self.projects)
    }
}

/// A link is only displayed if it starts with the accepted scheme prefix
pub fn safe_link(value: &str) -> Option<&str> {
    value.starts_with(LINK_PREFIX).then_some(value)
}

/// Split on `,`, trim, drop empties, keep at most [`MAX_SKILLS`] in input order.
/// Duplicates are kept.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_SKILLS)
        .map(str::to_string)
        .collect()
}

/// Parse `Title - link` lines. Anything else, including a link that fails
/// [`safe_link`], is dropped without error.
pub fn parse_projects(raw: &str) -> Vec<Project> {
    raw.lines()
        .filter_map(|line| {
            let mut parts = line.split(PROJECT_SEPARATOR);
            let title = parts.next()?.trim();
            let link = safe_link(parts.next()?.trim())?;
            if title.is_empty() {
                return None;
            }
            Some(Project {
                title: title.to_string(),
                link: link.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skills_trims_and_drops_empty() {
        let skills = parse_skills(" Rust ,, ,Go,  SQL ");
        assert_eq!(skills, vec!["Rust", "Go", "SQL"]);
    }

    #[test]
    fn test_parse_skills_caps_at_twelve_in_order() {
        let raw = (1..=20).map(|i| format!("s{i}")).collect::<Vec<_>>().join(",");
        let skills = parse_skills(&raw);
        assert_eq!(skills.len(), MAX_SKILLS);
        assert_eq!(skills.first().map(String::as_str), Some("s1"));
        assert_eq!(skills.last().map(String::as_str), Some("s12"));
    }

    #[test]
    fn test_parse_skills_keeps_duplicates() {
        let skills = parse_skills("Math, Programming, Programming");
        assert_eq!(skills, vec!["Math", "Programming", "Programming"]);
    }

    #[test]
    fn test_parse_skills_empty_input() {
        assert!(parse_skills("").is_empty());
        assert!(parse_skills(" , ,, ").is_empty());
    }

    #[test]
    fn test_parse_projects_well_formed_line() {
        let projects = parse_projects("Foo - https://x");
        assert_eq!(
            projects,
            vec![Project { title: "Foo".to_string(), link: "https://x".to_string() }]
        );
    }

    #[test]
    fn test_parse_projects_drops_malformed_lines() {
        let raw = "Good - https://a.dev\nno separator here\n - https://orphan\nTitle only - \n\nOther - https://b.dev\r\n";
        let projects = parse_projects(raw);
        let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Good", "Other"]);
        assert_eq!(projects[1].link, "https://b.dev");
    }

    #[test]
    fn test_parse_projects_uses_first_two_segments() {
        let projects = parse_projects("A - https://a - trailing");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].link, "https://a");
    }

    #[test]
    fn test_parse_projects_drops_non_http_links() {
        let raw = "Click me - javascript:alert(document.cookie)\nLocal - file:///etc/passwd\nKept - http://kept.dev";
        let projects = parse_projects(raw);
        assert_eq!(
            projects,
            vec![Project { title: "Kept".to_string(), link: "http://kept.dev".to_string() }]
        );
        assert!(parse_projects("X - javascript:alert(1)").is_empty());
    }

    #[test]
    fn test_safe_link_requires_http_prefix() {
        assert_eq!(safe_link("https://example.com"), Some("https://example.com"));
        assert_eq!(safe_link("http://example.com"), Some("http://example.com"));
        assert_eq!(safe_link("notaurl"), None);
        assert_eq!(safe_link(""), None);
        assert_eq!(safe_link(" https://leading-space"), None);
    }

    #[test]
    fn test_partial_form_merges_over_defaults() {
        let draft: ProfileDraft = serde_json::from_str(r#"{"name":"Ada Lovelace"}"#).unwrap();
        assert_eq!(draft.name, "Ada Lovelace");
        assert_eq!(draft.role, ProfileDraft::default().role);
        assert_eq!(draft.projects, "");
    }

    #[test]
    fn test_field_accessors_cover_every_field() {
        let mut draft = ProfileDraft::default();
        for field in DraftField::ALL {
            *draft.field_mut(field) = field.key().to_uppercase();
        }
        for field in DraftField::ALL {
            assert_eq!(draft.field(field), field.key().to_uppercase());
        }
    }
}
