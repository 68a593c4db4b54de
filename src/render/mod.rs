//! Presentation renderer
//!
//! Pure mapping from `(draft, theme)` to the preview layout. Optional blocks
//! are `None` when they would be empty, so no renderer ever draws an empty
//! placeholder.

mod html;

pub use html::{render_fragment, standalone_document, DocumentMode};

use crate::draft::{safe_link, Palette, ProfileDraft, Project, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Website,
    GitHub,
    LinkedIn,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Website => "Website",
            LinkKind::GitHub => "GitHub",
            LinkKind::LinkedIn => "LinkedIn",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkItem {
    pub kind: LinkKind,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub role: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub palette: Palette,
    pub header: Header,
    pub about: String,
    /// Website, GitHub, LinkedIn, in that order, only those starting with `http`
    pub links: Option<Vec<LinkItem>>,
    pub skills: Option<Vec<String>>,
    pub projects: Option<Vec<Project>>,
}

pub fn render(draft: &ProfileDraft, theme: Theme) -> Layout {
    let links: Vec<LinkItem> = [
        (LinkKind::Website, draft.website.as_str()),
        (LinkKind::GitHub, draft.github.as_str()),
        (LinkKind::LinkedIn, draft.linkedin.as_str()),
    ]
    .into_iter()
    .filter_map(|(kind, value)| {
        safe_link(value).map(|href| LinkItem {
            kind,
            href: href.to_string(),
        })
    })
    .collect();

    Layout {
        palette: theme.palette(),
        header: Header {
            name: draft.name.clone(),
            role: draft.role.clone(),
            tagline: draft.tagline.clone(),
        },
        about: draft.bio.clone(),
        links: non_empty(links),
        skills: non_empty(draft.skill_list()),
        projects: non_empty(draft.project_list()),
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_draft() -> ProfileDraft {
        ProfileDraft {
            website: String::new(),
            github: String::new(),
            linkedin: String::new(),
            skills: String::new(),
            projects: String::new(),
            ..ProfileDraft::default()
        }
    }

    #[test]
    fn test_defaults_render_links_in_fixed_order() {
        let layout = render(&ProfileDraft::default(), Theme::Dark);
        let kinds: Vec<_> = layout.links.unwrap().iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LinkKind::Website, LinkKind::GitHub, LinkKind::LinkedIn]);
        assert_eq!(layout.skills.unwrap(), vec!["React", "Tailwind", "Node.js"]);
        assert!(layout.projects.is_none());
    }

    #[test]
    fn test_non_http_links_are_hidden() {
        let draft = ProfileDraft {
            website: "notaurl".to_string(),
            github: String::new(),
            linkedin: "https://linkedin.com/in/ada".to_string(),
            ..ProfileDraft::default()
        };
        let links = render(&draft, Theme::Light).links.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].kind, LinkKind::LinkedIn);
        assert_eq!(links[0].href, "https://linkedin.com/in/ada");
    }

    #[test]
    fn test_optional_blocks_absent_when_empty() {
        let layout = render(&blank_draft(), Theme::Accent);
        assert!(layout.links.is_none());
        assert!(layout.skills.is_none());
        assert!(layout.projects.is_none());
        assert_eq!(layout.palette, Theme::Accent.palette());
    }

    #[test]
    fn test_projects_block_only_for_well_formed_lines() {
        let mut draft = blank_draft();
        draft.projects = "garbage line".to_string();
        assert!(render(&draft, Theme::Dark).projects.is_none());

        draft.projects = "garbage line\nFoo - https://x".to_string();
        let projects = render(&draft, Theme::Dark).projects.unwrap();
        assert_eq!(projects, vec![Project { title: "Foo".to_string(), link: "https://x".to_string() }]);
    }
}
