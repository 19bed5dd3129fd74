use std::fmt;
use std::str::FromStr;

use crate::error::SetupError;

use super::document::ContainerId;

/// Top-level content sections. Each owns one content container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    GitHub,
    Posts,
    Users,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::GitHub, Section::Posts, Section::Users];

    pub fn id(&self) -> &'static str {
        match self {
            Section::GitHub => "github",
            Section::Posts => "posts",
            Section::Users => "users",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::GitHub => "GitHub Users",
            Section::Posts => "Posts",
            Section::Users => "Users",
        }
    }

    pub fn container(&self) -> ContainerId {
        match self {
            Section::GitHub => ContainerId::GitHubContent,
            Section::Posts => ContainerId::PostsContent,
            Section::Users => ContainerId::UsersContent,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s.trim())
            .ok_or_else(|| SetupError::UnknownSection(s.to_string()))
    }
}

/// Proof that a section switch has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Activated(pub Section);

/// Which navigation controls exist and which one is active.
#[derive(Debug, Clone)]
pub struct Navigation {
    sections: Vec<Section>,
    active: Section,
}

impl Navigation {
    pub fn new(sections: Vec<Section>) -> Result<Self, SetupError> {
        let active = *sections.first().ok_or(SetupError::NoSections)?;
        Ok(Navigation { sections, active })
    }

    /// Build the navigation bar from section identifiers. Unknown names are fatal.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, SetupError> {
        let mut sections = Vec::with_capacity(names.len());
        for name in names {
            let section = name.as_ref().parse::<Section>()?;
            if !sections.contains(&section) {
                sections.push(section);
            }
        }
        Navigation::new(sections)
    }

    /// Make `section` the only active section and navigation control.
    ///
    /// Sections without a navigation control cannot be activated.
    #[must_use]
    pub fn activate(&mut self, section: Section) -> Option<Activated> {
        if !self.has(section) {
            log::warn!("Section {} is not configured", section);
            return None;
        }
        log::debug!("Switching to section {}", section);
        self.active = section;
        Some(Activated(section))
    }

    pub fn has(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}
