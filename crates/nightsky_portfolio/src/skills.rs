//! Skill lists and stack icons.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stack columns shown on a project's detail page.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackCategory {
    /// Client side.
    Frontend,
    /// Server side.
    Backend,
    /// Storage.
    Database,
    /// Hosting.
    Deployment,
}

impl StackCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 4] = [
        Self::Frontend,
        Self::Backend,
        Self::Database,
        Self::Deployment,
    ];

    /// Column heading.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Frontend => "FRONTEND",
            Self::Backend => "BACKEND",
            Self::Database => "DATABASE",
            Self::Deployment => "DEPLOYMENT",
        }
    }
}

impl fmt::Display for StackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

/// Splits a comma-separated skill string, trimming entries and dropping empty ones.
#[must_use]
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Icons available for skill badges.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackIcon {
    /// React and React Native.
    React,
    /// Python.
    Python,
    /// Django.
    Django,
    /// Flask.
    Flask,
    /// `MySQL`.
    MySql,
    /// Generic database.
    Database,
    /// Tailwind CSS.
    Tailwind,
}

/// Looks up the badge icon for a skill name. Names match exactly.
#[must_use]
pub fn stack_icon(skill: &str) -> Option<StackIcon> {
    let icon = match skill {
        "React" | "React Native" => StackIcon::React,
        "Python" => StackIcon::Python,
        "Django" => StackIcon::Django,
        "Flask" => StackIcon::Flask,
        "MySQL" => StackIcon::MySql,
        "Database" => StackIcon::Database,
        "Tailwind CSS" => StackIcon::Tailwind,
        _ => return None,
    };
    Some(icon)
}
