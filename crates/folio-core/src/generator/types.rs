//! Project record data types
//!
//! These types mirror the JSON shape consumed by the portfolio list and
//! pagination views, so field names serialize in camelCase.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::Error;

/// A single project entry, either hand-authored or synthesized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Identifier, unique within a catalog
    pub id: String,
    /// Display title
    pub title: String,
    /// Short description, bounded in length
    pub description: String,
    /// Full prose description
    #[serde(default)]
    pub long_description: String,
    /// Technologies used, deduplicated
    #[serde(default)]
    pub technologies: BTreeSet<String>,
    /// Source repository URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Deployed site URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Demo URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    /// Whether the project is highlighted
    #[serde(default)]
    pub featured: bool,
    /// Project domain
    pub category: Category,
    /// Sparse impact metrics
    #[serde(default)]
    pub impact: Impact,
    /// Repository statistics
    #[serde(default)]
    pub stats: ProjectStats,
    /// Lifecycle status
    #[serde(default)]
    pub status: ProjectStatus,
    /// Whether the project uses AI
    #[serde(default)]
    pub ai_powered: bool,
}

impl ProjectRecord {
    /// Whether a source repository exists for this project
    pub fn has_repository(&self) -> bool {
        self.github_url.is_some()
    }

    /// Case-insensitive substring match over title, description and technologies
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .technologies
                .iter()
                .any(|t| t.to_lowercase().contains(&needle))
    }

    /// Case-insensitive exact match on a technology name
    pub fn uses_technology(&self, technology: &str) -> bool {
        self.technologies
            .iter()
            .any(|t| t.eq_ignore_ascii_case(technology))
    }
}

/// The closed set of project domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "DevOps/SRE")]
    DevOpsSre,
    #[serde(rename = "Infrastructure")]
    Infrastructure,
    #[serde(rename = "Social Impact")]
    SocialImpact,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 4] = [
        Category::AiMl,
        Category::DevOpsSre,
        Category::Infrastructure,
        Category::SocialImpact,
    ];

    /// Display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Self::AiMl => "AI/ML",
            Self::DevOpsSre => "DevOps/SRE",
            Self::Infrastructure => "Infrastructure",
            Self::SocialImpact => "Social Impact",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    /// Accepts the display label or a slug such as `ai-ml` or `social-impact`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "aiml" | "ai" | "ml" => Ok(Self::AiMl),
            "devopssre" | "devops" | "sre" => Ok(Self::DevOpsSre),
            "infrastructure" | "infra" => Ok(Self::Infrastructure),
            "socialimpact" | "social" => Ok(Self::SocialImpact),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
    Maintained,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Completed,
        ProjectStatus::InProgress,
        ProjectStatus::Maintained,
    ];
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Maintained => write!(f, "maintained"),
        }
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "completed" => Ok(Self::Completed),
            "in-progress" => Ok(Self::InProgress),
            "maintained" => Ok(Self::Maintained),
            _ => Err(Error::UnknownStatus(s.to_string())),
        }
    }
}

/// Sparse impact metrics; any key may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Impact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reliability: Option<String>,
}

impl Impact {
    pub fn is_empty(&self) -> bool {
        self.users.is_none()
            && self.performance.is_none()
            && self.savings.is_none()
            && self.reliability.is_none()
    }
}

/// Repository statistics. All zero when the project has no repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub stars: u32,
    pub forks: u32,
    pub commits: u32,
    pub contributors: u32,
}
