use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

pub const SITE_FILE: &str = "site.json";

/// Year the crate was built, used when the content doesn't pin a copyright year.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

pub static SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> =
    LazyLock::new(SiteContent::embedded);

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(String),
    #[error("Couldn't parse site content: {0}")]
    Parse(String),
    #[error("Duplicate project title: {0}")]
    DuplicateProject(String),
    #[error("Duplicate skill category: {0}")]
    DuplicateSkillCategory(String),
    #[error("Content field must not be empty: {0}")]
    Empty(&'static str),
}

/// Named background gradients for project cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gradient {
    Ocean,
    Orchid,
    Ember,
    Forest,
}

impl Gradient {
    pub fn classes(self) -> &'static str {
        match self {
            Self::Ocean => "from-blue-500 to-cyan-500",
            Self::Orchid => "from-purple-500 to-pink-500",
            Self::Ember => "from-orange-500 to-red-500",
            Self::Forest => "from-green-500 to-teal-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub greeting: String,
    pub role: String,
    pub next_role: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub blurb: String,
    pub email: String,
    pub links: Vec<ExternalLink>,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub about: Vec<String>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub contact: Contact,
    #[serde(default)]
    pub copyright_year: Option<i32>,
}

impl SiteContent {
    /// Loads the content document compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        let file = ContentAssets::get(SITE_FILE)
            .ok_or_else(|| ContentError::Missing(SITE_FILE.to_string()))?;
        Self::from_json(&file.data)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, ContentError> {
        let content: Self =
            serde_json::from_slice(bytes).map_err(|e| ContentError::Parse(e.to_string()))?;
        content.validate()?;
        Ok(content)
    }

    /// Project titles and skill category names key the rendered lists, so both must be unique.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Empty("profile.name"));
        }
        if self.contact.email.trim().is_empty() {
            return Err(ContentError::Empty("contact.email"));
        }

        let mut titles = HashSet::new();
        for project in &self.projects {
            if !titles.insert(project.title.as_str()) {
                return Err(ContentError::DuplicateProject(project.title.clone()));
            }
        }

        let mut names = HashSet::new();
        for category in &self.skills {
            if !names.insert(category.name.as_str()) {
                return Err(ContentError::DuplicateSkillCategory(category.name.clone()));
            }
        }
        Ok(())
    }

    pub fn copyright_year(&self) -> String {
        self.copyright_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| BUILD_YEAR.to_string())
    }
}

/// In-page anchors, in the order they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn project(title: &str, gradient: Gradient) -> Project {
        Project {
            title: title.to_string(),
            description: format!("{title} description"),
            tags: vec!["Rust".to_string(), "Leptos".to_string()],
            gradient,
        }
    }

    pub fn site(projects: Vec<Project>, skills: Vec<SkillCategory>) -> SiteContent {
        SiteContent {
            profile: Profile {
                name: "Test Person".to_string(),
                initials: "TP".to_string(),
                greeting: "Hello, I'm".to_string(),
                role: "Frontend Developer".to_string(),
                next_role: "Full Stack Developer".to_string(),
                tagline: "Building things.".to_string(),
            },
            about: vec!["First paragraph.".to_string()],
            skills,
            projects,
            contact: Contact {
                heading: "Say hi".to_string(),
                blurb: "Reach out.".to_string(),
                email: "test@example.com".to_string(),
                links: vec![ExternalLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/test".to_string(),
                }],
            },
            copyright_year: Some(2024),
        }
    }

    pub fn category(name: &str, items: &[&str]) -> SkillCategory {
        SkillCategory {
            name: name.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let content = SiteContent::embedded().expect("embedded content should be valid");
        assert_eq!(content.profile.initials, "UA");
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.projects[0].title, "E-Commerce Platform");
        assert_eq!(content.projects[3].gradient, Gradient::Forest);

        // declaration order is kept
        let names: Vec<_> = content.skills.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["frontend", "backend", "tools"]);
        assert_eq!(content.contact.mailto(), "mailto:uthman@example.com");
    }

    #[test]
    fn test_duplicate_project_rejected() {
        let content = site(
            vec![
                project("A", Gradient::Ocean),
                project("B", Gradient::Ember),
                project("A", Gradient::Forest),
            ],
            vec![],
        );
        assert_eq!(
            content.validate(),
            Err(ContentError::DuplicateProject("A".to_string()))
        );
    }

    #[test]
    fn test_duplicate_skill_category_rejected() {
        let content = site(
            vec![],
            vec![
                category("frontend", &["React"]),
                category("frontend", &["Vue.js"]),
            ],
        );
        assert_eq!(
            content.validate(),
            Err(ContentError::DuplicateSkillCategory("frontend".to_string()))
        );
    }

    #[test]
    fn test_empty_fields_rejected() {
        let mut content = site(vec![], vec![]);
        content.contact.email = "  ".to_string();
        assert_eq!(content.validate(), Err(ContentError::Empty("contact.email")));

        content.profile.name = String::new();
        assert_eq!(content.validate(), Err(ContentError::Empty("profile.name")));
    }

    #[test]
    fn test_parse_errors() {
        let err = SiteContent::from_json(b"{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));

        let mut value = serde_json::to_value(site(vec![], vec![])).unwrap();
        value["projects"] = serde_json::json!([{
            "title": "X",
            "description": "y",
            "tags": [],
            "gradient": "plaid"
        }]);
        let bytes = serde_json::to_vec(&value).unwrap();
        assert!(matches!(
            SiteContent::from_json(&bytes),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_copyright_year_falls_back_to_build_year() {
        let mut content = site(vec![], vec![]);
        assert_eq!(content.copyright_year(), "2024");
        content.copyright_year = None;
        assert_eq!(content.copyright_year(), BUILD_YEAR);
    }

    #[test]
    fn test_sections() {
        let anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, vec!["#about", "#skills", "#projects", "#contact"]);
        assert_eq!(Section::Projects.label(), "Projects");
    }
}
