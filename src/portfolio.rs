use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use rust_embed::Embed;
#[cfg(feature = "ssr")]
use std::sync::LazyLock;

use crate::icons::Icon;

/// Path of the portfolio document inside the embedded `data` folder.
pub const DOCUMENT_PATH: &str = "portfolio.json";

#[cfg(feature = "ssr")]
#[derive(Embed)]
#[folder = "data"]
struct Assets;

#[cfg(feature = "ssr")]
static GLOBAL_DOCUMENT: LazyLock<Result<PortfolioDocument, PortfolioError>> =
    LazyLock::new(|| {
        let file = Assets::get(DOCUMENT_PATH)
            .ok_or_else(|| PortfolioError::NotFound(DOCUMENT_PATH.to_string()))?;
        PortfolioDocument::from_slice(&file.data)
    });

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("Portfolio document not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse portfolio document: {0}")]
    Parse(String),
    #[error("Unknown icon: {0}")]
    UnknownIcon(String),
}

impl From<serde_json::Error> for PortfolioError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}

/// Reads the embedded portfolio document. Parsed once per process.
#[cfg(feature = "ssr")]
pub async fn load_portfolio() -> Result<PortfolioDocument, PortfolioError> {
    GLOBAL_DOCUMENT.clone()
}

/// Decodes an optional field, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Resolves an optional text field, treating an empty string as missing.
fn text_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// The single record driving every section of the page.
///
/// All slices are optional; the accessors ([`PortfolioDocument::hero`] and
/// friends) resolve missing data to the built-in defaults so the renderers
/// never see a gap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    #[serde(default, deserialize_with = "lenient")]
    pub hero: Option<HeroData>,
    #[serde(default, deserialize_with = "lenient")]
    pub about: Option<AboutData>,
    #[serde(default, deserialize_with = "lenient")]
    pub skills: Option<SkillsData>,
    #[serde(default, deserialize_with = "lenient")]
    pub projects: Option<ProjectsData>,
    #[serde(default, deserialize_with = "lenient")]
    pub contact: Option<ContactData>,
}

impl PortfolioDocument {
    pub fn from_json(json: &str) -> Result<Self, PortfolioError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, PortfolioError> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    // serde would happily read a struct out of a JSON array
    fn from_value(value: serde_json::Value) -> Result<Self, PortfolioError> {
        if !value.is_object() {
            return Err(PortfolioError::Parse(
                "expected an object at the top level".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn hero(&self) -> HeroContent {
        HeroContent::from(self.hero.clone().unwrap_or_default())
    }

    pub fn about(&self) -> AboutContent {
        AboutContent::from(self.about.clone().unwrap_or_default())
    }

    pub fn skills(&self) -> SkillsContent {
        match self.skills.clone() {
            Some(SkillsData::List(tiles)) => SkillsContent {
                tiles,
                categories: None,
            },
            Some(SkillsData::Grouped(groups)) => SkillsContent {
                tiles: default_skills(),
                categories: groups.categories,
            },
            None => SkillsContent {
                tiles: default_skills(),
                categories: None,
            },
        }
    }

    pub fn projects(&self) -> Vec<ProjectEntry> {
        match self.projects.clone() {
            Some(ProjectsData::List(projects))
            | Some(ProjectsData::Wrapped(ProjectList {
                projects: Some(projects),
            })) => projects,
            _ => default_projects(),
        }
    }

    pub fn contact(&self) -> ContactContent {
        ContactContent::from(self.contact.clone().unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroData {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub social: Option<SocialLinks>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub icon: Icon,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroContent {
    pub name: String,
    pub title: String,
    pub description: String,
    pub socials: Vec<SocialLink>,
}

impl From<HeroData> for HeroContent {
    fn from(value: HeroData) -> Self {
        let social = value.social.unwrap_or_default();
        let link = |icon, url| SocialLink {
            icon,
            url: text_or(url, "#"),
        };
        Self {
            name: text_or(value.name, "Your Name"),
            title: text_or(value.title, "Full Stack Web Developer"),
            description: text_or(
                value.description,
                "Building amazing web experiences with modern technologies",
            ),
            socials: vec![
                link(Icon::Github, social.github),
                link(Icon::Linkedin, social.linkedin),
                link(Icon::Twitter, social.twitter),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub label: String,
    pub value: String,
}

impl StatEntry {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutData {
    pub bio: Option<String>,
    pub bio2: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub stats: Option<Vec<StatEntry>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutContent {
    pub paragraphs: [String; 2],
    pub stats: Vec<StatEntry>,
}

impl From<AboutData> for AboutContent {
    fn from(value: AboutData) -> Self {
        Self {
            paragraphs: [
                text_or(
                    value.bio,
                    "I am a passionate full stack web developer with expertise in building modern, scalable web applications. I love turning ideas into reality through clean code and intuitive user experiences.",
                ),
                text_or(
                    value.bio2,
                    "With a strong foundation in both frontend and backend technologies, I create end-to-end solutions that are performant, maintainable, and user-friendly.",
                ),
            ],
            stats: value.stats.unwrap_or_else(|| {
                vec![
                    StatEntry::new("Years Experience", "3+"),
                    StatEntry::new("Projects Completed", "50+"),
                    StatEntry::new("Technologies", "20+"),
                    StatEntry::new("Happy Clients", "30+"),
                ]
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl SkillEntry {
    fn new(name: &str, icon: Icon, color: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: Some(icon.name().to_string()),
            color: Some(color.to_string()),
        }
    }

    /// The glyph to draw, and whether it came from the entry or the default.
    pub fn glyph(&self) -> (Icon, bool) {
        match self.icon.as_deref().map(str::parse::<Icon>) {
            Some(Ok(icon)) => (icon, true),
            _ => (Icon::DEFAULT, false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGroups {
    #[serde(default, deserialize_with = "lenient")]
    pub categories: Option<Vec<SkillCategory>>,
}

/// The `skills` slice is a list of tiles, or an object carrying only the
/// optional category grouping (tiles then fall back to the defaults).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillsData {
    List(Vec<SkillEntry>),
    Grouped(SkillGroups),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillsContent {
    pub tiles: Vec<SkillEntry>,
    pub categories: Option<Vec<SkillCategory>>,
}

pub fn default_skills() -> Vec<SkillEntry> {
    vec![
        SkillEntry::new("React", Icon::React, "#61DAFB"),
        SkillEntry::new("Node.js", Icon::NodeJs, "#339933"),
        SkillEntry::new("JavaScript", Icon::JavaScript, "#F7DF1E"),
        SkillEntry::new("Tailwind CSS", Icon::Tailwind, "#06B6D4"),
        SkillEntry::new("MongoDB", Icon::MongoDb, "#47A248"),
        SkillEntry::new("Express", Icon::Express, "#000000"),
        SkillEntry::new("Database", Icon::Database, "#4479A1"),
        SkillEntry::new("Git", Icon::Git, "#F05032"),
    ]
}

fn placeholder_link() -> String {
    "#".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default = "placeholder_link")]
    pub github: String,
    #[serde(default = "placeholder_link")]
    pub live: String,
}

impl ProjectEntry {
    fn new(title: &str, description: &str, tech: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            tech: tech.iter().map(|s| s.to_string()).collect(),
            github: placeholder_link(),
            live: placeholder_link(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectList {
    #[serde(default, deserialize_with = "lenient")]
    pub projects: Option<Vec<ProjectEntry>>,
}

/// The `projects` slice wraps its list in an object (`{"projects": [...]}`).
/// A bare list is accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectsData {
    List(Vec<ProjectEntry>),
    Wrapped(ProjectList),
}

pub fn default_projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry::new(
            "E-Commerce Platform",
            "Full-stack e-commerce solution with payment integration",
            &["React", "Node.js", "MongoDB", "Stripe"],
        ),
        ProjectEntry::new(
            "Task Management App",
            "Collaborative task management with real-time updates",
            &["React", "Firebase", "Tailwind CSS"],
        ),
        ProjectEntry::new(
            "Social Media Dashboard",
            "Analytics dashboard for social media metrics",
            &["React", "Chart.js", "Express", "PostgreSQL"],
        ),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactData {
    pub message: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactChannel {
    pub icon: Icon,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactContent {
    pub message: String,
    pub channels: Vec<ContactChannel>,
}

impl From<ContactData> for ContactContent {
    fn from(value: ContactData) -> Self {
        let channel = |icon, label, value, default| ContactChannel {
            icon,
            label,
            value: text_or(value, default),
        };
        Self {
            message: text_or(
                value.message,
                "Feel free to reach out for collaborations or just a friendly hello",
            ),
            channels: vec![
                channel(Icon::Email, "Email", value.email, "your.email@example.com"),
                channel(Icon::Phone, "Phone", value.phone, "+1 234 567 8900"),
                channel(
                    Icon::Location,
                    "Location",
                    value.location,
                    "Your City, Country",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_resolves_to_defaults() {
        let doc = PortfolioDocument::from_json("{}").unwrap();
        assert_eq!(doc, PortfolioDocument::default());

        let hero = doc.hero();
        assert_eq!(hero.name, "Your Name");
        assert_eq!(hero.title, "Full Stack Web Developer");
        assert!(!hero.description.is_empty());
        assert_eq!(hero.socials.len(), 3);
        assert!(hero.socials.iter().all(|s| s.url == "#"));

        let about = doc.about();
        assert!(about.paragraphs.iter().all(|p| !p.is_empty()));
        assert_eq!(about.stats.len(), 4);
        assert_eq!(about.stats[0], StatEntry::new("Years Experience", "3+"));

        let skills = doc.skills();
        assert_eq!(skills.tiles, default_skills());
        assert_eq!(skills.categories, None);

        assert_eq!(doc.projects(), default_projects());

        let contact = doc.contact();
        assert!(!contact.message.is_empty());
        let labels = contact.channels.iter().map(|c| c.label).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Email", "Phone", "Location"]);
    }

    #[test]
    fn test_partial_hero_keeps_given_fields() {
        let doc = PortfolioDocument::from_json(
            r#"{"hero": {"name": "Ada", "social": {"github": "https://github.com/ada"}}}"#,
        )
        .unwrap();
        let hero = doc.hero();
        assert_eq!(hero.name, "Ada");
        assert_eq!(hero.title, "Full Stack Web Developer");
        assert_eq!(hero.socials[0].icon, Icon::Github);
        assert_eq!(hero.socials[0].url, "https://github.com/ada");
        assert_eq!(hero.socials[1].url, "#");
        assert_eq!(hero.socials[2].url, "#");
    }

    #[test]
    fn test_skills_non_list_falls_back_to_defaults() {
        for skills in [r#""lots""#, "42", "{}", r#"{"foo": [1, 2]}"#, "null"] {
            let json = format!(r#"{{"skills": {skills}}}"#);
            let doc = PortfolioDocument::from_json(&json).unwrap();
            let tiles = doc.skills().tiles;
            assert_eq!(tiles.len(), 8, "skills = {skills}");
            assert_eq!(tiles, default_skills());
        }
    }

    #[test]
    fn test_skills_list_renders_exactly() {
        let doc = PortfolioDocument::from_json(
            r##"{"skills": [
                {"name": "Rust", "icon": "code", "color": "#dea584"},
                {"name": "Go"},
                {"name": "SQL", "icon": "database"},
                {"name": "Leptos", "icon": "not-an-icon"}
            ]}"##,
        )
        .unwrap();
        let skills = doc.skills();
        assert_eq!(skills.tiles.len(), 4);
        let names = skills.tiles.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Rust", "Go", "SQL", "Leptos"]);
        assert_eq!(skills.tiles[0].glyph(), (Icon::Code, true));
        assert_eq!(skills.tiles[1].glyph(), (Icon::DEFAULT, false));
        assert_eq!(skills.tiles[2].glyph(), (Icon::Database, true));
        assert_eq!(skills.tiles[3].glyph(), (Icon::DEFAULT, false));
    }

    #[test]
    fn test_skills_categories_from_grouped_object() {
        let doc = PortfolioDocument::from_json(
            r#"{"skills": {"categories": [
                {"title": "Frontend", "items": ["Leptos", "Tailwind"]},
                {"title": "Backend", "items": ["Axum"]}
            ]}}"#,
        )
        .unwrap();
        let skills = doc.skills();
        assert_eq!(skills.tiles, default_skills());
        let categories = skills.categories.expect("categories should be present");
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].title, "Frontend");
        assert_eq!(categories[0].items, vec!["Leptos", "Tailwind"]);
    }

    #[test]
    fn test_project_without_tech_has_no_chips() {
        let doc = PortfolioDocument::from_json(
            r#"{"projects": {"projects": [{"title": "Bare", "description": "No stack",
                "tech": [], "github": "https://github.com/x/bare", "live": "https://bare.dev"}]}}"#,
        )
        .unwrap();
        let projects = doc.projects();
        assert_eq!(projects.len(), 1);
        assert!(projects[0].tech.is_empty());
        assert_eq!(projects[0].live, "https://bare.dev");
    }

    #[test]
    fn test_project_links_default_to_placeholder() {
        let doc = PortfolioDocument::from_json(
            r#"{"projects": [{"title": "T", "description": "D"}]}"#,
        )
        .unwrap();
        let project = &doc.projects()[0];
        assert!(project.tech.is_empty());
        assert_eq!(project.github, "#");
        assert_eq!(project.live, "#");
    }

    #[test]
    fn test_projects_wrapped_in_object() {
        let doc = PortfolioDocument::from_json(
            r#"{"projects": {"projects": [
                {"title": "Only", "description": "One", "tech": ["Rust"]}
            ]}}"#,
        )
        .unwrap();
        let titles = doc.projects().into_iter().map(|p| p.title).collect::<Vec<_>>();
        assert_eq!(titles, vec!["Only"]);
    }

    #[test]
    fn test_projects_bare_list_accepted() {
        let doc = PortfolioDocument::from_json(
            r#"{"projects": [{"title": "Bare", "description": "List"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.projects().len(), 1);
        assert_eq!(doc.projects()[0].title, "Bare");
    }

    #[test]
    fn test_projects_object_without_list_uses_defaults() {
        for projects in ["{}", r#"{"projects": "soon"}"#, r#"{"items": []}"#] {
            let json = format!(r#"{{"projects": {projects}}}"#);
            let doc = PortfolioDocument::from_json(&json).unwrap();
            assert_eq!(doc.projects(), default_projects(), "projects = {projects}");
        }
    }

    #[test]
    fn test_empty_strings_resolve_to_defaults() {
        let doc = PortfolioDocument::from_json(
            r#"{
                "hero": {"name": "", "title": "", "description": "",
                    "social": {"github": "", "linkedin": "https://linkedin.com/in/ada"}},
                "about": {"bio": "", "bio2": ""},
                "contact": {"message": "", "email": "", "phone": "", "location": ""}
            }"#,
        )
        .unwrap();

        let hero = doc.hero();
        assert_eq!(hero.name, "Your Name");
        assert_eq!(hero.title, "Full Stack Web Developer");
        assert!(!hero.description.is_empty());
        assert_eq!(hero.socials[0].url, "#");
        assert_eq!(hero.socials[1].url, "https://linkedin.com/in/ada");

        let about = doc.about();
        assert!(about.paragraphs.iter().all(|p| !p.is_empty()));
        assert_eq!(about.paragraphs, PortfolioDocument::default().about().paragraphs);

        let contact = doc.contact();
        assert_eq!(contact, PortfolioDocument::default().contact());
        assert_eq!(contact.channels[0].value, "your.email@example.com");
    }

    #[test]
    fn test_malformed_slice_does_not_poison_document() {
        let doc = PortfolioDocument::from_json(
            r#"{"projects": "soon", "about": {"bio": "Hello"}, "contact": 7}"#,
        )
        .unwrap();
        assert_eq!(doc.projects(), default_projects());
        assert_eq!(doc.about().paragraphs[0], "Hello");
        assert_eq!(doc.contact().channels[0].value, "your.email@example.com");
    }

    #[test]
    fn test_empty_stats_list_is_kept() {
        let doc = PortfolioDocument::from_json(r#"{"about": {"stats": []}}"#).unwrap();
        assert!(doc.about().stats.is_empty());
    }

    #[test]
    fn test_contact_channels_synthesized_in_order() {
        let doc = PortfolioDocument::from_json(
            r#"{"contact": {"email": "me@site.dev", "location": "Lisbon"}}"#,
        )
        .unwrap();
        let channels = doc.contact().channels;
        assert_eq!(channels[0].icon, Icon::Email);
        assert_eq!(channels[0].value, "me@site.dev");
        assert_eq!(channels[1].icon, Icon::Phone);
        assert_eq!(channels[1].value, "+1 234 567 8900");
        assert_eq!(channels[2].icon, Icon::Location);
        assert_eq!(channels[2].value, "Lisbon");
    }

    #[test]
    fn test_non_object_document_is_error() {
        assert!(matches!(
            PortfolioDocument::from_json("[1, 2, 3]"),
            Err(PortfolioError::Parse(_))
        ));
        assert!(matches!(
            PortfolioDocument::from_json("{not json"),
            Err(PortfolioError::Parse(_))
        ));
    }

    #[test]
    fn test_bundled_document_parses() {
        let doc = PortfolioDocument::from_json(include_str!("../data/portfolio.json")).unwrap();
        assert!(doc.hero.is_some());
        let projects = doc.projects();
        assert_eq!(projects.len(), 3);
        assert_ne!(projects, default_projects());
    }
}
