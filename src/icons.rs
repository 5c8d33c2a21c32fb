use std::{fmt, str::FromStr};

use crate::portfolio::PortfolioError;

/// Every glyph the site knows how to draw.
///
/// Glyphs are referenced by name from the portfolio document (`"react"`,
/// `"FaReact"`, `"SiJavascript"`, ...) and resolved here at render time.
/// Unknown or missing names resolve to [`Icon::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Code,
    Github,
    Linkedin,
    Twitter,
    React,
    NodeJs,
    JavaScript,
    Tailwind,
    MongoDb,
    Express,
    Database,
    Git,
    Email,
    Phone,
    Location,
    ExternalLink,
    Menu,
    Close,
}

impl Icon {
    pub const DEFAULT: Icon = Icon::React;

    /// Resolves an optional symbolic reference, falling back to [`Icon::DEFAULT`].
    pub fn resolve(name: Option<&str>) -> Icon {
        name.and_then(|n| n.parse().ok()).unwrap_or(Self::DEFAULT)
    }

    /// Icon font class. Technology logos come from devicon, everything else
    /// from the site's own `extra-*` set.
    pub fn class(&self) -> &'static str {
        match self {
            Icon::Code => "extra-code",
            Icon::Github => "devicon-github-plain",
            Icon::Linkedin => "devicon-linkedin-plain",
            Icon::Twitter => "devicon-twitter-original",
            Icon::React => "devicon-react-original",
            Icon::NodeJs => "devicon-nodejs-plain",
            Icon::JavaScript => "devicon-javascript-plain",
            Icon::Tailwind => "devicon-tailwindcss-original",
            Icon::MongoDb => "devicon-mongodb-plain",
            Icon::Express => "devicon-express-original",
            Icon::Database => "extra-database",
            Icon::Git => "devicon-git-plain",
            Icon::Email => "extra-email",
            Icon::Phone => "extra-phone",
            Icon::Location => "extra-location",
            Icon::ExternalLink => "extra-link",
            Icon::Menu => "extra-menu",
            Icon::Close => "extra-close",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Icon::Code => "code",
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::Twitter => "twitter",
            Icon::React => "react",
            Icon::NodeJs => "nodejs",
            Icon::JavaScript => "javascript",
            Icon::Tailwind => "tailwind",
            Icon::MongoDb => "mongodb",
            Icon::Express => "express",
            Icon::Database => "database",
            Icon::Git => "git",
            Icon::Email => "email",
            Icon::Phone => "phone",
            Icon::Location => "location",
            Icon::ExternalLink => "external-link",
            Icon::Menu => "menu",
            Icon::Close => "close",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Icon {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // react-icons style names: FaReact, SiJavascript, FaMapMarkerAlt
        let unprefixed = match trimmed.get(..2) {
            Some("Fa" | "Si") if trimmed[2..].starts_with(|c: char| c.is_ascii_uppercase()) => {
                &trimmed[2..]
            }
            _ => trimmed,
        };
        let key = unprefixed
            .to_ascii_lowercase()
            .replace(['-', '_', '.', ' '], "");
        let icon = match key.as_str() {
            "code" => Icon::Code,
            "github" => Icon::Github,
            "linkedin" => Icon::Linkedin,
            "twitter" | "x" => Icon::Twitter,
            "react" => Icon::React,
            "node" | "nodejs" => Icon::NodeJs,
            "js" | "javascript" => Icon::JavaScript,
            "tailwind" | "tailwindcss" => Icon::Tailwind,
            "mongo" | "mongodb" => Icon::MongoDb,
            "express" | "expressjs" => Icon::Express,
            "database" | "db" => Icon::Database,
            "git" | "gitalt" => Icon::Git,
            "email" | "envelope" | "mail" => Icon::Email,
            "phone" => Icon::Phone,
            "location" | "mapmarker" | "mapmarkeralt" => Icon::Location,
            "link" | "externallink" | "externallinkalt" => Icon::ExternalLink,
            "menu" | "bars" => Icon::Menu,
            "close" | "times" => Icon::Close,
            _ => return Err(PortfolioError::UnknownIcon(s.to_string())),
        };
        Ok(icon)
    }
}
