mod fixtures;
mod taxonomy;

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use fixtures::{builtin_catalog, builtin_taxonomy};
pub use taxonomy::{Taxonomy, Theme, Topic};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseType {
    AccreditedOfficial,
    Official,
    OfficialInDevelopment,
    Experimental,
    ManagementInformation,
    AdHoc,
}

impl ReleaseType {
    pub const ALL: [ReleaseType; 6] = [
        ReleaseType::AccreditedOfficial,
        ReleaseType::Official,
        ReleaseType::OfficialInDevelopment,
        ReleaseType::Experimental,
        ReleaseType::ManagementInformation,
        ReleaseType::AdHoc,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::AccreditedOfficial => "accredited-official",
            Self::Official => "official",
            Self::OfficialInDevelopment => "official-in-development",
            Self::Experimental => "experimental",
            Self::ManagementInformation => "management-information",
            Self::AdHoc => "ad-hoc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AccreditedOfficial => "Accredited official statistics",
            Self::Official => "Official statistics",
            Self::OfficialInDevelopment => "Official statistics in development",
            Self::Experimental => "Experimental statistics",
            Self::ManagementInformation => "Management information",
            Self::AdHoc => "Ad hoc statistics",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let needle = value.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(needle) || t.label().eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `theme` and `topic` hold display titles, not ids: the taxonomy resolves
/// selected ids to titles before records are compared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub theme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub release_type: ReleaseType,
    pub published: NaiveDate,
}

impl Record {
    pub fn new(
        title: &str,
        summary: &str,
        theme: &str,
        topic: Option<&str>,
        release_type: ReleaseType,
        published: NaiveDate,
    ) -> Self {
        Self {
            slug: slugify(title),
            title: title.to_string(),
            summary: summary.to_string(),
            theme: theme.to_string(),
            topic: topic.map(str::to_string),
            release_type,
            published,
        }
    }
}

pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(c.to_lowercase());
        } else if c != '\'' {
            pending_dash = true;
        }
    }
    out
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read fixture file: {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON fixtures: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse YAML fixtures: {source}")]
    Yaml {
        #[source]
        source: serde_yaml::Error,
    },

    #[error("duplicate theme id '{id}'")]
    DuplicateTheme { id: String },

    #[error("duplicate theme title '{title}'")]
    DuplicateThemeTitle { title: String },

    #[error("duplicate topic id '{id}' in theme '{theme}'")]
    DuplicateTopic { theme: String, id: String },

    #[error("publication '{title}' references unknown theme '{theme}'")]
    UnknownTheme { title: String, theme: String },

    #[error("publication '{title}' references topic '{topic}' which is not part of theme '{theme}'")]
    UnknownTopic {
        title: String,
        theme: String,
        topic: String,
    },
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    themes: Option<Vec<Theme>>,
    publications: Vec<Record>,
}

#[derive(Clone, Debug)]
pub struct Catalog {
    taxonomy: Taxonomy,
    records: Vec<Record>,
}

impl Catalog {
    /// Validates every record against the taxonomy and fills in missing slugs.
    pub fn new(taxonomy: Taxonomy, mut records: Vec<Record>) -> Result<Self, CatalogError> {
        for record in records.iter_mut() {
            let theme = taxonomy.theme_by_title(&record.theme).ok_or_else(|| {
                CatalogError::UnknownTheme {
                    title: record.title.clone(),
                    theme: record.theme.clone(),
                }
            })?;
            if let Some(topic) = record.topic.as_deref() {
                if !theme.topics.iter().any(|t| t.title == topic) {
                    return Err(CatalogError::UnknownTopic {
                        title: record.title.clone(),
                        theme: record.theme.clone(),
                        topic: topic.to_string(),
                    });
                }
            }
            if record.slug.trim().is_empty() {
                record.slug = slugify(&record.title);
            }
        }
        Ok(Self { taxonomy, records })
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
            .unwrap_or(false);
        if is_yaml {
            Self::from_yaml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        }
    }

    pub fn from_json_str(contents: &str) -> Result<Self, CatalogError> {
        let file: FixtureFile =
            serde_json::from_str(contents).map_err(|source| CatalogError::Json { source })?;
        Self::from_fixture_file(file)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: FixtureFile =
            serde_yaml::from_str(contents).map_err(|source| CatalogError::Yaml { source })?;
        Self::from_fixture_file(file)
    }

    fn from_fixture_file(file: FixtureFile) -> Result<Self, CatalogError> {
        let taxonomy = match file.themes {
            Some(themes) => Taxonomy::new(themes)?,
            None => builtin_taxonomy(),
        };
        Self::new(taxonomy, file.publications)
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn release_types(&self) -> Vec<ReleaseType> {
        let present: HashSet<ReleaseType> = self.records.iter().map(|r| r.release_type).collect();
        ReleaseType::ALL
            .into_iter()
            .filter(|t| present.contains(t))
            .collect()
    }
}
