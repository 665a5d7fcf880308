use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::CatalogError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl Theme {
    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Taxonomy {
    pub(super) themes: Vec<Theme>,
}

impl Taxonomy {
    pub fn new(themes: Vec<Theme>) -> Result<Self, CatalogError> {
        let mut ids: HashSet<&str> = HashSet::new();
        let mut titles: HashSet<&str> = HashSet::new();
        for theme in themes.iter() {
            if !ids.insert(theme.id.as_str()) {
                return Err(CatalogError::DuplicateTheme {
                    id: theme.id.clone(),
                });
            }
            if !titles.insert(theme.title.as_str()) {
                return Err(CatalogError::DuplicateThemeTitle {
                    title: theme.title.clone(),
                });
            }
            let mut topics: HashSet<&str> = HashSet::new();
            if let Some(dup) = theme.topics.iter().find(|t| !topics.insert(t.id.as_str())) {
                return Err(CatalogError::DuplicateTopic {
                    theme: theme.id.clone(),
                    id: dup.id.clone(),
                });
            }
        }
        Ok(Self { themes })
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn theme(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    pub fn theme_by_title(&self, title: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.title == title)
    }

    pub fn theme_title(&self, id: &str) -> Option<&str> {
        self.theme(id).map(|t| t.title.as_str())
    }

    /// Resolves a topic id to its title.
    ///
    /// With `theme_id` set the lookup is scoped to that theme; otherwise every
    /// theme is searched in order and the first match wins.
    pub fn topic_title(&self, theme_id: Option<&str>, topic_id: &str) -> Option<&str> {
        match theme_id {
            Some(theme_id) => self
                .theme(theme_id)?
                .topic(topic_id)
                .map(|t| t.title.as_str()),
            None => self
                .themes
                .iter()
                .find_map(|theme| theme.topic(topic_id))
                .map(|t| t.title.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(id: &str, title: &str, topics: &[(&str, &str)]) -> Theme {
        Theme {
            id: id.to_string(),
            title: title.to_string(),
            topics: topics
                .iter()
                .map(|(id, title)| Topic {
                    id: id.to_string(),
                    title: title.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn rejects_duplicate_theme_ids() {
        let err = Taxonomy::new(vec![
            theme("schools", "Schools", &[]),
            theme("schools", "Schools again", &[]),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTheme { id } if id == "schools"));
    }

    #[test]
    fn rejects_duplicate_theme_titles() {
        let err = Taxonomy::new(vec![
            theme("schools", "Schools", &[]),
            theme("schools-2", "Schools", &[]),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateThemeTitle { title } if title == "Schools"));
    }

    #[test]
    fn rejects_duplicate_topic_ids_within_a_theme() {
        let err = Taxonomy::new(vec![theme(
            "schools",
            "Schools",
            &[("attendance", "Pupil attendance"), ("attendance", "Absence")],
        )])
        .unwrap_err();
        assert!(
            matches!(&err, CatalogError::DuplicateTopic { theme, id } if theme == "schools" && id == "attendance")
        );
        assert_eq!(
            err.to_string(),
            "duplicate topic id 'attendance' in theme 'schools'"
        );
    }

    #[test]
    fn same_topic_id_may_appear_under_different_themes() {
        let taxonomy = Taxonomy::new(vec![
            theme("schools", "Schools", &[("workforce", "School workforce")]),
            theme("fe", "Further education", &[("workforce", "FE workforce")]),
        ]);
        assert!(taxonomy.is_ok());
    }

    #[test]
    fn topic_lookup_scoped_and_global() {
        let taxonomy = Taxonomy::new(vec![
            theme("schools", "Schools", &[("attendance", "Pupil attendance")]),
            theme("fe", "Further education", &[("apprenticeships", "Apprenticeships")]),
        ])
        .unwrap();
        assert_eq!(
            taxonomy.topic_title(Some("schools"), "attendance"),
            Some("Pupil attendance")
        );
        assert_eq!(taxonomy.topic_title(Some("fe"), "attendance"), None);
        assert_eq!(taxonomy.topic_title(Some("missing"), "attendance"), None);
        assert_eq!(
            taxonomy.topic_title(None, "apprenticeships"),
            Some("Apprenticeships")
        );
    }
}
