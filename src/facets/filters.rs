use crate::catalog::{Record, ReleaseType, Taxonomy};

use super::FacetSelection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Constraint<T> {
    Any,
    Only(T),
    /// The selected id did not resolve; nothing can match.
    Nothing,
}

impl<T: PartialEq> Constraint<T> {
    fn from_lookup(selected: Option<&str>, resolve: impl FnOnce(&str) -> Option<T>) -> Self {
        match selected {
            None => Self::Any,
            Some(id) => resolve(id).map(Self::Only).unwrap_or(Self::Nothing),
        }
    }

    fn admits(&self, value: Option<&T>) -> bool {
        match self {
            Self::Any => true,
            Self::Only(expected) => value == Some(expected),
            Self::Nothing => false,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct RecordFilter<'a> {
    pub(crate) theme: Constraint<&'a str>,
    pub(crate) topic: Constraint<&'a str>,
    pub(crate) release_type: Constraint<ReleaseType>,
    pub(crate) query: Option<String>,
}

impl<'a> RecordFilter<'a> {
    pub(crate) fn resolve(selection: &FacetSelection, taxonomy: &'a Taxonomy) -> Self {
        let theme = Constraint::from_lookup(selection.category.id(), |id| taxonomy.theme_title(id));
        // An unresolvable category already matches nothing, so the topic
        // lookup only needs scoping when the category is a known theme.
        let topic_scope = selection
            .category
            .id()
            .filter(|id| taxonomy.theme(id).is_some());
        let topic = Constraint::from_lookup(selection.sub_category.id(), |id| {
            taxonomy.topic_title(topic_scope, id)
        });
        let release_type = Constraint::from_lookup(selection.release_type.id(), ReleaseType::parse);
        let query = Some(selection.query.trim())
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);
        Self {
            theme,
            topic,
            release_type,
            query,
        }
    }

    pub(crate) fn matches(&self, record: &Record) -> bool {
        if !self.theme.admits(Some(&record.theme.as_str())) {
            return false;
        }
        if !self.topic.admits(record.topic.as_deref().as_ref()) {
            return false;
        }
        if !self.release_type.admits(Some(&record.release_type)) {
            return false;
        }
        if let Some(query) = self.query.as_deref() {
            return record.title.to_lowercase().contains(query)
                || record.summary.to_lowercase().contains(query);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::catalog::builtin_taxonomy;
    use crate::facets::FacetValue;

    fn record(theme: &str, topic: Option<&str>, release_type: ReleaseType) -> Record {
        Record::new(
            "Pupil absence in schools",
            "Authorised and Unauthorised absence.",
            theme,
            topic,
            release_type,
            NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
        )
    }

    #[test]
    fn all_sentinels_admit_everything() {
        let taxonomy = builtin_taxonomy();
        let filter = RecordFilter::resolve(&FacetSelection::default(), &taxonomy);
        assert_eq!(filter.theme, Constraint::Any);
        assert!(filter.matches(&record("Schools", None, ReleaseType::AdHoc)));
    }

    #[test]
    fn ids_resolve_to_titles() {
        let taxonomy = builtin_taxonomy();
        let selection = FacetSelection {
            category: "schools".into(),
            sub_category: "pupil-attendance".into(),
            release_type: "accredited-official".into(),
            ..FacetSelection::default()
        };
        let filter = RecordFilter::resolve(&selection, &taxonomy);
        assert_eq!(filter.theme, Constraint::Only("Schools"));
        assert_eq!(filter.topic, Constraint::Only("Pupil attendance"));
        assert!(filter.matches(&record(
            "Schools",
            Some("Pupil attendance"),
            ReleaseType::AccreditedOfficial
        )));
        assert!(!filter.matches(&record("Schools", None, ReleaseType::AccreditedOfficial)));
        assert!(!filter.matches(&record(
            "Schools",
            Some("Pupil attendance"),
            ReleaseType::Official
        )));
    }

    #[test]
    fn unknown_ids_match_nothing() {
        let taxonomy = builtin_taxonomy();
        let selection = FacetSelection {
            category: FacetValue::Id("economy".to_string()),
            ..FacetSelection::default()
        };
        let filter = RecordFilter::resolve(&selection, &taxonomy);
        assert_eq!(filter.theme, Constraint::Nothing);
        assert!(!filter.matches(&record("Schools", None, ReleaseType::Official)));
    }

    #[test]
    fn topic_outside_selected_theme_matches_nothing() {
        let taxonomy = builtin_taxonomy();
        let selection = FacetSelection {
            category: "schools".into(),
            sub_category: "apprenticeships".into(),
            ..FacetSelection::default()
        };
        let filter = RecordFilter::resolve(&selection, &taxonomy);
        assert_eq!(filter.topic, Constraint::Nothing);
    }

    #[test]
    fn topic_resolves_globally_without_category() {
        let taxonomy = builtin_taxonomy();
        let selection = FacetSelection {
            sub_category: "apprenticeships".into(),
            ..FacetSelection::default()
        };
        let filter = RecordFilter::resolve(&selection, &taxonomy);
        assert_eq!(filter.topic, Constraint::Only("Apprenticeships"));
    }

    #[test]
    fn query_is_case_insensitive_over_title_and_summary() {
        let taxonomy = builtin_taxonomy();
        let r = record("Schools", None, ReleaseType::Official);
        for query in ["ABSENCE", "unauthorised", "  pupil  "] {
            let selection = FacetSelection {
                query: query.to_string(),
                ..FacetSelection::default()
            };
            assert!(RecordFilter::resolve(&selection, &taxonomy).matches(&r), "{query}");
        }
        let selection = FacetSelection {
            query: "apprentice".to_string(),
            ..FacetSelection::default()
        };
        assert!(!RecordFilter::resolve(&selection, &taxonomy).matches(&r));
    }
}
