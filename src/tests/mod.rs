use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use proptest::test_runner::Config;

use crate::catalog::{builtin_catalog, builtin_taxonomy, Catalog, Record, ReleaseType};
use crate::facets::{FacetEvent, FacetSelection, FacetValue, SortOrder};
use crate::finder::Finder;
use crate::view::{compute_view, PAGE_SIZE};

fn schools_record(i: u32) -> Record {
    Record::new(
        &format!("School census table {i}"),
        "Pupil numbers by school type.",
        "Schools",
        Some("Pupil characteristics"),
        ReleaseType::Official,
        NaiveDate::from_ymd_opt(2023, 1, i).unwrap(),
    )
}

#[test]
fn fifteen_schools_records_make_two_pages() {
    let catalog = Catalog::new(builtin_taxonomy(), (1..=15).map(schools_record).collect()).unwrap();
    let selection = FacetSelection {
        category: "schools".into(),
        ..FacetSelection::default()
    };
    let view = compute_view(catalog.records(), catalog.taxonomy(), &selection);
    assert_eq!(view.total_count(), 15);
    assert_eq!(view.page_count(), 2);
    assert_eq!(view.pages()[0].len(), 10);
    assert_eq!(view.pages()[1].len(), 5);
}

#[test]
fn unmatched_query_yields_no_pages() {
    let catalog = builtin_catalog();
    let selection = FacetSelection {
        query: "quantum chromodynamics".to_string(),
        ..FacetSelection::default()
    };
    let view = compute_view(catalog.records(), catalog.taxonomy(), &selection);
    assert_eq!(view.total_count(), 0);
    assert!(view.pages().is_empty());
}

#[test]
fn clearing_category_resets_sub_category_and_restores_results() {
    let mut finder = Finder::new(builtin_catalog());
    let unfiltered: Vec<String> = finder.view().records().map(|r| r.slug.clone()).collect();

    finder.apply(FacetEvent::SetCategory("schools".into()));
    finder.apply(FacetEvent::SetSubCategory("school-workforce".into()));
    assert_eq!(finder.view().total_count(), 2);

    finder.apply(FacetEvent::SetCategory(FacetValue::All));
    assert_eq!(finder.selection().sub_category, FacetValue::All);
    let restored: Vec<String> = finder.view().records().map(|r| r.slug.clone()).collect();
    assert_eq!(restored, unfiltered);
}

#[test]
fn narrowing_filters_from_a_later_page_returns_to_first_page() {
    let mut finder = Finder::new(builtin_catalog());
    finder.apply(FacetEvent::GoToPage(2));
    assert_eq!(finder.selection().page, 2);
    finder.apply(FacetEvent::SetCategory("higher-education".into()));
    assert_eq!(finder.selection().page, 0);
    assert_eq!(finder.view().page_count(), 1);
}

#[test]
fn filters_combine_across_facets() {
    let catalog = builtin_catalog();
    let selection = FacetSelection {
        query: "absence".to_string(),
        category: "schools".into(),
        release_type: "accredited-official".into(),
        sort: SortOrder::Alphabetical,
        ..FacetSelection::default()
    };
    let view = compute_view(catalog.records(), catalog.taxonomy(), &selection);
    let titles: Vec<&str> = view.records().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Pupil absence in schools in England",
            "Pupil absence in schools in England: autumn term",
            "School workforce in England",
        ]
    );
}

#[test]
fn newest_first_keeps_fixture_order_on_equal_dates() {
    let catalog = builtin_catalog();
    let view = compute_view(
        catalog.records(),
        catalog.taxonomy(),
        &FacetSelection::default(),
    );
    let same_day: Vec<&str> = view
        .records()
        .filter(|r| r.published == NaiveDate::from_ymd_opt(2024, 3, 14).unwrap())
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(
        same_day,
        vec![
            "Pupil absence in schools in England: autumn term",
            "Pupil absence in schools in England",
        ]
    );
}

const THEMES: [(&str, &str, &[&str]); 3] = [
    ("schools", "Schools", &["Pupil attendance", "Exclusions and suspensions"]),
    ("early-years", "Early years", &["Childcare providers"]),
    ("further-education", "Further education", &["Apprenticeships"]),
];

const TITLE_WORDS: [&str; 6] = ["Pupil", "absence", "Census", "apprentice", "care", "Early"];

fn arb_record() -> impl Strategy<Value = Record> {
    (
        proptest::collection::vec(0..TITLE_WORDS.len(), 1..4),
        0..THEMES.len(),
        any::<bool>(),
        0..ReleaseType::ALL.len(),
        0u64..60,
    )
        .prop_map(|(words, theme, with_topic, release_type, days)| {
            let (_, title, topics) = THEMES[theme];
            let words: Vec<&str> = words.into_iter().map(|w| TITLE_WORDS[w]).collect();
            let topic = if with_topic { Some(topics[0]) } else { None };
            let published = NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .checked_add_days(Days::new(days))
                .unwrap();
            Record::new(
                &words.join(" "),
                "Statistics release.",
                title,
                topic,
                ReleaseType::ALL[release_type],
                published,
            )
        })
}

fn arb_facet(ids: &'static [&'static str]) -> impl Strategy<Value = FacetValue> {
    prop_oneof![
        Just(FacetValue::All),
        proptest::sample::select(ids).prop_map(FacetValue::from),
    ]
}

fn arb_selection() -> impl Strategy<Value = FacetSelection> {
    (
        prop_oneof![
            Just(String::new()),
            Just("absence".to_string()),
            Just("CENSUS".to_string()),
            Just("e".to_string()),
        ],
        arb_facet(&["schools", "early-years", "further-education", "economy"]),
        arb_facet(&["pupil-attendance", "childcare-providers", "apprenticeships", "gdp"]),
        arb_facet(&["official", "ad-hoc", "experimental", "bulletin"]),
        prop_oneof![Just(SortOrder::Newest), Just(SortOrder::Alphabetical)],
    )
        .prop_map(|(query, category, sub_category, release_type, sort)| FacetSelection {
            query,
            category,
            sub_category,
            release_type,
            sort,
            page: 0,
        })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn pages_partition_the_total(
        records in proptest::collection::vec(arb_record(), 0..45),
        selection in arb_selection()
    ) {
        let taxonomy = builtin_taxonomy();
        let view = compute_view(&records, &taxonomy, &selection);
        let sum: usize = view.pages().iter().map(Vec::len).sum();
        prop_assert_eq!(sum, view.total_count());
        let pages = view.pages();
        for (i, page) in pages.iter().enumerate() {
            prop_assert!(!page.is_empty());
            prop_assert!(page.len() <= PAGE_SIZE);
            if i + 1 < pages.len() {
                prop_assert_eq!(page.len(), PAGE_SIZE);
            }
        }
    }

    #[test]
    fn compute_view_is_idempotent(
        records in proptest::collection::vec(arb_record(), 0..30),
        selection in arb_selection()
    ) {
        let taxonomy = builtin_taxonomy();
        let first = compute_view(&records, &taxonomy, &selection);
        let second = compute_view(&records, &taxonomy, &selection);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn clearing_filters_restores_every_record(
        records in proptest::collection::vec(arb_record(), 0..30),
        selection in arb_selection()
    ) {
        let taxonomy = builtin_taxonomy();
        let mut cleared = selection.clone();
        cleared.apply(FacetEvent::ClearFilters);
        prop_assert_eq!(cleared.sort, selection.sort);
        let view = compute_view(&records, &taxonomy, &cleared);
        prop_assert_eq!(view.total_count(), records.len());
        let unfiltered = FacetSelection {
            sort: selection.sort,
            ..FacetSelection::default()
        };
        prop_assert_eq!(view, compute_view(&records, &taxonomy, &unfiltered));
    }

    #[test]
    fn sort_order_is_respected(
        records in proptest::collection::vec(arb_record(), 0..30),
        selection in arb_selection()
    ) {
        let taxonomy = builtin_taxonomy();
        let view = compute_view(&records, &taxonomy, &selection);
        let sorted: Vec<&Record> = view.records().collect();
        for pair in sorted.windows(2) {
            match selection.sort {
                SortOrder::Alphabetical => prop_assert!(
                    pair[0].title.to_lowercase() <= pair[1].title.to_lowercase()
                ),
                SortOrder::Newest => prop_assert!(pair[0].published >= pair[1].published),
            }
        }
    }

    #[test]
    fn every_listed_record_satisfies_the_selection(
        records in proptest::collection::vec(arb_record(), 0..30),
        selection in arb_selection()
    ) {
        let taxonomy = builtin_taxonomy();
        let view = compute_view(&records, &taxonomy, &selection);
        let query = selection.query.to_lowercase();
        for r in view.records() {
            if let Some(id) = selection.category.id() {
                prop_assert_eq!(Some(r.theme.as_str()), taxonomy.theme_title(id));
            }
            if let Some(id) = selection.sub_category.id() {
                let title = taxonomy.topic_title(selection.category.id(), id);
                prop_assert!(title.is_some());
                prop_assert_eq!(r.topic.as_deref(), title);
            }
            if let Some(id) = selection.release_type.id() {
                prop_assert_eq!(Some(r.release_type), ReleaseType::parse(id));
            }
            prop_assert!(
                r.title.to_lowercase().contains(&query) || r.summary.to_lowercase().contains(&query)
            );
        }
    }
}
