use chrono::NaiveDate;

use super::{Catalog, Record, ReleaseType, Taxonomy, Theme, Topic};

const THEMES: &[(&str, &str, &[(&str, &str)])] = &[
    (
        "schools",
        "Schools",
        &[
            ("pupil-attendance", "Pupil attendance"),
            ("exclusions", "Exclusions and suspensions"),
            ("school-workforce", "School workforce"),
            ("pupil-characteristics", "Pupil characteristics"),
        ],
    ),
    (
        "early-years",
        "Early years",
        &[
            ("childcare-providers", "Childcare providers"),
            ("foundation-stage", "Early years foundation stage"),
        ],
    ),
    (
        "further-education",
        "Further education",
        &[
            ("apprenticeships", "Apprenticeships"),
            ("adult-skills", "Adult skills"),
        ],
    ),
    (
        "higher-education",
        "Higher education",
        &[
            ("student-finance", "Student finance"),
            ("graduate-outcomes", "Graduate outcomes"),
        ],
    ),
    (
        "childrens-social-care",
        "Children's social care",
        &[
            ("looked-after-children", "Looked-after children"),
            ("children-in-need", "Children in need"),
        ],
    ),
];

type FixtureRow = (
    &'static str,
    &'static str,
    &'static str,
    Option<&'static str>,
    ReleaseType,
    (i32, u32, u32),
);

const PUBLICATIONS: &[FixtureRow] = &[
    (
        "Pupil attendance in schools",
        "Weekly and year-to-date attendance and absence figures for state-funded schools.",
        "Schools",
        Some("Pupil attendance"),
        ReleaseType::OfficialInDevelopment,
        (2024, 5, 2),
    ),
    (
        "Pupil absence in schools in England: autumn term",
        "Overall, authorised and unauthorised absence rates including persistent absence.",
        "Schools",
        Some("Pupil attendance"),
        ReleaseType::AccreditedOfficial,
        (2024, 3, 14),
    ),
    (
        "Pupil absence in schools in England",
        "Full academic year absence rates by reason, pupil characteristic and school type.",
        "Schools",
        Some("Pupil attendance"),
        ReleaseType::AccreditedOfficial,
        (2024, 3, 14),
    ),
    (
        "Suspensions and permanent exclusions in England",
        "Suspensions and permanent exclusions from state-funded schools, with reasons.",
        "Schools",
        Some("Exclusions and suspensions"),
        ReleaseType::AccreditedOfficial,
        (2023, 7, 20),
    ),
    (
        "Permanent exclusions: reviews and appeals",
        "Independent review panel hearings and their outcomes.",
        "Schools",
        Some("Exclusions and suspensions"),
        ReleaseType::AdHoc,
        (2023, 11, 9),
    ),
    (
        "School workforce in England",
        "Teacher and support staff numbers, pay, vacancies and sickness absence.",
        "Schools",
        Some("School workforce"),
        ReleaseType::AccreditedOfficial,
        (2024, 6, 6),
    ),
    (
        "Teacher vacancies and recruitment indicators",
        "Management data on advertised vacancies drawn from the teaching vacancies service.",
        "Schools",
        Some("School workforce"),
        ReleaseType::ManagementInformation,
        (2024, 1, 25),
    ),
    (
        "Schools, pupils and their characteristics",
        "School and pupil numbers, free school meals eligibility, ethnicity and first language.",
        "Schools",
        Some("Pupil characteristics"),
        ReleaseType::AccreditedOfficial,
        (2024, 6, 6),
    ),
    (
        "Special educational needs in England",
        "Pupils with special educational needs, type of need and support provided.",
        "Schools",
        Some("Pupil characteristics"),
        ReleaseType::AccreditedOfficial,
        (2023, 6, 22),
    ),
    (
        "Free school meals: autumn term",
        "Eligibility for free school meals recorded in the autumn school census.",
        "Schools",
        Some("Pupil characteristics"),
        ReleaseType::Official,
        (2023, 12, 7),
    ),
    (
        "School capacity",
        "Number of school places, pupils on roll and forecast pupil numbers.",
        "Schools",
        None,
        ReleaseType::Official,
        (2023, 5, 25),
    ),
    (
        "Childcare and early years provider survey",
        "Number of providers, places, staff qualifications and fees.",
        "Early years",
        Some("Childcare providers"),
        ReleaseType::AccreditedOfficial,
        (2023, 12, 7),
    ),
    (
        "Early years foundation stage profile results",
        "Attainment of children at the end of the reception year.",
        "Early years",
        Some("Early years foundation stage"),
        ReleaseType::AccreditedOfficial,
        (2023, 11, 30),
    ),
    (
        "Education provision: children under 5 years of age",
        "Take-up of funded early education places for two, three and four year olds.",
        "Early years",
        None,
        ReleaseType::Official,
        (2024, 6, 13),
    ),
    (
        "Apprenticeships and traineeships",
        "Apprenticeship starts, achievements and participation by level and sector.",
        "Further education",
        Some("Apprenticeships"),
        ReleaseType::AccreditedOfficial,
        (2024, 4, 25),
    ),
    (
        "Apprenticeship starts: monthly update",
        "Provisional monthly apprenticeship starts reported through the individualised learner record.",
        "Further education",
        Some("Apprenticeships"),
        ReleaseType::ManagementInformation,
        (2024, 5, 30),
    ),
    (
        "Further education and skills",
        "Adult participation and achievement in further education and skills training.",
        "Further education",
        Some("Adult skills"),
        ReleaseType::AccreditedOfficial,
        (2023, 11, 23),
    ),
    (
        "Free courses for jobs",
        "Enrolments on level 3 courses funded through the free courses for jobs offer.",
        "Further education",
        Some("Adult skills"),
        ReleaseType::Experimental,
        (2024, 2, 29),
    ),
    (
        "Student loan forecasts for England",
        "Forecast outlay, repayments and resource accounting budget charge for student loans.",
        "Higher education",
        Some("Student finance"),
        ReleaseType::Official,
        (2023, 6, 29),
    ),
    (
        "Graduate outcomes (LEO)",
        "Employment and earnings outcomes of higher education graduates.",
        "Higher education",
        Some("Graduate outcomes"),
        ReleaseType::AccreditedOfficial,
        (2024, 6, 13),
    ),
    (
        "Participation measures in higher education",
        "Higher education initial participation rate for people aged 17 to 30.",
        "Higher education",
        None,
        ReleaseType::OfficialInDevelopment,
        (2023, 9, 28),
    ),
    (
        "Children looked after in England including adoptions",
        "Children looked after by local authorities, placements, adoptions and care leavers.",
        "Children's social care",
        Some("Looked-after children"),
        ReleaseType::AccreditedOfficial,
        (2023, 11, 16),
    ),
    (
        "Children in need",
        "Referrals, assessments and children in need including child protection plans.",
        "Children's social care",
        Some("Children in need"),
        ReleaseType::AccreditedOfficial,
        (2023, 10, 26),
    ),
    (
        "Children's social work workforce",
        "Social worker numbers, caseloads, agency workers and vacancies.",
        "Children's social care",
        None,
        ReleaseType::Official,
        (2024, 2, 29),
    ),
];

pub fn builtin_taxonomy() -> Taxonomy {
    let themes = THEMES
        .iter()
        .map(|(id, title, topics)| Theme {
            id: id.to_string(),
            title: title.to_string(),
            topics: topics
                .iter()
                .map(|(id, title)| Topic {
                    id: id.to_string(),
                    title: title.to_string(),
                })
                .collect(),
        })
        .collect();
    Taxonomy { themes }
}

pub fn builtin_catalog() -> Catalog {
    let records = PUBLICATIONS
        .iter()
        .map(|(title, summary, theme, topic, release_type, (y, m, d))| {
            let published = NaiveDate::from_ymd_opt(*y, *m, *d).unwrap_or_default();
            Record::new(title, summary, theme, *topic, *release_type, published)
        })
        .collect();
    Catalog {
        taxonomy: builtin_taxonomy(),
        records,
    }
}
