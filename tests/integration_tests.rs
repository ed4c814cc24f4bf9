// Integration tests for Schemely Algo

use std::collections::HashSet;

use schemely_algo::core::{filters::is_recommendable, recommend, Recommender, Tier};
use schemely_algo::models::{Dataset, RawSchemeRow, UserProfile};

fn kisan_yojana() -> RawSchemeRow {
    RawSchemeRow {
        scheme_name: Some("Kisan Yojana".to_string()),
        min_age: Some("18".to_string()),
        max_age: Some("60".to_string()),
        gender_eligibility: Some("any".to_string()),
        min_education: Some("any".to_string()),
        state: Some("any".to_string()),
        target_group: Some("farmers".to_string()),
        summary: Some("kisan agri scheme".to_string()),
        application_link: Some("https://pmkisan.gov.in".to_string()),
        ..Default::default()
    }
}

fn create_scheme(name: &str, gender: &str, state: &str, summary: &str, link: &str) -> RawSchemeRow {
    RawSchemeRow {
        scheme_name: Some(name.to_string()),
        min_age: Some("18".to_string()),
        max_age: Some("60".to_string()),
        gender_eligibility: Some(gender.to_string()),
        state: Some(state.to_string()),
        summary: Some(summary.to_string()),
        application_link: Some(link.to_string()),
        ..Default::default()
    }
}

fn create_profile(gender: &str, state: &str, tags: &[&str]) -> UserProfile {
    UserProfile {
        age: 30,
        gender: gender.to_string(),
        education: "graduate".to_string(),
        area: "urban".to_string(),
        state: state.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// A mixed catalog: tag matches, gender-restricted, state-scoped, health and agri schemes
fn mixed_dataset() -> Dataset {
    Dataset::from_raw(vec![
        create_scheme("National Scholarship", "any", "All India", "scholarship for students", "https://scholarships.gov.in"),
        create_scheme("Mahila Udyam Nidhi", "female", "any", "loans for women", "https://sidbi.org"),
        create_scheme("Skill India", "any", "any", "skill training for youth", "https://skillindia.gov.in"),
        create_scheme("Ayushman Bharat", "any", "any", "hospital cover", "https://pmjay.gov.in"),
        create_scheme("PM Kisan", "any", "any", "income support for farmer families", "https://pmkisan.gov.in"),
        create_scheme("Karnataka Vidyasiri", "any", "Karnataka", "student hostel support", "https://karnataka.gov.in"),
        create_scheme("Delhi Ladli", "female", "Delhi", "girl child savings", "https://wcd.delhi.gov.in"),
        create_scheme("Atal Pension", "any", "any", "pension for workers", "https://npscra.nsdl.co.in"),
        create_scheme("Stand-Up India", "any", "any", "bank loans", "https://standupmitra.in"),
        create_scheme("National Scholarship", "any", "any", "duplicate listing for students", "https://example.com"),
    ])
}

#[test]
fn test_scenario_farmer_gets_kisan_yojana() {
    let dataset = Dataset::from_raw(vec![kisan_yojana()]);
    let profile = UserProfile {
        age: 30,
        gender: "male".to_string(),
        tags: vec!["Farmer".to_string()],
        ..Default::default()
    };

    let result = Recommender::default().recommend(dataset.records(), &profile, 5);

    assert_eq!(result.names(), vec!["Kisan Yojana"]);
    assert_eq!(result.ranked[0].tier, Tier::Strong);
}

#[test]
fn test_scenario_non_farmer_excluded_from_agri_scheme() {
    let dataset = Dataset::from_raw(vec![kisan_yojana()]);
    let profile = UserProfile {
        age: 30,
        gender: "male".to_string(),
        ..Default::default()
    };

    let result = recommend(dataset.records(), &profile, 5);

    assert!(result.is_empty());
}

#[test]
fn test_scenario_core_tier_supplies_untagged_profile() {
    let links = [
        "https://example.com",
        "https://a.gov.in",
        "https://b.org",
        "https://example.net",
        "https://c.nic.in",
        "https://d.gov",
        "",
    ];
    let rows: Vec<RawSchemeRow> = links
        .iter()
        .enumerate()
        .map(|(i, link)| create_scheme(&format!("Scheme {}", i), "any", "any", "general welfare", link))
        .collect();
    let dataset = Dataset::from_raw(rows);

    let result = Recommender::default().recommend(dataset.records(), &create_profile("male", "", &[]), 5);

    assert_eq!(result.count_in(Tier::Strong), 0);
    assert_eq!(result.len(), 5);
    // 2.0 links first, then 1.0 links, then the first 0.3 link in dataset order
    assert_eq!(
        result.names(),
        vec!["Scheme 1", "Scheme 4", "Scheme 2", "Scheme 5", "Scheme 0"]
    );
}

#[test]
fn test_every_result_is_eligible_and_allowed() {
    let dataset = mixed_dataset();

    let profiles = [
        create_profile("female", "delhi", &["Women"]),
        create_profile("male", "karnataka", &["Student"]),
        create_profile("male", "", &["Farmer", "Youth"]),
        create_profile("female", "kerala", &["Pregnant Women"]),
        create_profile("", "", &[]),
    ];

    for profile in &profiles {
        for k in 0..12 {
            let result = recommend(dataset.records(), profile, k);

            assert!(result.len() <= k);
            for scheme in &result {
                assert!(is_recommendable(scheme, profile), "{} for {:?}", scheme.name, profile);
            }

            let names: HashSet<&str> = result.iter().map(|s| s.name.as_str()).collect();
            assert_eq!(names.len(), result.len(), "duplicate names for {:?}", profile);
        }
    }
}

#[test]
fn test_cap_reached_when_enough_eligible() {
    let dataset = mixed_dataset();

    for profile in [
        create_profile("female", "delhi", &["Women"]),
        create_profile("male", "", &["Farmer"]),
    ] {
        let distinct_eligible: HashSet<&str> = dataset
            .records()
            .iter()
            .filter(|r| is_recommendable(r, &profile))
            .map(|r| r.name.as_str())
            .collect();

        for k in 0..=distinct_eligible.len() + 2 {
            let result = recommend(dataset.records(), &profile, k);
            assert_eq!(result.len(), k.min(distinct_eligible.len()));
        }
    }
}

#[test]
fn test_strong_tier_precedence() {
    let dataset = Dataset::from_raw(vec![
        create_scheme("Plain One", "any", "any", "general", "https://a.gov.in"),
        create_scheme("Student Aid", "any", "any", "student aid", "https://example.com"),
        create_scheme("Plain Two", "any", "any", "general", "https://b.gov.in"),
        create_scheme("College Grant", "any", "any", "college grant", ""),
    ]);

    let result = Recommender::default().recommend(dataset.records(), &create_profile("male", "", &["Student"]), 2);

    assert_eq!(result.names(), vec!["Student Aid", "College Grant"]);
    assert_eq!(result.count_in(Tier::Mild), 0);
    assert_eq!(result.count_in(Tier::Core), 0);
}

#[test]
fn test_earlier_tiers_never_reordered() {
    let dataset = Dataset::from_raw(vec![
        create_scheme("High Plain", "any", "any", "general", "https://top.gov.in"),
        create_scheme("Low Tagged", "any", "Goa", "youth skill", ""),
    ]);

    let result = Recommender::default().recommend(dataset.records(), &create_profile("male", "goa", &["Youth"]), 5);

    // the tagged scheme scores lower but still comes first
    assert_eq!(result.names(), vec!["Low Tagged", "High Plain"]);
    assert_eq!(result.ranked[0].tier, Tier::Strong);
    assert_eq!(result.ranked[1].tier, Tier::Mild);
}

#[test]
fn test_women_profile_in_delhi() {
    let dataset = mixed_dataset();
    let result = Recommender::default().recommend(dataset.records(), &create_profile("female", "delhi", &["Women"]), 3);

    // two tag matches, then the best-scored remaining scheme (tie broken by dataset order)
    assert_eq!(result.names(), vec!["Mahila Udyam Nidhi", "Delhi Ladli", "National Scholarship"]);
}

#[test]
fn test_concurrent_requests_share_dataset() {
    let dataset = std::sync::Arc::new(mixed_dataset());
    let recommender = Recommender::default();

    let expected = recommender
        .recommend(dataset.records(), &create_profile("male", "", &["Youth"]), 4)
        .names()
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let dataset = dataset.clone();
            let recommender = recommender.clone();
            std::thread::spawn(move || {
                recommender
                    .recommend(dataset.records(), &create_profile("male", "", &["Youth"]), 4)
                    .names()
                    .into_iter()
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
