//! Pure predicates shared by the filters, the scorer and the recommender.
//!
//! All text comparisons are case-insensitive: inputs are lower-cased and
//! trimmed before they are compared.

use std::borrow::Cow;

use url::Url;

use crate::models::{SchemeRecord, UserProfile};

/// Education levels in ascending order
pub const EDUCATION_LEVELS: [&str; 6] = [
    "class 8",
    "class 10",
    "class 12",
    "graduate",
    "postgraduate",
    "phd",
];

/// Keywords that link a profile tag to scheme text
pub const TAG_KEYWORDS: &[(&str, &[&str])] = &[
    ("Student", &["student", "scholar", "nsp", "inspire", "school", "college"]),
    ("Unemployed", &["unemployed", "rojgar", "ncs", "employment"]),
    ("Youth", &["youth", "skill", "pmkvy", "apprentice", "internship"]),
    ("Women", &["women", "woman", "mahila", "beti", "kanya", "ladli", "girl"]),
    (
        "Entrepreneur",
        &["startup", "entrepreneur", "mudra", "pmegp", "odop", "udyam", "pm-fme", "msme"],
    ),
    (
        "Farmer",
        &[
            "farmer", "kisan", "agri", "agriculture", "crop", "horticulture", "irrigation", "dairy",
            "bamboo", "rythu",
        ],
    ),
];

pub const HEALTH_KEYWORDS: &[&str] = &[
    "health", "disease", "hospital", "mental", "virus", "cancer", "medical", "ayush", "covid",
];

pub const AGRI_KEYWORDS: &[&str] = &[
    "kisan", "farmer", "agri", "crop", "irrigation", "dairy", "bamboo", "rythu",
];

pub const INDIAN_STATES: &[&str] = &[
    "andhra pradesh", "arunachal pradesh", "assam", "bihar", "chhattisgarh", "goa",
    "gujarat", "haryana", "himachal pradesh", "jharkhand", "karnataka", "kerala",
    "madhya pradesh", "maharashtra", "manipur", "meghalaya", "mizoram", "nagaland",
    "odisha", "orissa", "punjab", "rajasthan", "sikkim", "tamil nadu", "telangana",
    "tripura", "uttar pradesh", "uttarakhand", "west bengal", "delhi", "ladakh",
    "jammu", "kashmir", "jammu and kashmir",
];

/// Lower-case and trim
#[inline]
pub fn normalize_text(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Lower-case and keep only `a-z`
pub fn alpha_only(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Whether a state value means nationwide scope
pub fn is_central(state: &str) -> bool {
    let s = normalize_text(state);
    s.is_empty() || s == "any" || s.contains("all india") || s.contains("pan india")
}

/// Rank of an education level, `None` when it is not on the scale
pub fn education_rank(level: &str) -> Option<usize> {
    let level = normalize_text(level);
    EDUCATION_LEVELS.iter().position(|l| *l == level)
}

/// Whether the user's education satisfies the required level
///
/// Requirements off the scale (including `any`) pass. Unknown user levels
/// rank below everything.
pub fn edu_ok(user_education: &str, required_education: &str) -> bool {
    let Some(required) = education_rank(required_education) else {
        return true;
    };
    let user = education_rank(user_education).map_or(-1, |r| r as i64);
    user >= required as i64
}

/// Whether the scheme's gender restriction admits the user
pub fn gender_ok(record_gender: &str, user_gender: &str) -> bool {
    let g = normalize_text(record_gender);
    g.is_empty() || g == "any" || g == normalize_text(user_gender)
}

/// Trust weight of an application link based on its host
pub fn link_score(link: &str) -> f64 {
    let host = Url::parse(link.trim())
        .ok()
        .and_then(|u| u.host_str().map(str::to_lowercase))
        .unwrap_or_default();

    if host.ends_with(".gov.in") || host.ends_with(".nic.in") {
        2.0
    } else if host.ends_with(".gov") || host.ends_with(".org") {
        1.0
    } else {
        0.3
    }
}

/// Keywords registered for a tag, if any
pub fn keywords_for_tag(tag: &str) -> &'static [&'static str] {
    TAG_KEYWORDS
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, kws)| *kws)
        .unwrap_or(&[])
}

/// Whether any keyword occurs in alphabetic-only text
///
/// Keywords are stripped the same way as the text before comparison.
#[inline]
fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| {
        let kw: Cow<str> = if kw.chars().all(|c| c.is_ascii_lowercase()) {
            Cow::Borrowed(*kw)
        } else {
            Cow::Owned(alpha_only(kw))
        };
        !kw.is_empty() && text.contains(kw.as_ref())
    })
}

/// Whether any of the profile's tags matches the scheme text
pub fn tag_hit(record: &SchemeRecord, profile: &UserProfile) -> bool {
    profile
        .tags
        .iter()
        .any(|tag| contains_any(record.search_text(), keywords_for_tag(tag)))
}

pub fn is_health_scheme(record: &SchemeRecord) -> bool {
    contains_any(record.search_text(), HEALTH_KEYWORDS)
}

pub fn is_agri_scheme(record: &SchemeRecord) -> bool {
    contains_any(record.search_text(), AGRI_KEYWORDS)
}

/// Whether the scheme name names a state other than the user's
///
/// A mentioned state matches the user's when either contains the other, so
/// an empty user state never marks a scheme as foreign.
pub fn is_other_state_specific(record: &SchemeRecord, profile: &UserProfile) -> bool {
    let user_state = normalize_text(&profile.state);
    INDIAN_STATES
        .iter()
        .filter(|s| record.name_text().contains(*s))
        .any(|s| !user_state.contains(s) && !s.contains(user_state.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawSchemeRow;

    fn record(name: &str, summary: &str, target_group: &str) -> SchemeRecord {
        SchemeRecord::from_raw(RawSchemeRow {
            scheme_name: Some(name.to_string()),
            summary: Some(summary.to_string()),
            target_group: Some(target_group.to_string()),
            ..Default::default()
        })
    }

    fn profile_with(state: &str, tags: &[&str]) -> UserProfile {
        UserProfile {
            age: 30,
            state: state.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_is_central() {
        assert!(is_central(""));
        assert!(is_central(" ANY "));
        assert!(is_central("All India"));
        assert!(is_central("pan india (except goa)"));
        assert!(!is_central("Kerala"));
    }

    #[test]
    fn test_edu_ok_ranks() {
        assert!(edu_ok("graduate", "class 12"));
        assert!(edu_ok("Class 12", "class 12"));
        assert!(!edu_ok("class 10", "graduate"));
        assert!(edu_ok("phd", "postgraduate"));
    }

    #[test]
    fn test_edu_ok_unknown_levels() {
        // unknown requirement passes everyone
        assert!(edu_ok("", "diploma"));
        // unknown user level fails every ranked requirement
        assert!(!edu_ok("diploma", "class 8"));
        assert!(edu_ok("class 8", "any"));
        assert!(edu_ok("", "ANY"));
    }

    #[test]
    fn test_gender_ok() {
        assert!(gender_ok("any", "male"));
        assert!(gender_ok("", "female"));
        assert!(gender_ok("Female", "female "));
        assert!(!gender_ok("female", "male"));
    }

    #[test]
    fn test_link_score() {
        assert_eq!(link_score("https://pmkisan.gov.in/"), 2.0);
        assert_eq!(link_score("https://scholarships.NIC.IN/apply"), 2.0);
        assert_eq!(link_score("https://www.usa.gov"), 1.0);
        assert_eq!(link_score("http://example.org/form"), 1.0);
        assert_eq!(link_score("https://example.com"), 0.3);
        assert_eq!(link_score("pmkisan.gov.in"), 0.3);
        assert_eq!(link_score(""), 0.3);
    }

    #[test]
    fn test_tag_hit() {
        let scholarship = record("National Scholarship Portal", "", "students");
        assert!(tag_hit(&scholarship, &profile_with("", &["Student"])));
        assert!(!tag_hit(&scholarship, &profile_with("", &["Farmer"])));
        assert!(!tag_hit(&scholarship, &profile_with("", &[])));
        // tags are matched against title-cased keys
        assert!(!tag_hit(&scholarship, &profile_with("", &["student"])));
    }

    #[test]
    fn test_tag_hit_hyphenated_keyword() {
        let fme = record("PM-FME", "Formalisation of micro food units", "");
        assert!(tag_hit(&fme, &profile_with("", &["Entrepreneur"])));
    }

    #[test]
    fn test_category_detection() {
        assert!(is_health_scheme(&record("Ayushman Bharat", "Hospital cover", "")));
        assert!(!is_health_scheme(&record("Startup India", "", "")));
        assert!(is_agri_scheme(&record("Rythu Bandhu", "", "")));
        assert!(!is_agri_scheme(&record("Mudra Loan", "", "")));
    }

    #[test]
    fn test_other_state_specific() {
        let kerala = record("Kerala Startup Mission", "", "");
        assert!(is_other_state_specific(&kerala, &profile_with("bihar", &[])));
        assert!(!is_other_state_specific(&kerala, &profile_with("kerala", &[])));
        assert!(!is_other_state_specific(&kerala, &profile_with("", &[])));

        let national = record("PM Mudra Yojana", "", "");
        assert!(!is_other_state_specific(&national, &profile_with("bihar", &[])));
    }

    #[test]
    fn test_other_state_substring_aliases() {
        // "jammu" is contained in the user's state, so it is not foreign
        let jk = record("Jammu Youth Scheme", "", "");
        assert!(!is_other_state_specific(&jk, &profile_with("jammu and kashmir", &[])));
    }
}
