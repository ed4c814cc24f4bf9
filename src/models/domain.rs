use serde::{Deserialize, Serialize};

use crate::core::normalize;

/// One row of the source dataset before normalization
///
/// Every field is optional: a missing column or an empty cell is `None`.
/// Ages are kept as raw text and coerced by the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSchemeRow {
    pub scheme_name: Option<String>,
    pub min_age: Option<String>,
    pub max_age: Option<String>,
    pub gender_eligibility: Option<String>,
    pub min_education: Option<String>,
    pub area: Option<String>,
    pub state: Option<String>,
    pub target_group: Option<String>,
    pub application_link: Option<String>,
    pub summary: Option<String>,
}

/// A normalized welfare scheme
///
/// Only the normalizer builds these, so every instance upholds
/// `min_age <= max_age` and carries its precomputed search text.
/// Use [`SchemeRecord::accepts_age`] rather than comparing the bounds directly.
#[derive(Debug, Clone, Serialize)]
pub struct SchemeRecord {
    pub name: String,
    pub min_age: i64,
    pub max_age: i64,
    pub gender_eligibility: String,
    pub min_education: String,
    pub area: String,
    pub state: String,
    pub target_group: String,
    pub summary: String,
    pub application_link: String,
    #[serde(skip)]
    pub(crate) age_inverted: bool,
    #[serde(skip)]
    pub(crate) name_text: String,
    #[serde(skip)]
    pub(crate) search_text: String,
}

impl SchemeRecord {
    /// Build a record from a raw row, applying every normalization rule
    pub fn from_raw(row: RawSchemeRow) -> Self {
        normalize::normalize_row(row)
    }

    /// Whether `age` lies in the scheme's inclusive age range
    ///
    /// A source row declaring a minimum above its maximum accepts no age.
    pub fn accepts_age(&self, age: i64) -> bool {
        !self.age_inverted && self.min_age <= age && age <= self.max_age
    }

    /// Lower-cased, trimmed scheme name
    pub fn name_text(&self) -> &str {
        &self.name_text
    }

    /// Name, summary and target group, lower-cased with every non `a-z` character removed
    pub fn search_text(&self) -> &str {
        &self.search_text
    }
}

/// The normalized scheme catalog
///
/// Loaded once at startup and shared read-only between request handlers.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<SchemeRecord>,
}

impl Dataset {
    pub fn from_raw(rows: Vec<RawSchemeRow>) -> Self {
        Self {
            records: normalize::normalize_rows(rows),
        }
    }

    pub fn records(&self) -> &[SchemeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Applicant profile used for a single recommendation request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: i64,
    pub gender: String,
    pub education: String,
    pub area: String,
    pub state: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl UserProfile {
    /// Whether the profile declares `tag` (exact, case-sensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Weights of the boolean score terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub gender: f64,
    pub central: f64,
    pub tag: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            gender: 3.0,
            central: 3.0,
            tag: 2.0,
        }
    }
}
