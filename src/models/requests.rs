use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::models::domain::UserProfile;

/// Request to recommend schemes for a profile
///
/// Every field is optional; absent values fall back to empty strings and age 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[serde(default)]
    pub age: Value,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default, alias = "k")]
    pub limit: Option<u16>,
}

impl RecommendRequest {
    /// Build the profile the recommender expects
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            age: coerce_age(&self.age),
            gender: clean(&self.gender),
            education: clean(&self.education),
            area: clean(&self.area),
            state: clean(&self.state),
            tags: self.tags.iter().map(|t| title_case(t.trim())).collect(),
        }
    }
}

/// Numbers and numeric strings become an age; everything else is 0
fn coerce_age(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

fn clean(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Upper-case the first letter of each alphabetic run, lower-case the rest
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for c in value.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
