use crate::core::predicates::{alpha_only, normalize_text};
use crate::models::{RawSchemeRow, SchemeRecord};

/// Lower bound used when a scheme declares no minimum age
pub const DEFAULT_MIN_AGE: i64 = 0;

/// Upper bound used when a scheme declares no maximum age
pub const DEFAULT_MAX_AGE: i64 = 200;

/// Value substituted for empty restriction fields
const UNRESTRICTED: &str = "any";

/// Normalize every row; no row is ever dropped
pub fn normalize_rows(rows: Vec<RawSchemeRow>) -> Vec<SchemeRecord> {
    rows.into_iter().map(normalize_row).collect()
}

/// Turn a raw row into a well-formed record
///
/// Missing or unparseable ages widen the range, a `Max_Age` of exactly 0
/// counts as unset, and empty restriction fields become `"any"`. A range
/// whose minimum exceeds its maximum matches no age at all.
pub fn normalize_row(row: RawSchemeRow) -> SchemeRecord {
    let (min_age, max_age, age_inverted) =
        age_bounds(row.min_age.as_deref(), row.max_age.as_deref());

    let name = text_or_empty(row.scheme_name);
    let summary = text_or_empty(row.summary);
    let target_group = text_or_empty(row.target_group);

    let name_text = normalize_text(&name);
    let search_text = alpha_only(&format!(
        "{} {} {}",
        name_text,
        normalize_text(&summary),
        normalize_text(&target_group)
    ));

    SchemeRecord {
        name,
        min_age,
        max_age,
        age_inverted,
        gender_eligibility: text_or_any(row.gender_eligibility),
        min_education: text_or_any(row.min_education),
        area: text_or_any(row.area),
        state: text_or_any(row.state),
        target_group,
        summary,
        application_link: text_or_empty(row.application_link),
        name_text,
        search_text,
    }
}

/// Parse a numeric cell, returning `None` for anything that is not a finite number
pub fn parse_age(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Resolve the inclusive age bounds and whether the declared range is inverted
fn age_bounds(raw_min: Option<&str>, raw_max: Option<&str>) -> (i64, i64, bool) {
    let min_age = parse_age(raw_min)
        .map(|v| v.ceil() as i64)
        .unwrap_or(DEFAULT_MIN_AGE);

    // 0 in Max_Age means "no upper bound given"
    let max_age = parse_age(raw_max)
        .filter(|v| *v != 0.0)
        .map(|v| v.floor() as i64)
        .unwrap_or(DEFAULT_MAX_AGE);

    // Collapsed onto the upper bound so min_age <= max_age still holds
    if min_age > max_age {
        tracing::trace!("Inverted age range {}..{} matches no age", min_age, max_age);
        return (max_age, max_age, true);
    }

    (min_age, max_age, false)
}

fn text_or_any(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => UNRESTRICTED.to_string(),
    }
}

fn text_or_empty(value: Option<String>) -> String {
    value.unwrap_or_default()
}
