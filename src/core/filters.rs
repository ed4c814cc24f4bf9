use crate::core::predicates::{
    edu_ok, gender_ok, is_agri_scheme, is_central, is_health_scheme, is_other_state_specific,
    normalize_text,
};
use crate::models::{SchemeRecord, UserProfile};

/// Tags that unlock health schemes
const HEALTH_TAGS: [&str; 2] = ["Pregnant Women", "Senior Citizen"];

/// Tag that unlocks agriculture schemes
const FARMER_TAG: &str = "Farmer";

/// Mandatory eligibility gate: state scope, age, education and gender
#[inline]
pub fn passes_core_filters(record: &SchemeRecord, profile: &UserProfile) -> bool {
    // State scope: nationwide, or the user's state appears in the scheme's state
    if !is_central(&record.state)
        && !normalize_text(&record.state).contains(normalize_text(&profile.state).as_str())
    {
        return false;
    }

    // Age range, inclusive at both ends
    if !record.accepts_age(profile.age) {
        return false;
    }

    if !edu_ok(&profile.education, &record.min_education) {
        return false;
    }

    if !gender_ok(&record.gender_eligibility, &profile.gender) {
        return false;
    }

    true
}

/// Category exclusions layered on top of eligibility
///
/// Health schemes need a health tag, agriculture schemes need the farmer
/// tag, and schemes named after another state are dropped.
#[inline]
pub fn allowed_category(record: &SchemeRecord, profile: &UserProfile) -> bool {
    if is_health_scheme(record) && !HEALTH_TAGS.iter().any(|t| profile.has_tag(t)) {
        return false;
    }

    if is_agri_scheme(record) && !profile.has_tag(FARMER_TAG) {
        return false;
    }

    !is_other_state_specific(record, profile)
}

/// Eligible and category-allowed
///
/// Category rules are only consulted for eligible records.
#[inline]
pub fn is_recommendable(record: &SchemeRecord, profile: &UserProfile) -> bool {
    passes_core_filters(record, profile) && allowed_category(record, profile)
}
