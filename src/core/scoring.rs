use crate::models::{SchemeRecord, UserProfile, ScoringWeights};
use crate::core::predicates::{gender_ok, is_central, link_score, tag_hit};

/// Calculate the desirability of an eligible scheme for a profile
///
/// Scoring formula:
/// score = (
///     gender_ok * 3 +      # scheme admits the user's gender
///     is_central * 3 +     # nationwide scope
///     tag_hit * 2 +        # one of the user's tags matches
///     link_score           # 2.0 / 1.0 / 0.3 by link trust
/// )
///
/// Scores only order candidates within one recommender tier.
pub fn score_scheme(
    record: &SchemeRecord,
    profile: &UserProfile,
    weights: &ScoringWeights,
) -> f64 {
    score_with_tag_hit(record, profile, weights, tag_hit(record, profile))
}

/// Same as [`score_scheme`] with a tag match computed by the caller
#[inline]
pub(crate) fn score_with_tag_hit(
    record: &SchemeRecord,
    profile: &UserProfile,
    weights: &ScoringWeights,
    tag_matched: bool,
) -> f64 {
    let gender_score = indicator(gender_ok(&record.gender_eligibility, &profile.gender));
    let central_score = indicator(is_central(&record.state));
    let tag_score = indicator(tag_matched);

    gender_score * weights.gender
        + central_score * weights.central
        + tag_score * weights.tag
        + link_score(&record.application_link)
}

#[inline]
fn indicator(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}
