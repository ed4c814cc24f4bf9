use std::cmp::Ordering;
use std::collections::HashSet;

use crate::core::{
    filters::is_recommendable,
    predicates::{gender_ok, tag_hit},
    scoring::score_with_tag_hit,
};
use crate::models::{SchemeRecord, ScoringWeights, UserProfile};

/// Relaxation level a recommended scheme was selected at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// A profile tag matches the scheme
    Strong,
    /// A profile tag matches or the scheme admits the user's gender
    Mild,
    /// Eligible and category-allowed only
    Core,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Strong, Tier::Mild, Tier::Core];

    #[inline]
    fn admits(self, candidate: &Candidate<'_>) -> bool {
        match self {
            Tier::Strong => candidate.tag_hit,
            Tier::Mild => candidate.tag_hit || candidate.gender_ok,
            Tier::Core => true,
        }
    }
}

/// A scheme in a recommendation, with the tier that selected it
#[derive(Debug, Clone, Copy)]
pub struct RankedScheme<'a> {
    pub scheme: &'a SchemeRecord,
    pub tier: Tier,
}

/// Result of the recommendation process
#[derive(Debug)]
pub struct Recommendation<'a> {
    pub ranked: Vec<RankedScheme<'a>>,
    pub total_schemes: usize,
    pub eligible_schemes: usize,
}

impl<'a> Recommendation<'a> {
    /// Schemes in relevance order
    pub fn schemes(&self) -> impl Iterator<Item = &'a SchemeRecord> + '_ {
        self.ranked.iter().map(|r| r.scheme)
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.ranked.iter().map(|r| r.scheme.name.as_str()).collect()
    }

    /// Number of schemes contributed by `tier`
    pub fn count_in(&self, tier: Tier) -> usize {
        self.ranked.iter().filter(|r| r.tier == tier).count()
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Eligible, category-allowed scheme with its profile-specific facts
#[derive(Debug)]
struct Candidate<'a> {
    record: &'a SchemeRecord,
    tag_hit: bool,
    gender_ok: bool,
    score: f64,
}

/// Tiered recommendation orchestrator
///
/// # Tiers
/// 1. Strong: tag match
/// 2. Mild: tag match or gender match
/// 3. Core: any eligible, category-allowed scheme
///
/// Each tier only runs while fewer than `k` schemes have been chosen. A tier
/// sorts its own new candidates by score (stable, so ties keep dataset
/// order) and appends them after earlier tiers without reordering them.
/// Scheme names are unique within a recommendation.
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
}

impl Recommender {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Recommend up to `k` schemes for a profile
    ///
    /// # Arguments
    /// * `dataset` - The normalized scheme catalog
    /// * `profile` - The applicant profile
    /// * `k` - Maximum number of schemes to return
    ///
    /// # Returns
    /// Recommendation holding at most `k` distinct schemes in relevance order
    pub fn recommend<'a>(
        &self,
        dataset: &'a [SchemeRecord],
        profile: &UserProfile,
        k: usize,
    ) -> Recommendation<'a> {
        let candidates: Vec<Candidate<'a>> = dataset
            .iter()
            .filter(|record| is_recommendable(record, profile))
            .map(|record| {
                let matched = tag_hit(record, profile);
                Candidate {
                    record,
                    tag_hit: matched,
                    gender_ok: gender_ok(&record.gender_eligibility, &profile.gender),
                    score: score_with_tag_hit(record, profile, &self.weights, matched),
                }
            })
            .collect();

        let mut ranked: Vec<RankedScheme<'a>> = Vec::with_capacity(k.min(candidates.len()));
        let mut chosen: HashSet<&'a str> = HashSet::new();

        for tier in Tier::ALL {
            if ranked.len() >= k {
                break;
            }

            let mut pool: Vec<&Candidate<'a>> = candidates
                .iter()
                .filter(|c| tier.admits(c))
                .filter(|c| !chosen.contains(c.record.name.as_str()))
                .collect();

            // Sort by score (descending); stable so ties keep dataset order
            pool.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

            for candidate in pool {
                if ranked.len() >= k {
                    break;
                }
                if chosen.insert(candidate.record.name.as_str()) {
                    ranked.push(RankedScheme {
                        scheme: candidate.record,
                        tier,
                    });
                }
            }

            tracing::trace!("Tier {:?} filled {} of {} slots", tier, ranked.len(), k);
        }

        Recommendation {
            ranked,
            total_schemes: dataset.len(),
            eligible_schemes: candidates.len(),
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Recommend up to `k` schemes with the default score weights
pub fn recommend<'a>(
    dataset: &'a [SchemeRecord],
    profile: &UserProfile,
    k: usize,
) -> Vec<&'a SchemeRecord> {
    Recommender::with_default_weights()
        .recommend(dataset, profile, k)
        .schemes()
        .collect()
}
