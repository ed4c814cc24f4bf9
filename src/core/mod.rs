// Core algorithm exports
pub mod filters;
pub mod normalize;
pub mod predicates;
pub mod recommender;
pub mod scoring;

pub use filters::{allowed_category, is_recommendable, passes_core_filters};
pub use normalize::{normalize_row, normalize_rows, parse_age};
pub use recommender::{recommend, RankedScheme, Recommendation, Recommender, Tier};
pub use scoring::score_scheme;
