// Core algorithm exports
pub mod criteria;
pub mod matcher;
pub mod scoring;

pub use criteria::{CriterionDef, CriterionId, CriterionKind, CRITERIA, TOTAL_WEIGHT, validate_table};
pub use matcher::{Matcher, ActiveCriterion, ActiveTarget, active_criteria, score_and_rank, DEFAULT_LIMIT};
pub use scoring::{score_set, score_single, score_numeric, normalize_values, round_to_tenth, CriterionScore};
