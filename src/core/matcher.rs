use std::cmp::Ordering;
use std::collections::HashSet;
use crate::error::MatchError;
use crate::models::{BreakdownEntry, CandidateProfile, MatchResult, NumericProximity, TargetCriteria};
use crate::core::{
    criteria::{CriterionDef, CriterionKind, CRITERIA},
    scoring::{normalize_values, round_to_tenth, score_numeric, score_set, score_single, CriterionScore},
};

/// Number of results returned when the caller does not ask for a limit
pub const DEFAULT_LIMIT: usize = 20;

/// Normalized target value of an active criterion
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveTarget {
    Set(Vec<String>),
    Single(Vec<String>),
    Minimum(f64),
}

/// A criterion constraining the current scoring pass
#[derive(Debug, Clone)]
pub struct ActiveCriterion {
    pub def: &'static CriterionDef,
    /// Static weight rescaled so all active weights sum to 100
    pub effective_weight: f64,
    pub target: ActiveTarget,
}

/// Resolve which criteria a target constrains and redistribute their weights
///
/// The scale depends on the target only, so it is identical for every
/// candidate scored against it.
pub fn active_criteria(target: &TargetCriteria) -> Vec<ActiveCriterion> {
    let selected: Vec<(&'static CriterionDef, ActiveTarget)> = CRITERIA
        .iter()
        .filter_map(|def| {
            let active = match def.kind {
                CriterionKind::Set | CriterionKind::SingleValue => {
                    let values = normalize_values(target.values(def.id)?);
                    if values.is_empty() {
                        return None;
                    }
                    if def.kind == CriterionKind::Set {
                        ActiveTarget::Set(values)
                    } else {
                        ActiveTarget::Single(values)
                    }
                }
                CriterionKind::NumericThreshold => {
                    let min = target.minimum(def.id)?;
                    if !(min.is_finite() && min > 0.0) {
                        return None;
                    }
                    ActiveTarget::Minimum(min)
                }
            };
            Some((def, active))
        })
        .collect();

    let total_active_weight: u32 = selected.iter().map(|(def, _)| def.weight).sum();
    if total_active_weight == 0 {
        return Vec::new();
    }
    let scale = 100.0 / total_active_weight as f64;

    tracing::debug!(
        "{} active criteria (total weight {}, scale {:.4})",
        selected.len(),
        total_active_weight,
        scale
    );

    selected
        .into_iter()
        .map(|(def, target)| ActiveCriterion {
            def,
            effective_weight: def.weight as f64 * scale,
            target,
        })
        .collect()
}

/// ICP matcher: scores candidate profiles against target criteria and ranks them
///
/// Holds configuration only, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Matcher {
    proximity: NumericProximity,
    default_limit: usize,
    max_limit: Option<usize>,
}

impl Matcher {
    pub fn new(proximity: NumericProximity, default_limit: usize, max_limit: Option<usize>) -> Self {
        Self {
            proximity,
            default_limit: default_limit.max(1),
            max_limit,
        }
    }

    pub fn proximity(&self) -> &NumericProximity {
        &self.proximity
    }

    /// Score and rank candidates against a target
    ///
    /// # Arguments
    /// * `target` - The project's target criteria
    /// * `candidates` - Candidate pool; each is moved into its result
    /// * `exclude_ids` - Candidate ids to skip entirely
    /// * `limit` - Maximum number of results, [`DEFAULT_LIMIT`] when `None`
    ///
    /// # Returns
    /// Candidates with a score above zero, ordered by score descending and
    /// then by id ascending, at most `limit` long. A target with no active
    /// criteria yields an empty list.
    pub fn score_and_rank(
        &self,
        target: &TargetCriteria,
        candidates: Vec<CandidateProfile>,
        exclude_ids: &HashSet<String>,
        limit: Option<usize>,
    ) -> Result<Vec<MatchResult>, MatchError> {
        let limit = self.resolve_limit(limit)?;

        let active = active_criteria(target);
        if active.is_empty() {
            tracing::debug!("Target has no active criteria, nothing to rank");
            return Ok(Vec::new());
        }

        let mut results: Vec<MatchResult> = candidates
            .into_iter()
            .filter(|candidate| !exclude_ids.contains(&candidate.id))
            .filter_map(|candidate| self.score_candidate(&active, candidate))
            .collect();

        results.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.candidate.id.cmp(&b.candidate.id))
        });

        results.truncate(limit);

        Ok(results)
    }

    /// Score a single candidate against resolved active criteria
    ///
    /// Returns `None` when the rounded score is zero.
    pub fn score_candidate(
        &self,
        active: &[ActiveCriterion],
        candidate: CandidateProfile,
    ) -> Option<MatchResult> {
        let mut total_earned = 0.0;
        let mut contributions: Vec<(f64, BreakdownEntry)> = Vec::new();

        for criterion in active {
            let id = criterion.def.id;
            let weight = criterion.effective_weight;

            let CriterionScore { earned, matched } = match &criterion.target {
                ActiveTarget::Set(values) => score_set(values, &candidate.set_value(id), weight),
                ActiveTarget::Single(values) => {
                    score_single(values, &candidate.single_value(id), weight)
                }
                ActiveTarget::Minimum(min) => {
                    score_numeric(*min, candidate.numeric_value(id), weight, &self.proximity)
                }
            };

            if earned > 0.0 {
                total_earned += earned;
                contributions.push((
                    earned,
                    BreakdownEntry {
                        criterion: criterion.def.target_field,
                        label: criterion.def.label,
                        matched,
                        weight: round_to_tenth(weight),
                        earned: round_to_tenth(earned),
                    },
                ));
            }
        }

        let score = total_earned.round().min(100.0) as u32;

        tracing::trace!(
            "Candidate {} earned {:.3} points (score {})",
            candidate.id,
            total_earned,
            score
        );

        if score == 0 {
            return None;
        }

        // Stable, so equal contributions keep table order
        contributions.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        Some(MatchResult {
            candidate,
            score,
            breakdown: contributions.into_iter().map(|(_, entry)| entry).collect(),
        })
    }

    fn resolve_limit(&self, limit: Option<usize>) -> Result<usize, MatchError> {
        let limit = match limit {
            Some(0) => return Err(MatchError::InvalidLimit(0)),
            Some(limit) => limit,
            None => self.default_limit,
        };

        match self.max_limit {
            Some(max) if limit > max => {
                tracing::debug!("Clamping limit {} to {}", limit, max);
                Ok(max)
            }
            _ => Ok(limit),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(NumericProximity::default(), DEFAULT_LIMIT, None)
    }
}

/// Score and rank with the default matcher
pub fn score_and_rank(
    target: &TargetCriteria,
    candidates: Vec<CandidateProfile>,
    exclude_ids: &HashSet<String>,
    limit: Option<usize>,
) -> Result<Vec<MatchResult>, MatchError> {
    Matcher::default().score_and_rank(target, candidates, exclude_ids, limit)
}
