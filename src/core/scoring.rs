use std::collections::HashSet;
use crate::models::{NumericValue, NumericProximity, SetValue, SingleValue};

/// Points a candidate earned on one criterion
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionScore {
    pub earned: f64,
    pub matched: Vec<String>,
}

impl CriterionScore {
    fn none() -> Self {
        Self {
            earned: 0.0,
            matched: Vec::new(),
        }
    }
}

/// Normalize target values for comparison: trimmed, lower-cased, deduplicated,
/// blanks dropped. Order of first occurrence is kept.
pub fn normalize_values(values: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty() && seen.insert(v.clone()))
        .collect()
}

/// Partial credit for overlapping values
///
/// `target` must come from [`normalize_values`]. Earns
/// `weight * |matched| / |target|`.
#[inline]
pub fn score_set(target: &[String], candidate: &SetValue<'_>, weight: f64) -> CriterionScore {
    let values = match candidate {
        SetValue::Values(values) if !target.is_empty() => values,
        _ => return CriterionScore::none(),
    };

    let mut seen = HashSet::new();
    let matched: Vec<String> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| {
            let key = v.to_lowercase();
            target.contains(&key) && seen.insert(key)
        })
        .map(str::to_string)
        .collect();

    if matched.is_empty() {
        return CriterionScore::none();
    }

    CriterionScore {
        earned: weight * (matched.len() as f64 / target.len() as f64),
        matched,
    }
}

/// All-or-nothing credit for an enum-like value
///
/// `target` must come from [`normalize_values`].
#[inline]
pub fn score_single(target: &[String], candidate: &SingleValue<'_>, weight: f64) -> CriterionScore {
    match candidate {
        SingleValue::Value(value) => {
            let value = value.trim();
            if target.contains(&value.to_lowercase()) {
                CriterionScore {
                    earned: weight,
                    matched: vec![value.to_string()],
                }
            } else {
                CriterionScore::none()
            }
        }
        SingleValue::Absent => CriterionScore::none(),
    }
}

/// Threshold credit with a proximity band below the minimum
#[inline]
pub fn score_numeric(
    min: f64,
    candidate: NumericValue,
    weight: f64,
    proximity: &NumericProximity,
) -> CriterionScore {
    let value = match candidate {
        NumericValue::Value(value) => value,
        NumericValue::Absent => return CriterionScore::none(),
    };

    if value >= min {
        CriterionScore {
            earned: weight,
            matched: vec![format!("{} years (min {})", format_number(value), format_number(min))],
        }
    } else if value >= min - proximity.band && proximity.credit > 0.0 {
        CriterionScore {
            earned: weight * proximity.credit,
            matched: vec![format!(
                "{} years (within {} of min {})",
                format_number(value),
                format_number(proximity.band),
                format_number(min)
            )],
        }
    } else {
        CriterionScore::none()
    }
}

/// Round to one decimal place for display
#[inline]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
