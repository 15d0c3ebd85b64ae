use serde::{Deserialize, Serialize};
use crate::core::criteria::CriterionId;

/// Target criteria for a project (the ICP)
///
/// Every field is optional. An unset or empty field does not constrain
/// matching and is left out of the scoring pass entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetCriteria {
    pub languages: Option<Vec<String>>,
    pub role_types: Option<Vec<String>>,
    pub seniority: Option<Vec<String>>,
    pub frameworks: Option<Vec<String>>,
    pub min_experience: Option<f64>,
    pub tools: Option<Vec<String>>,
    pub cloud_platforms: Option<Vec<String>>,
    pub databases: Option<Vec<String>>,
    pub industries: Option<Vec<String>>,
    pub company_sizes: Option<Vec<String>>,
    pub team_sizes: Option<Vec<String>>,
    pub countries: Option<Vec<String>>,
    pub buying_influence: Option<Vec<String>>,
    pub open_source_activity: Option<Vec<String>>,
    pub operating_systems: Option<Vec<String>>,
    pub timezones: Option<Vec<String>>,
}

impl TargetCriteria {
    /// Acceptable values configured for a set or single-value criterion
    pub fn values(&self, id: CriterionId) -> Option<&[String]> {
        let field = match id {
            CriterionId::Languages => &self.languages,
            CriterionId::RoleTypes => &self.role_types,
            CriterionId::Seniority => &self.seniority,
            CriterionId::Frameworks => &self.frameworks,
            CriterionId::Tools => &self.tools,
            CriterionId::CloudPlatforms => &self.cloud_platforms,
            CriterionId::Databases => &self.databases,
            CriterionId::Industries => &self.industries,
            CriterionId::CompanySizes => &self.company_sizes,
            CriterionId::TeamSizes => &self.team_sizes,
            CriterionId::Countries => &self.countries,
            CriterionId::BuyingInfluence => &self.buying_influence,
            CriterionId::OpenSource => &self.open_source_activity,
            CriterionId::OperatingSystems => &self.operating_systems,
            CriterionId::Timezones => &self.timezones,
            CriterionId::MinExperience => return None,
        };
        field.as_deref()
    }

    /// Minimum configured for a numeric-threshold criterion
    pub fn minimum(&self, id: CriterionId) -> Option<f64> {
        match id {
            CriterionId::MinExperience => self.min_experience,
            _ => None,
        }
    }
}

/// Raw attribute value on a candidate profile
///
/// Profiles arrive from several import paths, so the same attribute may be
/// an array, a single string, a number, or something unusable. Anything
/// that does not fit the criterion kind reads as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    One(String),
    Many(Vec<String>),
    Other(serde_json::Value),
}

impl FieldValue {
    pub fn one(value: impl Into<String>) -> Self {
        Self::One(value.into())
    }

    pub fn many<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Many(values.into_iter().map(Into::into).collect())
    }

    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    pub fn as_set(&self) -> SetValue<'_> {
        match self {
            Self::Many(values) => SetValue::Values(values.iter().map(String::as_str).collect()),
            Self::One(value) => SetValue::Values(vec![value.as_str()]),
            Self::Number(_) | Self::Other(_) => SetValue::Absent,
        }
    }

    pub fn as_single(&self) -> SingleValue<'_> {
        match self {
            Self::One(value) => SingleValue::Value(value),
            Self::Many(values) if values.len() == 1 => SingleValue::Value(&values[0]),
            _ => SingleValue::Absent,
        }
    }

    pub fn as_numeric(&self) -> NumericValue {
        let value = match self {
            Self::Number(value) => Some(*value),
            Self::One(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };

        match value {
            Some(v) if v.is_finite() => NumericValue::Value(v),
            _ => NumericValue::Absent,
        }
    }
}

/// Candidate value read as a set
#[derive(Debug, Clone, PartialEq)]
pub enum SetValue<'a> {
    Absent,
    Values(Vec<&'a str>),
}

/// Candidate value read as a single enum-like value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SingleValue<'a> {
    Absent,
    Value(&'a str),
}

/// Candidate value read as a number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Absent,
    Value(f64),
}

/// Developer profile being evaluated against a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_type: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seniority: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frameworks: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_platforms: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub databases: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industries: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buying_influence: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_source_activity: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_systems: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<FieldValue>,
    /// Remaining profile attributes, passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CandidateProfile {
    /// Create a profile with no attributes set
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            languages: None,
            role_type: None,
            seniority: None,
            frameworks: None,
            years_experience: None,
            tools: None,
            cloud_platforms: None,
            databases: None,
            industries: None,
            company_size: None,
            team_size: None,
            country: None,
            buying_influence: None,
            open_source_activity: None,
            operating_systems: None,
            timezone: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Raw value of the candidate field a criterion reads
    pub fn field(&self, id: CriterionId) -> Option<&FieldValue> {
        let field = match id {
            CriterionId::Languages => &self.languages,
            CriterionId::RoleTypes => &self.role_type,
            CriterionId::Seniority => &self.seniority,
            CriterionId::Frameworks => &self.frameworks,
            CriterionId::MinExperience => &self.years_experience,
            CriterionId::Tools => &self.tools,
            CriterionId::CloudPlatforms => &self.cloud_platforms,
            CriterionId::Databases => &self.databases,
            CriterionId::Industries => &self.industries,
            CriterionId::CompanySizes => &self.company_size,
            CriterionId::TeamSizes => &self.team_size,
            CriterionId::Countries => &self.country,
            CriterionId::BuyingInfluence => &self.buying_influence,
            CriterionId::OpenSource => &self.open_source_activity,
            CriterionId::OperatingSystems => &self.operating_systems,
            CriterionId::Timezones => &self.timezone,
        };
        field.as_ref()
    }

    pub fn set_value(&self, id: CriterionId) -> SetValue<'_> {
        self.field(id).map_or(SetValue::Absent, FieldValue::as_set)
    }

    pub fn single_value(&self, id: CriterionId) -> SingleValue<'_> {
        self.field(id).map_or(SingleValue::Absent, FieldValue::as_single)
    }

    pub fn numeric_value(&self, id: CriterionId) -> NumericValue {
        self.field(id).map_or(NumericValue::Absent, FieldValue::as_numeric)
    }
}

/// One criterion's contribution to a candidate's score
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    pub criterion: &'static str,
    pub label: &'static str,
    pub matched: Vec<String>,
    /// Redistributed weight, one decimal
    pub weight: f64,
    /// Earned points, one decimal
    pub earned: f64,
}

/// Scored candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub candidate: CandidateProfile,
    pub score: u32,
    pub breakdown: Vec<BreakdownEntry>,
}

/// Partial credit for numeric thresholds
///
/// A candidate below the minimum but within `band` units of it earns
/// `credit` of the criterion weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericProximity {
    pub band: f64,
    pub credit: f64,
}

impl Default for NumericProximity {
    fn default() -> Self {
        Self {
            band: 2.0,
            credit: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_deserializes_mixed_field_shapes() {
        let json = serde_json::json!({
            "id": "dev-1",
            "name": "Ada",
            "languages": ["Rust", "Go"],
            "seniority": "senior",
            "years_experience": 6,
            "country": null,
            "tools": true
        });

        let candidate: CandidateProfile = serde_json::from_value(json).unwrap();

        assert_eq!(candidate.id, "dev-1");
        assert_eq!(candidate.set_value(CriterionId::Languages), SetValue::Values(vec!["Rust", "Go"]));
        assert_eq!(candidate.single_value(CriterionId::Seniority), SingleValue::Value("senior"));
        assert_eq!(candidate.numeric_value(CriterionId::MinExperience), NumericValue::Value(6.0));
        assert_eq!(candidate.single_value(CriterionId::Countries), SingleValue::Absent);
        assert_eq!(candidate.set_value(CriterionId::Tools), SetValue::Absent);
        assert_eq!(candidate.extra.get("name"), Some(&serde_json::json!("Ada")));
    }

    #[test]
    fn test_single_value_from_one_element_array() {
        assert_eq!(FieldValue::many(["lead"]).as_single(), SingleValue::Value("lead"));
        assert_eq!(FieldValue::many(["lead", "senior"]).as_single(), SingleValue::Absent);
    }

    #[test]
    fn test_numeric_from_text() {
        assert_eq!(FieldValue::one(" 4 ").as_numeric(), NumericValue::Value(4.0));
        assert_eq!(FieldValue::one("four").as_numeric(), NumericValue::Absent);
        assert_eq!(FieldValue::number(f64::NAN).as_numeric(), NumericValue::Absent);
    }

    #[test]
    fn test_target_values_by_kind() {
        let target = TargetCriteria {
            languages: Some(vec!["Rust".to_string()]),
            min_experience: Some(3.0),
            ..Default::default()
        };

        assert_eq!(target.values(CriterionId::Languages), Some(&["Rust".to_string()][..]));
        assert_eq!(target.values(CriterionId::MinExperience), None);
        assert_eq!(target.minimum(CriterionId::MinExperience), Some(3.0));
        assert_eq!(target.minimum(CriterionId::Languages), None);
    }
}
