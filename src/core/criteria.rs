use serde::Serialize;
use std::collections::HashSet;
use crate::error::MatchError;

/// Identifies one scored dimension of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriterionId {
    Languages,
    RoleTypes,
    Seniority,
    Frameworks,
    MinExperience,
    Tools,
    CloudPlatforms,
    Databases,
    Industries,
    CompanySizes,
    TeamSizes,
    Countries,
    BuyingInfluence,
    OpenSource,
    OperatingSystems,
    Timezones,
}

/// Comparison semantics for a criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CriterionKind {
    /// Fractional overlap between target and candidate values
    Set,
    /// Candidate's single value must be one of the target values
    SingleValue,
    /// Candidate's number must reach the target minimum
    NumericThreshold,
}

/// Static definition of a criterion
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionDef {
    #[serde(skip)]
    pub id: CriterionId,
    #[serde(rename = "field")]
    pub target_field: &'static str,
    pub candidate_field: &'static str,
    pub label: &'static str,
    pub weight: u32,
    pub kind: CriterionKind,
}

/// Sum of all criterion weights
pub const TOTAL_WEIGHT: u32 = 100;

const fn def(
    id: CriterionId,
    target_field: &'static str,
    candidate_field: &'static str,
    label: &'static str,
    weight: u32,
    kind: CriterionKind,
) -> CriterionDef {
    CriterionDef { id, target_field, candidate_field, label, weight, kind }
}

/// Criterion table, core criteria first
pub static CRITERIA: [CriterionDef; 16] = [
    def(CriterionId::Languages, "languages", "languages", "Languages", 15, CriterionKind::Set),
    def(CriterionId::RoleTypes, "role_types", "role_type", "Role Type", 10, CriterionKind::SingleValue),
    def(CriterionId::Seniority, "seniority", "seniority", "Seniority", 10, CriterionKind::SingleValue),
    def(CriterionId::Frameworks, "frameworks", "frameworks", "Frameworks", 8, CriterionKind::Set),
    def(CriterionId::MinExperience, "min_experience", "years_experience", "Min Experience", 8, CriterionKind::NumericThreshold),
    def(CriterionId::Tools, "tools", "tools", "Tools", 6, CriterionKind::Set),
    def(CriterionId::CloudPlatforms, "cloud_platforms", "cloud_platforms", "Cloud Platforms", 6, CriterionKind::Set),
    def(CriterionId::Databases, "databases", "databases", "Databases", 5, CriterionKind::Set),
    def(CriterionId::Industries, "industries", "industries", "Industries", 5, CriterionKind::Set),
    def(CriterionId::CompanySizes, "company_sizes", "company_size", "Company Size", 5, CriterionKind::SingleValue),
    def(CriterionId::TeamSizes, "team_sizes", "team_size", "Team Size", 4, CriterionKind::SingleValue),
    def(CriterionId::Countries, "countries", "country", "Country", 4, CriterionKind::SingleValue),
    def(CriterionId::BuyingInfluence, "buying_influence", "buying_influence", "Buying Influence", 4, CriterionKind::SingleValue),
    def(CriterionId::OpenSource, "open_source_activity", "open_source_activity", "Open Source Activity", 4, CriterionKind::SingleValue),
    def(CriterionId::OperatingSystems, "operating_systems", "operating_systems", "Operating Systems", 3, CriterionKind::Set),
    def(CriterionId::Timezones, "timezones", "timezone", "Timezone", 3, CriterionKind::SingleValue),
];

/// Look up a criterion definition
pub fn criterion(id: CriterionId) -> &'static CriterionDef {
    CRITERIA
        .iter()
        .find(|c| c.id == id)
        .unwrap_or(&CRITERIA[0])
}

/// Check that a criterion table is usable for percentage scoring
///
/// Weights must be positive and sum to [`TOTAL_WEIGHT`]; ids and field
/// names must be unique.
pub fn validate_table(table: &[CriterionDef]) -> Result<(), MatchError> {
    let mut ids = HashSet::new();
    let mut target_fields = HashSet::new();
    let mut candidate_fields = HashSet::new();

    for c in table {
        if c.weight == 0 {
            return Err(MatchError::InvalidCriteriaTable(format!(
                "criterion '{}' has zero weight",
                c.target_field
            )));
        }
        if !ids.insert(c.id)
            || !target_fields.insert(c.target_field)
            || !candidate_fields.insert(c.candidate_field)
        {
            return Err(MatchError::InvalidCriteriaTable(format!(
                "criterion '{}' is defined more than once",
                c.target_field
            )));
        }
    }

    let total: u32 = table.iter().map(|c| c.weight).sum();
    if total != TOTAL_WEIGHT {
        return Err(MatchError::InvalidCriteriaTable(format!(
            "weights sum to {}, expected {}",
            total, TOTAL_WEIGHT
        )));
    }

    Ok(())
}
