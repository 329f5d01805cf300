use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActivityCategory {
    Transport,
    Food,
    Other,
}

/// One user-reported activity. Immutable once received; `value` is a
/// distance in km (TRANSPORT), a number of servings (FOOD) or a duration in
/// hours (OTHER).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivityInput {
    pub id: String,
    pub category: ActivityCategory,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub value: f64,
    /// ISO date string, e.g. 2025-01-28.
    pub date: String,
}

/// Estimate for a single activity, derived once and never mutated. `co2` is
/// kgCO2e rounded to 3 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivityResult {
    pub id: String,
    pub category: ActivityCategory,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub value: f64,
    pub co2: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalcCo2Response {
    pub activities: Vec<ActivityResult>,
    #[serde(rename = "totalCo2")]
    pub total_co2: f64,
}

/// Typed shape of one model-estimated activity entry, the validation gate
/// after field mapping.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ActivityEstimate {
    pub id: String,
    pub co2: f64,
    pub description: Option<String>,
}
