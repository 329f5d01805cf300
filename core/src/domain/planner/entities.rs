use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TravelPair {
    pub origin: String,
    pub destination: String,
}

/// One analyzed activity with its suggested low-carbon alternative.
/// `reduced` is expected, but not enforced, to equal
/// `current_co2 - alternative_co2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyPlannerEntry {
    pub original: String,
    pub current_co2: f64,
    pub alternative: String,
    pub alternative_co2: f64,
    pub reduced: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TravelAnalysisEntry {
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
    pub current_mode: String,
    pub current_co2: f64,
    pub recommended_mode: String,
    pub recommended_co2: f64,
    pub reduced: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyPlannerResponse {
    pub analysis: Vec<DailyPlannerEntry>,
    pub travel_analysis: Vec<TravelAnalysisEntry>,
    pub summary_reduction: f64,
}
