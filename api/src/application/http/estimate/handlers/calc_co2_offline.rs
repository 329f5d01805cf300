use crate::application::http::{
    estimate::validators::CalcCo2Request,
    server::api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
};
use lowcarbon_core::domain::{
    common::round_kg,
    estimate::{entities::CalcCo2Response, rules::estimate_activity},
};

#[utoipa::path(
    post,
    path = "/ai/calc_co2/offline",
    tag = "ai",
    summary = "Estimate CO2 with fixed factors",
    description = "Deterministic rule-based estimate; no model call",
    responses(
        (status = 200, body = CalcCo2Response)
    ),
    request_body = CalcCo2Request
)]
pub async fn calc_co2_offline(
    ValidateJson(payload): ValidateJson<CalcCo2Request>,
) -> Result<Response<CalcCo2Response>, ApiError> {
    let activities: Vec<_> = payload.activities.iter().map(estimate_activity).collect();
    let total_co2 = round_kg(activities.iter().map(|result| result.co2).sum());

    Ok(Response::OK(CalcCo2Response {
        activities,
        total_co2,
    }))
}
