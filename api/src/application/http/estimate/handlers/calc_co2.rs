use axum::extract::State;

use crate::application::http::{
    estimate::validators::CalcCo2Request,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use lowcarbon_core::domain::estimate::{entities::CalcCo2Response, ports::Co2EstimateService};

#[utoipa::path(
    post,
    path = "/ai/calc_co2",
    tag = "ai",
    summary = "Estimate CO2 for activities",
    description = "Estimates kgCO2e per activity using the generative model",
    responses(
        (status = 200, body = CalcCo2Response),
        (status = 500, description = "Model API key not configured"),
        (status = 502, description = "Model unavailable or returned an unusable response")
    ),
    request_body = CalcCo2Request
)]
pub async fn calc_co2(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CalcCo2Request>,
) -> Result<Response<CalcCo2Response>, ApiError> {
    let response = state
        .service
        .estimate(payload.activities)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(response))
}
