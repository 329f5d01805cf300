use axum::extract::State;

use crate::application::http::{
    planner::validators::DailyPlannerRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use lowcarbon_core::domain::planner::{
    entities::DailyPlannerResponse, ports::DailyPlannerService,
};

#[utoipa::path(
    post,
    path = "/ai/daily_planner",
    tag = "ai",
    summary = "Analyze daily activities for low-carbon alternatives",
    description = "Per-activity and per-trip alternatives with estimated CO2 reductions",
    responses(
        (status = 200, body = DailyPlannerResponse),
        (status = 500, description = "Model API key not configured"),
        (status = 502, description = "Model unavailable or returned an unusable response")
    ),
    request_body = DailyPlannerRequest
)]
pub async fn daily_planner(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DailyPlannerRequest>,
) -> Result<Response<DailyPlannerResponse>, ApiError> {
    let response = state
        .service
        .analyze(payload.activities, payload.travel)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(response))
}
