use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::daily_planner::{__path_daily_planner, daily_planner};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(daily_planner))]
pub struct PlannerApiDoc;

pub fn planner_routes() -> Router<AppState> {
    Router::new().route("/ai/daily_planner", post(daily_planner))
}
