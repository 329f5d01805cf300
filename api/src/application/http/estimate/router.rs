use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    calc_co2::{__path_calc_co2, calc_co2},
    calc_co2_offline::{__path_calc_co2_offline, calc_co2_offline},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(calc_co2, calc_co2_offline))]
pub struct EstimateApiDoc;

pub fn estimate_routes() -> Router<AppState> {
    Router::new()
        .route("/ai/calc_co2", post(calc_co2))
        .route("/ai/calc_co2/offline", post(calc_co2_offline))
}
