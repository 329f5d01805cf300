use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use tower_http::cors::{Any, CorsLayer};
use tracing::info_span;
use utoipa_swagger_ui::SwaggerUi;

use lowcarbon_core::application::create_service;
use lowcarbon_core::domain::common::LowCarbonConfig;

use crate::application::http::estimate::router::estimate_routes;
use crate::application::http::food_image::router::food_image_routes;
use crate::application::http::health::health_routes;
use crate::application::http::planner::router::planner_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

pub fn state(args: Arc<Args>) -> AppState {
    let config = LowCarbonConfig::from(args.as_ref());
    let service = create_service(config);
    AppState::new(args, service)
}

/// Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = if state
        .args
        .server
        .allowed_origins
        .iter()
        .any(|origin| origin == "*")
    {
        CorsLayer::new()
            .allow_methods(Any)
            .allow_origin(Any)
            .allow_headers(Any)
    } else {
        let allowed_origins = state
            .args
            .server
            .allowed_origins
            .iter()
            .map(|origin| HeaderValue::from_str(origin))
            .collect::<Result<Vec<HeaderValue>, _>>()?;
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_origin(allowed_origins)
            .allow_headers(Any)
    };

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::build()))
        .merge(estimate_routes())
        .merge(planner_routes())
        .merge(food_image_routes())
        .merge(health_routes())
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);

    Ok(router)
}
