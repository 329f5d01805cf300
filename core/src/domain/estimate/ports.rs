use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::estimate::entities::{ActivityInput, CalcCo2Response};

/// Service trait for the AI-backed CO2 estimate.
#[cfg_attr(test, mockall::automock)]
pub trait Co2EstimateService: Send + Sync {
    fn estimate(
        &self,
        activities: Vec<ActivityInput>,
    ) -> impl Future<Output = Result<CalcCo2Response, CoreError>> + Send;
}
