use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::planner::entities::{DailyPlannerResponse, TravelPair};

/// Service trait for the daily-planner analysis.
#[cfg_attr(test, mockall::automock)]
pub trait DailyPlannerService: Send + Sync {
    fn analyze(
        &self,
        activities: Vec<String>,
        travel: Vec<TravelPair>,
    ) -> impl Future<Output = Result<DailyPlannerResponse, CoreError>> + Send;
}
