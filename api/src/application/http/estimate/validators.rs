use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use lowcarbon_core::domain::estimate::entities::ActivityInput;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CalcCo2Request {
    pub activities: Vec<ActivityInput>,
}
