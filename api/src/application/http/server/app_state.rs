use std::sync::Arc;

use lowcarbon_core::application::LowCarbonService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<LowCarbonService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: LowCarbonService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
