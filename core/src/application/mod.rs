use crate::domain::common::LowCarbonConfig;
use crate::domain::food_image::ports::ImageFetcher;
use crate::domain::llm::ports::LlmClient;
use crate::infrastructure::image_fetch::HttpImageFetcher;
use crate::infrastructure::llm::gemini_client::GeminiLlmClient;

/// Aggregate over the pipeline's ports. Feature service traits
/// (`Co2EstimateService`, `DailyPlannerService`, `FoodImageService`) are
/// implemented for it in each feature's `services.rs`.
#[derive(Debug, Clone)]
pub struct Service<LLM, IF>
where
    LLM: LlmClient,
    IF: ImageFetcher,
{
    pub(crate) text_client: LLM,
    pub(crate) vision_client: LLM,
    pub(crate) image_fetcher: IF,
    /// Echoed as `sourceModel` in food identification responses.
    pub(crate) vision_model: Option<String>,
}

impl<LLM, IF> Service<LLM, IF>
where
    LLM: LlmClient,
    IF: ImageFetcher,
{
    pub fn new(
        text_client: LLM,
        vision_client: LLM,
        image_fetcher: IF,
        vision_model: Option<String>,
    ) -> Self {
        Self {
            text_client,
            vision_client,
            image_fetcher,
            vision_model,
        }
    }
}

pub type LowCarbonService = Service<GeminiLlmClient, HttpImageFetcher>;

/// Wire the concrete adapters from the startup configuration. A missing API
/// key or vision model is not an error here; it surfaces per request as a
/// configuration error when the corresponding operation is called.
pub fn create_service(config: LowCarbonConfig) -> LowCarbonService {
    let text_client = GeminiLlmClient::new(
        config.llm.gemini_api_key.clone(),
        Some(config.llm.gemini_model.clone()),
    );
    let vision_client = GeminiLlmClient::new(
        config.llm.gemini_api_key,
        config.llm.gemini_vision_model.clone(),
    );

    Service::new(
        text_client,
        vision_client,
        HttpImageFetcher::new(),
        config.llm.gemini_vision_model,
    )
}
