use clap::Parser;
use lowcarbon_core::domain::common::{LlmConfig, LowCarbonConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "lowcarbon-api", about = "Lowest Carbon AI Backend")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Comma-separated list of allowed CORS origins; "*" allows any.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',', default_value = "*")]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Absence surfaces per request as a 500, never as a startup crash.
    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    /// Deliberately no default: operators must choose the vision model.
    #[arg(long, env = "GEMINI_VISION_MODEL")]
    pub gemini_vision_model: Option<String>,
}

impl From<&Args> for LowCarbonConfig {
    fn from(args: &Args) -> Self {
        LowCarbonConfig {
            llm: LlmConfig {
                gemini_api_key: args.llm.gemini_api_key.clone(),
                gemini_model: args.llm.gemini_model.clone(),
                gemini_vision_model: args.llm.gemini_vision_model.clone(),
            },
        }
    }
}
