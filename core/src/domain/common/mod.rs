pub mod entities;

/// Process-wide configuration, built once at startup and injected into the
/// service. Nothing reads environment variables after this point.
#[derive(Clone, Debug)]
pub struct LowCarbonConfig {
    pub llm: LlmConfig,
}

#[derive(Clone, Debug, Default)]
pub struct LlmConfig {
    /// Absence is reported per request as a server misconfiguration,
    /// never as a startup crash.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    /// No hardcoded default: operators must pick the vision model.
    pub gemini_vision_model: Option<String>,
}

/// Round a kgCO2e figure to the 3 decimals surfaced to callers.
pub fn round_kg(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_kg() {
        assert_eq!(round_kg(0.4000000001), 0.4);
        assert_eq!(round_kg(1.23456), 1.235);
        assert_eq!(round_kg(-0.0049), -0.005);
    }
}
