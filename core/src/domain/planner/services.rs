use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::application::Service;
use crate::domain::{
    common::entities::app_errors::CoreError,
    food_image::ports::ImageFetcher,
    llm::{
        output::{FieldSpec, map_fields, parse_lenient, try_coerce_f64},
        ports::LlmClient,
    },
    planner::{
        entities::{DailyPlannerEntry, DailyPlannerResponse, TravelAnalysisEntry, TravelPair},
        ports::DailyPlannerService,
        prompts::{PLANNER_PROMPT, build_user_prompt},
        schema::{ACTIVITY_ANALYSIS_FIELDS, TRAVEL_ANALYSIS_FIELDS, planner_response_schema},
    },
};

/// Pull a list field out of the parsed response. A missing or null list is
/// treated as empty; any other non-array value is a schema mismatch.
fn entry_list<'a>(parsed: &'a Value, key: &str) -> Result<&'a [Value], CoreError> {
    match parsed.get(key) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => {
            tracing::error!(key, %other, "planner response field is not a list");
            Err(CoreError::SchemaMismatch(format!("'{key}' is not a list")))
        }
    }
}

/// Map and validate every entry of a list independently. One bad entry fails
/// the whole request; partial results are never returned.
fn map_entries<T: DeserializeOwned>(
    entries: &[Value],
    specs: &[FieldSpec],
) -> Result<Vec<T>, CoreError> {
    entries
        .iter()
        .map(|entry| {
            let mapped = map_fields(entry, specs)?;
            serde_json::from_value(mapped).map_err(|err| {
                tracing::error!(%err, %entry, "planner entry validation failed");
                CoreError::SchemaMismatch(err.to_string())
            })
        })
        .collect()
}

/// Trust the model's own total when it coerces to a float, otherwise
/// recompute from the mapped entries.
fn summary_reduction(
    parsed: &Value,
    activities: &[DailyPlannerEntry],
    travel: &[TravelAnalysisEntry],
) -> f64 {
    if let Some(total) = parsed.get("summary_reduction").and_then(try_coerce_f64) {
        return total;
    }
    activities.iter().map(|entry| entry.reduced).sum::<f64>()
        + travel.iter().map(|entry| entry.reduced).sum::<f64>()
}

impl<LLM, IF> DailyPlannerService for Service<LLM, IF>
where
    LLM: LlmClient,
    IF: ImageFetcher,
{
    async fn analyze(
        &self,
        activities: Vec<String>,
        travel: Vec<TravelPair>,
    ) -> Result<DailyPlannerResponse, CoreError> {
        let prompt = format!("{}\n\n{}", PLANNER_PROMPT, build_user_prompt(&activities, &travel));

        let raw = self
            .text_client
            .generate_with_text(prompt, planner_response_schema())
            .await?;

        let parsed = parse_lenient(&raw)?;

        let analysis: Vec<DailyPlannerEntry> =
            map_entries(entry_list(&parsed, "analysis")?, ACTIVITY_ANALYSIS_FIELDS)?;
        let travel_analysis: Vec<TravelAnalysisEntry> =
            map_entries(entry_list(&parsed, "travel_analysis")?, TRAVEL_ANALYSIS_FIELDS)?;

        let summary_reduction = summary_reduction(&parsed, &analysis, &travel_analysis);

        Ok(DailyPlannerResponse {
            analysis,
            travel_analysis,
            summary_reduction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food_image::ports::MockImageFetcher;
    use crate::domain::llm::ports::MockLlmClient;

    fn service_returning(text: &str) -> Service<MockLlmClient, MockImageFetcher> {
        let mut text_client = MockLlmClient::new();
        let response = text.to_string();
        text_client
            .expect_generate_with_text()
            .returning(move |_, _| {
                let response = response.clone();
                Box::pin(async move { Ok(response) })
            });
        Service::new(
            text_client,
            MockLlmClient::new(),
            MockImageFetcher::new(),
            None,
        )
    }

    async fn analyze(text: &str) -> Result<DailyPlannerResponse, CoreError> {
        service_returning(text)
            .analyze(
                vec!["เดินทางด้วยรถยนต์ 5 กม.".to_string()],
                vec![TravelPair {
                    origin: "อารีย์".to_string(),
                    destination: "สยาม".to_string(),
                }],
            )
            .await
    }

    #[tokio::test]
    async fn test_well_formed_response() {
        let response = analyze(
            r#"{
                "analysis": [{"original": "drive 5 km", "current_co2": 1.0,
                              "alternative": "take the BTS", "alternative_co2": 0.4,
                              "reduced": 0.6}],
                "travel_analysis": [{"origin": "อารีย์", "destination": "สยาม",
                                     "distance_km": 6.0, "current_mode": "car",
                                     "current_co2": 1.2, "recommended_mode": "rail",
                                     "recommended_co2": 0.48, "reduced": 0.72}],
                "summary_reduction": 1.32
            }"#,
        )
        .await
        .unwrap();
        assert_eq!(response.analysis.len(), 1);
        assert_eq!(response.travel_analysis.len(), 1);
        assert_eq!(response.summary_reduction, 1.32);
    }

    #[tokio::test]
    async fn test_alias_keys_resolve() {
        let response = analyze(
            r#"{
                "analysis": [{"activity": "drive 5 km", "current_co2": 1.0,
                              "recommended": "take the BTS", "alternative_co2": 0.4,
                              "reduced": 0.6}],
                "travel_analysis": [{"origin": "a", "destination": "b",
                                     "distance_km": 6.0, "mode": "bus",
                                     "current_co2": 1.2, "recommended_co2": 0.48,
                                     "reduced": 0.72}],
                "summary_reduction": 1.32
            }"#,
        )
        .await
        .unwrap();
        assert_eq!(response.analysis[0].original, "drive 5 km");
        assert_eq!(response.analysis[0].alternative, "take the BTS");
        // "mode" feeds both mode fields when the specific keys are absent
        assert_eq!(response.travel_analysis[0].current_mode, "bus");
        assert_eq!(response.travel_analysis[0].recommended_mode, "bus");
    }

    #[tokio::test]
    async fn test_missing_mode_defaults_to_car() {
        let response = analyze(
            r#"{
                "analysis": [],
                "travel_analysis": [{"origin": "a", "destination": "b",
                                     "distance_km": 6.0, "current_co2": 1.2,
                                     "recommended_co2": 0.48, "reduced": 0.72}],
                "summary_reduction": 0.72
            }"#,
        )
        .await
        .unwrap();
        assert_eq!(response.travel_analysis[0].current_mode, "car");
        assert_eq!(response.travel_analysis[0].recommended_mode, "");
    }

    #[tokio::test]
    async fn test_summary_recomputed_when_missing() {
        let response = analyze(
            r#"{
                "analysis": [{"original": "x", "current_co2": 2.0, "alternative": "y",
                              "alternative_co2": 1.0, "reduced": 1.0},
                             {"original": "z", "current_co2": 3.0, "alternative": "w",
                              "alternative_co2": 1.0, "reduced": 2.0}],
                "travel_analysis": [{"origin": "a", "destination": "b",
                                     "distance_km": 1.0, "current_mode": "car",
                                     "current_co2": 1.0, "recommended_mode": "walk",
                                     "recommended_co2": 0.5, "reduced": 0.5}]
            }"#,
        )
        .await
        .unwrap();
        assert_eq!(response.summary_reduction, 3.5);
    }

    #[tokio::test]
    async fn test_summary_recomputed_on_uncoercible_total() {
        let response = analyze(
            r#"{
                "analysis": [{"original": "x", "current_co2": 2.0, "alternative": "y",
                              "alternative_co2": 1.0, "reduced": 1.0}],
                "travel_analysis": [],
                "summary_reduction": "a lot"
            }"#,
        )
        .await
        .unwrap();
        assert_eq!(response.summary_reduction, 1.0);
    }

    #[tokio::test]
    async fn test_missing_numeric_fields_default_to_zero() {
        let response = analyze(
            r#"{
                "analysis": [{"original": "x", "alternative": "y"}],
                "travel_analysis": [],
                "summary_reduction": 0
            }"#,
        )
        .await
        .unwrap();
        assert_eq!(response.analysis[0].current_co2, 0.0);
        assert_eq!(response.analysis[0].alternative_co2, 0.0);
        assert_eq!(response.analysis[0].reduced, 0.0);
    }

    #[tokio::test]
    async fn test_non_list_analysis_is_schema_mismatch() {
        let err = analyze(r#"{"analysis": {"original": "x"}, "travel_analysis": []}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::SchemaMismatch(_)));
    }

    #[tokio::test]
    async fn test_non_object_entry_is_schema_mismatch() {
        let err = analyze(r#"{"analysis": ["just a string"], "travel_analysis": []}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::SchemaMismatch(_)));
    }

    #[tokio::test]
    async fn test_fenced_planner_response_recovers() {
        let response =
            analyze("```json\n{\"analysis\": [], \"travel_analysis\": [], \"summary_reduction\": 0.0}\n```")
                .await
                .unwrap();
        assert_eq!(response.summary_reduction, 0.0);
    }
}
