use std::collections::HashMap;

use serde_json::Value;

use crate::application::Service;
use crate::domain::{
    common::{entities::app_errors::CoreError, round_kg},
    estimate::{
        entities::{ActivityEstimate, ActivityInput, ActivityResult, CalcCo2Response},
        ports::Co2EstimateService,
        prompts::{ESTIMATE_SYSTEM_PROMPT, build_user_prompt},
        schema::{ACTIVITY_ESTIMATE_FIELDS, estimate_response_schema},
    },
    food_image::ports::ImageFetcher,
    llm::{
        output::{map_fields, parse_lenient, try_coerce_f64},
        ports::LlmClient,
    },
};

impl<LLM, IF> Co2EstimateService for Service<LLM, IF>
where
    LLM: LlmClient,
    IF: ImageFetcher,
{
    async fn estimate(
        &self,
        activities: Vec<ActivityInput>,
    ) -> Result<CalcCo2Response, CoreError> {
        let prompt = format!(
            "{}\n\n{}",
            ESTIMATE_SYSTEM_PROMPT,
            build_user_prompt(&activities)
        );

        let raw = self
            .text_client
            .generate_with_text(prompt, estimate_response_schema())
            .await?;

        let parsed = parse_lenient(&raw)?;

        let entries = parsed
            .get("activities")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                tracing::error!(%parsed, "model response missing 'activities' array");
                CoreError::SchemaMismatch("missing 'activities' array".to_string())
            })?;

        let mut estimates: HashMap<String, ActivityEstimate> = HashMap::new();
        for entry in entries {
            let mapped = map_fields(entry, ACTIVITY_ESTIMATE_FIELDS)?;
            let estimate: ActivityEstimate = serde_json::from_value(mapped).map_err(|err| {
                tracing::error!(%err, %entry, "activity estimate validation failed");
                CoreError::SchemaMismatch(err.to_string())
            })?;
            estimates.insert(estimate.id.clone(), estimate);
        }

        // Results keep the request order and echo the immutable input fields.
        let results = activities
            .iter()
            .map(|input| {
                let estimate = estimates.get(&input.id).ok_or_else(|| {
                    CoreError::SchemaMismatch(format!("no estimate for activity '{}'", input.id))
                })?;
                Ok(ActivityResult {
                    id: input.id.clone(),
                    category: input.category,
                    activity_type: input.activity_type.clone(),
                    value: input.value,
                    co2: round_kg(estimate.co2),
                    description: estimate.description.clone(),
                })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        // The model's own total is trusted when it coerces to a float;
        // otherwise recompute from the per-entry estimates.
        let total_co2 = parsed
            .get("totalCo2")
            .and_then(try_coerce_f64)
            .unwrap_or_else(|| round_kg(results.iter().map(|r| r.co2).sum()));

        Ok(CalcCo2Response {
            activities: results,
            total_co2,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Service;
    use crate::domain::estimate::entities::ActivityCategory;
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
            Some("gemini-test".to_string()),
        )
    }

    fn inputs() -> Vec<ActivityInput> {
        vec![
            ActivityInput {
                id: "a1".to_string(),
                category: ActivityCategory::Transport,
                activity_type: "BTS".to_string(),
                value: 5.0,
                date: "2025-01-28".to_string(),
            },
            ActivityInput {
                id: "a2".to_string(),
                category: ActivityCategory::Food,
                activity_type: "ข้าวขาหมู".to_string(),
                value: 1.0,
                date: "2025-01-28".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn test_valid_response_is_mapped() {
        let service = service_returning(
            r#"{"activities":[{"id":"a1","co2":0.4,"description":"BTS 5 km"},
                {"id":"a2","co2":1.2}],"totalCo2":1.6}"#,
        );
        let response = service.estimate(inputs()).await.unwrap();
        assert_eq!(response.total_co2, 1.6);
        assert_eq!(response.activities.len(), 2);
        assert_eq!(response.activities[0].co2, 0.4);
        assert_eq!(
            response.activities[0].description.as_deref(),
            Some("BTS 5 km")
        );
        assert_eq!(response.activities[1].category, ActivityCategory::Food);
        assert_eq!(response.activities[1].description, None);
    }

    #[tokio::test]
    async fn test_fenced_response_recovers() {
        let service = service_returning(
            "```json\n{\"activities\":[{\"id\":\"a1\",\"co2\":0.4},{\"id\":\"a2\",\"co2\":1.2}],\"totalCo2\":1.6}\n```",
        );
        let response = service.estimate(inputs()).await.unwrap();
        assert_eq!(response.total_co2, 1.6);
    }

    #[tokio::test]
    async fn test_missing_total_recomputed_from_entries() {
        let service = service_returning(
            r#"{"activities":[{"id":"a1","co2":0.4004},{"id":"a2","co2":1.2}]}"#,
        );
        let response = service.estimate(inputs()).await.unwrap();
        // per-entry values are rounded before summing
        assert_eq!(response.activities[0].co2, 0.4);
        assert_eq!(response.total_co2, 1.6);
    }

    #[tokio::test]
    async fn test_string_co2_coerces() {
        let service = service_returning(
            r#"{"activities":[{"id":"a1","co2":"0.4"},{"id":"a2","co2":"n/a"}],"totalCo2":"0.4"}"#,
        );
        let response = service.estimate(inputs()).await.unwrap();
        assert_eq!(response.activities[0].co2, 0.4);
        assert_eq!(response.activities[1].co2, 0.0);
        assert_eq!(response.total_co2, 0.4);
    }

    #[tokio::test]
    async fn test_unparsable_text_is_invalid_json() {
        let service = service_returning("I cannot answer that.");
        let err = service.estimate(inputs()).await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidModelJson(_)));
    }

    #[tokio::test]
    async fn test_missing_activity_is_schema_mismatch() {
        let service =
            service_returning(r#"{"activities":[{"id":"a1","co2":0.4}],"totalCo2":0.4}"#);
        let err = service.estimate(inputs()).await.unwrap_err();
        assert!(matches!(err, CoreError::SchemaMismatch(_)));
    }

    #[tokio::test]
    async fn test_missing_activities_array_is_schema_mismatch() {
        let service = service_returning(r#"{"totalCo2":1.6}"#);
        let err = service.estimate(inputs()).await.unwrap_err();
        assert!(matches!(err, CoreError::SchemaMismatch(_)));
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let mut text_client = MockLlmClient::new();
        text_client
            .expect_generate_with_text()
            .returning(|_, _| {
                Box::pin(async { Err(CoreError::ModelUnavailable("quota".to_string())) })
            });
        let service = Service::new(
            text_client,
            MockLlmClient::new(),
            MockImageFetcher::new(),
            None,
        );
        let err = service.estimate(inputs()).await.unwrap_err();
        assert!(matches!(err, CoreError::ModelUnavailable(_)));
    }
}
