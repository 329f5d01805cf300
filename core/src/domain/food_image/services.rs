use serde_json::{Map, Value};

use crate::application::Service;
use crate::domain::{
    common::entities::app_errors::CoreError,
    food_image::{
        entities::{FoodImageResponse, IdentifiedFood},
        ports::{FoodImageService, ImageFetcher},
        prompts::CLASSIFIER_PROMPT,
        schema::food_image_response_schema,
    },
    llm::{
        output::{coerce_f64, parse_lenient, resolve},
        ports::LlmClient,
    },
};

fn required_text(object: &Map<String, Value>, keys: &[&str]) -> Result<String, CoreError> {
    match resolve(object, keys) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => {
            tracing::error!(%other, ?keys, "field is not a string");
            Err(CoreError::SchemaMismatch(format!("'{}' is not a string", keys[0])))
        }
        None => Err(CoreError::SchemaMismatch(format!(
            "response missing '{}'",
            keys[0]
        ))),
    }
}

fn optional_text(object: &Map<String, Value>, keys: &[&str]) -> Result<Option<String>, CoreError> {
    match resolve(object, keys) {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(other) => {
            tracing::error!(%other, ?keys, "field is not a string");
            Err(CoreError::SchemaMismatch(format!("'{}' is not a string", keys[0])))
        }
    }
}

/// Tags usually arrive as a list of strings; a lone scalar is wrapped into a
/// single-element list rather than rejected.
fn map_tags(value: Option<&Value>) -> Result<Option<Vec<String>>, CoreError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(tag) => Ok(tag.clone()),
                other => Err(CoreError::SchemaMismatch(format!(
                    "tag '{other}' is not a string"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(Value::String(tag)) => Ok(Some(vec![tag.clone()])),
        Some(other) => Ok(Some(vec![other.to_string()])),
    }
}

impl<LLM, IF> FoodImageService for Service<LLM, IF>
where
    LLM: LlmClient,
    IF: ImageFetcher,
{
    async fn identify(&self, image_url: String) -> Result<FoodImageResponse, CoreError> {
        let image = self.image_fetcher.fetch(image_url).await?;

        let raw = self
            .vision_client
            .generate_with_image(
                CLASSIFIER_PROMPT.to_string(),
                image.data.to_vec(),
                image.mime_type,
                food_image_response_schema(),
            )
            .await?;

        let parsed = parse_lenient(&raw)?;
        let object = parsed
            .as_object()
            .ok_or_else(|| CoreError::SchemaMismatch("expected a JSON object".to_string()))?;

        let item = IdentifiedFood {
            name: required_text(object, &["name", "food"])?,
            tags: map_tags(object.get("tags"))?,
            confidence: coerce_f64(object.get("confidence")),
            explanation: optional_text(object, &["explanation", "reasoning"])?,
            source_model: self.vision_model.clone(),
        };

        Ok(FoodImageResponse { item })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food_image::entities::FetchedImage;
    use crate::domain::food_image::ports::MockImageFetcher;
    use crate::domain::llm::ports::MockLlmClient;

    fn fetcher() -> MockImageFetcher {
        let mut fetcher = MockImageFetcher::new();
        fetcher.expect_fetch().returning(|_| {
            Box::pin(async {
                Ok(FetchedImage {
                    data: bytes::Bytes::from_static(b"\xff\xd8\xff"),
                    mime_type: "image/jpeg".to_string(),
                })
            })
        });
        fetcher
    }

    fn service_returning(text: &str) -> Service<MockLlmClient, MockImageFetcher> {
        let mut vision_client = MockLlmClient::new();
        let response = text.to_string();
        vision_client
            .expect_generate_with_image()
            .returning(move |_, _, _, _| {
                let response = response.clone();
                Box::pin(async move { Ok(response) })
            });
        Service::new(
            MockLlmClient::new(),
            vision_client,
            fetcher(),
            Some("gemini-test".to_string()),
        )
    }

    #[tokio::test]
    async fn test_fenced_thai_response() {
        let service =
            service_returning("```json\n{\"name\":\"ข้าวผัด\",\"confidence\":0.9}\n```");
        let response = service.identify("http://img.example/1.jpg".to_string()).await.unwrap();
        assert_eq!(response.item.name, "ข้าวผัด");
        assert_eq!(response.item.confidence, 0.9);
        assert_eq!(response.item.tags, None);
        assert_eq!(response.item.source_model.as_deref(), Some("gemini-test"));
    }

    #[tokio::test]
    async fn test_food_alias_and_reasoning_alias() {
        let service = service_returning(
            r#"{"food":"ส้มตำ","confidence":"0.8","reasoning":"เห็นมะละกอเส้น","tags":["อาหารไทย","เผ็ด"]}"#,
        );
        let response = service.identify("http://img.example/2.jpg".to_string()).await.unwrap();
        assert_eq!(response.item.name, "ส้มตำ");
        assert_eq!(response.item.confidence, 0.8);
        assert_eq!(response.item.explanation.as_deref(), Some("เห็นมะละกอเส้น"));
        assert_eq!(
            response.item.tags,
            Some(vec!["อาหารไทย".to_string(), "เผ็ด".to_string()])
        );
    }

    #[tokio::test]
    async fn test_scalar_tags_wrapped() {
        let service = service_returning(r#"{"name":"pad thai","confidence":1,"tags":"noodles"}"#);
        let response = service.identify("http://img.example/3.jpg".to_string()).await.unwrap();
        assert_eq!(response.item.tags, Some(vec!["noodles".to_string()]));
    }

    #[tokio::test]
    async fn test_bad_confidence_defaults_to_zero() {
        let service = service_returning(r#"{"name":"pad thai","confidence":"very sure"}"#);
        let response = service.identify("http://img.example/4.jpg".to_string()).await.unwrap();
        assert_eq!(response.item.confidence, 0.0);
    }

    #[tokio::test]
    async fn test_missing_name_is_schema_mismatch() {
        let service = service_returning(r#"{"confidence":0.9}"#);
        let err = service
            .identify("http://img.example/5.jpg".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::SchemaMismatch(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_classification() {
        let service = service_returning("a bowl of rice");
        let err = service
            .identify("http://img.example/6.jpg".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidModelJson(_)));
    }

    #[tokio::test]
    async fn test_fetch_failure_short_circuits() {
        let mut bad_fetcher = MockImageFetcher::new();
        bad_fetcher
            .expect_fetch()
            .returning(|_| {
                Box::pin(async { Err(CoreError::InvalidImage("URL is not an image".to_string())) })
            });
        let service = Service::new(
            MockLlmClient::new(),
            MockLlmClient::new(),
            bad_fetcher,
            None,
        );
        let err = service
            .identify("http://img.example/nope".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidImage(_)));
    }
}
