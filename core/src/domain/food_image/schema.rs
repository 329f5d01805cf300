use serde_json::json;

pub fn food_image_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "tags": {
                "type": "array",
                "items": { "type": "string" }
            },
            "confidence": { "type": "number" },
            "explanation": { "type": "string" }
        },
        "required": ["name", "confidence"]
    })
}
