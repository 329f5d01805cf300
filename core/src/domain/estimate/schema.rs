use serde_json::json;

use crate::domain::llm::output::{FieldDefault, FieldSpec};

/// Field-resolution table for one model-estimated activity entry.
pub const ACTIVITY_ESTIMATE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        keys: &["id"],
        default: FieldDefault::Text(""),
    },
    FieldSpec {
        keys: &["co2"],
        default: FieldDefault::Number,
    },
    FieldSpec {
        keys: &["description"],
        default: FieldDefault::None,
    },
];

/// Response schema handed to the model's generation config.
pub fn estimate_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "activities": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "co2": { "type": "number" },
                        "description": { "type": "string" }
                    },
                    "required": ["id", "co2"]
                }
            },
            "totalCo2": { "type": "number" }
        },
        "required": ["activities", "totalCo2"]
    })
}
