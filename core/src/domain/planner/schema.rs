use serde_json::json;

use crate::domain::llm::output::{FieldDefault, FieldSpec};

/// Field-resolution table for one activity analysis entry.
pub const ACTIVITY_ANALYSIS_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        keys: &["original", "activity"],
        default: FieldDefault::Text(""),
    },
    FieldSpec {
        keys: &["current_co2"],
        default: FieldDefault::Number,
    },
    FieldSpec {
        keys: &["alternative", "recommended"],
        default: FieldDefault::Text(""),
    },
    FieldSpec {
        keys: &["alternative_co2"],
        default: FieldDefault::Number,
    },
    FieldSpec {
        keys: &["reduced"],
        default: FieldDefault::Number,
    },
];

/// Field-resolution table for one travel analysis entry.
pub const TRAVEL_ANALYSIS_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        keys: &["origin"],
        default: FieldDefault::Text(""),
    },
    FieldSpec {
        keys: &["destination"],
        default: FieldDefault::Text(""),
    },
    FieldSpec {
        keys: &["distance_km"],
        default: FieldDefault::Number,
    },
    FieldSpec {
        keys: &["current_mode", "mode"],
        default: FieldDefault::Text("car"),
    },
    FieldSpec {
        keys: &["current_co2"],
        default: FieldDefault::Number,
    },
    FieldSpec {
        keys: &["recommended_mode", "mode"],
        default: FieldDefault::Text(""),
    },
    FieldSpec {
        keys: &["recommended_co2"],
        default: FieldDefault::Number,
    },
    FieldSpec {
        keys: &["reduced"],
        default: FieldDefault::Number,
    },
];

pub fn planner_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "analysis": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "original": { "type": "string" },
                        "current_co2": { "type": "number" },
                        "alternative": { "type": "string" },
                        "alternative_co2": { "type": "number" },
                        "reduced": { "type": "number" }
                    },
                    "required": [
                        "original", "current_co2", "alternative",
                        "alternative_co2", "reduced"
                    ]
                }
            },
            "travel_analysis": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "origin": { "type": "string" },
                        "destination": { "type": "string" },
                        "distance_km": { "type": "number" },
                        "current_mode": { "type": "string" },
                        "current_co2": { "type": "number" },
                        "recommended_mode": { "type": "string" },
                        "recommended_co2": { "type": "number" },
                        "reduced": { "type": "number" }
                    },
                    "required": [
                        "origin", "destination", "distance_km", "current_mode",
                        "current_co2", "recommended_mode", "recommended_co2", "reduced"
                    ]
                }
            },
            "summary_reduction": { "type": "number" }
        },
        "required": ["analysis", "travel_analysis", "summary_reduction"]
    })
}
