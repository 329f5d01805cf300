//! Prompt construction for the CO2 estimator. Pure formatting: a fixed
//! instruction block plus the serialized request payload (serde_json keeps
//! non-ASCII text as-is, which matters for Thai activity labels).

use crate::domain::estimate::entities::ActivityInput;

pub const ESTIMATE_SYSTEM_PROMPT: &str = r#"You are a Carbon Footprint Estimator.
Users may input any free-text activity (especially FOOD and OTHER).
Input may be in English or Thai; handle both naturally.
Infer the meaning, calculate realistic carbon emissions using international
sources (IPCC, FAO, DEFRA, OurWorldInData), and return ONLY valid JSON.

Only the field `type` is free-text. All other fields (id, category, value, date)
must remain unchanged. Convert grams to kilograms when appropriate. If unknown,
infer the closest real-world activity and provide a reasonable estimate.

Value interpretation by category (do not change the numbers, just interpret):
- TRANSPORT: `value` = distance in kilometers.
- FOOD: `value` = number of servings/plates.
- OTHER: `value` = duration in hours.

Return:
{
  "activities": [
    {
      "id": "...",
      "co2": <kg_CO2e>,
      "description": "Short human-friendly summary (e.g., 'กินข้าวขาหมู 1 จาน ปล่อย CO2 1.2 kg')"
    }
  ],
  "totalCo2": <sum>
}

No explanations. JSON only."#;

pub fn build_user_prompt(activities: &[ActivityInput]) -> String {
    let payload = serde_json::json!({ "activities": activities });
    format!(
        "Input:\n{}\n\n\
         Value meaning reminder (do NOT modify numbers):\n\
         - TRANSPORT value = distance in kilometers\n\
         - FOOD value = number of servings/plates\n\
         - OTHER value = duration in hours\n\n\
         Return JSON only:\n\
         {{\n  \"activities\": [ {{ \"id\": \"...\", \"co2\": <kg>, \"description\": \"...\" }} ],\n  \"totalCo2\": <number>\n}}",
        payload
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::estimate::entities::ActivityCategory;

    #[test]
    fn test_user_prompt_preserves_thai_text() {
        let activities = vec![ActivityInput {
            id: "a1".to_string(),
            category: ActivityCategory::Food,
            activity_type: "ข้าวขาหมู".to_string(),
            value: 1.0,
            date: "2025-01-28".to_string(),
        }];
        let prompt = build_user_prompt(&activities);
        assert!(prompt.contains("ข้าวขาหมู"));
        assert!(!prompt.contains("\\u"));
    }
}
