pub const CLASSIFIER_PROMPT: &str = r#"You are a food image classifier. Identify the primary food in the photo.
Respond in Thai when possible (food name and explanation), but keep JSON keys in English.
Return ONLY JSON with:
{
  "name": "<main food name in Thai if known, otherwise English>",
  "tags": ["<keywords in Thai or English>"],
  "confidence": <0-1>,
  "explanation": "<short reasoning in Thai if possible>"
}"#;
