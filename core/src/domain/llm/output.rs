//! Recovery of structured data from model output text.
//!
//! Models regularly wrap JSON in markdown code fences despite being told not
//! to, rename fields, and emit numbers as strings. This module parses the raw
//! text first (the cheap path for well-behaved models), retries once after
//! fence stripping, and resolves fields through per-schema alias tables with
//! permissive numeric coercion.

use serde_json::{Map, Value};

use crate::domain::common::entities::app_errors::CoreError;

/// Strip markdown code-fence markers from model output. Text that does not
/// start with a fence is returned trimmed and otherwise untouched.
pub fn strip_code_fence(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }
    trimmed
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Two-attempt JSON parse: raw text first, fence-stripped text second.
/// Both failing is terminal; the last parse error is kept for the logs.
pub fn parse_lenient(raw: &str) -> Result<Value, CoreError> {
    if let Ok(value) = serde_json::from_str(raw) {
        return Ok(value);
    }
    let cleaned = strip_code_fence(raw);
    serde_json::from_str(&cleaned).map_err(|err| {
        tracing::error!(%err, raw, %cleaned, "model returned invalid JSON");
        CoreError::InvalidModelJson(err.to_string())
    })
}

/// Look up the first key in `keys` whose value is present and usable.
/// Null and empty-string values fall through to the next alias.
pub fn resolve<'a>(entry: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| entry.get(*key))
        .find(|value| !is_blank(value))
}

fn is_blank(value: &Value) -> bool {
    matches!(value, Value::Null) || value.as_str().is_some_and(str::is_empty)
}

/// Permissive float coercion. Numbers pass through, numeric strings parse,
/// booleans become 1.0/0.0; anything else is `None`.
pub fn try_coerce_f64(value: &Value) -> Option<f64> {
    let coerced = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => return None,
    };
    coerced.is_finite().then_some(coerced)
}

/// Coercion with the zero fallback the pipeline guarantees: every numeric
/// field surfaced to a caller is a finite float, never a type error.
pub fn coerce_f64(value: Option<&Value>) -> f64 {
    value.and_then(try_coerce_f64).unwrap_or(0.0)
}

/// Fallback applied when none of a field's keys resolve.
#[derive(Debug, Clone, Copy)]
pub enum FieldDefault {
    /// Substitute a fixed string.
    Text(&'static str),
    /// Coerce to a float, defaulting to 0.0.
    Number,
    /// Leave the field null (optional fields).
    None,
}

/// One row of a field-resolution table: the primary output key followed by
/// accepted aliases, plus the fallback when nothing resolves.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub keys: &'static [&'static str],
    pub default: FieldDefault,
}

/// Apply a field-resolution table to one parsed entry, producing an object
/// keyed by each spec's primary key. Numeric fields are always routed through
/// [`coerce_f64`]; text and optional fields keep the resolved value as-is so
/// that type errors surface at validation, not here.
pub fn map_fields(entry: &Value, specs: &[FieldSpec]) -> Result<Value, CoreError> {
    let object = entry
        .as_object()
        .ok_or_else(|| CoreError::SchemaMismatch("expected a JSON object".to_string()))?;

    let mut mapped = Map::new();
    for spec in specs {
        let resolved = resolve(object, spec.keys);
        let value = match spec.default {
            FieldDefault::Number => Value::from(coerce_f64(resolved)),
            FieldDefault::Text(fallback) => resolved
                .cloned()
                .unwrap_or_else(|| Value::String(fallback.to_string())),
            FieldDefault::None => resolved.cloned().unwrap_or(Value::Null),
        };
        mapped.insert(spec.keys[0].to_string(), value);
    }
    Ok(Value::Object(mapped))
}
