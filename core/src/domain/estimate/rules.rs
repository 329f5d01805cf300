//! Deterministic rule-based estimator, the non-AI variant of `calc_co2`.
//! Factors are fixed averages; keyword matching is case-insensitive substring
//! search over the free-text activity label (English and Thai keywords).

use crate::domain::common::round_kg;
use crate::domain::estimate::entities::{ActivityCategory, ActivityInput, ActivityResult};

fn contains_any(label: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| label.contains(keyword))
}

/// kg CO2e per km, by transport mode keyword.
fn transport_co2(label: &str, distance_km: f64) -> f64 {
    let factor = if contains_any(label, &["bts", "mrt", "train"]) {
        0.08
    } else if label.contains("bus") {
        0.15
    } else if contains_any(label, &["taxi", "car", "motorbike", "bike"]) {
        0.20
    } else if contains_any(label, &["walk", "เดิน"]) {
        0.0
    } else {
        0.12
    };
    (distance_km * factor).max(0.0)
}

/// kg CO2e per serving, by food keyword.
fn food_co2(label: &str, servings: f64) -> f64 {
    let base = if contains_any(label, &["beef", "เนื้อวัว"]) {
        5.0
    } else if contains_any(label, &["pork", "หมู"]) {
        2.5
    } else if contains_any(label, &["chicken", "ไก่"]) {
        1.5
    } else if contains_any(label, &["fish", "ปลา"]) {
        1.0
    } else if contains_any(label, &["vegan", "ผัก", "vegetable"]) {
        0.5
    } else {
        1.0
    };
    (base * servings).max(0.0)
}

/// Other activities credit small reductions per 10 duration units; the
/// result may be negative.
fn other_co2(label: &str, duration: f64) -> f64 {
    let per_ten = if contains_any(
        label,
        &["run", "running", "cycle", "cycling", "gym", "yoga", "swim", "walking"],
    ) {
        -0.05
    } else if contains_any(label, &["clean", "housework", "ล้าง", "กวาด", "ถู"]) {
        -0.02
    } else {
        0.0
    };
    per_ten * (duration / 10.0)
}

pub fn estimate_activity(activity: &ActivityInput) -> ActivityResult {
    let label = activity.activity_type.to_lowercase();
    let co2 = match activity.category {
        ActivityCategory::Transport => transport_co2(&label, activity.value),
        ActivityCategory::Food => food_co2(&label, activity.value),
        ActivityCategory::Other => other_co2(&label, activity.value),
    };

    ActivityResult {
        id: activity.id.clone(),
        category: activity.category,
        activity_type: activity.activity_type.clone(),
        value: activity.value,
        co2: round_kg(co2),
        description: None,
    }
}
