pub mod common;
pub mod estimate;
pub mod food_image;
pub mod llm;
pub mod planner;
