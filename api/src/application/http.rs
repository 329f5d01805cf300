pub mod estimate;
pub mod food_image;
pub mod health;
pub mod planner;
pub mod server;
