pub mod daily_planner;
