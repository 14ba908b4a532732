pub mod auth;
pub mod bmi;
pub mod dashboard;
pub mod goals;
pub mod health;
pub mod progress;
pub mod records;
pub mod trackers;
