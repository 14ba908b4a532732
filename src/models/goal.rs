use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Goal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub goal_type: String,
    pub target: String,
    pub current_value: f64,
    pub target_value: f64,
    pub unit: String,
    pub deadline: Option<NaiveDate>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGoalRequest {
    #[validate(length(min = 1, max = 100, message = "Goal type must be 1-100 characters"))]
    pub goal_type: String,

    #[validate(length(min = 1, max = 100, message = "Target must be 1-100 characters"))]
    pub target: String,

    #[validate(range(min = 0.0, message = "Target value must be non-negative"))]
    pub target_value: f64,

    #[validate(length(min = 1, max = 20, message = "Unit must be 1-20 characters"))]
    pub unit: String,

    /// ISO date (YYYY-MM-DD); a malformed value fails deserialization.
    pub deadline: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGoalProgressRequest {
    pub current_value: f64,
}
