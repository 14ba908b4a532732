use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Point-in-time health snapshot. BMI and the calorie estimate are
/// derived from the profile at recording time and frozen on the row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HealthRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bmi: f64,
    pub temperature: Option<f64>,
    pub health_rating: Option<i32>,
    pub calories_consumed: Option<f64>,
    pub calories_needed: Option<f64>,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateHealthRecordRequest {
    #[validate(range(min = 25.0, max = 45.0, message = "Temperature must be 25-45 °C"))]
    pub temperature: Option<f64>,

    #[validate(range(min = 1, max = 10, message = "Health rating must be 1-10"))]
    pub health_rating: Option<i32>,

    #[validate(range(min = 0.0, max = 20000.0, message = "Calories consumed must be 0-20000"))]
    pub calories_consumed: Option<f64>,
}
