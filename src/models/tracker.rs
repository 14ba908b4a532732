use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

// Log rows are append-only: no update or delete paths exist anywhere in
// the crate, so these types carry no mutable-field request variants.

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExerciseLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercise_type: String,
    pub duration_min: i32,
    pub intensity: Intensity,
    pub calories_burned: f64,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "exercise_intensity", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WaterLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount_liters: f64,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SleepLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub hours: f64,
    pub quality: Option<SleepQuality>,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "sleep_quality", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mood: String,
    pub note: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LogExerciseRequest {
    #[validate(length(min = 1, max = 100, message = "Exercise type must be 1-100 characters"))]
    pub exercise_type: String,

    #[validate(range(min = 1, max = 1440, message = "Duration must be 1-1440 minutes"))]
    pub duration_min: i32,

    pub intensity: Intensity,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LogWaterRequest {
    #[validate(range(min = 0.01, max = 20.0, message = "Amount must be 0.01-20 liters"))]
    pub amount_liters: f64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LogSleepRequest {
    #[validate(range(min = 0.1, max = 24.0, message = "Hours must be 0.1-24"))]
    pub hours: f64,

    pub quality: Option<SleepQuality>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LogMoodRequest {
    #[validate(length(min = 1, max = 50, message = "Mood must be 1-50 characters"))]
    pub mood: String,

    #[validate(length(max = 5000, message = "Note must be under 5000 characters"))]
    pub note: Option<String>,
}
