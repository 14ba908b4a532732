use axum::{extract::State, Extension, Json};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use crate::aggregate::sum_for_day;
use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::tracker::{
    ExerciseLog, LogExerciseRequest, LogMoodRequest, LogSleepRequest, LogWaterRequest, MoodLog,
    SleepLog, WaterLog,
};
use crate::wellness;
use crate::AppState;

/// Default daily water intake target shown on the water page, in liters.
const WATER_TARGET_LITERS: f64 = 2.5;

pub async fn log_exercise(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<LogExerciseRequest>,
) -> AppResult<Json<ExerciseLog>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    // The burn estimate is frozen on the row at creation time; a later
    // change to the rate table must not rewrite history.
    let calories_burned = wellness::exercise_calories(body.intensity, body.duration_min);

    let log = sqlx::query_as::<_, ExerciseLog>(
        r#"
        INSERT INTO exercise_logs (id, user_id, exercise_type, duration_min, intensity, calories_burned)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(&body.exercise_type)
    .bind(body.duration_min)
    .bind(body.intensity)
    .bind(calories_burned)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(log))
}

pub async fn list_exercise(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<ExerciseLog>>> {
    let logs = sqlx::query_as::<_, ExerciseLog>(
        r#"
        SELECT * FROM exercise_logs
        WHERE user_id = $1
        ORDER BY recorded_at DESC
        "#,
    )
    .bind(auth_user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(logs))
}

pub async fn log_water(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<LogWaterRequest>,
) -> AppResult<Json<WaterLog>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let log = sqlx::query_as::<_, WaterLog>(
        r#"
        INSERT INTO water_logs (id, user_id, amount_liters)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(body.amount_liters)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(log))
}

#[derive(Debug, Serialize)]
pub struct WaterPageResponse {
    pub logs: Vec<WaterLog>,
    pub today_total_liters: f64,
    pub target_liters: f64,
}

pub async fn list_water(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<WaterPageResponse>> {
    let logs = sqlx::query_as::<_, WaterLog>(
        r#"
        SELECT * FROM water_logs
        WHERE user_id = $1
        ORDER BY recorded_at DESC
        "#,
    )
    .bind(auth_user.id)
    .fetch_all(&state.db)
    .await?;

    // Unlike the dashboard, the water page total covers every row logged
    // today, not a bounded recent window.
    let today = Utc::now().date_naive();
    let today_total_liters = sum_for_day(&logs, today, |l| l.recorded_at, |l| l.amount_liters);

    Ok(Json(WaterPageResponse {
        logs,
        today_total_liters,
        target_liters: WATER_TARGET_LITERS,
    }))
}

pub async fn log_sleep(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<LogSleepRequest>,
) -> AppResult<Json<SleepLog>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let log = sqlx::query_as::<_, SleepLog>(
        r#"
        INSERT INTO sleep_logs (id, user_id, hours, quality)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(body.hours)
    .bind(body.quality)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(log))
}

pub async fn list_sleep(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<SleepLog>>> {
    let logs = sqlx::query_as::<_, SleepLog>(
        r#"
        SELECT * FROM sleep_logs
        WHERE user_id = $1
        ORDER BY recorded_at DESC
        "#,
    )
    .bind(auth_user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(logs))
}

pub async fn log_mood(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<LogMoodRequest>,
) -> AppResult<Json<MoodLog>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let log = sqlx::query_as::<_, MoodLog>(
        r#"
        INSERT INTO mood_logs (id, user_id, mood, note)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(&body.mood)
    .bind(&body.note)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(log))
}

pub async fn list_mood(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<MoodLog>>> {
    let logs = sqlx::query_as::<_, MoodLog>(
        r#"
        SELECT * FROM mood_logs
        WHERE user_id = $1
        ORDER BY recorded_at DESC
        "#,
    )
    .bind(auth_user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(logs))
}
