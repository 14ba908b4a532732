use axum::{extract::State, Extension, Json};
use chrono::Utc;
use serde::Serialize;

use crate::aggregate::{sum_for_day, DASHBOARD_RECENT_WINDOW};
use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::tracker::{ExerciseLog, SleepLog, WaterLog};
use crate::models::user::{User, UserProfile};
use crate::wellness;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub profile: UserProfile,
    pub bmi: f64,
    pub daily_calories: f64,
    pub today_water_liters: f64,
    pub today_exercise_min: f64,
    pub today_sleep_hours: f64,
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<DashboardResponse>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(auth_user.id)
        .fetch_optional(&state.db)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    let bmi = wellness::bmi(user.weight_kg, user.height_cm);
    let daily_calories =
        wellness::daily_calorie_need(user.gender, user.weight_kg, user.height_cm, user.age);

    // Today's totals come from the bounded recent window, not a full
    // day scan: only the newest rows per type are considered.
    let recent_exercise = sqlx::query_as::<_, ExerciseLog>(
        r#"
        SELECT * FROM exercise_logs
        WHERE user_id = $1
        ORDER BY recorded_at DESC
        LIMIT $2
        "#,
    )
    .bind(auth_user.id)
    .bind(DASHBOARD_RECENT_WINDOW)
    .fetch_all(&state.db)
    .await?;

    let recent_water = sqlx::query_as::<_, WaterLog>(
        r#"
        SELECT * FROM water_logs
        WHERE user_id = $1
        ORDER BY recorded_at DESC
        LIMIT $2
        "#,
    )
    .bind(auth_user.id)
    .bind(DASHBOARD_RECENT_WINDOW)
    .fetch_all(&state.db)
    .await?;

    let recent_sleep = sqlx::query_as::<_, SleepLog>(
        r#"
        SELECT * FROM sleep_logs
        WHERE user_id = $1
        ORDER BY recorded_at DESC
        LIMIT $2
        "#,
    )
    .bind(auth_user.id)
    .bind(DASHBOARD_RECENT_WINDOW)
    .fetch_all(&state.db)
    .await?;

    let today = Utc::now().date_naive();
    let today_water_liters =
        sum_for_day(&recent_water, today, |l| l.recorded_at, |l| l.amount_liters);
    let today_exercise_min = sum_for_day(
        &recent_exercise,
        today,
        |l| l.recorded_at,
        |l| l.duration_min as f64,
    );
    let today_sleep_hours = sum_for_day(&recent_sleep, today, |l| l.recorded_at, |l| l.hours);

    Ok(Json(DashboardResponse {
        profile: user.into(),
        bmi,
        daily_calories,
        today_water_liters,
        today_exercise_min,
        today_sleep_hours,
    }))
}
