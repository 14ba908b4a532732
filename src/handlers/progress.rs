use axum::{extract::State, Extension, Json};
use chrono::NaiveDate;
use serde::Serialize;

use crate::auth::middleware::AuthUser;
use crate::error::AppResult;
use crate::AppState;

/// Distinct dates per series shown on the progress page.
const PROGRESS_DATE_LIMIT: i64 = 30;

#[derive(Debug, Serialize)]
pub struct ExercisePoint {
    pub date: NaiveDate,
    pub total_duration_min: i64,
}

#[derive(Debug, Serialize)]
pub struct WaterPoint {
    pub date: NaiveDate,
    pub total_liters: f64,
}

#[derive(Debug, Serialize)]
pub struct SleepPoint {
    pub date: NaiveDate,
    pub avg_hours: f64,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub exercise: Vec<ExercisePoint>,
    pub water: Vec<WaterPoint>,
    pub sleep: Vec<SleepPoint>,
}

/// Full-history aggregates grouped by calendar date, newest date first,
/// capped at the 30 most recent distinct dates per series. Dates with no
/// logs are simply absent — no gap filling.
pub async fn get_progress(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<ProgressResponse>> {
    let exercise_rows = sqlx::query_as::<_, (NaiveDate, i64)>(
        r#"
        SELECT recorded_at::date AS date, COALESCE(SUM(duration_min), 0)::bigint AS total
        FROM exercise_logs
        WHERE user_id = $1
        GROUP BY recorded_at::date
        ORDER BY recorded_at::date DESC
        LIMIT $2
        "#,
    )
    .bind(auth_user.id)
    .bind(PROGRESS_DATE_LIMIT)
    .fetch_all(&state.db)
    .await?;

    let water_rows = sqlx::query_as::<_, (NaiveDate, f64)>(
        r#"
        SELECT recorded_at::date AS date, COALESCE(SUM(amount_liters), 0) AS total
        FROM water_logs
        WHERE user_id = $1
        GROUP BY recorded_at::date
        ORDER BY recorded_at::date DESC
        LIMIT $2
        "#,
    )
    .bind(auth_user.id)
    .bind(PROGRESS_DATE_LIMIT)
    .fetch_all(&state.db)
    .await?;

    let sleep_rows = sqlx::query_as::<_, (NaiveDate, f64)>(
        r#"
        SELECT recorded_at::date AS date, COALESCE(AVG(hours), 0) AS avg_hours
        FROM sleep_logs
        WHERE user_id = $1
        GROUP BY recorded_at::date
        ORDER BY recorded_at::date DESC
        LIMIT $2
        "#,
    )
    .bind(auth_user.id)
    .bind(PROGRESS_DATE_LIMIT)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(ProgressResponse {
        exercise: exercise_rows
            .into_iter()
            .map(|(date, total_duration_min)| ExercisePoint {
                date,
                total_duration_min,
            })
            .collect(),
        water: water_rows
            .into_iter()
            .map(|(date, total_liters)| WaterPoint { date, total_liters })
            .collect(),
        sleep: sleep_rows
            .into_iter()
            .map(|(date, avg_hours)| SleepPoint { date, avg_hours })
            .collect(),
    }))
}
