use axum::{extract::State, Extension, Json};
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::health_record::{CreateHealthRecordRequest, HealthRecord};
use crate::models::user::User;
use crate::wellness;
use crate::AppState;

pub async fn create_record(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateHealthRecordRequest>,
) -> AppResult<Json<HealthRecord>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(auth_user.id)
        .fetch_optional(&state.db)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    // Snapshot the derived values as of now; later profile edits (none
    // exist today) would not rewrite past records.
    let bmi = wellness::bmi(user.weight_kg, user.height_cm);
    let calories_needed =
        wellness::daily_calorie_need(user.gender, user.weight_kg, user.height_cm, user.age);

    let record = sqlx::query_as::<_, HealthRecord>(
        r#"
        INSERT INTO health_records
            (id, user_id, bmi, temperature, health_rating, calories_consumed, calories_needed)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(bmi)
    .bind(body.temperature)
    .bind(body.health_rating)
    .bind(body.calories_consumed)
    .bind(calories_needed)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(record))
}

pub async fn list_records(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<HealthRecord>>> {
    let records = sqlx::query_as::<_, HealthRecord>(
        r#"
        SELECT * FROM health_records
        WHERE user_id = $1
        ORDER BY recorded_at DESC
        "#,
    )
    .bind(auth_user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(records))
}
