use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::user::User;
use crate::wellness;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct BmiResponse {
    pub bmi: f64,
    pub category: &'static str,
    pub advice: Vec<&'static str>,
}

pub async fn get_bmi(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<BmiResponse>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(auth_user.id)
        .fetch_optional(&state.db)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    let bmi = wellness::bmi(user.weight_kg, user.height_cm);
    let category = wellness::bmi_category(bmi, user.gender);

    Ok(Json(BmiResponse {
        bmi,
        category: category.label(),
        advice: category.advice().to_vec(),
    }))
}
