use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::aggregate::goal_completed;
use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::goal::{CreateGoalRequest, Goal, UpdateGoalProgressRequest};
use crate::AppState;

pub async fn create_goal(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateGoalRequest>,
) -> AppResult<Json<Goal>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let goal = sqlx::query_as::<_, Goal>(
        r#"
        INSERT INTO goals (id, user_id, goal_type, target, target_value, unit, deadline)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(&body.goal_type)
    .bind(&body.target)
    .bind(body.target_value)
    .bind(&body.unit)
    .bind(body.deadline)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(goal))
}

pub async fn list_goals(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<Goal>>> {
    let goals = sqlx::query_as::<_, Goal>(
        r#"
        SELECT * FROM goals
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(auth_user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(goals))
}

pub async fn update_goal_progress(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(goal_id): Path<Uuid>,
    Json(body): Json<UpdateGoalProgressRequest>,
) -> AppResult<Json<Goal>> {
    // Fetch by id alone so a missing goal and someone else's goal are
    // distinguishable: 404 for the former, 403 for the latter.
    let goal = sqlx::query_as::<_, Goal>("SELECT * FROM goals WHERE id = $1")
        .bind(goal_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or(AppError::NotFound("Goal not found".into()))?;

    if goal.user_id != auth_user.id {
        tracing::warn!(
            user_id = %auth_user.id,
            goal_id = %goal_id,
            owner_id = %goal.user_id,
            "Rejected goal update for non-owned goal"
        );
        return Err(AppError::Forbidden);
    }

    let completed = goal_completed(body.current_value, goal.target_value, goal.completed);

    let updated = sqlx::query_as::<_, Goal>(
        r#"
        UPDATE goals
        SET current_value = $2, completed = $3
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(goal_id)
    .bind(body.current_value)
    .bind(completed)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(updated))
}
