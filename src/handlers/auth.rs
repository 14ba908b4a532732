use axum::{extract::State, Extension, Json};
use chrono::{Duration, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::auth::{
    jwt::{create_token_pair, hash_token, verify_token, TokenPair, TokenType},
    middleware::AuthUser,
    password::{hash_password, verify_password},
};
use crate::error::{AppError, AppResult};
use crate::models::user::{LoginRequest, RefreshRequest, RegisterRequest, User, UserProfile};
use crate::AppState;

async fn store_refresh_token(
    db: &sqlx::PgPool,
    user_id: Uuid,
    raw_refresh_token: &str,
    ttl_secs: i64,
) -> AppResult<Uuid> {
    let token_hash = hash_token(raw_refresh_token);
    let expires_at = Utc::now() + Duration::seconds(ttl_secs);
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO refresh_tokens (id, user_id, token_hash, expires_at)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(&token_hash)
    .bind(expires_at)
    .execute(db)
    .await?;

    Ok(id)
}

/// Create a token pair AND persist the refresh token hash.
async fn issue_token_pair(
    db: &sqlx::PgPool,
    user_id: Uuid,
    username: &str,
    config: &crate::config::Config,
) -> AppResult<TokenPair> {
    let tokens = create_token_pair(user_id, username, config)?;
    store_refresh_token(db, user_id, &tokens.refresh_token, config.jwt_refresh_ttl_secs).await?;
    Ok(tokens)
}

/// Revoke all active refresh tokens for a user.
async fn revoke_all_user_tokens(db: &sqlx::PgPool, user_id: Uuid) -> AppResult<()> {
    sqlx::query(
        r#"
        UPDATE refresh_tokens
        SET revoked = true
        WHERE user_id = $1 AND revoked = false
        "#,
    )
    .bind(user_id)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> AppResult<Json<TokenPair>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let username_taken =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE username = $1")
            .bind(&body.username)
            .fetch_one(&state.db)
            .await?;
    if username_taken > 0 {
        return Err(AppError::Conflict("Username already exists".into()));
    }

    let email_taken = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&body.email)
        .fetch_one(&state.db)
        .await?;
    if email_taken > 0 {
        return Err(AppError::Conflict("Email already registered".into()));
    }

    let pwd_hash = hash_password(&body.password)?;

    let user_id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO users (id, username, email, password_hash, name, age, height_cm, weight_kg, gender)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(user_id)
    .bind(&body.username)
    .bind(&body.email)
    .bind(&pwd_hash)
    .bind(&body.name)
    .bind(body.age)
    .bind(body.height_cm)
    .bind(body.weight_kg)
    .bind(body.gender)
    .execute(&state.db)
    .await?;

    tracing::info!(user_id = %user_id, "New user registered");

    let tokens = issue_token_pair(&state.db, user_id, &body.username, &state.config).await?;
    Ok(Json(tokens))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<TokenPair>> {
    // A missing user and a wrong password produce the same response so
    // the endpoint does not disclose which field was wrong.
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
        .bind(&body.username)
        .fetch_optional(&state.db)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(&body.password, &user.password_hash)? {
        return Err(AppError::Unauthorized);
    }

    let tokens = issue_token_pair(&state.db, user.id, &user.username, &state.config).await?;
    Ok(Json(tokens))
}

pub async fn refresh(
    State(state): State<AppState>,
    Json(body): Json<RefreshRequest>,
) -> AppResult<Json<TokenPair>> {
    let token_data = verify_token(&body.refresh_token, &state.config)?;

    if token_data.claims.token_type != TokenType::Refresh {
        return Err(AppError::Unauthorized);
    }

    let token_hash = hash_token(&body.refresh_token);

    let stored = sqlx::query_as::<_, (Uuid, Uuid, bool)>(
        r#"
        SELECT id, user_id, revoked
        FROM refresh_tokens
        WHERE token_hash = $1
        "#,
    )
    .bind(&token_hash)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::Unauthorized)?;

    let (stored_id, stored_user_id, revoked) = stored;

    // A revoked token being replayed means the raw token leaked; drop
    // every session for the user.
    if revoked {
        tracing::warn!(
            user_id = %stored_user_id,
            token_id = %stored_id,
            "Refresh token reuse detected, revoking all tokens for user"
        );
        revoke_all_user_tokens(&state.db, stored_user_id).await?;
        return Err(AppError::Unauthorized);
    }

    if stored_user_id != token_data.claims.sub {
        return Err(AppError::Unauthorized);
    }

    // Single-use rotation
    sqlx::query("UPDATE refresh_tokens SET revoked = true WHERE id = $1")
        .bind(stored_id)
        .execute(&state.db)
        .await?;

    let tokens = issue_token_pair(
        &state.db,
        token_data.claims.sub,
        &token_data.claims.username,
        &state.config,
    )
    .await?;
    Ok(Json(tokens))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<serde_json::Value>> {
    revoke_all_user_tokens(&state.db, auth_user.id).await?;
    Ok(Json(serde_json::json!({ "message": "Logged out successfully" })))
}

pub async fn me(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<UserProfile>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(auth_user.id)
        .fetch_optional(&state.db)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    Ok(Json(user.into()))
}
