use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::jwt::{verify_token, TokenType};
use crate::error::AppError;
use crate::AppState;

/// Authenticated identity, injected into request extensions by
/// `require_auth`. Every per-user handler reads ownership from here.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    #[allow(dead_code)]
    pub username: String,
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;

    let token_data = verify_token(token, &state.config)?;

    if token_data.claims.token_type != TokenType::Access {
        return Err(AppError::Unauthorized);
    }

    let auth_user = AuthUser {
        id: token_data.claims.sub,
        username: token_data.claims.username,
    };

    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}
