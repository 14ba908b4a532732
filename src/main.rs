use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod aggregate;
mod auth;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod wellness;

use auth::rate_limit::RateLimitState;
use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<Config>,
    pub rate_limiter: RateLimitState,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitalog_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env());

    let db = db::create_pool(&config.database_url).await;

    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations applied");

    let state = AppState {
        db,
        config: config.clone(),
        rate_limiter: RateLimitState::new(),
    };

    // Credential endpoints get per-IP rate limiting
    let auth_routes = Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/refresh", post(handlers::auth::refresh))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::rate_limit::rate_limit_auth,
        ));

    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .merge(auth_routes);

    let protected_routes = Router::new()
        .route("/api/me", get(handlers::auth::me))
        .route("/api/dashboard", get(handlers::dashboard::get_dashboard))
        .route("/api/bmi", get(handlers::bmi::get_bmi))
        // Trackers
        .route("/api/exercise", get(handlers::trackers::list_exercise))
        .route("/api/exercise", post(handlers::trackers::log_exercise))
        .route("/api/water", get(handlers::trackers::list_water))
        .route("/api/water", post(handlers::trackers::log_water))
        .route("/api/sleep", get(handlers::trackers::list_sleep))
        .route("/api/sleep", post(handlers::trackers::log_sleep))
        .route("/api/mood", get(handlers::trackers::list_mood))
        .route("/api/mood", post(handlers::trackers::log_mood))
        // Health snapshots
        .route("/api/records", get(handlers::records::list_records))
        .route("/api/records", post(handlers::records::create_record))
        // Goals
        .route("/api/goals", get(handlers::goals::list_goals))
        .route("/api/goals", post(handlers::goals::create_goal))
        .route(
            "/api/goals/:id/progress",
            put(handlers::goals::update_goal_progress),
        )
        // Progress charts
        .route("/api/progress", get(handlers::progress::get_progress))
        // Auth actions requiring a session
        .route("/api/auth/logout", post(handlers::auth::logout))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    let allowed_origins: Vec<axum::http::HeaderValue> = {
        let mut origins = vec![config
            .frontend_url
            .parse::<axum::http::HeaderValue>()
            .unwrap()];
        // In dev, also allow LAN access (e.g. testing from another device)
        if let Ok(extra) = std::env::var("CORS_EXTRA_ORIGINS") {
            for o in extra.split(',') {
                if let Ok(hv) = o.trim().parse::<axum::http::HeaderValue>() {
                    origins.push(hv);
                }
            }
        }
        origins
    };
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true);

    let app = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    // Connect info provides the client IP for rate limiting
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .unwrap();
}
