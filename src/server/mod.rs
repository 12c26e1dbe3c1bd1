//! Server initialization and routing

use crate::api;
use crate::config::Config;
use crate::jwt::JwtManager;
use crate::migration;
use crate::repository::{user::UserRepositoryImpl, zone::ZoneRepositoryImpl};
use crate::service::{AuthService, UserService, ZoneService};
use anyhow::Result;
use axum::{
    extract::FromRef,
    routing::{get, patch, post},
    Router,
};
use sqlx::{mysql::MySqlPoolOptions, MySqlPool};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db_pool: MySqlPool,
    pub auth_service: Arc<AuthService<UserRepositoryImpl>>,
    pub user_service: Arc<UserService<UserRepositoryImpl>>,
    pub zone_service: Arc<ZoneService<UserRepositoryImpl, ZoneRepositoryImpl>>,
    pub jwt_manager: JwtManager,
}

impl FromRef<AppState> for JwtManager {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_manager.clone()
    }
}

impl AppState {
    pub fn new(config: Config, db_pool: MySqlPool) -> Self {
        let jwt_manager = JwtManager::new(config.jwt.clone());

        let user_repo = Arc::new(UserRepositoryImpl::new(db_pool.clone()));
        let zone_repo = Arc::new(ZoneRepositoryImpl::new(db_pool.clone()));

        Self {
            config: Arc::new(config),
            db_pool,
            auth_service: Arc::new(AuthService::new(user_repo.clone(), jwt_manager.clone())),
            user_service: Arc::new(UserService::new(user_repo.clone())),
            zone_service: Arc::new(ZoneService::new(user_repo, zone_repo)),
            jwt_manager,
        }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(api::health::health))
        .route("/ready", get(api::health::ready))
        .route("/auth/register", post(api::auth::register))
        .route("/auth/login", post(api::auth::login))
        .route("/users/create", post(api::user::create))
        .route("/users/farmers", get(api::user::farmers))
        .route("/ZoneData/create", post(api::zone::create))
        .route("/ZoneData", get(api::zone::list))
        .route("/ZoneData/{id}", get(api::zone::get).delete(api::zone::delete))
        .route("/ZoneData/update/{id}", patch(api::zone::update))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server
pub async fn run(config: Config) -> Result<()> {
    migration::run_migrations(&config).await?;

    let db_pool = MySqlPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await?;

    let addr = config.http_addr();
    let state = AppState::new(config, db_pool);
    let app = build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("HTTP server started on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
