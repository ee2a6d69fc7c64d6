pub mod cache;
pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod models;
pub mod redis_client;
pub mod repository;
pub mod seating;

use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::task;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use config::{Config, LayoutSource};
use repository::{Arrangements, FileAuditoriumSeatingArrangements, PgAuditoriumSeatingArrangements};
use seating::SeatingArrangementRecommender;

// Shared state для всего приложения
pub struct AppState {
    pub config: Config,
    pub recommender: SeatingArrangementRecommender<Arrangements>,
}

impl AppState {
    /// Поднимает источник схем залов, выбранный конфигурацией.
    pub async fn new(config: Config) -> anyhow::Result<Arc<Self>> {
        let arrangements = match config.layouts.source {
            LayoutSource::Files => Arrangements::Files(FileAuditoriumSeatingArrangements::load(
                &config.layouts.dir,
            )?),
            LayoutSource::Postgres => {
                let db_config = config
                    .database
                    .as_ref()
                    .ok_or(error::ConfigError::Missing("DATABASE_URL"))?;
                let db = database::Database::connect(db_config).await?;
                info!("Database connected (pool size {})", db_config.pool_size);
                db.migrate().await?;
                info!("Migrations completed");

                let cache = match &config.redis {
                    Some(redis_config) => {
                        let redis = redis_client::RedisClient::connect(redis_config).await?;
                        info!(
                            "Redis connected, layouts cached for {}s",
                            redis_config.layout_ttl_seconds
                        );
                        Some(cache::CacheService::new(redis, redis_config.layout_ttl_seconds))
                    }
                    None => {
                        info!("REDIS_URL not set, layouts are read from the database");
                        None
                    }
                };

                let postgres = PgAuditoriumSeatingArrangements::new(db, cache);

                // Warmup cache в фоне
                let postgres_for_bg = postgres.clone();
                task::spawn(async move {
                    postgres_for_bg.warmup_cache().await;
                });

                Arrangements::Postgres(postgres)
            }
        };

        info!("Layout source: {:?}", config.layouts.source);
        Ok(Self::with_arrangements(config, arrangements))
    }

    pub fn with_arrangements(config: Config, arrangements: Arrangements) -> Arc<Self> {
        Arc::new(Self {
            config,
            recommender: SeatingArrangementRecommender::new(arrangements),
        })
    }
}

/// Главный роутер приложения.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Seat Suggestions API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
