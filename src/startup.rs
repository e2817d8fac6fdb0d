use crate::config::SongConfig;
use crate::error::AppError;
use crate::handlers;
use crate::middleware::track_requests;
use crate::models::Song;
use crate::services::SongDb;
use axum::{middleware::from_fn, routing::get, Router};
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: SongConfig,
    pub db: SongDb,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    /// Connect to storage, replace the songs collection with the seed
    /// content, and bind the HTTP server. Any failure here is fatal to the
    /// caller; the service never starts against a broken connection.
    pub async fn build(config: SongConfig, seed: Vec<Song>) -> Result<Self, AppError> {
        let db = SongDb::connect(&config.mongodb.connection_uri(), &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        db.initialize_indexes().await.map_err(|e| {
            tracing::error!("Failed to initialize database indexes: {}", e);
            e
        })?;

        db.reseed(&seed).await.map_err(|e| {
            tracing::error!("Failed to seed songs collection: {}", e);
            e
        })?;

        let state = AppState {
            config: config.clone(),
            db: db.clone(),
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/metrics", get(handlers::metrics_endpoint))
            .route("/count", get(handlers::count_songs))
            .route(
                "/song",
                get(handlers::list_songs).post(handlers::create_song),
            )
            .route(
                "/song/:id",
                get(handlers::get_song)
                    .put(handlers::update_song)
                    .delete(handlers::delete_song),
            )
            .layer(from_fn(track_requests))
            .layer(TraceLayer::new_for_http())
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &SongDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
