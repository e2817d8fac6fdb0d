use song_service::config::SongConfig;
use song_service::models::Song;
use song_service::services::SongDb;
use song_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: SongDb,
    pub db_name: String,
}

/// Seed used by most tests: three songs with ids 1..=3.
pub fn test_seed() -> Vec<Song> {
    serde_json::from_value(serde_json::json!([
        { "id": 1, "title": "Sound of Silence", "artist": "Simon & Garfunkel", "likes": 756 },
        { "id": 2, "title": "Take Five", "artist": "The Dave Brubeck Quartet", "likes": 433 },
        { "id": 3, "title": "Superstition", "artist": "Stevie Wonder", "likes": 721 }
    ]))
    .expect("test seed should deserialize")
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_seed(test_seed()).await
    }

    pub async fn spawn_with_seed(seed: Vec<Song>) -> Self {
        let db_name = format!("songs_test_{}", Uuid::new_v4().simple());
        Self::spawn_into(&db_name, seed).await
    }

    /// Rebuild the application against this app's database, re-running the
    /// startup reseed, as a process restart would.
    pub async fn respawn(&self) -> Self {
        Self::spawn_into(&self.db_name, test_seed()).await
    }

    async fn spawn_into(db_name: &str, seed: Vec<Song>) -> Self {
        std::env::set_var("MONGODB_SERVICE", "localhost");

        let mut config = SongConfig::load().expect("Failed to load configuration");
        config.server.port = 0; // Random port for testing
        config.mongodb.database = db_name.to_string();

        let app = Application::build(config, seed)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("http://127.0.0.1:{}/health", port);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name: db_name.to_string(),
        }
    }

    /// Drop the test database.
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
