use crate::error::AppError;
use crate::models::Song;
use mongodb::{
    bson::doc, options::IndexOptions, Client as MongoClient, Collection, Database, IndexModel,
};

#[derive(Clone)]
pub struct SongDb {
    client: MongoClient,
    db: Database,
}

impl SongDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        // Lookup index only. `id` uniqueness is enforced by the create
        // handler's pre-check, not by the database.
        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().name("id_lookup".to_string()).build())
            .build();

        self.songs().create_index(id_index, None).await.map_err(|e| {
            tracing::error!("Failed to create id index on songs collection: {}", e);
            AppError::from(e)
        })?;
        tracing::info!("Created index on songs.id");

        Ok(())
    }

    /// Replace the entire collection with the given records. Destructive:
    /// anything written since the previous seed is dropped with it.
    pub async fn reseed(&self, songs: &[Song]) -> Result<(), AppError> {
        let collection = self.songs();

        collection.drop(None).await.map_err(|e| {
            tracing::error!("Failed to drop songs collection: {}", e);
            AppError::from(e)
        })?;

        if !songs.is_empty() {
            collection.insert_many(songs, None).await.map_err(|e| {
                tracing::error!("Failed to insert seed records: {}", e);
                AppError::from(e)
            })?;
        }

        tracing::info!(count = songs.len(), "Seeded songs collection");
        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn songs(&self) -> Collection<Song> {
        self.db.collection("songs")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
