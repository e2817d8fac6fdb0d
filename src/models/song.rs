use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A song record. `id` is the application-assigned key the API operates on;
/// `record_id` is the storage-assigned `_id`. Everything else (title, artist,
/// ...) is carried as-is with no fixed schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub record_id: Option<ObjectId>,
    pub id: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
