use crate::models::Song;
use serde::Serialize;
use serde_json::{Map, Value};

/// Wire form of a song. The storage-assigned `_id` is rendered as its hex
/// string; it is never emitted as a non-string JSON value.
#[derive(Debug, Serialize)]
pub struct SongResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    pub id: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Song> for SongResponse {
    fn from(song: Song) -> Self {
        Self {
            record_id: song.record_id.map(|oid| oid.to_hex()),
            id: song.id,
            extra: song.extra,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SongListResponse {
    pub songs: Vec<SongResponse>,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: u64,
}
