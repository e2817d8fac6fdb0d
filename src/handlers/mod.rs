pub mod health;
pub mod metrics;
pub mod songs;

pub use health::{health_check, readiness_check};
pub use metrics::metrics_endpoint;
pub use songs::{count_songs, create_song, delete_song, get_song, list_songs, update_song};
