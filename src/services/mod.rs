pub mod database;
pub mod metrics;

pub use database::SongDb;
pub use metrics::{init_metrics, render_metrics};
