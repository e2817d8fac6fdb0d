pub mod songs;

pub use songs::{CountResponse, SongListResponse, SongResponse};
