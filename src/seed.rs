//! Seed dataset loading.
//!
//! The seed file is the authoritative starting content of the songs
//! collection; every process lifetime begins by replacing the collection with
//! it. An unreadable or unparsable seed file is a startup failure.

use crate::error::AppError;
use crate::models::Song;
use std::path::Path;

pub fn load_seed(path: impl AsRef<Path>) -> Result<Vec<Song>, AppError> {
    let path = path.as_ref();

    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!(
            "Failed to read seed file {}: {}",
            path.display(),
            e
        ))
    })?;

    let songs: Vec<Song> = serde_json::from_str(&raw).map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!(
            "Failed to parse seed file {}: {}",
            path.display(),
            e
        ))
    })?;

    tracing::info!(path = %path.display(), count = songs.len(), "Loaded seed data");
    Ok(songs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_a_json_array_of_songs() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "title": "A"}}, {{"id": 2, "title": "B", "artist": "C"}}]"#
        )
        .unwrap();

        let songs = load_seed(file.path()).expect("seed should parse");
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].id, 1);
        assert_eq!(songs[1].extra["artist"], "C");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_seed("target/does-not-exist.json").is_err());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(load_seed(file.path()).is_err());
    }
}
