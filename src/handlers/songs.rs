use crate::dtos::{CountResponse, SongListResponse, SongResponse};
use crate::error::AppError;
use crate::models::Song;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use serde_json::{Map, Value};

pub async fn count_songs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let count = state
        .db
        .songs()
        .count_documents(doc! {}, None)
        .await
        .map_err(AppError::from)?;

    Ok(Json(CountResponse { count }))
}

pub async fn list_songs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut cursor = state
        .db
        .songs()
        .find(doc! {}, None)
        .await
        .map_err(AppError::from)?;

    let mut songs = Vec::new();
    while let Some(song) = cursor.try_next().await.map_err(AppError::from)? {
        songs.push(SongResponse::from(song));
    }

    Ok(Json(SongListResponse { songs }))
}

pub async fn get_song(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let song = state
        .db
        .songs()
        .find_one(doc! { "id": id }, None)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("song with id {} not found", id)))?;

    Ok(Json(SongResponse::from(song)))
}

pub async fn create_song(
    State(state): State<AppState>,
    Json(mut song): Json<Song>,
) -> Result<impl IntoResponse, AppError> {
    let songs = state.db.songs();

    // Existence pre-check only. There is no unique index on `id`, so two
    // concurrent creates with the same id can both pass this check.
    let existing = songs
        .find_one(doc! { "id": song.id }, None)
        .await
        .map_err(AppError::from)?;

    if existing.is_some() {
        return Err(AppError::AlreadyPresent(anyhow::anyhow!(
            "song with id {} already present",
            song.id
        )));
    }

    // Let the server assign `_id`, whatever the client sent.
    song.record_id = None;

    let result = songs.insert_one(&song, None).await.map_err(|e| {
        tracing::error!("Failed to insert song {}: {}", song.id, e);
        AppError::from(e)
    })?;
    song.record_id = result.inserted_id.as_object_id();

    tracing::info!(id = song.id, "Song created");

    Ok((StatusCode::CREATED, Json(SongResponse::from(song))))
}

pub async fn update_song(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, AppError> {
    let songs = state.db.songs();

    songs
        .find_one(doc! { "id": id }, None)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("song with id {} not found", id)))?;

    let changes = mongodb::bson::to_document(&body)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Invalid update body: {}", e)))?;

    // $set rejects an empty document; an empty body is a no-op merge.
    if !changes.is_empty() {
        songs
            .update_one(doc! { "id": id }, doc! { "$set": changes }, None)
            .await
            .map_err(AppError::from)?;
        tracing::info!(id = id, "Song updated");
    }

    let updated = songs
        .find_one(doc! { "id": id }, None)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("song with id {} not found", id)))?;

    Ok(Json(SongResponse::from(updated)))
}

pub async fn delete_song(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let result = state
        .db
        .songs()
        .delete_one(doc! { "id": id }, None)
        .await
        .map_err(AppError::from)?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound(anyhow::anyhow!(
            "song with id {} not found",
            id
        )));
    }

    tracing::info!(id = id, "Song deleted");

    Ok(StatusCode::NO_CONTENT)
}
