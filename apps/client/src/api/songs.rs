use bytes::Bytes;

use crate::error::ClientError;
use crate::http::client::ApiClient;
use crate::http::middleware::Part;
use crate::models::{ApiMessage, EditSong, MusicGenre, RegisterSong, Song, SongMetrics};

/// Register a song with its audio file and cover image as multipart parts.
pub async fn register(client: &ApiClient, song: &RegisterSong) -> Result<(), ClientError> {
    let mut parts = vec![
        Part::text("titulo", song.title.clone()),
        Part::text("genero", song.genre.as_str()),
        Part::text("anioLanzamiento", song.release_year.clone()),
        Part::text("artistaId", song.artist_id.to_string()),
    ];
    if let Some(audio) = &song.audio {
        parts.push(Part::file(
            "archivoAudio",
            audio.filename.clone(),
            audio.content_type.clone(),
            audio.data.clone(),
        ));
    }
    if let Some(cover) = &song.cover {
        parts.push(Part::file(
            "portada",
            cover.filename.clone(),
            cover.content_type.clone(),
            cover.data.clone(),
        ));
    }

    client.post_multipart("/api/cancion/registrar", parts).await?;
    Ok(())
}

pub async fn update(client: &ApiClient, song: &EditSong) -> Result<(), ClientError> {
    client.put_json("/api/cancion/actualizar", song).await?;
    Ok(())
}

pub async fn delete(client: &ApiClient, song_id: i64) -> Result<(), ClientError> {
    client
        .delete(&format!("/api/cancion/eliminar/{song_id}"))
        .await?;
    Ok(())
}

pub async fn get(client: &ApiClient, song_id: i64) -> Result<Song, ClientError> {
    client.get(&format!("/api/cancion/{song_id}")).await?.json()
}

pub async fn list(client: &ApiClient) -> Result<Vec<Song>, ClientError> {
    let envelope: ApiMessage<Vec<Song>> = client.get("/api/cancion/listar").await?.json()?;
    Ok(envelope.message)
}

/// Songs a user has marked as favorites.
pub async fn favorites(client: &ApiClient, user_id: i64) -> Result<Vec<Song>, ClientError> {
    let envelope: ApiMessage<Vec<Song>> = client
        .get(&format!("/api/cancion/favoritas/{user_id}"))
        .await?
        .json()?;
    Ok(envelope.message)
}

pub async fn add_favorite(
    client: &ApiClient,
    user_id: i64,
    song_id: i64,
) -> Result<(), ClientError> {
    client
        .post_empty(&format!("/api/cancion/favoritas/{user_id}/agregar/{song_id}"))
        .await?;
    Ok(())
}

pub async fn remove_favorite(
    client: &ApiClient,
    user_id: i64,
    song_id: i64,
) -> Result<(), ClientError> {
    client
        .delete(&format!("/api/cancion/favoritas/{user_id}/quitar/{song_id}"))
        .await?;
    Ok(())
}

/// Catalog statistics for the admin metrics view.
pub async fn metrics(client: &ApiClient) -> Result<SongMetrics, ClientError> {
    client.get("/api/cancion/metricas").await?.json()
}

/// Title prefix search.
pub async fn autocomplete(client: &ApiClient, prefix: &str) -> Result<Vec<Song>, ClientError> {
    client
        .get_with(
            "/api/cancion/autocompletar",
            &[("prefijo", prefix.to_string())],
        )
        .await?
        .json()
}

/// Filtered catalog search; every criterion is optional.
pub async fn filter(
    client: &ApiClient,
    artist: Option<&str>,
    genre: Option<MusicGenre>,
    release_year: Option<i32>,
) -> Result<Vec<Song>, ClientError> {
    let mut params = Vec::new();
    if let Some(artist) = artist {
        params.push(("artista", artist.to_string()));
    }
    if let Some(genre) = genre {
        params.push(("genero", genre.as_str().to_string()));
    }
    if let Some(year) = release_year {
        params.push(("anioLanzamiento", year.to_string()));
    }

    client.get_with("/api/cancion/filtrar", &params).await?.json()
}

/// PDF report of a user's favorites, as raw bytes.
pub async fn favorites_report(client: &ApiClient, user_id: i64) -> Result<Bytes, ClientError> {
    client
        .get_bytes(&format!("/api/cancion/reporte-favoritos/{user_id}"))
        .await
}

/// PDF report over the whole catalog, as raw bytes.
pub async fn general_report(client: &ApiClient) -> Result<Bytes, ClientError> {
    client.get_bytes("/api/cancion/reporte-general").await
}
