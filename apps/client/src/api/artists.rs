use crate::error::ClientError;
use crate::http::client::ApiClient;
use crate::http::middleware::Part;
use crate::models::{ApiMessage, Artist, RegisterArtist};

/// Register an artist; the cover image rides as a multipart part.
pub async fn register(client: &ApiClient, artist: &RegisterArtist) -> Result<String, ClientError> {
    let mut parts = vec![Part::text("nombreArtistico", artist.stage_name.clone())];
    if let Some(description) = &artist.description {
        parts.push(Part::text("descripcion", description.clone()));
    }
    for member in &artist.members {
        parts.push(Part::text("miembros", member.clone()));
    }
    if let Some(cover) = &artist.cover {
        parts.push(Part::file(
            "imagenPortada",
            cover.filename.clone(),
            cover.content_type.clone(),
            cover.data.clone(),
        ));
    }

    let envelope: ApiMessage<String> = client
        .post_multipart("/api/artistas/registrar", parts)
        .await?
        .json()?;
    Ok(envelope.message)
}

pub async fn get(client: &ApiClient, artist_id: i64) -> Result<Artist, ClientError> {
    let envelope: ApiMessage<Artist> = client
        .get(&format!("/api/artistas/{artist_id}"))
        .await?
        .json()?;
    Ok(envelope.message)
}

pub async fn list(client: &ApiClient) -> Result<Vec<Artist>, ClientError> {
    let envelope: ApiMessage<Vec<Artist>> = client
        .get("/api/artistas/listar-artistas")
        .await?
        .json()?;
    Ok(envelope.message)
}

/// Stage-name prefix search.
pub async fn autocomplete(client: &ApiClient, prefix: &str) -> Result<Vec<Artist>, ClientError> {
    let envelope: ApiMessage<Vec<Artist>> = client
        .get_with(
            "/api/artistas/autocompletar",
            &[("prefijo", prefix.to_string())],
        )
        .await?
        .json()?;
    Ok(envelope.message)
}
