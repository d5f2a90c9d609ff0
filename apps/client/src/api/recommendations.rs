use crate::error::ClientError;
use crate::http::client::ApiClient;
use crate::models::{ApiMessage, Playlist, Radio};

/// A play queue generated from a seed song.
pub async fn radio(client: &ApiClient, song_id: i64) -> Result<Radio, ClientError> {
    let envelope: ApiMessage<Radio> = client
        .get(&format!("/api/recomendacion/radio/{song_id}"))
        .await?
        .json()?;
    Ok(envelope.message)
}

/// A discovery playlist tailored to a user.
pub async fn discovery(client: &ApiClient, user_id: i64) -> Result<Playlist, ClientError> {
    let envelope: ApiMessage<Playlist> = client
        .get(&format!("/api/recomendacion/descubrimiento/{user_id}"))
        .await?
        .json()?;
    Ok(envelope.message)
}
