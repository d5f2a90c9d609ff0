use crate::error::ClientError;
use crate::http::client::ApiClient;
use crate::models::{Connection, User, UserSuggestion};

pub async fn follow(client: &ApiClient, connection: &Connection) -> Result<(), ClientError> {
    client.post_json("/api/social/seguir", connection).await?;
    Ok(())
}

pub async fn unfollow(client: &ApiClient, connection: &Connection) -> Result<(), ClientError> {
    client
        .post_json("/api/social/dejar-de-seguir", connection)
        .await?;
    Ok(())
}

/// Users the backend suggests this user follow.
pub async fn suggestions(
    client: &ApiClient,
    user_id: i64,
) -> Result<Vec<UserSuggestion>, ClientError> {
    client
        .get(&format!("/api/social/sugerencias/{user_id}"))
        .await?
        .json()
}

/// Users this user currently follows.
pub async fn following(client: &ApiClient, user_id: i64) -> Result<Vec<User>, ClientError> {
    client
        .get(&format!("/api/social/seguidos/{user_id}"))
        .await?
        .json()
}
