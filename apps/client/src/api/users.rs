use crate::error::ClientError;
use crate::http::client::ApiClient;
use crate::models::{ApiMessage, EditPassword, EditUser, User};

pub async fn update(client: &ApiClient, user: &EditUser) -> Result<(), ClientError> {
    client.put_json("/api/usuario/editar", user).await?;
    Ok(())
}

pub async fn change_password(
    client: &ApiClient,
    change: &EditPassword,
) -> Result<(), ClientError> {
    client.put_json("/api/usuario/editar-password", change).await?;
    Ok(())
}

pub async fn delete(client: &ApiClient, user_id: i64) -> Result<(), ClientError> {
    client
        .delete(&format!("/api/usuario/eliminar/{user_id}"))
        .await?;
    Ok(())
}

pub async fn get(client: &ApiClient, user_id: i64) -> Result<User, ClientError> {
    client.get(&format!("/api/usuario/{user_id}")).await?.json()
}

pub async fn by_username(client: &ApiClient, username: &str) -> Result<User, ClientError> {
    client
        .get(&format!("/api/usuario/username/{username}"))
        .await?
        .json()
}

/// Every registered user; restricted to administrators server-side.
pub async fn list(client: &ApiClient) -> Result<Vec<User>, ClientError> {
    let envelope: ApiMessage<Vec<User>> = client.get("/api/usuario/listar").await?.json()?;
    Ok(envelope.message)
}
