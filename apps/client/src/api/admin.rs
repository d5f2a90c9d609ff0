use crate::error::ClientError;
use crate::http::client::ApiClient;
use crate::models::{Admin, ApiMessage};

pub async fn get(client: &ApiClient, admin_id: i64) -> Result<Admin, ClientError> {
    let envelope: ApiMessage<Admin> = client
        .get(&format!("/api/admin/{admin_id}"))
        .await?
        .json()?;
    Ok(envelope.message)
}
