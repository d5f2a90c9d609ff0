use crate::auth::token::RawToken;
use crate::error::ClientError;
use crate::http::client::ApiClient;
use crate::models::{ApiMessage, Credentials, RegisterUser, TokenResponse};

/// Create a new user account. Public endpoint, no token required.
pub async fn register(client: &ApiClient, user: &RegisterUser) -> Result<String, ClientError> {
    let envelope: ApiMessage<String> = client
        .post_json("/api/auth/registro-usuario", user)
        .await?
        .json()?;
    Ok(envelope.message)
}

/// Authenticate and obtain a bearer token. Public endpoint.
///
/// The caller decides what to do with the token; the usual follow-up is
/// [`crate::nav::role_router::land`].
pub async fn login(client: &ApiClient, credentials: &Credentials) -> Result<RawToken, ClientError> {
    let envelope: ApiMessage<TokenResponse> = client
        .post_json("/api/auth/login", credentials)
        .await?
        .json()?;
    Ok(RawToken::new(envelope.message.token))
}
