use serde::{Deserialize, Serialize};

/// A directed edge in the follow graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    #[serde(rename = "idUsuarioPrincipal")]
    pub follower_id: i64,
    #[serde(rename = "idUsuarioObjetivo")]
    pub target_id: i64,
}

/// A user the backend suggests following.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSuggestion {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    pub username: String,
}
