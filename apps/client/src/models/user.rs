use serde::{Deserialize, Serialize};

/// Login form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUser {
    #[serde(rename = "nombre")]
    pub name: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    pub username: String,
    #[serde(rename = "fotoPerfilUrl", default)]
    pub profile_photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditUser {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditPassword {
    pub id: i64,
    #[serde(rename = "passwordAnterior")]
    pub previous_password: String,
    #[serde(rename = "nuevoPassword")]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    pub username: String,
}
