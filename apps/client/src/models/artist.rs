use serde::{Deserialize, Serialize};

use crate::models::song::FileUpload;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    #[serde(rename = "nombreArtistico")]
    pub stage_name: String,
}

/// Payload for registering an artist; the cover rides as a multipart part.
#[derive(Debug, Clone)]
pub struct RegisterArtist {
    pub stage_name: String,
    pub description: Option<String>,
    pub members: Vec<String>,
    pub cover: Option<FileUpload>,
}
