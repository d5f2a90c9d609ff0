use std::collections::HashMap;
use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MusicGenre {
    Rock,
    Bachata,
    Salsa,
    Merengue,
    Vallenato,
    SalsaChoke,
    Regueton,
    Trap,
    Rap,
    Metal,
    Regue,
    Electronica,
}

impl MusicGenre {
    /// Wire spelling, as sent in form fields and query parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            MusicGenre::Rock => "ROCK",
            MusicGenre::Bachata => "BACHATA",
            MusicGenre::Salsa => "SALSA",
            MusicGenre::Merengue => "MERENGUE",
            MusicGenre::Vallenato => "VALLENATO",
            MusicGenre::SalsaChoke => "SALSA_CHOKE",
            MusicGenre::Regueton => "REGUETON",
            MusicGenre::Trap => "TRAP",
            MusicGenre::Rap => "RAP",
            MusicGenre::Metal => "METAL",
            MusicGenre::Regue => "REGUE",
            MusicGenre::Electronica => "ELECTRONICA",
        }
    }
}

impl fmt::Display for MusicGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "generoMusical")]
    pub genre: MusicGenre,
    /// ISO date string, `YYYY-MM-DD`
    #[serde(rename = "fechaLanzamiento")]
    pub release_date: String,
    #[serde(rename = "urlCancion")]
    pub song_url: String,
    #[serde(rename = "urlPortada")]
    pub cover_url: String,
    #[serde(rename = "duracion")]
    pub duration: String,
    #[serde(rename = "idArtista")]
    pub artist_id: i64,
}

/// An in-memory file destined for a multipart upload.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Payload for registering a song; files ride along as multipart parts.
#[derive(Debug, Clone)]
pub struct RegisterSong {
    pub title: String,
    pub genre: MusicGenre,
    pub release_year: String,
    pub artist_id: i64,
    pub audio: Option<FileUpload>,
    pub cover: Option<FileUpload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditSong {
    pub id: i64,
    #[serde(rename = "titulo", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "fechaLanzamiento", skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

/// Admin metrics payload; the backend sends a loosely-typed map, so every
/// field is defaulted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SongMetrics {
    #[serde(rename = "totalCanciones", default)]
    pub total_songs: i64,
    #[serde(rename = "artistaTop", default)]
    pub top_artist: Option<String>,
    #[serde(rename = "cancionesPorGenero", default)]
    pub songs_per_genre: HashMap<String, i64>,
}
