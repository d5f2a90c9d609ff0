use serde::{Deserialize, Serialize};

use crate::models::song::Song;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "canciones")]
    pub songs: Vec<Song>,
}

/// A generated play queue seeded from one song.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Radio {
    #[serde(rename = "idCancionBase")]
    pub seed_song_id: i64,
    #[serde(rename = "colaReproduccion")]
    pub queue: Vec<Song>,
}
