//! Wire types of the remote API.
//!
//! Field names on the wire are the backend's; Rust-side names are mapped
//! through `serde(rename)`.

pub mod artist;
pub mod message;
pub mod playlist;
pub mod social;
pub mod song;
pub mod user;

pub use artist::{Artist, RegisterArtist};
pub use message::{ApiMessage, TokenResponse};
pub use playlist::{Playlist, Radio};
pub use social::{Connection, UserSuggestion};
pub use song::{EditSong, FileUpload, MusicGenre, RegisterSong, Song, SongMetrics};
pub use user::{Admin, Credentials, EditPassword, EditUser, RegisterUser, User};
