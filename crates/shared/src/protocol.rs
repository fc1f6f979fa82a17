//! Response bodies of the local REST endpoints.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One text field of the songs payload. Talk channels leave the next-song
/// fields null or out entirely; those render as `null` and `undefined`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SongField {
    #[default]
    Missing,
    Null,
    Text(String),
}

impl From<&str> for SongField {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for SongField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SongField::Missing => f.write_str("undefined"),
            SongField::Null => f.write_str("null"),
            SongField::Text(text) => f.write_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for SongField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<String>::deserialize(deserializer)? {
            Some(text) => SongField::Text(text),
            None => SongField::Null,
        })
    }
}

impl Serialize for SongField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SongField::Text(text) => serializer.serialize_str(text),
            SongField::Missing | SongField::Null => serializer.serialize_none(),
        }
    }
}

/// `GET /api/v1/sveriges-radio/songs/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongsResponse {
    pub channelname: SongField,
    pub previoustitle: SongField,
    pub previousartist: SongField,
    pub previousalbum: SongField,
    pub nexttitle: SongField,
    pub nextartist: SongField,
    pub nextalbum: SongField,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub playlist_name: String,
    pub playlist_id: String,
}

/// `GET /api/v1/spotify/myplaylists/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistsResponse {
    #[serde(rename = "arrayOfPlaylists")]
    pub array_of_playlists: Vec<PlaylistEntry>,
}

/// `GET /api/v1/spotify/session`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
}

/// Inner object of `GET /api/v1/chartlyrics/getLyrics/{artist}/{song}`.
///
/// The endpoint wraps this object in a JSON string, so the body has to be
/// decoded twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricsResponse {
    pub text: String,
}
