//! Mapping of decoded payloads onto display targets.

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{
    domain::TargetId,
    protocol::{LyricsResponse, PlaylistsResponse, SessionResponse, SongsResponse},
};

use crate::{
    binding::{DisplayTarget, RenderPlan},
    error::BindError,
    surface::DisplaySurface,
};

/// Targets written by a completed render, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub written: Vec<TargetId>,
}

struct Writer<'a> {
    surface: &'a dyn DisplaySurface,
    written: Vec<TargetId>,
}

impl<'a> Writer<'a> {
    fn new(surface: &'a dyn DisplaySurface) -> Self {
        Self {
            surface,
            written: Vec::new(),
        }
    }

    fn put(&mut self, target: &DisplayTarget, value: &str) {
        self.surface.set_text(&target.id, target.format(value));
        self.written.push(target.id.clone());
    }

    fn finish(self) -> RenderReport {
        RenderReport {
            written: self.written,
        }
    }
}

fn decode<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T, BindError> {
    serde_json::from_slice(body).map_err(|source| BindError::Parse {
        url: url.to_string(),
        source,
    })
}

/// The lyrics endpoint answers with a JSON string holding the encoded object.
/// A body that is already the object is accepted as well.
fn decode_lyrics(url: &str, body: &[u8]) -> Result<LyricsResponse, BindError> {
    let parse = |source: serde_json::Error| BindError::Parse {
        url: url.to_string(),
        source,
    };

    match decode::<Value>(url, body)? {
        Value::String(inner) => serde_json::from_str(&inner).map_err(parse),
        other => serde_json::from_value(other).map_err(parse),
    }
}

impl RenderPlan {
    /// Decodes `body` and overwrites this plan's targets.
    ///
    /// Nothing is written when decoding fails. Absent song fields are not a
    /// failure; they render as `null` or `undefined`. Playlist slots are written in
    /// order and rendering stops at the first index the payload lacks, so the
    /// slots before it keep their new text and the ones after it keep their
    /// old text.
    pub fn render(
        &self,
        url: &str,
        body: &[u8],
        surface: &dyn DisplaySurface,
    ) -> Result<RenderReport, BindError> {
        let mut writer = Writer::new(surface);

        match self {
            RenderPlan::NowPlaying(targets) => {
                let song: SongsResponse = decode(url, body)?;
                writer.put(&targets.channel, &song.channelname.to_string());
                writer.put(&targets.title, &song.previoustitle.to_string());
                writer.put(&targets.artist, &song.previousartist.to_string());
                writer.put(&targets.album, &song.previousalbum.to_string());
                writer.put(&targets.next_title, &song.nexttitle.to_string());
                writer.put(&targets.next_artist, &song.nextartist.to_string());
                writer.put(&targets.next_album, &song.nextalbum.to_string());
            }
            RenderPlan::Playlists(slots) => {
                let playlists: PlaylistsResponse = decode(url, body)?;
                let entries = &playlists.array_of_playlists;
                for slot in slots {
                    let Some(entry) = entries.get(slot.index) else {
                        return Err(BindError::ShapeMismatch {
                            url: url.to_string(),
                            index: slot.index,
                            actual: entries.len(),
                        });
                    };
                    writer.put(&slot.name, &entry.playlist_name);
                    writer.put(&slot.id, &entry.playlist_id);
                }
            }
            RenderPlan::Session(target) => {
                let session: SessionResponse = decode(url, body)?;
                writer.put(target, &session.session_id);
            }
            RenderPlan::Lyrics(target) => {
                let lyrics = decode_lyrics(url, body)?;
                writer.put(target, &lyrics.text);
            }
        }

        Ok(writer.finish())
    }
}
