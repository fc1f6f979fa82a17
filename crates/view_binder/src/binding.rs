//! Registration table: which trigger fetches which URL and renders into which targets.

use std::{collections::HashMap, sync::Arc};

use shared::domain::{ChannelId, InputId, TargetId, TriggerId, SR_P1, SR_P2, SR_P3, SR_P4};
use tracing::warn;

use crate::config::Settings;

pub const TRIGGER_P1: &str = "get_p1";
pub const TRIGGER_P2: &str = "get_p2";
pub const TRIGGER_P3: &str = "get_p3";
pub const TRIGGER_P4: &str = "get_p4";
pub const TRIGGER_PLAYLISTS: &str = "get_playlist";
pub const TRIGGER_SESSION: &str = "get_session_id";
pub const TRIGGER_LYRICS: &str = "search";

pub const ARTIST_INPUT: &str = "artist_my_input";
pub const SONG_INPUT: &str = "song_my_input";

pub const PLAYLIST_SLOT_COUNT: usize = 10;

/// `{name target, id target}` per playlist position.
const PLAYLIST_SLOTS: [(&str, &str); PLAYLIST_SLOT_COUNT] = [
    ("my_playlist_1", "my_playlist_id_1"),
    ("my_playlist_2", "my_playlist_id_2"),
    ("my_playlist_3", "my_playlist_id_3"),
    ("my_playlist_4", "my_playlist_id_4"),
    ("my_playlist_5", "my_playlist_id_5"),
    ("my_playlist_6", "my_playlist_id_6"),
    ("my_playlist_7", "my_playlist_id_7"),
    ("my_playlist_8", "my_playlist_id_8"),
    ("my_playlist_9", "my_playlist_id_9"),
    ("my_playlist_10", "my_playlist_id_10"),
];

/// Current values of text inputs, captured when a trigger fires.
pub type InputSnapshot = HashMap<InputId, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTarget {
    pub id: TargetId,
    pub prefix: String,
}

impl DisplayTarget {
    pub fn new(id: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            id: TargetId::new(id),
            prefix: prefix.into(),
        }
    }

    pub fn format(&self, value: &str) -> String {
        format!("{}{value}", self.prefix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlBuilder {
    Fixed(String),
    /// `{base_url}/api/v1/chartlyrics/getLyrics/{artist}/{song}`; input values
    /// are concatenated as typed, without percent-encoding.
    Lyrics {
        base_url: String,
        artist_input: InputId,
        song_input: InputId,
    },
}

impl UrlBuilder {
    pub fn build(&self, inputs: &InputSnapshot) -> String {
        match self {
            UrlBuilder::Fixed(url) => url.clone(),
            UrlBuilder::Lyrics {
                base_url,
                artist_input,
                song_input,
            } => {
                let artist = inputs.get(artist_input).map(String::as_str).unwrap_or("");
                let song = inputs.get(song_input).map(String::as_str).unwrap_or("");
                format!("{base_url}/api/v1/chartlyrics/getLyrics/{artist}/{song}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlayingTargets {
    pub channel: DisplayTarget,
    pub title: DisplayTarget,
    pub artist: DisplayTarget,
    pub album: DisplayTarget,
    pub next_title: DisplayTarget,
    pub next_artist: DisplayTarget,
    pub next_album: DisplayTarget,
}

impl Default for NowPlayingTargets {
    fn default() -> Self {
        Self {
            channel: DisplayTarget::new("channel_id", "Kanal: "),
            title: DisplayTarget::new("title", "Nuvarande låt:  "),
            artist: DisplayTarget::new("artist", "Artist:  "),
            album: DisplayTarget::new("album", "Album:  "),
            next_title: DisplayTarget::new("next_title", "Nästa låt: "),
            next_artist: DisplayTarget::new("next_artist", "Nästa artist: "),
            next_album: DisplayTarget::new("next_album", "Nästa album:  "),
        }
    }
}

impl NowPlayingTargets {
    fn all(&self) -> [&DisplayTarget; 7] {
        [
            &self.channel,
            &self.title,
            &self.artist,
            &self.album,
            &self.next_title,
            &self.next_artist,
            &self.next_album,
        ]
    }
}

/// One positional slot of the playlist listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSlot {
    pub index: usize,
    pub name: DisplayTarget,
    pub id: DisplayTarget,
}

pub fn playlist_slots() -> Vec<PlaylistSlot> {
    PLAYLIST_SLOTS
        .iter()
        .enumerate()
        .map(|(index, (name, id))| PlaylistSlot {
            index,
            name: DisplayTarget::new(*name, "Spellista:  "),
            id: DisplayTarget::new(*id, "Spellista ID:  "),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPlan {
    NowPlaying(NowPlayingTargets),
    Playlists(Vec<PlaylistSlot>),
    Session(DisplayTarget),
    Lyrics(DisplayTarget),
}

impl RenderPlan {
    pub fn targets(&self) -> Vec<&DisplayTarget> {
        match self {
            RenderPlan::NowPlaying(targets) => targets.all().to_vec(),
            RenderPlan::Playlists(slots) => slots
                .iter()
                .flat_map(|slot| [&slot.name, &slot.id])
                .collect(),
            RenderPlan::Session(target) | RenderPlan::Lyrics(target) => vec![target],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBinding {
    pub trigger: TriggerId,
    pub url: UrlBuilder,
    pub render: RenderPlan,
}

/// Ordered set of bindings, at most one per trigger.
#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    bindings: Vec<Arc<RequestBinding>>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(
        &mut self,
        trigger: impl Into<TriggerId>,
        url: UrlBuilder,
        render: RenderPlan,
    ) -> &mut Self {
        let binding = Arc::new(RequestBinding {
            trigger: trigger.into(),
            url,
            render,
        });

        match self
            .bindings
            .iter_mut()
            .find(|existing| existing.trigger == binding.trigger)
        {
            Some(existing) => {
                warn!(trigger = %binding.trigger, "replacing existing binding");
                *existing = binding;
            }
            None => self.bindings.push(binding),
        }
        self
    }

    pub fn get(&self, trigger: &TriggerId) -> Option<Arc<RequestBinding>> {
        self.bindings
            .iter()
            .find(|binding| &binding.trigger == trigger)
            .cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RequestBinding> {
        self.bindings.iter().map(Arc::as_ref)
    }

    /// Every distinct display target, in binding order.
    pub fn targets(&self) -> Vec<&DisplayTarget> {
        let mut seen = Vec::<&TargetId>::new();
        let mut targets = Vec::new();
        for binding in &self.bindings {
            for target in binding.render.targets() {
                if !seen.contains(&&target.id) {
                    seen.push(&target.id);
                    targets.push(target);
                }
            }
        }
        targets
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

fn song_url(base_url: &str, channel: ChannelId) -> String {
    format!("{base_url}/api/v1/sveriges-radio/songs/{channel}")
}

/// The full set of bindings of the radio view.
pub fn default_bindings(settings: &Settings) -> BindingTable {
    let base_url = settings.base_url.as_str();
    let mut table = BindingTable::new();

    for (trigger, channel) in [
        (TRIGGER_P1, SR_P1),
        (TRIGGER_P2, SR_P2),
        (TRIGGER_P3, SR_P3),
        (TRIGGER_P4, SR_P4),
    ] {
        table.bind(
            trigger,
            UrlBuilder::Fixed(song_url(base_url, channel)),
            RenderPlan::NowPlaying(NowPlayingTargets::default()),
        );
    }

    table
        .bind(
            TRIGGER_PLAYLISTS,
            UrlBuilder::Fixed(format!(
                "{base_url}/api/v1/spotify/myplaylists/{}",
                settings.playlist_owner_id
            )),
            RenderPlan::Playlists(playlist_slots()),
        )
        .bind(
            TRIGGER_SESSION,
            UrlBuilder::Fixed(format!("{base_url}/api/v1/spotify/session")),
            RenderPlan::Session(DisplayTarget::new("my_session_id", "Session ID:  ")),
        )
        .bind(
            TRIGGER_LYRICS,
            UrlBuilder::Lyrics {
                base_url: base_url.to_string(),
                artist_input: InputId::from(ARTIST_INPUT),
                song_input: InputId::from(SONG_INPUT),
            },
            RenderPlan::Lyrics(DisplayTarget::new("lyrics", "")),
        );

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lyrics_url_concatenates_inputs_without_escaping() {
        let builder = UrlBuilder::Lyrics {
            base_url: "http://localhost:4567".to_string(),
            artist_input: InputId::from(ARTIST_INPUT),
            song_input: InputId::from(SONG_INPUT),
        };
        let mut inputs = InputSnapshot::new();
        inputs.insert(InputId::from(ARTIST_INPUT), "muse".to_string());
        inputs.insert(InputId::from(SONG_INPUT), "starlight".to_string());
        assert_eq!(
            builder.build(&inputs),
            "http://localhost:4567/api/v1/chartlyrics/getLyrics/muse/starlight"
        );

        inputs.insert(InputId::from(SONG_INPUT), "time is running out".to_string());
        assert_eq!(
            builder.build(&inputs),
            "http://localhost:4567/api/v1/chartlyrics/getLyrics/muse/time is running out"
        );
    }

    #[test]
    fn lyrics_url_reads_missing_inputs_as_empty() {
        let builder = UrlBuilder::Lyrics {
            base_url: "http://h".to_string(),
            artist_input: InputId::from(ARTIST_INPUT),
            song_input: InputId::from(SONG_INPUT),
        };
        assert_eq!(
            builder.build(&InputSnapshot::new()),
            "http://h/api/v1/chartlyrics/getLyrics//"
        );
    }

    #[test]
    fn default_table_binds_every_trigger_once() {
        let table = default_bindings(&Settings::default());
        let triggers: Vec<&str> = table.iter().map(|b| b.trigger.as_str()).collect();
        assert_eq!(
            triggers,
            vec![
                TRIGGER_P1,
                TRIGGER_P2,
                TRIGGER_P3,
                TRIGGER_P4,
                TRIGGER_PLAYLISTS,
                TRIGGER_SESSION,
                TRIGGER_LYRICS
            ]
        );

        let p3 = table.get(&TriggerId::from(TRIGGER_P3)).expect("p3");
        assert_eq!(
            p3.url,
            UrlBuilder::Fixed("http://localhost:4567/api/v1/sveriges-radio/songs/164".to_string())
        );
        let playlists = table.get(&TriggerId::from(TRIGGER_PLAYLISTS)).expect("playlists");
        assert_eq!(
            playlists.url,
            UrlBuilder::Fixed("http://localhost:4567/api/v1/spotify/myplaylists/10".to_string())
        );
    }

    #[test]
    fn targets_are_deduplicated_across_song_bindings() {
        let table = default_bindings(&Settings::default());
        // 7 now-playing + 20 playlist + session + lyrics
        assert_eq!(table.targets().len(), 29);
    }

    #[test]
    fn playlist_slots_pair_names_with_ids_positionally() {
        let slots = playlist_slots();
        assert_eq!(slots.len(), PLAYLIST_SLOT_COUNT);
        assert_eq!(slots[0].name.id.as_str(), "my_playlist_1");
        assert_eq!(slots[9].id.id.as_str(), "my_playlist_id_10");
        assert_eq!(slots[9].index, 9);
        assert_eq!(slots[4].id.format("abc"), "Spellista ID:  abc");
    }

    #[test]
    fn rebinding_a_trigger_replaces_it_in_place() {
        let mut table = BindingTable::new();
        table
            .bind(
                "a",
                UrlBuilder::Fixed("http://one".to_string()),
                RenderPlan::Lyrics(DisplayTarget::new("lyrics", "")),
            )
            .bind(
                "b",
                UrlBuilder::Fixed("http://two".to_string()),
                RenderPlan::Lyrics(DisplayTarget::new("lyrics", "")),
            )
            .bind(
                "a",
                UrlBuilder::Fixed("http://three".to_string()),
                RenderPlan::Lyrics(DisplayTarget::new("lyrics", "")),
            );

        assert_eq!(table.len(), 2);
        let first = table.iter().next().expect("first");
        assert_eq!(first.url, UrlBuilder::Fixed("http://three".to_string()));
    }
}
