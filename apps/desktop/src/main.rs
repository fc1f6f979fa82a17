use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use futures::future::join_all;
use shared::domain::{InputId, PlaylistOwnerId, TriggerId};
use tracing_subscriber::EnvFilter;
use view_binder::{
    binding::{ARTIST_INPUT, SONG_INPUT},
    default_bindings, load_settings, prepare_base_url, BindError, InputSnapshot, MemorySurface,
    RenderPlan, RequestBinding, UrlBuilder, ViewBinder,
};

/// Fire radio view triggers without a window and print what they render.
#[derive(Parser, Debug)]
struct Args {
    /// Trigger to activate; repeat to fire several concurrently.
    #[arg(long = "trigger", short = 't')]
    triggers: Vec<String>,
    /// Value of the artist input used by the lyrics search.
    #[arg(long, default_value = "")]
    artist: String,
    /// Value of the song input used by the lyrics search.
    #[arg(long, default_value = "")]
    song: String,
    #[arg(long)]
    base_url: Option<String>,
    #[arg(long)]
    playlist_owner_id: Option<i64>,
    /// Print the binding table and exit.
    #[arg(long)]
    list: bool,
}

fn describe_binding(binding: &RequestBinding) -> String {
    let url = match &binding.url {
        UrlBuilder::Fixed(url) => url.clone(),
        UrlBuilder::Lyrics {
            base_url,
            artist_input,
            song_input,
        } => format!(
            "{base_url}/api/v1/chartlyrics/getLyrics/{{{artist_input}}}/{{{song_input}}}"
        ),
    };
    let plan = match &binding.render {
        RenderPlan::NowPlaying(_) => "now-playing",
        RenderPlan::Playlists(_) => "playlists",
        RenderPlan::Session(_) => "session",
        RenderPlan::Lyrics(_) => "lyrics",
    };
    format!(
        "{:<16} {:<12} {:>2} targets  {url}",
        binding.trigger,
        plan,
        binding.render.targets().len()
    )
}

fn describe_failure(trigger: &str, err: &BindError) -> String {
    format!("{trigger}: [{}] {err}", err.kind().label())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(owner) = args.playlist_owner_id {
        settings.playlist_owner_id = PlaylistOwnerId(owner);
    }
    settings.base_url = prepare_base_url(&settings.base_url)?;
    tracing::info!(
        base_url = %settings.base_url,
        playlist_owner_id = %settings.playlist_owner_id,
        "resolved radio service settings"
    );

    let table = default_bindings(&settings);
    if args.list || args.triggers.is_empty() {
        for binding in table.iter() {
            println!("{}", describe_binding(binding));
        }
        return Ok(());
    }

    let surface = MemorySurface::new();
    let binder = ViewBinder::new(table, Arc::new(surface.clone()));

    let mut inputs = InputSnapshot::new();
    inputs.insert(InputId::from(ARTIST_INPUT), args.artist);
    inputs.insert(InputId::from(SONG_INPUT), args.song);

    let mut failures = Vec::new();
    let mut pending = Vec::new();
    for trigger in &args.triggers {
        match binder.activate(&TriggerId::new(trigger.as_str()), &inputs) {
            Ok(activation) => pending.push((trigger.as_str(), activation)),
            Err(err) => failures.push(describe_failure(trigger, &err)),
        }
    }

    let (names, activations): (Vec<_>, Vec<_>) = pending.into_iter().unzip();
    for (trigger, joined) in names.into_iter().zip(join_all(activations).await) {
        let outcome = joined.map_err(|err| BindError::TaskFailed {
            trigger: trigger.to_string(),
            reason: err.to_string(),
        });
        if let Err(err) = outcome.and_then(|result| result) {
            failures.push(describe_failure(trigger, &err));
        }
    }

    for target in binder.table().targets() {
        if let Some(text) = surface.get(&target.id) {
            println!("{:<20} {text}", target.id.as_str());
        }
    }
    for failure in &failures {
        eprintln!("failed {failure}");
    }

    if !failures.is_empty() {
        bail!(
            "{} of {} activations failed",
            failures.len(),
            args.triggers.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{describe_binding, describe_failure};
    use shared::domain::TriggerId;
    use view_binder::{binding::TRIGGER_LYRICS, default_bindings, BindError, Settings};

    #[test]
    fn lyrics_binding_shows_input_placeholders() {
        let table = default_bindings(&Settings::default());
        let lyrics = table.get(&TriggerId::from(TRIGGER_LYRICS)).expect("lyrics");
        let line = describe_binding(&lyrics);
        assert!(line.starts_with("search"));
        assert!(line.ends_with(
            "http://localhost:4567/api/v1/chartlyrics/getLyrics/{artist_my_input}/{song_my_input}"
        ));
    }

    #[test]
    fn failure_line_carries_kind_label() {
        let err = BindError::ShapeMismatch {
            url: "http://h/api/v1/spotify/myplaylists/10".to_string(),
            index: 3,
            actual: 3,
        };
        assert_eq!(
            describe_failure("get_playlist", &err),
            "get_playlist: [shape-mismatch] payload from http://h/api/v1/spotify/myplaylists/10 has 3 entries, render needs index 3"
        );
    }
}
