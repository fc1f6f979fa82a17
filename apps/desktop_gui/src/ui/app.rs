use std::time::Duration;

use anyhow::Context as _;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{InputId, PlaylistOwnerId, TargetId, TriggerId};
use view_binder::{
    binding::{
        TRIGGER_LYRICS, TRIGGER_P1, TRIGGER_P2, TRIGGER_P3, TRIGGER_P4, TRIGGER_PLAYLISTS,
        TRIGGER_SESSION,
    },
    load_settings, prepare_base_url, BindingTable, InputSnapshot, RenderPlan, Settings,
    UrlBuilder,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::ViewState;

#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    pub base_url: Option<String>,
    pub playlist_owner_id: Option<i64>,
}

impl StartupConfig {
    /// File and environment settings with command line values on top.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = load_settings();
        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(owner) = self.playlist_owner_id {
            settings.playlist_owner_id = PlaylistOwnerId(owner);
        }
        settings.base_url =
            prepare_base_url(&settings.base_url).context("unusable base url for radio service")?;
        Ok(settings)
    }
}

fn trigger_label(trigger: &TriggerId) -> String {
    match trigger.as_str() {
        TRIGGER_P1 => "P1",
        TRIGGER_P2 => "P2",
        TRIGGER_P3 => "P3",
        TRIGGER_P4 => "P4",
        TRIGGER_PLAYLISTS => "Mina spellistor",
        TRIGGER_SESSION => "Session ID",
        TRIGGER_LYRICS => "Sök",
        other => other,
    }
    .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TriggerButton {
    trigger: TriggerId,
    label: String,
}

impl TriggerButton {
    fn new(trigger: &TriggerId) -> Self {
        Self {
            trigger: trigger.clone(),
            label: trigger_label(trigger),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LyricsSearch {
    button: TriggerButton,
    artist_input: InputId,
    song_input: InputId,
    target: TargetId,
}

/// Where each binding's button and targets are drawn, derived from the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ViewLayout {
    stations: Vec<TriggerButton>,
    now_playing: Vec<TargetId>,
    playlist_buttons: Vec<TriggerButton>,
    playlist_rows: Vec<(TargetId, TargetId)>,
    session: Vec<(TriggerButton, TargetId)>,
    lyrics: Option<LyricsSearch>,
}

impl ViewLayout {
    fn from_table(table: &BindingTable) -> Self {
        let mut layout = Self::default();
        for binding in table.iter() {
            let button = TriggerButton::new(&binding.trigger);
            match (&binding.render, &binding.url) {
                (RenderPlan::NowPlaying(_), _) => {
                    if layout.now_playing.is_empty() {
                        layout.now_playing = binding
                            .render
                            .targets()
                            .into_iter()
                            .map(|target| target.id.clone())
                            .collect();
                    }
                    layout.stations.push(button);
                }
                (RenderPlan::Playlists(slots), _) => {
                    if layout.playlist_rows.is_empty() {
                        layout.playlist_rows = slots
                            .iter()
                            .map(|slot| (slot.name.id.clone(), slot.id.id.clone()))
                            .collect();
                    }
                    layout.playlist_buttons.push(button);
                }
                (RenderPlan::Session(target), _) => {
                    layout.session.push((button, target.id.clone()));
                }
                (
                    RenderPlan::Lyrics(target),
                    UrlBuilder::Lyrics {
                        artist_input,
                        song_input,
                        ..
                    },
                ) => {
                    layout.lyrics = Some(LyricsSearch {
                        button,
                        artist_input: artist_input.clone(),
                        song_input: song_input.clone(),
                        target: target.id.clone(),
                    });
                }
                (RenderPlan::Lyrics(target), UrlBuilder::Fixed(_)) => {
                    layout.session.push((button, target.id.clone()));
                }
            }
        }
        layout
    }
}

pub struct RadioViewApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: ViewState,
    layout: ViewLayout,
    artist_input: String,
    song_input: String,
}

impl RadioViewApp {
    pub fn new(
        table: &BindingTable,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            state: ViewState::default(),
            layout: ViewLayout::from_table(table),
            artist_input: String::new(),
            song_input: String::new(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.state.apply(event);
        }
    }

    fn current_inputs(&self) -> InputSnapshot {
        let mut inputs = InputSnapshot::new();
        if let Some(lyrics) = &self.layout.lyrics {
            inputs.insert(lyrics.artist_input.clone(), self.artist_input.clone());
            inputs.insert(lyrics.song_input.clone(), self.song_input.clone());
        }
        inputs
    }

    fn activate(&mut self, trigger: TriggerId) {
        let inputs = self.current_inputs();
        if dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Activate { trigger, inputs },
            &mut self.state.status,
        ) {
            self.state.activation_queued();
        }
    }

    fn target_label(&self, ui: &mut egui::Ui, target: &TargetId) {
        ui.label(self.state.text(target).unwrap_or_default());
    }

    fn trigger_row(&mut self, ui: &mut egui::Ui, buttons: &[TriggerButton]) {
        let mut clicked = None;
        ui.horizontal_wrapped(|ui| {
            for button in buttons {
                if ui.button(button.label.as_str()).clicked() {
                    clicked = Some(button.trigger.clone());
                }
            }
        });
        if let Some(trigger) = clicked {
            self.activate(trigger);
        }
    }

    fn show_radio_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Sveriges Radio");
        let stations = self.layout.stations.clone();
        self.trigger_row(ui, &stations);
        for target in &self.layout.now_playing {
            self.target_label(ui, target);
        }
    }

    fn show_spotify_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Spotify");
        let playlist_buttons = self.layout.playlist_buttons.clone();
        self.trigger_row(ui, &playlist_buttons);

        egui::Grid::new("playlist_grid")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                for (name, id) in &self.layout.playlist_rows {
                    self.target_label(ui, name);
                    self.target_label(ui, id);
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        let session = self.layout.session.clone();
        for (button, target) in &session {
            ui.horizontal(|ui| {
                if ui.button(button.label.as_str()).clicked() {
                    self.activate(button.trigger.clone());
                }
                self.target_label(ui, target);
            });
        }
    }

    fn show_lyrics_section(&mut self, ui: &mut egui::Ui) {
        let Some(lyrics) = self.layout.lyrics.clone() else {
            return;
        };
        ui.heading("Låttexter");
        ui.horizontal(|ui| {
            ui.label("Artist");
            ui.text_edit_singleline(&mut self.artist_input);
            ui.label("Låt");
            ui.text_edit_singleline(&mut self.song_input);
            if ui.button(lyrics.button.label.as_str()).clicked() {
                self.activate(lyrics.button.trigger.clone());
            }
        });
        egui::ScrollArea::vertical()
            .id_salt("lyrics_scroll")
            .max_height(320.0)
            .show(ui, |ui| {
                self.target_label(ui, &lyrics.target);
            });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.in_flight > 0 {
                    ui.spinner();
                }
                ui.label(self.state.status.as_str());
            });
        });
    }
}

impl eframe::App for RadioViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_radio_section(ui);
                ui.separator();
                self.show_spotify_section(ui);
                ui.separator();
                self.show_lyrics_section(ui);
            });
        });

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
