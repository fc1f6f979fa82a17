//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use shared::domain::TargetId;
use view_binder::{BindingTable, DisplaySurface, ViewBinder};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};

/// Forwards target writes to the UI thread, which owns the visible text.
pub struct ChannelSurface {
    ui_tx: Sender<UiEvent>,
}

impl ChannelSurface {
    pub fn new(ui_tx: Sender<UiEvent>) -> Self {
        Self { ui_tx }
    }
}

impl DisplaySurface for ChannelSurface {
    fn set_text(&self, target: &TargetId, text: String) {
        let event = UiEvent::TargetUpdated {
            target: target.clone(),
            text,
        };
        match self.ui_tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::warn!(%target, "ui event queue full; dropping target update")
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::debug!(%target, "ui closed; dropping target update")
            }
        }
    }
}

/// Sends an activation outcome, logging it when the UI cannot take it.
fn report_outcome(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    match ui_tx.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(event)) => {
            tracing::warn!(?event, "ui event queue full; dropping activation outcome")
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::debug!("ui closed; dropping activation outcome")
        }
    }
}

pub fn launch(table: BindingTable, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || run_backend(table, cmd_rx, ui_tx));
}

fn run_backend(table: BindingTable, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            let _ = ui_tx.try_send(UiEvent::Info(format!(
                "backend worker startup failure: failed to build runtime: {err}"
            )));
            tracing::error!("failed to build backend runtime: {err}");
            return;
        }
    };
    let _guard = runtime.enter();

    let surface = Arc::new(ChannelSurface::new(ui_tx.clone()));
    let binder = ViewBinder::new(table, surface);
    let _ = ui_tx.try_send(UiEvent::Info(format!(
        "Ready: {} bindings",
        binder.table().len()
    )));

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::Activate { trigger, inputs } => {
                let activation = match binder.activate(&trigger, &inputs) {
                    Ok(activation) => activation,
                    Err(err) => {
                        report_outcome(
                            &ui_tx,
                            UiEvent::ActivationFailed(UiError::from_bind_error(trigger, &err)),
                        );
                        continue;
                    }
                };

                let ui_tx = ui_tx.clone();
                runtime.spawn(async move {
                    let event = match activation.await {
                        Ok(Ok(report)) => UiEvent::ActivationFinished {
                            trigger,
                            written: report.written.len(),
                        },
                        Ok(Err(err)) => {
                            UiEvent::ActivationFailed(UiError::from_bind_error(trigger, &err))
                        }
                        Err(err) => UiEvent::ActivationFailed(UiError::task_failed(
                            trigger,
                            err.to_string(),
                        )),
                    };
                    report_outcome(&ui_tx, event);
                });
            }
        }
    }

    tracing::info!("ui command queue closed; backend worker exiting");
}
