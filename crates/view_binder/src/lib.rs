use std::sync::Arc;

use shared::domain::TriggerId;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub mod binding;
pub mod config;
pub mod error;
pub mod render;
pub mod surface;
pub mod transport;

pub use binding::{
    default_bindings, BindingTable, DisplayTarget, InputSnapshot, RenderPlan, RequestBinding,
    UrlBuilder,
};
pub use config::{load_settings, prepare_base_url, Settings};
pub use error::BindError;
pub use render::RenderReport;
pub use surface::{DisplaySurface, MemorySurface};
pub use transport::{Fetcher, HttpFetcher};

/// In-flight activation. Resolves once the response has been rendered or has failed.
pub type Activation = JoinHandle<Result<RenderReport, BindError>>;

/// Fires bindings: one GET per activation, then renders the response into the surface.
///
/// Overlapping activations are neither de-duplicated nor ordered; whichever
/// response resolves last leaves its text on the shared targets.
pub struct ViewBinder {
    table: BindingTable,
    fetcher: Arc<dyn Fetcher>,
    surface: Arc<dyn DisplaySurface>,
}

impl ViewBinder {
    pub fn new(table: BindingTable, surface: Arc<dyn DisplaySurface>) -> Self {
        Self::new_with_fetcher(table, Arc::new(HttpFetcher::new()), surface)
    }

    pub fn new_with_fetcher(
        table: BindingTable,
        fetcher: Arc<dyn Fetcher>,
        surface: Arc<dyn DisplaySurface>,
    ) -> Self {
        Self {
            table,
            fetcher,
            surface,
        }
    }

    pub fn bind(
        &mut self,
        trigger: impl Into<TriggerId>,
        url: UrlBuilder,
        render: RenderPlan,
    ) -> &mut Self {
        self.table.bind(trigger, url, render);
        self
    }

    pub fn table(&self) -> &BindingTable {
        &self.table
    }

    /// Spawns the request for `trigger` on the current tokio runtime.
    ///
    /// The URL is built from `inputs` before this returns, so later edits to
    /// the inputs do not affect the request.
    pub fn activate(
        &self,
        trigger: &TriggerId,
        inputs: &InputSnapshot,
    ) -> Result<Activation, BindError> {
        let Some(binding) = self.table.get(trigger) else {
            warn!(%trigger, "activation of unbound trigger");
            return Err(BindError::UnknownTrigger(trigger.to_string()));
        };

        let url = binding.url.build(inputs);
        info!(%trigger, %url, "binding activated");

        let fetcher = Arc::clone(&self.fetcher);
        let surface = Arc::clone(&self.surface);
        Ok(tokio::spawn(async move {
            let result = match fetcher.get(&url).await {
                Ok(body) => binding.render.render(&url, &body, surface.as_ref()),
                Err(err) => Err(err),
            };

            match &result {
                Ok(report) => debug!(
                    trigger = %binding.trigger,
                    written = report.written.len(),
                    "binding rendered"
                ),
                Err(err) => warn!(
                    trigger = %binding.trigger,
                    kind = err.kind().label(),
                    "binding failed: {err}"
                ),
            }
            result
        }))
    }

    /// Activates `trigger` and waits for its render to finish.
    pub async fn activate_and_wait(
        &self,
        trigger: &TriggerId,
        inputs: &InputSnapshot,
    ) -> Result<RenderReport, BindError> {
        let activation = self.activate(trigger, inputs)?;
        activation.await.map_err(|err| BindError::TaskFailed {
            trigger: trigger.to_string(),
            reason: err.to_string(),
        })?
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
