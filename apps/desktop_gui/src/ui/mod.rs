//! UI layer for desktop GUI: app shell and the radio view sections.

pub mod app;

pub use app::{RadioViewApp, StartupConfig};
