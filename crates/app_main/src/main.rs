//! PhotoDesk - photo manager shell
//!
//! Main entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod shell;

use anyhow::Result;
use app_core::AppConfig;

fn main() -> Result<()> {
    // Initialize logging and panic hook first
    let _log_guard = app_log::init()?;

    // Clean up old logs (7 days)
    if let Err(e) = app_log::cleanup_old_logs(7) {
        tracing::warn!("Failed to cleanup old logs: {}", e);
    }

    tracing::info!("PhotoDesk {} starting...", env!("CARGO_PKG_VERSION"));

    // Missing file yields defaults; a broken one is reported and ignored
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config from {:?}: {}", AppConfig::config_path(), e);
        AppConfig::default()
    });

    app::run(config)
}
