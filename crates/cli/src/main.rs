// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ydt - Yandex.Disk Tray Core daemon driver
//!
//! Thin binary that wires [`ydt_daemon::Core`] together: resolves the
//! daemon config path, spawns the Observation Loop, prints change events
//! as they arrive, and shuts the loop down cleanly on SIGINT.

use std::path::PathBuf;

use tracing::info;
use ydt_daemon::Core;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let config_path = resolve_config_path()?;
    info!(config_path = %config_path.display(), "starting observation loop");

    let core = Core::new(&config_path).await?;
    info!(sync_dir = %core.path().display(), "daemon gateway ready");

    let mut changes = core.changes();
    loop {
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    info!("change stream closed");
                    break;
                }
                let snapshot = changes.borrow_and_update().clone();
                match serde_json::to_string(&snapshot) {
                    Ok(json) => println!("{json}"),
                    Err(err) => tracing::warn!(%err, "failed to serialize snapshot"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("received interrupt, shutting down");
                break;
            }
        }
    }

    core.close().await;
    Ok(())
}

/// Resolve the daemon config path from `YDISK_CONFIG`, falling back to
/// `~/.config/yandex-disk/config.cfg`. Per the workspace's scoped
/// configuration surface, no other config file format is read here.
fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Some(path) = std::env::var_os("YDISK_CONFIG") {
        return Ok(PathBuf::from(path));
    }
    ydt_adapters::default_config_path()
        .ok_or_else(|| anyhow::anyhow!("could not resolve home directory for default config path"))
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}
