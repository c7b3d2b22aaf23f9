mod hot_reload;
mod routes;
mod submission;

use crate::hot_reload::{run_reloads, ConfigWatcher};
use crate::routes::{router, AppState};
use anyhow::{Context, Result};
use folio::config::CONFIG_FILE;
use folio::Config;
use std::path::PathBuf;
use tower_livereload::LiveReloadLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Apply `FOLIO_HOST`, `FOLIO_PORT` and `HOT_RELOAD` on top of the file config
fn apply_env_overrides(config: &mut Config, var: impl Fn(&str) -> Option<String>) {
    if let Some(host) = var("FOLIO_HOST") {
        config.server.host = host;
    }
    if let Some(port) = var("FOLIO_PORT") {
        match port.parse() {
            Ok(port) => config.server.port = port,
            Err(_) => warn!("Ignoring FOLIO_PORT={:?}: not a port number", port),
        }
    }
    if let Some(flag) = var("HOT_RELOAD") {
        config.dev.hot_reload = flag.parse().unwrap_or(config.dev.hot_reload);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("folio_server=info,tower_http=info")),
        )
        .init();

    let config_path =
        PathBuf::from(std::env::var("FOLIO_CONFIG").unwrap_or_else(|_| CONFIG_FILE.to_string()));

    let mut config = Config::load(&config_path).unwrap_or_else(|e| {
        warn!("Failed to load config: {:#}, using defaults", e);
        Config::default()
    });
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    info!(
        "folio starting: {} ({} projects, {} skills)",
        config.site.owner,
        config.site.projects.len(),
        config.site.skills.len()
    );

    let state = AppState::new(config.site.clone());
    let app = router(state.clone());

    // Hot reload
    let app = if config.dev.hot_reload {
        let livereload = LiveReloadLayer::new();
        let reloader = livereload.reloader();
        match ConfigWatcher::new(&config_path) {
            Ok(watcher) => {
                info!("Hot reload: enabled");
                let reload_rx = watcher.subscribe();
                let site = state.site.clone();
                tokio::spawn(async move {
                    let _watcher = watcher;
                    run_reloads(reload_rx, site, || reloader.reload()).await;
                });
            }
            Err(e) => warn!("Failed to create config watcher: {:#}", e),
        }
        app.layer(livereload)
    } else {
        app
    };

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
