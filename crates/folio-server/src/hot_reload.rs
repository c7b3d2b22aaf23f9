use anyhow::{Context, Result};
use folio::{Config, Site};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{error, info, warn};

/// Config file change event
#[derive(Debug, Clone)]
pub struct ConfigChange {
    pub path: PathBuf,
}

/// Watches the config file and broadcasts edits
pub struct ConfigWatcher {
    tx: broadcast::Sender<ConfigChange>,
    _watcher: notify::RecommendedWatcher,
}

impl ConfigWatcher {
    /// Watch `config_path`
    ///
    /// The parent directory is watched rather than the file, since editors
    /// often save by replacing the file.
    pub fn new(config_path: &Path) -> Result<Self> {
        let (tx, _) = broadcast::channel(16);
        let tx_clone = tx.clone();
        let file_name = config_path.file_name().map(|n| n.to_os_string());

        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            match res {
                Ok(event) => {
                    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                        return;
                    }
                    for path in event.paths {
                        if path.file_name().map(|n| n.to_os_string()) != file_name {
                            continue;
                        }
                        info!("Config changed: {:?}", path);
                        // Broadcast change event (ignore if no receivers)
                        let _ = tx_clone.send(ConfigChange { path });
                    }
                }
                Err(e) => error!("Watch error: {:?}", e),
            }
        })?;

        let dir = match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {:?}", dir))?;
        info!("Watching: {:?}", config_path);

        Ok(Self {
            tx,
            _watcher: watcher,
        })
    }

    /// Subscribe to config change events
    pub fn subscribe(&self) -> broadcast::Receiver<ConfigChange> {
        self.tx.subscribe()
    }
}

/// Re-read site content from `path` into `site`
///
/// A file that fails to load leaves the current content in place.
pub async fn reload_site(path: &Path, site: &Arc<RwLock<Site>>) -> bool {
    match Config::load(path) {
        Ok(config) => {
            *site.write().await = config.site;
            info!("Site content reloaded");
            true
        }
        Err(e) => {
            warn!("Keeping previous site content: {:#}", e);
            false
        }
    }
}

/// Reload `site` for every change on `rx` until the watcher goes away
///
/// `on_reload` runs after each successful reload. Lagged events are skipped.
pub async fn run_reloads(
    mut rx: broadcast::Receiver<ConfigChange>,
    site: Arc<RwLock<Site>>,
    on_reload: impl Fn(),
) {
    loop {
        match rx.recv().await {
            Ok(change) => {
                if reload_site(&change.path, &site).await {
                    on_reload();
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!("Skipped {} config change event(s)", skipped);
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
