// src/watch/watcher.rs

use std::path::{Path, PathBuf};

use anyhow::Result;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::engine::AppEvent;

/// Handle for the filesystem watcher.
///
/// Keeps the underlying `RecommendedWatcher` alive; dropping this handle stops
/// file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Watch the given files and send [`AppEvent::SourceChanged`] when one of
/// them is touched.
///
/// The parent directory of each file is watched non-recursively, so files
/// replaced by rename (as many editors do) keep being observed. Events for
/// other files in those directories are dropped here.
pub fn spawn_watcher(
    files: Vec<PathBuf>,
    runtime_tx: mpsc::Sender<AppEvent>,
) -> Result<WatcherHandle> {
    let files: Vec<PathBuf> = files.into_iter().map(|p| absolute(&p)).collect();

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(event) {
                    eprintln!("coursegate: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("coursegate: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    let mut dirs: Vec<PathBuf> = files
        .iter()
        .filter_map(|f| f.parent().map(Path::to_path_buf))
        .collect();
    dirs.sort();
    dirs.dedup();
    for dir in &dirs {
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        info!("watching {:?}", dir);
    }

    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            debug!(?event, "received notify event");
            if !(event.kind.is_create() || event.kind.is_modify() || event.kind.is_remove()) {
                continue;
            }
            for path in event.paths {
                let path = absolute(&path);
                if !files.contains(&path) {
                    continue;
                }
                if runtime_tx.send(AppEvent::SourceChanged(path)).await.is_err() {
                    debug!("runtime channel closed; stopping watcher loop");
                    return;
                }
            }
        }
        debug!("watcher event loop finished");
    });

    Ok(WatcherHandle { _inner: watcher })
}

/// Canonicalize the parent directory and re-attach the file name, so paths
/// compare equal even if the file itself does not exist right now.
fn absolute(path: &Path) -> PathBuf {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let parent = parent.canonicalize().unwrap_or(parent);
    match path.file_name() {
        Some(name) => parent.join(name),
        None => parent,
    }
}
