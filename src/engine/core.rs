// src/engine/core.rs

//! Pure core of the watch loop.
//!
//! [`CoreRuntime`] consumes [`AppEvent`]s, reloads the catalog when its
//! content really changed, and tells the shell whether to re-render. It has
//! no channels and no Tokio types; all file access goes through
//! [`FileSystem`], so it can be driven with a mock in tests.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::catalog::load_catalog;
use crate::engine::AppEvent;
use crate::fs::FileSystem;
use crate::session::Session;
use crate::watch::ContentHashes;

/// What the shell should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreStep {
    /// The session changed and should be rendered again.
    pub rerender: bool,
    pub keep_running: bool,
}

#[derive(Debug)]
pub struct CoreRuntime {
    session: Session,
    catalog_path: PathBuf,
    fs: Arc<dyn FileSystem>,
    hashes: ContentHashes,
}

impl CoreRuntime {
    /// Build the core around an already initialised session.
    ///
    /// The current catalog content is hashed up front so the first no-op
    /// event does not cause a reload.
    pub fn new(session: Session, catalog_path: PathBuf, fs: Arc<dyn FileSystem>) -> Self {
        let mut hashes = ContentHashes::new(Arc::clone(&fs));
        if let Err(e) = hashes.prime(&catalog_path) {
            debug!(error = %e, "could not hash catalog at startup");
        }
        Self {
            session,
            catalog_path,
            fs,
            hashes,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn step(&mut self, event: AppEvent) -> CoreStep {
        match event {
            AppEvent::SourceChanged(path) => {
                debug!(?path, "source changed");
                CoreStep {
                    rerender: self.reload_if_changed(),
                    keep_running: true,
                }
            }
            AppEvent::ShutdownRequested => CoreStep {
                rerender: false,
                keep_running: false,
            },
        }
    }

    /// Reload the catalog if its content hash changed.
    ///
    /// A failed read or parse keeps the previous catalog in place.
    fn reload_if_changed(&mut self) -> bool {
        match self.hashes.changed(&self.catalog_path) {
            Ok(false) => {
                debug!("catalog content unchanged; skipping reload");
                return false;
            }
            Ok(true) => {}
            Err(e) => {
                warn!(error = %e, "catalog unreadable; keeping previous state");
                self.hashes.invalidate(&self.catalog_path);
                return false;
            }
        }

        let result = load_catalog(self.fs.as_ref(), &self.catalog_path);
        match self.session.apply_catalog_load(result) {
            Ok(()) => {
                info!("catalog reloaded");
                true
            }
            Err(_) => false,
        }
    }
}
