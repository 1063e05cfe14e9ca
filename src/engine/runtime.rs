// src/engine/runtime.rs

use std::io::Write;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::errors::Result;
use crate::render::render;
use crate::view::ViewQuery;

use super::core::CoreRuntime;
use super::AppEvent;

/// Async shell around [`CoreRuntime`]: reads events, feeds the core and
/// re-renders to `out` when the core asks for it.
pub struct Runtime<W: Write> {
    core: CoreRuntime,
    event_rx: mpsc::Receiver<AppEvent>,
    out: W,
    query: ViewQuery,
    format: OutputFormat,
    explain: bool,
}

impl<W: Write> Runtime<W> {
    pub fn new(
        core: CoreRuntime,
        event_rx: mpsc::Receiver<AppEvent>,
        out: W,
        query: ViewQuery,
        format: OutputFormat,
        explain: bool,
    ) -> Self {
        Self {
            core,
            event_rx,
            out,
            query,
            format,
            explain,
        }
    }

    /// Main event loop; returns when shutdown is requested or every sender
    /// is gone.
    pub async fn run(mut self) -> Result<()> {
        info!("watching catalog for changes");

        while let Some(event) = self.event_rx.recv().await {
            debug!(?event, "runtime received event");
            let step = self.core.step(event);

            if step.rerender {
                render(
                    &mut self.out,
                    self.core.session(),
                    &self.query,
                    self.format,
                    self.explain,
                )?;
                self.out.flush()?;
            }

            if !step.keep_running {
                info!("shutdown requested; stopping runtime");
                return Ok(());
            }
        }

        info!("runtime event channel closed; exiting");
        Ok(())
    }
}
