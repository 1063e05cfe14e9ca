// src/lib.rs

pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod graph;
pub mod logging;
pub mod prefs;
pub mod render;
pub mod resolve;
pub mod session;
pub mod types;
pub mod view;
pub mod watch;

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::catalog::{load_catalog, Catalog};
use crate::cli::CliArgs;
use crate::config::{config_root_dir, load_or_default, Settings};
use crate::engine::{AppEvent, CoreRuntime, Runtime};
use crate::fs::{FileSystem, RealFileSystem};
use crate::graph::find_cycles;
use crate::prefs::{load_failed_selection, open_store, save_failed_selection, PreferenceStore};
use crate::resolve::FailedSet;
use crate::session::Session;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI overrides
/// - the stored failed selection and `--fail` toggles
/// - catalog loading and blocking resolution
/// - rendering
/// - (optional) catalog watching and Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let explicit_config = args.config.as_deref().map(Path::new);
    let (cfg, config_path) = load_or_default(explicit_config)?;
    let root = config_root_dir(config_path.as_deref());
    let settings = Settings::resolve(&cfg, &args, &root);
    debug!(?settings, "effective settings");

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);

    if args.dry_run {
        let catalog = load_catalog(fs.as_ref(), &settings.catalog_path)?;
        print_dry_run(&mut std::io::stdout(), &settings, &catalog)?;
        return Ok(());
    }

    let mut store = open_store(settings.preferences, &settings.state_root, Arc::clone(&fs));
    let initial = initial_selection(store.as_ref(), &settings, args.reset)?;

    let mut session = Session::new(settings.traversal).with_failed(initial);
    // In watch mode a missing catalog is a valid starting state; it is picked
    // up once the file appears.
    if let Err(e) = session.apply_catalog_load(load_catalog(fs.as_ref(), &settings.catalog_path)) {
        if !args.watch {
            return Err(e.into());
        }
    }

    apply_fail_toggles(&mut session, store.as_mut(), &args.fail)?;

    let mut stdout = std::io::stdout();
    render::render(
        &mut stdout,
        &session,
        &settings.query,
        settings.format,
        settings.explain,
    )?;
    stdout.flush()?;

    if !args.watch {
        return Ok(());
    }

    run_watch(session, settings, fs).await
}

/// Failed selection to start from: the stored one, or the configured
/// `[selection].failed` when nothing is stored or `reset` is set.
pub fn initial_selection(
    store: &dyn PreferenceStore,
    settings: &Settings,
    reset: bool,
) -> Result<FailedSet> {
    let stored = if reset {
        None
    } else {
        load_failed_selection(store)?
    };
    match stored {
        Some(failed) => {
            debug!(count = failed.len(), "restored stored failed selection");
            Ok(failed)
        }
        None => Ok(settings.initial_failed.clone()),
    }
}

/// Apply `--fail` toggles in order and store the resulting selection.
pub fn apply_fail_toggles(
    session: &mut Session,
    store: &mut dyn PreferenceStore,
    toggles: &[String],
) -> Result<()> {
    for id in toggles {
        session.toggle_failed(id);
    }
    save_failed_selection(store, session.failed())
}

/// Keep the session alive and re-render whenever the catalog changes.
async fn run_watch(session: Session, settings: Settings, fs: Arc<dyn FileSystem>) -> Result<()> {
    let (rt_tx, rt_rx) = mpsc::channel::<AppEvent>(64);

    let _watcher_handle =
        watch::spawn_watcher(vec![settings.catalog_path.clone()], rt_tx.clone())?;

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(AppEvent::ShutdownRequested).await;
        });
    }

    let core = CoreRuntime::new(session, settings.catalog_path.clone(), fs);
    let runtime = Runtime::new(
        core,
        rt_rx,
        std::io::stdout(),
        settings.query,
        settings.format,
        settings.explain,
    );
    runtime.run().await?;
    Ok(())
}

/// Dry-run output: effective settings, catalog summary, module index and
/// dependency cycles. Nothing is resolved or stored.
pub fn print_dry_run(out: &mut dyn Write, settings: &Settings, catalog: &Catalog) -> std::io::Result<()> {
    writeln!(out, "coursegate dry-run")?;
    writeln!(out, "  catalog = {}", settings.catalog_path.display())?;
    writeln!(out, "  traversal_start = {}", settings.traversal)?;
    writeln!(out, "  preferences = {:?}", settings.preferences)?;
    writeln!(out)?;

    writeln!(out, "courses ({}):", catalog.entries.len())?;
    for entry in &catalog.entries {
        match entry.semester {
            Some(s) => writeln!(out, "  - {} [{}] semester {}", entry.id, entry.module_id, s)?,
            None => writeln!(out, "  - {} [{}]", entry.id, entry.module_id)?,
        }
    }
    writeln!(out)?;

    writeln!(out, "modules ({}):", catalog.deps.len())?;
    for (module, dependents) in catalog.deps.iter() {
        if dependents.is_empty() {
            writeln!(out, "  - {module}")?;
        } else {
            writeln!(out, "  - {module} -> {}", dependents.join(", "))?;
        }
    }

    let cycles = find_cycles(&catalog.deps);
    if !cycles.is_empty() {
        writeln!(out)?;
        writeln!(out, "cycles ({}):", cycles.len())?;
        for cycle in cycles {
            writeln!(out, "  - {}", cycle.join(" <-> "))?;
        }
    }

    info!("dry-run complete (nothing resolved)");
    Ok(())
}
