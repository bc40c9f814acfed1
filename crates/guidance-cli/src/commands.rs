//! Non-interactive subcommands

use crate::render;
use anyhow::Context;
use guidance_catalog::{catalog, StudentIdentity};
use guidance_scoring::Report;
use guidance_session::GuidanceConfig;
use guidance_store::{LocalStore, MirroredStore, PersistenceAdapter, RemoteStore};
use std::io::Write;

/// Adapter for `config`: mirrored when a remote is configured, local otherwise
pub(crate) fn open_store(config: &GuidanceConfig) -> anyhow::Result<Box<dyn PersistenceAdapter>> {
    let local = LocalStore::in_dir(&config.data_dir);
    match &config.remote {
        Some(remote) => {
            let remote = RemoteStore::new(remote).context("building remote client")?;
            tracing::info!(data_dir = %config.data_dir.display(), "using mirrored store");
            Ok(Box::new(MirroredStore::new(local, remote)))
        }
        None => {
            tracing::info!(data_dir = %config.data_dir.display(), "using local store");
            Ok(Box::new(local))
        }
    }
}

pub(crate) async fn report<W: Write>(
    store: &dyn PersistenceAdapter,
    class: &str,
    name: &str,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let student = StudentIdentity::new(name, class)?;
    let results = store
        .load_results(&student.key())
        .await
        .with_context(|| format!("loading results of {student}"))?
        .unwrap_or_default();
    let report = Report::build(&results);

    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Report for {student}")?;
        render::report(out, &report, None)?;
    }
    Ok(())
}

pub(crate) fn list_catalog<W: Write>(out: &mut W) -> anyhow::Result<()> {
    for instrument in catalog::all() {
        writeln!(
            out,
            "{:<22} {:>3} questions  {}",
            instrument.key.as_str(),
            instrument.question_count(),
            instrument.title
        )?;
    }
    Ok(())
}

pub(crate) async fn list_registry<W: Write>(
    store: &dyn PersistenceAdapter,
    config: &GuidanceConfig,
    class: Option<&str>,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut registry = config.seed_registry();
    registry.merge(&store.load_registry().await.context("loading registry")?);
    let classes: Vec<String> = match class {
        Some(class) => vec![class.trim().to_string()],
        None => registry.classes().map(str::to_string).collect(),
    };
    for class in classes {
        writeln!(out, "{class}")?;
        for name in registry.names(&class) {
            writeln!(out, "  {name}")?;
        }
    }
    Ok(())
}

pub(crate) async fn add_to_registry<W: Write>(
    store: &dyn PersistenceAdapter,
    class: &str,
    name: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut registry = store.load_registry().await.context("loading registry")?;
    if registry.register(class, name)? {
        match store.save_registry(&registry).await {
            Ok(()) => writeln!(out, "registered {} in {}", name.trim(), class.trim())?,
            Err(e) if e.is_remote() => {
                tracing::warn!(error = %e, "registry stored locally, remote sync failed");
                writeln!(out, "registered {} in {} (not synced: {e})", name.trim(), class.trim())?;
            }
            Err(e) => return Err(e).context("saving registry"),
        }
    } else {
        writeln!(out, "{} is already registered in {}", name.trim(), class.trim())?;
    }
    Ok(())
}
