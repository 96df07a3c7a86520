//! `table` and `routes` commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::output::write_output;
use crate::asset::{AssetRoute, Manifest, from_list, scan_dir};
use crate::config::{EmbedConfig, ToolConfig};
use crate::emit::{Emit, RoutesEmitter, TableEmitter};
use crate::logger::ProgressLine;
use crate::utils::path::absolute;
use crate::{debug, log};

/// Embed a directory and emit the endpoint table.
pub fn run_table(dir: &Path, config: &ToolConfig, output: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = absolute(dir, &cwd);

    let routes = scan_dir(&root).with_context(|| format!("cannot embed {}", dir.display()))?;
    let manifest = encode_all(routes, &config.embed)?;
    if manifest.is_empty() {
        log!("warning"; "no files in {}, emitting an empty table", dir.display());
    }

    let text = TableEmitter::new(&config.embed).render(&manifest)?;
    write_output(&text, output)?;

    report("embed", &manifest);
    Ok(())
}

/// Embed an explicit file list and emit route registration.
pub fn run_routes(
    files: &[PathBuf],
    root: Option<&Path>,
    config: &ToolConfig,
    output: Option<&Path>,
) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = absolute(root.unwrap_or(Path::new(".")), &cwd);
    let files: Vec<_> = files.iter().map(|f| absolute(f, &cwd)).collect();

    let routes = from_list(&files, &root)?;
    let manifest = encode_all(routes, &config.embed)?;
    let text = RoutesEmitter::new(&config.embed, &config.routes).render(&manifest)?;
    write_output(&text, output)?;

    report("routes", &manifest);
    Ok(())
}

/// Load and compress every route, showing progress on a terminal.
fn encode_all(routes: Vec<AssetRoute>, embed: &EmbedConfig) -> Result<Manifest> {
    let mut progress = ProgressLine::new("encode", routes.len());

    let manifest = Manifest::build(routes, &embed.encode_options(), |asset| {
        debug!(
            "encode";
            "{} -> {} ({} -> {} bytes, {})",
            asset.rel_path,
            asset.symbol,
            asset.original_len,
            asset.size(),
            asset.mime.unwrap_or("no content type")
        );
        progress.inc();
    })?;

    progress.finish();
    Ok(manifest)
}

/// Summary line after a successful run.
fn report(module: &str, manifest: &Manifest) {
    let (raw, packed) = manifest.sizes();
    log!(
        module;
        "{} file{}, {} route{}, {} -> {} bytes",
        manifest.len(),
        if manifest.len() == 1 { "" } else { "s" },
        manifest.route_count(),
        if manifest.route_count() == 1 { "" } else { "s" },
        raw,
        packed
    );
}
