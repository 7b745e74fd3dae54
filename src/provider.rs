//! Provider registry: the dispatch table behind `fluidspec init`.
//!
//! Providers run sequentially in registration order; the first failure
//! propagates and halts the remaining providers.

use std::path::{Path, PathBuf};

use crate::constants::{CLAUDE_CATALOG_DIR, CLAUDE_COMMANDS_TARGET, SPEC_CATALOG_DIR, SPEC_TARGET};
use crate::error::Result;
use crate::installer;

/// Parameters resolved once by the CLI layer and shared by every provider.
#[derive(Debug, Clone)]
pub struct InitContext {
    /// Root of the project being scaffolded.
    pub project_root: PathBuf,
    /// Root of the bundled template catalogs.
    pub templates_root: PathBuf,
    /// Overwrite existing target files.
    pub force: bool,
}

pub type ProviderInit = fn(&InitContext) -> Result<()>;

/// A named initializer. Adding a provider means adding a row to
/// [`providers`]; call sites stay unchanged.
pub struct Provider {
    pub name: &'static str,
    pub init: ProviderInit,
}

pub fn providers() -> &'static [Provider] {
    const PROVIDERS: &[Provider] = &[Provider { name: "claude", init: claude_init }];
    PROVIDERS
}

/// Runs every registered provider against `ctx`, in registration order.
pub fn run_providers(ctx: &InitContext) -> Result<()> {
    for provider in providers() {
        log::debug!("Running init provider '{}'", provider.name);
        (provider.init)(ctx)?;
    }
    Ok(())
}

fn join_all(root: &Path, parts: &[&str]) -> PathBuf {
    parts.iter().fold(root.to_path_buf(), |p, part| p.join(part))
}

/// Installs the Claude command templates and the spec scaffolding.
fn claude_init(ctx: &InitContext) -> Result<()> {
    let target_dir = join_all(&ctx.project_root, CLAUDE_COMMANDS_TARGET);
    let catalog_root = ctx.templates_root.join(CLAUDE_CATALOG_DIR);

    println!("Creating .claude/commands directory at: {}", target_dir.display());
    println!("Processing command templates from: {}", catalog_root.display());

    let report = installer::install_templates(&catalog_root, &target_dir, ctx.force)?;

    println!("\nCommand templates initialized successfully!");
    println!("  Copied: {} files", report.stats.copied);
    if report.stats.skipped > 0 {
        println!("  Skipped: {} files (already exist)", report.stats.skipped);
        println!("  Tip: Use --force to overwrite existing files");
    }

    println!("\nAvailable commands:");
    for id in &report.installed {
        println!("  - /{}", id);
    }

    installer::sync_spec_files(
        &ctx.templates_root.join(SPEC_CATALOG_DIR),
        &join_all(&ctx.project_root, SPEC_TARGET),
        ctx.force,
    )?;

    println!("\nYou can now use these commands in Claude!");
    Ok(())
}
