use std::path::{Path, PathBuf};

use crate::catalog;
use crate::cli::{InitArgs, ListArgs};
use crate::constants::{CLAUDE_CATALOG_DIR, TEMPLATES_DIR};
use crate::error::{Error, Result};
use crate::provider::{run_providers, InitContext};

/// Locates the bundled templates directory.
///
/// The core functions take the catalog root as an explicit parameter; this
/// environment lookup lives in the CLI layer only. Resolution order: the
/// `--templates-dir` flag, then ancestors of the executable, then ancestors
/// of the current directory, then the crate source tree for development runs.
pub fn resolve_templates_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    let mut candidates = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        candidates.push(exe);
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }
    candidates.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")));

    for start in candidates {
        for dir in start.ancestors() {
            let templates = dir.join(TEMPLATES_DIR);
            if templates.join(CLAUDE_CATALOG_DIR).is_dir() {
                return Ok(templates);
            }
        }
    }

    Err(Error::PackageRootNotFound)
}

/// Entry point for `fluidspec init`.
pub fn run_init(args: InitArgs) -> Result<()> {
    let project_root = match args.project_root {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(Error::IoError)?,
    };
    let templates_root = resolve_templates_root(args.templates_dir.as_deref())?;

    let ctx = InitContext { project_root, templates_root, force: args.force };
    run_providers(&ctx)
}

/// Entry point for `fluidspec list`.
pub fn run_list(args: ListArgs) -> Result<()> {
    let templates_root = resolve_templates_root(args.templates_dir.as_deref())?;
    let templates = catalog::list_templates(templates_root.join(CLAUDE_CATALOG_DIR))?;

    println!("Available command templates:\n");
    if templates.is_empty() {
        println!("No templates found.");
        return Ok(());
    }

    for template in &templates {
        println!("  {}", template.id);
        println!("    Name: {}", template.name);
        println!("    Description: {}", template.description);
        println!();
    }
    println!("Total: {} template(s)", templates.len());
    Ok(())
}
