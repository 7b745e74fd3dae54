//! Installer: synchronizes bundled template catalogs into a target project.
//!
//! The copy policy is additive-only skip-unless-forced, with two deliberate
//! asymmetries in the spec-file tree: `base/` is always refreshed, and
//! `project/` files are never overwritten once created, even under `--force`.

use std::path::Path;

use crate::catalog::{self, CommandMetadata, TemplateDescriptor};
use crate::constants::{
    COMMAND_METADATA_FILE, PROMPT_FILE, SPEC_BASE_DIR, SPEC_PROJECT_DIR, TEMPLATE_SUFFIX,
};
use crate::error::{Error, Result};
use crate::ioutils::{self, CopyStats};

/// Outcome of one catalog installation pass.
///
/// `installed` lists every target directory that is now known to exist and be
/// up to date, whether or not its files were freshly written this run.
#[derive(Debug, Default)]
pub struct InstallReport {
    pub stats: CopyStats,
    pub installed: Vec<String>,
}

/// Installs every template under `catalog_root` into `target_root`.
///
/// Standard templates are copied whole; multi-command bundles are expanded
/// into one `<template>-<sub id>` directory per sub-command, each holding a
/// normalized `command.json` and the referenced prompt renamed to
/// `prompt.md`.
///
/// # Errors
/// [`Error::MissingCatalog`] when `catalog_root` does not exist. Filesystem
/// failures during copy propagate and abort the remaining work.
pub fn install_templates<P: AsRef<Path>>(
    catalog_root: P,
    target_root: P,
    force: bool,
) -> Result<InstallReport> {
    let catalog_root = catalog_root.as_ref();
    let target_root = target_root.as_ref();

    if !catalog_root.exists() {
        return Err(Error::MissingCatalog {
            catalog_root: catalog_root.display().to_string(),
        });
    }

    ioutils::create_dir_all(target_root)?;

    let mut report = InstallReport::default();

    for template_id in ioutils::list_subdirectories(catalog_root)? {
        let source_dir = catalog_root.join(&template_id);

        if !source_dir.join(COMMAND_METADATA_FILE).exists() {
            log::warn!("Skipping {} - no {} found", template_id, COMMAND_METADATA_FILE);
            continue;
        }

        let descriptor = match catalog::read_descriptor(&source_dir) {
            Ok(d) => d,
            Err(e) => {
                log::warn!("Skipping {} - invalid descriptor: {}", template_id, e);
                continue;
            }
        };

        match descriptor {
            TemplateDescriptor::Bundle { commands } => {
                for cmd in &commands {
                    let target_id = format!("{}-{}", template_id, cmd.id);
                    let cmd_target_dir = target_root.join(&target_id);
                    ioutils::create_dir_all(&cmd_target_dir)?;

                    // The entry is rewritten to the fixed prompt file name,
                    // regardless of what the sub-descriptor pointed at.
                    let single = CommandMetadata {
                        name: cmd.name.clone(),
                        version: cmd.version.clone(),
                        description: cmd.description.clone(),
                        entry: PROMPT_FILE.to_string(),
                        input_type: cmd.input_type.clone(),
                    };
                    let content = serde_json::to_string_pretty(&single)?;

                    if ioutils::write_file(
                        &content,
                        &cmd_target_dir.join(COMMAND_METADATA_FILE),
                        force,
                    )? {
                        report.stats.copied += 1;
                    } else {
                        report.stats.skipped += 1;
                    }

                    if ioutils::copy_file(
                        &source_dir.join(&cmd.entry),
                        &cmd_target_dir.join(PROMPT_FILE),
                        force,
                    )? {
                        report.stats.copied += 1;
                    } else {
                        report.stats.skipped += 1;
                    }

                    report.installed.push(target_id);
                }
            }
            TemplateDescriptor::Single(_) => {
                let stats =
                    ioutils::copy_dir(&source_dir, &target_root.join(&template_id), force)?;
                report.stats += stats;
                report.installed.push(template_id);
            }
        }
    }

    Ok(report)
}

/// Synchronizes the spec scaffolding tree into `<spec_target>/{base,project}`.
///
/// `base/` is copied with force unconditionally so generated reference
/// material stays current. `project/` holds user-editable files: top-level
/// `*.md` / `*.template.md` entries are copied only when absent, with the
/// `.template.md` suffix stripped, and are never overwritten afterwards even
/// when the caller passed `--force`.
pub fn sync_spec_files<P: AsRef<Path>>(
    spec_root: P,
    spec_target: P,
    force: bool,
) -> Result<CopyStats> {
    let spec_root = spec_root.as_ref();
    let spec_target = spec_target.as_ref();

    if !spec_root.exists() {
        log::warn!("Spec templates directory not found at {}", spec_root.display());
        return Ok(CopyStats::default());
    }

    ioutils::create_dir_all(spec_target)?;

    let mut stats = CopyStats::default();

    let base_source = spec_root.join(SPEC_BASE_DIR);
    if base_source.exists() {
        let base_stats =
            ioutils::copy_dir(&base_source, &spec_target.join(SPEC_BASE_DIR), true)?;
        log::info!("Base spec files copied: {} (overwritten if existed)", base_stats.copied);
        stats += base_stats;
    } else {
        log::warn!("Base spec templates not found at {}", base_source.display());
    }

    let project_source = spec_root.join(SPEC_PROJECT_DIR);
    if project_source.exists() {
        let project_target = spec_target.join(SPEC_PROJECT_DIR);
        ioutils::create_dir_all(&project_target)?;

        for entry in std::fs::read_dir(&project_source).map_err(Error::IoError)? {
            let entry = entry.map_err(Error::IoError)?;
            if !entry.file_type().map_err(Error::IoError)?.is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if !file_name.ends_with(".md") {
                continue;
            }

            let target_name = match file_name.strip_suffix(TEMPLATE_SUFFIX) {
                Some(stem) => format!("{stem}.md"),
                None => file_name,
            };
            let target_path = project_target.join(&target_name);

            if target_path.exists() {
                stats.skipped += 1;
                continue;
            }
            ioutils::copy_file(&entry.path(), &target_path, false)?;
            stats.copied += 1;
        }

        if stats.skipped > 0 && force {
            log::info!("Project spec files are not overwritten, even with --force.");
        }
    } else {
        log::warn!("Project spec templates not found at {}", project_source.display());
    }

    Ok(stats)
}
