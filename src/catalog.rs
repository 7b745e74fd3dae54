//! Template catalog reader.
//!
//! A catalog is a directory of template source directories, each carrying a
//! `command.json` descriptor. A single malformed template never aborts the
//! listing of the others.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::COMMAND_METADATA_FILE;
use crate::error::Result;
use crate::ioutils;

/// Metadata of a single installable command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandMetadata {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub description: String,
    pub entry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
}

/// One sub-command of a multi-command bundle.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandDescriptor {
    pub id: String,
    pub name: String,
    pub version: Option<String>,
    pub description: String,
    pub entry: String,
    pub input_type: Option<String>,
}

/// Parsed `command.json`. The presence of a `commands` array marks the
/// directory as a multi-command bundle.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TemplateDescriptor {
    Bundle { commands: Vec<CommandDescriptor> },
    Single(CommandMetadata),
}

/// One discovered template. `id` is always the source directory's base name.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub source_dir: PathBuf,
}

/// Reads and parses a template directory's `command.json`.
pub fn read_descriptor(template_dir: &Path) -> Result<TemplateDescriptor> {
    ioutils::read_json_file(template_dir.join(COMMAND_METADATA_FILE))
}

/// Lists all templates found under `catalog_root`, in filesystem listing
/// order. A missing catalog root yields an empty list; templates with a
/// missing or malformed descriptor are excluded with a warning.
pub fn list_templates<P: AsRef<Path>>(catalog_root: P) -> Result<Vec<CatalogEntry>> {
    let catalog_root = catalog_root.as_ref();
    let mut entries = Vec::new();

    for id in ioutils::list_subdirectories(catalog_root)? {
        let source_dir = catalog_root.join(&id);
        match read_descriptor(&source_dir) {
            Ok(TemplateDescriptor::Single(meta)) => {
                entries.push(CatalogEntry {
                    id,
                    name: meta.name,
                    description: meta.description,
                    source_dir,
                });
            }
            Ok(TemplateDescriptor::Bundle { commands }) => {
                // Bundles carry no top-level name; display the directory name
                // and summarize the sub-commands.
                entries.push(CatalogEntry {
                    name: id.clone(),
                    description: format!("Bundle of {} commands", commands.len()),
                    id,
                    source_dir,
                });
            }
            Err(e) => {
                log::warn!("Could not read metadata for template '{}': {}", id, e);
            }
        }
    }

    Ok(entries)
}
