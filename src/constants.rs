//! Constants used throughout the fluidspec application

/// Per-template metadata descriptor file name
pub const COMMAND_METADATA_FILE: &str = "command.json";

/// Fixed prompt file name written into expanded multi-command targets
pub const PROMPT_FILE: &str = "prompt.md";

/// Catalog subdirectory holding the Claude command templates
pub const CLAUDE_CATALOG_DIR: &str = "claude";

/// Catalog subdirectory holding the spec scaffolding
pub const SPEC_CATALOG_DIR: &str = "spec";

/// Root of the bundled template catalogs, relative to the package root
pub const TEMPLATES_DIR: &str = "templates";

/// Target directory for installed commands, relative to the project root
pub const CLAUDE_COMMANDS_TARGET: &[&str] = &[".claude", "commands"];

/// Target directory for spec files, relative to the project root
pub const SPEC_TARGET: &[&str] = &[".fluidspec", "spec"];

/// Spec subtree that is refreshed on every run
pub const SPEC_BASE_DIR: &str = "base";

/// Spec subtree that is never overwritten once created
pub const SPEC_PROJECT_DIR: &str = "project";

/// Suffix stripped from project spec templates on install
pub const TEMPLATE_SUFFIX: &str = ".template.md";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
