use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse descriptor. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The bundled template catalog is gone. Signals a broken installation
    /// of the tool itself, never recoverable at runtime.
    #[error("Template catalog not found at '{catalog_root}'. This may indicate a broken package installation.")]
    MissingCatalog { catalog_root: String },

    #[error("Could not locate the fluidspec package root. Pass --templates-dir explicitly.")]
    PackageRootNotFound,

    #[error("Template error: {0}.")]
    TemplateError(String),
}

/// Convenience type alias for Results with fluidspec's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
