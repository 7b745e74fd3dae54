/// Handles argument parsing and command dispatch.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Reading and validating bundled template descriptors.
pub mod catalog;

/// Copies template catalogs into a target project.
pub mod installer;

/// Dispatch table of init providers.
pub mod provider;

/// Constants used throughout the application.
pub mod constants;
