//! Core utilities and types for the bija scaffolding CLI.
//!
//! This crate provides the file-system collaborator used by the generators
//! and the casing transforms shared by name and path resolution.

mod file;
mod utils;

// File operations
pub use file::{File, FileSystem, LocalFs, Overwrite, WriteResult};
// String utilities
pub use utils::{Casing, cased};
