// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Scaffolding engine for the bija CLI.
//!
//! Resolves `module:entity` names to output paths, renders entity templates
//! and keeps module index files in sync on generate and destroy.

mod changes;
mod entity;
mod error;
mod generators;
pub mod index;
pub mod locate;
pub mod naming;
pub mod paths;
pub mod template;
pub mod templates;

pub use changes::{Action, Change};
pub use entity::EntityKind;
pub use error::{Error, Result};
pub use generators::{EXPORT_MARKER, GenerateOptions, MODULE_INDEX, Scaffolder};
