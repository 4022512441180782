//! # Configuration
//!
//! Compiled-in defaults for DevfileRegistry fields.

mod defaults;

pub use defaults::{defaults_table, DefaultKey};
