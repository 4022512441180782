//! # Prelude
//!
//! Re-exports commonly used types and functions for convenience.
//!
//! ```rust
//! use devfile_registry_operator::prelude::*;
//! ```
//!
//! This brings into scope:
//! - All CRD types (DevfileRegistry, DevfileRegistrySpec, etc.)
//! - Every resolver in [`crate::registry`]
//! - The defaults table

// CRD types - most commonly used
pub use crate::crd::*;

// Resolvers
pub use crate::registry::*;

// Defaults table
pub use crate::config::{defaults_table, DefaultKey};
