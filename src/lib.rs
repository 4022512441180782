//! DevfileRegistry Operator Library
//!
//! Custom resource types for `registry.devfile.io/v1alpha1` `DevfileRegistry`
//! and the defaulting layer that turns a partial spec into concrete values.
//! Tests are included in the module files (e.g., registry/naming.rs).
//!
//! ## Quick Start
//!
//! ```rust
//! use devfile_registry_operator::prelude::*;
//!
//! let cr = DevfileRegistry::new("dr", DevfileRegistrySpec::default());
//! assert!(is_tls_enabled(&cr));
//! assert_eq!(app_full_name(Some(&cr)), "dr-devfile-registry");
//! ```

pub mod config;
pub mod constants;
pub mod crd;
pub mod prelude;
pub mod registry;
