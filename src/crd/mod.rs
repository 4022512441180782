//! # Custom Resource Definitions
//!
//! CRD types for the DevfileRegistry operator.
//!
//! ## Module Structure
//!
//! - `spec.rs` - Main CRD specification
//! - `components.rs` - Container, storage, TLS, Kubernetes and telemetry blocks
//! - `status.rs` - Status types

mod components;
mod spec;
mod status;

// Re-export all public types
pub use components::{
    DevfileRegistrySpecContainer, DevfileRegistrySpecK8sOnly, DevfileRegistrySpecStorage,
    DevfileRegistrySpecTelemetry, DevfileRegistrySpecTls,
};
pub use spec::{DevfileRegistry, DevfileRegistrySpec};
pub use status::{Condition, DevfileRegistryStatus};
