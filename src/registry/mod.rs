//! # Registry Defaults
//!
//! Resolves the effective configuration of a DevfileRegistry.
//!
//! Every function here is a pure mapping from a (possibly partial) CR to one
//! concrete value: the user-supplied field when it is set, otherwise a
//! compiled-in default from [`crate::constants`]. Nothing is mutated and no
//! error is ever returned; malformed quantities degrade to their default.
//!
//! An empty string is treated exactly like an absent field.

mod defaults;
mod naming;
mod quantity;

pub use defaults::{
    devfile_index_image, devfile_index_image_pull_policy, devfile_index_memory_limit,
    devfile_registry_volume_size, devfile_registry_volume_source, ingress_host,
    is_headless_enabled, is_ingress_skipped, is_storage_enabled, is_telemetry_enabled,
    is_tls_enabled, k8s_ingress_class, oci_registry_image, oci_registry_image_pull_policy,
    oci_registry_memory_limit, registry_viewer_image, registry_viewer_image_pull_policy,
    registry_viewer_memory_limit,
};
pub use naming::{
    app_full_name, app_name, fullname_override, hostname_override, name_override, pvc_name,
    truncate_name,
};
pub use quantity::{parse_quantity, resolve_quantity, QuantityError};

/// Borrow an optional string field, treating `""` as unset
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
