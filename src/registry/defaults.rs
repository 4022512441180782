//! # Field Defaults
//!
//! Toggles, container limits and images, storage, and ingress settings.

use k8s_openapi::api::core::v1::{PersistentVolumeClaimVolumeSource, Volume};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

use crate::config::DefaultKey;
use crate::constants::{DEFAULT_HEADLESS_ENABLED, DEFAULT_STORAGE_ENABLED, DEFAULT_TLS_ENABLED};
use crate::crd::{DevfileRegistry, DevfileRegistrySpecContainer};
use crate::registry::naming::{app_full_name, pvc_name};
use crate::registry::{non_empty, resolve_quantity};

/// TLS setting; on unless explicitly disabled
pub fn is_tls_enabled(cr: &DevfileRegistry) -> bool {
    cr.spec
        .tls
        .as_ref()
        .and_then(|tls| tls.enabled)
        .unwrap_or(DEFAULT_TLS_ENABLED)
}

/// Storage setting; off unless explicitly enabled
pub fn is_storage_enabled(cr: &DevfileRegistry) -> bool {
    cr.spec
        .storage
        .as_ref()
        .and_then(|storage| storage.enabled)
        .unwrap_or(DEFAULT_STORAGE_ENABLED)
}

/// Headless setting; off unless explicitly enabled
pub fn is_headless_enabled(cr: &DevfileRegistry) -> bool {
    cr.spec.headless.unwrap_or(DEFAULT_HEADLESS_ENABLED)
}

/// Telemetry is enabled only when a non-empty key is set
pub fn is_telemetry_enabled(cr: &DevfileRegistry) -> bool {
    cr.spec
        .telemetry
        .as_ref()
        .and_then(|telemetry| non_empty(&telemetry.key))
        .is_some()
}

/// Ingress is skipped unless a CR with a non-empty ingress domain is given
pub fn is_ingress_skipped(cr: Option<&DevfileRegistry>) -> bool {
    ingress_domain(cr).is_none()
}

fn ingress_domain(cr: Option<&DevfileRegistry>) -> Option<&str> {
    cr.and_then(|cr| cr.spec.k8s.as_ref())
        .and_then(|k8s| non_empty(&k8s.ingress_domain))
}

pub fn k8s_ingress_class(cr: &DevfileRegistry) -> String {
    DefaultKey::K8sIngressClass.or_default(
        cr.spec
            .k8s
            .as_ref()
            .and_then(|k8s| k8s.ingress_class.as_deref()),
    )
}

/// Host the registry ingress answers on
///
/// `None` when ingress is skipped. Otherwise `hostnameOverride` when set, or
/// `{full app name}.{ingress domain}`.
pub fn ingress_host(cr: Option<&DevfileRegistry>) -> Option<String> {
    let domain = ingress_domain(cr)?;
    let hostname = cr.and_then(|cr| non_empty(&cr.spec.hostname_override));
    Some(match hostname {
        Some(hostname) => hostname.to_string(),
        None => format!("{}.{domain}", app_full_name(cr)),
    })
}

fn memory_limit(container: Option<&DevfileRegistrySpecContainer>, key: DefaultKey) -> Quantity {
    let raw = container
        .and_then(|c| c.memory_limit.as_deref())
        .unwrap_or_default();
    resolve_quantity(raw, key.value())
}

pub fn devfile_index_memory_limit(cr: &DevfileRegistry) -> Quantity {
    memory_limit(
        cr.spec.devfile_index.as_ref(),
        DefaultKey::DevfileIndexMemoryLimit,
    )
}

pub fn oci_registry_memory_limit(cr: &DevfileRegistry) -> Quantity {
    memory_limit(
        cr.spec.oci_registry.as_ref(),
        DefaultKey::OciRegistryMemoryLimit,
    )
}

pub fn registry_viewer_memory_limit(cr: &DevfileRegistry) -> Quantity {
    memory_limit(
        cr.spec.registry_viewer.as_ref(),
        DefaultKey::RegistryViewerMemoryLimit,
    )
}

pub fn devfile_index_image(cr: &DevfileRegistry) -> String {
    DefaultKey::DevfileIndexImage.or_default(
        cr.spec
            .devfile_index
            .as_ref()
            .and_then(|c| c.image.as_deref()),
    )
}

pub fn oci_registry_image(cr: &DevfileRegistry) -> String {
    DefaultKey::OciRegistryImage.or_default(
        cr.spec
            .oci_registry
            .as_ref()
            .and_then(|c| c.image.as_deref()),
    )
}

pub fn registry_viewer_image(cr: &DevfileRegistry) -> String {
    DefaultKey::RegistryViewerImage.or_default(
        cr.spec
            .registry_viewer
            .as_ref()
            .and_then(|c| c.image.as_deref()),
    )
}

pub fn devfile_index_image_pull_policy(cr: &DevfileRegistry) -> String {
    DefaultKey::DevfileIndexImagePullPolicy.or_default(
        cr.spec
            .devfile_index
            .as_ref()
            .and_then(|c| c.image_pull_policy.as_deref()),
    )
}

pub fn oci_registry_image_pull_policy(cr: &DevfileRegistry) -> String {
    DefaultKey::OciRegistryImagePullPolicy.or_default(
        cr.spec
            .oci_registry
            .as_ref()
            .and_then(|c| c.image_pull_policy.as_deref()),
    )
}

pub fn registry_viewer_image_pull_policy(cr: &DevfileRegistry) -> String {
    DefaultKey::RegistryViewerImagePullPolicy.or_default(
        cr.spec
            .registry_viewer
            .as_ref()
            .and_then(|c| c.image_pull_policy.as_deref()),
    )
}

/// Registry volume size as written; not parsed here
pub fn devfile_registry_volume_size(cr: &DevfileRegistry) -> String {
    DefaultKey::DevfileRegistryVolumeSize.or_default(
        cr.spec
            .storage
            .as_ref()
            .and_then(|storage| storage.registry_volume_size.as_deref()),
    )
}

/// Volume source backing the OCI registry
///
/// k8s-openapi flattens the volume source into [`Volume`], so the source is
/// returned as a `Volume` with an empty `name` for the caller to fill in. A
/// claim on [`pvc_name`] when storage is enabled, otherwise an empty
/// (ephemeral) source.
pub fn devfile_registry_volume_source(cr: &DevfileRegistry) -> Volume {
    if !is_storage_enabled(cr) {
        return Volume::default();
    }

    Volume {
        persistent_volume_claim: Some(PersistentVolumeClaimVolumeSource {
            claim_name: pvc_name(cr),
            ..Default::default()
        }),
        ..Default::default()
    }
}
