//! # DevfileRegistry Spec
//!
//! Main CRD specification type.

use serde::{Deserialize, Serialize};

/// DevfileRegistry Custom Resource Definition
///
/// Deploys a devfile registry (devfile index, OCI registry and registry viewer).
/// Every field is optional; unset fields are resolved by [`crate::registry`].
///
/// # Example
///
/// ```yaml
/// apiVersion: registry.devfile.io/v1alpha1
/// kind: DevfileRegistry
/// metadata:
///   name: devfile-registry
///   namespace: default
/// spec:
///   devfileIndex:
///     image: quay.io/devfile/devfile-index:next
///     memoryLimit: 512Mi
///   tls:
///     enabled: false
///   k8s:
///     ingressDomain: 192.168.1.123.nip.io
/// ```
#[derive(
    kube::CustomResource, Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq, schemars::JsonSchema,
)]
#[kube(
    kind = "DevfileRegistry",
    group = "registry.devfile.io",
    version = "v1alpha1",
    namespaced,
    status = "crate::crd::DevfileRegistryStatus",
    shortname = "devreg",
    printcolumn = r#"{"name":"URL", "type":"string", "jsonPath":".status.url"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct DevfileRegistrySpec {
    /// Devfile index container settings
    #[serde(default)]
    pub devfile_index: Option<crate::crd::DevfileRegistrySpecContainer>,
    /// OCI registry container settings
    #[serde(default)]
    pub oci_registry: Option<crate::crd::DevfileRegistrySpecContainer>,
    /// Registry viewer container settings
    /// Ignored when `headless` is true
    #[serde(default)]
    pub registry_viewer: Option<crate::crd::DevfileRegistrySpecContainer>,
    /// Persistent storage for the OCI registry
    /// Default: disabled (ephemeral volume)
    #[serde(default)]
    pub storage: Option<crate::crd::DevfileRegistrySpecStorage>,
    /// TLS for the registry route/ingress
    /// Default: enabled
    #[serde(default)]
    pub tls: Option<crate::crd::DevfileRegistrySpecTls>,
    /// Kubernetes-only settings (ignored on OpenShift)
    #[serde(default)]
    pub k8s: Option<crate::crd::DevfileRegistrySpecK8sOnly>,
    /// Telemetry settings
    /// Telemetry is only sent when a key is set
    #[serde(default)]
    pub telemetry: Option<crate::crd::DevfileRegistrySpecTelemetry>,
    /// Deploy without the registry viewer
    /// Default: false
    #[serde(default)]
    pub headless: Option<bool>,
    /// Hostname used for the ingress instead of the generated one
    #[serde(default)]
    pub hostname_override: Option<String>,
    /// Replaces the `devfile-registry` app name used in object names
    /// Truncated to 63 characters
    #[serde(default)]
    pub name_override: Option<String>,
    /// Replaces the full object name (CR name + app name)
    /// Truncated to 63 characters
    #[serde(default)]
    pub fullname_override: Option<String>,
}
