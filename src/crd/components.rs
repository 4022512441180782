//! # Spec Components
//!
//! Nested blocks of the DevfileRegistry spec.

use serde::{Deserialize, Serialize};

/// Settings shared by the devfile index, OCI registry and registry viewer containers
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevfileRegistrySpecContainer {
    /// Container image
    #[serde(default)]
    pub image: Option<String>,
    /// Image pull policy (Always, IfNotPresent, Never)
    #[serde(default)]
    pub image_pull_policy: Option<String>,
    /// Memory limit as a Kubernetes quantity (e.g. "256Mi")
    /// Invalid values fall back to the default limit
    #[serde(default)]
    pub memory_limit: Option<String>,
}

/// Persistent storage configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevfileRegistrySpecStorage {
    /// Back the OCI registry with a persistent volume claim
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Size of the volume as a Kubernetes quantity
    /// Default: "1Gi"
    #[serde(default)]
    pub registry_volume_size: Option<String>,
}

/// TLS configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevfileRegistrySpecTls {
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Name of a kubernetes.io/tls secret holding the certificate
    #[serde(default)]
    pub secret_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevfileRegistrySpecK8sOnly {
    /// Ingress class
    /// Default: "nginx"
    #[serde(default)]
    pub ingress_class: Option<String>,
    /// Domain the ingress host is generated under
    /// No ingress is created when this is unset
    #[serde(default)]
    pub ingress_domain: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevfileRegistrySpecTelemetry {
    /// Registry name reported with telemetry events
    #[serde(default)]
    pub registry_name: Option<String>,
    /// Telemetry write key
    #[serde(default)]
    pub key: Option<String>,
    /// Write key used by the registry viewer
    #[serde(default)]
    pub registry_viewer_write_key: Option<String>,
}
