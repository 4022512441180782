//! # Constants
//!
//! Compiled-in defaults for the DevfileRegistry custom resource.
//!
//! These values are substituted whenever the corresponding field of a
//! `DevfileRegistry` spec is unset or empty. They are not configurable at runtime.

/// Maximum length of a Kubernetes label value (and of every derived name)
pub const MAX_LABEL_LENGTH: usize = 63;

/// TLS is on unless the CR explicitly disables it
pub const DEFAULT_TLS_ENABLED: bool = true;

/// Storage is ephemeral unless the CR explicitly enables it
pub const DEFAULT_STORAGE_ENABLED: bool = false;

/// Headless mode (no registry viewer) is off by default
pub const DEFAULT_HEADLESS_ENABLED: bool = false;

/// Default memory limit for the devfile index container
pub const DEFAULT_DEVFILE_INDEX_MEMORY_LIMIT: &str = "256Mi";

/// Default memory limit for the OCI registry container
pub const DEFAULT_OCI_REGISTRY_MEMORY_LIMIT: &str = "256Mi";

/// Default memory limit for the registry viewer container
pub const DEFAULT_REGISTRY_VIEWER_MEMORY_LIMIT: &str = "256Mi";

/// Default size of the registry persistent volume
pub const DEFAULT_DEVFILE_REGISTRY_VOLUME_SIZE: &str = "1Gi";

/// Default application name, used as the base of every derived object name
pub const DEFAULT_APP_NAME: &str = "devfile-registry";

pub const DEFAULT_NAME_OVERRIDE: &str = "";

pub const DEFAULT_FULLNAME_OVERRIDE: &str = "";

pub const DEFAULT_HOSTNAME_OVERRIDE: &str = "";

/// Default ingress class for plain Kubernetes clusters
pub const DEFAULT_K8S_INGRESS_CLASS: &str = "nginx";

pub const DEFAULT_DEVFILE_INDEX_IMAGE: &str = "quay.io/devfile/devfile-index:next";

pub const DEFAULT_OCI_REGISTRY_IMAGE: &str = "quay.io/devfile/oci-registry:next";

pub const DEFAULT_REGISTRY_VIEWER_IMAGE: &str = "quay.io/devfile/registry-viewer:next";

/// Default pull policy shared by all three containers
/// The default images use floating `next` tags, so they must always be re-pulled
pub const DEFAULT_IMAGE_PULL_POLICY: &str = "Always";
