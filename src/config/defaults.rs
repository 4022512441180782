//! # Defaults Table
//!
//! Read-only table mapping every defaulted spec field to its compiled-in value.
//!
//! Resolvers look their fallbacks up through [`DefaultKey`] so that every
//! substitution is logged with the CR field it applies to, and so that the
//! complete set of defaults can be listed and tested in one place.

use std::collections::BTreeMap;

use crate::constants::{
    DEFAULT_APP_NAME, DEFAULT_DEVFILE_INDEX_IMAGE, DEFAULT_DEVFILE_INDEX_MEMORY_LIMIT,
    DEFAULT_DEVFILE_REGISTRY_VOLUME_SIZE, DEFAULT_FULLNAME_OVERRIDE, DEFAULT_HOSTNAME_OVERRIDE,
    DEFAULT_IMAGE_PULL_POLICY, DEFAULT_K8S_INGRESS_CLASS, DEFAULT_NAME_OVERRIDE,
    DEFAULT_OCI_REGISTRY_IMAGE, DEFAULT_OCI_REGISTRY_MEMORY_LIMIT, DEFAULT_REGISTRY_VIEWER_IMAGE,
    DEFAULT_REGISTRY_VIEWER_MEMORY_LIMIT,
};

/// A spec field that has a compiled-in string default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DefaultKey {
    DevfileIndexMemoryLimit,
    OciRegistryMemoryLimit,
    RegistryViewerMemoryLimit,
    DevfileRegistryVolumeSize,
    AppName,
    NameOverride,
    FullnameOverride,
    HostnameOverride,
    K8sIngressClass,
    DevfileIndexImage,
    OciRegistryImage,
    RegistryViewerImage,
    DevfileIndexImagePullPolicy,
    OciRegistryImagePullPolicy,
    RegistryViewerImagePullPolicy,
}

impl DefaultKey {
    /// Every key in the table, in declaration order
    pub const ALL: [DefaultKey; 15] = [
        DefaultKey::DevfileIndexMemoryLimit,
        DefaultKey::OciRegistryMemoryLimit,
        DefaultKey::RegistryViewerMemoryLimit,
        DefaultKey::DevfileRegistryVolumeSize,
        DefaultKey::AppName,
        DefaultKey::NameOverride,
        DefaultKey::FullnameOverride,
        DefaultKey::HostnameOverride,
        DefaultKey::K8sIngressClass,
        DefaultKey::DevfileIndexImage,
        DefaultKey::OciRegistryImage,
        DefaultKey::RegistryViewerImage,
        DefaultKey::DevfileIndexImagePullPolicy,
        DefaultKey::OciRegistryImagePullPolicy,
        DefaultKey::RegistryViewerImagePullPolicy,
    ];

    /// Spec path of the field, as it appears in the CR (camelCase)
    ///
    /// `AppName` has no field of its own; it is the base name used when
    /// `nameOverride` is unset.
    pub fn field(self) -> &'static str {
        match self {
            DefaultKey::DevfileIndexMemoryLimit => "devfileIndex.memoryLimit",
            DefaultKey::OciRegistryMemoryLimit => "ociRegistry.memoryLimit",
            DefaultKey::RegistryViewerMemoryLimit => "registryViewer.memoryLimit",
            DefaultKey::DevfileRegistryVolumeSize => "storage.registryVolumeSize",
            DefaultKey::AppName => "appName",
            DefaultKey::NameOverride => "nameOverride",
            DefaultKey::FullnameOverride => "fullnameOverride",
            DefaultKey::HostnameOverride => "hostnameOverride",
            DefaultKey::K8sIngressClass => "k8s.ingressClass",
            DefaultKey::DevfileIndexImage => "devfileIndex.image",
            DefaultKey::OciRegistryImage => "ociRegistry.image",
            DefaultKey::RegistryViewerImage => "registryViewer.image",
            DefaultKey::DevfileIndexImagePullPolicy => "devfileIndex.imagePullPolicy",
            DefaultKey::OciRegistryImagePullPolicy => "ociRegistry.imagePullPolicy",
            DefaultKey::RegistryViewerImagePullPolicy => "registryViewer.imagePullPolicy",
        }
    }

    /// Compiled-in default value
    pub fn value(self) -> &'static str {
        match self {
            DefaultKey::DevfileIndexMemoryLimit => DEFAULT_DEVFILE_INDEX_MEMORY_LIMIT,
            DefaultKey::OciRegistryMemoryLimit => DEFAULT_OCI_REGISTRY_MEMORY_LIMIT,
            DefaultKey::RegistryViewerMemoryLimit => DEFAULT_REGISTRY_VIEWER_MEMORY_LIMIT,
            DefaultKey::DevfileRegistryVolumeSize => DEFAULT_DEVFILE_REGISTRY_VOLUME_SIZE,
            DefaultKey::AppName => DEFAULT_APP_NAME,
            DefaultKey::NameOverride => DEFAULT_NAME_OVERRIDE,
            DefaultKey::FullnameOverride => DEFAULT_FULLNAME_OVERRIDE,
            DefaultKey::HostnameOverride => DEFAULT_HOSTNAME_OVERRIDE,
            DefaultKey::K8sIngressClass => DEFAULT_K8S_INGRESS_CLASS,
            DefaultKey::DevfileIndexImage => DEFAULT_DEVFILE_INDEX_IMAGE,
            DefaultKey::OciRegistryImage => DEFAULT_OCI_REGISTRY_IMAGE,
            DefaultKey::RegistryViewerImage => DEFAULT_REGISTRY_VIEWER_IMAGE,
            DefaultKey::DevfileIndexImagePullPolicy
            | DefaultKey::OciRegistryImagePullPolicy
            | DefaultKey::RegistryViewerImagePullPolicy => DEFAULT_IMAGE_PULL_POLICY,
        }
    }

    /// Return `value` when it is set and non-empty, otherwise this key's default
    pub fn or_default(self, value: Option<&str>) -> String {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => v.to_string(),
            None => {
                tracing::debug!(
                    field = self.field(),
                    default = self.value(),
                    "Field unset, using compiled-in default"
                );
                self.value().to_string()
            }
        }
    }
}

/// The whole table keyed by spec path
pub fn defaults_table() -> BTreeMap<&'static str, &'static str> {
    DefaultKey::ALL
        .iter()
        .map(|key| (key.field(), key.value()))
        .collect()
}
