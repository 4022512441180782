//! # Naming
//!
//! Derives object names for the resources generated from a DevfileRegistry.
//!
//! Names double as label values, so every derived name is capped at
//! [`MAX_LABEL_LENGTH`] characters. Truncation applies to the final composed
//! name and only touches names that are too long: it drops the trailing
//! characters, and a `-` left dangling at the cut is dropped too.

use crate::config::DefaultKey;
use crate::constants::{DEFAULT_APP_NAME, MAX_LABEL_LENGTH};
use crate::crd::DevfileRegistry;
use crate::registry::non_empty;

/// Cap `name` at 63 characters, trimming a single `-` left at the cut
///
/// Names that already fit are returned as-is, trailing `-` included.
pub fn truncate_name(name: &str) -> String {
    if name.chars().count() <= MAX_LABEL_LENGTH {
        return name.to_string();
    }

    let truncated: String = name.chars().take(MAX_LABEL_LENGTH).collect();
    match truncated.strip_suffix('-') {
        Some(trimmed) => trimmed.to_string(),
        None => truncated,
    }
}

/// App name: `nameOverride` (truncated) or `devfile-registry`
pub fn app_name(cr: Option<&DevfileRegistry>) -> String {
    match cr.and_then(|cr| non_empty(&cr.spec.name_override)) {
        Some(name_override) => truncate_name(name_override),
        None => DEFAULT_APP_NAME.to_string(),
    }
}

/// Full app name used for deployments, services, ingresses and claims
///
/// Resolution order:
/// 1. no CR: the default app name
/// 2. `fullnameOverride`, truncated
/// 3. the CR name, if it already contains the app name
/// 4. `{cr name}-{app name}`, truncated
/// 5. the app name alone when the CR has no name
///
/// Step 3 is a substring check, so `xdrtest` with `nameOverride: dr` resolves
/// to `xdrtest`.
pub fn app_full_name(cr: Option<&DevfileRegistry>) -> String {
    let Some(registry) = cr else {
        return DEFAULT_APP_NAME.to_string();
    };

    if let Some(fullname_override) = non_empty(&registry.spec.fullname_override) {
        return truncate_name(fullname_override);
    }

    let base = app_name(cr);
    match non_empty(&registry.metadata.name) {
        Some(name) if name.contains(base.as_str()) => truncate_name(name),
        Some(name) => truncate_name(&format!("{name}-{base}")),
        None => base,
    }
}

/// `nameOverride` as written, or its (empty) default
pub fn name_override(cr: &DevfileRegistry) -> String {
    DefaultKey::NameOverride.or_default(cr.spec.name_override.as_deref())
}

/// `fullnameOverride` as written, or its (empty) default
pub fn fullname_override(cr: &DevfileRegistry) -> String {
    DefaultKey::FullnameOverride.or_default(cr.spec.fullname_override.as_deref())
}

/// `hostnameOverride` as written, or its (empty) default
pub fn hostname_override(cr: &DevfileRegistry) -> String {
    DefaultKey::HostnameOverride.or_default(cr.spec.hostname_override.as_deref())
}

/// Claim name of the registry persistent volume
pub fn pvc_name(cr: &DevfileRegistry) -> String {
    app_full_name(Some(cr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::DevfileRegistrySpec;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    const LONG_NAME: &str = "devfile-registry-testregistry-devfile-io-k8s-prow-environment1-tf433";
    const LONG_NAME_TRUNCATED: &str =
        "devfile-registry-testregistry-devfile-io-k8s-prow-environment1";

    fn registry(name: Option<&str>, spec: DevfileRegistrySpec) -> DevfileRegistry {
        DevfileRegistry {
            metadata: ObjectMeta {
                name: name.map(str::to_string),
                ..Default::default()
            },
            spec,
            status: None,
        }
    }

    fn with_name_override(name_override: &str) -> DevfileRegistrySpec {
        DevfileRegistrySpec {
            name_override: Some(name_override.to_string()),
            ..Default::default()
        }
    }

    fn with_fullname_override(fullname_override: &str) -> DevfileRegistrySpec {
        DevfileRegistrySpec {
            fullname_override: Some(fullname_override.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("dr"), "dr");
        assert_eq!(truncate_name(LONG_NAME), LONG_NAME_TRUNCATED);
        assert_eq!(truncate_name(LONG_NAME_TRUNCATED), LONG_NAME_TRUNCATED);
        assert_eq!(truncate_name(""), "");
        // Nothing is cut, so nothing is trimmed
        assert_eq!(truncate_name("dr-"), "dr-");
        assert_eq!(truncate_name("dr--"), "dr--");
        let fits = format!("{}-", "a".repeat(62));
        assert_eq!(truncate_name(&fits), fits);
        // A `-` left at the cut is trimmed, once
        assert_eq!(truncate_name(&format!("{}-x", "a".repeat(62))), "a".repeat(62));
        assert_eq!(
            truncate_name(&format!("{}--x", "a".repeat(61))),
            format!("{}-", "a".repeat(61))
        );
    }

    #[test]
    fn test_app_name() {
        let cases = [
            ("default app name", Some(registry(None, DevfileRegistrySpec::default())), DEFAULT_APP_NAME),
            ("overridden short app name", Some(registry(None, with_name_override("dr"))), "dr"),
            (
                "overridden long app name",
                Some(registry(None, with_name_override(LONG_NAME))),
                LONG_NAME_TRUNCATED,
            ),
            ("empty override", Some(registry(None, with_name_override(""))), DEFAULT_APP_NAME),
            ("short override ending in a hyphen", Some(registry(None, with_name_override("dr-"))), "dr-"),
            ("no CR", None, DEFAULT_APP_NAME),
        ];

        for (name, cr, want) in cases {
            assert_eq!(app_name(cr.as_ref()), want, "{name}");
        }
    }

    #[test]
    fn test_app_full_name() {
        let long_cr_name = "testregistry-devfile-io-k8s-prow-af4325d2dcb2d0rte1-devfile-registry";
        let dr_full_name = format!("dr-{DEFAULT_APP_NAME}");

        let cases = [
            ("default app full name", Some(registry(None, DevfileRegistrySpec::default())), DEFAULT_APP_NAME),
            (
                "default full name with overridden short app name",
                Some(registry(None, with_name_override("dr"))),
                "dr",
            ),
            (
                "default full name with overridden long app name",
                Some(registry(None, with_name_override(LONG_NAME))),
                LONG_NAME_TRUNCATED,
            ),
            (
                "overridden short full name",
                Some(registry(None, with_fullname_override("dr"))),
                "dr",
            ),
            (
                "overridden long full name",
                Some(registry(None, with_fullname_override(LONG_NAME))),
                LONG_NAME_TRUNCATED,
            ),
            (
                "short CR name",
                Some(registry(Some("dr"), DevfileRegistrySpec::default())),
                dr_full_name.as_str(),
            ),
            (
                "long CR name containing the app name",
                Some(registry(Some(long_cr_name), DevfileRegistrySpec::default())),
                "testregistry-devfile-io-k8s-prow-af4325d2dcb2d0rte1-devfile-reg",
            ),
            (
                "CR name contains default app name",
                Some(registry(Some("devfile-registry-test"), DevfileRegistrySpec::default())),
                "devfile-registry-test",
            ),
            (
                "CR name contains overridden app name",
                Some(registry(Some("dr-test"), with_name_override("dr"))),
                "dr-test",
            ),
            (
                "CR name contains overridden app name in the middle",
                Some(registry(Some("xdrtest"), with_name_override("dr"))),
                "xdrtest",
            ),
            ("no CR", None, DEFAULT_APP_NAME),
        ];

        for (name, cr, want) in cases {
            assert_eq!(app_full_name(cr.as_ref()), want, "{name}");
        }
    }

    #[test]
    fn test_app_full_name_truncates_composed_name() {
        let cr_name = "a".repeat(60);
        let cr = registry(Some(&cr_name), DevfileRegistrySpec::default());

        let full_name = app_full_name(Some(&cr));
        assert_eq!(full_name.len(), MAX_LABEL_LENGTH);
        assert_eq!(full_name, format!("{cr_name}-de"));
    }

    #[test]
    fn test_short_overrides_keep_trailing_hyphen() {
        let cr = registry(Some("x"), with_name_override("dr-"));
        assert_eq!(app_full_name(Some(&cr)), "x-dr-");

        let cr = registry(Some("x"), with_fullname_override("my-registry-"));
        assert_eq!(app_full_name(Some(&cr)), "my-registry-");
    }

    #[test]
    fn test_fullname_override_wins_over_cr_name() {
        let cr = registry(Some("dr-test"), with_fullname_override("my-registry"));
        assert_eq!(app_full_name(Some(&cr)), "my-registry");
    }

    #[test]
    fn test_overrides() {
        let empty = registry(None, DevfileRegistrySpec::default());
        assert_eq!(name_override(&empty), DefaultKey::NameOverride.value());
        assert_eq!(fullname_override(&empty), DefaultKey::FullnameOverride.value());
        assert_eq!(hostname_override(&empty), DefaultKey::HostnameOverride.value());

        let cr = registry(
            None,
            DevfileRegistrySpec {
                name_override: Some("devfile-registry-test".to_string()),
                fullname_override: Some(LONG_NAME.to_string()),
                hostname_override: Some("192.168.1.123.nip.io".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(name_override(&cr), "devfile-registry-test");
        // Raw passthrough, no truncation
        assert_eq!(fullname_override(&cr), LONG_NAME);
        assert_eq!(hostname_override(&cr), "192.168.1.123.nip.io");
    }

    #[test]
    fn test_pvc_name_follows_full_name() {
        let cr = registry(Some("devfileregistry-test"), DevfileRegistrySpec::default());
        assert_eq!(pvc_name(&cr), "devfileregistry-test-devfile-registry");
    }
}
