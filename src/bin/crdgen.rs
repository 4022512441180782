//! # CRD Generator
//!
//! Generates the Kubernetes CustomResourceDefinition (CRD) YAML for the
//! `DevfileRegistry` resource from its Rust type definitions.
//!
//! ## Usage
//!
//! ```bash
//! # Generate CRD YAML
//! cargo run --bin crdgen > config/crd/devfileregistry.yaml
//!
//! # Generate and apply directly
//! cargo run --bin crdgen | kubectl apply -f -
//! ```
//!
//! Logs go to stderr (filter with `RUST_LOG`) so stdout stays valid YAML.

use anyhow::{Context, Result};
use devfile_registry_operator::config::defaults_table;
use devfile_registry_operator::crd::DevfileRegistry;
use kube::core::CustomResourceExt;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let crd = DevfileRegistry::crd();
    let yaml = serde_yaml::to_string(&crd).context("Failed to serialize CRD to YAML")?;

    for (field, value) in defaults_table() {
        debug!(field, value, "Compiled-in default");
    }
    info!(
        name = DevfileRegistry::crd_name(),
        "Generated DevfileRegistry CRD"
    );

    print!("{yaml}");
    Ok(())
}
