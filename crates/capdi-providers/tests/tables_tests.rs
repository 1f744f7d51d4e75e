//! Tests for the default candidate tables against real probes
//!
//! Validates that the shipped tables resolve the way the registry will see
//! them: priority order, availability gating, and variant overrides.

use std::sync::Arc;

use capdi_domain::{CapabilityRegistry, resolve_all, resolve_first};
use capdi_providers::availability::{ManifestProbe, StaticProbe};
use capdi_providers::tables;

fn full_environment() -> StaticProbe {
    StaticProbe::new()
        .with_package("tokio", "1.47.0")
        .with_package("tracing", "0.1.41")
        .with_package("moka", "0.12.10")
        .with_package("dashmap", "6.1.0")
        .with_package("null", "1.0.0")
}

#[test]
fn test_event_dispatcher_resolution_prefers_tokio() {
    let candidates = tables::event_dispatchers();
    let probe = full_environment();

    let discovery = resolve_first(&candidates, &probe).expect("should resolve");
    assert_eq!(discovery.package(), "tokio");
    assert_eq!(discovery.instance().provider_name(), "tokio-broadcast");
}

#[test]
fn test_event_dispatcher_falls_back_to_null() {
    let candidates = tables::event_dispatchers();
    let probe = StaticProbe::new().with_package("null", "1.0.0");

    let discovery = resolve_first(&candidates, &probe).expect("should resolve");
    assert_eq!(discovery.instance().provider_name(), "null");
}

#[test]
fn test_event_dispatcher_old_tokio_is_not_available() {
    let candidates = tables::event_dispatchers();
    let probe = StaticProbe::new().with_package("tokio", "1.20.0");

    assert!(resolve_first(&candidates, &probe).is_none());
}

#[test]
fn test_logger_resolution() {
    let candidates = tables::loggers();
    let probe = full_environment();

    let discoveries = resolve_all(&candidates, &probe);
    let providers: Vec<&str> = discoveries
        .iter()
        .map(|d| d.instance().provider_name())
        .collect();
    assert_eq!(providers, vec!["tracing", "null"]);
}

#[cfg(feature = "cache-moka")]
#[test]
fn test_cache_resolution_prefers_moka() {
    let candidates = tables::cache_stores();
    let probe = full_environment();

    let discovery = resolve_first(&candidates, &probe).expect("should resolve");
    assert_eq!(discovery.instance().provider_name(), "moka");
}

#[test]
fn test_cache_resolution_without_moka_package() {
    let candidates = tables::cache_stores();
    let probe = StaticProbe::new()
        .with_package("dashmap", "6.1.0")
        .with_package("null", "1.0.0");

    let discovery = resolve_first(&candidates, &probe).expect("should resolve");
    assert_eq!(discovery.instance().provider_name(), "dashmap");
}

#[test]
fn test_variant_override_through_table_entry() {
    let candidates = tables::cache_stores();
    let entity = candidates
        .all()
        .into_iter()
        .find(|e| e.package() == "dashmap")
        .expect("dashmap entry");

    assert!(entity.build_as("in-memory").is_ok());
    assert!(entity.build_as("bogus").is_err());
}

#[test]
fn test_registry_over_manifest_probe() {
    let probe = ManifestProbe::from_json(r#"{ "tracing": "0.1.41" }"#).expect("manifest");
    let registry = CapabilityRegistry::new("logging", Arc::new(probe), tables::loggers);

    let logger = registry.discover().expect("tracing should resolve");
    assert_eq!(logger.provider_name(), "tracing");

    // null is not listed in the manifest, so only one discovery exists
    assert_eq!(registry.discoveries().len(), 1);
}
