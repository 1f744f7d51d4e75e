//! Tests for the capability registry state machine
//!
//! Exercises override precedence, singleton caching, cache invalidation on
//! mutation, and the lazy seeding lifecycle against a deterministic probe.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use capdi_domain::ports::availability::AvailabilityProbe;
use capdi_domain::{CandidateEntity, CandidatesCollection, CapabilityRegistry};

/// Minimal capability used as the registry's trait object in these tests.
trait Greeter: Send + Sync {
    fn greet(&self) -> &'static str;
}

struct FixedGreeter(&'static str);

impl Greeter for FixedGreeter {
    fn greet(&self) -> &'static str {
        self.0
    }
}

/// Deterministic probe: a package is available iff it is in the set.
struct SetProbe(HashSet<&'static str>);

impl SetProbe {
    fn installed(packages: &[&'static str]) -> Arc<Self> {
        Arc::new(Self(packages.iter().copied().collect()))
    }
}

impl AvailabilityProbe for SetProbe {
    fn is_available(&self, package: &str, _versions: &str) -> bool {
        self.0.contains(package)
    }
}

fn greeter_entity(package: &'static str) -> CandidateEntity<dyn Greeter> {
    CandidateEntity::new(package, "^1.0", "default", move |_| {
        Ok(Arc::new(FixedGreeter(package)) as Arc<dyn Greeter>)
    })
}

fn default_table() -> CandidatesCollection<dyn Greeter> {
    let mut candidates = CandidatesCollection::new();
    candidates.add(greeter_entity("alpha"));
    candidates.add(greeter_entity("beta"));
    candidates
}

fn registry(probe: Arc<SetProbe>) -> CapabilityRegistry<dyn Greeter> {
    CapabilityRegistry::new("greeter", probe, default_table)
}

// ============================================================================
// Discovery and priority
// ============================================================================

#[test]
fn test_discover_uses_static_table_before_any_mutation() {
    let registry = registry(SetProbe::installed(&["alpha", "beta"]));

    let instance = registry.discover().expect("alpha should resolve");
    assert_eq!(instance.greet(), "alpha");
}

#[test]
fn test_discover_empty_environment_returns_absence() {
    let registry = registry(SetProbe::installed(&[]));

    assert!(registry.discover().is_none());
    assert!(registry.discoveries().is_empty());
    assert!(registry.singleton().is_none());
}

#[test]
fn test_prefer_promotes_lower_priority_candidate() {
    let registry = registry(SetProbe::installed(&["alpha", "beta"]));
    assert_eq!(registry.discover().expect("should resolve").greet(), "alpha");

    registry.prefer("beta");
    assert_eq!(registry.discover().expect("should resolve").greet(), "beta");
}

#[test]
fn test_prefer_unknown_package_leaves_order_intact() {
    let registry = registry(SetProbe::installed(&["alpha", "beta"]));

    registry.prefer("nonexistent");
    assert_eq!(registry.discover().expect("should resolve").greet(), "alpha");
}

#[test]
fn test_discoveries_returns_priority_ordered_usable_candidates() {
    let registry = registry(SetProbe::installed(&["alpha", "beta"]));

    let discoveries = registry.discoveries();
    let packages: Vec<&str> = discoveries.iter().map(|d| d.package()).collect();
    assert_eq!(packages, vec!["alpha", "beta"]);
}

#[test]
fn test_discoveries_excludes_unavailable_candidates() {
    let registry = registry(SetProbe::installed(&["beta"]));

    let discoveries = registry.discoveries();
    assert_eq!(discoveries.len(), 1);
    assert_eq!(discoveries[0].package(), "beta");
}

// ============================================================================
// Singleton caching
// ============================================================================

#[test]
fn test_singleton_returns_identical_instance() {
    let registry = registry(SetProbe::installed(&["alpha"]));

    let first = registry.singleton().expect("should resolve");
    let second = registry.singleton().expect("should resolve");
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_discover_builds_fresh_instances_each_call() {
    let registry = registry(SetProbe::installed(&["alpha"]));

    let first = registry.discover().expect("should resolve");
    let second = registry.discover().expect("should resolve");
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_singleton_caches_absence_without_rebuilding() {
    let builds = Arc::new(AtomicUsize::new(0));
    let builds_in_seed = Arc::clone(&builds);

    let registry: CapabilityRegistry<dyn Greeter> =
        CapabilityRegistry::new("greeter", SetProbe::installed(&[]), move || {
            builds_in_seed.fetch_add(1, Ordering::SeqCst);
            default_table()
        });

    assert!(registry.singleton().is_none());
    assert!(registry.singleton().is_none());

    // Seed runs once; the cached absence short-circuits the second call.
    assert_eq!(builds.load(Ordering::SeqCst), 1);
}

#[test]
fn test_mutation_discards_cached_singleton() {
    let registry = registry(SetProbe::installed(&["alpha", "beta", "gamma"]));

    let cached = registry.singleton().expect("should resolve");
    assert_eq!(cached.greet(), "alpha");

    registry.add(greeter_entity("gamma"));
    registry.prefer("gamma");

    let recomputed = registry.singleton().expect("should resolve");
    assert_eq!(recomputed.greet(), "gamma");
    assert!(!Arc::ptr_eq(&cached, &recomputed));
}

// ============================================================================
// Override precedence
// ============================================================================

#[test]
fn test_use_instance_short_circuits_discovery_and_singleton() {
    let registry = registry(SetProbe::installed(&["alpha"]));
    let custom: Arc<dyn Greeter> = Arc::new(FixedGreeter("custom"));

    registry.use_instance(Some(Arc::clone(&custom)));

    let discovered = registry.discover().expect("override should win");
    let singleton = registry.singleton().expect("override should win");
    assert!(Arc::ptr_eq(&discovered, &custom));
    assert!(Arc::ptr_eq(&singleton, &custom));
}

#[test]
fn test_use_none_clears_override_and_re_resolves() {
    let registry = registry(SetProbe::installed(&["alpha"]));
    let custom: Arc<dyn Greeter> = Arc::new(FixedGreeter("custom"));

    registry.use_instance(Some(custom));
    registry.use_instance(None);

    assert_eq!(registry.discover().expect("should resolve").greet(), "alpha");
}

#[test]
fn test_add_after_use_forces_re_resolution() {
    let registry = registry(SetProbe::installed(&["alpha", "gamma"]));
    let custom: Arc<dyn Greeter> = Arc::new(FixedGreeter("custom"));

    registry.use_instance(Some(Arc::clone(&custom)));
    registry.add(greeter_entity("gamma"));

    let rediscovered = registry.discover().expect("should resolve");
    assert!(!Arc::ptr_eq(&rediscovered, &custom));
    assert_eq!(rediscovered.greet(), "alpha");
}

#[test]
fn test_set_replaces_table_and_clears_override() {
    let registry = registry(SetProbe::installed(&["alpha", "replacement"]));
    let custom: Arc<dyn Greeter> = Arc::new(FixedGreeter("custom"));
    registry.use_instance(Some(custom));

    let mut replacement = CandidatesCollection::new();
    replacement.add(greeter_entity("replacement"));
    registry.set(&replacement);

    assert_eq!(
        registry.discover().expect("should resolve").greet(),
        "replacement"
    );
    let candidates = registry.candidates();
    assert_eq!(candidates.len(), 1);
    assert!(candidates.contains("replacement"));
}

#[test]
fn test_discoveries_ignores_injected_override() {
    let registry = registry(SetProbe::installed(&["alpha", "beta"]));
    registry.use_instance(Some(Arc::new(FixedGreeter("custom"))));

    let discoveries = registry.discoveries();
    let packages: Vec<&str> = discoveries.iter().map(|d| d.package()).collect();
    assert_eq!(packages, vec!["alpha", "beta"]);
}

// ============================================================================
// Lazy seeding and lifecycle
// ============================================================================

#[test]
fn test_seed_runs_once_and_is_memoized() {
    let seeds = Arc::new(AtomicUsize::new(0));
    let seeds_in_closure = Arc::clone(&seeds);

    let registry: CapabilityRegistry<dyn Greeter> =
        CapabilityRegistry::new("greeter", SetProbe::installed(&["alpha"]), move || {
            seeds_in_closure.fetch_add(1, Ordering::SeqCst);
            default_table()
        });

    registry.candidates();
    registry.discover();
    registry.discoveries();

    assert_eq!(seeds.load(Ordering::SeqCst), 1);
}

#[test]
fn test_reset_restores_pristine_state() {
    let registry = registry(SetProbe::installed(&["alpha", "beta"]));

    registry.prefer("beta");
    registry.use_instance(Some(Arc::new(FixedGreeter("custom"))));
    registry.reset();

    // Back to the seed table's order, no override.
    assert_eq!(registry.discover().expect("should resolve").greet(), "alpha");
    assert_eq!(registry.candidates().len(), 2);
}

#[test]
fn test_all_candidates_includes_manual_entries() {
    let registry = CapabilityRegistry::new(
        "greeter",
        SetProbe::installed(&["alpha", "beta"]),
        default_table,
    )
    .with_manual_entries(vec![greeter_entity("manual-only")]);

    let visible = registry.candidates();
    assert!(!visible.contains("manual-only"));

    let extended = registry.all_candidates();
    assert!(extended.contains("manual-only"));
    assert_eq!(extended.len(), 3);
}

#[test]
fn test_all_candidates_derives_from_mutated_table() {
    let registry = registry(SetProbe::installed(&["alpha", "beta"]));

    registry.all_candidates();
    registry.add(greeter_entity("gamma"));

    // The derived view is invalidated by mutation and rebuilt on access.
    let extended = registry.all_candidates();
    assert!(extended.contains("gamma"));
}

#[test]
fn test_candidates_snapshot_is_detached() {
    let registry = registry(SetProbe::installed(&["alpha", "beta"]));

    let mut snapshot = registry.candidates();
    snapshot.prefer("beta");

    assert_eq!(registry.discover().expect("should resolve").greet(), "alpha");
}
