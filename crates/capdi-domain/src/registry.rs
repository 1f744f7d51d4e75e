//! Generic per-capability registry
//!
//! One [`CapabilityRegistry`] instance exists per abstract capability. It
//! owns the candidate list plus the override and singleton state layered on
//! top of plain resolution, and it is an explicit object with an injectable
//! lifecycle: construct one per process, per tenant, or per test, and
//! [`reset`](CapabilityRegistry::reset) it for isolation.
//!
//! ## Precedence
//!
//! ```text
//! use_instance(Some(x))   highest - bypasses discovery and caching
//! singleton cache         cached result of the last discovery
//! resolve_first()         priority-order walk of the candidate list
//! None                    absence, a first-class outcome
//! ```
//!
//! Every mutation of the candidate set (`add`, `prefer`, `set`) clears the
//! override, the singleton cache, and the derived extended collection, so
//! the next access re-resolves against the new priorities.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::collection::CandidatesCollection;
use crate::entity::CandidateEntity;
use crate::ports::availability::AvailabilityProbe;
use crate::resolve::{Discovery, resolve_all, resolve_first};

/// Closure producing the capability's default candidate table, invoked
/// lazily on first access and memoized thereafter.
type Seed<T> = Box<dyn Fn() -> CandidatesCollection<T> + Send + Sync>;

/// Mutable registry state, guarded by one lock for consistent snapshots.
struct RegistryState<T: ?Sized> {
    /// Lazily-seeded candidate list; `None` until first access
    candidates: Option<CandidatesCollection<T>>,
    /// Lazily-derived view including manual-only entries
    extended: Option<CandidatesCollection<T>>,
    /// Cached result of the last discovery; the inner `None` is a cached
    /// absence, distinct from "not yet computed"
    singleton: Option<Option<Arc<T>>>,
    /// Explicitly injected instance, short-circuits discovery
    using: Option<Arc<T>>,
}

impl<T: ?Sized> Default for RegistryState<T> {
    fn default() -> Self {
        Self {
            candidates: None,
            extended: None,
            singleton: None,
            using: None,
        }
    }
}

impl<T: ?Sized> RegistryState<T> {
    /// Discard everything derived from the candidate set
    fn invalidate(&mut self) {
        self.using = None;
        self.singleton = None;
        self.extended = None;
    }
}

/// Registry of candidate providers for one abstract capability.
///
/// Generic over the capability trait object; every discovered instance is an
/// `Arc<T>`.
///
/// # Example
///
/// ```ignore
/// use capdi_domain::{CapabilityRegistry, CandidatesCollection};
///
/// let registry = CapabilityRegistry::new("events", probe, tables::event_dispatchers);
/// if let Some(dispatcher) = registry.discover() {
///     dispatcher.dispatch(AppEvent::new("app.started"))?;
/// }
/// ```
pub struct CapabilityRegistry<T: ?Sized + Send + Sync> {
    /// Capability name for diagnostics
    capability: &'static str,
    /// Availability checker consulted on every resolution
    probe: Arc<dyn AvailabilityProbe>,
    /// Default candidate table, applied lazily
    seed: Seed<T>,
    /// Entries visible only through `all_candidates` (manual-only providers
    /// that cannot be auto-resolved)
    manual: Vec<CandidateEntity<T>>,
    state: RwLock<RegistryState<T>>,
}

impl<T: ?Sized + Send + Sync> CapabilityRegistry<T> {
    /// Create a registry for one capability.
    ///
    /// `seed` supplies the default candidate table; it runs at most once,
    /// on first access to the candidate set (or again after
    /// [`reset`](Self::reset)).
    pub fn new<F>(capability: &'static str, probe: Arc<dyn AvailabilityProbe>, seed: F) -> Self
    where
        F: Fn() -> CandidatesCollection<T> + Send + Sync + 'static,
    {
        Self {
            capability,
            probe,
            seed: Box::new(seed),
            manual: Vec::new(),
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Register entries that appear in [`all_candidates`](Self::all_candidates)
    /// but are never eligible for automatic resolution.
    pub fn with_manual_entries(mut self, entries: Vec<CandidateEntity<T>>) -> Self {
        self.manual = entries;
        self
    }

    /// Capability name this registry serves
    pub fn capability(&self) -> &'static str {
        self.capability
    }

    /// Discover and instantiate the highest-priority available candidate.
    ///
    /// An explicitly injected instance (see [`use_instance`](Self::use_instance))
    /// wins unconditionally. Otherwise this re-resolves on every call;
    /// use [`singleton`](Self::singleton) for the cached form.
    pub fn discover(&self) -> Option<Arc<T>> {
        if let Some(instance) = self.read_state().using.clone() {
            debug!(
                capability = self.capability,
                "returning explicitly injected instance"
            );
            return Some(instance);
        }

        let candidates = self.candidates();
        resolve_first(&candidates, self.probe.as_ref()).map(Discovery::into_instance)
    }

    /// Every candidate that is currently usable, in priority order.
    ///
    /// Ignores the injected override: this reports what the environment
    /// offers, not what the caller chose.
    pub fn discoveries(&self) -> Vec<Discovery<T>> {
        let candidates = self.candidates();
        resolve_all(&candidates, self.probe.as_ref())
    }

    /// Cached discovery.
    ///
    /// The first call resolves and caches the result; later calls return the
    /// identical instance until a mutation invalidates the cache. A
    /// discovered absence is cached too, so an empty environment is not
    /// re-scanned on every call.
    pub fn singleton(&self) -> Option<Arc<T>> {
        {
            let state = self.read_state();
            if let Some(instance) = &state.using {
                return Some(Arc::clone(instance));
            }
            if let Some(cached) = &state.singleton {
                return cached.clone();
            }
        }

        // Resolve outside the lock: builders are caller code.
        let resolved = self.discover();

        let mut state = self.write_state();
        if let Some(instance) = &state.using {
            return Some(Arc::clone(instance));
        }
        state.singleton.get_or_insert(resolved).clone()
    }

    /// Inject a specific instance, overriding discovery entirely.
    ///
    /// `Some(instance)` pins both the override and the singleton to that
    /// instance; `None` clears both, so the next access re-resolves.
    pub fn use_instance(&self, instance: Option<Arc<T>>) {
        let mut state = self.write_state();
        match instance {
            Some(instance) => {
                state.singleton = Some(Some(Arc::clone(&instance)));
                state.using = Some(instance);
            }
            None => {
                state.singleton = None;
                state.using = None;
            }
        }
    }

    /// Add a candidate at the lowest priority (or overwrite in place).
    ///
    /// Clears the override and the singleton cache: a fresh `add` must force
    /// re-resolution so the new candidate can be considered.
    pub fn add(&self, entity: CandidateEntity<T>) {
        let mut state = self.write_state();
        Self::candidates_mut(&self.seed, &mut state).add(entity);
        state.invalidate();
    }

    /// Promote a candidate to the highest priority.
    ///
    /// Unknown packages are a silent no-op (preference is advisory); the
    /// override state is cleared either way so the next discovery honors the
    /// current priorities.
    pub fn prefer(&self, package: &str) {
        let mut state = self.write_state();
        Self::candidates_mut(&self.seed, &mut state).prefer(package);
        state.invalidate();
    }

    /// Replace the candidate list wholesale
    pub fn set(&self, candidates: &CandidatesCollection<T>) {
        let mut state = self.write_state();
        Self::candidates_mut(&self.seed, &mut state).set(candidates);
        state.invalidate();
    }

    /// Snapshot of the candidate list, seeding it on first access.
    ///
    /// The returned collection is detached; mutating it does not affect the
    /// registry.
    pub fn candidates(&self) -> CandidatesCollection<T> {
        let mut state = self.write_state();
        Self::candidates_mut(&self.seed, &mut state).clone()
    }

    /// Snapshot of all candidates, including manual-only entries that cannot
    /// be auto-resolved. Derived lazily from [`candidates`](Self::candidates)
    /// and memoized separately.
    pub fn all_candidates(&self) -> CandidatesCollection<T> {
        let mut state = self.write_state();
        if let Some(extended) = &state.extended {
            return extended.clone();
        }

        let mut derived = Self::candidates_mut(&self.seed, &mut state).clone();
        for entity in &self.manual {
            derived.add(entity.clone());
        }
        state.extended = Some(derived.clone());
        derived
    }

    /// Restore the pristine lazily-seeded state.
    ///
    /// Drops the candidate list, the derived view, the singleton cache, and
    /// the override; the seed closure runs again on next access. Intended
    /// for test isolation and multi-tenant reuse.
    pub fn reset(&self) {
        let mut state = self.write_state();
        *state = RegistryState::default();
    }

    fn candidates_mut<'a>(
        seed: &Seed<T>,
        state: &'a mut RegistryState<T>,
    ) -> &'a mut CandidatesCollection<T> {
        state.candidates.get_or_insert_with(|| seed())
    }

    // A poisoned lock means a builder panicked mid-mutation; the state it
    // guards is plain data, safe to keep serving.
    fn read_state(&self) -> RwLockReadGuard<'_, RegistryState<T>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, RegistryState<T>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: ?Sized + Send + Sync> fmt::Debug for CapabilityRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read_state();
        f.debug_struct("CapabilityRegistry")
            .field("capability", &self.capability)
            .field("seeded", &state.candidates.is_some())
            .field("cached", &state.singleton.is_some())
            .field("overridden", &state.using.is_some())
            .finish_non_exhaustive()
    }
}
