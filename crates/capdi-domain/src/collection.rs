//! Ordered, identifier-deduplicated candidate list
//!
//! Order encodes resolution priority: the first entry is tried first. There
//! is no separate weight field; reordering is the only priority signal.

use std::fmt;

use crate::entity::CandidateEntity;

/// Ordered collection of [`CandidateEntity`] values, unique by package.
///
/// Owned by exactly one [`CapabilityRegistry`](crate::CapabilityRegistry).
/// Mutation semantics:
///
/// - [`add`](Self::add) appends at lowest priority, or overwrites in place
///   when the package is already present (position preserved)
/// - [`prefer`](Self::prefer) promotes an existing entry to the front;
///   unknown packages are a silent no-op (preference is advisory)
/// - [`set`](Self::set) replaces the whole ordered sequence
pub struct CandidatesCollection<T: ?Sized> {
    entries: Vec<CandidateEntity<T>>,
}

impl<T: ?Sized> CandidatesCollection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a candidate at the end of priority order.
    ///
    /// If an entry with the same package already exists, its definition is
    /// overwritten but its position is preserved: adding is never a
    /// re-ranking side effect.
    pub fn add(&mut self, entity: CandidateEntity<T>) {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.package() == entity.package())
        {
            Some(existing) => *existing = entity,
            None => self.entries.push(entity),
        }
    }

    /// Move the entry with this package to the front (highest priority).
    ///
    /// A package not present in the collection is silently ignored; callers
    /// are responsible for registering it first via [`add`](Self::add).
    pub fn prefer(&mut self, package: &str) {
        if let Some(position) = self
            .entries
            .iter()
            .position(|entity| entity.package() == package)
        {
            let entity = self.entries.remove(position);
            self.entries.insert(0, entity);
        }
    }

    /// Replace the entire ordered sequence with another collection's contents.
    ///
    /// Entries are shallow-cloned; subsequent reordering of either collection
    /// does not affect the other.
    pub fn set(&mut self, other: &Self) {
        self.entries = other.entries.clone();
    }

    /// Read-only snapshot of the ordered sequence.
    ///
    /// The returned vector is independent of internal state; mutating it has
    /// no effect on the collection.
    pub fn all(&self) -> Vec<CandidateEntity<T>> {
        self.entries.clone()
    }

    /// Iterate entries in priority order
    pub fn iter(&self) -> impl Iterator<Item = &CandidateEntity<T>> {
        self.entries.iter()
    }

    /// Whether a candidate with this package is registered
    pub fn contains(&self, package: &str) -> bool {
        self.entries.iter().any(|entity| entity.package() == package)
    }

    /// Number of registered candidates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection holds no candidates
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: ?Sized> Default for CandidatesCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual Clone: derive would require `T: Clone`.
impl<T: ?Sized> Clone for CandidatesCollection<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for CandidatesCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(CandidateEntity::package))
            .finish()
    }
}
