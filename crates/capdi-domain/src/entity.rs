//! Immutable candidate description
//!
//! A [`CandidateEntity`] names one possible provider of a capability: the
//! package backing it, an opaque version-constraint string, and a factory
//! closure that builds an instance of the capability interface.

use std::fmt;
use std::sync::Arc;

/// Factory closure producing an instance of the capability interface.
///
/// The argument is the concrete variant to construct. Builders receive the
/// entity's default variant unless the caller rebinds it; a builder that does
/// not recognize the variant returns `Err`, which the resolution engine
/// treats the same as "not available".
pub type CandidateBuilder<T> =
    Arc<dyn Fn(&str) -> std::result::Result<Arc<T>, String> + Send + Sync>;

/// Immutable description of one possible provider of a capability.
///
/// Two entities with the same package identifier in one collection are a
/// logical conflict; [`CandidatesCollection::add`](crate::CandidatesCollection::add)
/// replaces in place rather than duplicating.
///
/// # Example
///
/// ```ignore
/// use capdi_domain::CandidateEntity;
///
/// let entity = CandidateEntity::<dyn Logger>::new(
///     "tracing",
///     "^0.1",
///     "fmt",
///     |variant| match variant {
///         "fmt" => Ok(Arc::new(TracingLogger::new()) as Arc<dyn Logger>),
///         other => Err(format!("unknown logger variant '{other}'")),
///     },
/// );
/// ```
pub struct CandidateEntity<T: ?Sized> {
    /// Package identifier, unique within a collection
    package: String,
    /// Opaque version-constraint string; matching lives behind
    /// [`VersionMatcher`](crate::ports::availability::VersionMatcher)
    versions: String,
    /// Concrete variant the builder constructs by default
    variant: String,
    /// Factory producing the capability instance
    builder: CandidateBuilder<T>,
}

impl<T: ?Sized> CandidateEntity<T> {
    /// Create a new candidate entity.
    ///
    /// `variant` is the concrete type the builder constructs when invoked
    /// through [`build`](Self::build); advanced callers can rebind it with
    /// [`with_variant`](Self::with_variant) or bypass it entirely with
    /// [`build_as`](Self::build_as).
    pub fn new<F>(
        package: impl Into<String>,
        versions: impl Into<String>,
        variant: impl Into<String>,
        builder: F,
    ) -> Self
    where
        F: Fn(&str) -> std::result::Result<Arc<T>, String> + Send + Sync + 'static,
    {
        let package = package.into();
        debug_assert!(!package.is_empty(), "candidate package must not be empty");
        Self {
            package,
            versions: versions.into(),
            variant: variant.into(),
            builder: Arc::new(builder),
        }
    }

    /// Package identifier backing this candidate
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Version-constraint string, treated opaquely by the core
    pub fn versions(&self) -> &str {
        &self.versions
    }

    /// Concrete variant constructed by default
    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// Rebind the default concrete variant
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    /// Invoke the builder with the default variant.
    ///
    /// Failure means "treat this candidate as unavailable", never a hard error.
    pub fn build(&self) -> std::result::Result<Arc<T>, String> {
        (self.builder)(&self.variant)
    }

    /// Invoke the builder with an explicit variant override
    pub fn build_as(&self, variant: &str) -> std::result::Result<Arc<T>, String> {
        (self.builder)(variant)
    }
}

// Manual Clone: derive would require `T: Clone`, but only the Arc is cloned.
impl<T: ?Sized> Clone for CandidateEntity<T> {
    fn clone(&self) -> Self {
        Self {
            package: self.package.clone(),
            versions: self.versions.clone(),
            variant: self.variant.clone(),
            builder: Arc::clone(&self.builder),
        }
    }
}

impl<T: ?Sized> fmt::Debug for CandidateEntity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateEntity")
            .field("package", &self.package)
            .field("versions", &self.versions)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Speaks: Send + Sync {
        fn say(&self) -> &'static str;
    }

    struct Quiet;
    impl Speaks for Quiet {
        fn say(&self) -> &'static str {
            "quiet"
        }
    }

    struct Loud;
    impl Speaks for Loud {
        fn say(&self) -> &'static str {
            "loud"
        }
    }

    fn entity() -> CandidateEntity<dyn Speaks> {
        CandidateEntity::new("acme/speaker", "^1.0", "quiet", |variant| match variant {
            "quiet" => Ok(Arc::new(Quiet) as Arc<dyn Speaks>),
            "loud" => Ok(Arc::new(Loud) as Arc<dyn Speaks>),
            other => Err(format!("unknown speaker variant '{other}'")),
        })
    }

    #[test]
    fn test_build_uses_default_variant() {
        let instance = entity().build().expect("builder should succeed");
        assert_eq!(instance.say(), "quiet");
    }

    #[test]
    fn test_build_as_overrides_variant() {
        let instance = entity().build_as("loud").expect("builder should succeed");
        assert_eq!(instance.say(), "loud");
    }

    #[test]
    fn test_with_variant_rebinds_default() {
        let instance = entity()
            .with_variant("loud")
            .build()
            .expect("builder should succeed");
        assert_eq!(instance.say(), "loud");
    }

    #[test]
    fn test_unknown_variant_is_a_skip_not_a_panic() {
        let result = entity().build_as("bogus");
        assert!(result.is_err());
    }

    #[test]
    fn test_clone_shares_builder() {
        let original = entity();
        let cloned = original.clone();
        assert_eq!(cloned.package(), "acme/speaker");
        assert_eq!(cloned.versions(), "^1.0");
        assert_eq!(cloned.build().expect("builder should succeed").say(), "quiet");
    }
}
