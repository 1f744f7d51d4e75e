//! Candidate table for the caching capability

use std::sync::Arc;

use capdi_domain::ports::cache::CacheStore;
use capdi_domain::{CandidateEntity, CandidatesCollection};

#[cfg(feature = "cache-moka")]
use crate::cache::MokaCacheStore;
use crate::cache::{InMemoryCacheStore, NullCacheStore};
use crate::constants::CONSTRAINT_ANY;

/// Default candidates for caching, highest priority first.
///
/// Moka outranks the unbounded dashmap store because it evicts; both outrank
/// the null store, which only hosts that explicitly list it will get.
pub fn cache_stores() -> CandidatesCollection<dyn CacheStore> {
    let mut candidates = CandidatesCollection::new();

    #[cfg(feature = "cache-moka")]
    candidates.add(CandidateEntity::new(
        "moka",
        "^0.12",
        "sync",
        |variant| match variant {
            "sync" => Ok(Arc::new(MokaCacheStore::new()) as Arc<dyn CacheStore>),
            other => Err(format!("unknown cache variant '{other}'")),
        },
    ));

    candidates.add(CandidateEntity::new(
        "dashmap",
        "^6.0",
        "in-memory",
        |variant| match variant {
            "in-memory" => Ok(Arc::new(InMemoryCacheStore::new()) as Arc<dyn CacheStore>),
            other => Err(format!("unknown cache variant '{other}'")),
        },
    ));

    candidates.add(CandidateEntity::new("null", CONSTRAINT_ANY, "null", |variant| {
        match variant {
            "null" => Ok(Arc::new(NullCacheStore::new()) as Arc<dyn CacheStore>),
            other => Err(format!("unknown cache variant '{other}'")),
        }
    }));

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order() {
        let candidates = cache_stores();
        let packages: Vec<&str> = candidates.iter().map(|e| e.package()).collect();

        #[cfg(feature = "cache-moka")]
        assert_eq!(packages, vec!["moka", "dashmap", "null"]);
        #[cfg(not(feature = "cache-moka"))]
        assert_eq!(packages, vec!["dashmap", "null"]);
    }

    #[test]
    fn test_every_entry_builds() {
        for entity in cache_stores().iter() {
            let instance = entity.build().expect("default variant should build");
            assert!(!instance.provider_name().is_empty());
        }
    }
}
