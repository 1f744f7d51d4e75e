//! Candidate table for the logging capability

use std::sync::Arc;

use capdi_domain::ports::logging::Logger;
use capdi_domain::{CandidateEntity, CandidatesCollection};

use crate::constants::CONSTRAINT_ANY;
use crate::logging::{NullLogger, TracingLogger};

/// Default candidates for logging, highest priority first.
pub fn loggers() -> CandidatesCollection<dyn Logger> {
    let mut candidates = CandidatesCollection::new();

    candidates.add(CandidateEntity::new(
        "tracing",
        "^0.1",
        "fmt",
        |variant| match variant {
            "fmt" => Ok(Arc::new(TracingLogger::new()) as Arc<dyn Logger>),
            other => Err(format!("unknown logger variant '{other}'")),
        },
    ));

    candidates.add(CandidateEntity::new("null", CONSTRAINT_ANY, "null", |variant| {
        match variant {
            "null" => Ok(Arc::new(NullLogger::new()) as Arc<dyn Logger>),
            other => Err(format!("unknown logger variant '{other}'")),
        }
    }));

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order() {
        let candidates = loggers();
        let packages: Vec<&str> = candidates.iter().map(|e| e.package()).collect();
        assert_eq!(packages, vec!["tracing", "null"]);
    }

    #[test]
    fn test_every_entry_builds() {
        for entity in loggers().iter() {
            let instance = entity.build().expect("default variant should build");
            assert!(!instance.provider_name().is_empty());
        }
    }
}
