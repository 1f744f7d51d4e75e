//! Candidate table for the event dispatching capability

use std::sync::Arc;

use capdi_domain::ports::events::EventDispatcher;
use capdi_domain::{CandidateEntity, CandidatesCollection};

use crate::constants::CONSTRAINT_ANY;
use crate::events::{BroadcastEventDispatcher, NullEventDispatcher};

/// Default candidates for event dispatching, highest priority first.
///
/// The broadcast dispatcher wins whenever tokio is installed; the null
/// dispatcher is the explicit opt-in fallback for hosts that list it.
pub fn event_dispatchers() -> CandidatesCollection<dyn EventDispatcher> {
    let mut candidates = CandidatesCollection::new();

    candidates.add(CandidateEntity::new(
        "tokio",
        "^1.38",
        "broadcast",
        |variant| match variant {
            "broadcast" => Ok(Arc::new(BroadcastEventDispatcher::new()) as Arc<dyn EventDispatcher>),
            other => Err(format!("unknown event dispatcher variant '{other}'")),
        },
    ));

    candidates.add(CandidateEntity::new("null", CONSTRAINT_ANY, "null", |variant| {
        match variant {
            "null" => Ok(Arc::new(NullEventDispatcher::new()) as Arc<dyn EventDispatcher>),
            other => Err(format!("unknown event dispatcher variant '{other}'")),
        }
    }));

    candidates
}
