//! Progress events emitted while a seeding run executes.
//!
//! RULE: The library never prints. Callers observe a run through
//! these events and decide how to present them.

use crate::types::RunId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SeedEvent {
    RunStarted { run_id: RunId, seed: u64 },
    PeopleInserted { count: usize },
    EmployeesInserted { count: usize },
    Committed { run_id: RunId },
}

/// Receives events in emission order.
pub trait SeedObserver {
    fn on_event(&mut self, event: &SeedEvent);
}

impl<F: FnMut(&SeedEvent)> SeedObserver for F {
    fn on_event(&mut self, event: &SeedEvent) {
        self(event)
    }
}

/// Observer that ignores everything.
pub struct Silent;

impl SeedObserver for Silent {
    fn on_event(&mut self, _event: &SeedEvent) {}
}
