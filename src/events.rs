use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{ApplicationId, Decision};

/// a decision taken by the processor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionEvent {
    pub event_id: Uuid,
    pub application_id: ApplicationId,
    pub decision: Decision,
}

impl DecisionEvent {
    pub fn new(application_id: ApplicationId, decision: Decision) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            application_id,
            decision,
        }
    }
}

/// event store for collecting decisions
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<DecisionEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: DecisionEvent) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<DecisionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[DecisionEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeclineReason;

    #[test]
    fn test_take_events_drains_store() {
        let mut store = EventStore::new();
        store.emit(DecisionEvent::new(1, Decision::Accepted { score: 300 }));
        store.emit(DecisionEvent::new(
            2,
            Decision::declined(DeclineReason::SalaryBelowMinimum),
        ));

        assert_eq!(store.len(), 2);
        assert_ne!(store.events()[0].event_id, store.events()[1].event_id);

        let taken = store.take_events();
        assert_eq!(taken.len(), 2);
        assert_eq!(taken[1].application_id, 2);
        assert!(store.is_empty());
    }
}
