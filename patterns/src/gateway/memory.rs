use std::cell::RefCell;
use crate::core::events::DomainEvent;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps every published event in order so callers can inspect them.
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    events: RefCell<Vec<DomainEvent>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(vec![]),
        }
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events.borrow().iter().map(|e| e.message.to_string()).collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: DomainEvent) {
        self.events.borrow_mut().push(event);
    }
}
