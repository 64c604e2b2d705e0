use crate::core::events::DomainEvent;

// EventPublisher is the output sink every side-effecting operation writes to.
// Publishing never fails.
pub trait EventPublisher {
    fn publish(&self, event: DomainEvent);
}
