use std::rc::Rc;
use crate::gateway::events::EventPublisher;
use crate::gateway::logs::TracingPublisher;

// Sink used by the binaries; tests hand a MemoryPublisher in directly.
pub fn create_publisher() -> Rc<dyn EventPublisher> {
    Rc::new(TracingPublisher::new())
}
