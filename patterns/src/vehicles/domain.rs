pub mod model;

use crate::gateway::events::EventPublisher;
use crate::vehicles::domain::model::VehicleSpec;

// Vehicle is implemented by every kind of vehicle a factory can build.
pub trait Vehicle {
    fn spec(&self) -> &VehicleSpec;

    // Publishes exactly one informational event naming make, model and region.
    fn start_engine(&self, events: &dyn EventPublisher);

    fn make(&self) -> &str {
        self.spec().make()
    }

    fn model(&self) -> &str {
        self.spec().model()
    }

    fn region_spec(&self) -> &str {
        self.spec().region_spec()
    }
}
