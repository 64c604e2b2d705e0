use serde_json::json;
use crate::core::events::DomainEvent;
use crate::gateway::events::EventPublisher;
use crate::vehicles::domain::Vehicle;

// VehicleSpec holds the identity shared by all vehicles. It is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSpec {
    make: String,
    model: String,
    region_spec: String,
}

impl VehicleSpec {
    pub fn new(make: &str, model: &str, region_spec: &str) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
            region_spec: region_spec.to_string(),
        }
    }

    pub fn make(&self) -> &str {
        self.make.as_str()
    }

    pub fn model(&self) -> &str {
        self.model.as_str()
    }

    pub fn region_spec(&self) -> &str {
        self.region_spec.as_str()
    }

    fn started_event(&self, phrase: &str) -> DomainEvent {
        DomainEvent::started(
            "vehicles",
            format!("{} {}", self.make, self.model).as_str(),
            format!("{} {} ({}): {}", self.make, self.model, self.region_spec, phrase),
            json!({"make": self.make, "model": self.model, "region_spec": self.region_spec}))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    spec: VehicleSpec,
}

impl Car {
    pub fn new(make: &str, model: &str, region_spec: &str) -> Self {
        Self {
            spec: VehicleSpec::new(make, model, region_spec),
        }
    }
}

impl Vehicle for Car {
    fn spec(&self) -> &VehicleSpec {
        &self.spec
    }

    fn start_engine(&self, events: &dyn EventPublisher) {
        events.publish(self.spec.started_event("Engine started."));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Motorcycle {
    spec: VehicleSpec,
}

impl Motorcycle {
    pub fn new(make: &str, model: &str, region_spec: &str) -> Self {
        Self {
            spec: VehicleSpec::new(make, model, region_spec),
        }
    }
}

impl Vehicle for Motorcycle {
    fn spec(&self) -> &VehicleSpec {
        &self.spec
    }

    fn start_engine(&self, events: &dyn EventPublisher) {
        events.publish(self.spec.started_event("Motor started."));
    }
}
