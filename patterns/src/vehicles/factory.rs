use std::fmt;
use std::fmt::{Display, Formatter};
use crate::vehicles::domain::model::{Car, Motorcycle};

pub const US_SPEC: &str = "US Spec";
pub const EU_SPEC: &str = "EU Spec";

// VehicleFactory builds vehicles bound to one fixed region tag. A new region
// only needs a new factory that names its tag.
pub trait VehicleFactory {
    fn region_spec(&self) -> &'static str;

    fn create_car(&self, make: &str, model: &str) -> Car {
        Car::new(make, model, self.region_spec())
    }

    fn create_motorcycle(&self, make: &str, model: &str) -> Motorcycle {
        Motorcycle::new(make, model, self.region_spec())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct USVehicleFactory;

impl VehicleFactory for USVehicleFactory {
    fn region_spec(&self) -> &'static str {
        US_SPEC
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EUVehicleFactory;

impl VehicleFactory for EUVehicleFactory {
    fn region_spec(&self) -> &'static str {
        EU_SPEC
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Region {
    Us,
    Eu,
}

impl From<String> for Region {
    fn from(s: String) -> Self {
        match s.trim().to_uppercase().as_str() {
            "EU" | "EU SPEC" => Region::Eu,
            _ => Region::Us,
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Region::Us => write!(f, "{}", US_SPEC),
            Region::Eu => write!(f, "{}", EU_SPEC),
        }
    }
}

pub fn create_vehicle_factory(region: Region) -> Box<dyn VehicleFactory> {
    match region {
        Region::Us => Box::new(USVehicleFactory),
        Region::Eu => Box::new(EUVehicleFactory),
    }
}
