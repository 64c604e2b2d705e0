use oop_patterns::core::command::CommandError;
use oop_patterns::core::domain::Configuration;
use oop_patterns::gateway::factory::create_publisher;
use oop_patterns::gateway::logs::setup_tracing;
use oop_patterns::vehicles::domain::Vehicle;
use oop_patterns::vehicles::factory::{create_vehicle_factory, Region};

const SHOWROOM: [(Region, &str, &str, &str, &str); 2] = [
    (Region::Us, "Ford", "Mustang", "Harley-Davidson", "Sportster"),
    (Region::Eu, "BMW", "3 Series", "Ducati", "Panigale"),
];

fn main() -> Result<(), CommandError> {
    let config = Configuration::from_env()?;
    setup_tracing(&config);
    let events = create_publisher();

    for (region, car_make, car_model, bike_make, bike_model) in SHOWROOM {
        let factory = create_vehicle_factory(region);
        let vehicles: Vec<Box<dyn Vehicle>> = vec![
            Box::new(factory.create_car(car_make, car_model)),
            Box::new(factory.create_motorcycle(bike_make, bike_model)),
        ];
        for vehicle in &vehicles {
            vehicle.start_engine(events.as_ref());
        }
    }
    Ok(())
}
