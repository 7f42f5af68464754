//! Construction of cars from their type name.

use std::collections::BTreeMap;

use log::debug;
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::domain::{BaseCar, Car, Drivetrain, MonsterTruck, Pose};

type Constructor = fn() -> Box<dyn Drivetrain>;

struct Registration {
    name: &'static str,
    constructor: Constructor,
}

// Keys are the lowercase names.
static DRIVETRAINS: Lazy<BTreeMap<String, Registration>> = Lazy::new(|| {
    [
        Registration {
            name: "BaseCar",
            constructor: base_car,
        },
        Registration {
            name: "MonsterTruck",
            constructor: monster_truck,
        },
    ]
    .into_iter()
    .map(|registration| (registration.name.to_lowercase(), registration))
    .collect()
});

fn base_car() -> Box<dyn Drivetrain> {
    Box::new(BaseCar)
}

fn monster_truck() -> Box<dyn Drivetrain> {
    Box::new(MonsterTruck)
}

/// Display names of the registered car types, sorted case-insensitively.
pub fn car_types() -> impl Iterator<Item = &'static str> {
    DRIVETRAINS.values().map(|registration| registration.name)
}

pub fn car_types_joined(separator: &str) -> String {
    car_types().collect::<Vec<_>>().join(separator)
}

pub fn is_car_type(name: &str) -> bool {
    DRIVETRAINS.contains_key(&name.trim().to_lowercase())
}

/// Create a car of the given type. The name is matched case-insensitively.
pub fn car_factory(name: &str, pose: Pose) -> Result<Car, FactoryError> {
    let key = name.trim().to_lowercase();
    let registration = DRIVETRAINS
        .get(&key)
        .ok_or_else(|| FactoryError::UnknownCarType(name.trim().to_string()))?;
    let car = Car::new(pose, (registration.constructor)());
    debug!("created {} at {pose}", car.drivetrain().name());
    Ok(car)
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum FactoryError {
    #[error("invalid car type '{0}', expected one of: {types}", types = car_types_joined(", "))]
    UnknownCarType(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("basecar", "BaseCar")]
    #[case("BaseCar", "BaseCar")]
    #[case("  MONSTERTRUCK ", "MonsterTruck")]
    #[case("monsterTruck", "MonsterTruck")]
    fn test_car_factory(#[case] name: &str, #[case] drivetrain: &str) {
        let car = car_factory(name, pose!(1, 2, South)).unwrap();
        assert_eq!(car.drivetrain().name(), drivetrain);
        assert_eq!(car.pose(), pose!(1, 2, South));
    }

    #[rstest]
    #[case("")]
    #[case("truck")]
    #[case("base car")]
    fn test_car_factory_unknown(#[case] name: &str) {
        assert_eq!(
            car_factory(name, pose!(0, 0, North)).unwrap_err(),
            FactoryError::UnknownCarType(name.trim().to_string())
        );
        assert!(!is_car_type(name));
    }

    #[rstest]
    #[case("basecar")]
    #[case("MonsterTruck")]
    fn test_is_car_type(#[case] name: &str) {
        assert!(is_car_type(name));
    }

    #[test]
    fn test_car_types() {
        assert_eq!(car_types().collect::<Vec<_>>(), vec!["BaseCar", "MonsterTruck"]);
        assert_eq!(car_types_joined("/"), "BaseCar/MonsterTruck");
    }

    #[rstest]
    #[case("BaseCar")]
    #[case("MonsterTruck")]
    fn test_car_types_are_registered(#[case] name: &str) {
        assert!(car_types().any(|t| t == name));
        assert_eq!(
            car_factory(name, pose!(0, 0, North)).unwrap().drivetrain().name(),
            name
        );
        assert!(FactoryError::UnknownCarType("tank".to_string())
            .to_string()
            .contains(name));
    }
}
