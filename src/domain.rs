//! The domain module encapsulates the core business logic. It defines the `Car` and `Room`
//! entities, along with the rules governing how a car moves on the grid.
//!
//! The module performs no I/O. Everything it receives has already been validated, so the only
//! errors it knows about are the ones raised while constructing its values.

mod basis;
mod car;
mod room;

pub use basis::{Command, CommandError, Heading, HeadingError, Pose, Rotation};
pub use car::{BaseCar, Car, Drivetrain, MonsterTruck};
pub use room::{Room, RoomError};
