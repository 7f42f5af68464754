//! Cars and the movement rules of their drivetrains.

use std::fmt;

use super::{Command, Pose, Rotation};

/// Movement rules of a car variant.
///
/// A drivetrain only computes the candidate pose for a command. It knows nothing about the room,
/// so checking the candidate against the boundaries is up to the caller. A variant that cannot
/// execute a command returns the pose unchanged.
pub trait Drivetrain: fmt::Debug {
    fn name(&self) -> &'static str;

    fn next_pose(&self, pose: Pose, command: Command) -> Pose {
        match command {
            Command::Forward => self.advance(pose, 1),
            Command::Backward => self.advance(pose, -1),
            Command::Left => self.turn(pose, Rotation::CounterClockwise),
            Command::Right => self.turn(pose, Rotation::Clockwise),
        }
    }

    /// `direction` is `1` for forward and `-1` for backward.
    fn advance(&self, pose: Pose, direction: i32) -> Pose {
        pose.advanced(direction)
    }

    fn turn(&self, pose: Pose, rotation: Rotation) -> Pose {
        pose.turned(rotation)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BaseCar;

impl Drivetrain for BaseCar {
    fn name(&self) -> &'static str {
        "BaseCar"
    }
}

/// Heavier variant. It currently drives like the base car.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MonsterTruck;

impl Drivetrain for MonsterTruck {
    fn name(&self) -> &'static str {
        "MonsterTruck"
    }
}

#[derive(Debug)]
pub struct Car {
    pose: Pose,
    drivetrain: Box<dyn Drivetrain>,
}

impl Car {
    pub fn new(pose: Pose, drivetrain: Box<dyn Drivetrain>) -> Self {
        Self { pose, drivetrain }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn drivetrain(&self) -> &dyn Drivetrain {
        self.drivetrain.as_ref()
    }

    pub fn next_pose(&self, pose: Pose, command: Command) -> Pose {
        self.drivetrain.next_pose(pose, command)
    }

    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }
}
