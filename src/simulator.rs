//! Simulation of a car executing commands in a room.
//!
//! For each command the car's drivetrain proposes a candidate pose, which is only committed if it
//! lies inside the room. The run stops at the first command that would take the car outside.

use log::{debug, info, trace};

use crate::domain::{Car, Command, Pose, Room};

pub struct Simulation<'a> {
    room: &'a Room,
    car: &'a mut Car,
}

impl<'a> Simulation<'a> {
    pub fn new(room: &'a Room, car: &'a mut Car) -> Self {
        Self { room, car }
    }

    pub fn run(&mut self, commands: &[Command]) -> Report {
        let mut pose = self.car.pose();
        let mut trail = vec![pose];
        let mut status = Status::Completed;

        debug!(
            "running {} commands with {} from {pose}",
            commands.len(),
            self.car.drivetrain().name()
        );

        for (index, &command) in commands.iter().enumerate() {
            let candidate = self.car.next_pose(pose, command);

            if !self.room.contains_pose(&candidate) {
                info!("command {index} ({command}) would leave the room at {candidate}, halting");
                status = Status::HaltedAtBoundary {
                    index,
                    command,
                    attempted: candidate,
                };
                break;
            }

            trace!("command {index} ({command}): {pose} -> {candidate}");
            pose = candidate;
            trail.push(pose);
        }

        self.car.set_pose(pose);

        Report {
            pose,
            status,
            trail,
        }
    }
}

/// Outcome of a simulation run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    pub pose: Pose,
    pub status: Status,
    /// Committed poses in order, starting with the pose before the first command.
    pub trail: Vec<Pose>,
}

impl Report {
    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Completed,
    HaltedAtBoundary {
        index: usize,
        command: Command,
        attempted: Pose,
    },
}
