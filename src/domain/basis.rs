//! Basic building blocks.

use std::fmt;

use nalgebra::Vector2;
use rand::{
    distr::{Distribution, StandardUniform},
    Rng,
};
use thiserror::Error;

/// Position on the integer grid together with the direction the car is facing.
///
/// Poses are values. Moving or turning yields a new pose, the original is never modified.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Pose {
    x: i32,
    y: i32,
    heading: Heading,
}

impl Pose {
    pub const fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self { x, y, heading }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Move `distance` grid units along the heading. Negative distances move backwards.
    pub fn advanced(&self, distance: i32) -> Pose {
        let offset = self.heading.unit_vector() * distance;
        Pose::new(self.x + offset.x, self.y + offset.y, self.heading)
    }

    pub fn turned(&self, rotation: Rotation) -> Pose {
        Pose::new(self.x, self.y, self.heading.turned(rotation))
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.heading)
    }
}

/// Cardinal heading, ordered clockwise starting at north.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    pub fn turned(self, rotation: Rotation) -> Heading {
        let steps = match rotation {
            Rotation::Clockwise => 1,
            Rotation::CounterClockwise => 3,
        };
        HEADINGS_CLOCKWISE[(self as usize + steps) % HEADINGS_CLOCKWISE.len()]
    }

    /// Displacement of a single forward step. North is the positive y-axis.
    pub fn unit_vector(self) -> Vector2<i32> {
        match self {
            Heading::North => Vector2::new(0, 1),
            Heading::East => Vector2::new(1, 0),
            Heading::South => Vector2::new(0, -1),
            Heading::West => Vector2::new(-1, 0),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

static HEADINGS_CLOCKWISE: [Heading; 4] = [
    Heading::North,
    Heading::East,
    Heading::South,
    Heading::West,
];

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<char> for Heading {
    type Error = HeadingError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            _ => Err(HeadingError::InvalidHeading(value.to_string())),
        }
    }
}

impl std::str::FromStr for Heading {
    type Err = HeadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Heading::try_from(c),
            _ => Err(HeadingError::InvalidHeading(s.to_string())),
        }
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum HeadingError {
    #[error("direction must be one of 'N', 'E', 'S', 'W', got '{0}'")]
    InvalidHeading(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// A single instruction for the car.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Command {
    Forward,
    Backward,
    Left,
    Right,
}

impl Command {
    pub fn letter(self) -> char {
        match self {
            Command::Forward => 'F',
            Command::Backward => 'B',
            Command::Left => 'L',
            Command::Right => 'R',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<char> for Command {
    type Error = CommandError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'F' => Ok(Command::Forward),
            'B' => Ok(Command::Backward),
            'L' => Ok(Command::Left),
            'R' => Ok(Command::Right),
            _ => Err(CommandError::InvalidCommand(value)),
        }
    }
}

impl Distribution<Command> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Command {
        match rng.random_range(0..4) {
            0 => Command::Forward,
            1 => Command::Backward,
            2 => Command::Left,
            _ => Command::Right,
        }
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum CommandError {
    #[error("commands can only include 'F', 'B', 'L', or 'R', got '{0}'")]
    InvalidCommand(char),
}
