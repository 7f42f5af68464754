//! Collection and validation of user input.
//!
//! Every value is read as a line of text and parsed into a domain value. Interactive prompts are
//! repeated until the input is valid, so the simulation itself never sees malformed input.

use std::{
    io::{self, BufRead, Write},
    num::ParseIntError,
};

use console::style;
use log::debug;
use thiserror::Error;

use crate::{
    domain::{Command, CommandError, Heading, HeadingError, Pose, Room, RoomError},
    factory::{self, FactoryError},
};

#[derive(Error, Debug, Eq, PartialEq)]
pub enum InputError {
    #[error("you must enter exactly two integers")]
    RoomSizeFormat,
    #[error("you must enter exactly two integers followed by one direction (N/E/S/W)")]
    StartPositionFormat,
    #[error("'{0}' is not an integer")]
    NotAnInteger(String, #[source] ParseIntError),
    #[error("starting position ({x}, {y}) must be within the {width}x{length} room")]
    OutsideRoom {
        x: i32,
        y: i32,
        width: i32,
        length: i32,
    },
    #[error(transparent)]
    Factory(#[from] FactoryError),
    #[error(transparent)]
    Room(#[from] RoomError),
    #[error(transparent)]
    Heading(#[from] HeadingError),
    #[error(transparent)]
    Command(#[from] CommandError),
}

fn parse_integer(token: &str) -> Result<i32, InputError> {
    token
        .parse()
        .map_err(|e| InputError::NotAnInteger(token.to_string(), e))
}

/// Returns the lowercase name of a registered car type.
pub fn parse_car_type(line: &str) -> Result<String, InputError> {
    let name = line.trim().to_lowercase();
    if factory::is_car_type(&name) {
        Ok(name)
    } else {
        Err(FactoryError::UnknownCarType(line.trim().to_string()).into())
    }
}

pub fn parse_room_size(line: &str) -> Result<Room, InputError> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    let [width, length] = tokens[..] else {
        return Err(InputError::RoomSizeFormat);
    };
    Ok(Room::new(parse_integer(width)?, parse_integer(length)?)?)
}

pub fn parse_start_position(line: &str, room: &Room) -> Result<Pose, InputError> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    let [x, y, heading] = tokens[..] else {
        return Err(InputError::StartPositionFormat);
    };
    let (x, y) = (parse_integer(x)?, parse_integer(y)?);
    let heading: Heading = heading.parse()?;
    if !room.contains(x, y) {
        return Err(InputError::OutsideRoom {
            x,
            y,
            width: room.width(),
            length: room.length(),
        });
    }
    Ok(Pose::new(x, y, heading))
}

/// Parses a case-insensitive command string. Only the line ending is stripped, any other
/// character outside F, B, L, R is rejected. An empty string is a valid, empty sequence.
pub fn parse_commands(line: &str) -> Result<Vec<Command>, InputError> {
    Ok(line
        .trim_end_matches(['\r', '\n'])
        .chars()
        .map(Command::try_from)
        .collect::<Result<Vec<_>, _>>()?)
}

/// Asks questions on `output` and reads the answers line by line from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Repeats the question until `parse` accepts the answer.
    pub fn ask<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> io::Result<T> {
        loop {
            write!(self.output, "{question}: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("no answer to '{question}'"),
                ));
            }

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("rejected input {:?}: {e}", line.trim_end());
                    writeln!(self.output, "{} {e}", style("Invalid input:").red())?;
                }
            }
        }
    }

    pub fn car_type(&mut self) -> io::Result<String> {
        let question = format!(
            "Enter the type of car to simulate ({})",
            factory::car_types_joined("/")
        );
        self.ask(&question, parse_car_type)
    }

    pub fn room_size(&mut self) -> io::Result<Room> {
        self.ask("Enter the size of the room (X Y)", parse_room_size)
    }

    pub fn start_position(&mut self, room: &Room) -> io::Result<Pose> {
        self.ask(
            "Enter the starting position and heading of the car (X Y N/E/S/W)",
            |line| parse_start_position(line, room),
        )
    }

    pub fn commands(&mut self) -> io::Result<Vec<Command>> {
        self.ask(
            "Enter commands the car should execute (F/B/L/R)",
            parse_commands,
        )
    }
}
