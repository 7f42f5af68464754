//! Text rendering of simulation reports.

use std::collections::HashSet;

use crate::{
    domain::{Heading, Room},
    simulator::{Report, Status},
};

/// One-line description of the outcome.
pub fn summary(report: &Report, room: &Room) -> String {
    let pose = report.pose;
    match report.status {
        Status::Completed => format!(
            "Completed: car is at ({}, {}) heading {}",
            pose.x(),
            pose.y(),
            pose.heading()
        ),
        Status::HaltedAtBoundary {
            index,
            command,
            attempted,
        } => format!(
            "Halted at command {} ({command}): ({}, {}) is outside the {}x{} room; car stays at ({}, {}) heading {}",
            index + 1,
            attempted.x(),
            attempted.y(),
            room.width(),
            room.length(),
            pose.x(),
            pose.y(),
            pose.heading()
        ),
    }
}

/// Rooms with more cells than this are not drawn.
pub const MAP_MAX_CELLS: i64 = 10_000;

/// Top-down map of the room. The first row is the far (north) wall.
///
/// Returns `None` if the room has more than [`MAP_MAX_CELLS`] cells.
pub fn map(room: &Room, report: &Report) -> Option<String> {
    if i64::from(room.width()) * i64::from(room.length()) > MAP_MAX_CELLS {
        return None;
    }

    let visited = report
        .trail
        .iter()
        .map(|p| (p.x(), p.y()))
        .collect::<HashSet<_>>();
    let car = (report.pose.x(), report.pose.y());

    let rows = (0..room.length())
        .rev()
        .map(|y| {
            (0..room.width())
                .map(|x| {
                    let glyph = if (x, y) == car {
                        car_glyph(report.pose.heading())
                    } else if visited.contains(&(x, y)) {
                        'o'
                    } else {
                        '.'
                    };
                    glyph.to_string()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>();
    Some(rows.join("\n"))
}

fn car_glyph(heading: Heading) -> char {
    match heading {
        Heading::North => '^',
        Heading::East => '>',
        Heading::South => 'v',
        Heading::West => '<',
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{
        domain::{BaseCar, Car},
        simulator::Simulation,
        tests::commands,
    };

    fn simulate(room: &Room, car: &mut Car, input: &str) -> Report {
        Simulation::new(room, car).run(&commands(input))
    }

    #[test]
    fn test_summary_completed() {
        let room = Room::new(3, 3).unwrap();
        let mut car = Car::new(pose!(1, 1, East), Box::new(BaseCar));
        let report = simulate(&room, &mut car, "RFRFRFRF");
        insta::assert_snapshot!(summary(&report, &room), @"Completed: car is at (1, 1) heading E");
    }

    #[test]
    fn test_summary_halted() {
        let room = Room::new(5, 5).unwrap();
        let mut car = Car::new(pose!(0, 0, North), Box::new(BaseCar));
        let report = simulate(&room, &mut car, "FFFFF");
        insta::assert_snapshot!(
            summary(&report, &room),
            @"Halted at command 5 (F): (0, 5) is outside the 5x5 room; car stays at (0, 4) heading N"
        );
    }

    #[test]
    fn test_map_square() {
        let room = Room::new(3, 3).unwrap();
        let mut car = Car::new(pose!(1, 1, East), Box::new(BaseCar));
        let report = simulate(&room, &mut car, "RFRFRFRF");
        insta::assert_snapshot!(map(&room, &report).unwrap(), @r"
        . . .
        o > .
        o o .
        ");
    }

    #[test]
    fn test_map_halted() {
        let room = Room::new(4, 2).unwrap();
        let mut car = Car::new(pose!(0, 0, East), Box::new(BaseCar));
        let report = simulate(&room, &mut car, "FFLFLFFFF");
        insta::assert_snapshot!(map(&room, &report).unwrap(), @r"
        < o o .
        o o o .
        ");
    }

    #[test]
    fn test_map_without_commands() {
        let room = Room::new(2, 1).unwrap();
        let mut car = Car::new(pose!(1, 0, South), Box::new(BaseCar));
        let report = simulate(&room, &mut car, "");
        insta::assert_snapshot!(map(&room, &report).unwrap(), @". v");
    }

    #[rstest]
    #[case::largest_drawn(100, 100, true)]
    #[case::one_row_too_many(100, 101, false)]
    #[case::huge(100_000, 100_000, false)]
    #[case::max_dimensions(i32::MAX, i32::MAX, false)]
    fn test_map_size_limit(#[case] width: i32, #[case] length: i32, #[case] drawn: bool) {
        let room = Room::new(width, length).unwrap();
        let mut car = Car::new(pose!(0, 0, North), Box::new(BaseCar));
        let report = simulate(&room, &mut car, "FRF");
        let drawing = map(&room, &report);
        assert_eq!(drawing.is_some(), drawn);
        if let Some(drawing) = drawing {
            assert_eq!(drawing.lines().count(), length as usize);
        }
    }
}
