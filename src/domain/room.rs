//! Rectangular room bounding the car.

use thiserror::Error;

use super::Pose;

/// The room spans the cells `0..width` along the x-axis and `0..length` along the y-axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Room {
    width: i32,
    length: i32,
}

impl Room {
    pub fn new(width: i32, length: i32) -> Result<Self, RoomError> {
        if width <= 0 || length <= 0 {
            return Err(RoomError::NonPositiveDimension { width, length });
        }
        Ok(Self { width, length })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.length).contains(&y)
    }

    pub fn contains_pose(&self, pose: &Pose) -> bool {
        self.contains(pose.x(), pose.y())
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum RoomError {
    #[error("room dimensions must be positive integers, got {width}x{length}")]
    NonPositiveDimension { width: i32, length: i32 },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 0)]
    #[case(4, 0)]
    #[case(0, 2)]
    #[case(4, 2)]
    #[case(2, 1)]
    fn test_room_contains(#[case] x: i32, #[case] y: i32) {
        let room = Room::new(5, 3).unwrap();
        assert!(room.contains(x, y));
    }

    #[rstest]
    #[case::left(-1, 0)]
    #[case::below(0, -1)]
    #[case::right(5, 0)]
    #[case::above(0, 3)]
    #[case::bottom_left(-1, -1)]
    #[case::bottom_right(5, -1)]
    #[case::top_left(-1, 3)]
    #[case::top_right(5, 3)]
    fn test_room_does_not_contain(#[case] x: i32, #[case] y: i32) {
        let room = Room::new(5, 3).unwrap();
        assert!(!room.contains(x, y));
    }

    #[test]
    fn test_room_contains_pose() {
        let room = Room::new(2, 2).unwrap();
        assert!(room.contains_pose(&pose!(1, 1, West)));
        assert!(!room.contains_pose(&pose!(0, -1, South)));
    }

    #[rstest]
    #[case(0, 5)]
    #[case(5, 0)]
    #[case(-3, 5)]
    #[case(5, -3)]
    fn test_room_non_positive_dimension(#[case] width: i32, #[case] length: i32) {
        assert_eq!(
            Room::new(width, length),
            Err(RoomError::NonPositiveDimension { width, length })
        );
    }

    #[test]
    fn test_room_dimensions() {
        let room = Room::new(7, 4).unwrap();
        assert_eq!((room.width(), room.length()), (7, 4));
    }
}
