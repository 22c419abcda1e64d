use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A seat coordinate inside a cinema hall, both components 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Seat {
    pub row: i32,
    pub seat: i32,
}

impl Seat {
    pub fn new(row: i32, seat: i32) -> Self {
        Self { row, seat }
    }
}

impl Display for Seat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "row {}, seat {}", self.row, self.seat)
    }
}

impl From<(i32, i32)> for Seat {
    fn from((row, seat): (i32, i32)) -> Self {
        Self { row, seat }
    }
}

/// Dimensions of a cinema hall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HallLayout {
    pub rows: i32,
    pub seats_in_row: i32,
}

/// Which coordinate of a [`Seat`] fell outside the hall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatOutOfRange {
    Row { max: i32 },
    Seat { max: i32 },
}

impl Display for SeatOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Row { max } => write!(f, "row must be in range [1, {max}]"),
            Self::Seat { max } => write!(f, "seat must be in range [1, {max}]"),
        }
    }
}

impl HallLayout {
    pub fn new(rows: i32, seats_in_row: i32) -> Self {
        Self { rows, seats_in_row }
    }

    /// Total number of seats; derived, never stored
    pub fn capacity(&self) -> i64 {
        i64::from(self.rows) * i64::from(self.seats_in_row)
    }

    /// Checks that the seat lies within the hall, reporting every bad coordinate
    pub fn check(&self, seat: Seat) -> Vec<SeatOutOfRange> {
        let mut problems = Vec::new();
        if !(1..=self.rows).contains(&seat.row) {
            problems.push(SeatOutOfRange::Row { max: self.rows });
        }
        if !(1..=self.seats_in_row).contains(&seat.seat) {
            problems.push(SeatOutOfRange::Seat {
                max: self.seats_in_row,
            });
        }
        problems
    }

    pub fn contains(&self, seat: Seat) -> bool {
        self.check(seat).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity() {
        assert_eq!(HallLayout::new(10, 12).capacity(), 120);
        assert_eq!(HallLayout::new(1, 1).capacity(), 1);
        assert_eq!(
            HallLayout::new(i32::MAX, 2).capacity(),
            i64::from(i32::MAX) * 2
        );
    }

    #[test]
    fn test_bounds() {
        let hall = HallLayout::new(5, 8);
        assert!(hall.contains(Seat::new(1, 1)));
        assert!(hall.contains(Seat::new(5, 8)));
        assert_eq!(
            hall.check(Seat::new(6, 1)),
            vec![SeatOutOfRange::Row { max: 5 }]
        );
        assert_eq!(
            hall.check(Seat::new(0, 9)),
            vec![SeatOutOfRange::Row { max: 5 }, SeatOutOfRange::Seat { max: 8 }]
        );
    }

    #[test]
    fn test_out_of_range_messages() {
        assert_eq!(
            SeatOutOfRange::Row { max: 5 }.to_string(),
            "row must be in range [1, 5]"
        );
        assert_eq!(Seat::new(2, 3).to_string(), "row 2, seat 3");
    }
}
