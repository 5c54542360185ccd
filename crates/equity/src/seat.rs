/// A player's dense slot at the table.
///
/// Seats are handed out in input order, `0..n`, when a [`Table`] is built,
/// and index every per-player vector for the lifetime of a calculation.
///
/// [`Table`]: crate::Table
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat(usize);

impl From<usize> for Seat {
    fn from(n: usize) -> Self {
        Self(n)
    }
}
impl From<Seat> for usize {
    fn from(seat: Seat) -> Self {
        seat.0
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}
