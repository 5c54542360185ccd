use crate::seat::Seat;
use runout_cards::*;

/// One entry of a showdown result: a seat that took (a share of) the pot,
/// and the category of its best five-card hand.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Winner {
    seat: Seat,
    category: Category,
}

impl Winner {
    pub fn seat(&self) -> Seat {
        self.seat
    }
    pub fn category(&self) -> Category {
        self.category
    }
}

impl From<(Seat, Category)> for Winner {
    fn from((seat, category): (Seat, Category)) -> Self {
        Self { seat, category }
    }
}

/// Ranks every hole against a complete board and names the winners.
///
/// The enumeration engine never ranks hands itself; it only asks an Oracle.
/// Implementations must return at least one winner, and every winner's seat
/// must index into `holes`. More than one winner means a split.
///
/// Any `Fn(Hand, &[Hole]) -> Vec<Winner>` is an Oracle, which makes scripted
/// doubles a one-liner.
pub trait Oracle {
    fn showdown(&self, board: Hand, holes: &[Hole]) -> Vec<Winner>;
}

impl<F> Oracle for F
where
    F: Fn(Hand, &[Hole]) -> Vec<Winner>,
{
    fn showdown(&self, board: Hand, holes: &[Hole]) -> Vec<Winner> {
        self(board, holes)
    }
}
