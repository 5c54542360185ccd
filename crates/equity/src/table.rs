use crate::seat::Seat;
use anyhow::bail;
use anyhow::ensure;
use runout_cards::*;
use runout_core::MAX_SEATS;

/// Validated input for one calculation.
///
/// Holds at least one and at most [`MAX_SEATS`] holes, pairwise disjoint and
/// disjoint from the board. Everything downstream trusts these invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    holes: Vec<Hole>,
    board: Board,
}

impl Table {
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }
    pub fn board(&self) -> Board {
        self.board
    }
    pub fn hole(&self, seat: Seat) -> Hole {
        self.holes[usize::from(seat)]
    }
    pub fn seats(&self) -> impl Iterator<Item = Seat> + '_ {
        (0..self.holes.len()).map(Seat::from)
    }
    pub fn n(&self) -> usize {
        self.holes.len()
    }
    /// every card committed before enumeration, holes and board alike
    pub fn dead(&self) -> Hand {
        self.holes
            .iter()
            .copied()
            .map(Hand::from)
            .fold(Hand::from(self.board), Hand::add)
    }
    /// board slots left to fill
    pub fn missing(&self) -> usize {
        self.board.missing()
    }
}

impl TryFrom<(Vec<Hole>, Board)> for Table {
    type Error = anyhow::Error;
    fn try_from((holes, board): (Vec<Hole>, Board)) -> Result<Self, Self::Error> {
        ensure!(!holes.is_empty(), "at least one hand is needed");
        ensure!(
            holes.len() <= MAX_SEATS,
            "at most {} hands fit in one deck, got {}",
            MAX_SEATS,
            holes.len()
        );
        let mut seen = Hand::from(board);
        for hole in holes.iter().copied().map(Hand::from) {
            if let Some(card) = seen.intersection(hole).next() {
                bail!("card {} is duplicated", card);
            }
            seen = Hand::add(seen, hole);
        }
        Ok(Self { holes, board })
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for hole in self.holes.iter() {
            write!(f, "{} ", hole)?;
        }
        write!(f, "~ {}", self.board)
    }
}
