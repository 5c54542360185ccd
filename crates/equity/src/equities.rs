use crate::oracle::Winner;
use crate::seat::Seat;
use crate::tally::Tally;
use runout_core::Count;

/// Aggregated outcome of a calculation: how many runouts were examined and
/// one [`Tally`] per seat, indexed by seat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Equities {
    total: Count,
    tallies: Vec<Tally>,
}

impl Equities {
    pub fn new(n: usize) -> Self {
        assert!(n <= u64::BITS as usize, "seats are tracked in a u64");
        Self {
            total: 0,
            tallies: vec![Tally::default(); n],
        }
    }
    pub fn total(&self) -> Count {
        self.total
    }
    pub fn tallies(&self) -> &[Tally] {
        &self.tallies
    }
    pub fn tally(&self, seat: Seat) -> &Tally {
        &self.tallies[usize::from(seat)]
    }

    /// Folds one runout's showdown into the running totals.
    ///
    /// A seat named more than once counts once, with its first category.
    /// An empty answer or an unknown seat is a broken oracle and panics.
    pub fn absorb(&mut self, winners: &[Winner]) {
        assert!(!winners.is_empty(), "oracle named no winner");
        let n = self.tallies.len();
        let mut named = 0u64;
        for winner in winners {
            let seat = usize::from(winner.seat());
            assert!(seat < n, "oracle named unknown seat {}", winner.seat());
            named |= 1 << seat;
        }
        let sole = named.count_ones() == 1;
        let mut counted = 0u64;
        for winner in winners {
            let seat = usize::from(winner.seat());
            if counted & (1 << seat) != 0 {
                continue;
            }
            counted |= 1 << seat;
            let tally = &mut self.tallies[seat];
            if sole {
                tally.win(winner.category());
            } else {
                tally.tie(winner.category());
            }
        }
        self.total += 1;
    }
}
