use super::rank::Rank;

/// Value of the best five cards before kickers.
///
/// Variants are declared weakest first so the derived order is the showdown
/// order; the carried ranks break ties within a variant.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),
    OnePair(Rank),
    TwoPair(Rank, Rank),
    ThreeOAK(Rank),
    Straight(Rank),
    Flush(Rank),
    FullHouse(Rank, Rank),
    FourOAK(Rank),
    StraightFlush(Rank),
}

impl Ranking {
    /// cards still needed to fill five
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::TwoPair(..) | Ranking::FourOAK(_) => 1,
            Ranking::Straight(_) | Ranking::FullHouse(..) | Ranking::StraightFlush(_) => 0,
        }
    }

    /// rank set a kicker may come from
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(r)
            | Ranking::OnePair(r)
            | Ranking::ThreeOAK(r)
            | Ranking::Flush(r)
            | Ranking::FourOAK(r) => !u16::from(r),
            Ranking::Straight(_) | Ranking::FullHouse(..) | Ranking::StraightFlush(_) => 0,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Ranking::HighCard(_) => "HighCard",
            Ranking::OnePair(_) => "OnePair",
            Ranking::TwoPair(..) => "TwoPair",
            Ranking::ThreeOAK(_) => "ThreeOfAKind",
            Ranking::Straight(_) => "Straight",
            Ranking::Flush(_) => "Flush",
            Ranking::FullHouse(..) => "FullHouse",
            Ranking::FourOAK(_) => "FourOfAKind",
            Ranking::StraightFlush(_) => "StraightFlush",
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<14}", self.name())?;
        match self {
            Ranking::TwoPair(a, b) | Ranking::FullHouse(a, b) => write!(f, "{}{}", a, b),
            Ranking::HighCard(r)
            | Ranking::OnePair(r)
            | Ranking::ThreeOAK(r)
            | Ranking::Straight(r)
            | Ranking::Flush(r)
            | Ranking::FourOAK(r)
            | Ranking::StraightFlush(r) => write!(f, "{} ", r),
        }
    }
}
