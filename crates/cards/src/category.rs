use super::rank::Rank;
use super::ranking::Ranking;

/// Made-hand category of a best five-card hand, weakest to strongest.
///
/// Coarser than [`Ranking`]: ranks are dropped, except that an ace-high
/// straight flush is reported as its own top tier.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const COUNT: usize = 10;

    pub const fn all() -> [Category; Self::COUNT] {
        [
            Category::HighCard,
            Category::OnePair,
            Category::TwoPair,
            Category::ThreeOfAKind,
            Category::Straight,
            Category::Flush,
            Category::FullHouse,
            Category::FourOfAKind,
            Category::StraightFlush,
            Category::RoyalFlush,
        ]
    }
    /// dense slot for per-category counters
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl From<Ranking> for Category {
    fn from(ranking: Ranking) -> Self {
        match ranking {
            Ranking::HighCard(_) => Category::HighCard,
            Ranking::OnePair(_) => Category::OnePair,
            Ranking::TwoPair(..) => Category::TwoPair,
            Ranking::ThreeOAK(_) => Category::ThreeOfAKind,
            Ranking::Straight(_) => Category::Straight,
            Ranking::Flush(_) => Category::Flush,
            Ranking::FullHouse(..) => Category::FullHouse,
            Ranking::FourOAK(_) => Category::FourOfAKind,
            Ranking::StraightFlush(Rank::Ace) => Category::RoyalFlush,
            Ranking::StraightFlush(_) => Category::StraightFlush,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Category::HighCard => write!(f, "high card"),
            Category::OnePair => write!(f, "pair"),
            Category::TwoPair => write!(f, "two pair"),
            Category::ThreeOfAKind => write!(f, "three of a kind"),
            Category::Straight => write!(f, "straight"),
            Category::Flush => write!(f, "flush"),
            Category::FullHouse => write!(f, "full house"),
            Category::FourOfAKind => write!(f, "four of a kind"),
            Category::StraightFlush => write!(f, "straight flush"),
            Category::RoyalFlush => write!(f, "royal flush"),
        }
    }
}
