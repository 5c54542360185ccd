use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

/// A5432: the ace plays low
const WHEEL: u16 = 0b1_0000_0000_1111;

/// Best five-card [`Ranking`] and [`Kickers`] of any set of cards.
///
/// Works on rank sets and per-rank card counts, trying the strongest
/// variant first. The flush suit, if any, is found once up front since
/// both flush variants and flush kickers need it.
pub struct Evaluator {
    hand: Hand,
    flush: Option<Suit>,
}

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        let flush = Suit::all()
            .into_iter()
            .find(|suit| hand.of(suit).size() >= 5);
        Self { hand, flush }
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        self.straight_flush()
            .or_else(|| self.quads())
            .or_else(|| self.full_house())
            .or_else(|| self.flush())
            .or_else(|| self.straight())
            .or_else(|| self.trips())
            .or_else(|| self.pairs())
            .or_else(|| self.high_card())
            .expect("at least one card in Hand")
    }

    /// highest ranks outside the made hand, as many as it leaves room for.
    /// flush kickers come from the flush suit only.
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        let pool = match (ranking, self.flush) {
            (Ranking::Flush(_), Some(suit)) => self.hand.of(&suit),
            _ => self.hand,
        };
        let mut ranks = u16::from(pool) & ranking.mask();
        while ranks.count_ones() as usize > ranking.n_kickers() {
            ranks &= ranks - 1;
        }
        Kickers::from(ranks)
    }

    fn straight_flush(&self) -> Option<Ranking> {
        self.flush
            .and_then(|suit| Self::straight_in(u16::from(self.hand.of(&suit))))
            .map(Ranking::StraightFlush)
    }
    fn quads(&self) -> Option<Ranking> {
        self.sets(4).next().map(Ranking::FourOAK)
    }
    fn full_house(&self) -> Option<Ranking> {
        let trips = self.sets(3).next()?;
        let pair = self.sets(2).find(|&r| r != trips)?;
        Some(Ranking::FullHouse(trips, pair))
    }
    fn flush(&self) -> Option<Ranking> {
        self.flush
            .map(|suit| Rank::from(u16::from(self.hand.of(&suit))))
            .map(Ranking::Flush)
    }
    fn straight(&self) -> Option<Ranking> {
        Self::straight_in(u16::from(self.hand)).map(Ranking::Straight)
    }
    fn trips(&self) -> Option<Ranking> {
        self.sets(3).next().map(Ranking::ThreeOAK)
    }
    fn pairs(&self) -> Option<Ranking> {
        let mut pairs = self.sets(2);
        match (pairs.next(), pairs.next()) {
            (Some(hi), Some(lo)) => Some(Ranking::TwoPair(hi, lo)),
            (Some(hi), None) => Some(Ranking::OnePair(hi)),
            _ => None,
        }
    }
    fn high_card(&self) -> Option<Ranking> {
        self.sets(1).next().map(Ranking::HighCard)
    }

    /// ranks held at least `n` times, highest first
    fn sets(&self, n: u32) -> impl Iterator<Item = Rank> + '_ {
        let bits = u64::from(self.hand);
        Rank::all()
            .into_iter()
            .rev()
            .filter(move |&rank| (bits & u64::from(rank)).count_ones() >= n)
    }

    /// top rank of the highest five-long run in a rank set.
    /// bit `r` of `runs` survives only if ranks `r-4..=r` are all held
    fn straight_in(ranks: u16) -> Option<Rank> {
        let runs = (1..5).fold(ranks, |runs, i| runs & (ranks << i));
        match runs {
            0 if ranks & WHEEL == WHEEL => Some(Rank::Five),
            0 => None,
            _ => Some(Rank::from(runs)),
        }
    }
}
