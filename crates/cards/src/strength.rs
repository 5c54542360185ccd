use super::category::Category;
use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// A fully-evaluated hand strength for comparison.
///
/// Combines a [`Ranking`] (hand category like flush or two pair) with
/// [`Kickers`] (tie-breaking cards). Ordering is lexicographic: ranking
/// first, then kickers. Equal strengths split the pot.
///
/// Constructed from a [`Hand`] by running the [`Evaluator`].
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    ranking: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
    pub fn category(&self) -> Category {
        Category::from(self.ranking)
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(e: Evaluator) -> Self {
        let ranking = e.find_ranking();
        let kicks = e.find_kickers(ranking);
        Self::from((ranking, kicks))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kicks): (Ranking, Kickers)) -> Self {
        Self { ranking, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{:>5}", self.ranking, self.kicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(s: &str) -> Strength {
        Strength::from(Hand::try_from(s).unwrap())
    }

    #[test]
    fn kickers_break_ties() {
        assert!(strength("As Ad Kc 7h 4s 3d 2c") > strength("Ah Ac Qc 7d 4h 3s 2d"));
    }

    #[test]
    fn board_plays_for_both() {
        let board = "Ts Js Qs Ks As";
        assert_eq!(strength(&format!("{} 2c 3d", board)), strength(&format!("{} 4c 5d", board)));
    }

    #[test]
    fn second_flush_card_decides() {
        assert!(strength("Ah Kh 9h 5h 2h Qc Jc") > strength("Ah Qh Jh Th 8h 2c 3c"));
    }
}
