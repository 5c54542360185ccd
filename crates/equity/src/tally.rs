use runout_cards::Category;
use runout_core::Count;
use runout_core::Percentage;

/// One player's running record over a calculation.
///
/// A runout adds at most one of {win, tie} and, alongside it, exactly one
/// category occurrence, so the category counters always sum to
/// `wins + ties`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tally {
    wins: Count,
    ties: Count,
    categories: [Count; Category::COUNT],
}

impl Tally {
    pub fn wins(&self) -> Count {
        self.wins
    }
    pub fn ties(&self) -> Count {
        self.ties
    }
    /// runouts this player won outright or split
    pub fn showdowns(&self) -> Count {
        self.wins + self.ties
    }
    /// times this player won or split holding `category`
    pub fn count(&self, category: Category) -> Count {
        self.categories[category.index()]
    }

    pub(crate) fn win(&mut self, category: Category) {
        self.wins += 1;
        self.categories[category.index()] += 1;
    }
    pub(crate) fn tie(&mut self, category: Category) {
        self.ties += 1;
        self.categories[category.index()] += 1;
    }

    /// wins / total × 100. undefined when nothing was enumerated.
    pub fn win_percentage(&self, total: Count) -> Option<Percentage> {
        Self::percentage(self.wins, total)
    }
    /// ties / total × 100. undefined when nothing was enumerated.
    pub fn tie_percentage(&self, total: Count) -> Option<Percentage> {
        Self::percentage(self.ties, total)
    }
    /// (wins + ties) / total × 100
    pub fn equity(&self, total: Count) -> Option<Percentage> {
        Self::percentage(self.showdowns(), total)
    }
    /// share of this player's wins and ties made with `category`.
    ///
    /// `None` when the player never won or tied: that is "never happened",
    /// which is not the same thing as 0%.
    pub fn category_percentage(&self, category: Category) -> Option<Percentage> {
        Self::percentage(self.count(category), self.showdowns())
    }

    fn percentage(n: Count, total: Count) -> Option<Percentage> {
        match total {
            0 => None,
            _ => Some(n as Percentage / total as Percentage * 100.0),
        }
    }
}
