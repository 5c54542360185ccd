use super::rank::Rank;

/// Tie-breaking ranks left over once the made hand is set aside.
///
/// A `u16` rank set, so the derived order compares the highest kicker first
/// and works down.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n)
    }
}
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}

impl From<&[Rank]> for Kickers {
    fn from(ranks: &[Rank]) -> Self {
        Self(ranks.iter().fold(0, |set, &r| set | u16::from(r)))
    }
}

/// ascending
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        Rank::all()
            .into_iter()
            .filter(|&r| k.0 & u16::from(r) != 0)
            .collect()
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        Vec::<Rank>::from(*self)
            .into_iter()
            .rev()
            .try_for_each(|rank| write!(f, "{}", rank))
    }
}
