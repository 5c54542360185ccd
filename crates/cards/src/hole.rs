use super::card::Card;
use super::hand::Hand;
use runout_core::HOLE_SIZE;

/// A player's two private cards.
///
/// Always exactly two distinct cards; every constructor checks.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    pub fn cards(&self) -> (Card, Card) {
        let mut cards = self.0;
        match (cards.next(), cards.next()) {
            (Some(lo), Some(hi)) => (lo, hi),
            _ => unreachable!("hole holds two cards"),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (lo, hi) = self.cards();
        write!(f, "{}{}", hi, lo)
    }
}

impl TryFrom<Hand> for Hole {
    type Error = String;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            HOLE_SIZE => Ok(Self(hand)),
            n => Err(format!("hole needs {} cards, got {}", HOLE_SIZE, n)),
        }
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl TryFrom<(Card, Card)> for Hole {
    type Error = String;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        if a == b {
            Err(format!("card {} is duplicated", a))
        } else {
            Ok(Self(Hand::from(vec![a, b])))
        }
    }
}

/// str isomorphism, e.g. "AsKd"
impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Card::parse(s)?.as_slice() {
            &[a, b] => Self::try_from((a, b)),
            _ => Err(format!("{} is not a valid hand, hands must have 2 cards", s)),
        }
    }
}
