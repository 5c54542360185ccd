use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// An unordered set of cards in one word.
///
/// Bit `i` of the low 52 bits is set when the card with index `i` is in the
/// set; the top 12 bits are always clear. Every operation returns a new
/// value, so a Hand is passed around by copy and never changes under anyone
/// holding it.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn full() -> Self {
        Self(Self::mask())
    }
    pub const fn mask() -> u64 {
        (1 << runout_core::DECK_SIZE) - 1
    }

    /// union of two sets known to be disjoint
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(lhs.0 & rhs.0 == 0, "overlapping hands {} and {}", lhs, rhs);
        Self(lhs.0 | rhs.0)
    }
    pub fn union(&self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
    pub fn difference(&self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
    pub fn intersection(&self, other: Self) -> Self {
        Self(self.0 & other.0)
    }
    pub fn complement(&self) -> Self {
        Self(!self.0 & Self::mask())
    }
    /// the same set with one card's membership flipped
    pub fn toggle(&self, card: Card) -> Self {
        Self(self.0 ^ u64::from(card))
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    /// the cards of one suit
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
}

/// drains lowest card first
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0 {
            0 => None,
            bits => {
                self.0 = bits & (bits - 1);
                Some(Card::from(bits.trailing_zeros() as u8))
            }
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size(), Some(self.size()))
    }
}

impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// ascending card order
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().fold(0, |bits, card| bits | u64::from(card)))
    }
}

/// ranks present, suits forgotten: bit `r` set if any card of rank `r` is held
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        Rank::all()
            .into_iter()
            .filter(|&rank| h.0 & u64::from(rank) != 0)
            .fold(0, |set, rank| set | u16::from(rank))
    }
}

/// repeated cards collapse into one
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(Hand::from)
    }
}

impl runout_core::Arbitrary for Hand {
    fn random() -> Self {
        Self::from(rand::random::<u64>())
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut cards = *self;
        cards.try_for_each(|card| write!(f, "{}", card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runout_core::Arbitrary;

    #[test]
    fn random_hands_stay_in_the_deck() {
        let hand = Hand::random();
        assert_eq!(u64::from(hand) & !Hand::mask(), 0);
        assert_eq!(hand.size(), hand.count());
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert_eq!(iter.next(), Some(Card::try_from("2c").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Ts").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Jc").unwrap()));
        assert_eq!(iter.next(), Some(Card::try_from("Js").unwrap()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn rank_sets_forget_suits() {
        let hand = Hand::try_from("2c 2d 9h Ks Kc").unwrap();
        assert_eq!(u16::from(hand), 0b1000_1000_0001);
        assert_eq!(u16::from(hand.of(&Suit::C)), 0b1000_0000_0001);
        assert_eq!(u16::from(hand.of(&Suit::H)), 0b0000_1000_0000);
        assert!(hand.of(&Suit::S).intersection(hand.of(&Suit::C)).is_empty());
    }

    #[test]
    fn toggle_is_an_involution() {
        let hand = Hand::random();
        let card = Card::from(17u8);
        let flipped = hand.toggle(card);
        assert_ne!(hand.contains(&card), flipped.contains(&card));
        assert_eq!(hand, flipped.toggle(card));
        assert_eq!(hand.size().abs_diff(flipped.size()), 1);
    }

    #[test]
    fn set_algebra() {
        let a = Hand::try_from("As Kd 2c").unwrap();
        let b = Hand::try_from("Kd 7h").unwrap();
        assert_eq!(a.union(b).size(), 4);
        assert_eq!(a.difference(b), Hand::try_from("As 2c").unwrap());
        assert_eq!(a.intersection(b), Hand::try_from("Kd").unwrap());
        assert_eq!(a.complement().size(), 49);
        assert!(a.complement().intersection(a).is_empty());
    }

    #[test]
    fn operations_do_not_mutate_operands() {
        let a = Hand::try_from("As Kd").unwrap();
        let before = a;
        let _ = a.toggle(Card::try_from("2c").unwrap());
        let _ = a.union(Hand::full());
        let _ = a.difference(a);
        assert_eq!(a, before);
    }

    #[test]
    #[should_panic]
    fn add_rejects_overlap() {
        let a = Hand::try_from("As Kd").unwrap();
        let _ = Hand::add(a, Hand::try_from("Kd").unwrap());
    }

    #[test]
    fn never_exceeds_universe() {
        assert_eq!(Hand::from(u64::MAX).size(), 52);
        assert_eq!(Hand::full().complement(), Hand::empty());
    }
}
