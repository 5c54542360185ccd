use super::rank::Rank;
use super::suit::Suit;
use runout_core::DECK_SIZE;

/// A playing card, stored as its index `rank * 4 + suit` in `0..52`.
///
/// The index is also the card's bit in a [`Hand`], so cards of one rank sit
/// in one nibble and walking bit positions upward walks ranks upward.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 >> 2)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 & 0b11)
    }
    /// Reads back-to-back two-character cards, e.g. `"AsKd 2c"`.
    /// Whitespace anywhere is ignored.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .collect::<Vec<char>>()
            .chunks(2)
            .map(|pair| Self::try_from(pair.iter().collect::<String>().as_str()))
            .collect()
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self(u8::from(rank) << 2 | u8::from(suit))
    }
}

impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!((n as usize) < DECK_SIZE, "card index out of range: {}", n);
        Self(n)
    }
}

/// the card's single bit
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << c.0
    }
}

impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => {
                let rank = Rank::try_from(r.to_string().as_str())?;
                let suit = Suit::try_from(u.to_string().as_str())?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("invalid card str: {}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}
