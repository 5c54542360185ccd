/// One of the four suits.
///
/// Suits never break ties. Their order (clubs, diamonds, hearts, spades)
/// is only the low two bits of a card index.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

const LETTERS: [char; 4] = ['c', 'd', 'h', 's'];
const SYMBOLS: [char; 4] = ['♣', '♦', '♥', '♠'];

impl Suit {
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
    pub fn letter(&self) -> char {
        LETTERS[*self as usize]
    }
    pub fn symbol(&self) -> char {
        SYMBOLS[*self as usize]
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        assert!(n < 4, "suit index out of range: {}", n);
        Suit::all()[n as usize]
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// every card of the suit: bit `s` of each rank's nibble
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x0001111111111111 << (s as u8)
    }
}

/// letter in either case, or the unicode symbol
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::all()
                .into_iter()
                .find(|suit| suit.letter() == c.to_ascii_lowercase() || suit.symbol() == c)
                .ok_or_else(|| format!("invalid suit str: {}", s)),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nibble_bits() {
        assert_eq!(u64::from(Suit::C) & 0xFF, 0b0001_0001);
        assert_eq!(u64::from(Suit::S) & 0xFF, 0b1000_1000);
        assert_eq!(u64::from(Suit::H).count_ones(), 13);
    }

    #[test]
    fn suits_partition_the_deck() {
        let union = Suit::all().iter().map(|&s| u64::from(s)).fold(0, |a, b| a | b);
        assert_eq!(union.count_ones(), 52);
    }

    #[test]
    fn parsing() {
        assert_eq!(Suit::try_from("H"), Ok(Suit::H));
        assert_eq!(Suit::try_from("♠"), Ok(Suit::S));
        assert!(Suit::try_from("x").is_err());
        assert!(Suit::try_from("cd").is_err());
    }
}
