/// Card rank, deuce low and ace high.
///
/// The discriminant is the rank's slot in both mask layouts used here:
/// bit `r` of a `u16` rank set, nibble `r` of a `u64` card set.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

const LETTERS: [char; 13] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

impl Rank {
    pub const fn all() -> [Rank; 13] {
        use Rank::*;
        [
            Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    }
    pub fn letter(&self) -> char {
        LETTERS[*self as usize]
    }
}

impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        assert!(n < 13, "rank index out of range: {}", n);
        Rank::all()[n as usize]
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// a rank set reads as its highest member
impl From<u16> for Rank {
    fn from(n: u16) -> Rank {
        assert!(n != 0, "empty rank set");
        Rank::from((u16::BITS - 1 - n.leading_zeros()) as u8)
    }
}
impl From<Rank> for u16 {
    fn from(r: Rank) -> u16 {
        1 << r as u16
    }
}

/// all four cards of the rank
impl From<Rank> for u64 {
    fn from(r: Rank) -> u64 {
        0xF << (4 * r as u64)
    }
}

/// `T`, `J`, `Q`, `K`, `A` in either case
impl TryFrom<&str> for Rank {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::all()
                .into_iter()
                .find(|rank| rank.letter() == c.to_ascii_uppercase())
                .ok_or_else(|| format!("invalid rank str: {}", s)),
            _ => Err(format!("invalid rank str: {}", s)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
