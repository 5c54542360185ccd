use super::card::Card;
use super::hand::Hand;
use runout_core::BOARD_SIZE;

/// The community cards known before enumeration starts.
///
/// Anywhere from zero (preflop) to five (river) cards.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Board(Hand);

impl Board {
    pub fn empty() -> Self {
        Self(Hand::empty())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// slots still to be dealt
    pub fn missing(&self) -> usize {
        BOARD_SIZE - self.size()
    }
}

impl TryFrom<Hand> for Board {
    type Error = String;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            n if n <= BOARD_SIZE => Ok(Self(hand)),
            _ => Err(format!("maximum cards in board are {}", BOARD_SIZE)),
        }
    }
}
impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

/// str isomorphism, e.g. "2c3c4c"
impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s)?;
        let hand = Hand::from(cards.clone());
        match cards.iter().find(|&&c| cards.iter().filter(|&&x| x == c).count() > 1) {
            Some(card) => Err(format!("card {} is duplicated", card)),
            None => Self::try_from(hand),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
