use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use rand::seq::IteratorRandom;

/// Undealt cards, for dealing random disjoint tables in tests and benches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Hand::full())
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Takes one card uniformly at random. Panics on an empty deck.
    pub fn draw(&mut self) -> Card {
        let card = self
            .0
            .choose(&mut rand::rng())
            .expect("draw from an empty deck");
        self.0 = self.0.toggle(card);
        card
    }
    pub fn deal(&mut self, n: usize) -> Hand {
        (0..n).map(|_| self.draw()).collect()
    }
    pub fn hole(&mut self) -> Hole {
        let (a, b) = (self.draw(), self.draw());
        Hole::try_from((a, b)).expect("two draws are distinct")
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_are_removed() {
        let mut deck = Deck::new();
        let card = deck.draw();
        assert!(!deck.contains(&card));
        assert_eq!(Hand::from(deck).size(), 51);
    }

    #[test]
    fn deal_is_disjoint() {
        let mut deck = Deck::new();
        let a = deck.deal(5);
        let b = Hand::from(deck.hole());
        assert_eq!(a.size(), 5);
        assert!(a.intersection(b).is_empty());
        assert_eq!(Hand::from(deck).size(), 45);
    }

    #[test]
    fn drains_completely() {
        let mut deck = Deck::from(Hand::try_from("As Kd").unwrap());
        let both = Hand::from(vec![deck.draw(), deck.draw()]);
        assert_eq!(both, Hand::try_from("As Kd").unwrap());
        assert!(Hand::from(deck).is_empty());
    }
}
