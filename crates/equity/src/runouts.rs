use crate::table::Table;
use runout_cards::*;
use runout_core::Count;
use std::ops::ControlFlow;

/// Every way to finish the board from the undealt deck.
///
/// Ordered backtracking over card positions: each level picks a card strictly
/// above the previous pick, so each combination of `k` live cards is built
/// exactly once and lower positions are never revisited. A finished pick is
/// joined with the known board and handed to the visitor, then undone with a
/// single bit toggle before the search moves on.
///
/// - `k = 0` visits the known board once.
/// - fewer than `k` live cards visits nothing.
///
/// The walk is deterministic: the same inputs always produce the same runouts
/// in the same (ascending, lexicographic by position) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Runouts {
    live: Hand,
    board: Hand,
    k: usize,
}

impl Runouts {
    /// `dead` are cards no runout may use. the board is always dead.
    pub fn new(dead: Hand, board: Hand, k: usize) -> Self {
        let live = dead.union(board).complement();
        Self { live, board, k }
    }

    /// Walks every runout, stopping as soon as the visitor breaks.
    pub fn visit<F>(&self, mut visitor: F) -> ControlFlow<()>
    where
        F: FnMut(Hand) -> ControlFlow<()>,
    {
        self.walk(Hand::empty(), 0, self.k, &mut visitor)
    }

    fn walk<F>(&self, chosen: Hand, start: u8, n: usize, visitor: &mut F) -> ControlFlow<()>
    where
        F: FnMut(Hand) -> ControlFlow<()>,
    {
        if n == 0 {
            return visitor(Hand::add(chosen, self.board));
        }
        let mut chosen = chosen;
        let above = Hand::from(u64::from(self.live) & (u64::MAX << start));
        for card in above {
            chosen = chosen.toggle(card);
            self.walk(chosen, u8::from(card) + 1, n - 1, visitor)?;
            chosen = chosen.toggle(card);
        }
        ControlFlow::Continue(())
    }

    /// C(u, k) for `u` live cards. zero when `u < k`.
    pub fn combinations(&self) -> Count {
        let n = self.live.size();
        let k = self.k;
        if k > n {
            0
        } else {
            (0..k).fold(1 as Count, |x, i| x * (n - i) as Count / (i + 1) as Count)
        }
    }

    /// cards still available to finish the board
    pub fn live(&self) -> Hand {
        self.live
    }
    /// board slots left to fill
    pub fn missing(&self) -> usize {
        self.k
    }

    pub fn collect(&self) -> Vec<Hand> {
        let mut runouts = Vec::with_capacity(self.combinations() as usize);
        let _ = self.visit(|runout| {
            runouts.push(runout);
            ControlFlow::Continue(())
        });
        runouts
    }
}

impl From<&Table> for Runouts {
    fn from(table: &Table) -> Self {
        Self::new(table.dead(), Hand::from(table.board()), table.missing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// only the five lowest positions are live
    fn five() -> Hand {
        Hand::from(!0b11111u64)
    }

    #[test]
    fn five_choose_three() {
        let runouts = Runouts::new(five(), Hand::empty(), 3).collect();
        assert_eq!(
            runouts,
            vec![
                Hand::from(0b00111),
                Hand::from(0b01011),
                Hand::from(0b10011),
                Hand::from(0b01101),
                Hand::from(0b10101),
                Hand::from(0b11001),
                Hand::from(0b01110),
                Hand::from(0b10110),
                Hand::from(0b11010),
                Hand::from(0b11100),
            ]
        );
    }

    #[test]
    fn five_choose_three_with_mask() {
        let dead = Hand::from(!0b1111111u64 | 0b0000110);
        let runouts = Runouts::new(dead, Hand::empty(), 3).collect();
        assert_eq!(runouts.len(), 10);
        assert_eq!(runouts[0], Hand::from(0b0011001));
        assert_eq!(runouts[9], Hand::from(0b1110000));
        assert!(runouts.iter().all(|r| r.intersection(dead).is_empty()));
    }

    #[test]
    fn complete_board_visits_once() {
        let board = Hand::try_from("2c 7d 9h Js Ac").unwrap();
        let dead = Hand::try_from("Kh Kd Qc Qs").unwrap();
        let runouts = Runouts::new(dead, board, 0);
        assert_eq!(runouts.combinations(), 1);
        assert_eq!(runouts.collect(), vec![board]);
    }

    #[test]
    fn starved_deck_visits_nothing() {
        let board = Hand::try_from("2c").unwrap();
        let dead = Hand::from(!0b111u64);
        let runouts = Runouts::new(dead, board, 4);
        assert_eq!(runouts.live().size(), 2);
        assert_eq!(runouts.combinations(), 0);
        assert!(runouts.collect().is_empty());
    }

    #[test]
    fn preflop_heads_up_count() {
        let dead = Hand::try_from("As Ah Kc Kd").unwrap();
        let runouts = Runouts::new(dead, Hand::empty(), 5);
        let mut n = 0 as Count;
        let _ = runouts.visit(|_| {
            n += 1;
            ControlFlow::Continue(())
        });
        assert_eq!(n, 1_712_304);
        assert_eq!(runouts.combinations(), 1_712_304);
    }

    #[test]
    fn flop_runouts_are_distinct_and_complete() {
        let board = Hand::try_from("2c 3c 4c").unwrap();
        let dead = Hand::try_from("As Ks Qd Qh").unwrap();
        let runouts = Runouts::new(dead, board, 2).collect();
        let unique = runouts.iter().copied().collect::<HashSet<Hand>>();
        assert_eq!(runouts.len(), 990);
        assert_eq!(unique.len(), 990);
        assert!(runouts.iter().all(|r| r.size() == 5));
        assert!(runouts.iter().all(|r| r.intersection(board) == board));
        assert!(runouts.iter().all(|r| r.intersection(dead).is_empty()));
    }

    #[test]
    fn reconstruction_repeats_the_sequence() {
        let board = Hand::try_from("Td Jd").unwrap();
        let dead = Hand::try_from("9s 9h").unwrap();
        let a = Runouts::new(dead, board, 3).collect();
        let b = Runouts::new(dead, board, 3).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn visitor_can_stop_early() {
        let runouts = Runouts::new(Hand::empty(), Hand::empty(), 5);
        let mut seen = 0;
        let flow = runouts.visit(|_| {
            seen += 1;
            if seen == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert!(flow.is_break());
        assert_eq!(seen, 3);
    }

    #[test]
    fn table_construction() {
        let holes = vec![Hole::try_from("AsKs").unwrap(), Hole::try_from("QdQh").unwrap()];
        let table = Table::try_from((holes, Board::try_from("2c3c4c").unwrap())).unwrap();
        let runouts = Runouts::from(&table);
        assert_eq!(runouts.missing(), 2);
        assert_eq!(runouts.live().size(), 45);
        assert_eq!(runouts.combinations(), 990);
    }
}
