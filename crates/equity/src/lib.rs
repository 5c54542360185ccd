//! Exact showdown equity by exhaustive board enumeration.
//!
//! Given two or more hole card pairs and a partial board, every possible
//! completion of the board is enumerated exactly once, each completion is
//! settled by an [`Oracle`], and the verdicts are tallied per seat.
//!
//! ## Pipeline
//!
//! - [`Runouts`]: lexicographic enumeration of the missing board cards
//! - [`Producer`]: feeds runouts into a single-slot channel
//! - [`Consumer`]: asks the oracle and folds answers into [`Equities`]
//! - [`Calculation`]: wires the two halves together and joins them
//!
//! ## Results
//!
//! - [`Tally`]: wins, ties, and winning categories for one [`Seat`]
//! - [`Equities`]: one tally per seat plus the runout total
mod calculation;
mod cancel;
mod consumer;
mod equities;
mod oracle;
mod producer;
mod progress;
mod runouts;
mod seat;
mod showdown;
mod table;
mod tally;

pub use calculation::*;
pub use cancel::*;
pub use consumer::*;
pub use equities::*;
pub use oracle::*;
pub use producer::*;
pub use progress::*;
pub use runouts::*;
pub use seat::*;
pub use showdown::*;
pub use table::*;
pub use tally::*;

use runout_cards::Board;
use runout_cards::Hole;

/// Validates the table and runs an uncancellable calculation to completion.
pub fn equities<O: Oracle>(
    holes: Vec<Hole>,
    board: Board,
    oracle: &O,
) -> anyhow::Result<Equities> {
    let table = Table::try_from((holes, board))?;
    Calculation::from(table)
        .run(oracle)
        .ok_or_else(|| anyhow::anyhow!("calculation stopped before exhausting the board"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use runout_cards::*;

    fn holes(s: &str) -> Vec<Hole> {
        s.split_whitespace()
            .map(|h| Hole::try_from(h).unwrap())
            .collect()
    }

    #[test]
    fn invalid_tables_are_errors() {
        assert!(equities(vec![], Board::empty(), &Showdown).is_err());
        let board = Board::try_from("As2c3d").unwrap();
        assert!(equities(holes("AsKs QdQh"), board, &Showdown).is_err());
    }

    #[test]
    fn aces_against_kings_preflop() {
        let equities = equities(holes("AsAh KdKc"), Board::empty(), &Showdown).unwrap();
        let aces = equities.tally(Seat::from(0));
        let kings = equities.tally(Seat::from(1));
        assert_eq!(equities.total(), 1_712_304);
        assert_eq!(aces.ties(), kings.ties());
        assert!(aces.wins() > kings.wins());
        assert!(aces.wins() + kings.wins() + aces.ties() == equities.total());
        for tally in [aces, kings] {
            let p = tally.win_percentage(equities.total()).unwrap();
            assert!(p > 0.0 && p < 100.0);
            let categories = Category::all().into_iter().map(|c| tally.count(c)).sum::<u64>();
            assert_eq!(categories, tally.wins() + tally.ties());
        }
        assert_eq!(kings.count(Category::HighCard), 0);
    }

    #[test]
    fn flush_draw_on_the_turn() {
        let board = Board::try_from("2h7hTc3d").unwrap();
        let equities = equities(holes("AhKh QsQd"), board, &Showdown).unwrap();
        let draw = equities.tally(Seat::from(0));
        assert_eq!(equities.total(), 44);
        // nine hearts, three aces, three kings
        assert_eq!(draw.wins(), 15);
        assert_eq!(draw.count(Category::Flush), 9);
        assert_eq!(draw.count(Category::OnePair), 6);
    }
}
