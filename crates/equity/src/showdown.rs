use crate::oracle::Oracle;
use crate::oracle::Winner;
use crate::seat::Seat;
use runout_cards::*;

/// The default [`Oracle`], backed by the bitwise [`Evaluator`].
///
/// Every hole is evaluated with the board as a seven-card [`Strength`];
/// all seats holding the maximum strength win.
#[derive(Debug, Default, Clone, Copy)]
pub struct Showdown;

impl Oracle for Showdown {
    fn showdown(&self, board: Hand, holes: &[Hole]) -> Vec<Winner> {
        let strengths = holes
            .iter()
            .map(|&hole| Hand::add(board, Hand::from(hole)))
            .map(Strength::from)
            .collect::<Vec<Strength>>();
        match strengths.iter().max() {
            None => Vec::new(),
            Some(best) => strengths
                .iter()
                .enumerate()
                .filter(|(_, strength)| *strength == best)
                .map(|(i, strength)| Winner::from((Seat::from(i), strength.category())))
                .collect(),
        }
    }
}
