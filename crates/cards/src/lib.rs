//! Card representation, card sets, and hand evaluation.
//!
//! All representations are optimized for bijective encoding and fast
//! bitwise operations.
//!
//! ## Core Types
//!
//! - [`Card`]: A single card as a `(Rank, Suit)` tuple encoded in one byte
//! - [`Hand`]: An unordered set of cards as a 64-bit bitmask
//! - [`Hole`]: A player's two private cards
//! - [`Board`]: The known community cards, zero to five
//! - [`Deck`]: Remaining cards with random draws
//!
//! ## Evaluation
//!
//! - [`Evaluator`]: Bitwise best-five-card search
//! - [`Strength`]: Evaluated hand ranking with kicker resolution
//! - [`Ranking`]: Hand value (high card through straight flush) with ranks
//! - [`Category`]: Rank-free hand category used for reporting
mod board;
mod card;
mod category;
mod deck;
mod evaluator;
mod hand;
mod hole;
mod kicks;
mod rank;
mod ranking;
mod strength;
mod suit;

pub use board::*;
pub use card::*;
pub use category::*;
pub use deck::*;
pub use evaluator::*;
pub use hand::*;
pub use hole::*;
pub use kicks::*;
pub use rank::*;
pub use ranking::*;
pub use strength::*;
pub use suit::*;
