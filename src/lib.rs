//! Exact Texas Hold'em equity.
//!
//! Re-exports the workspace crates under one roof:
//!
//! - [`core`]: shared aliases, constants, and logging setup
//! - [`cards`]: cards, card sets, and hand evaluation
//! - [`equity`]: board enumeration and per-seat tallies
pub use runout_cards as cards;
pub use runout_core as core;
pub use runout_equity as equity;

pub use runout_core::*;
