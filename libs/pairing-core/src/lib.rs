//! Core pairing library shared by the pairs API and the game client.
//!
//! Provides:
//! - Shared types (Pair, Card, Category, NewPair)
//! - Round construction with a uniform shuffle
//! - Card selection and match detection over an explicit round state

pub mod error;
pub mod round;
pub mod selection;
pub mod types;

pub use error::{PairError, Result};
pub use round::{build_round, build_round_with_rng, RoundId, RoundState};
pub use selection::{clear_selection, is_card_visible, select_card, ClearTicket, Selection};
pub use types::{Card, CardSide, Category, NewPair, Pair};
