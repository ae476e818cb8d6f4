// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker hand classifier.
//!
//! Classifies 5 cards hands into the ten poker rank categories and compares
//! two classified hands for a strict win. To classify a hand parse its card
//! codes and evaluate it with [HandValue]:
//!
//! ```
//! # use showdown_eval::*;
//! let hand = Hand::parse(&["TD", "JD", "QD", "KD", "AD"]).unwrap();
//! let value = HandValue::eval(&hand);
//! assert_eq!(value.rank(), HandRank::RoyalFlush);
//! assert_eq!(value.tiebreak(), None);
//! ```
//!
//! [Hand::beats] answers whether one hand strictly beats another, it is not
//! a total order: on an exact tie neither hand beats the other.
//!
//! The [matchup] module scores a line source where each line holds two hands
//! of 5 card codes each:
//!
//! ```
//! # use showdown_eval::*;
//! let lines = "1D 1C 5D 6D 7D 1S 2C 3C 5S TD";
//! let wins = matchup::tally_wins(lines.as_bytes()).unwrap();
//! assert_eq!(wins, 1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Hand, HandError, HandRank, HandValue, PairGroup};

pub mod matchup;
pub use matchup::{MatchupError, TallyError};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseCardError};
