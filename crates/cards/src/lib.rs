// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown cards types.
//!
//! This crate defines the [Card] type and its textual card-code parsing:
//!
//! ```
//! # use showdown_cards::Card;
//! let ah = "AH".parse::<Card>().unwrap();
//! assert_eq!(ah.value(), 14);
//! assert_eq!(ah.suit(), "H");
//! ```
//!
//! A card code is two or three ASCII characters: a value token followed by a
//! suit token. The value token is a literal decimal digit, kept as that digit
//! (so `1` is the literal one, never an ace), or one of `T J Q K A` for
//! `10 11 12 13 14`. The suit token is kept verbatim and never interpreted,
//! only compared for equality.
//!
//! It also provides a [Deck] of the 52 standard cards for dealing random
//! hands:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let card = deck.deal();
//! assert!((2..=14).contains(&card.value()));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError};
