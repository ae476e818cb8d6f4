// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The suit tokens of the standard deck.
const SUITS: [char; 4] = ['C', 'D', 'H', 'S'];

/// A card parsed from a textual card code.
///
/// A card keeps the parsed value, 0 to 14 with `T J Q K A` mapping to 10 to
/// 14 and a literal digit mapping to itself, and the original code verbatim.
/// The suit token is whatever follows the value token; it carries no meaning
/// beyond equality so it is never validated against a suit alphabet.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    value: u8,
    raw: [u8; 3],
    len: u8,
}

impl Card {
    /// Creates a card from a value and a suit token.
    ///
    /// Panics if the value is greater than 14 or the suit is not ASCII.
    pub fn new(value: u8, suit: char) -> Card {
        let token = match value {
            0..=9 => (b'0' + value) as char,
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            14 => 'A',
            _ => panic!("Invalid card value {value}"),
        };

        assert!(suit.is_ascii(), "Invalid suit token {suit:?}");
        Card {
            value,
            raw: [token as u8, suit as u8, 0],
            len: 2,
        }
    }

    /// The card value, 2 to 14 for standard deck cards.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// The suit token, kept verbatim from the card code.
    pub fn suit(&self) -> &str {
        &self.raw()[1..]
    }

    /// The original card code.
    pub fn raw(&self) -> &str {
        // Construction only accepts ASCII codes.
        std::str::from_utf8(&self.raw[..self.len as usize]).expect("card codes are ASCII")
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let bytes = code.as_bytes();
        if !code.is_ascii() || !(2..=3).contains(&bytes.len()) {
            return Err(ParseCardError::Malformed(code.to_string()));
        }

        let value = match bytes[0] {
            d @ b'0'..=b'9' => d - b'0',
            b'T' => 10,
            b'J' => 11,
            b'Q' => 12,
            b'K' => 13,
            b'A' => 14,
            token => {
                return Err(ParseCardError::ValueToken {
                    token: token as char,
                    code: code.to_string(),
                });
            }
        };

        let mut raw = [0u8; 3];
        raw[..bytes.len()].copy_from_slice(bytes);

        Ok(Card {
            value,
            raw,
            len: bytes.len() as u8,
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self.raw())
    }
}

/// An error parsing a card code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCardError {
    /// The code is not a 2 or 3 characters ASCII string.
    #[error("invalid card code {0:?}: expected a value token followed by a suit token")]
    Malformed(String),
    /// The value token is not a decimal digit or one of `T J Q K A`.
    #[error("invalid value token {token:?} in card code {code:?}")]
    ValueToken {
        /// The offending token.
        token: char,
        /// The card code it appeared in.
        code: String,
    },
}

/// A deck of the 52 standard cards.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Card {
        self.cards.pop().unwrap()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = SUITS
            .iter()
            .flat_map(|&s| (2..=14).map(move |v| Card::new(v, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
