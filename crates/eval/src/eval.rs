// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classification.
//!
//! A [Hand] is exactly 5 cards. [HandValue::eval] derives its rank category
//! and tiebreak value, and [Hand::beats] compares two hands for a strict
//! win. All derived properties are pure functions of the card set, a hand is
//! never mutated after construction.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Card, ParseCardError};

/// A poker hand of exactly 5 cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; 5],
}

impl Hand {
    /// Creates a hand from 5 cards.
    pub fn new(cards: [Card; 5]) -> Hand {
        Hand { cards }
    }

    /// Parses a hand from 5 card codes.
    ///
    /// Fails if the slice does not hold exactly 5 codes or any code fails to
    /// parse, see [ParseCardError].
    pub fn parse<S: AsRef<str>>(codes: &[S]) -> Result<Hand, HandError> {
        if codes.len() != 5 {
            return Err(HandError::Size(codes.len()));
        }

        let mut cards = [Card::new(2, 'C'); 5];
        for (card, code) in cards.iter_mut().zip(codes) {
            *card = code.as_ref().parse()?;
        }

        Ok(Hand { cards })
    }

    /// The cards in this hand.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The highest card value in this hand.
    pub fn high_card(&self) -> u8 {
        self.values().into_iter().max().unwrap_or(0)
    }

    /// Checks if all 5 cards share the same suit token.
    pub fn is_flush(&self) -> bool {
        self.cards.iter().all(|c| c.suit() == self.cards[0].suit())
    }

    /// Checks if the 5 card values form a contiguous ascending run.
    ///
    /// Aces always count 14 so the ace-low wrap-around is not a straight, a
    /// literal `1` card can still head a 1-2-3-4-5 run.
    pub fn is_straight(&self) -> bool {
        let mut values = self.values();
        values.sort_unstable();
        values.windows(2).all(|w| w[1] == w[0] + 1)
    }

    /// The card values appearing more than once, with their counts.
    ///
    /// Groups are returned in ascending value order; classification only
    /// relies on group membership, never on group positions.
    pub fn pair_groups(&self) -> Vec<PairGroup> {
        let mut counts = AHashMap::new();
        for value in self.values() {
            *counts.entry(value).or_insert(0u8) += 1;
        }

        let mut groups = counts
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(value, count)| PairGroup { count, value })
            .collect::<Vec<_>>();
        groups.sort_unstable_by_key(|g| g.value);
        groups
    }

    /// Checks if this hand strictly beats the other one.
    ///
    /// This is not a total order: on an exact tie, same rank, same tiebreak,
    /// same high card, neither hand beats the other.
    pub fn beats(&self, other: &Hand) -> bool {
        let this = HandValue::eval(self);
        let that = HandValue::eval(other);

        if this.rank() > that.rank() {
            return true;
        }

        if this.rank() == that.rank() {
            // Rankless hands compare by high card only.
            if this.rank() == HandRank::HighCard {
                return self.high_card() > other.high_card();
            }

            if this.tiebreak() > that.tiebreak() {
                return true;
            }

            if this.tiebreak() == that.tiebreak() && self.high_card() > other.high_card() {
                return true;
            }
        }

        false
    }

    fn values(&self) -> [u8; 5] {
        self.cards.map(|c| c.value())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// An error building a hand from card codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandError {
    /// The hand did not have exactly 5 card codes.
    #[error("a hand needs exactly 5 card codes, got {0}")]
    Size(usize),
    /// A card code failed to parse.
    #[error(transparent)]
    Card(#[from] ParseCardError),
}

/// A card value appearing more than once in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairGroup {
    /// How many cards hold this value, 2 to 4.
    pub count: u8,
    /// The repeated card value.
    pub value: u8,
}

/// The poker rank categories, lowest to highest precedence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HandRank {
    /// No combination, compares by high card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five contiguous values.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// A pair and a three of a kind.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// A straight in one suit.
    StraightFlush,
    /// A 10 to ace straight in one suit.
    RoyalFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{rank}")
    }
}

/// A classified hand, the rank category and its tiebreak value.
///
/// The tiebreak is the repeated card value for pairs, trips and quads, and
/// the higher pair value for two pairs; every other category compares by
/// high card alone and carries no tiebreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tiebreak: Option<u8>,
}

impl HandValue {
    /// Classifies a hand, first matching category wins.
    pub fn eval(hand: &Hand) -> HandValue {
        let straight = hand.is_straight();
        let flush = hand.is_flush();

        if straight && flush {
            if hand.high_card() == 14 {
                return Self::rank_only(HandRank::RoyalFlush);
            }
            return Self::rank_only(HandRank::StraightFlush);
        }

        if flush {
            return Self::rank_only(HandRank::Flush);
        }

        if straight {
            return Self::rank_only(HandRank::Straight);
        }

        let groups = hand.pair_groups();
        match groups.as_slice() {
            [] => Self::rank_only(HandRank::HighCard),
            [group] => {
                let rank = match group.count {
                    4 => HandRank::FourOfAKind,
                    3 => HandRank::ThreeOfAKind,
                    _ => HandRank::OnePair,
                };
                HandValue {
                    rank,
                    tiebreak: Some(group.value),
                }
            }
            [first, second] => {
                // Membership check, a pair and a triple can come in either
                // group order.
                if first.count == 2 && second.count == 2 {
                    HandValue {
                        rank: HandRank::TwoPair,
                        tiebreak: Some(first.value.max(second.value)),
                    }
                } else {
                    Self::rank_only(HandRank::FullHouse)
                }
            }
            // 5 cards can never hold three repeated values.
            _ => unreachable!("more than two pair groups in a 5 cards hand"),
        }
    }

    /// The rank category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tiebreak value, if the category has one.
    pub fn tiebreak(&self) -> Option<u8> {
        self.tiebreak
    }

    fn rank_only(rank: HandRank) -> HandValue {
        HandValue {
            rank,
            tiebreak: None,
        }
    }
}
