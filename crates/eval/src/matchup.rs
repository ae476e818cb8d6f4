// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Matchup line scoring.
//!
//! A matchup line holds 10 whitespace separated card codes, the first 5 are
//! the first player hand and the last 5 the second player hand. [tally_wins]
//! scans a line source and counts the lines where the first hand strictly
//! beats the second one.
//!
//! Scoring fails fast: a malformed line aborts the whole tally with the
//! 1-based line number, it is never skipped.
use std::io::BufRead;

use crate::{Hand, HandError};

/// Number of card codes in a matchup line.
const LINE_CODES: usize = 10;

/// An error parsing a matchup line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchupError {
    /// The line did not have exactly 10 card codes.
    #[error("expected 10 card codes, got {0}")]
    TokenCount(usize),
    /// One of the hands failed to parse.
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// An error scoring a line source.
#[derive(Debug, thiserror::Error)]
pub enum TallyError {
    /// A line failed to parse.
    #[error("line {line}: {source}")]
    Matchup {
        /// The 1-based line number.
        line: usize,
        /// The line parse error.
        source: MatchupError,
    },
    /// Reading from the line source failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parses a matchup line into the two player hands.
pub fn parse_matchup(line: &str) -> Result<(Hand, Hand), MatchupError> {
    let codes = line.split_whitespace().collect::<Vec<_>>();
    if codes.len() != LINE_CODES {
        return Err(MatchupError::TokenCount(codes.len()));
    }

    let first = Hand::parse(&codes[..5])?;
    let second = Hand::parse(&codes[5..])?;
    Ok((first, second))
}

/// Counts the lines where the first player hand strictly beats the second.
///
/// Blank lines are skipped so a trailing newline does not fail the scan;
/// any malformed line fails the whole tally.
pub fn tally_wins<R: BufRead>(reader: R) -> Result<u64, TallyError> {
    let mut wins = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (first, second) =
            parse_matchup(&line).map_err(|source| TallyError::Matchup {
                line: idx + 1,
                source,
            })?;

        if first.beats(&second) {
            wins += 1;
        }
    }

    Ok(wins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line() {
        let (first, second) = parse_matchup("1D 1C 5D 6D 7D 1S 2C 3C 5S TD").unwrap();
        assert_eq!(first.to_string(), "1D 1C 5D 6D 7D");
        assert_eq!(second.to_string(), "1S 2C 3C 5S TD");
    }

    #[test]
    fn parse_line_errors() {
        assert!(matches!(
            parse_matchup("1D 1C 5D 6D 7D 1S 2C 3C 5S"),
            Err(MatchupError::TokenCount(9))
        ));
        assert!(matches!(
            parse_matchup("1D 1C 5D 6D 7D 1S 2C 3C 5S TD AH"),
            Err(MatchupError::TokenCount(11))
        ));
        assert!(matches!(
            parse_matchup("XD 1C 5D 6D 7D 1S 2C 3C 5S TD"),
            Err(MatchupError::Hand(_))
        ));
    }

    #[test]
    fn tally_single_win() {
        // Pair of ones beats no combination.
        let lines = "1D 1C 5D 6D 7D 1S 2C 3C 5S TD\n";
        assert_eq!(tally_wins(lines.as_bytes()).unwrap(), 1);
    }

    #[test]
    fn tally_multiple_lines() {
        let lines = "\
            1D 1C 5D 6D 7D 1S 2C 3C 5S TD\n\
            1S 2C 3C 5S TD 1D 1C 5D 6D 7D\n\
            TD JD QD KD AD 2S 2D 3S 3C AC\n";
        assert_eq!(tally_wins(lines.as_bytes()).unwrap(), 2);
    }

    #[test]
    fn tally_skips_blank_lines() {
        let lines = "1D 1C 5D 6D 7D 1S 2C 3C 5S TD\n\n  \n";
        assert_eq!(tally_wins(lines.as_bytes()).unwrap(), 1);
    }

    #[test]
    fn tally_fails_fast() {
        let lines = "\
            1D 1C 5D 6D 7D 1S 2C 3C 5S TD\n\
            1D 1C 5D 6D 7D 1S 2C 3C 5S\n";
        let err = tally_wins(lines.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            TallyError::Matchup {
                line: 2,
                source: MatchupError::TokenCount(9)
            }
        ));
    }

    #[test]
    fn tally_exact_tie_is_not_a_win() {
        let lines = "1C 1H 3C 5S TD 1S 1D 3D 5C TH\n";
        assert_eq!(tally_wins(lines.as_bytes()).unwrap(), 0);
    }
}
