// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Single-pass numeric searches.

/// Finds the largest palindromic product of two factors in `lo..hi`.
///
/// Returns 0 if no product in the range is palindromic.
pub fn largest_palindrome_product(lo: u32, hi: u32) -> u64 {
    let mut best = 0;
    for i in lo..hi {
        // Products commute, start at i to skip mirrored pairs.
        for j in i..hi {
            let prod = u64::from(i) * u64::from(j);
            if prod > best && is_palindrome(prod) {
                best = prod;
            }
        }
    }

    best
}

/// The difference between the square of the sum and the sum of the squares
/// of the first `n` naturals.
pub fn sum_square_difference(n: u64) -> u64 {
    let sum = (1..=n).sum::<u64>();
    let square_sum = (1..=n).map(|i| i * i).sum::<u64>();
    sum * sum - square_sum
}

fn is_palindrome(n: u64) -> bool {
    let digits = n.to_string();
    digits.bytes().eq(digits.bytes().rev())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palindrome_check() {
        assert!(is_palindrome(9));
        assert!(is_palindrome(9009));
        assert!(is_palindrome(906609));
        assert!(!is_palindrome(9008));
        assert!(!is_palindrome(10));
    }

    #[test]
    fn palindrome_product_two_digits() {
        // 91 * 99, the classic two 2-digit factors answer.
        assert_eq!(largest_palindrome_product(10, 100), 9009);
    }

    #[test]
    fn palindrome_product_three_digits() {
        assert_eq!(largest_palindrome_product(100, 1000), 906609);
    }

    #[test]
    fn palindrome_product_empty_range() {
        assert_eq!(largest_palindrome_product(100, 100), 0);
    }

    #[test]
    fn sum_square_difference_small() {
        // (1+2+..+10)^2 - (1+4+..+100) = 3025 - 385.
        assert_eq!(sum_square_difference(10), 2640);
    }

    #[test]
    fn sum_square_difference_hundred() {
        assert_eq!(sum_square_difference(100), 25164150);
    }
}
