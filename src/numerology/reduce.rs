//! Digit reduction helpers.

use super::category::{is_karmic, is_master};

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce to a single digit (0-9), ignoring master and karmic numbers.
pub fn reduce_to_digit(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

/// Reduce until a single digit, a master number or a karmic number is reached.
pub fn reduce_keeping_special(mut n: u32) -> u32 {
    while n > 9 && !is_master(n) && !is_karmic(n) {
        n = digit_sum(n);
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(1976), 23);
        assert_eq!(digit_sum(26), 8);
    }

    #[test]
    fn test_reduce_to_digit_ignores_special_numbers() {
        assert_eq!(reduce_to_digit(33), 6);
        assert_eq!(reduce_to_digit(19), 1);
        assert_eq!(reduce_to_digit(1976), 5);
        assert_eq!(reduce_to_digit(0), 0);
    }

    #[test]
    fn test_reduce_keeping_special_stops_on_master_and_karmic() {
        assert_eq!(reduce_keeping_special(33), 33);
        assert_eq!(reduce_keeping_special(646), 16);
        assert_eq!(reduce_keeping_special(2013), 6);
        // 85 -> 13, karmic
        assert_eq!(reduce_keeping_special(85), 13);
        // 29 -> 11, master
        assert_eq!(reduce_keeping_special(29), 11);
    }
}
