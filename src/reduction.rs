// 🔢 Reduction - digit sums with Master Number stops
// The single rule every calculator funnels through

/// Master Numbers stop reduction even though they have two digits.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

pub fn is_master_number(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` by repeated digit sums until it is a single digit or a Master
/// Number (11, 22, 33).
///
/// A Master Number reached at any intermediate stage ends the reduction:
/// `29 -> 11`, while `49 -> 13 -> 4`. Zero stays zero.
pub fn reduce_to_single_digit_or_master(mut n: u32) -> u32 {
    while n > 9 && !is_master_number(n) {
        n = digit_sum(n);
    }
    n
}

// ============================================================================
// TESTS
// ============================================================================
