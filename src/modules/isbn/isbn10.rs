// ISBN-10 Checksum Checker
//
// Weights run 10 down to 2 over the first nine digits. The check value is the
// amount that brings the weighted sum to a multiple of 11, with `X` standing
// for 10.

use crate::domain::Validation;

/// Verify a candidate already classified as `Shape::Isbn10`.
pub fn check(candidate: &str) -> Validation {
    let bytes = candidate.as_bytes();
    let expected = expected_check_value(&bytes[..9]);
    let actual = check_value(bytes[9]);

    tracing::debug!(kind = "ISBN-10", expected, actual, "checksum computed");
    debug_assert_eq!(expected == actual, full_sum_verifies(candidate));

    Validation::from_checksum(expected == actual)
}

/// `S = sum(d_i * (10 - i))` over the nine leading digits.
pub(crate) fn weighted_sum(body: &[u8]) -> u32 {
    body.iter()
        .zip((2..=10).rev())
        .map(|(b, weight)| digit(*b) * weight)
        .sum()
}

/// `(11 - S mod 11) mod 11`, in `0..=10`.
pub(crate) fn expected_check_value(body: &[u8]) -> u32 {
    (11 - weighted_sum(body) % 11) % 11
}

/// Value of the trailing check character; `X` in either case is 10.
pub(crate) fn check_value(b: u8) -> u32 {
    if b.eq_ignore_ascii_case(&b'X') {
        10
    } else {
        digit(b)
    }
}

/// Full-sum formulation: weights 10..=1 over all ten characters, valid when the
/// sum is a multiple of 11. Agrees with [`check`] on every shaped input.
pub(crate) fn full_sum_verifies(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    (weighted_sum(&bytes[..9]) + check_value(bytes[9])) % 11 == 0
}

fn digit(b: u8) -> u32 {
    u32::from(b - b'0')
}
