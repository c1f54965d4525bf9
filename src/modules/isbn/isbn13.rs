// ISBN-13 Checksum Checker
//
// Weights alternate 1, 3, 1, ... from the first digit; the check digit brings
// the weighted sum to a multiple of 10.

use crate::domain::Validation;

/// Verify a candidate already classified as `Shape::Isbn13`.
pub fn check(candidate: &str) -> Validation {
    let bytes = candidate.as_bytes();
    let expected = expected_check_value(&bytes[..12]);
    let actual = digit(bytes[12]);

    tracing::debug!(kind = "ISBN-13", expected, actual, "checksum computed");
    debug_assert_eq!(expected == actual, full_sum_verifies(candidate));

    Validation::from_checksum(expected == actual)
}

fn weight(index: usize) -> u32 {
    if index % 2 == 0 { 1 } else { 3 }
}

pub(crate) fn weighted_sum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .enumerate()
        .map(|(i, b)| digit(*b) * weight(i))
        .sum()
}

/// `(10 - S mod 10) mod 10` over the twelve leading digits.
pub(crate) fn expected_check_value(body: &[u8]) -> u32 {
    (10 - weighted_sum(body) % 10) % 10
}

/// Full-sum formulation: the alternating weights continue onto the check digit
/// (weight 1) and the total must be a multiple of 10.
pub(crate) fn full_sum_verifies(candidate: &str) -> bool {
    weighted_sum(candidate.as_bytes()) % 10 == 0
}

fn digit(b: u8) -> u32 {
    u32::from(b - b'0')
}
