//! Format validators for pattern matches
//!
//! Regex patterns for financial and government identifiers are
//! deliberately loose; these checksum validators prune the false
//! positives before a match becomes a candidate span.

use crate::domain::EntityCategory;

/// Runs the validator registered for `category`, if any.
///
/// Categories without a validator are trusted as-is, since the
/// pattern match itself is the only signal available.
pub fn validate(category: &EntityCategory, text: &str) -> bool {
    match category {
        EntityCategory::Iban => validate_iban(text),
        EntityCategory::Ssn => validate_ssn(text),
        EntityCategory::CreditCard => validate_credit_card(text),
        EntityCategory::RoutingNumber => validate_routing_number(text),
        _ => true,
    }
}

/// Validates an IBAN using the mod-97 algorithm
pub fn validate_iban(text: &str) -> bool {
    let iban: String = text
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if iban.len() < 15 || iban.len() > 34 {
        return false;
    }
    if !iban.chars().take(2).all(|c| c.is_ascii_uppercase()) {
        return false;
    }
    if !iban.chars().all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }

    // Move the first four characters to the end, substitute A=10..Z=35,
    // then check the remainder mod 97 equals 1. The digit string is too
    // long for any integer type, so fold the remainder as we go.
    let rearranged = iban
        .chars()
        .skip(4)
        .chain(iban.chars().take(4))
        .collect::<String>();

    let mut remainder: u64 = 0;
    for c in rearranged.chars() {
        if let Some(digit) = c.to_digit(10) {
            remainder = (remainder * 10 + u64::from(digit)) % 97;
        } else {
            let value = u64::from(c as u8 - b'A') + 10;
            remainder = (remainder * 100 + value) % 97;
        }
    }

    remainder == 1
}

/// Validates a US Social Security Number in `XXX-XX-XXXX` form
///
/// Rejects the area codes 000, 666 and 900-999, group 00 and
/// serial 0000, which are never issued.
pub fn validate_ssn(text: &str) -> bool {
    let parts: Vec<&str> = text.split('-').collect();
    if parts.len() != 3 || parts[0].len() != 3 || parts[1].len() != 2 || parts[2].len() != 4 {
        return false;
    }
    if !parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())) {
        return false;
    }

    let area: u32 = parts[0].parse().unwrap_or(0);
    if area == 0 || area == 666 || area >= 900 {
        return false;
    }
    if parts[1] == "00" || parts[2] == "0000" {
        return false;
    }

    true
}

/// Validates a payment card number using the Luhn algorithm
pub fn validate_credit_card(text: &str) -> bool {
    let digits: Vec<u32> = text
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default();

    if digits.len() < 13 || digits.len() > 19 {
        return false;
    }

    let mut total = 0;
    for (i, digit) in digits.iter().rev().enumerate() {
        let mut n = *digit;
        if i % 2 == 1 {
            n *= 2;
            if n > 9 {
                n -= 9;
            }
        }
        total += n;
    }

    total % 10 == 0
}

/// Validates a US bank routing number using the ABA checksum
pub fn validate_routing_number(text: &str) -> bool {
    if text.len() != 9 || !text.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    const WEIGHTS: [u32; 9] = [3, 7, 1, 3, 7, 1, 3, 7, 1];
    let total: u32 = text
        .chars()
        .zip(WEIGHTS.iter())
        .map(|(c, w)| c.to_digit(10).unwrap_or(0) * w)
        .sum();

    total % 10 == 0
}
