//! E-mail shape check and CPF/CNPJ checksum validation

use super::{digits, IdentifierKind};
use regex::Regex;
use std::sync::OnceLock;

static EMAIL_SHAPE: OnceLock<Regex> = OnceLock::new();

fn email_shape() -> &'static Regex {
    EMAIL_SHAPE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid e-mail regex")
    })
}

/// CNPJ weights for the first check digit; the second uses `6` followed by these
const ORGANIZATIONAL_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Check that `s` looks like `local@domain.tld`
///
/// This is a shape check only, it says nothing about deliverability.
pub fn is_valid_email(s: &str) -> bool {
    email_shape().is_match(s)
}

/// Validate a CPF, masked or not
pub fn is_valid_individual_id(s: &str) -> bool {
    let Some(digits) = complete_digits(s, IdentifierKind::Individual) else {
        return false;
    };

    let first_weights: Vec<u32> = (2..=10).rev().collect();
    let second_weights: Vec<u32> = (2..=11).rev().collect();

    check_digit(&digits[..9], &first_weights) == digits[9]
        && check_digit(&digits[..10], &second_weights) == digits[10]
}

/// Validate a CNPJ, masked or not
pub fn is_valid_organizational_id(s: &str) -> bool {
    let Some(digits) = complete_digits(s, IdentifierKind::Organizational) else {
        return false;
    };

    let second_weights: Vec<u32> = std::iter::once(6)
        .chain(ORGANIZATIONAL_WEIGHTS)
        .collect();

    check_digit(&digits[..12], &ORGANIZATIONAL_WEIGHTS) == digits[12]
        && check_digit(&digits[..13], &second_weights) == digits[13]
}

/// Digits of `s` when it holds exactly one identifier of `kind` and they are
/// not all the same
fn complete_digits(s: &str, kind: IdentifierKind) -> Option<Vec<u32>> {
    let expected = kind.digit_count();
    let digits = digits(s, expected + 1);
    if digits.len() != expected {
        return None;
    }
    if digits.iter().all(|d| *d == digits[0]) {
        return None;
    }
    Some(digits)
}

/// Mod-11 check digit over `digits` with positional `weights`
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}
