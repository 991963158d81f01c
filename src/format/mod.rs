//! Identifier formatting and validation
//!
//! Pure helpers for the Brazilian identifiers collected by the membership
//! forms:
//! - `mask`: progressive display masks for CPF, CNPJ and phone numbers
//! - `validators`: e-mail shape check and CPF/CNPJ checksum validation

mod mask;
mod validators;

pub use mask::{mask_individual, mask_organizational, mask_phone};
pub use validators::{is_valid_email, is_valid_individual_id, is_valid_organizational_id};

/// Kind of national identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// CPF, the personal tax id
    Individual,
    /// CNPJ, the company tax id
    Organizational,
}

impl IdentifierKind {
    /// Number of digits in a complete identifier
    pub fn digit_count(self) -> usize {
        match self {
            Self::Individual => 11,
            Self::Organizational => 14,
        }
    }
}

/// Collect the ASCII digits of `raw`, stopping after `max` of them
fn digits(raw: &str, max: usize) -> Vec<u32> {
    raw.chars()
        .filter_map(|c| c.to_digit(10))
        .take(max)
        .collect()
}
