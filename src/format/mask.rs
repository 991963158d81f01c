//! Progressive input masks
//!
//! Masks are applied on every keystroke. A separator is only written when
//! the digit that follows it exists, so partial input never ends with
//! punctuation and backspacing over a separator behaves naturally.

use super::{digits, IdentifierKind};

/// Separators for `000.000.000-00`, keyed by the index of the digit they precede
const INDIVIDUAL_SEPARATORS: &[(usize, char)] = &[(3, '.'), (6, '.'), (9, '-')];

/// Separators for `00.000.000/0000-00`
const ORGANIZATIONAL_SEPARATORS: &[(usize, char)] = &[(2, '.'), (5, '.'), (8, '/'), (12, '-')];

/// Maximum digits in a phone number (area code + 9-digit mobile)
const PHONE_MAX_DIGITS: usize = 11;

/// Mask a CPF as `000.000.000-00`
pub fn mask_individual(raw: &str) -> String {
    apply_separators(raw, IdentifierKind::Individual.digit_count(), INDIVIDUAL_SEPARATORS)
}

/// Mask a CNPJ as `00.000.000/0000-00`
pub fn mask_organizational(raw: &str) -> String {
    apply_separators(
        raw,
        IdentifierKind::Organizational.digit_count(),
        ORGANIZATIONAL_SEPARATORS,
    )
}

/// Mask a phone number as `(00) 0000-0000` or `(00) 00000-0000`
///
/// The hyphen always sits four digits before the end, so it moves one place
/// right when the ninth local digit of a mobile number is typed.
pub fn mask_phone(raw: &str) -> String {
    let digits = digits(raw, PHONE_MAX_DIGITS);
    if digits.is_empty() {
        return String::new();
    }

    let (area, local) = digits.split_at(digits.len().min(2));
    let mut out = String::with_capacity(16);
    out.push('(');
    push_digits(&mut out, area);
    if local.is_empty() {
        return out;
    }

    out.push_str(") ");
    if local.len() > 4 {
        let (head, tail) = local.split_at(local.len() - 4);
        push_digits(&mut out, head);
        out.push('-');
        push_digits(&mut out, tail);
    } else {
        push_digits(&mut out, local);
    }
    out
}

fn apply_separators(raw: &str, max: usize, separators: &[(usize, char)]) -> String {
    let mut out = String::with_capacity(max + separators.len());
    for (index, digit) in digits(raw, max).into_iter().enumerate() {
        if let Some((_, sep)) = separators.iter().find(|(at, _)| *at == index) {
            out.push(*sep);
        }
        push_digits(&mut out, &[digit]);
    }
    out
}

fn push_digits(out: &mut String, digits: &[u32]) {
    out.extend(digits.iter().filter_map(|d| char::from_digit(*d, 10)));
}

#[cfg(test)]
mod tests {
    use super::*;

    mod individual {
        use super::*;

        #[test]
        fn test_empty_input_masks_to_empty() {
            assert_eq!(mask_individual(""), "");
        }

        #[test]
        fn test_full_cpf() {
            assert_eq!(mask_individual("52998224725"), "529.982.247-25");
        }

        #[test]
        fn test_partial_input_has_no_trailing_separator() {
            assert_eq!(mask_individual("5"), "5");
            assert_eq!(mask_individual("529"), "529");
            assert_eq!(mask_individual("5299"), "529.9");
            assert_eq!(mask_individual("529982"), "529.982");
            assert_eq!(mask_individual("5299822"), "529.982.2");
            assert_eq!(mask_individual("529982247"), "529.982.247");
            assert_eq!(mask_individual("5299822472"), "529.982.247-2");
        }

        #[test]
        fn test_strips_non_digits_and_truncates() {
            assert_eq!(mask_individual("abc529.982.247-25999"), "529.982.247-25");
        }

        #[test]
        fn test_idempotent_on_own_output() {
            for len in 0..=11 {
                let raw: String = "52998224725".chars().take(len).collect();
                let once = mask_individual(&raw);
                assert_eq!(mask_individual(&once), once);
            }
        }

        #[test]
        fn test_output_keeps_digits_in_order() {
            let input = "12345678901";
            for len in 0..=input.len() {
                let masked = mask_individual(&input[..len]);
                let kept: String = masked.chars().filter(char::is_ascii_digit).collect();
                assert_eq!(kept, &input[..len]);
                assert!(masked.chars().last().map_or(true, |c| c.is_ascii_digit()));
            }
        }
    }

    mod organizational {
        use super::*;

        #[test]
        fn test_full_cnpj() {
            assert_eq!(mask_organizational("11222333000181"), "11.222.333/0001-81");
        }

        #[test]
        fn test_partial_cnpj() {
            assert_eq!(mask_organizational("11"), "11");
            assert_eq!(mask_organizational("112"), "11.2");
            assert_eq!(mask_organizational("112223"), "11.222.3");
            assert_eq!(mask_organizational("112223330"), "11.222.333/0");
            assert_eq!(mask_organizational("1122233300018"), "11.222.333/0001-8");
        }

        #[test]
        fn test_truncates_to_fourteen_digits() {
            assert_eq!(
                mask_organizational("11.222.333/0001-8199"),
                "11.222.333/0001-81"
            );
        }

        #[test]
        fn test_idempotent_on_own_output() {
            for len in 0..=14 {
                let raw: String = "11222333000181".chars().take(len).collect();
                let once = mask_organizational(&raw);
                assert_eq!(mask_organizational(&once), once);
                assert!(once.chars().last().map_or(true, |c| c.is_ascii_digit()));
            }
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_empty() {
            assert_eq!(mask_phone(""), "");
            assert_eq!(mask_phone("abc"), "");
        }

        #[test]
        fn test_area_code_only() {
            assert_eq!(mask_phone("1"), "(1");
            assert_eq!(mask_phone("11"), "(11");
        }

        #[test]
        fn test_short_local_part_has_no_hyphen() {
            assert_eq!(mask_phone("113"), "(11) 3");
            assert_eq!(mask_phone("113456"), "(11) 3456");
        }

        #[test]
        fn test_landline() {
            assert_eq!(mask_phone("1134567890"), "(11) 3456-7890");
        }

        #[test]
        fn test_mobile() {
            assert_eq!(mask_phone("11987654321"), "(11) 98765-4321");
        }

        #[test]
        fn test_hyphen_moves_as_digits_arrive() {
            assert_eq!(mask_phone("1198765"), "(11) 9-8765");
            assert_eq!(mask_phone("119876543"), "(11) 987-6543");
        }

        #[test]
        fn test_idempotent_and_truncated() {
            let masked = mask_phone("(11) 98765-43219999");
            assert_eq!(masked, "(11) 98765-4321");
            assert_eq!(mask_phone(&masked), masked);
        }

        #[test]
        fn test_idempotent_while_typing() {
            for len in 0..=11 {
                let raw: String = "11987654321".chars().take(len).collect();
                let once = mask_phone(&raw);
                assert_eq!(mask_phone(&once), once);
            }
        }
    }
}
