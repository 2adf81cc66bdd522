//! Card number helpers: Luhn checksum and masking

/// Number of trailing digits left visible by [`mask`]
const VISIBLE_DIGITS: usize = 4;

/// Checks the Luhn (mod 10) checksum of a card number.
///
/// Only ASCII digits are accepted, anything else (including an empty
/// string) fails the check.
pub fn luhn_checksum_valid(number: &str) -> bool {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = number
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(i, d)| {
            // Every second digit from the right is doubled
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

/// Hides every character of a card number but the last four
pub fn mask(number: &str) -> String {
    let len = number.chars().count();
    number
        .chars()
        .enumerate()
        .map(|(i, c)| if i + VISIBLE_DIGITS < len { '*' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luhn_valid_numbers() {
        let valid_cases = vec![
            "4111111111111111",
            "4012888888881881",
            "4222222222222",
            "79927398713",
        ];

        for number in valid_cases {
            assert!(luhn_checksum_valid(number), "Valid checksum {} was rejected !", number);
        }
    }

    #[test]
    fn test_luhn_invalid_numbers() {
        let invalid_cases = vec![
            "4111111111111112",    // Wrong check digit
            "79927398710",         // Wrong check digit
            "4111 1111 1111 1111", // Spaces
            "4111a11111111111",    // Letter
            "",                    // Empty string
        ];

        for number in invalid_cases {
            assert!(!luhn_checksum_valid(number), "Invalid checksum {:?} was accepted !", number);
        }
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask("4111111111111111"), "************1111");
        assert_eq!(mask("4111111111112"), "*********1112");
        assert_eq!(mask("123"), "123");
        assert_eq!(mask(""), "");
    }
}
