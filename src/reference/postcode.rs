//! Postcode and city-name normalization
//!
//! Helpers shared by every resolver function:
//! - `normalize_postcode` / `extract_prefix`: trim, uppercase, leading letters
//! - `normalize_city_name`: first character uppercase, the rest lowercase
//! - `is_valid_uk_postcode`: full UK postcode format check
//! - `is_long_enough_to_judge` / `can_identify_partial_postcode`: enough
//!   input to attempt identification

/// Trim and uppercase raw postcode input
pub fn normalize_postcode(postcode: &str) -> String {
    postcode.trim().to_uppercase()
}

/// Extract the leading run of letters from a postcode
///
/// Anchored at the start: "SW1A 1AA" -> "SW", "b33 8th" -> "B".
/// Returns None when the input does not start with a letter.
pub fn extract_prefix(postcode: &str) -> Option<String> {
    let normalized = normalize_postcode(postcode);
    let prefix: String = normalized
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();

    if prefix.is_empty() {
        None
    } else {
        Some(prefix)
    }
}

/// Normalize an Ireland city name: "BELFAST" -> "Belfast"
///
/// Only the first character is uppercased and everything after it is
/// lowercased. Multi-word names keep their later words lowercase.
pub fn normalize_city_name(city: &str) -> String {
    let trimmed = city.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => {
            let mut normalized: String = first.to_uppercase().collect();
            normalized.push_str(&chars.as_str().to_lowercase());
            normalized
        }
        None => String::new(),
    }
}

/// Validate a full UK postcode
///
/// Outward code: A9, A99, A9A, AA9, AA99 or AA9A.
/// Inward code: 9AA. A single space between the two is optional.
pub fn is_valid_uk_postcode(postcode: &str) -> bool {
    let normalized = normalize_postcode(postcode);
    if normalized.is_empty() || !normalized.is_ascii() {
        return false;
    }

    let (outward, inward) = match normalized.split_once(' ') {
        Some((outward, inward)) => (outward, inward),
        None => {
            if normalized.len() < 5 {
                return false;
            }
            normalized.split_at(normalized.len() - 3)
        }
    };

    is_valid_outward_code(outward) && is_valid_inward_code(inward)
}

fn is_valid_outward_code(outward: &str) -> bool {
    let bytes = outward.as_bytes();
    let letters = bytes.iter().take_while(|b| b.is_ascii_uppercase()).count();
    if letters == 0 || letters > 2 {
        return false;
    }

    let rest = &bytes[letters..];
    match rest {
        [d] => d.is_ascii_digit(),
        [d, tail] => d.is_ascii_digit() && (tail.is_ascii_digit() || tail.is_ascii_uppercase()),
        _ => false,
    }
}

fn is_valid_inward_code(inward: &str) -> bool {
    match inward.as_bytes() {
        [d, a, b] => d.is_ascii_digit() && a.is_ascii_uppercase() && b.is_ascii_uppercase(),
        _ => false,
    }
}

/// Shortest trimmed input that is judged at all
pub const MIN_JUDGEABLE_LEN: usize = 2;

/// Whether trimmed input has at least `MIN_JUDGEABLE_LEN` characters
pub fn is_long_enough_to_judge(input: &str) -> bool {
    input.trim().chars().count() >= MIN_JUDGEABLE_LEN
}

/// Whether partial input is long enough to try identifying its area
///
/// Needs `is_long_enough_to_judge` and a leading letter.
pub fn can_identify_partial_postcode(postcode: &str) -> bool {
    is_long_enough_to_judge(postcode) && extract_prefix(postcode).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_prefix() {
        assert_eq!(extract_prefix("SW1A 1AA"), Some("SW".to_string()));
        assert_eq!(extract_prefix("  ls1 4dp "), Some("LS".to_string()));
        assert_eq!(extract_prefix("B33 8TH"), Some("B".to_string()));
        assert_eq!(extract_prefix("EC"), Some("EC".to_string()));
    }

    #[test]
    fn test_extract_prefix_no_letters() {
        assert_eq!(extract_prefix(""), None);
        assert_eq!(extract_prefix("   "), None);
        assert_eq!(extract_prefix("12345"), None);
        assert_eq!(extract_prefix("1SW"), None);
    }

    #[test]
    fn test_normalize_city_name() {
        assert_eq!(normalize_city_name("belfast"), "Belfast");
        assert_eq!(normalize_city_name("BELFAST"), "Belfast");
        assert_eq!(normalize_city_name(" bElFaSt "), "Belfast");
        assert_eq!(normalize_city_name(""), "");
        assert_eq!(normalize_city_name("   "), "");
    }

    #[test]
    fn test_valid_uk_postcodes() {
        assert!(is_valid_uk_postcode("SW1A 1AA")); // AA9A
        assert!(is_valid_uk_postcode("W1A 0AX")); // A9A
        assert!(is_valid_uk_postcode("M1 1AE")); // A9
        assert!(is_valid_uk_postcode("B33 8TH")); // A99
        assert!(is_valid_uk_postcode("CR2 6XH")); // AA9
        assert!(is_valid_uk_postcode("DN55 1PT")); // AA99
        assert!(is_valid_uk_postcode("ls14dp"));
        assert!(is_valid_uk_postcode("  EC1A 1BB  "));
    }

    #[test]
    fn test_invalid_uk_postcodes() {
        assert!(!is_valid_uk_postcode(""));
        assert!(!is_valid_uk_postcode("SW"));
        assert!(!is_valid_uk_postcode("SW1A"));
        assert!(!is_valid_uk_postcode("SWA1 1AA"));
        assert!(!is_valid_uk_postcode("SW1A 1A"));
        assert!(!is_valid_uk_postcode("SW1A 11A"));
        assert!(!is_valid_uk_postcode("ABC1 1AA"));
        assert!(!is_valid_uk_postcode("12345"));
        assert!(!is_valid_uk_postcode("SW1A  1AA"));
    }

    #[test]
    fn test_can_identify_partial_postcode() {
        assert!(can_identify_partial_postcode("SW"));
        assert!(can_identify_partial_postcode("B3"));
        assert!(can_identify_partial_postcode("LS1 4"));
        assert!(!can_identify_partial_postcode("S"));
        assert!(!can_identify_partial_postcode(""));
        assert!(!can_identify_partial_postcode("12"));
    }

    #[test]
    fn test_is_long_enough_to_judge() {
        assert!(is_long_enough_to_judge("12"));
        assert!(is_long_enough_to_judge(" ÉÉ "));
        assert!(!is_long_enough_to_judge(" S "));
        assert!(!is_long_enough_to_judge(""));
    }
}
