//! Localized digit normalization.

/// Replaces localized numeral glyphs in the given `input` with their ASCII
/// equivalents.
///
/// Both Arabic-Indic (U+0660..U+0669) and Extended Arabic-Indic
/// (U+06F0..U+06F9) digits are mapped; every other character is kept as is.
/// Phone numbers and prices typed with localized keyboards normalize to the
/// same representation this way.
#[must_use]
pub fn to_ascii_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '\u{0660}'..='\u{0669}' => {
                char::from_digit(u32::from(c) - 0x0660, 10).unwrap_or(c)
            }
            '\u{06F0}'..='\u{06F9}' => {
                char::from_digit(u32::from(c) - 0x06F0, 10).unwrap_or(c)
            }
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod spec {
    use super::to_ascii_digits;

    #[test]
    fn maps_arabic_indic_digits() {
        assert_eq!(to_ascii_digits("٠١٢٣٤٥٦٧٨٩"), "0123456789");
    }

    #[test]
    fn maps_extended_arabic_indic_digits() {
        assert_eq!(to_ascii_digits("۰۱۲۳۴۵۶۷۸۹"), "0123456789");
    }

    #[test]
    fn keeps_everything_else_untouched() {
        assert_eq!(to_ascii_digits("+20 122 447 07"), "+20 122 447 07");
        assert_eq!(to_ascii_digits(""), "");
    }

    #[test]
    fn normalizes_mixed_input() {
        assert_eq!(to_ascii_digits("+٢٠١٢٢٤٤٧٠٧٥٧"), "+201224470757");
    }
}
