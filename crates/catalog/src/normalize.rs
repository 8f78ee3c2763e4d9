//! String helpers shared by every title filter.
//!
//! Lengths are counted in Unicode code points, never bytes, so that
//! `"ziemniaków"` has length 10 and not 11.

/// Strip leading and trailing whitespace, leaving interior spacing untouched.
pub fn trimmed(title: &str) -> &str {
    title.trim()
}

/// Length in code points.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// A title is eligible when something other than whitespace remains after trimming.
pub fn is_eligible(title: &str) -> bool {
    char_len(trimmed(title)) > 0
}

/// First code point of the trimmed title, if there is one.
pub fn leading_char(title: &str) -> Option<char> {
    trimmed(title).chars().next()
}

/// Number of pieces produced by splitting the trimmed title on `' '`.
///
/// Only the space character separates; tabs and newlines do not. Runs of
/// spaces produce empty pieces, and those are counted too.
pub fn space_token_count(title: &str) -> usize {
    trimmed(title).split(' ').count()
}

/// Compare two characters after Unicode lower-casing.
pub fn same_char_ignoring_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_code_points() {
        assert_eq!(char_len("worek ziemniaków"), 16);
        assert_eq!("worek ziemniaków".len(), 17);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_trimmed_keeps_interior_spaces() {
        assert_eq!(trimmed(" wartość ze  spacjami "), "wartość ze  spacjami");
    }

    #[test]
    fn test_is_eligible() {
        assert!(is_eligible("Incepcja"));
        assert!(is_eligible("  x  "));
        assert!(!is_eligible(""));
        assert!(!is_eligible(" "));
        assert!(!is_eligible(" \t\n"));
    }

    #[test]
    fn test_leading_char_skips_whitespace() {
        assert_eq!(leading_char(" wartość"), Some('w'));
        assert_eq!(leading_char("&& w programowaniu"), Some('&'));
        assert_eq!(leading_char("   "), None);
    }

    #[test]
    fn test_space_token_count_is_literal() {
        assert_eq!(space_token_count("Incepcja"), 1);
        assert_eq!(space_token_count("Pulp Fiction"), 2);
        // doubled space yields an empty piece
        assert_eq!(space_token_count(" wartość ze  spacjami "), 4);
        // tabs are not separators
        assert_eq!(space_token_count("Pulp\tFiction"), 1);
        // an empty string still splits into one piece
        assert_eq!(space_token_count(""), 1);
    }

    #[test]
    fn test_same_char_ignoring_case() {
        assert!(same_char_ignoring_case('W', 'w'));
        assert!(same_char_ignoring_case('Ż', 'ż'));
        assert!(same_char_ignoring_case('1', '1'));
        assert!(!same_char_ignoring_case('W', 'V'));
    }
}
