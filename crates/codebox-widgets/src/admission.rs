//! Character admissibility for code boxes.

/// Decides which text may enter a box.
///
/// A value is admissible when it is non-empty and either consists only of
/// ASCII digits or the policy allows any character. The same rule applies to
/// typed input, pasted input and externally set codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Admission {
    any_char: bool,
}

impl Admission {
    /// Digits only.
    pub fn digits() -> Self {
        Self { any_char: false }
    }

    /// Any non-empty value.
    pub fn any_char() -> Self {
        Self { any_char: true }
    }

    /// Build from the widget's character-mode flag.
    pub fn new(any_char: bool) -> Self {
        Self { any_char }
    }

    /// Whether non-digit characters are accepted.
    pub fn allows_any_char(&self) -> bool {
        self.any_char
    }

    /// Check a whole value, which may hold several characters.
    pub fn admits(&self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        self.any_char || value.bytes().all(|b| b.is_ascii_digit())
    }

    /// Check a single character.
    pub fn admits_char(&self, c: char) -> bool {
        self.any_char || c.is_ascii_digit()
    }
}

/// Split a value into the single characters that go into consecutive boxes.
///
/// Surrounding whitespace is dropped first.
pub fn split_chars(value: &str) -> Vec<char> {
    value.trim().chars().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_policy_accepts_digit_runs() {
        let policy = Admission::digits();
        assert!(policy.admits("7"));
        assert!(policy.admits("0123"));
    }

    #[test]
    fn digits_policy_rejects_everything_else() {
        let policy = Admission::digits();
        assert!(!policy.admits(""));
        assert!(!policy.admits("a"));
        assert!(!policy.admits("12a4"));
        assert!(!policy.admits(" 1"));
        assert!(!policy.admits("٣"));
    }

    #[test]
    fn any_char_policy_only_rejects_empty() {
        let policy = Admission::any_char();
        assert!(policy.admits("x"));
        assert!(policy.admits("Ab#"));
        assert!(policy.admits(" "));
        assert!(!policy.admits(""));
    }

    #[test]
    fn admits_char_follows_mode() {
        assert!(Admission::digits().admits_char('5'));
        assert!(!Admission::digits().admits_char('a'));
        assert!(Admission::any_char().admits_char('a'));
    }

    #[test]
    fn split_trims_then_splits() {
        assert_eq!(split_chars(" 12 "), vec!['1', '2']);
        assert!(split_chars("   ").is_empty());
    }
}
