//! Strength label derived from how many password rules pass.

use std::fmt;

/// Three-level summary of a password's rule results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    /// Maps a passed-rule count to a label.
    ///
    /// - `0..=2` → `Weak`
    /// - `3..=4` → `Medium`
    /// - `5` → `Strong`
    pub fn from_passed_count(passed: usize) -> Self {
        if passed <= 2 {
            StrengthLabel::Weak
        } else if passed <= 4 {
            StrengthLabel::Medium
        } else {
            StrengthLabel::Strong
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_passed_count_boundaries() {
        assert_eq!(StrengthLabel::from_passed_count(0), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_passed_count(2), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_passed_count(3), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_passed_count(4), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_passed_count(5), StrengthLabel::Strong);
    }

    #[test]
    fn test_label_is_monotonic() {
        let labels: Vec<_> = (0..=5).map(StrengthLabel::from_passed_count).collect();
        assert!(labels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_display() {
        assert_eq!(StrengthLabel::Medium.to_string(), "Medium");
    }
}
