//! Numeric range expressions.
//!
//! Grammar shared by the power, level, limit and bare-number rules:
//!
//! - `N`, `=N` → exactly N
//! - `N+`, `>N`, `>=N` → N or more
//! - `N-`, `<N`, `<=N` → N or less
//! - `A-B`, `A~B` → A through B
//!
//! Comparison operators are inclusive.

use serde::{Deserialize, Serialize};

/// Inclusive range over a numeric card field. `None` is unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl NumericRange {
    #[must_use]
    pub const fn exact(n: i64) -> Self {
        Self { min: Some(n), max: Some(n) }
    }

    #[must_use]
    pub const fn at_least(n: i64) -> Self {
        Self { min: Some(n), max: None }
    }

    #[must_use]
    pub const fn at_most(n: i64) -> Self {
        Self { min: None, max: Some(n) }
    }

    #[must_use]
    pub const fn between(min: i64, max: i64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    /// Parse a range expression. Returns `None` for anything outside the
    /// grammar, including numbers that overflow.
    ///
    /// ```
    /// use wx_deck::search::NumericRange;
    ///
    /// assert_eq!(NumericRange::parse("10+"), Some(NumericRange::at_least(10)));
    /// assert_eq!(NumericRange::parse("5~10"), Some(NumericRange::between(5, 10)));
    /// assert_eq!(NumericRange::parse("abc"), None);
    /// ```
    #[must_use]
    pub fn parse(expr: &str) -> Option<Self> {
        if let Some(rest) = expr.strip_prefix('>') {
            let rest = rest.trim_start_matches('=');
            let rest = rest.strip_suffix('+').unwrap_or(rest);
            return number(rest).map(Self::at_least);
        }
        if let Some(rest) = expr.strip_prefix('<') {
            let rest = rest.trim_start_matches('=');
            let rest = rest.strip_suffix('-').unwrap_or(rest);
            return number(rest).map(Self::at_most);
        }
        if expr.starts_with('=') {
            return number(expr.trim_start_matches('=')).map(Self::exact);
        }
        if let Some(n) = number(expr) {
            return Some(Self::exact(n));
        }
        if let Some(rest) = expr.strip_suffix('+') {
            return number(rest).map(Self::at_least);
        }
        if let Some(rest) = expr.strip_suffix('-') {
            if let Some(n) = number(rest) {
                return Some(Self::at_most(n));
            }
        }
        let (low, high) = expr.split_once(['-', '~'])?;
        Some(Self::between(number(low)?, number(high)?))
    }

    /// Whether `value` lies within the range.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    /// Whether a bare number range reads as a level rather than a power.
    ///
    /// Levels are single digits; every finite bound must be below 10.
    #[must_use]
    pub fn is_level_scale(&self) -> bool {
        self.min.map_or(true, |min| min < 10) && self.max.map_or(true, |max| max < 10)
    }
}

/// Non-empty run of ASCII digits.
fn number(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact() {
        assert_eq!(NumericRange::parse("10"), Some(NumericRange::exact(10)));
        assert_eq!(NumericRange::parse("=3"), Some(NumericRange::exact(3)));
        assert_eq!(NumericRange::parse("==3"), Some(NumericRange::exact(3)));
    }

    #[test]
    fn test_lower_bounded() {
        assert_eq!(NumericRange::parse("10+"), Some(NumericRange::at_least(10)));
        assert_eq!(NumericRange::parse(">=10"), Some(NumericRange::at_least(10)));
        assert_eq!(NumericRange::parse(">10"), Some(NumericRange::at_least(10)));
        assert_eq!(NumericRange::parse(">=10+"), Some(NumericRange::at_least(10)));
    }

    #[test]
    fn test_upper_bounded() {
        assert_eq!(NumericRange::parse("10-"), Some(NumericRange::at_most(10)));
        assert_eq!(NumericRange::parse("<=10"), Some(NumericRange::at_most(10)));
        assert_eq!(NumericRange::parse("<10-"), Some(NumericRange::at_most(10)));
    }

    #[test]
    fn test_closed_range() {
        assert_eq!(NumericRange::parse("5-10"), Some(NumericRange::between(5, 10)));
        assert_eq!(NumericRange::parse("5~10"), Some(NumericRange::between(5, 10)));
    }

    #[test]
    fn test_rejects_malformed() {
        for expr in ["abc", "", "+", "-5", "5~", "5--", ">", "<=", "=5+", ">5-", "1.5", "5-10-"] {
            assert_eq!(NumericRange::parse(expr), None, "{expr:?} should not parse");
        }
        assert_eq!(NumericRange::parse("99999999999999999999"), None);
    }

    #[test]
    fn test_contains() {
        let range = NumericRange::between(5, 10);
        assert!(range.contains(5));
        assert!(range.contains(10));
        assert!(!range.contains(11));
        assert!(NumericRange::at_most(3).contains(-100));
    }

    #[test]
    fn test_level_scale() {
        assert!(NumericRange::exact(3).is_level_scale());
        assert!(NumericRange::at_least(2).is_level_scale());
        assert!(!NumericRange::at_most(10).is_level_scale());
        assert!(!NumericRange::between(1, 12000).is_level_scale());
    }

    proptest! {
        #[test]
        fn prop_plain_number_is_exact(n in 0i64..1_000_000) {
            prop_assert_eq!(NumericRange::parse(&n.to_string()), Some(NumericRange::exact(n)));
        }

        #[test]
        fn prop_dash_range_contains_bounds(a in 0i64..100_000, b in 0i64..100_000) {
            let range = NumericRange::parse(&format!("{a}-{b}")).unwrap();
            prop_assert_eq!(range, NumericRange::between(a, b));
            if a <= b {
                prop_assert!(range.contains(a) && range.contains(b));
            }
        }

        #[test]
        fn prop_letters_never_parse(s in "[a-z]{1,8}") {
            prop_assert_eq!(NumericRange::parse(&s), None);
        }
    }
}
