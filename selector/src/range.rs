//! Numeric name sequences (`zone_*` over `[min, max)`).

use std::fmt;

use crate::error::{SelectorError, SelectorResult};

/// Placeholder replaced by the counter.
pub const PLACEHOLDER: char = '*';

/// Region names produced by substituting each integer of `[min, max)` into
/// the single `*` of a template.
///
/// Bounds are kept as given. Negative or inverted bounds are legal here and
/// simply select nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRange {
    template: String,
    min: i64,
    max: i64,
}

impl CountRange {
    pub fn new(template: impl Into<String>, min: i64, max: i64) -> SelectorResult<Self> {
        let template = template.into();
        if template.matches(PLACEHOLDER).count() != 1 {
            return Err(SelectorError::invalid_template(template));
        }
        Ok(Self { template, min, max })
    }

    /// Build from textual bounds: `"<max>"` counts from zero, `"<min>..<max>"`
    /// gives both ends.
    pub fn parse(template: impl Into<String>, bounds: &str) -> SelectorResult<Self> {
        match bounds.split_once("..") {
            Some((min, max)) => Self::from_bounds(template, min, Some(max)),
            None => Self::from_bounds(template, bounds, None),
        }
    }

    /// Build from separate bound strings. With a single bound it is the
    /// exclusive maximum and the minimum is zero.
    pub fn from_bounds(
        template: impl Into<String>,
        first: &str,
        second: Option<&str>,
    ) -> SelectorResult<Self> {
        let first = parse_bound(first)?;
        let (min, max) = match second {
            Some(second) => (first, parse_bound(second)?),
            None => (0, first),
        };
        Self::new(template, min, max)
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// True when the bounds select nothing (negative or inverted).
    pub fn is_empty(&self) -> bool {
        self.min < 0 || self.max < 0 || self.max <= self.min
    }

    /// The name produced for counter value `i`.
    pub fn name_for(&self, i: i64) -> String {
        self.template.replacen(PLACEHOLDER, &i.to_string(), 1)
    }

    /// The counter value that produces `name`, if it lies inside the range.
    ///
    /// Equivalent to checking `name == name_for(i)` for every `i` in range,
    /// without walking the range.
    pub fn index_of(&self, name: &str) -> Option<i64> {
        if self.is_empty() {
            return None;
        }
        let (prefix, suffix) = self.template.split_once(PLACEHOLDER)?;
        let digits = name.strip_prefix(prefix)?.strip_suffix(suffix)?;
        if !is_canonical_decimal(digits) {
            return None;
        }
        let i: i64 = digits.parse().ok()?;
        (self.min <= i && i < self.max).then_some(i)
    }
}

impl fmt::Display for CountRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}..{})", self.template, self.min, self.max)
    }
}

fn parse_bound(text: &str) -> SelectorResult<i64> {
    text.trim()
        .parse()
        .map_err(|_| SelectorError::invalid_bound(text))
}

/// Digits as `i64::to_string` would print a non-negative number.
fn is_canonical_decimal(digits: &str) -> bool {
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'))
}
