use std::fmt;

use super::expr::CompareOp;
use super::part::{Category, Part};

/// Inclusive span of ratings. Empty when `min > max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    min: u32,
    max: u32,
}

impl Span {
    const EMPTY: Span = Span { min: 1, max: 0 };

    fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    fn is_empty(self) -> bool {
        self.min > self.max
    }

    fn width(self) -> u128 {
        if self.is_empty() {
            0
        } else {
            u128::from(self.max - self.min) + 1
        }
    }

    /// Split into the ratings satisfying `rating <op> threshold` and the rest.
    fn split(self, op: CompareOp, threshold: u32) -> (Span, Span) {
        match op {
            CompareOp::Gt => match threshold.checked_add(1) {
                Some(above) => (
                    Span::new(self.min.max(above), self.max),
                    Span::new(self.min, self.max.min(threshold)),
                ),
                None => (Span::EMPTY, self),
            },
            CompareOp::Lt => match threshold.checked_sub(1) {
                Some(below) => (
                    Span::new(self.min, self.max.min(below)),
                    Span::new(self.min.max(threshold), self.max),
                ),
                None => (Span::EMPTY, self),
            },
        }
    }
}

/// A box of parts: one inclusive rating span per [`Category`].
///
/// Used by [`RuleSet::count_accepted()`](super::RuleSet::count_accepted) to
/// reason about every part in the box at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartRange {
    spans: [Span; 4],
}

impl PartRange {
    /// Every category spans `min..=max`.
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        Self {
            spans: [Span::new(min, max); 4],
        }
    }

    /// Replace the span of one category.
    #[must_use]
    pub fn with(mut self, category: Category, min: u32, max: u32) -> Self {
        self.spans[category.index()] = Span::new(min, max);
        self
    }

    /// `(min, max)` of a category, or `None` if that span is empty.
    #[must_use]
    pub fn bounds(&self, category: Category) -> Option<(u32, u32)> {
        let span = self.spans[category.index()];
        (!span.is_empty()).then_some((span.min, span.max))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.iter().any(|s| s.is_empty())
    }

    #[must_use]
    pub fn contains(&self, part: &Part) -> bool {
        Category::ALL.iter().all(|&c| {
            let span = self.spans[c.index()];
            (span.min..=span.max).contains(&part.get(c))
        })
    }

    /// Number of distinct parts in the range, saturating at `u128::MAX`.
    #[must_use]
    pub fn count(&self) -> u128 {
        self.spans
            .iter()
            .fold(1_u128, |acc, s| acc.saturating_mul(s.width()))
    }

    /// Split on a condition into the matching sub-range and the remainder.
    pub(crate) fn split(self, category: Category, op: CompareOp, threshold: u32) -> (Self, Self) {
        let (hit, miss) = self.spans[category.index()].split(op, threshold);
        let mut matched = self;
        let mut rest = self;
        matched.spans[category.index()] = hit;
        rest.spans[category.index()] = miss;
        (matched, rest)
    }

    pub(crate) fn empty() -> Self {
        Self {
            spans: [Span::EMPTY; 4],
        }
    }
}

impl fmt::Display for PartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, category) in Category::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match self.bounds(*category) {
                Some((min, max)) => write!(f, "{category}={min}..={max}")?,
                None => write!(f, "{category}=empty")?,
            }
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_count() {
        assert_eq!(PartRange::new(1, 4000).count(), 4000_u128.pow(4));
        assert_eq!(PartRange::new(0, 0).count(), 1);
    }

    #[test]
    fn full_domain_saturates() {
        assert_eq!(PartRange::new(0, u32::MAX).count(), u128::MAX);
    }

    #[test]
    fn empty_span_empties_range() {
        let range = PartRange::new(1, 10).with(Category::A, 5, 4);
        assert!(range.is_empty());
        assert_eq!(range.count(), 0);
        assert_eq!(range.bounds(Category::A), None);
        assert_eq!(range.bounds(Category::X), Some((1, 10)));
    }

    #[test]
    fn split_gt() {
        let (matched, rest) = PartRange::new(1, 10).split(Category::X, CompareOp::Gt, 7);
        assert_eq!(matched.bounds(Category::X), Some((8, 10)));
        assert_eq!(rest.bounds(Category::X), Some((1, 7)));
        assert_eq!(matched.bounds(Category::M), Some((1, 10)));
    }

    #[test]
    fn split_lt() {
        let (matched, rest) = PartRange::new(1, 10).split(Category::S, CompareOp::Lt, 4);
        assert_eq!(matched.bounds(Category::S), Some((1, 3)));
        assert_eq!(rest.bounds(Category::S), Some((4, 10)));
    }

    #[test]
    fn split_outside_span() {
        let (matched, rest) = PartRange::new(5, 10).split(Category::M, CompareOp::Lt, 2);
        assert!(matched.is_empty());
        assert_eq!(rest, PartRange::new(5, 10));

        let (matched, rest) = PartRange::new(5, 10).split(Category::M, CompareOp::Gt, 2);
        assert_eq!(matched, PartRange::new(5, 10));
        assert!(rest.is_empty());
    }

    #[test]
    fn split_at_integer_limits() {
        let (matched, rest) = PartRange::new(0, u32::MAX).split(Category::X, CompareOp::Lt, 0);
        assert!(matched.is_empty());
        assert_eq!(rest, PartRange::new(0, u32::MAX));

        let (matched, rest) =
            PartRange::new(0, u32::MAX).split(Category::X, CompareOp::Gt, u32::MAX);
        assert!(matched.is_empty());
        assert_eq!(rest, PartRange::new(0, u32::MAX));
    }

    #[test]
    fn split_preserves_count() {
        let range = PartRange::new(1, 4000);
        let (matched, rest) = range.split(Category::A, CompareOp::Gt, 1716);
        assert_eq!(matched.count() + rest.count(), range.count());
    }

    #[test]
    fn contains() {
        let range = PartRange::new(1, 10).with(Category::M, 5, 6);
        assert!(range.contains(&Part::new(1, 5, 10, 3)));
        assert!(!range.contains(&Part::new(1, 7, 10, 3)));
        assert!(!range.contains(&Part::new(0, 5, 10, 3)));
        assert!(!PartRange::empty().contains(&Part::default()));
    }

    #[test]
    fn display() {
        let range = PartRange::new(1, 4000).with(Category::S, 2, 1);
        assert_eq!(
            range.to_string(),
            "{x=1..=4000,m=1..=4000,a=1..=4000,s=empty}"
        );
    }
}
