//! Sort plans: ordered rule sequences and the sort entry points.
//!
//! A [`SortPlan`] owns a sequence of [`SortDescriptor`]s whose insertion
//! order is their priority order. Comparing two elements walks the
//! descriptors from the front and stops at the first one that produces a
//! non-tie result; sorting applies that comparison through a stable sort.
//!
//! The main entry points are [`SortPlan::sort`] (in place) and
//! [`SortPlan::sorted`] (copying).

use std::cmp::Ordering;
use std::fmt;

use crate::core::SortDescriptor;
use crate::error::{SortError, SortResult};

/// An ordered sequence of sort rules applied as a single comparison.
///
/// The first descriptor is the primary sort key; each following descriptor
/// only breaks the ties left by its predecessors. A plan is built
/// append-only with [`by`](SortPlan::by), [`then`](SortPlan::then), and
/// [`push`](SortPlan::push), and can then sort any number of collections:
/// sorting borrows the plan immutably, so one plan may be reused (or shared
/// across threads) freely.
///
/// # Examples
///
/// ```
/// use keysort::{key, SortPlan};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Book {
///     title: &'static str,
///     year: i64,
/// }
///
/// let plan = SortPlan::by(key(|b: &Book| b.year).descending())
///     .then(key(|b: &Book| b.title));
///
/// let mut shelf = vec![
///     Book { title: "Slow River", year: 1995 },
///     Book { title: "Ammonite", year: 1992 },
///     Book { title: "Hild", year: 1995 },
/// ];
/// plan.sort(&mut shelf).unwrap();
///
/// let titles: Vec<_> = shelf.iter().map(|b| b.title).collect();
/// assert_eq!(titles, ["Hild", "Slow River", "Ammonite"]);
/// ```
pub struct SortPlan<T> {
    descriptors: Vec<SortDescriptor<T>>,
}

impl<T> SortPlan<T> {
    /// Creates a plan with no rules.
    ///
    /// A plan must receive at least one descriptor before it can sort;
    /// see [`SortError::EmptyPlan`].
    pub fn new() -> Self {
        SortPlan {
            descriptors: Vec::new(),
        }
    }

    /// Creates a plan from its primary rule.
    ///
    /// Accepts anything that converts into a [`SortDescriptor`]: the
    /// descriptors built by [`key`](crate::key)/[`key_opt`](crate::key_opt)
    /// or [`SortDescriptor::new`], and named-property rules
    /// ([`PropertyKey`](crate::PropertyKey)).
    pub fn by(rule: impl Into<SortDescriptor<T>>) -> Self {
        let mut plan = SortPlan::new();
        plan.push(rule);
        plan
    }

    /// Appends a tie-breaking rule and returns the plan for chaining.
    pub fn then(mut self, rule: impl Into<SortDescriptor<T>>) -> Self {
        self.push(rule);
        self
    }

    /// Appends a tie-breaking rule to a plan held by reference.
    ///
    /// Useful when rules are assembled in a loop or behind a condition,
    /// where the consuming [`then`](SortPlan::then) style does not fit.
    pub fn push(&mut self, rule: impl Into<SortDescriptor<T>>) {
        self.descriptors.push(rule.into());
    }

    /// Returns the number of rules in the plan.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns `true` if the plan has no rules.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Returns the plan's descriptors in priority order.
    pub fn descriptors(&self) -> &[SortDescriptor<T>] {
        &self.descriptors
    }

    /// Compares two elements under the full rule sequence.
    ///
    /// Descriptors are evaluated in priority order and the first non-tie
    /// result wins. For each descriptor, both keys are extracted and then:
    ///
    /// - both keys present: they are compared in their natural order and
    ///   the descriptor's direction is applied, except that keys of
    ///   different kinds abort with [`SortError::IncomparableKeys`];
    /// - one key absent: the element with the present key orders after the
    ///   other under an ascending descriptor, before it under a descending
    ///   one;
    /// - both keys absent: the descriptor ties and the walk falls through
    ///   to the next one.
    ///
    /// A plan with no rules compares every pair `Equal`; only the sort
    /// entry points reject the empty plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use keysort::{key, SortPlan};
    ///
    /// let plan = SortPlan::by(key(|s: &&str| s.len() as i64));
    /// assert_eq!(plan.compare(&"ab", &"abc"), Ok(Ordering::Less));
    /// assert_eq!(plan.compare(&"ab", &"xy"), Ok(Ordering::Equal));
    /// ```
    pub fn compare(&self, a: &T, b: &T) -> SortResult<Ordering> {
        for (index, descriptor) in self.descriptors.iter().enumerate() {
            let direction = descriptor.direction();
            let ordering = match (descriptor.extract(a), descriptor.extract(b)) {
                (Some(_), None) => direction.apply(Ordering::Greater),
                (None, Some(_)) => direction.apply(Ordering::Less),
                (None, None) => Ordering::Equal,
                (Some(left), Some(right)) => match left.try_cmp(&right) {
                    Some(natural) => direction.apply(natural),
                    None => {
                        return Err(SortError::IncomparableKeys {
                            descriptor: index,
                            left: left.kind(),
                            right: right.kind(),
                        });
                    }
                },
            };
            if ordering != Ordering::Equal {
                return Ok(ordering);
            }
        }
        Ok(Ordering::Equal)
    }

    /// Sorts a slice in place.
    ///
    /// The sort is stable: elements that compare equal under the whole
    /// plan keep their relative input order. Because of that, flipping
    /// every rule's direction reverses the output exactly only when no two
    /// elements tie under the full plan.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::EmptyPlan`] before touching the slice if the
    /// plan has no rules, even for an empty slice. If a comparison fails
    /// mid-sort ([`SortError::IncomparableKeys`]), the first failure is
    /// reported, the remaining comparisons are skipped, and the order of
    /// the slice is unspecified; no element is lost or duplicated.
    pub fn sort(&self, items: &mut [T]) -> SortResult<()> {
        if self.descriptors.is_empty() {
            return Err(SortError::EmptyPlan);
        }

        // First comparison failure is parked here; later comparisons
        // short-circuit Equal so the sort can finish and report it.
        let mut failure: Option<SortError> = None;
        items.sort_by(|a, b| {
            if failure.is_some() {
                return Ordering::Equal;
            }
            match self.compare(a, b) {
                Ok(ordering) => ordering,
                Err(error) => {
                    failure = Some(error);
                    Ordering::Equal
                }
            }
        });

        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Returns a new sorted `Vec`, leaving the input unchanged.
    ///
    /// The input only needs to be iterable by reference; elements are
    /// cloned into the result before sorting, so the caller's sequence is
    /// never reordered.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::EmptyPlan`] before copying anything if the
    /// plan has no rules. A comparison failure discards the copy, so no
    /// partially sorted sequence is ever returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use keysort::{key, SortPlan};
    ///
    /// let plan = SortPlan::by(key(|n: &i32| *n).descending());
    /// let numbers = vec![3, 1, 2];
    ///
    /// assert_eq!(plan.sorted(&numbers).unwrap(), vec![3, 2, 1]);
    /// assert_eq!(numbers, vec![3, 1, 2]);
    /// ```
    pub fn sorted<'a, I>(&self, items: I) -> SortResult<Vec<T>>
    where
        T: Clone + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        if self.descriptors.is_empty() {
            return Err(SortError::EmptyPlan);
        }

        let mut result: Vec<T> = items.into_iter().cloned().collect();
        self.sort(&mut result)?;
        Ok(result)
    }
}

impl<T> Default for SortPlan<T> {
    fn default() -> Self {
        SortPlan::new()
    }
}

impl<T> fmt::Debug for SortPlan<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortPlan")
            .field("descriptors", &self.descriptors)
            .finish()
    }
}
