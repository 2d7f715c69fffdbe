//! Core traits and types for key-based sorting.
//!
//! This module defines:
//! - [`KeyExtractor`]: The main trait users implement to derive sort keys
//!   from their elements.
//! - [`Direction`]: Ascending/descending flag applied to key comparisons.
//! - [`SortDescriptor`]: One sort rule, pairing an extractor with a direction.

use std::cmp::Ordering;
use std::fmt;

use crate::key::SortKey;

/// A trait for deriving a comparison key from an element.
///
/// Returning `None` marks the key as absent for that element. Absent keys
/// are not an error: the comparison walk gives them a defined position
/// relative to present keys and lets two absent keys fall through to the
/// next rule.
///
/// Closures of shape `Fn(&T) -> Option<SortKey>` implement this trait
/// automatically; for infallible keys prefer the [`key`] helper, which
/// handles the `Option` and [`SortKey`] conversions.
///
/// # Examples
///
/// Implementing for a custom extractor type:
///
/// ```
/// use keysort::{KeyExtractor, SortKey};
///
/// struct Adult {
///     threshold: u32,
/// }
///
/// struct Person {
///     age: u32,
/// }
///
/// impl KeyExtractor<Person> for Adult {
///     fn key(&self, person: &Person) -> Option<SortKey> {
///         Some(SortKey::Bool(person.age >= self.threshold))
///     }
/// }
/// ```
pub trait KeyExtractor<T> {
    /// Returns the element's key, or `None` if this element has no key
    /// under this rule.
    fn key(&self, item: &T) -> Option<SortKey>;
}

// Blanket implementation so plain closures are extractors.
impl<T, F> KeyExtractor<T> for F
where
    F: Fn(&T) -> Option<SortKey>,
{
    fn key(&self, item: &T) -> Option<SortKey> {
        self(item)
    }
}

/// Sort direction for a single rule.
///
/// Descending reverses the natural order of the extracted keys, including
/// the relative position of absent keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Smallest key first. The default.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

impl Direction {
    /// Applies the direction to an ascending comparison result.
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// A single sort rule: a key extractor paired with a direction.
///
/// Descriptors are assembled into a [`SortPlan`](crate::SortPlan), where
/// their insertion order decides priority. A descriptor holds no state
/// about its position in the plan and is never mutated by a sort.
///
/// The usual way to build one is [`key`] or [`key_opt`]; `new` exists for
/// named [`KeyExtractor`] implementations.
pub struct SortDescriptor<T> {
    extractor: Box<dyn KeyExtractor<T> + Send + Sync>,
    direction: Direction,
}

impl<T> SortDescriptor<T> {
    /// Creates an ascending descriptor from any extractor.
    pub fn new(extractor: impl KeyExtractor<T> + Send + Sync + 'static) -> Self {
        Self::with_direction(extractor, Direction::Ascending)
    }

    /// Creates a descriptor with an explicit direction.
    pub fn with_direction(
        extractor: impl KeyExtractor<T> + Send + Sync + 'static,
        direction: Direction,
    ) -> Self {
        SortDescriptor {
            extractor: Box::new(extractor),
            direction,
        }
    }

    /// Sets the direction to ascending. Chainable.
    pub fn ascending(mut self) -> Self {
        self.direction = Direction::Ascending;
        self
    }

    /// Sets the direction to descending. Chainable.
    pub fn descending(mut self) -> Self {
        self.direction = Direction::Descending;
        self
    }

    /// Changes the direction of an already constructed descriptor.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Returns the descriptor's direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Extracts the key for one element.
    pub fn extract(&self, item: &T) -> Option<SortKey> {
        self.extractor.key(item)
    }
}

impl<T> fmt::Debug for SortDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortDescriptor")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

/// Builds an ascending descriptor from an infallible key function.
///
/// The function's return value converts into a [`SortKey`], so field
/// reads need no wrapping. Chain [`descending`](SortDescriptor::descending)
/// to flip the direction.
///
/// # Examples
///
/// ```
/// use keysort::{key, SortPlan};
///
/// let plan = SortPlan::by(key(|word: &&str| word.len() as i64))
///     .then(key(|word: &&str| word.to_string()));
///
/// let mut words = vec!["cherry", "fig", "banana", "kiwi"];
/// plan.sort(&mut words).unwrap();
/// assert_eq!(words, vec!["fig", "kiwi", "banana", "cherry"]);
/// ```
pub fn key<T, F, K>(f: F) -> SortDescriptor<T>
where
    F: Fn(&T) -> K + Send + Sync + 'static,
    K: Into<SortKey>,
{
    SortDescriptor::new(move |item: &T| Some(f(item).into()))
}

/// Builds an ascending descriptor from a key function that may report
/// absence.
///
/// `None` marks the element's key as absent for this rule; two absent
/// keys tie and fall through to the next rule.
///
/// # Examples
///
/// ```
/// use keysort::{key_opt, SortPlan};
///
/// struct Task {
///     priority: Option<i64>,
/// }
///
/// let plan = SortPlan::by(key_opt(|t: &Task| t.priority));
/// ```
pub fn key_opt<T, F, K>(f: F) -> SortDescriptor<T>
where
    F: Fn(&T) -> Option<K> + Send + Sync + 'static,
    K: Into<SortKey>,
{
    SortDescriptor::new(move |item: &T| f(item).map(Into::into))
}
