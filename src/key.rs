//! Dynamically typed sort key values.
//!
//! Extractors hand back a [`SortKey`] per element rather than a concrete
//! type, which lets one plan mix rules over booleans, numbers, strings,
//! and raw bytes. Keys of different kinds are never compared against each
//! other; a plan whose rule produces mismatched kinds for two elements
//! fails the sort instead of guessing an order.

use std::cmp::Ordering;

/// A single sort key value produced by a key extractor.
///
/// Every variant carries an owned value with a total order within its own
/// kind. Cross-kind comparisons are undefined and reported as such by
/// [`try_cmp`](SortKey::try_cmp).
///
/// Integers are widened to `i64` and floats to `f64` on conversion, so
/// `SortKey::from(3u8)` and `SortKey::from(3i64)` compare equal. There is
/// deliberately no `From<u64>` or `From<usize>`: those do not always fit
/// in `i64`, and the caller should decide how to narrow them.
///
/// # Examples
///
/// ```rust
/// use keysort::SortKey;
///
/// let a = SortKey::from("apple");
/// let b = SortKey::from("banana");
/// assert!(a < b);
///
/// // Different kinds never compare.
/// assert_eq!(SortKey::from(1).try_cmp(&SortKey::from("1")), None);
/// ```
#[derive(Debug, Clone)]
pub enum SortKey {
    /// Boolean key; `false` orders before `true`.
    Bool(bool),
    /// Signed integer key.
    Int(i64),
    /// Floating point key, ordered by `f64::total_cmp`.
    Float(f64),
    /// UTF-8 string key, ordered lexicographically by code point.
    Str(String),
    /// Raw byte key, ordered lexicographically by byte value.
    Bytes(Vec<u8>),
}

impl SortKey {
    /// Returns a human-readable name for the key's kind.
    ///
    /// Used in [`SortError::IncomparableKeys`](crate::SortError) messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SortKey::Bool(_) => "boolean",
            SortKey::Int(_) => "integer",
            SortKey::Float(_) => "float",
            SortKey::Str(_) => "string",
            SortKey::Bytes(_) => "bytes",
        }
    }

    /// Compares two keys of the same kind, or returns `None` if the kinds
    /// differ.
    ///
    /// Floats are ordered with [`f64::total_cmp`], so NaN values have a
    /// defined position instead of poisoning the sort.
    pub fn try_cmp(&self, other: &SortKey) -> Option<Ordering> {
        match (self, other) {
            (SortKey::Bool(a), SortKey::Bool(b)) => Some(a.cmp(b)),
            (SortKey::Int(a), SortKey::Int(b)) => Some(a.cmp(b)),
            (SortKey::Float(a), SortKey::Float(b)) => Some(a.total_cmp(b)),
            (SortKey::Str(a), SortKey::Str(b)) => Some(a.cmp(b)),
            (SortKey::Bytes(a), SortKey::Bytes(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

// Equality and ordering delegate to try_cmp so that the partial order
// exposed through operators is exactly the one the sort engine uses.
impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.try_cmp(other), Some(Ordering::Equal))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other)
    }
}

impl From<bool> for SortKey {
    fn from(value: bool) -> Self {
        SortKey::Bool(value)
    }
}

macro_rules! impl_int_key {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for SortKey {
                fn from(value: $ty) -> Self {
                    SortKey::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_int_key!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for SortKey {
    fn from(value: f32) -> Self {
        SortKey::Float(f64::from(value))
    }
}

impl From<f64> for SortKey {
    fn from(value: f64) -> Self {
        SortKey::Float(value)
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        SortKey::Str(value.to_owned())
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        SortKey::Str(value)
    }
}

impl From<&String> for SortKey {
    fn from(value: &String) -> Self {
        SortKey::Str(value.clone())
    }
}

impl From<Vec<u8>> for SortKey {
    fn from(value: Vec<u8>) -> Self {
        SortKey::Bytes(value)
    }
}

impl From<&[u8]> for SortKey {
    fn from(value: &[u8]) -> Self {
        SortKey::Bytes(value.to_vec())
    }
}
