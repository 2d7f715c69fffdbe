//! Error types for sort plan construction and execution.

use thiserror::Error;

/// Errors that can occur while executing a sort plan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A sort was attempted with a plan that contains no descriptors.
    ///
    /// A plan with zero rules cannot express any ordering, so both
    /// [`SortPlan::sort`](crate::SortPlan::sort) and
    /// [`SortPlan::sorted`](crate::SortPlan::sorted) reject it up front
    /// instead of silently leaving the input untouched.
    #[error("sort plan contains no descriptors")]
    EmptyPlan,

    /// Two present keys produced by the same descriptor could not be
    /// compared because they are of different kinds.
    ///
    /// `descriptor` is the zero-based position of the offending rule in
    /// the plan; `left` and `right` name the key kinds that clashed
    /// (e.g. `"integer"` vs `"string"`).
    #[error("descriptor {descriptor} produced incomparable keys: {left} vs {right}")]
    IncomparableKeys {
        descriptor: usize,
        left: &'static str,
        right: &'static str,
    },
}

/// Result type for sort operations.
pub type SortResult<T> = Result<T, SortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            SortError::EmptyPlan.to_string(),
            "sort plan contains no descriptors"
        );
        let err = SortError::IncomparableKeys {
            descriptor: 2,
            left: "integer",
            right: "string",
        };
        assert_eq!(
            err.to_string(),
            "descriptor 2 produced incomparable keys: integer vs string"
        );
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(SortError::EmptyPlan, SortError::EmptyPlan.clone());
        assert_ne!(
            SortError::EmptyPlan,
            SortError::IncomparableKeys {
                descriptor: 0,
                left: "boolean",
                right: "float",
            }
        );
    }
}
