//! # Keysort
//!
//! `keysort` sorts collections by one or more derived comparison keys, each
//! with its own ascending/descending direction, falling back to later keys
//! when earlier ones tie.
//!
//! A sort is described by a [`SortPlan`]: an ordered sequence of
//! [`SortDescriptor`]s, each pairing a key extractor with a [`Direction`].
//! Comparing two elements walks the descriptors in priority order and stops
//! at the first non-tie result; the plan then applies that comparison to a
//! collection through a stable sort, in place or into a fresh `Vec`.
//!
//! ## Key Features
//!
//! - **Multi-key comparison**: rules are independent and composed in
//!   insertion order; the first rule is the primary key and later rules only
//!   break ties.
//! - **Per-rule direction**: every rule carries its own ascending or
//!   descending flag, applied to present keys and to absent-key placement
//!   alike.
//! - **First-class absent keys**: extractors return `Option<`[`SortKey`]`>`.
//!   An absent key is data, not an error: it orders before present keys
//!   under an ascending rule, after them under a descending one, and two
//!   absent keys fall through to the next rule.
//! - **Stable, non-mutating by choice**: [`SortPlan::sort`] reorders the
//!   caller's slice, [`SortPlan::sorted`] copies any iterable input and
//!   leaves it untouched. Both preserve the input order of full ties.
//! - **Named accessors**: an [`AccessorRegistry`] plus [`PropertyKey`]
//!   resolve rules from property names (`"last_name"` → `get_last_name`,
//!   boolean `"adult"` → `is_adult`, or a custom prefix), the explicit
//!   stand-in for reflective getter lookup.
//! - **Fail-fast errors**: sorting with an empty plan, or comparing two
//!   present keys of different kinds, reports a [`SortError`] instead of
//!   producing a meaningless order.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! Build descriptors with [`key`] (or [`key_opt`] for keys that may be
//! absent) and chain them into a plan.
//!
//! ```rust
//! use keysort::{key, SortPlan};
//!
//! #[derive(Clone)]
//! struct City {
//!     name: &'static str,
//!     population: u32,
//! }
//!
//! let plan = SortPlan::by(key(|c: &City| c.population).descending())
//!     .then(key(|c: &City| c.name));
//!
//! let mut cities = vec![
//!     City { name: "Basel", population: 178_000 },
//!     City { name: "Zurich", population: 448_000 },
//!     City { name: "Geneva", population: 204_000 },
//! ];
//! plan.sort(&mut cities).unwrap();
//!
//! let names: Vec<_> = cities.iter().map(|c| c.name).collect();
//! assert_eq!(names, ["Zurich", "Geneva", "Basel"]);
//! ```
//!
//! ### Absent Keys
//!
//! ```rust
//! use keysort::{key, key_opt, SortPlan};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Task {
//!     title: &'static str,
//!     due_day: Option<i64>,
//! }
//!
//! let plan = SortPlan::by(key_opt(|t: &Task| t.due_day))
//!     .then(key(|t: &Task| t.title));
//!
//! let tasks = vec![
//!     Task { title: "water plants", due_day: None },
//!     Task { title: "file report", due_day: Some(12) },
//!     Task { title: "book flights", due_day: None },
//!     Task { title: "renew passport", due_day: Some(3) },
//! ];
//!
//! // Undated tasks sort first ascending (they tie on the first rule and
//! // fall through to the title); flip the rule to push them last.
//! let sorted = plan.sorted(&tasks).unwrap();
//! let titles: Vec<_> = sorted.iter().map(|t| t.title).collect();
//! assert_eq!(
//!     titles,
//!     ["book flights", "water plants", "renew passport", "file report"],
//! );
//! ```
//!
//! ### Named Properties
//!
//! When rules are configured by name (say, from a query string), register
//! the accessors once and refer to them through [`PropertyKey`] or the
//! [`property`] shorthand.
//!
//! ```rust
//! use std::sync::Arc;
//! use keysort::{property, AccessorRegistry, SortKey, SortPlan};
//!
//! #[derive(Clone)]
//! struct Person {
//!     name: String,
//!     age: i64,
//! }
//!
//! let registry = Arc::new(
//!     AccessorRegistry::new()
//!         .with("get_name", |p: &Person| Some(SortKey::from(p.name.as_str())))
//!         .with("get_age", |p: &Person| Some(SortKey::Int(p.age))),
//! );
//!
//! let plan = SortPlan::by(property(&registry, "age").descending())
//!     .then(property(&registry, "name"));
//!
//! let mut people = vec![
//!     Person { name: "Noor".into(), age: 41 },
//!     Person { name: "Ines".into(), age: 57 },
//!     Person { name: "Aled".into(), age: 41 },
//! ];
//! plan.sort(&mut people).unwrap();
//!
//! let names: Vec<_> = people.iter().map(|p| p.name.as_str()).collect();
//! assert_eq!(names, ["Ines", "Aled", "Noor"]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - Sorting is `slice::sort_by` underneath: O(N log N) comparisons, each
//!   evaluating at most R rules, so O(N · R · log N) key extractions in the
//!   worst case.
//! - Keys are extracted per comparison rather than cached, which keeps
//!   memory flat but makes extractor cost part of every comparison; keep
//!   extractors cheap, or pre-compute expensive keys into the elements.
//! - A plan is read-only while sorting. The same plan can sort any number
//!   of collections, concurrently too, as long as its configuration is not
//!   mutated mid-sort (the borrow checker enforces exactly that).

pub mod algo;
pub mod core;
pub mod error;
pub mod key;
pub mod property;

pub use algo::SortPlan;
pub use core::{key, key_opt, Direction, KeyExtractor, SortDescriptor};
pub use error::{SortError, SortResult};
pub use key::SortKey;
pub use property::{property, AccessorRegistry, PropertyKey, SharedExtractor};

pub mod prelude {
    pub use crate::algo::SortPlan;
    pub use crate::core::{key, key_opt, Direction, KeyExtractor, SortDescriptor};
    pub use crate::error::{SortError, SortResult};
    pub use crate::key::SortKey;
    pub use crate::property::{property, AccessorRegistry, PropertyKey};
}
