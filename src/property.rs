//! Named-property sort rules backed by an accessor registry.
//!
//! In runtimes with reflection, "sort by the `last_name` property" resolves
//! a getter by name at runtime. This module provides the explicit
//! equivalent: an [`AccessorRegistry`] maps accessor names to key
//! extractors, and a [`PropertyKey`] holds a property name plus a prefix
//! convention (`get`, `is`, or a custom one) and resolves the accessor per
//! element at extraction time.
//!
//! Resolution misses are not errors: the key is treated as absent for that
//! element and the miss is recorded through [`tracing`], so a misnamed
//! property degrades the order instead of aborting the sort. Callers who
//! want misses to be loud should watch for those warnings.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::core::{KeyExtractor, SortDescriptor};
use crate::key::SortKey;

/// Accessor prefix used by [`PropertyKey::new`]: `get`, as in
/// `get_last_name`.
pub const DEFAULT_ACCESSOR_PREFIX: &str = "get";

/// Accessor prefix used by [`PropertyKey::boolean`]: `is`, as in
/// `is_adult`.
pub const BOOLEAN_ACCESSOR_PREFIX: &str = "is";

/// A key extractor shared between a registry and the property keys that
/// resolve against it.
pub type SharedExtractor<T> = Arc<dyn KeyExtractor<T> + Send + Sync>;

/// A name-to-extractor table for one element type.
///
/// The registry is the explicit stand-in for runtime getter lookup: each
/// entry pairs an accessor name (`"get_last_name"`, `"is_adult"`, ...)
/// with the extractor that reads that value from an element. Registries
/// are built once, wrapped in an [`Arc`], and shared by every
/// [`PropertyKey`] over the same element type.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use keysort::{AccessorRegistry, SortKey};
///
/// struct City {
///     name: String,
///     population: i64,
/// }
///
/// let registry = Arc::new(
///     AccessorRegistry::new()
///         .with("get_name", |c: &City| Some(SortKey::from(c.name.as_str())))
///         .with("get_population", |c: &City| Some(SortKey::Int(c.population))),
/// );
/// assert!(registry.lookup("get_name").is_some());
/// assert!(registry.lookup("get_mayor").is_none());
/// ```
pub struct AccessorRegistry<T> {
    accessors: HashMap<String, SharedExtractor<T>>,
}

impl<T> AccessorRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        AccessorRegistry {
            accessors: HashMap::new(),
        }
    }

    /// Registers an extractor under an accessor name. Chainable.
    ///
    /// Registering the same name twice keeps the later extractor.
    pub fn with(
        mut self,
        name: impl Into<String>,
        extractor: impl KeyExtractor<T> + Send + Sync + 'static,
    ) -> Self {
        self.accessors.insert(name.into(), Arc::new(extractor));
        self
    }

    /// Looks up the extractor registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<&SharedExtractor<T>> {
        self.accessors.get(name)
    }
}

impl<T> Default for AccessorRegistry<T> {
    fn default() -> Self {
        AccessorRegistry::new()
    }
}

impl<T> fmt::Debug for AccessorRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.accessors.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("AccessorRegistry")
            .field("accessors", &names)
            .finish()
    }
}

/// A sort key named by property, resolved through an [`AccessorRegistry`].
///
/// The accessor name is formed from a prefix and the property name:
/// `get` by default (`get_first_name`), `is` for boolean-style properties
/// (`is_adult`), or any custom prefix (`describe` + `home_address` =
/// `describe_home_address`). A blank prefix uses the property name as the
/// accessor name unchanged.
///
/// Resolution happens against the registry once per extraction, so a key
/// whose accessor is missing yields an absent key for every element rather
/// than failing the sort; see the module docs for the logging side of
/// that.
pub struct PropertyKey<T> {
    registry: Arc<AccessorRegistry<T>>,
    property: String,
    prefix: String,
}

impl<T> PropertyKey<T> {
    /// Creates a key for `property` using the `get` accessor convention.
    pub fn new(registry: &Arc<AccessorRegistry<T>>, property: impl Into<String>) -> Self {
        PropertyKey {
            registry: Arc::clone(registry),
            property: property.into(),
            prefix: DEFAULT_ACCESSOR_PREFIX.to_owned(),
        }
    }

    /// Creates a key for a boolean-style `property` using the `is`
    /// accessor convention.
    pub fn boolean(registry: &Arc<AccessorRegistry<T>>, property: impl Into<String>) -> Self {
        PropertyKey::new(registry, property).with_prefix(BOOLEAN_ACCESSOR_PREFIX)
    }

    /// Replaces the accessor prefix. Chainable.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replaces the accessor prefix on an already constructed key.
    pub fn set_accessor_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Returns the property name this key sorts by.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Returns the accessor name the key resolves against the registry.
    ///
    /// A blank (empty or whitespace) prefix yields the bare property name.
    pub fn accessor_name(&self) -> String {
        let prefix = self.prefix.trim();
        if prefix.is_empty() {
            self.property.clone()
        } else {
            format!("{prefix}_{}", self.property)
        }
    }
}

impl<T> KeyExtractor<T> for PropertyKey<T> {
    fn key(&self, item: &T) -> Option<SortKey> {
        let accessor = self.accessor_name();
        match self.registry.lookup(&accessor) {
            Some(extractor) => extractor.key(item),
            None => {
                tracing::warn!(
                    property = %self.property,
                    accessor = %accessor,
                    "no accessor registered for property; treating key as absent"
                );
                None
            }
        }
    }
}

impl<T> Clone for PropertyKey<T> {
    fn clone(&self) -> Self {
        PropertyKey {
            registry: Arc::clone(&self.registry),
            property: self.property.clone(),
            prefix: self.prefix.clone(),
        }
    }
}

impl<T> fmt::Debug for PropertyKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyKey")
            .field("property", &self.property)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> From<PropertyKey<T>> for SortDescriptor<T> {
    fn from(key: PropertyKey<T>) -> Self {
        SortDescriptor::new(key)
    }
}

/// Builds an ascending descriptor for a `get`-prefixed property.
///
/// Shorthand for wrapping [`PropertyKey::new`] in a descriptor; chain
/// [`descending`](SortDescriptor::descending) to flip the direction, or
/// build the [`PropertyKey`] directly when another prefix is needed.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use keysort::{property, AccessorRegistry, SortKey, SortPlan};
///
/// let registry = Arc::new(
///     AccessorRegistry::new().with("get_len", |s: &&str| Some(SortKey::Int(s.len() as i64))),
/// );
///
/// let plan = SortPlan::by(property(&registry, "len").descending());
/// let mut words = vec!["fig", "banana", "kiwi"];
/// plan.sort(&mut words).unwrap();
/// assert_eq!(words, vec!["banana", "kiwi", "fig"]);
/// ```
pub fn property<T: 'static>(
    registry: &Arc<AccessorRegistry<T>>,
    property: impl Into<String>,
) -> SortDescriptor<T> {
    SortDescriptor::new(PropertyKey::new(registry, property))
}
