//! Common ID Types
//!
//! Type-safe ID wrappers for remote entities. The API hands out
//! numeric identifiers, so IDs are owned by the server; the client
//! never mints one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// let id = UserId::from_raw(42);
/// assert_eq!(id.as_i64(), 42);
/// ```
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    value: i64,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wrap a server-issued identifier
    pub const fn from_raw(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying value
    pub const fn as_i64(&self) -> i64 {
        self.value
    }
}

// Manual impls: derives would bound on T, which is only a marker.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_raw(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for Shop IDs
    pub struct Shop;

    /// Marker for Product IDs
    pub struct Product;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type ShopId = Id<markers::Shop>;
pub type ProductId = Id<markers::Product>;
