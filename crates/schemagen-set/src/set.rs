//! Ordered set keyed by element name
//!
//! Provides [`OrderedSet`] with overwrite and safe insertion semantics.
//! Storage is a `BTreeMap`, so every enumeration is sorted by name.

use crate::element::Element;
use std::collections::btree_map::{self, BTreeMap};

/// Name-keyed set with deterministic enumeration
///
/// # Insertion modes
/// - [`insert`](Self::insert): overwrite on name collision
/// - [`safe_insert`](Self::safe_insert): fail if a *different* element owns the name
/// - [`safe_insert_all`](Self::safe_insert_all): transactional bulk safe insert
#[derive(Debug, Clone)]
pub struct OrderedSet<T: Element> {
    entries: BTreeMap<String, T>,
}

/// Errors from ordered set operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetError {
    /// A different element with the same name is already present
    #[error("the element with the name {name} already in the set")]
    DuplicateName {
        /// Conflicting name
        name: String,
    },
}

impl<T: Element> OrderedSet<T> {
    /// Create empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Number of elements
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if set has no elements
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if an element with the same name is present
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.entries.contains_key(&element.name())
    }

    /// Check if the name is taken
    #[inline]
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Lookup element by name
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    /// Element with the smallest name, if any
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.entries.values().next()
    }

    /// Insert element, replacing whatever owned its name
    ///
    /// Returns the replaced element.
    #[inline]
    pub fn insert(&mut self, element: T) -> Option<T> {
        self.entries.insert(element.name(), element)
    }

    /// Insert every element of `other`, overwriting on collisions
    pub fn insert_all(&mut self, other: &OrderedSet<T>) {
        for element in other.iter() {
            self.insert(element.clone());
        }
    }

    /// Insert element unless a different element owns its name
    ///
    /// Re-inserting the same element (by identity) is a no-op.
    ///
    /// # Errors
    /// [`SetError::DuplicateName`] if another element with the same name is present
    pub fn safe_insert(&mut self, element: T) -> Result<(), SetError> {
        if let Some(name) = self.conflict(&element) {
            return Err(SetError::DuplicateName { name });
        }
        self.insert(element);
        Ok(())
    }

    /// Insert every element of `other` or none of them
    ///
    /// # Errors
    /// [`SetError::DuplicateName`] for the first conflicting name (in name
    /// order); the set is left unchanged.
    pub fn safe_insert_all(&mut self, other: &OrderedSet<T>) -> Result<(), SetError> {
        if let Some(name) = other.iter().find_map(|element| self.conflict(element)) {
            return Err(SetError::DuplicateName { name });
        }
        self.insert_all(other);
        Ok(())
    }

    /// Remove the element owning the name of `element`
    #[inline]
    pub fn remove(&mut self, element: &T) -> Option<T> {
        self.entries.remove(&element.name())
    }

    /// Remove element by name
    #[inline]
    pub fn remove_name(&mut self, name: &str) -> Option<T> {
        self.entries.remove(name)
    }

    /// Elements sorted ascending by name
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.values().cloned().collect()
    }

    /// Names sorted ascending
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Iterate elements in name order
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.entries.values(),
        }
    }

    fn conflict(&self, element: &T) -> Option<String> {
        let name = element.name();
        match self.entries.get(&name) {
            Some(present) if !present.same_element(element) => Some(name),
            _ => None,
        }
    }
}

impl<T: Element> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for element in iter {
            set.insert(element);
        }
        set
    }
}

impl<'a, T: Element> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over set elements in name order
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: btree_map::Values<'a, String, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
