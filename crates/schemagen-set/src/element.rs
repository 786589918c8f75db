//! Set element capability

/// Anything that can be stored in an [`OrderedSet`](crate::OrderedSet)
///
/// Elements are cheap handles: cloning one must yield a handle to the same
/// underlying element, so that [`same_element`](Element::same_element) keeps
/// holding between the clone and the original.
pub trait Element: Clone {
    /// Name under which the element is stored
    fn name(&self) -> String;

    /// Identity comparison
    ///
    /// Two handles are the same element when they point at the same
    /// allocation. Structural equality does not count: two properties with
    /// equal bodies declared in different schemas are different elements.
    fn same_element(&self, other: &Self) -> bool;
}
