//! The "sized collection" contract shared by containers in this crate.

/// A container that counts its items and can be filled one item at a time.
///
/// # Examples
///
/// ```
/// use linked_bst::{Collection, Tree};
///
/// fn fill<C: Collection<u8>>(collection: &mut C) {
///     collection.add_all([3, 1, 2]);
/// }
///
/// let mut tree: Tree<u8> = Tree::new();
/// fill(&mut tree);
///
/// assert_eq!(Collection::len(&tree), 3);
/// assert!(!Collection::is_empty(&tree));
/// ```
pub trait Collection<T> {
    /// How many items are stored.
    fn len(&self) -> usize;

    /// Whether nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores one more item.
    fn add(&mut self, item: T);

    /// Drops every stored item.
    fn clear(&mut self);

    /// Stores every item of `items`, in iteration order.
    fn add_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        for item in items {
            self.add(item);
        }
    }
}
