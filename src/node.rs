/// An owning link to a subtree. `None` marks the empty spot below a leaf.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single item in the tree along with its (up to) two children. A `Node` has no behavior of its
/// own - keeping the items in order is entirely the job of [`Tree`][crate::Tree].
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(item: T) -> Box<Self> {
        Box::new(Self {
            item,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Existing children, left before right.
    pub(crate) fn children(&self) -> impl Iterator<Item = &Self> {
        self.left().into_iter().chain(self.right())
    }

    /// Replaces this node's item with the largest item in its left subtree and splices the node
    /// that held it out of the tree. Returns the item that was stored here.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///        self(8)                 self(6)
    ///       /      \                /      \
    ///      4        9   lift ->    4        9
    ///     / \                     / \
    ///    2   6                   2   5
    ///       /
    ///      5
    /// ```
    pub(crate) fn lift_max_in_left_subtree(&mut self) -> T {
        let mut slot = &mut self.left;
        while slot.as_ref().is_some_and(|node| node.right.is_some()) {
            slot = &mut slot.as_mut().expect("Checked by the loop condition => node").right;
        }

        let max = slot.take().expect("Lifting from the left subtree => left child");
        let Node { item, left, .. } = *max;
        *slot = left;

        std::mem::replace(&mut self.item, item)
    }
}
