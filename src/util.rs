use crate::tree::Node;

/// How [`Tree::remove`][crate::Tree::remove] unlinked a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Removal {
    /// No node held the value so nothing was removed.
    NotFound,
    /// The node had no children. The slot that owned it is now empty.
    Leaf,
    /// The node had exactly one child, which moved into the node's slot.
    Spliced,
    /// The node had two children. Its right child moved into the node's slot and its left
    /// subtree now hangs off the bottom of that right child's left spine.
    Promoted,
}

impl Removal {
    pub(crate) fn removed(self) -> bool {
        self != Removal::NotFound
    }
}

/// Drops every node reachable from `nodes` one at a time and returns how many were released.
///
/// The compiler-generated drop of a `Box<Node>` recurses into both children, which overflows the
/// stack on a degenerate tree. Detaching the children before each node is dropped keeps it flat.
pub(crate) fn deallocate<T>(nodes: impl IntoIterator<Item = Box<Node<T>>>) -> usize {
    let mut stack: Vec<_> = nodes.into_iter().collect();
    let mut released = 0;
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
        released += 1;
    }
    released
}
