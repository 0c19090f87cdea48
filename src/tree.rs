//! An owning, unbalanced BST. Each node is a `Box` owned by exactly one slot: either its parent's
//! `left`/`right` or the tree's `root`. There are no parent pointers. Operations that need to
//! relink the tree hold a `&mut` to the slot they're rewriting for the duration of the call.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Duplicates are kept.
//! tree.insert(1);
//! assert_eq!(tree.count(), 2);
//!
//! // Removing takes out one copy at a time.
//! assert!(tree.remove(&1));
//! assert!(tree.contains(&1));
//! assert!(tree.remove(&1));
//! assert!(!tree.contains(&1));
//! assert!(!tree.remove(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::error::CapacityError;
use crate::iter::{IntoIter, Iter};
use crate::util::{deallocate, Removal};

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// Returns the empty `left` slot of the last node on this node's left spine.
    fn leftmost_slot(&mut self) -> &mut Link<T> {
        let mut slot = &mut self.left;
        while let Some(node) = slot {
            slot = &mut node.left;
        }
        slot
    }
}

/// An unbalanced Binary Search Tree. This can be used for inserting, finding, and removing values
/// and for visiting them in sorted order.
pub struct Tree<T> {
    root: Link<T>,
    count: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        deallocate(self.root.take());
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
        }
    }

    /// How many values are stored in the tree, duplicates included. This is `O(1)`.
    pub fn count(&self) -> usize {
        self.count
    }

    /// An alias of [`count`][Self::count] matching the standard collections.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` into the tree. Every call adds exactly one node, so inserting a value that
    /// is already present stores another copy of it to the right of the existing one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.count(), 3);
    /// assert_eq!(tree.to_vec(), [1, 2, 2]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }
        *slot = Some(Node::new_boxed(value));
        self.count += 1;
    }

    /// Whether a value equal to `value` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Removes one node holding a value equal to `value`, namely the first one found walking
    /// down from the root. Returns whether anything was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let mut tree: Tree<_> = vec![4, 2, 6].into_iter().collect();
    ///
    /// assert!(tree.remove(&4));
    /// assert!(!tree.remove(&4));
    /// assert_eq!(tree.to_vec(), [2, 6]);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        self.remove_node(value).removed()
    }

    fn remove_node(&mut self, value: &T) -> Removal
    where
        T: Ord,
    {
        let removal = self.unlink(value);
        if removal.removed() {
            self.count -= 1;
            log::trace!("removed node ({:?}), {} remaining", removal, self.count);
        }
        removal
    }

    /// Detaches the first node equal to `value` and stitches its children back into the slot it
    /// occupied.
    fn unlink(&mut self, value: &T) -> Removal
    where
        T: Ord,
    {
        let Some(slot) = self.slot_of(value) else {
            return Removal::NotFound;
        };
        let Some(mut node) = slot.take() else {
            return Removal::NotFound;
        };

        let (replacement, removal) = match (node.left.take(), node.right.take()) {
            (None, None) => (None, Removal::Leaf),
            (Some(child), None) | (None, Some(child)) => (Some(child), Removal::Spliced),
            (Some(left), Some(mut right)) => {
                // Everything on the left is smaller than everything on the right so it can hang
                // below the right subtree's minimum.
                *right.leftmost_slot() = Some(left);
                (Some(right), Removal::Promoted)
            }
        };
        *slot = replacement;
        removal
    }

    /// Returns the slot that owns the first node equal to `value` on the search path.
    fn slot_of(&mut self, value: &T) -> Option<&mut Link<T>>
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        loop {
            let ordering = value.cmp(&slot.as_deref()?.value);
            if ordering == Ordering::Equal {
                return Some(slot);
            }
            let node = slot.as_mut()?;
            slot = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    }

    /// Removes every value from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (0..10).collect();
    /// tree.clear();
    ///
    /// assert_eq!(tree.count(), 0);
    /// assert_eq!(tree.iter().next(), None);
    /// ```
    pub fn clear(&mut self) {
        let released = deallocate(self.root.take());
        self.count = 0;
        log::trace!("cleared {} nodes", released);
    }

    /// Visits every value in sorted order. Equal values come out in the order they were inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![3, 1, 2].into_iter().collect();
    /// let mut iter = tree.iter();
    ///
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.count)
    }

    /// Clones every value, in sorted order, into `dest` starting at index `start`.
    ///
    /// If `dest` is too short to hold [`count`][Self::count] values from `start` onwards, a
    /// [`CapacityError`] is returned and `dest` is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![3, 1, 2].into_iter().collect();
    /// let mut buffer = [0; 5];
    ///
    /// tree.copy_to(&mut buffer, 1).unwrap();
    /// assert_eq!(buffer, [0, 1, 2, 3, 0]);
    ///
    /// assert!(tree.copy_to(&mut buffer, 3).is_err());
    /// assert_eq!(buffer, [0, 1, 2, 3, 0]);
    /// ```
    pub fn copy_to(&self, dest: &mut [T], start: usize) -> Result<(), CapacityError>
    where
        T: Clone,
    {
        let end = start
            .checked_add(self.count)
            .filter(|&end| end <= dest.len())
            .ok_or(CapacityError {
                start,
                needed: self.count,
                available: dest.len(),
            })?;

        for (slot, value) in dest[start..end].iter_mut().zip(self.iter()) {
            slot.clone_from(value);
        }
        Ok(())
    }

    /// Clones the values into a new, sorted `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// The smallest value in the tree, found at the bottom of the root's left spine.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree. With duplicates, this is the most recently inserted copy.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// How many levels the tree has. An empty tree has a height of 0 and a lone root has a height
    /// of 1. Inserting `N` values in sorted order gives a height of `N`.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<_> = self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        height
    }
}

/// One unit of work for the iterative [`Clone`].
enum CloneStep<'a, T> {
    /// Clone this subtree. Its result ends up on top of the built stack.
    Enter(Option<&'a Node<T>>),
    /// Both children of this node are on top of the built stack, right above left.
    Assemble(&'a Node<T>),
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// Copies the tree node for node, keeping its exact shape.
    fn clone(&self) -> Self {
        let mut pending = vec![CloneStep::Enter(self.root.as_deref())];
        let mut built: Vec<Link<T>> = Vec::new();

        while let Some(step) = pending.pop() {
            match step {
                CloneStep::Enter(None) => built.push(None),
                CloneStep::Enter(Some(node)) => {
                    pending.push(CloneStep::Assemble(node));
                    pending.push(CloneStep::Enter(node.right.as_deref()));
                    pending.push(CloneStep::Enter(node.left.as_deref()));
                }
                CloneStep::Assemble(node) => {
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();
                    built.push(Some(Box::new(Node {
                        value: node.value.clone(),
                        left,
                        right,
                    })));
                }
            }
        }

        Self {
            root: built.pop().flatten(),
            count: self.count,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Trees are equal when they hold the same values, regardless of shape.
impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter::new(self.root.take(), self.count)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
