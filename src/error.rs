/// Returned by [`Tree::copy_to`][crate::Tree::copy_to] when the destination slice can't hold
/// every element of the tree starting at the requested offset. Nothing is written when this is
/// returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cannot copy {needed} elements starting at index {start} into a slice of length {available}")]
pub struct CapacityError {
    /// The offset the copy was asked to start at.
    pub start: usize,
    /// How many elements the tree holds.
    pub needed: usize,
    /// The length of the destination slice.
    pub available: usize,
}
