/// A value stored in a [`BinaryTree`](crate::BinaryTree) slot.
///
/// A node carries no links. Its neighbours are found by index arithmetic on
/// `position`, which is a cached copy of the node's slot in the backing array
/// and goes stale when the tree swaps nodes around. The tree repairs it with
/// [`BinaryTree::repair_positions`](crate::BinaryTree::repair_positions).
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) position: usize,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, position: usize) -> Self {
        Self { value, position }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Slot of the parent, `ceil(position / 2) - 1`. The root has none.
    ///
    /// The result is not checked against the tree size.
    #[inline]
    pub fn parent_index(&self) -> Option<usize> {
        parent_slot(self.position)
    }

    /// Slot of the left child, `2 * position + 1`. Not bounds-checked.
    #[inline]
    pub fn left_index(&self) -> usize {
        left_slot(self.position)
    }

    /// Slot of the right child, `2 * position + 2`. Not bounds-checked.
    #[inline]
    pub fn right_index(&self) -> usize {
        right_slot(self.position)
    }
}

#[inline]
pub(crate) fn parent_slot(i: usize) -> Option<usize> {
    ((i + 1) / 2).checked_sub(1)
}

#[inline]
pub(crate) fn left_slot(i: usize) -> usize {
    2 * i + 1
}

#[inline]
pub(crate) fn right_slot(i: usize) -> usize {
    2 * i + 2
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn test_root_has_no_parent() {
        let root = Node::new(1.0, 0);
        assert_eq!(None, root.parent_index());
        assert_eq!(1, root.left_index());
        assert_eq!(2, root.right_index());
    }

    #[test]
    fn test_parent_formula_matches_zero_indexed_convention() {
        // ceil(i/2) - 1 and floor((i-1)/2) must agree at every slot
        for i in 1..10_000_usize {
            let node = Node::new((), i);
            assert_eq!(Some((i - 1) / 2), node.parent_index(), "slot {i}");
        }
    }

    #[test]
    fn test_children_point_back_to_parent() {
        for i in 0..1_000_usize {
            let node = Node::new((), i);
            let left = Node::new((), node.left_index());
            let right = Node::new((), node.right_index());
            assert_eq!(Some(i), left.parent_index());
            assert_eq!(Some(i), right.parent_index());
            assert_eq!(left.position() + 1, right.position());
        }
    }

    #[test]
    fn test_small_positions() {
        let parents: Vec<Option<usize>> = (0..7).map(|i| Node::new((), i).parent_index()).collect();
        assert_eq!(
            vec![None, Some(0), Some(0), Some(1), Some(1), Some(2), Some(2)],
            parents
        );
    }
}
