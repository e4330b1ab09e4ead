use crate::error::TreeError;
use crate::node::{left_slot, parent_slot, right_slot, Node};

/// A complete binary tree stored in level order.
///
/// Values enter only through [`insert`](Self::insert), which appends a new
/// leaf. [`build_max_heap`](Self::build_max_heap) reorders the slots in place
/// so that no child compares greater than its parent.
#[derive(Debug, Clone)]
pub struct BinaryTree<T = f64>
where
    T: std::fmt::Debug + std::cmp::PartialEq + std::cmp::PartialOrd,
{
    nodes: Vec<Node<T>>,
    size: usize,
    // last slot that can have children, `floor(size / 2) - 1`
    last_internal: Option<usize>,
}

impl<T> BinaryTree<T>
where
    T: std::fmt::Debug + std::cmp::PartialEq + std::cmp::PartialOrd,
{
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            size: 0,
            last_internal: None,
        }
    }

    pub fn insert(&mut self, value: T) {
        self.nodes.push(Node::new(value, self.size));
        self.size = self.nodes.len();
        self.last_internal = (self.size / 2).checked_sub(1);
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn last_internal_index(&self) -> Option<usize> {
        self.last_internal
    }

    /// Nodes in slot order. Their cached positions may be stale after a
    /// heap operation until [`repair_positions`](Self::repair_positions) runs.
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Result<&Node<T>, TreeError> {
        self.check_index(index)?;
        Ok(&self.nodes[index])
    }

    pub fn parent_of(&self, index: usize) -> Result<Option<usize>, TreeError> {
        self.check_index(index)?;
        Ok(parent_slot(index))
    }

    pub fn left_of(&self, index: usize) -> Result<Option<usize>, TreeError> {
        self.check_index(index)?;
        Ok(Some(left_slot(index)).filter(|&l| l < self.size))
    }

    pub fn right_of(&self, index: usize) -> Result<Option<usize>, TreeError> {
        self.check_index(index)?;
        Ok(Some(right_slot(index)).filter(|&r| r < self.size))
    }

    /// Rewrites every node's cached position to its current slot.
    pub fn repair_positions(&mut self) {
        for (i, node) in self.nodes.iter_mut().enumerate() {
            node.position = i;
        }
    }

    /// Sifts the node at `root_index` down until neither child is greater.
    ///
    /// Both subtrees of `root_index` must already be max-heaps. Swapped nodes
    /// keep their old cached positions.
    pub fn heapify(&mut self, root_index: usize) -> Result<(), TreeError> {
        self.check_index(root_index)?;
        Self::sift_down(&mut self.nodes, root_index);
        Ok(())
    }

    /// Turns the whole array into a max-heap, bottom-up from the last
    /// internal slot to the root.
    pub fn build_max_heap(&mut self) {
        let Some(last) = self.last_internal else {
            return;
        };
        log::debug!("building max-heap over internal slots {}..=0", last);
        for i in (0..=last).rev() {
            Self::sift_down(&mut self.nodes, i);
        }
    }

    /// Whether no child compares greater than its parent.
    pub fn is_max_heap(&self) -> bool {
        (1..self.size).all(|i| match parent_slot(i) {
            Some(p) => !(self.nodes[i].value > self.nodes[p].value),
            None => true,
        })
    }

    fn sift_down(nodes: &mut [Node<T>], start: usize) {
        let end = nodes.len();
        let mut i = start;
        while i < end {
            let mut largest = i;
            let (left, right) = (left_slot(i), right_slot(i));
            if left < end && nodes[left].value > nodes[largest].value {
                largest = left;
            }
            if right < end && nodes[right].value > nodes[largest].value {
                largest = right;
            }
            if largest == i {
                return;
            }
            log::trace!(
                "swap slot {} ({:?}) with slot {} ({:?})",
                i,
                nodes[i].value,
                largest,
                nodes[largest].value
            );
            nodes.swap(largest, i);
            i = largest;
        }
    }

    fn check_index(&self, index: usize) -> Result<(), TreeError> {
        if index < self.size {
            Ok(())
        } else {
            Err(TreeError::IndexOutOfBounds {
                index,
                size: self.size,
            })
        }
    }
}

impl<T> BinaryTree<T>
where
    T: std::fmt::Debug + std::cmp::PartialEq + std::cmp::PartialOrd + Clone,
{
    pub fn values(&self) -> Vec<T> {
        self.nodes.iter().map(|node| node.value.clone()).collect()
    }

    /// `(parent, child)` value pairs in slot order.
    ///
    /// Repairs the cached positions first.
    pub fn edges(&mut self) -> Vec<(T, T)> {
        self.repair_positions();
        let mut edges = Vec::with_capacity(self.size.saturating_sub(1));
        let Some(last) = self.last_internal else {
            return edges;
        };
        for node in self.nodes.iter().filter(|node| node.position <= last) {
            for child in [node.left_index(), node.right_index()] {
                if child < self.size {
                    edges.push((node.value.clone(), self.nodes[child].value.clone()));
                }
            }
        }
        edges
    }
}

impl<T> Default for BinaryTree<T>
where
    T: std::fmt::Debug + std::cmp::PartialEq + std::cmp::PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for BinaryTree<T>
where
    T: std::fmt::Debug + std::cmp::PartialEq + std::cmp::PartialOrd,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for BinaryTree<T>
where
    T: std::fmt::Debug + std::cmp::PartialEq + std::cmp::PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
