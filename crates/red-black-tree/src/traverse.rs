//! Whole-tree walks and the printable node view.

use std::collections::VecDeque;
use std::fmt;

use tree_dump::BinaryNode;

use crate::node::RawTree;
use crate::types::RbNode;

impl<K, V> RawTree<K, V> {
    /// Nodes level by level, left to right.
    pub fn breadth_first(&self) -> Vec<&RbNode<K, V>> {
        let mut out = Vec::with_capacity(self.len());
        let mut queue: VecDeque<u32> = self.root.into_iter().collect();
        while let Some(n) = queue.pop_front() {
            let node = &self.arena[n];
            queue.extend(node.l);
            queue.extend(node.r);
            out.push(node);
        }
        out
    }

    /// Nodes in ascending key order.
    pub fn in_order(&self) -> Vec<&RbNode<K, V>> {
        self.in_order_slots()
            .into_iter()
            .map(|n| &self.arena[n])
            .collect()
    }

    pub fn in_order_slots(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut curr = self.root;
        loop {
            while let Some(n) = curr {
                stack.push(n);
                curr = self.arena[n].l;
            }
            let Some(n) = stack.pop() else {
                break;
            };
            out.push(n);
            curr = self.arena[n].r;
        }
        out
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<u32> = self.root.into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|&n| [self.arena[n].l, self.arena[n].r])
                .flatten()
                .collect();
        }
        height
    }

    pub fn node_ref(&self, n: u32) -> NodeRef<'_, K, V> {
        NodeRef { tree: self, n }
    }
}

/// A node paired with the tree it lives in, so it can reach its children.
pub(crate) struct NodeRef<'a, K, V> {
    tree: &'a RawTree<K, V>,
    n: u32,
}

impl<K, V> BinaryNode for NodeRef<'_, K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn left(&self) -> Option<Self> {
        self.tree.arena[self.n].l.map(|n| self.tree.node_ref(n))
    }

    fn right(&self) -> Option<Self> {
        self.tree.arena[self.n].r.map(|n| self.tree.node_ref(n))
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for NodeRef<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = &self.tree.arena[self.n];
        write!(f, "{}-{}({})", node.k, node.v, node.colour)
    }
}
