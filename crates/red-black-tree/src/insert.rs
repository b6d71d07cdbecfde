//! Insertion and the insertion fix-up.
//!
//! A new node is attached red. The only invariant that can break is "no red
//! node has a red parent", and the fix-up walks upwards until it holds:
//!
//! | Case | Shape                                   | Action                                     |
//! |------|-----------------------------------------|--------------------------------------------|
//! | A    | `n` is the root                         | paint `n` black, stop                      |
//! | B    | parent black                            | stop                                       |
//! | C    | parent and uncle red                    | paint both black, grandparent red, go up   |
//! | D    | uncle black, `n` is an inner grandchild | rotate parent away, continue as E          |
//! | E    | uncle black, `n` is an outer grandchild | rotate grandparent towards uncle, recolour |

use std::fmt;

use tracing::trace;

use crate::error::{Fault, OrAbort, TreeError};
use crate::node::RawTree;
use crate::types::{Colour, Location, RbNode};

impl<K: Ord + fmt::Debug, V> RawTree<K, V> {
    /// Inserts a new key; returns the slot of the new node.
    ///
    /// The duplicate check happens before anything is allocated, so a
    /// rejected insert leaves the tree untouched.
    pub fn insert(&mut self, key: K, value: V) -> Result<u32, TreeError> {
        match self.locate(&key) {
            Location::Occupied(_) => Err(TreeError::already_exists(&key)),
            Location::Empty => {
                let n = self.arena.alloc(RbNode::new(key, value, Colour::Black));
                self.root = Some(n);
                Ok(n)
            }
            Location::Vacant { parent, side } => {
                let n = self.attach(parent, side, key, value);
                self.fix_after_insert(n).or_abort();
                Ok(n)
            }
        }
    }
}

impl<K, V> RawTree<K, V> {
    pub(crate) fn fix_after_insert(&mut self, mut n: u32) -> Result<(), Fault> {
        loop {
            let Some(mut p) = self.parent(n) else {
                trace!(node = n, case = "A", "insert fix-up");
                self.set_colour(n, Colour::Black);
                return Ok(());
            };

            if self.colour(p).is_black() {
                trace!(node = n, case = "B", "insert fix-up");
                return Ok(());
            }

            // A red parent is never the root.
            let g = self.parent(p).ok_or(Fault::MissingParent { node: p })?;
            let p_side = self.child_side(g, p)?;

            match self.uncle(n)? {
                Some(u) if self.colour(u).is_red() => {
                    trace!(node = n, case = "C", "insert fix-up");
                    self.set_colour(p, Colour::Black);
                    self.set_colour(u, Colour::Black);
                    self.set_colour(g, Colour::Red);
                    n = g;
                    continue;
                }
                _ => {}
            }

            if self.child_side(p, n)? != p_side {
                trace!(node = n, case = "D", "insert fix-up");
                self.rotate(p, p_side)?;
                p = n;
            }

            trace!(node = p, case = "E", "insert fix-up");
            self.rotate(g, p_side.opposite())?;
            self.set_colour(p, Colour::Black);
            self.set_colour(g, Colour::Red);
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::TreeError;
    use crate::node::RawTree;
    use crate::types::Colour;

    fn red_keys(tree: &RawTree<i32, usize>) -> Vec<i32> {
        let mut keys: Vec<i32> = (0..)
            .take(tree.arena.len())
            .map(|i: u32| &tree.arena[i])
            .filter(|n| n.colour.is_red())
            .map(|n| n.k)
            .collect();
        keys.sort_unstable();
        keys
    }

    fn build(keys: &[i32]) -> RawTree<i32, usize> {
        let mut tree = RawTree::default();
        for (i, &k) in keys.iter().enumerate() {
            tree.insert(k, i).unwrap();
        }
        tree
    }

    #[test]
    fn test_first_insert_is_black_root() {
        let tree = build(&[7]);
        assert_eq!(tree.root, Some(0));
        assert_eq!(tree.colour(0), Colour::Black);
    }

    #[test]
    fn test_case_b_black_parent() {
        let tree = build(&[2, 1, 3]);
        assert_eq!(red_keys(&tree), vec![1, 3]);
    }

    #[test]
    fn test_case_c_recolours_and_propagates() {
        let tree = build(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(red_keys(&tree), vec![4, 6]);
    }

    #[test]
    fn test_case_d_left_inner_grandchild() {
        let tree = build(&[5, 4, 3, 1, 2]);
        assert_eq!(red_keys(&tree), vec![1, 3]);
    }

    #[test]
    fn test_case_d_right_inner_grandchild() {
        let tree = build(&[1, 2, 3, 5, 4]);
        assert_eq!(red_keys(&tree), vec![3, 5]);
    }

    #[test]
    fn test_case_e_outer_grandchild() {
        let tree = build(&[1, 2, 3]);
        assert_eq!(red_keys(&tree), vec![1, 3]);
        let root = tree.root.unwrap();
        assert_eq!(tree.arena[root].k, 2);
        assert_eq!(tree.colour(root), Colour::Black);
    }

    #[test]
    fn test_duplicate_leaves_tree_untouched() {
        let mut tree = build(&[5, 3, 8]);
        assert_eq!(tree.insert(3, 99), Err(TreeError::already_exists(&3)));
        assert_eq!(tree.len(), 3);
        let n = tree.search(&3).unwrap();
        assert_eq!(tree.arena[n].v, 1);
    }
}
