//! Re-derives every red-black invariant from the arena.

use crate::error::Violation;
use crate::node::RawTree;

impl<K: Ord, V> RawTree<K, V> {
    /// Checks the whole tree and returns its black height.
    ///
    /// Black height counts black nodes from the root down to (not including)
    /// the nil leaves; the empty tree has black height 0.
    pub fn verify(&self) -> Result<usize, Violation> {
        let Some(root) = self.root else {
            return match self.len() {
                0 => Ok(0),
                stored => Err(Violation::Detached {
                    reachable: 0,
                    stored,
                }),
            };
        };

        if self.arena[root].p.is_some() {
            return Err(Violation::RootHasParent);
        }
        if self.colour(root).is_red() {
            return Err(Violation::RedRoot);
        }

        let mut reachable = 0;
        let black_height = self.black_height(root, &mut reachable)?;
        if reachable != self.len() {
            return Err(Violation::Detached {
                reachable,
                stored: self.len(),
            });
        }

        let slots = self.in_order_slots();
        for pair in slots.windows(2) {
            if self.arena[pair[0]].k >= self.arena[pair[1]].k {
                return Err(Violation::Order { node: pair[1] });
            }
        }

        Ok(black_height)
    }

    fn black_height(&self, n: u32, reachable: &mut usize) -> Result<usize, Violation> {
        *reachable += 1;
        let node = &self.arena[n];

        let mut heights = [0; 2];
        for (height, child) in heights.iter_mut().zip([node.l, node.r]) {
            let Some(child) = child else {
                continue;
            };
            if self.arena[child].p != Some(n) {
                return Err(Violation::BrokenParentLink { node: child });
            }
            if node.colour.is_red() && self.colour(child).is_red() {
                return Err(Violation::RedRed { node: n });
            }
            *height = self.black_height(child, reachable)?;
        }

        if heights[0] != heights[1] {
            return Err(Violation::BlackHeight { node: n });
        }
        Ok(heights[0] + usize::from(node.colour.is_black()))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Violation;
    use crate::node::RawTree;
    use crate::types::Colour;

    fn build(keys: impl IntoIterator<Item = i32>) -> RawTree<i32, ()> {
        let mut tree = RawTree::default();
        for k in keys {
            tree.insert(k, ()).unwrap();
        }
        tree
    }

    #[test]
    fn test_valid_trees() {
        assert_eq!(RawTree::<i32, ()>::default().verify(), Ok(0));
        assert_eq!(build([1]).verify(), Ok(1));
        assert_eq!(build(1..=10).verify(), Ok(3));
    }

    #[test]
    fn test_detects_red_root() {
        let mut tree = build(1..=3);
        let root = tree.root.unwrap();
        tree.set_colour(root, Colour::Red);
        assert_eq!(tree.verify(), Err(Violation::RedRoot));
    }

    #[test]
    fn test_detects_red_red() {
        let mut tree = build(1..=6);
        let four = tree.search(&4).unwrap();
        let five = tree.search(&5).unwrap();
        tree.set_colour(five, Colour::Red);
        assert_eq!(tree.verify(), Err(Violation::RedRed { node: four }));
    }

    #[test]
    fn test_detects_black_height_mismatch() {
        let mut tree = build(1..=3);
        let one = tree.search(&1).unwrap();
        tree.set_colour(one, Colour::Black);
        assert_eq!(
            tree.verify(),
            Err(Violation::BlackHeight {
                node: tree.root.unwrap()
            })
        );
    }

    #[test]
    fn test_detects_out_of_order_keys() {
        let mut tree = build(1..=3);
        let one = tree.search(&1).unwrap();
        tree.arena[one].k = 5;
        let two = tree.root.unwrap();
        assert_eq!(tree.verify(), Err(Violation::Order { node: two }));
    }

    #[test]
    fn test_detects_broken_parent_link() {
        let mut tree = build(1..=3);
        let three = tree.search(&3).unwrap();
        tree.arena[three].p = None;
        assert_eq!(
            tree.verify(),
            Err(Violation::BrokenParentLink { node: three })
        );
    }
}
