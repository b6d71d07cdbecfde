//! Deletion and the deletion fix-up.
//!
//! A node with two children takes over its in-order successor's key and
//! value, and the successor (which has no left child) is removed instead. So
//! the node that actually leaves the tree always has at most one child.
//!
//! Removing a black node leaves one path a black short. The fix-up is given
//! the node `n` sitting at the short position and works on its sibling `s`:
//!
//! | Case | Shape                                | Action                                          |
//! |------|--------------------------------------|-------------------------------------------------|
//! | A    | `n` red or the root                  | paint `n` black, stop                           |
//! | B    | `s` red                              | swap colours of `s` and parent, rotate parent   |
//! |      |                                      | towards `n`, continue with the new sibling      |
//! | C    | `s` black, both its children black   | paint `s` red; stop on a red parent (painting   |
//! |      |                                      | it black), otherwise go up to the parent        |
//! | D    | `s` black, near child red, far black | rotate `s` away from `n`, continue as E         |
//! | E    | `s` black, far child red             | `s` takes the parent's colour, parent and far   |
//! |      |                                      | child black, rotate parent towards `n`, stop    |

use std::fmt;
use std::mem;

use tracing::trace;

use crate::error::{Fault, OrAbort, TreeError};
use crate::node::RawTree;
use crate::types::Colour;

impl<K: Ord + fmt::Debug, V> RawTree<K, V> {
    /// Removes `key`, returning its value.
    pub fn delete(&mut self, key: &K) -> Result<V, TreeError> {
        let n = self.search(key).ok_or_else(|| TreeError::not_found(key))?;
        Ok(self.delete_node(n).or_abort())
    }
}

impl<K, V> RawTree<K, V> {
    fn delete_node(&mut self, n: u32) -> Result<V, Fault> {
        let node = &self.arena[n];
        match (node.l, node.r) {
            (Some(_), Some(r)) => {
                let successor = self.minimum(r);
                let (k, v) = self.splice(successor)?;
                let node = &mut self.arena[n];
                node.k = k;
                Ok(mem::replace(&mut node.v, v))
            }
            _ => self.splice(n).map(|(_, v)| v),
        }
    }

    /// Unlinks and frees a node with at most one child.
    fn splice(&mut self, n: u32) -> Result<(K, V), Fault> {
        let node = &self.arena[n];
        match node.l.or(node.r) {
            None => {
                // The leaf stays in place while the fix-up runs so its
                // sibling and parent are still reachable.
                self.fix_after_delete(n)?;
                self.replace_in_parent(n, None)?;
            }
            Some(child) => {
                let colour = node.colour;
                self.replace_in_parent(n, Some(child))?;
                if colour.is_black() {
                    self.fix_after_delete(child)?;
                }
            }
        }
        let node = self.arena.release(n);
        Ok((node.k, node.v))
    }

    pub(crate) fn fix_after_delete(&mut self, mut n: u32) -> Result<(), Fault> {
        loop {
            let p = match self.parent(n) {
                Some(p) if self.colour(n).is_black() => p,
                _ => {
                    trace!(node = n, case = "A", "delete fix-up");
                    self.set_colour(n, Colour::Black);
                    return Ok(());
                }
            };

            let side = self.child_side(p, n)?;
            let away = side.opposite();

            // An absent sibling cannot happen while the black heights below
            // `p` were equal before the removal. Leave the tree as is.
            let Some(mut s) = self.child(p, away) else {
                return Ok(());
            };

            if self.colour(s).is_red() {
                trace!(node = n, case = "B", "delete fix-up");
                self.set_colour(s, Colour::Black);
                self.set_colour(p, Colour::Red);
                self.rotate(p, side)?;
                s = match self.child(p, away) {
                    Some(s) => s,
                    None => return Ok(()),
                };
            }

            let near = self.child(s, side);
            let mut far = self.child(s, away);

            if self.is_black(near) && self.is_black(far) {
                self.set_colour(s, Colour::Red);
                if self.colour(p).is_red() {
                    trace!(node = n, case = "C", parent = "red", "delete fix-up");
                    self.set_colour(p, Colour::Black);
                    return Ok(());
                }
                trace!(node = n, case = "C", parent = "black", "delete fix-up");
                n = p;
                continue;
            }

            if self.is_black(far) {
                trace!(node = n, case = "D", "delete fix-up");
                // Not both black and far is black, so near is red.
                let near = near.ok_or(Fault::MissingChild { node: s, side })?;
                self.set_colour(near, Colour::Black);
                self.set_colour(s, Colour::Red);
                self.rotate(s, away)?;
                far = Some(s);
                s = near;
            }

            trace!(node = n, case = "E", "delete fix-up");
            let far = far.ok_or(Fault::MissingChild { node: s, side: away })?;
            let parent_colour = self.colour(p);
            self.set_colour(s, parent_colour);
            self.set_colour(p, Colour::Black);
            self.set_colour(far, Colour::Black);
            self.rotate(p, side)?;
            return Ok(());
        }
    }
}
