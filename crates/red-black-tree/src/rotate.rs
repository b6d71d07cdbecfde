//! Rotations.
//!
//! ```text
//!       n           rotate_left(n)          r
//!      / \          ------------->         / \
//!     a   r                               n   c
//!        / \        <-------------       / \
//!       b   c       rotate_right(r)     a   b
//! ```
//!
//! In-order sequence `a n b r c` is preserved; only `n`, `r`, `b` and the
//! parent above `n` have links rewritten.

use crate::error::Fault;
use crate::node::RawTree;
use crate::types::Side;

impl<K, V> RawTree<K, V> {
    /// Moves `n` down towards `towards`, promoting its child from the
    /// opposite side into its position.
    pub fn rotate(&mut self, n: u32, towards: Side) -> Result<(), Fault> {
        match towards {
            Side::Left => self.rotate_left(n),
            Side::Right => self.rotate_right(n),
        }
    }

    pub fn rotate_left(&mut self, n: u32) -> Result<(), Fault> {
        self.pivot(n, Side::Left)
    }

    pub fn rotate_right(&mut self, n: u32) -> Result<(), Fault> {
        self.pivot(n, Side::Right)
    }

    fn pivot(&mut self, n: u32, towards: Side) -> Result<(), Fault> {
        let from = towards.opposite();
        let pivot = self.child(n, from).ok_or(Fault::MissingChild {
            node: n,
            side: from,
        })?;
        let inner = self.child(pivot, towards);

        self.arena[pivot].set_child(towards, None);
        self.add_child(n, inner, from);
        self.replace_in_parent(n, Some(pivot))?;
        self.add_child(pivot, Some(n), towards);
        Ok(())
    }

    /// Puts `new` where `old` is, updating the root when `old` has no parent.
    pub fn replace_in_parent(&mut self, old: u32, new: Option<u32>) -> Result<(), Fault> {
        match self.parent(old) {
            Some(p) => self.replace_child(p, old, new),
            None => {
                if let Some(new) = new {
                    self.arena[new].p = None;
                }
                self.root = new;
                Ok(())
            }
        }
    }
}
