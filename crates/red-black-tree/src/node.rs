//! Unlocked tree core and its navigation primitives.
//!
//! [`RawTree`] holds the arena and the root index. Mutating routines here
//! only rewire links; colour changes happen in the fix-up modules.

use std::cmp::Ordering;

use crate::arena::Arena;
use crate::error::Fault;
use crate::types::{Colour, Location, RbNode, Side};

#[derive(Clone, Debug)]
pub(crate) struct RawTree<K, V> {
    pub arena: Arena<K, V>,
    pub root: Option<u32>,
}

impl<K, V> RawTree<K, V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    #[inline]
    pub fn parent(&self, n: u32) -> Option<u32> {
        self.arena[n].p
    }

    #[inline]
    pub fn child(&self, n: u32, side: Side) -> Option<u32> {
        self.arena[n].child(side)
    }

    #[inline]
    pub fn colour(&self, n: u32) -> Colour {
        self.arena[n].colour
    }

    #[inline]
    pub fn set_colour(&mut self, n: u32, colour: Colour) {
        self.arena[n].colour = colour;
    }

    /// Absent children are the black nil leaves.
    #[inline]
    pub fn is_black(&self, n: Option<u32>) -> bool {
        n.map_or(true, |n| self.colour(n).is_black())
    }

    /// Which side of `parent` holds `child`.
    pub fn child_side(&self, parent: u32, child: u32) -> Result<Side, Fault> {
        let node = &self.arena[parent];
        if node.l == Some(child) {
            Ok(Side::Left)
        } else if node.r == Some(child) {
            Ok(Side::Right)
        } else {
            Err(Fault::NotAChild { parent, child })
        }
    }

    /// Links `child` into the `side` slot of `parent`.
    pub fn add_child(&mut self, parent: u32, child: Option<u32>, side: Side) {
        if let Some(child) = child {
            self.arena[child].p = Some(parent);
        }
        self.arena[parent].set_child(side, child);
    }

    pub fn remove_child(&mut self, parent: u32, child: u32) -> Result<Side, Fault> {
        let side = self.child_side(parent, child)?;
        self.arena[parent].set_child(side, None);
        self.arena[child].p = None;
        Ok(side)
    }

    /// Puts `new` where `old` hangs below `parent`.
    pub fn replace_child(&mut self, parent: u32, old: u32, new: Option<u32>) -> Result<(), Fault> {
        let side = self.remove_child(parent, old)?;
        self.add_child(parent, new, side);
        Ok(())
    }

    /// The other child of `n`'s parent.
    pub fn sibling(&self, n: u32) -> Result<Option<u32>, Fault> {
        let Some(p) = self.parent(n) else {
            return Ok(None);
        };
        let side = self.child_side(p, n)?;
        Ok(self.child(p, side.opposite()))
    }

    /// The sibling of `n`'s parent.
    pub fn uncle(&self, n: u32) -> Result<Option<u32>, Fault> {
        match self.parent(n) {
            Some(p) if self.parent(p).is_some() => self.sibling(p),
            _ => Ok(None),
        }
    }

    /// Leftmost node of the subtree rooted at `n`.
    pub fn minimum(&self, mut n: u32) -> u32 {
        while let Some(l) = self.arena[n].l {
            n = l;
        }
        n
    }
}

impl<K: Ord, V> RawTree<K, V> {
    pub fn search(&self, key: &K) -> Option<u32> {
        match self.locate(key) {
            Location::Occupied(n) => Some(n),
            _ => None,
        }
    }

    /// Descends from the root towards `key`.
    pub fn locate(&self, key: &K) -> Location {
        let Some(mut curr) = self.root else {
            return Location::Empty;
        };
        loop {
            let side = match key.cmp(&self.arena[curr].k) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Location::Occupied(curr),
            };
            match self.child(curr, side) {
                Some(next) => curr = next,
                None => return Location::Vacant { parent: curr, side },
            }
        }
    }

    /// Allocates a red node and hangs it at a vacant location.
    ///
    /// `parent`/`side` must come from [`locate`](Self::locate) on the same key
    /// with no mutation in between.
    pub fn attach(&mut self, parent: u32, side: Side, key: K, value: V) -> u32 {
        let n = self.arena.alloc(RbNode::new(key, value, Colour::Red));
        self.add_child(parent, Some(n), side);
        n
    }
}

impl<K, V> Default for RawTree<K, V> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
