//! Slot table owning every node of a tree.
//!
//! Nodes refer to each other by `u32` slot index instead of by pointer, which
//! keeps the parent back-reference from forming an ownership cycle. Released
//! slots are threaded onto a free list and handed out again by
//! [`Arena::alloc`].

use std::ops::{Index, IndexMut};

use crate::types::RbNode;

#[derive(Clone, Debug)]
enum Slot<K, V> {
    Occupied(RbNode<K, V>),
    Vacant { next_free: Option<u32> },
}

#[derive(Clone, Debug)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Slot<K, V>>,
    free: Option<u32>,
    len: usize,
}

impl<K, V> Arena<K, V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            len: 0,
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn alloc(&mut self, node: RbNode<K, V>) -> u32 {
        self.len += 1;
        match self.free {
            Some(idx) => {
                let slot = &mut self.slots[idx as usize];
                let Slot::Vacant { next_free } = slot else {
                    unreachable!("free list points at occupied slot {idx}");
                };
                self.free = *next_free;
                *slot = Slot::Occupied(node);
                idx
            }
            None => {
                let idx = slot_index(self.slots.len());
                self.slots.push(Slot::Occupied(node));
                idx
            }
        }
    }

    /// Takes the node out of its slot and puts the slot on the free list.
    pub fn release(&mut self, idx: u32) -> RbNode<K, V> {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match std::mem::replace(&mut self.slots[idx as usize], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(idx);
                self.len -= 1;
                node
            }
            Slot::Vacant { .. } => panic!("double release of arena slot {idx}"),
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }
}

/// Index of the next pushed slot; the arena cannot address more than
/// `u32::MAX + 1` nodes.
fn slot_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("arena full: {len} slots"))
}

impl<K, V> Index<u32> for Arena<K, V> {
    type Output = RbNode<K, V>;

    fn index(&self, idx: u32) -> &Self::Output {
        match &self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("arena slot {idx} is vacant"),
        }
    }
}

impl<K, V> IndexMut<u32> for Arena<K, V> {
    fn index_mut(&mut self, idx: u32) -> &mut Self::Output {
        match &mut self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("arena slot {idx} is vacant"),
        }
    }
}
