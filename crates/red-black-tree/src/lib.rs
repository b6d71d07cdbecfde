//! Concurrency-safe ordered map backed by a red-black tree.
//!
//! Nodes live in an index-addressed arena; every node stores its parent as a
//! plain slot index, so there are no owning cycles and no `unsafe`. The whole
//! tree sits behind one reader-writer lock (see [`RbTree`]).
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | `arena` | slot table with a free list |
//! | `types` | [`Colour`], [`Entry`], node layout |
//! | `node` | unlocked tree core: search, insert position, sibling/uncle, link edits |
//! | `rotate` | left/right rotations and root-aware child replacement |
//! | `insert` | insertion and its fix-up |
//! | `remove` | deletion and its fix-up |
//! | `traverse` | breadth-first and in-order walks, diagram view |
//! | `verify` | invariant checker |
//! | `tree` | [`RbTree`], the locked public map |
//! | `error` | [`TreeError`], [`Violation`] |

mod arena;
mod error;
mod insert;
mod node;
mod remove;
mod rotate;
mod traverse;
mod tree;
mod types;
mod verify;

pub use error::{TreeError, Violation};
pub use tree::RbTree;
pub use types::{Colour, Entry};
