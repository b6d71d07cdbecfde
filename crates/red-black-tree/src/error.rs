//! Caller-facing errors and internal structural faults.
//!
//! [`TreeError`] covers everything a caller can reasonably trigger or react
//! to. [`Fault`] never leaves the crate: it means the rebalancing code itself
//! is wrong, and the public operation that hit it aborts through
//! [`OrAbort::or_abort`].

use std::fmt;

use thiserror::Error;
use tracing::error;

use crate::types::Side;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("key {key} not found")]
    KeyNotFound { key: String },
    #[error("key {key} already exists")]
    KeyAlreadyExists { key: String },
    #[error("failed to write tree diagram")]
    Write(#[from] fmt::Error),
    #[error("tree lock poisoned by an aborted mutation")]
    Poisoned,
    #[error("red-black invariant violated: {0}")]
    Corrupted(#[from] Violation),
}

impl TreeError {
    pub fn not_found<K: fmt::Debug + ?Sized>(key: &K) -> Self {
        TreeError::KeyNotFound {
            key: format!("{key:?}"),
        }
    }

    pub fn already_exists<K: fmt::Debug + ?Sized>(key: &K) -> Self {
        TreeError::KeyAlreadyExists {
            key: format!("{key:?}"),
        }
    }
}

/// A red-black or search-tree invariant that does not hold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("root is not black")]
    RedRoot,
    #[error("root has a parent")]
    RootHasParent,
    #[error("node {node} does not point back to its parent")]
    BrokenParentLink { node: u32 },
    #[error("red node {node} has a red child")]
    RedRed { node: u32 },
    #[error("black height differs below node {node}")]
    BlackHeight { node: u32 },
    #[error("keys out of order at node {node}")]
    Order { node: u32 },
    #[error("{reachable} reachable nodes but {stored} stored")]
    Detached { reachable: usize, stored: usize },
}

/// Broken structural assumption inside a mutation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum Fault {
    #[error("node {child} is not a child of node {parent}")]
    NotAChild { parent: u32, child: u32 },
    #[error("node {node} has no {side} child")]
    MissingChild { node: u32, side: Side },
    #[error("node {node} has no parent")]
    MissingParent { node: u32 },
}

pub(crate) trait OrAbort<T> {
    /// Unwraps the value or panics with the fault.
    ///
    /// Called while the write guard is held, so the panic poisons the lock
    /// and later calls see [`TreeError::Poisoned`].
    fn or_abort(self) -> T;
}

impl<T> OrAbort<T> for Result<T, Fault> {
    #[track_caller]
    fn or_abort(self) -> T {
        match self {
            Ok(value) => value,
            Err(fault) => {
                error!(%fault, "red-black tree structure broken");
                panic!("red-black tree structure broken: {fault}");
            }
        }
    }
}
