//! Indented ASCII diagrams for linked binary trees.
//!
//! Any node type that can hand out its children and render itself as text
//! can be dumped. The output puts the root on the first line and every child
//! on its own line below its parent:
//!
//! ```text
//! 2-b(BLACK)
//! |---L: 1-a(RED)
//! `---R: 3-c(RED)
//! ```
//!
//! `|` marks a child that still has a sibling below it, `` ` `` marks the
//! last child of its parent. A left child without a right sibling is
//! therefore drawn with `` ` ``.

use std::fmt::{self, Display, Write};

/// A node of a binary tree, as seen by the printer.
///
/// Implementors are usually cheap handles (`&T`, or an index paired with a
/// borrowed arena), so children are returned by value.
pub trait BinaryNode: Display + Sized {
    fn left(&self) -> Option<Self>;
    fn right(&self) -> Option<Self>;
}

/// Writes the diagram of the subtree rooted at `node` into `out`.
pub fn print<N, W>(node: &N, out: &mut W) -> fmt::Result
where
    N: BinaryNode,
    W: Write + ?Sized,
{
    print_node(node, out, &mut String::new(), None, true)
}

/// Renders the subtree rooted at `node` into a fresh `String`.
///
/// Fails only when a node's own `Display` fails.
pub fn dump<N: BinaryNode>(node: &N) -> Result<String, fmt::Error> {
    let mut out = String::new();
    print(node, &mut out).map(|()| out)
}

fn print_node<N, W>(
    node: &N,
    out: &mut W,
    indent: &mut String,
    position: Option<&str>,
    is_last: bool,
) -> fmt::Result
where
    N: BinaryNode,
    W: Write + ?Sized,
{
    let depth = indent.len();

    match position {
        Some(position) => {
            let corner = if is_last { '`' } else { '|' };
            writeln!(out, "{indent}{corner}---{position}: {node}")?;
            indent.push_str(if is_last { "    " } else { "|   " });
        }
        None => writeln!(out, "{indent}{node}")?,
    }

    let right = node.right();
    if let Some(left) = node.left() {
        print_node(&left, out, indent, Some("L"), right.is_none())?;
    }
    if let Some(right) = right {
        print_node(&right, out, indent, Some("R"), true)?;
    }

    indent.truncate(depth);
    Ok(())
}
