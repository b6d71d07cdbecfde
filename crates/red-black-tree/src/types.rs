use std::fmt;

/// Node colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Colour {
    /// Colour of every freshly attached non-root node.
    #[default]
    Red,
    Black,
}

impl Colour {
    pub fn is_red(self) -> bool {
        self == Colour::Red
    }

    pub fn is_black(self) -> bool {
        self == Colour::Black
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Colour::Red => "RED",
            Colour::Black => "BLACK",
        })
    }
}

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Left => "left",
            Side::Right => "right",
        })
    }
}

/// Arena-resident tree vertex.
///
/// `p` is a back-reference only; `l` and `r` own their subtrees. All three
/// are slot indices into the owning [`Arena`](crate::arena::Arena).
#[derive(Clone, Debug)]
pub(crate) struct RbNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
    pub colour: Colour,
}

impl<K, V> RbNode<K, V> {
    pub fn new(k: K, v: V, colour: Colour) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
            colour,
        }
    }

    pub fn child(&self, side: Side) -> Option<u32> {
        match side {
            Side::Left => self.l,
            Side::Right => self.r,
        }
    }

    pub fn set_child(&mut self, side: Side, child: Option<u32>) {
        match side {
            Side::Left => self.l = child,
            Side::Right => self.r = child,
        }
    }
}

/// Where a key lives, or would live, in the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Location {
    Empty,
    Occupied(u32),
    Vacant { parent: u32, side: Side },
}

/// Owned snapshot of a node taken under the read lock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
    pub colour: Colour,
}

impl<K: Clone, V: Clone> Entry<K, V> {
    pub(crate) fn snapshot(node: &RbNode<K, V>) -> Self {
        Self {
            key: node.k.clone(),
            value: node.v.clone(),
            colour: node.colour,
        }
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}({})", self.key, self.value, self.colour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_renders_upper_case() {
        assert_eq!(Colour::Red.to_string(), "RED");
        assert_eq!(Colour::Black.to_string(), "BLACK");
        assert_eq!(Colour::default(), Colour::Red);
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }

    #[test]
    fn test_entry_display() {
        let entry = Entry {
            key: 7,
            value: "seven",
            colour: Colour::Black,
        };
        assert_eq!(entry.to_string(), "7-seven(BLACK)");
    }

    #[test]
    fn test_node_child_slots() {
        let mut node = RbNode::new(1, (), Colour::Red);
        assert_eq!(node.child(Side::Left), None);
        node.set_child(Side::Right, Some(4));
        assert_eq!(node.child(Side::Right), Some(4));
        assert_eq!(node.child(Side::Left), None);
    }
}
