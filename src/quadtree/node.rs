//! The two record types stored in the tree's arenas, plus the transient
//! traversal cursor.

use super::rect::Rect;

/// A node of the tree: either a leaf (holding a linked list of element
/// links) or a branch (holding four children), distinguished by whether
/// `count` is `-1` — a tag-by-sentinel encoding carried over unchanged from
/// the C original.
///
/// A reimplementation with proper sum types would make this a real `enum`,
/// but the two-word layout is deliberately kept, since it's what every
/// arena index and split/traversal routine in this crate is built around.
/// [`Node::as_enum`] is provided for call sites that want to match on it
/// without duplicating the sentinel check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    /// Leaf: head of the element-link list in the `IndexPool`, or `-1` if
    /// empty. Branch: index of the first of four contiguous children.
    pub first_child: i32,
    /// `-1` marks a branch (sentinel, not a population count); otherwise
    /// the number of links reachable from `first_child`.
    pub count: i32,
}

/// A disambiguated view of a [`Node`]'s two states.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Leaf { first_link: Option<usize>, count: u32 },
    Branch { first_child: usize },
}

impl Node {
    pub(crate) const EMPTY_LEAF: Self = Self { first_child: -1, count: 0 };

    pub(crate) fn as_enum(&self) -> NodeKind {
        if self.count == -1 {
            NodeKind::Branch {
                first_child: usize::try_from(self.first_child)
                    .expect("branch node had a negative first_child"),
            }
        } else {
            NodeKind::Leaf {
                first_link: (self.first_child != -1).then(|| self.first_child as usize),
                count: self.count as u32,
            }
        }
    }
}

/// One entry in a leaf's intrusive singly-linked list of elements.
///
/// `next == -1` terminates the list; the list's head lives in the owning
/// leaf's `Node::first_child`, not in any `ElementLink` itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct ElementLink {
    pub next: i32,
    pub line_id: u32,
}

/// Transient traversal state: enough to descend the tree without
/// re-deriving geometry at each step. Created on demand, never persisted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NodeCursor {
    pub rect: Rect,
    pub index: usize,
    pub depth: u32,
}
