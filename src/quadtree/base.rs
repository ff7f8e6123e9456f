use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::error::QuadTreeError;
use crate::index_pool::IndexPool;
use crate::line::{Line, Vec2};
use crate::packed_vector::PackedVector;
use crate::transform::CoordinateTransform;

use super::node::{ElementLink, Node, NodeCursor, NodeKind};
use super::rect::{place_line_in_branches, Rect, QUADRANTS};

/// Inline capacity of the node arena: `Node` is two `i32`s (8 bytes), so 32
/// inline records lands at the ~256-byte small-buffer budget from the
/// design.
const NODE_INLINE_CAPACITY: usize = 32;
/// Inline capacity of the element-link arena. `Slot<ElementLink>` carries an
/// extra discriminant over the raw 8-byte link, so a smaller inline count
/// keeps it in the same ballpark.
const ELEMENT_INLINE_CAPACITY: usize = 16;
/// Inline capacity of the traversal stacks (`find_leaves`,
/// `get_rect_line_segments`). Depth is capped small in practice (typically
/// no more than ~8), so a handful of inline slots covers the common case
/// without allocating.
const STACK_INLINE_CAPACITY: usize = 16;

type Cursors = SmallVec<[NodeCursor; STACK_INLINE_CAPACITY]>;

/// A dynamic region quadtree over moving line segments.
///
/// See the [module-level documentation](super) for the broader picture.
/// `lines` is borrowed for the tree's entire lifetime: the core never owns
/// or mutates line storage.
pub struct Quadtree<'lines, T: CoordinateTransform> {
    lines: &'lines [Line],
    nodes: PackedVector<Node, NODE_INLINE_CAPACITY>,
    elements: IndexPool<ElementLink, ELEMENT_INLINE_CAPACITY>,
    root_rect: Rect,
    max_depth: u32,
    max_elements_per_leaf: u32,
    transform: T,
}

impl<'lines, T: CoordinateTransform> Quadtree<'lines, T> {
    /// Creates an empty tree whose root covers `[0, width] x [0, height]` in
    /// window coordinates.
    ///
    /// # Panics
    /// Panics if `width` or `height` is not positive — a zero or negative
    /// extent cannot be halved down to a meaningful leaf and is a contract
    /// violation, not a runtime condition to recover from.
    ///
    /// # Errors
    /// Returns [`QuadTreeError::ResourceExhaustion`] if the initial root
    /// leaf cannot be allocated.
    pub fn new(
        lines: &'lines [Line],
        width: i32,
        height: i32,
        max_depth: u32,
        max_elements_per_leaf: u32,
        transform: T,
    ) -> Result<Self, QuadTreeError> {
        assert!(width > 0, "root width must be positive");
        assert!(height > 0, "root height must be positive");

        let mut nodes = PackedVector::new();
        nodes.push_back(Node::EMPTY_LEAF)?;
        Ok(Self {
            lines,
            nodes,
            elements: IndexPool::new(),
            root_rect: Rect { mid_x: width >> 1, mid_y: height >> 1, size_x: width >> 1, size_y: height >> 1 },
            max_depth,
            max_elements_per_leaf,
            transform,
        })
    }

    fn root_cursor(&self) -> NodeCursor {
        NodeCursor { rect: self.root_rect, index: 0, depth: 0 }
    }

    /// Places `line_id`'s swept parallelogram (over `dt`) into every leaf it
    /// touches, splitting leaves that exceed `max_elements_per_leaf` (unless
    /// the depth cap has already been reached).
    ///
    /// # Panics
    /// Panics (debug builds only — a contract violation, not a runtime
    /// condition) if `dt < 0` or `line_id` is out of range of the line array
    /// the tree was constructed with.
    ///
    /// # Errors
    /// Returns [`QuadTreeError::ResourceExhaustion`] if growing the node or
    /// element arenas fails. The tree may be left with a leaf split into a
    /// branch but only partially re-populated in that case — exhaustion is
    /// treated as terminal rather than transactional across a split.
    pub fn insert(&mut self, line_id: u32, dt: f64) -> Result<(), QuadTreeError> {
        debug_assert!(dt >= 0.0, "dt must be non-negative");
        debug_assert!((line_id as usize) < self.lines.len(), "line_id out of range");
        trace!(line_id, dt, "insert");
        let root = self.root_cursor();
        self.insert_into_subtree(root, line_id, dt)
    }

    fn insert_into_subtree(&mut self, cursor: NodeCursor, line_id: u32, dt: f64) -> Result<(), QuadTreeError> {
        let leaves = self.find_leaves(cursor, line_id, dt);
        for leaf in leaves {
            self.insert_into_leaf(leaf, line_id, dt)?;
        }
        Ok(())
    }

    /// Iteratively descends from `cursor`, returning every leaf the line's
    /// swept parallelogram touches. A branch contributes a child cursor for
    /// each quadrant [`place_line_in_branches`] flags; a segment whose
    /// placement flags come back empty in some subtree simply contributes no
    /// cursor there.
    fn find_leaves(&self, cursor: NodeCursor, line_id: u32, dt: f64) -> Cursors {
        let mut to_process: Cursors = SmallVec::new();
        let mut leaves: Cursors = SmallVec::new();
        to_process.push(cursor);

        while let Some(current) = to_process.pop() {
            let node = self.nodes.get_copy(current.index);
            match node.as_enum() {
                NodeKind::Leaf { .. } => leaves.push(current),
                NodeKind::Branch { first_child } => {
                    let line = &self.lines[line_id as usize];
                    let flags = place_line_in_branches(line, &current.rect, dt, &self.transform);
                    for (i, quadrant) in QUADRANTS.iter().enumerate() {
                        if flags.get(*quadrant) {
                            to_process.push(NodeCursor {
                                rect: current.rect.child(*quadrant),
                                index: first_child + i,
                                depth: current.depth + 1,
                            });
                        }
                    }
                }
            }
        }
        leaves
    }

    fn insert_into_leaf(&mut self, cursor: NodeCursor, line_id: u32, dt: f64) -> Result<(), QuadTreeError> {
        let prior_head = self.nodes.get_copy(cursor.index).first_child;
        let link_index = self.elements.insert(ElementLink { next: prior_head, line_id })?;

        let node = self.nodes.get_mut(cursor.index);
        node.first_child = i32::try_from(link_index).expect("link index exceeded i32 range");
        node.count += 1;
        let count = node.count;

        if count > self.max_elements_per_leaf as i32 && cursor.depth < self.max_depth {
            self.split(cursor, dt)?;
        }
        Ok(())
    }

    /// Drains a leaf's element list, turns it into a branch with four fresh
    /// empty-leaf children, then re-inserts every drained line into the
    /// (now-branch) subtree. A single line may land in more than one
    /// grandchild — that's correct, since a moving segment can straddle
    /// quadrants.
    fn split(&mut self, cursor: NodeCursor, dt: f64) -> Result<(), QuadTreeError> {
        debug!(index = cursor.index, depth = cursor.depth, "splitting leaf");

        let mut drained: SmallVec<[u32; 8]> = SmallVec::new();
        let mut index = self.nodes.get_copy(cursor.index).first_child;
        while index != -1 {
            let link = self.elements.get_copy(index as usize);
            drained.push(link.line_id);
            self.elements.erase(index as usize);
            index = link.next;
        }

        let first_child = self.nodes.len();
        {
            let node = self.nodes.get_mut(cursor.index);
            node.count = -1;
            node.first_child = i32::try_from(first_child).expect("child index exceeded i32 range");
        }
        self.nodes.resize(first_child + 4)?;
        for _ in 0..4 {
            self.nodes.push_back(Node::EMPTY_LEAF)?;
        }

        for line_id in drained {
            self.insert_into_subtree(cursor, line_id, dt)?;
        }
        Ok(())
    }

    /// Returns the `line_id`s (excluding `line_id` itself) that share at
    /// least one leaf with `line_id`'s swept parallelogram over `dt`,
    /// deduplicated.
    ///
    /// This is a candidate set, not a verdict: the caller is responsible for
    /// exact intersection tests on the result.
    ///
    /// # Panics
    /// Panics (debug builds only) if `dt < 0` or `line_id` is out of range.
    #[must_use]
    pub fn query(&self, line_id: u32, dt: f64) -> Vec<u32> {
        debug_assert!(dt >= 0.0, "dt must be non-negative");
        debug_assert!((line_id as usize) < self.lines.len(), "line_id out of range");
        trace!(line_id, dt, "query");

        let root = self.root_cursor();
        let leaves = self.find_leaves(root, line_id, dt);
        let mut output: Vec<u32> = Vec::new();
        for leaf in leaves {
            let mut index = self.nodes.get_copy(leaf.index).first_child;
            while index != -1 {
                let link = self.elements.get_copy(index as usize);
                if link.line_id != line_id && !output.contains(&link.line_id) {
                    output.push(link.line_id);
                }
                index = link.next;
            }
        }
        output
    }

    /// Resets the tree to a single empty root leaf, preserving arena
    /// capacity.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.elements.clear();
        self.nodes.push_back(Node::EMPTY_LEAF).expect(
            "pushing the root leaf back after clear cannot need new capacity: the arena already held room for it before clear",
        );
    }

    /// Releases both arenas and drops the borrowed `lines` handle.
    ///
    /// Consumes `self`: once freed, the tree cannot be used again, matching
    /// `QuadTree_Free`'s semantics in the C original.
    pub fn free(mut self) {
        self.nodes.free();
        self.elements.free();
    }

    /// Produces the root's perimeter plus the interior cross-hair of every
    /// branch node reachable from the root, as window-space segments for
    /// rendering a quadtree overlay. Not on any hot path; allocates freely.
    #[must_use]
    pub fn get_rect_line_segments(&self) -> Vec<Line> {
        let mut out = Vec::new();
        for (p1, p2) in self.root_rect.perimeter_segments() {
            out.push(segment_as_line(p1, p2));
        }

        let mut to_process: Cursors = SmallVec::new();
        to_process.push(self.root_cursor());
        while let Some(cursor) = to_process.pop() {
            let node = self.nodes.get_copy(cursor.index);
            if let NodeKind::Branch { first_child } = node.as_enum() {
                for (p1, p2) in cursor.rect.crosshair_segments() {
                    out.push(segment_as_line(p1, p2));
                }
                for (i, quadrant) in QUADRANTS.iter().enumerate() {
                    to_process.push(NodeCursor {
                        rect: cursor.rect.child(*quadrant),
                        index: first_child + i,
                        depth: cursor.depth + 1,
                    });
                }
            }
        }
        out
    }
}

fn segment_as_line(p1: Vec2, p2: Vec2) -> Line {
    Line { p1, p2, velocity: Vec2::default(), id: 0, color: 0 }
}
