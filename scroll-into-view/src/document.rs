use alloc::vec::Vec;

use crate::tree::{ScrollTree, clamp_scroll_top};
use crate::Rect;

/// A handle to a node in a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
struct NodeData {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    is_body: bool,
    offset_top: f64, // relative to the parent's content box
    height: f64,
    scroll_top: f64,
}

/// A minimal in-memory document: a forest of vertically stacked boxes.
///
/// This is enough geometry to drive every algorithm in this crate without a browser, which
/// makes it useful for headless UIs, simulations and tests:
///
/// - each node sits at `offset_top` inside its parent's content and is `height` tall
/// - content height is the larger of the node's height and its lowest child's bottom edge
/// - bounding rects are layout positions minus the scroll offsets of all strict ancestors
/// - scroll assignments are clamped to the node's scroll range
///
/// Node handles are only meaningful for the document that created them; passing a foreign
/// handle panics.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<NodeData>,
    window_height: f64,
}

impl Document {
    pub fn new(window_height: f64) -> Self {
        Self {
            nodes: Vec::new(),
            window_height,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn set_window_height(&mut self, window_height: f64) {
        self.window_height = window_height;
    }

    /// Adds a parentless node (a new tree in the forest).
    pub fn append_root(&mut self, height: f64) -> NodeId {
        self.push(None, 0.0, height)
    }

    /// Adds a node inside `parent`, `offset_top` below the parent's content top.
    pub fn append_child(&mut self, parent: NodeId, offset_top: f64, height: f64) -> NodeId {
        let id = self.push(Some(parent), offset_top, height);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Marks `node` as the document body.
    pub fn set_body(&mut self, node: NodeId, is_body: bool) {
        self.nodes[node.0].is_body = is_body;
    }

    pub fn set_height(&mut self, node: NodeId, height: f64) {
        self.nodes[node.0].height = height;
    }

    pub fn set_offset_top(&mut self, node: NodeId, offset_top: f64) {
        self.nodes[node.0].offset_top = offset_top;
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// The node's top edge in document coordinates, ignoring all scrolling.
    pub fn layout_top(&self, node: NodeId) -> f64 {
        let mut top = 0.0;
        let mut cur = Some(node);
        while let Some(id) = cur {
            let data = &self.nodes[id.0];
            top += data.offset_top;
            cur = data.parent;
        }
        top
    }

    fn push(&mut self, parent: Option<NodeId>, offset_top: f64, height: f64) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            parent,
            children: Vec::new(),
            is_body: false,
            offset_top,
            height: height.max(0.0),
            scroll_top: 0.0,
        });
        id
    }
}

impl ScrollTree for Document {
    type Node = NodeId;

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    fn is_body(&self, node: &NodeId) -> bool {
        self.nodes[node.0].is_body
    }

    fn client_height(&self, node: &NodeId) -> f64 {
        self.nodes[node.0].height
    }

    fn scroll_height(&self, node: &NodeId) -> f64 {
        let data = &self.nodes[node.0];
        data.children
            .iter()
            .map(|c| {
                let child = &self.nodes[c.0];
                child.offset_top + child.height
            })
            .fold(data.height, f64::max)
    }

    fn window_height(&self) -> f64 {
        self.window_height
    }

    fn bounding_rect(&self, node: &NodeId) -> Rect {
        let mut scrolled = 0.0;
        let mut cur = self.nodes[node.0].parent;
        while let Some(id) = cur {
            let data = &self.nodes[id.0];
            scrolled += data.scroll_top;
            cur = data.parent;
        }
        let top = self.layout_top(*node) - scrolled;
        Rect::new(top, top + self.nodes[node.0].height)
    }

    fn scroll_top(&self, node: &NodeId) -> f64 {
        self.nodes[node.0].scroll_top
    }

    fn set_scroll_top(&mut self, node: &NodeId, scroll_top: f64) {
        let clamped = clamp_scroll_top(&*self, node, scroll_top);
        self.nodes[node.0].scroll_top = clamped;
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.nodes[node.0].offset_top
    }

    fn offset_height(&self, node: &NodeId) -> f64 {
        self.nodes[node.0].height
    }
}
