// src/model/node.rs

/// Whether a node is the synthetic start-of-day anchor or a task time point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    Anchor,
    Task,
}

/// Identifier of a time point exchanged with callers.
///
/// Index `0` is always the anchor; every other index is a task. The last
/// task index doubles as the end-of-day node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    pub kind: NodeKind,
    pub index: usize,
}

impl NodeId {
    pub const ANCHOR: NodeId = NodeId {
        kind: NodeKind::Anchor,
        index: 0,
    };

    pub fn from_index(index: usize) -> Self {
        let kind = if index == 0 {
            NodeKind::Anchor
        } else {
            NodeKind::Task
        };
        Self { kind, index }
    }

    pub fn is_anchor(&self) -> bool {
        self.kind == NodeKind::Anchor
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        NodeId::from_index(index)
    }
}
