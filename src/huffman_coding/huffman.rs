use log::trace;

use crate::tools::freq_count::FrequencyTable;

/// Index of a node in the tree's arena.
pub type NodeId = usize;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum NodeData {
    /// Left (0) and right (1) children.
    Kids(NodeId, NodeId),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Node {
    pub weight: u64,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u64, node_data: NodeData) -> Node {
        Node { weight, node_data }
    }
}

/// A Huffman tree stored as an arena of nodes.
///
/// Leaves occupy ids `0..n` in ascending byte order, internal nodes follow in the order they
/// were merged. The id doubles as the tie-break key: of two nodes with the same weight, the
/// one with the smaller id is taken first. Both the encoder and the decoder rebuild the tree
/// from nothing but the frequency table, so this order must never depend on anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build the tree for `table`. Returns None for an empty table.
    ///
    /// A table with a single entry yields a tree whose root is that lone leaf.
    pub fn build(table: &FrequencyTable) -> Option<Self> {
        let mut nodes: Vec<Node> = table
            .iter()
            .map(|(byte, count)| Node::new(count, NodeData::Leaf(byte)))
            .collect();
        if nodes.is_empty() {
            return None;
        }

        // Work list of (weight, id). Kept sorted in decreasing order so the two lightest
        // nodes sit at the end and can be popped.
        let mut work: Vec<(u64, NodeId)> = nodes
            .iter()
            .enumerate()
            .map(|(id, node)| (node.weight, id))
            .collect();

        // ...then pare it down to one single node with child nodes - keep it sorted.
        while work.len() > 1 {
            work.sort_unstable_by(|a, b| b.cmp(a));

            // First one out goes left.
            let (left_weight, left) = work.pop()?;
            let (right_weight, right) = work.pop()?;
            let id = nodes.len();
            nodes.push(Node::new(
                left_weight + right_weight,
                NodeData::Kids(left, right),
            ));
            work.push((left_weight + right_weight, id));
        }

        let root = work[0].1;
        trace!(
            "Built huffman tree with {} leaves and {} nodes.",
            table.len(),
            nodes.len()
        );
        Some(HuffmanTree { nodes, root })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Number of nodes, leaves included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The byte of the root if the whole tree is one leaf.
    pub fn single_leaf(&self) -> Option<u8> {
        match self.nodes[self.root].node_data {
            NodeData::Leaf(byte) => Some(byte),
            NodeData::Kids(..) => None,
        }
    }

    /// Length of the longest root to leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 0)];
        while let Some((id, depth)) = stack.pop() {
            match self.nodes[id].node_data {
                NodeData::Kids(left, right) => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
                NodeData::Leaf(_) => deepest = deepest.max(depth),
            }
        }
        deepest
    }
}
