use std::collections::HashMap;

use ego_tree::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct NodeMarks {
    processed: bool,
    hidden: bool,
}

/// Per-node marker state keyed by node identity.
///
/// This is the explicit-map equivalent of writing a processed attribute and
/// a hidden class onto live elements. A node is in one of three states:
/// unprocessed, processed-visible, or processed-hidden.
#[derive(Debug, Clone, Default)]
pub struct MarkerMap {
    marks: HashMap<NodeId, NodeMarks>,
}

impl MarkerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_processed(&self, id: NodeId) -> bool {
        self.marks.get(&id).is_some_and(|m| m.processed)
    }

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.marks.get(&id).is_some_and(|m| m.hidden)
    }

    pub fn mark_processed(&mut self, id: NodeId) {
        self.marks.entry(id).or_default().processed = true;
    }

    /// Hiding a node also marks it processed.
    pub fn mark_hidden(&mut self, id: NodeId) {
        let marks = self.marks.entry(id).or_default();
        marks.hidden = true;
        marks.processed = true;
    }

    /// Un-hides everything, returning how many nodes were affected.
    /// Processed markers are left alone (the disable path).
    pub fn clear_hidden(&mut self) -> usize {
        let mut cleared = 0;
        self.marks.retain(|_, marks| {
            if marks.hidden {
                marks.hidden = false;
                cleared += 1;
            }
            marks.processed || marks.hidden
        });
        cleared
    }

    /// Forgets every processed marker so the next scan re-evaluates all
    /// nodes. Hidden markers survive (the flag-change path).
    pub fn clear_processed(&mut self) {
        self.marks.retain(|_, marks| {
            marks.processed = false;
            marks.hidden
        });
    }

    pub fn hidden_nodes(&self) -> Vec<NodeId> {
        self.marks
            .iter()
            .filter(|(_, marks)| marks.hidden)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn hidden_count(&self) -> usize {
        self.marks.values().filter(|marks| marks.hidden).count()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
