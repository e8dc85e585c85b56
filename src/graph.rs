//! Topology graph lookup: node index and edge endpoint resolution.
//!
//! Edges are resolved against the node set of the current render. An edge
//! with either endpoint missing is dropped, never drawn half-way.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::types::{Topology, TopologyEdge, TopologyNode};

/// Id → node lookup built once per render. Last write wins on duplicate ids.
#[derive(Debug)]
pub struct NodeIndex<'a> {
    by_id: HashMap<&'a str, &'a TopologyNode>,
}

impl<'a> NodeIndex<'a> {
    pub fn build(nodes: &'a [TopologyNode]) -> Self {
        let mut by_id = HashMap::with_capacity(nodes.len());
        for node in nodes {
            if by_id.insert(node.id.as_str(), node).is_some() {
                warn!(id = %node.id, "duplicate node id, last definition wins for edge lookup");
            }
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a TopologyNode> {
        self.by_id.get(id).copied()
    }
}

/// An edge paired with the coordinates of both endpoints
#[derive(Debug, Clone, Copy)]
pub struct ResolvedEdge<'a> {
    pub edge: &'a TopologyEdge,
    pub from: &'a TopologyNode,
    pub to: &'a TopologyNode,
}

/// Resolve every edge against the node set, keeping input order and
/// dropping dangling edges.
pub fn resolve_edges(topology: &Topology) -> Vec<ResolvedEdge<'_>> {
    let index = NodeIndex::build(&topology.nodes);
    resolve_edges_with(&index, &topology.edges)
}

pub fn resolve_edges_with<'a>(
    index: &NodeIndex<'a>,
    edges: &'a [TopologyEdge],
) -> Vec<ResolvedEdge<'a>> {
    edges
        .iter()
        .filter_map(|edge| {
            let from = index.get(&edge.from);
            let to = index.get(&edge.to);
            match (from, to) {
                (Some(from), Some(to)) => Some(ResolvedEdge { edge, from, to }),
                _ => {
                    debug!(
                        edge = %edge.id,
                        from = %edge.from,
                        to = %edge.to,
                        "skipping dangling edge"
                    );
                    None
                }
            }
        })
        .collect()
}

/// Data-quality findings for a topology. Rendering never consults these;
/// it logs the same conditions as it meets them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphDiagnostics {
    /// Node ids that occur more than once, in first-seen order
    pub duplicate_node_ids: Vec<String>,
    /// Ids of edges with at least one missing endpoint
    pub dangling_edges: Vec<String>,
}

impl GraphDiagnostics {
    pub fn is_clean(&self) -> bool {
        self.duplicate_node_ids.is_empty() && self.dangling_edges.is_empty()
    }
}

pub fn inspect(topology: &Topology) -> GraphDiagnostics {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicate_node_ids = Vec::new();
    for node in &topology.nodes {
        if !seen.insert(node.id.as_str()) && reported.insert(node.id.as_str()) {
            duplicate_node_ids.push(node.id.clone());
        }
    }

    let dangling_edges = topology
        .edges
        .iter()
        .filter(|e| !seen.contains(e.from.as_str()) || !seen.contains(e.to.as_str()))
        .map(|e| e.id.clone())
        .collect::<Vec<_>>();

    GraphDiagnostics {
        duplicate_node_ids,
        dangling_edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EdgeKind, NodeCategory};

    fn node(id: &str, x: f64, y: f64) -> TopologyNode {
        TopologyNode {
            id: id.to_string(),
            x,
            y,
            category: NodeCategory::Room,
            label: None,
        }
    }

    fn edge(id: &str, from: &str, to: &str) -> TopologyEdge {
        TopologyEdge {
            id: id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            weight: None,
            kind: EdgeKind::Normal,
        }
    }

    #[test]
    fn test_all_edges_resolve() {
        let topology = Topology {
            nodes: vec![node("a", 0.0, 0.0), node("b", 1.0, 1.0), node("c", 2.0, 2.0)],
            edges: vec![edge("e1", "a", "b"), edge("e2", "b", "c"), edge("e3", "c", "a")],
        };
        let resolved = resolve_edges(&topology);
        assert_eq!(resolved.len(), 3);
        let ids: Vec<_> = resolved.iter().map(|r| r.edge.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e2", "e3"]);
    }

    #[test]
    fn test_dangling_edges_dropped() {
        let topology = Topology {
            nodes: vec![node("a", 0.0, 0.0), node("b", 1.0, 1.0)],
            edges: vec![
                edge("e1", "a", "ghost"),
                edge("e2", "ghost", "b"),
                edge("e3", "a", "b"),
            ],
        };
        let resolved = resolve_edges(&topology);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].edge.id, "e3");
    }

    #[test]
    fn test_duplicate_ids_last_write_wins() {
        let nodes = vec![node("a", 0.0, 0.0), node("a", 99.0, 42.0)];
        let index = NodeIndex::build(&nodes);
        let a = index.get("a").unwrap();
        assert_eq!((a.x, a.y), (99.0, 42.0));
    }

    #[test]
    fn test_self_loop_resolves() {
        let topology = Topology {
            nodes: vec![node("a", 5.0, 5.0)],
            edges: vec![edge("loop", "a", "a")],
        };
        assert_eq!(resolve_edges(&topology).len(), 1);
    }

    #[test]
    fn test_inspect() {
        let topology = Topology {
            nodes: vec![node("a", 0.0, 0.0), node("a", 1.0, 1.0), node("a", 2.0, 2.0), node("b", 3.0, 3.0)],
            edges: vec![edge("e1", "a", "b"), edge("e2", "b", "nowhere")],
        };
        let diagnostics = inspect(&topology);
        assert_eq!(diagnostics.duplicate_node_ids, vec!["a".to_string()]);
        assert_eq!(diagnostics.dangling_edges, vec!["e2".to_string()]);
        assert!(!diagnostics.is_clean());
        assert!(inspect(&Topology::default()).is_clean());
    }
}
