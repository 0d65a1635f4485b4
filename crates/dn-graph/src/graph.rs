//! Resolved graph data structures.

use std::collections::HashMap;

use dn_core::{EdgeId, JunctionId};
use dn_geometry::Point2D;

use crate::input::EdgeKind;

/// A node inferred by clustering coincident connector endpoints.
///
/// Junctions are never authored directly; the builder derives them and
/// numbers them in canonical (lexicographic position) order, so the same
/// element set always yields the same arena regardless of input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Junction {
    pub id: JunctionId,
    /// Deterministic identifier derived from the canonical ordinal.
    pub identifier: String,
    pub position: Point2D,
    /// Identifier of the terminal node (substation, transformer, ground
    /// heat exchanger) whose footprint this junction touches, if any.
    pub terminal: Option<String>,
}

/// A connector re-expressed as a junction-handle pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEdge {
    pub id: EdgeId,
    pub identifier: String,
    pub kind: EdgeKind,
    pub start: JunctionId,
    pub end: JunctionId,
}

impl ResolvedEdge {
    /// The unordered junction pair, smallest handle first.
    pub fn junction_pair(&self) -> (JunctionId, JunctionId) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    /// The junction on the far side of `junction`, if incident.
    pub fn other_end(&self, junction: JunctionId) -> Option<JunctionId> {
        if junction == self.start {
            Some(self.end)
        } else if junction == self.end {
            Some(self.start)
        } else {
            None
        }
    }
}

/// The resolved graph: junction arena plus edges storing handles.
///
/// Adjacency is stored compactly: junction `i`'s incident edges are
/// `junction_edges[junction_edge_offsets[i]..junction_edge_offsets[i+1]]`.
#[derive(Debug, Clone)]
pub struct NetworkGraph {
    pub(crate) junctions: Vec<Junction>,
    pub(crate) edges: Vec<ResolvedEdge>,
    pub(crate) junction_edge_offsets: Vec<usize>,
    pub(crate) junction_edges: Vec<EdgeId>,
}

impl NetworkGraph {
    pub fn junctions(&self) -> &[Junction] {
        &self.junctions
    }

    pub fn edges(&self) -> &[ResolvedEdge] {
        &self.edges
    }

    pub fn junction(&self, id: JunctionId) -> Option<&Junction> {
        self.junctions.get(id.index() as usize)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&ResolvedEdge> {
        self.edges.get(id.index() as usize)
    }

    /// Edge IDs incident to a junction.
    pub fn junction_edges(&self, id: JunctionId) -> &[EdgeId] {
        let idx = id.index() as usize;
        if idx >= self.junctions.len() {
            return &[];
        }
        let start = self.junction_edge_offsets[idx];
        let end = self.junction_edge_offsets[idx + 1];
        &self.junction_edges[start..end]
    }

    pub fn degree(&self, id: JunctionId) -> usize {
        self.junction_edges(id).len()
    }

    /// Per-edge (start, end) junction identifier pairs, aligned with the
    /// input connector order.
    pub fn edge_junction_identifiers(&self) -> Vec<(String, String)> {
        self.edges
            .iter()
            .map(|edge| {
                let start = &self.junctions[edge.start.index() as usize];
                let end = &self.junctions[edge.end.index() as usize];
                (start.identifier.clone(), end.identifier.clone())
            })
            .collect()
    }

    /// Edges of one kind.
    pub fn edges_of_kind(&self, kind: EdgeKind) -> impl Iterator<Item = &ResolvedEdge> {
        self.edges.iter().filter(move |e| e.kind == kind)
    }

    /// Build compact adjacency lists: for each junction, its incident edges.
    pub(crate) fn build_adjacency(
        junctions: &[Junction],
        edges: &[ResolvedEdge],
    ) -> (Vec<usize>, Vec<EdgeId>) {
        let mut junction_to_edges: HashMap<JunctionId, Vec<EdgeId>> = HashMap::new();
        for edge in edges {
            junction_to_edges.entry(edge.start).or_default().push(edge.id);
            // Self-loops (both endpoints clustered together) count once
            if edge.end != edge.start {
                junction_to_edges.entry(edge.end).or_default().push(edge.id);
            }
        }

        for edge_list in junction_to_edges.values_mut() {
            edge_list.sort_by_key(|e| e.index());
        }

        let mut offsets = Vec::with_capacity(junctions.len() + 1);
        let mut flat_edges = Vec::new();
        offsets.push(0);

        for junction in junctions {
            if let Some(edge_list) = junction_to_edges.get(&junction.id) {
                flat_edges.extend_from_slice(edge_list);
            }
            offsets.push(flat_edges.len());
        }

        (offsets, flat_edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dn_core::{EdgeId, JunctionId};

    fn junction(index: u32, x: f64, y: f64) -> Junction {
        Junction {
            id: JunctionId::from_index(index),
            identifier: format!("junction_{index}"),
            position: Point2D::new(x, y),
            terminal: None,
        }
    }

    fn edge(index: u32, start: u32, end: u32) -> ResolvedEdge {
        ResolvedEdge {
            id: EdgeId::from_index(index),
            identifier: format!("c{index}"),
            kind: EdgeKind::Electrical,
            start: JunctionId::from_index(start),
            end: JunctionId::from_index(end),
        }
    }

    #[test]
    fn adjacency_counts_degrees() {
        let junctions = vec![junction(0, 0.0, 0.0), junction(1, 1.0, 0.0), junction(2, 2.0, 0.0)];
        let edges = vec![edge(0, 0, 1), edge(1, 1, 2)];
        let (offsets, flat) = NetworkGraph::build_adjacency(&junctions, &edges);
        let graph = NetworkGraph {
            junctions,
            edges,
            junction_edge_offsets: offsets,
            junction_edges: flat,
        };
        assert_eq!(graph.degree(JunctionId::from_index(0)), 1);
        assert_eq!(graph.degree(JunctionId::from_index(1)), 2);
        assert_eq!(graph.degree(JunctionId::from_index(2)), 1);
    }

    #[test]
    fn other_end_and_pair() {
        let e = edge(0, 2, 1);
        assert_eq!(e.junction_pair(), (JunctionId::from_index(1), JunctionId::from_index(2)));
        assert_eq!(e.other_end(JunctionId::from_index(2)), Some(JunctionId::from_index(1)));
        assert_eq!(e.other_end(JunctionId::from_index(0)), None);
    }

    #[test]
    fn self_loop_counted_once_in_adjacency() {
        let junctions = vec![junction(0, 0.0, 0.0)];
        let edges = vec![edge(0, 0, 0)];
        let (offsets, flat) = NetworkGraph::build_adjacency(&junctions, &edges);
        assert_eq!(offsets, vec![0, 1]);
        assert_eq!(flat.len(), 1);
    }
}
