//! Tolerance-based endpoint clustering and graph assembly.

use std::cmp::Ordering;
use std::collections::HashMap;

use dn_core::{validate_tolerance, EdgeId, JunctionId, Real};
use dn_geometry::Point2D;
use petgraph::unionfind::UnionFind;
use tracing::{debug, trace};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Junction, NetworkGraph, ResolvedEdge};
use crate::input::{RouteEdge, TerminalNode};
use crate::report::ValidationReport;
use crate::validate;

/// Builder for resolving loose spatial elements into a junction graph.
///
/// Feed it terminal nodes and route edges in any order, then call
/// [`GraphBuilder::build`] with a snapping tolerance. Clustering is a
/// transitive union-find over all endpoint pairs within tolerance, with
/// smallest-by-coordinate cluster representatives, so the resulting
/// junction arena is canonical: any permutation of the same input
/// produces the same junctions in the same order.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    terminals: Vec<TerminalNode>,
    edges: Vec<RouteEdge>,
    declared_clockwise: Option<bool>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a terminal node connectors may attach to.
    pub fn add_terminal(&mut self, terminal: TerminalNode) -> &mut Self {
        self.terminals.push(terminal);
        self
    }

    /// Declare a connector edge.
    pub fn add_edge(&mut self, edge: RouteEdge) -> &mut Self {
        self.edges.push(edge);
        self
    }

    /// Declare the expected flow direction of a thermal loop; the build
    /// will compare it against the traversed winding order.
    pub fn declare_clockwise_flow(&mut self, clockwise: bool) -> &mut Self {
        self.declared_clockwise = Some(clockwise);
        self
    }

    /// Resolve junctions, re-express edges and validate.
    ///
    /// Returns the best-effort graph together with the defect report;
    /// only an unusable tolerance is a hard error.
    pub fn build(self, tolerance: Real) -> GraphResult<(NetworkGraph, ValidationReport)> {
        let tolerance = validate_tolerance(tolerance)
            .map_err(|_| GraphError::InvalidTolerance { value: tolerance })?;

        // Every edge contributes two candidate positions: candidate
        // 2*i is edge i's start, candidate 2*i + 1 its end.
        let mut candidates: Vec<Point2D> = Vec::with_capacity(self.edges.len() * 2);
        for edge in &self.edges {
            candidates.push(edge.start());
            candidates.push(edge.end());
        }

        let mut order: Vec<usize> = (0..candidates.len()).collect();
        order.sort_by(|&a, &b| cmp_points(&candidates[a], &candidates[b]));

        // Union every candidate pair within tolerance. The sorted-x sweep
        // window visits all such pairs, so cluster membership is the
        // transitive closure and does not depend on input order.
        let mut clusters = UnionFind::<usize>::new(candidates.len());
        for (rank, &i) in order.iter().enumerate() {
            for &j in &order[rank + 1..] {
                if candidates[j].x - candidates[i].x > tolerance {
                    break;
                }
                if candidates[i].distance_to(&candidates[j]) <= tolerance {
                    clusters.union(i, j);
                }
            }
        }

        // Visiting candidates in lexicographic order makes the first
        // insert per root the smallest-by-coordinate member: the
        // canonical representative.
        let mut representatives: HashMap<usize, Point2D> = HashMap::new();
        for &i in &order {
            representatives
                .entry(clusters.find(i))
                .or_insert(candidates[i]);
        }
        let mut ordered: Vec<(usize, Point2D)> = representatives.into_iter().collect();
        ordered.sort_by(|a, b| cmp_points(&a.1, &b.1));

        let mut root_to_junction: HashMap<usize, JunctionId> = HashMap::new();
        let mut junctions = Vec::with_capacity(ordered.len());
        for (ordinal, (root, position)) in ordered.into_iter().enumerate() {
            let id = JunctionId::from_index(ordinal as u32);
            root_to_junction.insert(root, id);
            trace!(ordinal, x = position.x, y = position.y, "resolved junction");
            junctions.push(Junction {
                id,
                identifier: format!("junction_{ordinal}"),
                position,
                terminal: None,
            });
        }

        // Attach junctions to the first terminal whose footprint
        // boundary they touch; declaration order breaks ties.
        for junction in &mut junctions {
            for terminal in &self.terminals {
                if terminal
                    .geometry
                    .is_point_on_edge(&junction.position, tolerance)
                {
                    junction.terminal = Some(terminal.identifier.clone());
                    break;
                }
            }
        }

        let mut edges = Vec::with_capacity(self.edges.len());
        for (i, edge) in self.edges.iter().enumerate() {
            let start = root_to_junction[&clusters.find(2 * i)];
            let end = root_to_junction[&clusters.find(2 * i + 1)];
            edges.push(ResolvedEdge {
                id: EdgeId::from_index(i as u32),
                identifier: edge.identifier.clone(),
                kind: edge.kind,
                start,
                end,
            });
        }

        let (junction_edge_offsets, junction_edges) =
            NetworkGraph::build_adjacency(&junctions, &edges);
        let graph = NetworkGraph {
            junctions,
            edges,
            junction_edge_offsets,
            junction_edges,
        };

        let mut report = ValidationReport::new();
        validate::check_duplicate_connectors(&graph, &mut report);
        validate::check_dangling_connectors(&graph, &mut report);
        validate::check_reachability(&graph, &self.terminals, &mut report);
        validate::check_exchanger_overlap(&self.terminals, tolerance, &mut report);
        if let Some(declared) = self.declared_clockwise {
            validate::check_flow_orientation(&graph, declared, &mut report);
        }

        debug!(
            candidates = graph.edges().len() * 2,
            junctions = graph.junctions().len(),
            edges = graph.edges().len(),
            defects = report.defects().len(),
            "graph build complete"
        );
        Ok((graph, report))
    }
}

fn cmp_points(a: &Point2D, b: &Point2D) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}
