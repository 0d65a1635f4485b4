//! Defect detection over the resolved graph.
//!
//! Everything here is non-fatal: findings are pushed into the
//! [`ValidationReport`] and the best-effort graph is still returned.

use std::collections::{HashMap, HashSet, VecDeque};

use dn_core::{JunctionId, Real};

use crate::graph::NetworkGraph;
use crate::input::{EdgeKind, TerminalKind, TerminalNode};
use crate::report::{Defect, ValidationReport};

/// Two edges of the same kind spanning the identical junction pair.
pub(crate) fn check_duplicate_connectors(graph: &NetworkGraph, report: &mut ValidationReport) {
    let mut seen: HashMap<(JunctionId, JunctionId, EdgeKind), &str> = HashMap::new();
    for edge in graph.edges() {
        let (a, b) = edge.junction_pair();
        match seen.get(&(a, b, edge.kind)) {
            Some(first) => report.push(Defect::DuplicateConnector {
                first: (*first).to_string(),
                second: edge.identifier.clone(),
            }),
            None => {
                seen.insert((a, b, edge.kind), &edge.identifier);
            }
        }
    }
}

/// Degree-1 junctions that touch no terminal footprint.
pub(crate) fn check_dangling_connectors(graph: &NetworkGraph, report: &mut ValidationReport) {
    for junction in graph.junctions() {
        if junction.terminal.is_some() {
            continue;
        }
        let incident = graph.junction_edges(junction.id);
        if incident.len() == 1 {
            let edge = graph
                .edge(incident[0])
                .expect("adjacency references existing edge");
            report.push(Defect::DanglingConnector {
                connector: edge.identifier.clone(),
                position: junction.position,
            });
        }
    }
}

/// Reachability of the electrical graph from the substation root and of
/// the thermal graph from its main component.
pub(crate) fn check_reachability(
    graph: &NetworkGraph,
    terminals: &[TerminalNode],
    report: &mut ValidationReport,
) {
    check_electrical_reachability(graph, terminals, report);
    check_thermal_connectivity(graph, terminals, report);
}

fn terminal_junctions<'a>(
    graph: &'a NetworkGraph,
    terminal: &TerminalNode,
) -> Vec<&'a crate::graph::Junction> {
    graph
        .junctions()
        .iter()
        .filter(|j| j.terminal.as_deref() == Some(terminal.identifier.as_str()))
        .collect()
}

/// Junction IDs reachable from `roots` over edges of `kind`.
fn reachable_set(
    graph: &NetworkGraph,
    roots: impl IntoIterator<Item = JunctionId>,
    kind: EdgeKind,
) -> HashSet<JunctionId> {
    let mut reached: HashSet<JunctionId> = HashSet::new();
    let mut queue: VecDeque<JunctionId> = VecDeque::new();
    for root in roots {
        if reached.insert(root) {
            queue.push_back(root);
        }
    }
    while let Some(junction) = queue.pop_front() {
        for &edge_id in graph.junction_edges(junction) {
            let edge = graph.edge(edge_id).expect("adjacency references existing edge");
            if edge.kind != kind {
                continue;
            }
            if let Some(next) = edge.other_end(junction) {
                if reached.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }
    reached
}

/// Distribution networks are rooted at one substation: every electrical
/// junction and every transformer must trace back to it. Without a
/// substation among the terminals there is no root and the check is
/// skipped.
fn check_electrical_reachability(
    graph: &NetworkGraph,
    terminals: &[TerminalNode],
    report: &mut ValidationReport,
) {
    let Some(substation) = terminals
        .iter()
        .find(|t| t.kind == TerminalKind::Substation)
    else {
        return;
    };

    let roots: Vec<JunctionId> = terminal_junctions(graph, substation)
        .iter()
        .map(|j| j.id)
        .collect();
    let reached = reachable_set(graph, roots, EdgeKind::Electrical);

    // Electrical junctions outside the root component
    for junction in graph.junctions() {
        let electrical = graph
            .junction_edges(junction.id)
            .iter()
            .any(|&e| graph.edge(e).is_some_and(|edge| edge.kind == EdgeKind::Electrical));
        if electrical && !reached.contains(&junction.id) {
            report.push(Defect::UnreachableNode {
                identifier: junction.identifier.clone(),
            });
        }
    }

    // Transformers with no reached junction, including isolated ones
    for terminal in terminals {
        if terminal.kind != TerminalKind::Transformer {
            continue;
        }
        let attached = terminal_junctions(graph, terminal);
        let connected = attached.iter().any(|j| reached.contains(&j.id));
        if !connected {
            report.push(Defect::UnreachableNode {
                identifier: terminal.identifier.clone(),
            });
        }
    }
}

/// A thermal loop must be one connected component: junctions and
/// exchangers outside the component holding the first ground heat
/// exchanger (or the largest component, if no exchanger is declared)
/// are flagged.
fn check_thermal_connectivity(
    graph: &NetworkGraph,
    terminals: &[TerminalNode],
    report: &mut ValidationReport,
) {
    let thermal_junctions: Vec<JunctionId> = graph
        .junctions()
        .iter()
        .filter(|j| {
            graph
                .junction_edges(j.id)
                .iter()
                .any(|&e| graph.edge(e).is_some_and(|edge| edge.kind == EdgeKind::Thermal))
        })
        .map(|j| j.id)
        .collect();

    let exchangers: Vec<&TerminalNode> = terminals
        .iter()
        .filter(|t| t.kind == TerminalKind::GroundHeatExchanger)
        .collect();

    if thermal_junctions.is_empty() {
        // No thermal edges at all: declared exchangers sit isolated
        for exchanger in &exchangers {
            report.push(Defect::UnreachableNode {
                identifier: exchanger.identifier.clone(),
            });
        }
        return;
    }

    // Root component: the one holding the first exchanger's junctions,
    // falling back to the component of the smallest thermal junction.
    let roots: Vec<JunctionId> = exchangers
        .first()
        .map(|ghe| {
            terminal_junctions(graph, ghe)
                .iter()
                .map(|j| j.id)
                .collect::<Vec<_>>()
        })
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| vec![thermal_junctions[0]]);
    let reached = reachable_set(graph, roots, EdgeKind::Thermal);

    for &junction_id in &thermal_junctions {
        if !reached.contains(&junction_id) {
            let junction = graph.junction(junction_id).expect("junction in arena");
            report.push(Defect::UnreachableNode {
                identifier: junction.identifier.clone(),
            });
        }
    }

    for exchanger in &exchangers {
        let attached = terminal_junctions(graph, exchanger);
        let connected = attached.iter().any(|j| reached.contains(&j.id));
        if !connected {
            report.push(Defect::UnreachableNode {
                identifier: exchanger.identifier.clone(),
            });
        }
    }
}

/// Bore fields may not intersect, touch within tolerance, or nest.
pub(crate) fn check_exchanger_overlap(
    terminals: &[TerminalNode],
    tolerance: Real,
    report: &mut ValidationReport,
) {
    let exchangers: Vec<&TerminalNode> = terminals
        .iter()
        .filter(|t| t.kind == TerminalKind::GroundHeatExchanger)
        .collect();
    for (i, a) in exchangers.iter().enumerate() {
        for b in &exchangers[i + 1..] {
            if a.geometry.overlaps(&b.geometry, tolerance) {
                report.push(Defect::OverlappingExchanger {
                    first: a.identifier.clone(),
                    second: b.identifier.clone(),
                });
            }
        }
    }
}

/// Compare the declared flow direction against the winding order of the
/// traversed loop. Applies only when the thermal edges form exactly one
/// simple cycle of 3 or more junctions; anything else has no winding
/// signature and the check is skipped.
pub(crate) fn check_flow_orientation(
    graph: &NetworkGraph,
    declared_clockwise: bool,
    report: &mut ValidationReport,
) {
    let Some(cycle) = thermal_cycle(graph) else {
        return;
    };
    if cycle.len() < 3 {
        return;
    }

    let mut signed_area = 0.0;
    for i in 0..cycle.len() {
        let a = graph.junction(cycle[i]).expect("junction in arena").position;
        let b = graph
            .junction(cycle[(i + 1) % cycle.len()])
            .expect("junction in arena")
            .position;
        signed_area += a.x * b.y - b.x * a.y;
    }
    if signed_area == 0.0 {
        return;
    }

    let computed_clockwise = signed_area < 0.0;
    if computed_clockwise != declared_clockwise {
        report.push(Defect::FlowOrientation {
            declared_clockwise,
            computed_clockwise,
        });
    }
}

/// The junction sequence of the single thermal cycle, if the thermal
/// subgraph is exactly one cycle (every thermal junction of degree 2,
/// connected, no self-loops).
fn thermal_cycle(graph: &NetworkGraph) -> Option<Vec<JunctionId>> {
    let mut incident: HashMap<JunctionId, Vec<&crate::graph::ResolvedEdge>> = HashMap::new();
    let mut edge_count = 0usize;
    for edge in graph.edges_of_kind(EdgeKind::Thermal) {
        if edge.start == edge.end {
            return None;
        }
        incident.entry(edge.start).or_default().push(edge);
        incident.entry(edge.end).or_default().push(edge);
        edge_count += 1;
    }
    if incident.is_empty() || incident.len() != edge_count {
        return None;
    }
    if incident.values().any(|edges| edges.len() != 2) {
        return None;
    }

    // Deterministic start: the smallest junction handle
    let start = *incident.keys().min()?;
    let mut cycle = vec![start];
    let mut used: HashSet<&str> = HashSet::new();
    let mut current = start;
    loop {
        let edge = incident[&current]
            .iter()
            .find(|e| !used.contains(e.identifier.as_str()))?;
        used.insert(edge.identifier.as_str());
        current = edge.other_end(current)?;
        if current == start {
            break;
        }
        cycle.push(current);
    }
    // A single cycle consumes every thermal edge
    if used.len() != edge_count {
        return None;
    }
    Some(cycle)
}
