//! Non-fatal validation report.
//!
//! Topological defects are data, not errors: the builder returns the
//! best-effort graph together with the report, and the caller decides
//! whether a defect is acceptable (a dangling connector may be
//! intentional during incremental design).

use core::fmt;

use dn_geometry::Point2D;

/// A topological defect found while validating a resolved graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Defect {
    /// A degree-1 junction that is not attached to any terminal node.
    DanglingConnector {
        connector: String,
        position: Point2D,
    },

    /// Two edges of the same kind spanning the identical junction pair.
    /// Reported, never auto-removed.
    DuplicateConnector { first: String, second: String },

    /// A junction or terminal that cannot be reached from the network
    /// root (the substation for electrical graphs, the main component
    /// for thermal loops).
    UnreachableNode { identifier: String },

    /// Two ground-heat-exchanger bore fields that intersect, touch
    /// within tolerance, or nest.
    OverlappingExchanger { first: String, second: String },

    /// The traversed loop winds against the declared flow direction.
    FlowOrientation {
        declared_clockwise: bool,
        computed_clockwise: bool,
    },
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::DanglingConnector {
                connector,
                position,
            } => write!(
                f,
                "Connector '{}' has an unattached end at ({}, {})",
                connector, position.x, position.y
            ),
            Defect::DuplicateConnector { first, second } => write!(
                f,
                "Connectors '{}' and '{}' span the same junction pair",
                first, second
            ),
            Defect::UnreachableNode { identifier } => {
                write!(f, "'{}' is not reachable from the network root", identifier)
            }
            Defect::OverlappingExchanger { first, second } => write!(
                f,
                "Ground heat exchangers '{}' and '{}' overlap",
                first, second
            ),
            Defect::FlowOrientation {
                declared_clockwise,
                computed_clockwise,
            } => write!(
                f,
                "Loop is declared {} but winds {}",
                flow_name(*declared_clockwise),
                flow_name(*computed_clockwise)
            ),
        }
    }
}

fn flow_name(clockwise: bool) -> &'static str {
    if clockwise {
        "clockwise"
    } else {
        "counterclockwise"
    }
}

/// The defects found during one graph build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    defects: Vec<Defect>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, defect: Defect) {
        self.defects.push(defect);
    }

    pub(crate) fn extend(&mut self, defects: impl IntoIterator<Item = Defect>) {
        self.defects.extend(defects);
    }

    pub fn defects(&self) -> &[Defect] {
        &self.defects
    }

    pub fn is_clean(&self) -> bool {
        self.defects.is_empty()
    }

    pub fn dangling(&self) -> impl Iterator<Item = &Defect> {
        self.defects
            .iter()
            .filter(|d| matches!(d, Defect::DanglingConnector { .. }))
    }

    pub fn duplicates(&self) -> impl Iterator<Item = &Defect> {
        self.defects
            .iter()
            .filter(|d| matches!(d, Defect::DuplicateConnector { .. }))
    }

    pub fn unreachable(&self) -> impl Iterator<Item = &Defect> {
        self.defects
            .iter()
            .filter(|d| matches!(d, Defect::UnreachableNode { .. }))
    }
}
