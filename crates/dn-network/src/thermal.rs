//! The ground-heat-exchanger thermal loop aggregate.

use dn_catalog::{BoreholeParameter, PipeParameter, SoilParameter};
use dn_core::Real;
use dn_geometry::{Point2D, Vector2D};
use dn_graph::{
    EdgeKind, GraphBuilder, GraphResult, Junction, NetworkGraph, RouteEdge, TerminalKind,
    TerminalNode, ValidationReport,
};

use crate::connector::ThermalConnector;
use crate::error::{NetworkError, NetworkResult};
use crate::exchanger::GroundHeatExchanger;

/// A district thermal loop: bore fields, the connectors chaining them
/// through the buildings, the loop-level physical records, and the
/// assumed fluid circulation direction used by bore-field sizing tools.
#[derive(Debug, Clone)]
pub struct GheThermalLoop {
    identifier: String,
    display_name: Option<String>,
    ground_heat_exchangers: Vec<GroundHeatExchanger>,
    connectors: Vec<ThermalConnector>,
    clockwise_flow: bool,
    soil_parameters: SoilParameter,
    pipe_parameters: PipeParameter,
    borehole_parameters: BoreholeParameter,
}

impl GheThermalLoop {
    /// Assemble a loop with default soil/pipe/borehole records and
    /// counterclockwise flow.
    pub fn new(
        identifier: impl Into<String>,
        ground_heat_exchangers: Vec<GroundHeatExchanger>,
        connectors: Vec<ThermalConnector>,
    ) -> NetworkResult<Self> {
        if ground_heat_exchangers.is_empty() {
            return Err(NetworkError::Invalid {
                what: "thermal loop must have at least one ground heat exchanger".to_string(),
            });
        }
        if connectors.is_empty() {
            return Err(NetworkError::Invalid {
                what: "thermal loop must possess at least one connector".to_string(),
            });
        }
        Ok(Self {
            identifier: identifier.into(),
            display_name: None,
            ground_heat_exchangers,
            connectors,
            clockwise_flow: false,
            soil_parameters: SoilParameter::default(),
            pipe_parameters: PipeParameter::default(),
            borehole_parameters: BoreholeParameter::default(),
        })
    }

    /// Replace the loop-level physical records, validating them.
    pub fn set_parameters(
        &mut self,
        soil: SoilParameter,
        pipe: PipeParameter,
        borehole: BoreholeParameter,
    ) -> NetworkResult<()> {
        soil.validate()?;
        pipe.validate()?;
        borehole.validate()?;
        self.soil_parameters = soil;
        self.pipe_parameters = pipe;
        self.borehole_parameters = borehole;
        Ok(())
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Display name, falling back to the identifier.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.identifier)
    }

    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = Some(name.into());
    }

    pub fn raw_display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn ground_heat_exchangers(&self) -> &[GroundHeatExchanger] {
        &self.ground_heat_exchangers
    }

    pub fn connectors(&self) -> &[ThermalConnector] {
        &self.connectors
    }

    pub fn clockwise_flow(&self) -> bool {
        self.clockwise_flow
    }

    pub fn set_clockwise_flow(&mut self, clockwise: bool) {
        self.clockwise_flow = clockwise;
    }

    pub fn soil_parameters(&self) -> &SoilParameter {
        &self.soil_parameters
    }

    pub fn pipe_parameters(&self) -> &PipeParameter {
        &self.pipe_parameters
    }

    pub fn borehole_parameters(&self) -> &BoreholeParameter {
        &self.borehole_parameters
    }

    pub fn add_connector(&mut self, connector: ThermalConnector) {
        self.connectors.push(connector);
    }

    /// Remove a connector by identifier. Removing the last connector is
    /// refused: a loop without connectors is not loadable.
    pub fn remove_connector(&mut self, identifier: &str) -> NetworkResult<ThermalConnector> {
        let index = self
            .connectors
            .iter()
            .position(|c| c.identifier == identifier)
            .ok_or_else(|| NetworkError::Invalid {
                what: format!("no connector '{identifier}' in loop"),
            })?;
        if self.connectors.len() == 1 {
            return Err(NetworkError::Invalid {
                what: "cannot remove the last connector".to_string(),
            });
        }
        Ok(self.connectors.remove(index))
    }

    /// Lower the loop into builder inputs and resolve its junction
    /// graph, including the flow-orientation check against
    /// `clockwise_flow`.
    pub fn build_graph(&self, tolerance: Real) -> GraphResult<(NetworkGraph, ValidationReport)> {
        let mut builder = GraphBuilder::new();
        for exchanger in &self.ground_heat_exchangers {
            builder.add_terminal(TerminalNode::new(
                exchanger.identifier.clone(),
                TerminalKind::GroundHeatExchanger,
                exchanger.geometry.clone(),
            ));
        }
        for connector in &self.connectors {
            builder.add_edge(RouteEdge::new(
                connector.identifier.clone(),
                EdgeKind::Thermal,
                connector.geometry.vertices(),
            )?);
        }
        builder.declare_clockwise_flow(self.clockwise_flow);
        builder.build(tolerance)
    }

    /// Resolved junctions plus, per connector, the identifiers of its
    /// start and end junctions.
    pub fn junctions(
        &self,
        tolerance: Real,
    ) -> GraphResult<(Vec<Junction>, Vec<(String, String)>)> {
        let (graph, _) = self.build_graph(tolerance)?;
        let pairs = graph.edge_junction_identifiers();
        Ok((graph.junctions().to_vec(), pairs))
    }

    pub fn translate(&mut self, vector: Vector2D) {
        for exchanger in &mut self.ground_heat_exchangers {
            exchanger.translate(vector);
        }
        for connector in &mut self.connectors {
            connector.geometry = connector.geometry.translate(vector);
        }
    }

    pub fn rotate(&mut self, angle: Real, origin: &Point2D) {
        for exchanger in &mut self.ground_heat_exchangers {
            exchanger.rotate(angle, origin);
        }
        for connector in &mut self.connectors {
            connector.geometry = connector.geometry.rotate(angle, origin);
        }
    }

    pub fn scale(&mut self, factor: Real, origin: &Point2D) {
        for exchanger in &mut self.ground_heat_exchangers {
            exchanger.scale(factor, origin);
        }
        for connector in &mut self.connectors {
            connector.geometry = connector.geometry.scale(factor, origin);
        }
    }

    pub fn reflect(&mut self, origin: &Point2D, axis: Vector2D) {
        for exchanger in &mut self.ground_heat_exchangers {
            exchanger.reflect(origin, axis);
        }
        for connector in &mut self.connectors {
            connector.geometry = connector.geometry.reflect(origin, axis);
        }
    }
}
