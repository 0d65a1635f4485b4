//! The electrical distribution network aggregate.

use std::collections::BTreeMap;
use std::sync::Arc;

use dn_catalog::{Catalog, PowerLine, TransformerProperties, Wire};
use dn_core::Real;
use dn_geometry::{Point2D, Vector2D};
use dn_graph::{
    EdgeKind, GraphBuilder, GraphResult, Junction, NetworkGraph, RouteEdge, TerminalKind,
    TerminalNode, ValidationReport,
};

use crate::connector::ElectricalConnector;
use crate::error::{NetworkError, NetworkResult};
use crate::substation::Substation;
use crate::transformer::Transformer;

/// An electrical distribution network: one substation root, the
/// transformers and connectors hanging off it, and the wire catalog
/// their power-line templates reference.
///
/// Constructed from a designer's raw layout or deserialized from an
/// abridged payload; mutated by adding/removing connectors and
/// transformers; replaced wholesale rather than partially torn down.
#[derive(Debug, Clone)]
pub struct ElectricalNetwork {
    identifier: String,
    display_name: Option<String>,
    substation: Substation,
    transformers: Vec<Transformer>,
    connectors: Vec<ElectricalConnector>,
    wires: Catalog<Wire>,
}

impl ElectricalNetwork {
    /// Assemble a network, checking cross-catalog consistency: every
    /// wire identifier named by a connector's power-line template must
    /// resolve in the wire catalog, and every referenced record must be
    /// physically valid.
    pub fn new(
        identifier: impl Into<String>,
        substation: Substation,
        transformers: Vec<Transformer>,
        connectors: Vec<ElectricalConnector>,
        wires: Catalog<Wire>,
    ) -> NetworkResult<Self> {
        if transformers.is_empty() {
            return Err(NetworkError::Invalid {
                what: "electrical network must have at least one transformer".to_string(),
            });
        }
        if connectors.is_empty() {
            return Err(NetworkError::Invalid {
                what: "electrical network must possess at least one connector".to_string(),
            });
        }

        for wire in wires.iter() {
            wire.validate()?;
        }
        for transformer in &transformers {
            transformer.properties.validate()?;
        }
        for connector in &connectors {
            connector.power_line.validate()?;
            for wire_id in &connector.power_line.wires {
                wires.resolve(wire_id)?;
            }
        }

        Ok(Self {
            identifier: identifier.into(),
            display_name: None,
            substation,
            transformers,
            connectors,
            wires,
        })
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

    pub fn substation(&self) -> &Substation {
        &self.substation
    }

    pub fn transformers(&self) -> &[Transformer] {
        &self.transformers
    }

    pub fn connectors(&self) -> &[ElectricalConnector] {
        &self.connectors
    }

    pub fn wire_catalog(&self) -> &Catalog<Wire> {
        &self.wires
    }

    /// Unique power-line templates referenced across the network,
    /// identifier-sorted.
    pub fn power_lines(&self) -> Vec<Arc<PowerLine>> {
        let mut unique: BTreeMap<&str, Arc<PowerLine>> = BTreeMap::new();
        for connector in &self.connectors {
            unique
                .entry(connector.power_line.identifier.as_str())
                .or_insert_with(|| Arc::clone(&connector.power_line));
        }
        unique.into_values().collect()
    }

    /// Unique transformer property records referenced across the
    /// network, identifier-sorted.
    pub fn transformer_properties(&self) -> Vec<Arc<TransformerProperties>> {
        let mut unique: BTreeMap<&str, Arc<TransformerProperties>> = BTreeMap::new();
        for transformer in &self.transformers {
            unique
                .entry(transformer.properties.identifier.as_str())
                .or_insert_with(|| Arc::clone(&transformer.properties));
        }
        unique.into_values().collect()
    }

    /// Unique wires referenced by the network's power-line templates,
    /// identifier-sorted.
    pub fn wires(&self) -> Vec<Arc<Wire>> {
        let mut unique: BTreeMap<String, Arc<Wire>> = BTreeMap::new();
        for power_line in self.power_lines() {
            for wire_id in &power_line.wires {
                if let Ok(wire) = self.wires.resolve(wire_id) {
                    unique.entry(wire_id.clone()).or_insert(wire);
                }
            }
        }
        unique.into_values().collect()
    }

    /// Add a connector, checking its wire references.
    pub fn add_connector(&mut self, connector: ElectricalConnector) -> NetworkResult<()> {
        connector.power_line.validate()?;
        for wire_id in &connector.power_line.wires {
            self.wires.resolve(wire_id)?;
        }
        self.connectors.push(connector);
        Ok(())
    }

    /// Remove a connector by identifier. Removing the last connector is
    /// refused: a network without connectors is not loadable.
    pub fn remove_connector(&mut self, identifier: &str) -> NetworkResult<ElectricalConnector> {
        let index = self
            .connectors
            .iter()
            .position(|c| c.identifier == identifier)
            .ok_or_else(|| NetworkError::Invalid {
                what: format!("no connector '{identifier}' in network"),
            })?;
        if self.connectors.len() == 1 {
            return Err(NetworkError::Invalid {
                what: "cannot remove the last connector".to_string(),
            });
        }
        Ok(self.connectors.remove(index))
    }

    pub fn add_transformer(&mut self, transformer: Transformer) -> NetworkResult<()> {
        transformer.properties.validate()?;
        self.transformers.push(transformer);
        Ok(())
    }

    /// Remove a transformer by identifier. Removing the last one is
    /// refused.
    pub fn remove_transformer(&mut self, identifier: &str) -> NetworkResult<Transformer> {
        let index = self
            .transformers
            .iter()
            .position(|t| t.identifier == identifier)
            .ok_or_else(|| NetworkError::Invalid {
                what: format!("no transformer '{identifier}' in network"),
            })?;
        if self.transformers.len() == 1 {
            return Err(NetworkError::Invalid {
                what: "cannot remove the last transformer".to_string(),
            });
        }
        Ok(self.transformers.remove(index))
    }

    /// Lower the network into builder inputs and resolve its junction
    /// graph.
    pub fn build_graph(&self, tolerance: Real) -> GraphResult<(NetworkGraph, ValidationReport)> {
        let mut builder = GraphBuilder::new();
        builder.add_terminal(TerminalNode::new(
            self.substation.identifier.clone(),
            TerminalKind::Substation,
            self.substation.geometry.clone(),
        ));
        for transformer in &self.transformers {
            builder.add_terminal(TerminalNode::new(
                transformer.identifier.clone(),
                TerminalKind::Transformer,
                transformer.geometry.clone(),
            ));
        }
        for connector in &self.connectors {
            builder.add_edge(RouteEdge::new(
                connector.identifier.clone(),
                EdgeKind::Electrical,
                connector.geometry.vertices(),
            )?);
        }
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
        self.substation.translate(vector);
        for transformer in &mut self.transformers {
            transformer.translate(vector);
        }
        for connector in &mut self.connectors {
            connector.geometry = connector.geometry.translate(vector);
        }
    }

    pub fn rotate(&mut self, angle: Real, origin: &Point2D) {
        self.substation.rotate(angle, origin);
        for transformer in &mut self.transformers {
            transformer.rotate(angle, origin);
        }
        for connector in &mut self.connectors {
            connector.geometry = connector.geometry.rotate(angle, origin);
        }
    }

    pub fn scale(&mut self, factor: Real, origin: &Point2D) {
        self.substation.scale(factor, origin);
        for transformer in &mut self.transformers {
            transformer.scale(factor, origin);
        }
        for connector in &mut self.connectors {
            connector.geometry = connector.geometry.scale(factor, origin);
        }
    }

    pub fn reflect(&mut self, origin: &Point2D, axis: Vector2D) {
        self.substation.reflect(origin, axis);
        for transformer in &mut self.transformers {
            transformer.reflect(origin, axis);
        }
        for connector in &mut self.connectors {
            connector.geometry = connector.geometry.reflect(origin, axis);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::RouteGeometry;
    use dn_catalog::Phase;
    use dn_geometry::{LineSegment2D, Polygon2D};

    fn wire_catalog() -> Catalog<Wire> {
        let mut wires = Catalog::new();
        wires.register(Wire::new("w_abc")).unwrap();
        wires
    }

    fn template() -> Arc<PowerLine> {
        Arc::new(
            PowerLine::new(
                "3P",
                vec!["w_abc".into(), "w_abc".into(), "w_abc".into()],
                vec![16.0, 16.0, 16.0],
                vec![0.0, 0.3, 0.6],
                vec![Phase::A, Phase::B, Phase::C],
            )
            .unwrap(),
        )
    }

    fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> RouteGeometry {
        RouteGeometry::Segment(
            LineSegment2D::from_end_points(Point2D::new(x1, y1), Point2D::new(x2, y2)).unwrap(),
        )
    }

    fn small_network() -> ElectricalNetwork {
        let substation = Substation::new(
            "sub",
            Polygon2D::from_rectangle(Point2D::new(0.0, 0.0), 10.0, 10.0).unwrap(),
        );
        let props = Arc::new(TransformerProperties::new("50KVA", 50.0));
        let transformer = Transformer::new(
            "tr_1",
            Polygon2D::from_rectangle(Point2D::new(20.0, 0.0), 5.0, 5.0).unwrap(),
            props,
        );
        let connector =
            ElectricalConnector::new("c_1", segment(10.0, 5.0, 20.0, 2.5), template());
        ElectricalNetwork::new(
            "district",
            substation,
            vec![transformer],
            vec![connector],
            wire_catalog(),
        )
        .unwrap()
    }

    #[test]
    fn substation_to_transformer_graph_is_clean() {
        let network = small_network();
        let (graph, report) = network.build_graph(0.01).unwrap();
        assert_eq!(graph.junctions().len(), 2);
        assert_eq!(graph.edges().len(), 1);
        assert!(report.is_clean(), "defects: {:?}", report.defects());
    }

    #[test]
    fn junctions_align_with_connectors() {
        let network = small_network();
        let (junctions, pairs) = network.junctions(0.01).unwrap();
        assert_eq!(junctions.len(), 2);
        assert_eq!(pairs.len(), 1);
        assert_ne!(pairs[0].0, pairs[0].1);
    }

    #[test]
    fn missing_wire_reference_fails_construction() {
        let substation = Substation::new(
            "sub",
            Polygon2D::from_rectangle(Point2D::new(0.0, 0.0), 10.0, 10.0).unwrap(),
        );
        let props = Arc::new(TransformerProperties::new("50KVA", 50.0));
        let transformer = Transformer::new(
            "tr_1",
            Polygon2D::from_rectangle(Point2D::new(20.0, 0.0), 5.0, 5.0).unwrap(),
            props,
        );
        let connector =
            ElectricalConnector::new("c_1", segment(10.0, 5.0, 20.0, 2.5), template());
        let err = ElectricalNetwork::new(
            "district",
            substation,
            vec![transformer],
            vec![connector],
            Catalog::new(), // empty: w_abc unresolvable
        )
        .unwrap_err();
        assert!(matches!(
            err,
            NetworkError::Catalog(dn_catalog::CatalogError::UnknownIdentifier { .. })
        ));
    }

    #[test]
    fn unique_catalog_extraction_dedupes() {
        let mut network = small_network();
        // A second connector sharing the same template
        network
            .add_connector(ElectricalConnector::new(
                "c_2",
                segment(20.0, 2.5, 40.0, 2.5),
                Arc::clone(&network.connectors()[0].power_line),
            ))
            .unwrap();
        assert_eq!(network.connectors().len(), 2);
        assert_eq!(network.power_lines().len(), 1);
        assert_eq!(network.wires().len(), 1);
        assert_eq!(network.transformer_properties().len(), 1);
    }

    #[test]
    fn last_elements_cannot_be_removed() {
        let mut network = small_network();
        assert!(network.remove_connector("c_1").is_err());
        assert!(network.remove_transformer("tr_1").is_err());
        assert!(network.remove_connector("nope").is_err());
    }

    #[test]
    fn translate_moves_everything() {
        let mut network = small_network();
        network.translate(Vector2D::new(100.0, 0.0));
        assert_eq!(
            network.substation().geometry.vertices()[0],
            Point2D::new(100.0, 0.0)
        );
        assert_eq!(
            network.connectors()[0].geometry.start(),
            Point2D::new(110.0, 5.0)
        );
        // Topology is translation-invariant
        let (graph, report) = network.build_graph(0.01).unwrap();
        assert_eq!(graph.junctions().len(), 2);
        assert!(report.is_clean());
    }
}
