//! Conversions between the in-memory model and its abridged wire form.
//!
//! `to_abridged` replaces every embedded catalog record with its
//! identifier and emits the referenced records once at the top level,
//! sorted by identifier. `from_abridged` performs the inverse resolve
//! and fails on any unknown identifier, conflicting duplicate record or
//! wrong geometry discriminator.

use dn_catalog::{Catalog, PowerLine, TransformerProperties, Wire};
use dn_geometry::{LineSegment2D, Point2D, Polygon2D, Polyline2D, Vector2D};
use dn_network::{
    ElectricalConnector, ElectricalNetwork, GheThermalLoop, GroundHeatExchanger, RouteGeometry,
    Substation, ThermalConnector, Transformer,
};

use crate::error::{PayloadError, PayloadResult};
use crate::schema::{
    ElectricalConnectorAbridgedDef, ElectricalConnectorAbridgedTag, ElectricalNetworkDef,
    GeometryDef, GheThermalLoopDef, GroundHeatExchangerDef, GroundHeatExchangerTag,
    SubstationDef, SubstationTag, ThermalConnectorDef, ThermalConnectorTag,
    TransformerAbridgedDef, TransformerAbridgedTag,
};

fn point(pair: [f64; 2]) -> Point2D {
    Point2D::new(pair[0], pair[1])
}

fn pair(point: Point2D) -> [f64; 2] {
    [point.x, point.y]
}

/// Interpret a geometry def as a closed footprint polygon.
fn polygon_from_def(def: &GeometryDef, context: &str) -> PayloadResult<Polygon2D> {
    match def {
        GeometryDef::Polygon2D { vertices } => {
            Ok(Polygon2D::new(vertices.iter().copied().map(point).collect())?)
        }
        GeometryDef::LineSegment2D { .. } | GeometryDef::Polyline2D { .. } => {
            Err(PayloadError::SchemaMismatch {
                what: format!("{context} geometry must be a Polygon2D"),
            })
        }
    }
}

/// Interpret a geometry def as a connector route.
fn route_from_def(def: &GeometryDef, context: &str) -> PayloadResult<RouteGeometry> {
    match def {
        GeometryDef::LineSegment2D { p, v } => Ok(RouteGeometry::Segment(LineSegment2D::new(
            point(*p),
            Vector2D::new(v[0], v[1]),
        )?)),
        GeometryDef::Polyline2D { vertices } => Ok(RouteGeometry::Polyline(Polyline2D::new(
            vertices.iter().copied().map(point).collect(),
        )?)),
        GeometryDef::Polygon2D { .. } => Err(PayloadError::SchemaMismatch {
            what: format!("{context} geometry must be a LineSegment2D or Polyline2D"),
        }),
    }
}

fn def_from_polygon(polygon: &Polygon2D) -> GeometryDef {
    GeometryDef::Polygon2D {
        vertices: polygon.vertices().iter().copied().map(pair).collect(),
    }
}

fn def_from_route(route: &RouteGeometry) -> GeometryDef {
    match route {
        RouteGeometry::Segment(segment) => GeometryDef::LineSegment2D {
            p: pair(segment.p()),
            v: [segment.v().x, segment.v().y],
        },
        RouteGeometry::Polyline(polyline) => GeometryDef::Polyline2D {
            vertices: polyline.vertices().iter().copied().map(pair).collect(),
        },
    }
}

/// Abridge an electrical network: elements reference catalog records by
/// identifier, and the referenced records are emitted once,
/// identifier-sorted.
pub fn electrical_to_abridged(network: &ElectricalNetwork) -> ElectricalNetworkDef {
    let substation = network.substation();
    ElectricalNetworkDef {
        identifier: network.identifier().to_string(),
        display_name: network.raw_display_name().map(str::to_string),
        substation: SubstationDef {
            tag: SubstationTag::Substation,
            identifier: substation.identifier.clone(),
            display_name: substation.display_name.clone(),
            geometry: def_from_polygon(&substation.geometry),
        },
        transformers: network
            .transformers()
            .iter()
            .map(|t| TransformerAbridgedDef {
                tag: TransformerAbridgedTag::TransformerAbridged,
                identifier: t.identifier.clone(),
                display_name: t.display_name.clone(),
                geometry: def_from_polygon(&t.geometry),
                properties: t.properties.identifier.clone(),
            })
            .collect(),
        connectors: network
            .connectors()
            .iter()
            .map(|c| ElectricalConnectorAbridgedDef {
                tag: ElectricalConnectorAbridgedTag::ElectricalConnectorAbridged,
                identifier: c.identifier.clone(),
                display_name: c.display_name.clone(),
                geometry: def_from_route(&c.geometry),
                power_line: c.power_line.identifier.clone(),
            })
            .collect(),
        power_lines: network
            .power_lines()
            .iter()
            .map(|p| PowerLine::clone(p))
            .collect(),
        wires: network.wires().iter().map(|w| Wire::clone(w)).collect(),
        transformer_properties: network
            .transformer_properties()
            .iter()
            .map(|t| TransformerProperties::clone(t))
            .collect(),
    }
}

/// Resolve an abridged electrical network back into the in-memory
/// model. Catalogs are rebuilt first (wires, then the power lines that
/// reference them, then transformer properties), so every element
/// reference resolves against validated records.
pub fn electrical_from_abridged(def: &ElectricalNetworkDef) -> PayloadResult<ElectricalNetwork> {
    let mut wires: Catalog<Wire> = Catalog::new();
    for wire in &def.wires {
        wire.validate()?;
        wires.register(wire.clone())?;
    }

    let mut power_lines: Catalog<PowerLine> = Catalog::new();
    for line in &def.power_lines {
        line.validate()?;
        for wire_id in &line.wires {
            wires.resolve(wire_id)?;
        }
        power_lines.register(line.clone())?;
    }

    let mut properties: Catalog<TransformerProperties> = Catalog::new();
    for record in &def.transformer_properties {
        record.validate()?;
        properties.register(record.clone())?;
    }

    let substation_geometry = polygon_from_def(
        &def.substation.geometry,
        &format!("substation '{}'", def.substation.identifier),
    )?;
    let mut substation = Substation::new(def.substation.identifier.clone(), substation_geometry);
    substation.display_name = def.substation.display_name.clone();

    let mut transformers = Vec::with_capacity(def.transformers.len());
    for t in &def.transformers {
        let geometry =
            polygon_from_def(&t.geometry, &format!("transformer '{}'", t.identifier))?;
        let record = properties.resolve(&t.properties)?;
        let mut transformer = Transformer::new(t.identifier.clone(), geometry, record);
        transformer.display_name = t.display_name.clone();
        transformers.push(transformer);
    }

    let mut connectors = Vec::with_capacity(def.connectors.len());
    for c in &def.connectors {
        let geometry = route_from_def(&c.geometry, &format!("connector '{}'", c.identifier))?;
        let line = power_lines.resolve(&c.power_line)?;
        let mut connector = ElectricalConnector::new(c.identifier.clone(), geometry, line);
        connector.display_name = c.display_name.clone();
        connectors.push(connector);
    }

    let mut network = ElectricalNetwork::new(
        def.identifier.clone(),
        substation,
        transformers,
        connectors,
        wires,
    )?;
    if let Some(name) = &def.display_name {
        network.set_display_name(name.clone());
    }
    Ok(network)
}

/// Abridge a thermal loop. The loop-level parameter records are flat
/// and carried as-is.
pub fn loop_to_abridged(loop_model: &GheThermalLoop) -> GheThermalLoopDef {
    GheThermalLoopDef {
        identifier: loop_model.identifier().to_string(),
        display_name: loop_model.raw_display_name().map(str::to_string),
        clockwise_flow: loop_model.clockwise_flow(),
        ground_heat_exchangers: loop_model
            .ground_heat_exchangers()
            .iter()
            .map(|g| GroundHeatExchangerDef {
                tag: GroundHeatExchangerTag::GroundHeatExchanger,
                identifier: g.identifier.clone(),
                display_name: g.display_name.clone(),
                geometry: def_from_polygon(&g.geometry),
            })
            .collect(),
        connectors: loop_model
            .connectors()
            .iter()
            .map(|c| ThermalConnectorDef {
                tag: ThermalConnectorTag::ThermalConnector,
                identifier: c.identifier.clone(),
                display_name: c.display_name.clone(),
                geometry: def_from_route(&c.geometry),
            })
            .collect(),
        soil_parameters: loop_model.soil_parameters().clone(),
        borehole_parameters: loop_model.borehole_parameters().clone(),
        pipe_parameters: loop_model.pipe_parameters().clone(),
    }
}

/// Resolve an abridged thermal loop back into the in-memory model.
pub fn loop_from_abridged(def: &GheThermalLoopDef) -> PayloadResult<GheThermalLoop> {
    let mut exchangers = Vec::with_capacity(def.ground_heat_exchangers.len());
    for g in &def.ground_heat_exchangers {
        let geometry = polygon_from_def(
            &g.geometry,
            &format!("ground heat exchanger '{}'", g.identifier),
        )?;
        let mut exchanger = GroundHeatExchanger::new(g.identifier.clone(), geometry);
        exchanger.display_name = g.display_name.clone();
        exchangers.push(exchanger);
    }

    let mut connectors = Vec::with_capacity(def.connectors.len());
    for c in &def.connectors {
        let geometry = route_from_def(&c.geometry, &format!("connector '{}'", c.identifier))?;
        let mut connector = ThermalConnector::new(c.identifier.clone(), geometry);
        connector.display_name = c.display_name.clone();
        connectors.push(connector);
    }

    let mut loop_model = GheThermalLoop::new(def.identifier.clone(), exchangers, connectors)?;
    loop_model.set_clockwise_flow(def.clockwise_flow);
    loop_model.set_parameters(
        def.soil_parameters.clone(),
        def.pipe_parameters.clone(),
        def.borehole_parameters.clone(),
    )?;
    if let Some(name) = &def.display_name {
        loop_model.set_display_name(name.clone());
    }
    Ok(loop_model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_def_rejects_routes() {
        let def = GeometryDef::LineSegment2D {
            p: [0.0, 0.0],
            v: [1.0, 0.0],
        };
        let err = polygon_from_def(&def, "substation 'sub'").unwrap_err();
        assert!(matches!(err, PayloadError::SchemaMismatch { what } if what.contains("sub")));
    }

    #[test]
    fn route_def_rejects_polygons() {
        let def = GeometryDef::Polygon2D {
            vertices: vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
        };
        assert!(route_from_def(&def, "connector 'c'").is_err());
    }

    #[test]
    fn degenerate_payload_geometry_is_fatal() {
        let def = GeometryDef::LineSegment2D {
            p: [0.0, 0.0],
            v: [0.0, 0.0],
        };
        let err = route_from_def(&def, "connector 'c'").unwrap_err();
        assert!(matches!(err, PayloadError::Geometry(_)));
    }

    #[test]
    fn route_round_trip_preserves_vertices() {
        let def = GeometryDef::Polyline2D {
            vertices: vec![[0.0, 0.0], [5.5, 0.25], [10.0, -3.0]],
        };
        let route = route_from_def(&def, "connector 'c'").unwrap();
        assert_eq!(def_from_route(&route), def);
    }
}
