//! Payload schema definitions.
//!
//! These structs mirror the interchange JSON exactly; field names are
//! stable across schema versions and must be preserved for downstream
//! engine adapters. Geometry sub-objects carry a `type` discriminator
//! that is consulted before the remaining fields are interpreted.

use serde::{Deserialize, Serialize};

use dn_catalog::{
    BoreholeParameter, PipeParameter, PowerLine, SoilParameter, TransformerProperties, Wire,
};

/// Geometry in its wire form: points are `[x, y]` pairs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum GeometryDef {
    LineSegment2D { p: [f64; 2], v: [f64; 2] },
    Polyline2D { vertices: Vec<[f64; 2]> },
    Polygon2D { vertices: Vec<[f64; 2]> },
}

/// Top-level payload, discriminated by its `type` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum NetworkPayload {
    ElectricalNetwork(ElectricalNetworkDef),
    GHEThermalLoop(GheThermalLoopDef),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElectricalNetworkDef {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub substation: SubstationDef,
    pub transformers: Vec<TransformerAbridgedDef>,
    pub connectors: Vec<ElectricalConnectorAbridgedDef>,
    /// Power-line templates referenced by the connectors, emitted once.
    pub power_lines: Vec<PowerLine>,
    /// Wires referenced by the power-line templates, emitted once.
    pub wires: Vec<Wire>,
    /// Transformer property records referenced by the transformers,
    /// emitted once.
    pub transformer_properties: Vec<TransformerProperties>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubstationTag {
    Substation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubstationDef {
    #[serde(rename = "type")]
    pub tag: SubstationTag,
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Must be a `Polygon2D`.
    pub geometry: GeometryDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransformerAbridgedTag {
    TransformerAbridged,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransformerAbridgedDef {
    #[serde(rename = "type")]
    pub tag: TransformerAbridgedTag,
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Must be a `Polygon2D`.
    pub geometry: GeometryDef,
    /// Identifier into `transformer_properties`.
    pub properties: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ElectricalConnectorAbridgedTag {
    ElectricalConnectorAbridged,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElectricalConnectorAbridgedDef {
    #[serde(rename = "type")]
    pub tag: ElectricalConnectorAbridgedTag,
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// A `LineSegment2D` or `Polyline2D` route.
    pub geometry: GeometryDef,
    /// Identifier into `power_lines`.
    pub power_line: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GheThermalLoopDef {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Assumed fluid circulation direction, viewed from above.
    #[serde(default)]
    pub clockwise_flow: bool,
    pub ground_heat_exchangers: Vec<GroundHeatExchangerDef>,
    pub connectors: Vec<ThermalConnectorDef>,
    #[serde(default)]
    pub soil_parameters: SoilParameter,
    #[serde(default)]
    pub borehole_parameters: BoreholeParameter,
    #[serde(default)]
    pub pipe_parameters: PipeParameter,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GroundHeatExchangerTag {
    GroundHeatExchanger,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroundHeatExchangerDef {
    #[serde(rename = "type")]
    pub tag: GroundHeatExchangerTag,
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Bore-field outline; must be a `Polygon2D`.
    pub geometry: GeometryDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ThermalConnectorTag {
    ThermalConnector,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThermalConnectorDef {
    #[serde(rename = "type")]
    pub tag: ThermalConnectorTag,
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// A `LineSegment2D` or `Polyline2D` route.
    pub geometry: GeometryDef,
}
