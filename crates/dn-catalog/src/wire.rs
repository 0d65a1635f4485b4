//! Conductor specifications.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogRecord;
use crate::error::{check_positive_finite, CatalogResult};

/// Where the conductor runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WireType {
    /// Overhead
    #[default]
    OH,
    /// Underground
    UG,
}

/// Voltage class the conductor is rated for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum VoltageLevel {
    LV,
    #[default]
    MV,
    #[serde(rename = "LV and MV")]
    LVandMV,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WireTag {
    Wire,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConcentricTag {
    ConcentricProperties,
}

/// Concentric-neutral sub-properties for underground cables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConcentricProperties {
    #[serde(rename = "type")]
    pub tag: ConcentricTag,
    /// Number of neutral strands wound around the cable.
    pub strand_count: u32,
    /// Diameter of a single strand in meters.
    pub strand_diameter: f64,
    /// Geometric mean radius of a single strand in meters.
    pub strand_gmr: f64,
    /// Resistance of a single strand in ohms per meter.
    pub strand_resistance: f64,
    /// Diameter over the neutral strands in meters.
    pub neutral_diameter: f64,
}

impl ConcentricProperties {
    pub fn new(
        strand_count: u32,
        strand_diameter: f64,
        strand_gmr: f64,
        strand_resistance: f64,
        neutral_diameter: f64,
    ) -> Self {
        Self {
            tag: ConcentricTag::ConcentricProperties,
            strand_count,
            strand_diameter,
            strand_gmr,
            strand_resistance,
            neutral_diameter,
        }
    }

    pub fn validate(&self, wire_id: &str) -> CatalogResult<()> {
        check_positive_finite(
            format!("wire '{wire_id}' strand_diameter"),
            self.strand_diameter,
        )?;
        check_positive_finite(format!("wire '{wire_id}' strand_gmr"), self.strand_gmr)?;
        check_positive_finite(
            format!("wire '{wire_id}' strand_resistance"),
            self.strand_resistance,
        )?;
        check_positive_finite(
            format!("wire '{wire_id}' neutral_diameter"),
            self.neutral_diameter,
        )?;
        Ok(())
    }
}

/// Physical properties of a single conductor.
///
/// Referenced from power-line templates by identifier; the same wire
/// record may appear in many templates but is stored once per network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wire {
    #[serde(rename = "type")]
    pub tag: WireTag,
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub wire_type: WireType,
    /// Ampacity in amps.
    #[serde(default = "default_ampacity")]
    pub ampacity: f64,
    /// Geometric mean of distances between conductor strands in meters.
    #[serde(default = "default_gmr")]
    pub geometrical_mean_radius: f64,
    /// Resistance in ohms per meter of wire.
    #[serde(default = "default_resistance")]
    pub resistance: f64,
    /// Diameter in meters.
    #[serde(default = "default_diameter")]
    pub diameter: f64,
    #[serde(default)]
    pub voltage_level: VoltageLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concentric_properties: Option<ConcentricProperties>,
}

fn default_ampacity() -> f64 {
    220.0
}

fn default_gmr() -> f64 {
    0.0039
}

fn default_resistance() -> f64 {
    0.0003937
}

fn default_diameter() -> f64 {
    0.01
}

impl Wire {
    /// Create a wire with library default conductor properties.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            tag: WireTag::Wire,
            identifier: identifier.into(),
            display_name: None,
            wire_type: WireType::default(),
            ampacity: default_ampacity(),
            geometrical_mean_radius: default_gmr(),
            resistance: default_resistance(),
            diameter: default_diameter(),
            voltage_level: VoltageLevel::default(),
            concentric_properties: None,
        }
    }

    /// Display name, falling back to the identifier.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.identifier)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        let id = &self.identifier;
        check_positive_finite(format!("wire '{id}' ampacity"), self.ampacity)?;
        check_positive_finite(
            format!("wire '{id}' geometrical_mean_radius"),
            self.geometrical_mean_radius,
        )?;
        check_positive_finite(format!("wire '{id}' resistance"), self.resistance)?;
        check_positive_finite(format!("wire '{id}' diameter"), self.diameter)?;
        if let Some(concentric) = &self.concentric_properties {
            concentric.validate(id)?;
        }
        Ok(())
    }
}

impl CatalogRecord for Wire {
    const KIND: &'static str = "wire";

    fn identifier(&self) -> &str {
        &self.identifier
    }
}
