//! Transformer specification records.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogRecord;
use crate::error::{check_positive_finite, CatalogError, CatalogResult};

/// Internal winding connection of a transformer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WindingConnection {
    #[default]
    #[serde(rename = "Wye-Wye")]
    WyeWye,
    #[serde(rename = "Wye-Delta")]
    WyeDelta,
    #[serde(rename = "Delta-Wye")]
    DeltaWye,
    #[serde(rename = "Delta-Delta")]
    DeltaDelta,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransformerPropertiesTag {
    TransformerProperties,
}

/// Electrical properties shared by every transformer referencing the
/// record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransformerProperties {
    #[serde(rename = "type")]
    pub tag: TransformerPropertiesTag,
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Base rating in kilovolt-amps.
    pub kva: f64,
    /// Resistance in ohms.
    #[serde(default = "default_resistance")]
    pub resistance: f64,
    /// Reactance in per-unit values.
    #[serde(default = "default_reactance")]
    pub reactance: f64,
    /// Number of phases, typically 1 or 3.
    #[serde(default = "default_phase_count")]
    pub phase_count: u32,
    /// High-side voltage in kilovolts.
    #[serde(default = "default_high_voltage")]
    pub high_voltage: f64,
    /// Low-side voltage in kilovolts.
    #[serde(default = "default_low_voltage")]
    pub low_voltage: f64,
    #[serde(default)]
    pub is_center_tap: bool,
    #[serde(default)]
    pub connection: WindingConnection,
}

fn default_resistance() -> f64 {
    0.1
}

fn default_reactance() -> f64 {
    0.1
}

fn default_phase_count() -> u32 {
    3
}

fn default_high_voltage() -> f64 {
    13.2
}

fn default_low_voltage() -> f64 {
    0.48
}

impl TransformerProperties {
    /// Create a record with library default electrical properties.
    pub fn new(identifier: impl Into<String>, kva: f64) -> Self {
        Self {
            tag: TransformerPropertiesTag::TransformerProperties,
            identifier: identifier.into(),
            display_name: None,
            kva,
            resistance: default_resistance(),
            reactance: default_reactance(),
            phase_count: default_phase_count(),
            high_voltage: default_high_voltage(),
            low_voltage: default_low_voltage(),
            is_center_tap: false,
            connection: WindingConnection::default(),
        }
    }

    /// Display name, falling back to the identifier.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.identifier)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        let id = &self.identifier;
        check_positive_finite(format!("transformer properties '{id}' kva"), self.kva)?;
        check_positive_finite(
            format!("transformer properties '{id}' resistance"),
            self.resistance,
        )?;
        check_positive_finite(
            format!("transformer properties '{id}' reactance"),
            self.reactance,
        )?;
        check_positive_finite(
            format!("transformer properties '{id}' high_voltage"),
            self.high_voltage,
        )?;
        check_positive_finite(
            format!("transformer properties '{id}' low_voltage"),
            self.low_voltage,
        )?;
        if self.phase_count == 0 {
            return Err(CatalogError::InvalidValue {
                field: format!("transformer properties '{id}' phase_count"),
                value: 0.0,
                reason: "must be positive and finite",
            });
        }
        Ok(())
    }
}

impl CatalogRecord for TransformerProperties {
    const KIND: &'static str = "transformer properties";

    fn identifier(&self) -> &str {
        &self.identifier
    }
}
