//! Thermal-loop physical constants: soil, pipe and borehole records.
//!
//! These are loop-level singletons rather than identifier-keyed catalog
//! entries: one record of each kind applies to every ground heat
//! exchanger in a loop.

use serde::{Deserialize, Serialize};

use crate::error::{check_positive_finite, CatalogError, CatalogResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SoilParameterTag {
    SoilParameter,
}

/// Soil properties of the bore field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilParameter {
    #[serde(rename = "type")]
    pub tag: SoilParameterTag,
    /// Conductivity in W/m2-K.
    #[serde(default = "default_soil_conductivity")]
    pub conductivity: f64,
    /// Volumetric heat capacity in J/m3-K.
    #[serde(default = "default_soil_heat_capacity")]
    pub heat_capacity: f64,
    /// Undisturbed ground temperature in Celsius; absent means the
    /// sizing engine derives it from climate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undisturbed_temperature: Option<f64>,
}

fn default_soil_conductivity() -> f64 {
    2.3
}

fn default_soil_heat_capacity() -> f64 {
    2_343_500.0
}

impl Default for SoilParameter {
    fn default() -> Self {
        Self {
            tag: SoilParameterTag::SoilParameter,
            conductivity: default_soil_conductivity(),
            heat_capacity: default_soil_heat_capacity(),
            undisturbed_temperature: None,
        }
    }
}

impl SoilParameter {
    pub fn validate(&self) -> CatalogResult<()> {
        check_positive_finite("soil conductivity", self.conductivity)?;
        check_positive_finite("soil heat_capacity", self.heat_capacity)?;
        if let Some(temperature) = self.undisturbed_temperature {
            if !temperature.is_finite() {
                return Err(CatalogError::InvalidValue {
                    field: "soil undisturbed_temperature".to_string(),
                    value: temperature,
                    reason: "must be finite",
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PipeParameterTag {
    PipeParameter,
}

/// U-tube pipe properties within the boreholes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipeParameter {
    #[serde(rename = "type")]
    pub tag: PipeParameterTag,
    /// Inner diameter in meters.
    #[serde(default = "default_pipe_inner_diameter")]
    pub inner_diameter: f64,
    /// Outer diameter in meters.
    #[serde(default = "default_pipe_outer_diameter")]
    pub outer_diameter: f64,
    /// Spacing between the outer pipes in meters.
    #[serde(default = "default_pipe_shank_spacing")]
    pub shank_spacing: f64,
    /// Dimension of the surface roughness bumps in meters.
    #[serde(default = "default_pipe_roughness")]
    pub roughness: f64,
    /// Conductivity in W/m2-K.
    #[serde(default = "default_pipe_conductivity")]
    pub conductivity: f64,
    /// Volumetric heat capacity in J/m3-K.
    #[serde(default = "default_pipe_heat_capacity")]
    pub heat_capacity: f64,
}

fn default_pipe_inner_diameter() -> f64 {
    0.0216
}

fn default_pipe_outer_diameter() -> f64 {
    0.0266
}

fn default_pipe_shank_spacing() -> f64 {
    0.0323
}

fn default_pipe_roughness() -> f64 {
    1e-6
}

fn default_pipe_conductivity() -> f64 {
    0.4
}

fn default_pipe_heat_capacity() -> f64 {
    1_542_000.0
}

impl Default for PipeParameter {
    fn default() -> Self {
        Self {
            tag: PipeParameterTag::PipeParameter,
            inner_diameter: default_pipe_inner_diameter(),
            outer_diameter: default_pipe_outer_diameter(),
            shank_spacing: default_pipe_shank_spacing(),
            roughness: default_pipe_roughness(),
            conductivity: default_pipe_conductivity(),
            heat_capacity: default_pipe_heat_capacity(),
        }
    }
}

impl PipeParameter {
    pub fn validate(&self) -> CatalogResult<()> {
        check_positive_finite("pipe inner_diameter", self.inner_diameter)?;
        check_positive_finite("pipe outer_diameter", self.outer_diameter)?;
        check_positive_finite("pipe shank_spacing", self.shank_spacing)?;
        check_positive_finite("pipe roughness", self.roughness)?;
        check_positive_finite("pipe conductivity", self.conductivity)?;
        check_positive_finite("pipe heat_capacity", self.heat_capacity)?;
        if self.outer_diameter <= self.inner_diameter {
            return Err(CatalogError::InvalidValue {
                field: "pipe outer_diameter".to_string(),
                value: self.outer_diameter,
                reason: "must exceed inner_diameter",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BoreholeParameterTag {
    BoreholeParameter,
}

/// Borehole geometry constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoreholeParameter {
    #[serde(rename = "type")]
    pub tag: BoreholeParameterTag,
    /// Borehole length in meters.
    #[serde(default = "default_borehole_length")]
    pub length: f64,
    /// Depth below grade of the borehole top in meters.
    #[serde(default = "default_borehole_buried_depth")]
    pub buried_depth: f64,
    /// Borehole diameter in meters.
    #[serde(default = "default_borehole_diameter")]
    pub diameter: f64,
}

fn default_borehole_length() -> f64 {
    96.0
}

fn default_borehole_buried_depth() -> f64 {
    2.0
}

fn default_borehole_diameter() -> f64 {
    0.15
}

impl Default for BoreholeParameter {
    fn default() -> Self {
        Self {
            tag: BoreholeParameterTag::BoreholeParameter,
            length: default_borehole_length(),
            buried_depth: default_borehole_buried_depth(),
            diameter: default_borehole_diameter(),
        }
    }
}

impl BoreholeParameter {
    pub fn validate(&self) -> CatalogResult<()> {
        check_positive_finite("borehole length", self.length)?;
        check_positive_finite("borehole buried_depth", self.buried_depth)?;
        check_positive_finite("borehole diameter", self.diameter)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_values() {
        let soil = SoilParameter::default();
        assert_eq!(soil.conductivity, 2.3);
        assert_eq!(soil.heat_capacity, 2_343_500.0);
        assert!(soil.undisturbed_temperature.is_none());

        let pipe = PipeParameter::default();
        assert_eq!(pipe.inner_diameter, 0.0216);
        assert_eq!(pipe.outer_diameter, 0.0266);
        assert_eq!(pipe.conductivity, 0.4);

        let borehole = BoreholeParameter::default();
        assert_eq!(borehole.length, 96.0);
        assert_eq!(borehole.buried_depth, 2.0);
        assert_eq!(borehole.diameter, 0.15);

        assert!(soil.validate().is_ok());
        assert!(pipe.validate().is_ok());
        assert!(borehole.validate().is_ok());
    }

    #[test]
    fn empty_records_deserialize_to_defaults() {
        let soil: SoilParameter =
            serde_json::from_str(r#"{"type": "SoilParameter"}"#).unwrap();
        assert_eq!(soil, SoilParameter::default());

        let pipe: PipeParameter =
            serde_json::from_str(r#"{"type": "PipeParameter"}"#).unwrap();
        assert_eq!(pipe, PipeParameter::default());
    }

    #[test]
    fn autocalculated_soil_temperature_is_omitted() {
        let soil = SoilParameter::default();
        let json = serde_json::to_string(&soil).unwrap();
        assert!(!json.contains("undisturbed_temperature"));

        let explicit = SoilParameter {
            undisturbed_temperature: Some(18.0),
            ..SoilParameter::default()
        };
        let json = serde_json::to_string(&explicit).unwrap();
        assert!(json.contains(r#""undisturbed_temperature":18.0"#));
    }

    #[test]
    fn pipe_outer_must_exceed_inner() {
        let pipe = PipeParameter {
            outer_diameter: 0.01,
            ..PipeParameter::default()
        };
        let err = pipe.validate().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { .. }));
    }
}
