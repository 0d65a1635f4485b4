//! Power-line templates: the cross-sectional arrangement of an
//! electrical connector.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogRecord;
use crate::error::{check_finite, CatalogError, CatalogResult};

/// Phase designation of a single conductor position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    A,
    B,
    C,
    /// Neutral
    N,
    /// Secondary leg 1
    S1,
    /// Secondary leg 2
    S2,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PowerLineTag {
    PowerLineAbridged,
}

/// A template describing the conductors of a power line.
///
/// The four arrays are parallel: entry `i` of `wires`, `heights`,
/// `relative_xs` and `phases` together describe one conductor position.
/// Wires are referenced by identifier into the network's wire catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PowerLine {
    #[serde(rename = "type")]
    pub tag: PowerLineTag,
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Wire identifiers, one per conductor.
    pub wires: Vec<String>,
    /// Heights above ground in meters (negative for buried conductors).
    pub heights: Vec<f64>,
    /// Horizontal offsets from the line geometry in meters.
    pub relative_xs: Vec<f64>,
    /// Phase of each conductor.
    pub phases: Vec<Phase>,
    /// Explicit phase count; inferred from the phases when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase_count: Option<u32>,
    /// Nominal voltage in kilovolts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nominal_voltage: Option<f64>,
}

impl PowerLine {
    /// Create a template, enforcing the parallel-array invariant.
    pub fn new(
        identifier: impl Into<String>,
        wires: Vec<String>,
        heights: Vec<f64>,
        relative_xs: Vec<f64>,
        phases: Vec<Phase>,
    ) -> CatalogResult<Self> {
        let line = Self {
            tag: PowerLineTag::PowerLineAbridged,
            identifier: identifier.into(),
            display_name: None,
            wires,
            heights,
            relative_xs,
            phases,
            phase_count: None,
            nominal_voltage: None,
        };
        line.validate()?;
        Ok(line)
    }

    /// Display name, falling back to the identifier.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.identifier)
    }

    /// Number of conductor positions in the template.
    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    /// Phase count: the explicit override when set, otherwise the number
    /// of A/B/C conductors (minimum 1).
    pub fn phase_count(&self) -> u32 {
        if let Some(count) = self.phase_count {
            return count;
        }
        let abc = self
            .phases
            .iter()
            .filter(|p| matches!(p, Phase::A | Phase::B | Phase::C))
            .count() as u32;
        abc.max(1)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        if self.wires.is_empty() {
            return Err(CatalogError::StructuralInvariant {
                identifier: self.identifier.clone(),
                what: "power line must possess at least one wire".to_string(),
            });
        }
        let n = self.wires.len();
        for (name, len) in [
            ("heights", self.heights.len()),
            ("relative_xs", self.relative_xs.len()),
            ("phases", self.phases.len()),
        ] {
            if len != n {
                return Err(CatalogError::StructuralInvariant {
                    identifier: self.identifier.clone(),
                    what: format!("{name} has {len} entries for {n} wires"),
                });
            }
        }
        let id = &self.identifier;
        for height in &self.heights {
            check_finite(format!("power line '{id}' height"), *height)?;
        }
        for x in &self.relative_xs {
            check_finite(format!("power line '{id}' relative_x"), *x)?;
        }
        if let Some(voltage) = self.nominal_voltage {
            if !voltage.is_finite() || voltage <= 0.0 {
                return Err(CatalogError::InvalidValue {
                    field: format!("power line '{id}' nominal_voltage"),
                    value: voltage,
                    reason: "must be positive and finite",
                });
            }
        }
        Ok(())
    }
}

impl CatalogRecord for PowerLine {
    const KIND: &'static str = "power line";

    fn identifier(&self) -> &str {
        &self.identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_phase() -> PowerLine {
        PowerLine::new(
            "3P_OH_AL_477kcmil",
            vec!["w".into(), "w".into(), "w".into(), "wn".into()],
            vec![16.0, 16.0, 16.0, 14.0],
            vec![0.0, 0.3, 0.6, 0.3],
            vec![Phase::A, Phase::B, Phase::C, Phase::N],
        )
        .unwrap()
    }

    #[test]
    fn parallel_arrays_must_align() {
        let err = PowerLine::new(
            "bad",
            vec!["w".into(), "w".into()],
            vec![16.0],
            vec![0.0, 0.3],
            vec![Phase::A, Phase::B],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::StructuralInvariant { .. }));
    }

    #[test]
    fn empty_template_rejected() {
        let err = PowerLine::new("empty", vec![], vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::StructuralInvariant { .. }));
    }

    #[test]
    fn phase_count_inferred_from_abc() {
        let line = three_phase();
        assert_eq!(line.phase_count(), 3);
    }

    #[test]
    fn phase_count_of_neutral_only_is_one() {
        let line = PowerLine::new(
            "service",
            vec!["w".into(), "wn".into()],
            vec![10.0, 10.0],
            vec![0.0, 0.2],
            vec![Phase::S1, Phase::N],
        )
        .unwrap();
        assert_eq!(line.phase_count(), 1);
    }

    #[test]
    fn explicit_phase_count_wins() {
        let mut line = three_phase();
        line.phase_count = Some(1);
        assert_eq!(line.phase_count(), 1);
    }

    #[test]
    fn negative_heights_are_legal() {
        // Buried conductors sit below grade
        let line = PowerLine::new(
            "UG",
            vec!["w".into()],
            vec![-1.2],
            vec![0.0],
            vec![Phase::A],
        );
        assert!(line.is_ok());
    }

    #[test]
    fn serde_round_trip_keeps_tag() {
        let line = three_phase();
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains(r#""type":"PowerLineAbridged""#));
        let back: PowerLine = serde_json::from_str(&json).unwrap();
        assert_eq!(line, back);
    }
}
