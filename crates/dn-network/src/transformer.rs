//! Distribution transformers.

use std::sync::Arc;

use dn_catalog::TransformerProperties;
use dn_core::Real;
use dn_geometry::{Point2D, Polygon2D, Vector2D};

/// A transformer with a footprint polygon and a reference to its shared
/// property record. Sits between the substation and the buildings it
/// serves: one primary-side feeder in, any number of secondary
/// connectors out.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformer {
    pub identifier: String,
    pub display_name: Option<String>,
    pub geometry: Polygon2D,
    pub properties: Arc<TransformerProperties>,
}

impl Transformer {
    pub fn new(
        identifier: impl Into<String>,
        geometry: Polygon2D,
        properties: Arc<TransformerProperties>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: None,
            geometry,
            properties,
        }
    }

    /// Display name, falling back to the identifier.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.identifier)
    }

    /// Phase count inherited from the property record.
    pub fn phase_count(&self) -> u32 {
        self.properties.phase_count
    }

    pub fn translate(&mut self, vector: Vector2D) {
        self.geometry = self.geometry.translate(vector);
    }

    pub fn rotate(&mut self, angle: Real, origin: &Point2D) {
        self.geometry = self.geometry.rotate(angle, origin);
    }

    pub fn scale(&mut self, factor: Real, origin: &Point2D) {
        self.geometry = self.geometry.scale(factor, origin);
    }

    pub fn reflect(&mut self, origin: &Point2D, axis: Vector2D) {
        self.geometry = self.geometry.reflect(origin, axis);
    }
}
