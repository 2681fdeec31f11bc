//! # CLT Layup
//!
//! A panel carries load in two directions. The X section is the layer stack
//! as given; the Y section is the same lamellae with every orientation
//! flipped, so the cross layers of X become the active layers of Y.

use serde::Serialize;

use crate::calculations::layer_stack::LayerStack;
use crate::errors::{CalcError, CalcResult};
use crate::materials::LamellaMaterial;

/// Both principal sections of one CLT panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CltLayup {
    pub name: String,
    pub description: String,
    section_x: LayerStack,
    section_y: LayerStack,
}

impl CltLayup {
    /// Build both sections from the X-direction description, top layer first.
    ///
    /// # Errors
    ///
    /// Everything [`LayerStack::new`] rejects, and
    /// `CalcError::NoActiveLayers` naming the direction ("X" or "Y") that has
    /// no active lamella.
    pub fn new(thicknesses: &[f64], orientations: &[i32], materials: &[LamellaMaterial]) -> CalcResult<Self> {
        let section_x = LayerStack::new(thicknesses, orientations, materials).map_err(|e| in_direction(e, "X"))?;
        let section_y = section_x.rotated().map_err(|e| in_direction(e, "Y"))?;

        log::debug!(
            "layup: {} layers, {:.1} mm, homogeneous = {}",
            section_x.len(),
            section_x.thickness_mm(),
            section_x.is_homogeneous()
        );

        Ok(Self {
            name: String::new(),
            description: String::new(),
            section_x,
            section_y,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Section spanning in the direction of the outer lamellae
    pub fn section_x(&self) -> &LayerStack {
        &self.section_x
    }

    /// Section spanning across the outer lamellae
    pub fn section_y(&self) -> &LayerStack {
        &self.section_y
    }

    pub fn thickness_mm(&self) -> f64 {
        self.section_x.thickness_mm()
    }
}

fn in_direction(err: CalcError, direction: &str) -> CalcError {
    match err {
        CalcError::NoActiveLayers { .. } => CalcError::no_active_layers(direction),
        other => other,
    }
}
