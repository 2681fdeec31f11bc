//! # Lamellae
//!
//! A [`Layer`] is one rectangular ply of the panel: a thickness, an
//! orientation relative to the analysed axis, and a material record.
//! Layers are immutable once built.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::LamellaMaterial;

/// Grain direction of a lamella relative to the analysed axis.
///
/// Serializes as the angle in degrees (`0` or `90`), which is how layups are
/// written on producer data sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Orientation {
    /// 0° - carries axial and bending load in the analysed direction
    Parallel,
    /// 90° - spacer in the analysed direction, transmits rolling shear
    Perpendicular,
}

impl Orientation {
    /// Parse an angle in degrees. Only 0 and 90 are supported.
    pub fn from_degrees(degrees: i32) -> CalcResult<Self> {
        match degrees {
            0 => Ok(Orientation::Parallel),
            90 => Ok(Orientation::Perpendicular),
            other => Err(CalcError::invalid_input(
                "orientation",
                other.to_string(),
                "Lamella orientation must be 0 or 90 degrees",
            )),
        }
    }

    pub fn degrees(&self) -> i32 {
        match self {
            Orientation::Parallel => 0,
            Orientation::Perpendicular => 90,
        }
    }

    /// The same lamella seen from the orthogonal panel direction
    pub fn flipped(&self) -> Self {
        match self {
            Orientation::Parallel => Orientation::Perpendicular,
            Orientation::Perpendicular => Orientation::Parallel,
        }
    }

    pub fn is_parallel(&self) -> bool {
        matches!(self, Orientation::Parallel)
    }
}

impl TryFrom<i32> for Orientation {
    type Error = CalcError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        Orientation::from_degrees(degrees)
    }
}

impl From<Orientation> for i32 {
    fn from(orientation: Orientation) -> Self {
        orientation.degrees()
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&format!("{}°", self.degrees()))
    }
}

/// One lamella of the cross-section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Lamella thickness (mm)
    thickness_mm: f64,
    orientation: Orientation,
    material: LamellaMaterial,
}

impl Layer {
    /// Build a validated layer.
    ///
    /// Fails when the thickness is not a positive finite number or the
    /// material values are unusable.
    pub fn new(thickness_mm: f64, orientation: Orientation, material: LamellaMaterial) -> CalcResult<Self> {
        Self::validated(thickness_mm, orientation, material, "thickness_mm", "material")
    }

    /// Same as [`Layer::new`], reporting failures under the given field names
    /// (e.g. `thicknesses[2]` when the layer comes from an input list).
    pub(crate) fn validated(
        thickness_mm: f64,
        orientation: Orientation,
        material: LamellaMaterial,
        thickness_field: &str,
        material_field: &str,
    ) -> CalcResult<Self> {
        if !thickness_mm.is_finite() || thickness_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                thickness_field,
                thickness_mm.to_string(),
                "Lamella thickness must be positive",
            ));
        }
        material.validate(material_field)?;

        Ok(Self {
            thickness_mm,
            orientation,
            material,
        })
    }

    /// Lamella thickness (mm)
    pub fn thickness_mm(&self) -> f64 {
        self.thickness_mm
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn material(&self) -> &LamellaMaterial {
        &self.material
    }

    /// Whether the layer carries stiffness in the analysed direction
    pub fn is_active(&self) -> bool {
        self.orientation.is_parallel()
    }

    /// Same lamella rotated by 90°
    pub fn flipped(&self) -> Self {
        Self {
            orientation: self.orientation.flipped(),
            ..self.clone()
        }
    }

    /// Copy of this layer cut down to `thickness_mm`.
    ///
    /// Only used to build the partial stacks of the static-moment profile,
    /// where the cut is always a positive fraction of an existing layer.
    pub(crate) fn truncated(&self, thickness_mm: f64) -> Self {
        Self {
            thickness_mm,
            ..self.clone()
        }
    }
}
