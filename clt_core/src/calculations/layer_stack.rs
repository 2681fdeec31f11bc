//! # Layer Stack
//!
//! A [`LayerStack`] is one cross-section of a CLT panel in one direction: the
//! ordered lamellae from top to bottom plus everything derived from them.
//! Construction validates the input and computes the effective properties and
//! the static-moment profile eagerly; afterwards the stack is immutable and
//! every query is infallible.
//!
//! ## Example
//!
//! ```rust
//! use clt_core::calculations::LayerStack;
//! use clt_core::materials::LamellaMaterial;
//!
//! let c24 = LamellaMaterial {
//!     name: "C24".to_string(),
//!     e0_mean: 11_000.0,
//!     ft0k: 14.5,
//!     fc0k: 21.0,
//!     fmk: 24.0,
//!     fvk: 4.0,
//!     frk: 1.1,
//! };
//!
//! let stack = LayerStack::new(
//!     &[40.0, 40.0, 40.0],
//!     &[0, 90, 0],
//!     &[c24.clone(), c24.clone(), c24],
//! ).unwrap();
//!
//! let props = stack.effective_properties();
//! assert!((props.center_of_gravity_mm - 60.0).abs() < 1e-9);
//! assert!((props.active_area_mm2 - 80_000.0).abs() < 1e-9);
//!
//! let sigma = stack.bending_stress(10.0);
//! assert!(sigma[2][2] > 0.0); // sagging: bottom fibre in tension
//! ```

use serde::Serialize;

use crate::calculations::capacities::{self, Capacities};
use crate::calculations::layer::{Layer, Orientation};
use crate::calculations::properties::{self, EffectiveProperties, LayerGeometry};
use crate::calculations::static_moment::{self, StaticMomentProfile};
use crate::calculations::stresses::{self, NormalStresses};
use crate::errors::{CalcError, CalcResult};
use crate::materials::LamellaMaterial;

/// Cross-section of a layered panel in the analysed direction.
///
/// Serializes for reporting; build it through [`LayerStack::new`] or
/// [`LayerStack::from_layers`] so the derived values are always consistent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerStack {
    layers: Vec<Layer>,
    properties: EffectiveProperties,
    geometry: Vec<LayerGeometry>,
    static_moments: StaticMomentProfile,
}

impl LayerStack {
    /// Build a stack from parallel lists, top layer first.
    ///
    /// # Arguments
    ///
    /// * `thicknesses` - Lamella thicknesses in mm, all positive
    /// * `orientations` - Lamella angles in degrees, 0 or 90
    /// * `materials` - Lamella material records
    ///
    /// # Errors
    ///
    /// * `CalcError::LengthMismatch` - the three lists differ in length
    /// * `CalcError::EmptyLayup` - no layers
    /// * `CalcError::InvalidInput` - bad thickness, orientation or material value
    /// * `CalcError::NoActiveLayers` - no 0° layer
    pub fn new(thicknesses: &[f64], orientations: &[i32], materials: &[LamellaMaterial]) -> CalcResult<Self> {
        let count = thicknesses.len();
        if orientations.len() != count {
            return Err(CalcError::length_mismatch("orientations", count, orientations.len()));
        }
        if materials.len() != count {
            return Err(CalcError::length_mismatch("materials", count, materials.len()));
        }

        let mut layers = Vec::with_capacity(count);
        for (i, ((&t, &deg), mat)) in thicknesses.iter().zip(orientations).zip(materials).enumerate() {
            let orientation = Orientation::from_degrees(deg).map_err(|_| {
                CalcError::invalid_input(
                    format!("orientations[{}]", i),
                    deg.to_string(),
                    "Lamella orientation must be 0 or 90 degrees",
                )
            })?;
            layers.push(Layer::validated(
                t,
                orientation,
                mat.clone(),
                &format!("thicknesses[{}]", i),
                &format!("materials[{}]", i),
            )?);
        }

        Self::from_layers(layers)
    }

    /// Build a stack from already validated layers, top layer first.
    pub fn from_layers(layers: Vec<Layer>) -> CalcResult<Self> {
        let (properties, geometry) = properties::compute(&layers)?;
        let (static_moments, _) = static_moment::compute(&layers, &properties, &geometry);

        Ok(Self {
            layers,
            properties,
            geometry,
            static_moments,
        })
    }

    /// Same lamellae seen from the orthogonal direction (every layer rotated 90°)
    pub fn rotated(&self) -> CalcResult<Self> {
        Self::from_layers(self.layers.iter().map(Layer::flipped).collect())
    }

    // === Data ===

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of lamellae
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always false for a constructed stack; provided for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Modulus of the top layer used to normalise stiffness (N/mm²)
    pub fn reference_modulus(&self) -> f64 {
        self.properties.reference_modulus
    }

    /// Total thickness (mm)
    pub fn thickness_mm(&self) -> f64 {
        self.properties.thickness_mm
    }

    /// True when every lamella uses the same material record
    pub fn is_homogeneous(&self) -> bool {
        match self.layers.split_first() {
            Some((first, rest)) => rest.iter().all(|l| l.material() == first.material()),
            None => true,
        }
    }

    // === Derived properties ===

    /// Centre of gravity, net area, inertia, fibre distances and torsional terms
    pub fn effective_properties(&self) -> &EffectiveProperties {
        &self.properties
    }

    /// Position and lever arm of every layer
    pub fn layer_geometry(&self) -> &[LayerGeometry] {
        &self.geometry
    }

    /// Per-layer first moments of area (mm³, stiffness-weighted)
    pub fn static_moment_profile(&self) -> &StaticMomentProfile {
        &self.static_moments
    }

    /// Net section moduli at top/mid/bottom of every layer (mm³)
    pub fn net_section_moduli(&self) -> Vec<[Option<f64>; 3]> {
        stresses::net_section_moduli(&self.layers, &self.properties, &self.geometry)
    }

    // === Stresses ===

    /// Axial stress per layer under a normal force in kN/m (tension positive)
    pub fn normal_stress(&self, normal_kn: f64) -> NormalStresses {
        stresses::normal_stresses(&self.layers, &self.properties, normal_kn)
    }

    /// Bending stress at top/mid/bottom of every layer under a moment in kN·m/m
    pub fn bending_stress(&self, moment_knm: f64) -> Vec<[f64; 3]> {
        stresses::bending_stresses(&self.layers, &self.properties, &self.geometry, moment_knm)
    }

    /// Shear stress at every profile point under a shear force in kN/m
    pub fn shear_stress(&self, shear_kn: f64) -> Vec<Vec<f64>> {
        stresses::shear_stresses(&self.properties, &self.static_moments, shear_kn)
    }

    // === Capacities ===

    /// Characteristic tension, compression, bending and shear capacities
    pub fn capacities(&self) -> Capacities {
        capacities::compute(&self.layers, &self.properties, &self.geometry, &self.static_moments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::tests::{c16, c24};

    fn symmetric() -> LayerStack {
        LayerStack::new(&[40.0, 40.0, 40.0], &[0, 90, 0], &[c24(), c24(), c24()]).unwrap()
    }

    #[test]
    fn test_construction() {
        let stack = symmetric();
        assert_eq!(stack.len(), 3);
        assert!(!stack.is_empty());
        assert_eq!(stack.thickness_mm(), 120.0);
        assert_eq!(stack.reference_modulus(), 11_000.0);
        assert!(stack.is_homogeneous());
        assert_eq!(stack.static_moment_profile().layers.len(), 3);
    }

    #[test]
    fn test_length_mismatch() {
        let err = LayerStack::new(&[40.0, 40.0], &[0, 90, 0], &[c24(), c24()]).unwrap_err();
        assert_eq!(err, CalcError::length_mismatch("orientations", 2, 3));

        let err = LayerStack::new(&[40.0, 40.0], &[0, 90], &[c24()]).unwrap_err();
        assert_eq!(err.error_code(), "LENGTH_MISMATCH");
    }

    #[test]
    fn test_indexed_field_in_errors() {
        let err = LayerStack::new(&[40.0, -5.0], &[0, 90], &[c24(), c24()]).unwrap_err();
        assert!(err.to_string().contains("thicknesses[1]"));

        let err = LayerStack::new(&[40.0, 40.0], &[0, 45], &[c24(), c24()]).unwrap_err();
        assert!(err.to_string().contains("orientations[1]"));

        let mut bad = c24();
        bad.e0_mean = -1.0;
        let err = LayerStack::new(&[40.0], &[0], &[bad]).unwrap_err();
        assert!(err.to_string().contains("materials[0].e0_mean"));
    }

    #[test]
    fn test_empty_and_inactive() {
        assert_eq!(LayerStack::new(&[], &[], &[]).unwrap_err(), CalcError::EmptyLayup);
        let err = LayerStack::new(&[40.0], &[90], &[c24()]).unwrap_err();
        assert_eq!(err.error_code(), "NO_ACTIVE_LAYERS");
    }

    #[test]
    fn test_heterogeneous() {
        let stack = LayerStack::new(&[40.0, 40.0, 40.0], &[0, 90, 0], &[c24(), c16(), c24()]).unwrap();
        assert!(!stack.is_homogeneous());
    }

    #[test]
    fn test_rotated_stack() {
        let y = symmetric().rotated().unwrap();
        // Only the middle lamella is active in the other direction
        let props = y.effective_properties();
        assert!((props.center_of_gravity_mm - 60.0).abs() < 1e-9);
        assert!((props.active_area_mm2 - 40_000.0).abs() < 1e-9);
        assert!((props.moment_of_inertia_mm4 - 1000.0 * 40.0_f64.powi(3) / 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_stack_serializes_for_reports() {
        let json = serde_json::to_string(&symmetric()).unwrap();
        assert!(json.contains("center_of_gravity_mm"));
        assert!(json.contains("static_moments"));
    }
}
