//! # Section Calculations
//!
//! Cross-section analysis of cross-laminated timber panels. The one-shot
//! entry point follows the pattern used across the crate:
//!
//! - [`CltSectionInput`] - Layup description (JSON-serializable)
//! - [`CltSectionResult`] - Properties, stresses and capacities (JSON-serializable)
//! - [`calculate`] - Pure function from input and forces to result
//!
//! The building blocks are public as well:
//!
//! - [`layer`] - Lamella orientation and layer records
//! - [`layer_stack`] - Validated stack with cached properties
//! - [`properties`] - Effective section properties
//! - [`static_moment`] - First-moment-of-area profile
//! - [`stresses`] - Normal, bending and shear stresses
//! - [`capacities`] - Characteristic capacities
//! - [`layup`] - Both principal directions of a panel

pub mod capacities;
pub mod layer;
pub mod layer_stack;
pub mod layup;
pub mod properties;
pub mod static_moment;
pub mod stresses;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::materials::LamellaMaterial;

// Re-export commonly used types
pub use capacities::Capacities;
pub use layer::{Layer, Orientation};
pub use layer_stack::LayerStack;
pub use layup::CltLayup;
pub use properties::{EffectiveProperties, LayerGeometry};
pub use static_moment::{LayerProfile, PointPosition, ProfilePoint, StaticMomentProfile};
pub use stresses::NormalStresses;

/// Input for a single CLT section analysis.
///
/// Lists run top to bottom and must have equal length.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Floor panel, X direction",
///   "thicknesses_mm": [40.0, 40.0, 40.0],
///   "orientations": [0, 90, 0],
///   "materials": [
///     { "name": "C24", "e0_mean": 11000.0, "ft0k": 14.5, "fc0k": 21.0, "fmk": 24.0, "fvk": 4.0, "frk": 1.1 },
///     { "name": "C24", "e0_mean": 11000.0, "ft0k": 14.5, "fc0k": 21.0, "fmk": 24.0, "fvk": 4.0, "frk": 1.1 },
///     { "name": "C24", "e0_mean": 11000.0, "ft0k": 14.5, "fc0k": 21.0, "fmk": 24.0, "fvk": 4.0, "frk": 1.1 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CltSectionInput {
    /// User label for this section (e.g., "CLT 120 L3s")
    #[serde(default)]
    pub label: String,

    /// Lamella thicknesses (mm)
    pub thicknesses_mm: Vec<f64>,

    /// Lamella orientations in degrees (0 = active, 90 = cross layer)
    pub orientations: Vec<i32>,

    /// Lamella materials
    pub materials: Vec<LamellaMaterial>,
}

impl CltSectionInput {
    /// Validate and build the layer stack
    pub fn to_stack(&self) -> CalcResult<LayerStack> {
        LayerStack::new(&self.thicknesses_mm, &self.orientations, &self.materials)
    }
}

/// Section forces per metre of panel width.
///
/// Positive normal force is tension, positive moment puts the bottom fibre
/// in tension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionForces {
    /// Normal force (kN/m)
    #[serde(default)]
    pub normal_kn: f64,

    /// Bending moment (kN·m/m)
    #[serde(default)]
    pub moment_knm: f64,

    /// Shear force (kN/m)
    #[serde(default)]
    pub shear_kn: f64,
}

/// Everything known about one section under one set of forces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CltSectionResult {
    pub label: String,

    /// Forces the stresses were computed for
    pub forces: SectionForces,

    // === Section ===
    pub properties: EffectiveProperties,
    pub layer_geometry: Vec<LayerGeometry>,
    pub static_moments: StaticMomentProfile,
    /// I / d at top, middle and bottom of each layer (mm³)
    pub net_section_moduli: Vec<[Option<f64>; 3]>,

    // === Stresses (N/mm²) ===
    pub normal_stresses: NormalStresses,
    /// `[layer][top, middle, bottom]`
    pub bending_stresses: Vec<[f64; 3]>,
    /// `[layer][profile point]`
    pub shear_stresses: Vec<Vec<f64>>,

    // === Capacities ===
    pub capacities: Capacities,
}

impl CltSectionResult {
    /// Largest absolute bending stress in the section (N/mm²)
    pub fn max_bending_stress(&self) -> f64 {
        self.bending_stresses
            .iter()
            .flatten()
            .fold(0.0, |acc: f64, s| acc.max(s.abs()))
    }

    /// Largest absolute shear stress in the section (N/mm²)
    pub fn max_shear_stress(&self) -> f64 {
        self.shear_stresses
            .iter()
            .flatten()
            .fold(0.0, |acc: f64, s| acc.max(s.abs()))
    }
}

/// Analyse one section under one set of forces.
///
/// # Example
///
/// ```rust
/// use clt_core::calculations::{calculate, CltSectionInput, SectionForces};
/// use clt_core::materials::LamellaMaterial;
///
/// let c24 = LamellaMaterial {
///     name: "C24".to_string(),
///     e0_mean: 11_000.0,
///     ft0k: 14.5,
///     fc0k: 21.0,
///     fmk: 24.0,
///     fvk: 4.0,
///     frk: 1.1,
/// };
///
/// let input = CltSectionInput {
///     label: "CLT 120 L3s".to_string(),
///     thicknesses_mm: vec![40.0, 40.0, 40.0],
///     orientations: vec![0, 90, 0],
///     materials: vec![c24; 3],
/// };
/// let forces = SectionForces { normal_kn: 0.0, moment_knm: 10.0, shear_kn: 20.0 };
///
/// let result = calculate(&input, &forces).expect("Calculation should succeed");
/// assert!((result.capacities.tension_kn - 1160.0).abs() < 1e-6);
/// assert!(result.max_bending_stress() < 24.0);
/// ```
pub fn calculate(input: &CltSectionInput, forces: &SectionForces) -> CalcResult<CltSectionResult> {
    let stack = input.to_stack()?;

    let result = CltSectionResult {
        label: input.label.clone(),
        forces: *forces,
        properties: stack.effective_properties().clone(),
        layer_geometry: stack.layer_geometry().to_vec(),
        static_moments: stack.static_moment_profile().clone(),
        net_section_moduli: stack.net_section_moduli(),
        normal_stresses: stack.normal_stress(forces.normal_kn),
        bending_stresses: stack.bending_stress(forces.moment_knm),
        shear_stresses: stack.shear_stress(forces.shear_kn),
        capacities: stack.capacities(),
    };

    log::debug!(
        "section '{}': max |σm| = {:.3} N/mm², max |τ| = {:.3} N/mm²",
        result.label,
        result.max_bending_stress(),
        result.max_shear_stress()
    );

    Ok(result)
}
