//! # Effective Section Properties
//!
//! Stiffness-weighted composite-section properties of a layer stack for the
//! analysed direction. Only 0° layers carry stiffness; every stiffness is
//! normalised by the modulus of the top layer (`E_ref`), so areas and
//! inertias are "equivalent E_ref material" quantities for a 1 m strip.
//!
//! ## Formulas
//!
//! ```text
//! o_i   = depth of the mid-thickness of layer i below the top fibre
//! n_i   = E_i / E_ref                       (0° layers only)
//! CoG   = Σ n_i·t_i·o_i / Σ n_i·t_i
//! d_i   = o_i − CoG                         (every layer)
//! A     = Σ n_i·b·t_i
//! I     = Σ n_i·b·t_i³/12 + n_i·b·t_i·d_i²
//! AEeff = Σ E_i·t_i
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::layer::Layer;
use crate::equations::section::{
    parallel_axis_term, radius_of_gyration, rectangular_area, rectangular_moment_of_inertia,
    rectangular_torsion_constant, rectangular_torsion_modulus,
};
use crate::errors::{CalcError, CalcResult};
use crate::units::STRIP_WIDTH_MM;

/// Section properties of a layer stack in the analysed direction.
///
/// ## JSON Example (3 × 40 mm, 0/90/0, uniform material)
///
/// ```json
/// {
///   "reference_modulus": 11000.0,
///   "thickness_mm": 120.0,
///   "center_of_gravity_mm": 60.0,
///   "z_top_mm": 60.0,
///   "z_bottom_mm": 60.0,
///   "active_area_mm2": 80000.0,
///   "moment_of_inertia_mm4": 138666666.7,
///   "ae_eff": 880000.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveProperties {
    /// Modulus of the top layer all stiffness ratios refer to (N/mm²)
    pub reference_modulus: f64,

    /// Total panel thickness (mm)
    pub thickness_mm: f64,

    /// Centre of gravity, measured from the top fibre (mm)
    pub center_of_gravity_mm: f64,

    /// Distance from the centre of gravity to the top fibre (mm)
    pub z_top_mm: f64,

    /// Distance from the centre of gravity to the bottom fibre (mm)
    pub z_bottom_mm: f64,

    /// Stiffness-weighted net area of the active layers (mm²)
    pub active_area_mm2: f64,

    /// Stiffness-weighted moment of inertia about the centre of gravity (mm⁴)
    pub moment_of_inertia_mm4: f64,

    /// Σ E_i·t_i over active layers (N/mm per mm of width)
    ///
    /// Axial force is shared between active layers in proportion to E_i / AEeff.
    pub ae_eff: f64,

    /// Net section modulus at the top fibre, I / z_top (mm³)
    pub section_modulus_top_mm3: f64,

    /// Net section modulus at the bottom fibre, I / z_bottom (mm³)
    pub section_modulus_bottom_mm3: f64,

    /// Radius of inertia √(I / A) (mm)
    pub radius_of_inertia_mm: f64,

    /// Bending stiffness E_ref·I of the strip (N·mm²)
    pub bending_stiffness_nmm2: f64,

    /// Axial stiffness of the strip, AEeff × strip width (N)
    pub axial_stiffness_n: f64,

    /// Saint-Venant torsion constant of the gross strip (mm⁴)
    pub torsional_constant_mm4: f64,

    /// Torsional section modulus of the gross strip (mm³)
    pub torsional_modulus_mm3: f64,
}

/// Position of one layer relative to the top fibre and the centre of gravity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerGeometry {
    /// Depth of the layer's top face (mm)
    pub top_mm: f64,
    /// Depth of the layer's mid-thickness, o_i (mm)
    pub center_mm: f64,
    /// Depth of the layer's bottom face (mm)
    pub bottom_mm: f64,
    /// Lever arm of the mid-thickness to the centre of gravity, d_i = o_i − CoG (mm)
    pub lever_arm_mm: f64,
}

impl LayerGeometry {
    /// Lever arms of the top, middle and bottom of the layer (mm)
    pub fn point_lever_arms(&self, thickness_mm: f64) -> [f64; 3] {
        [
            self.lever_arm_mm - thickness_mm / 2.0,
            self.lever_arm_mm,
            self.lever_arm_mm + thickness_mm / 2.0,
        ]
    }
}

/// Stiffness-weighted centroid of the active part of a stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Centroid {
    /// Depth below the top fibre (mm)
    pub depth_mm: f64,
    /// Stiffness-weighted active area of the strip (mm²)
    pub active_area_mm2: f64,
}

/// Ratio E_i / E_ref
#[inline]
pub(crate) fn stiffness_ratio(layer: &Layer, reference_modulus: f64) -> f64 {
    layer.material().e0_mean / reference_modulus
}

/// Centroid of the 0° layers of `layers`, or `None` when none is active.
pub(crate) fn stiffness_centroid(layers: &[Layer], reference_modulus: f64) -> Option<Centroid> {
    let mut offset = 0.0;
    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for layer in layers {
        let t = layer.thickness_mm();
        if layer.is_active() {
            let n = stiffness_ratio(layer, reference_modulus);
            numerator += n * t * (offset + t / 2.0);
            denominator += n * t;
        }
        offset += t;
    }

    if denominator <= 0.0 {
        return None;
    }

    Some(Centroid {
        depth_mm: numerator / denominator,
        active_area_mm2: denominator * STRIP_WIDTH_MM,
    })
}

/// Centroid of a transient partial stack: every layer above `index` plus the
/// top `fraction` of layer `index`, orientations unchanged.
///
/// The partial stack lives only for this call. Returns `None` when the cut
/// contains no active material.
pub(crate) fn sub_stack_centroid(
    layers: &[Layer],
    index: usize,
    fraction: f64,
    reference_modulus: f64,
) -> Option<Centroid> {
    let cut = &layers[index];
    let mut partial: Vec<Layer> = layers[..index].to_vec();
    partial.push(cut.truncated(cut.thickness_mm() * fraction));

    log::trace!(
        "sub-stack: {} full layers + {:.3} of layer {}",
        index,
        fraction,
        index
    );

    stiffness_centroid(&partial, reference_modulus)
}

/// Compute the effective properties and per-layer geometry of a stack.
///
/// # Errors
///
/// * `CalcError::EmptyLayup` - no layers
/// * `CalcError::NoActiveLayers` - no 0° layer, the centroid is undefined
pub fn compute(layers: &[Layer]) -> CalcResult<(EffectiveProperties, Vec<LayerGeometry>)> {
    let first = layers.first().ok_or(CalcError::EmptyLayup)?;
    let reference_modulus = first.material().e0_mean;

    let centroid = stiffness_centroid(layers, reference_modulus)
        .ok_or_else(|| CalcError::no_active_layers("analysed"))?;
    let cog = centroid.depth_mm;

    // Per-layer geometry and lever arms
    let mut geometry = Vec::with_capacity(layers.len());
    let mut offset = 0.0;
    for layer in layers {
        let t = layer.thickness_mm();
        let center = offset + t / 2.0;
        geometry.push(LayerGeometry {
            top_mm: offset,
            center_mm: center,
            bottom_mm: offset + t,
            lever_arm_mm: center - cog,
        });
        offset += t;
    }
    let thickness_mm = offset;

    let (first_geo, last_geo) = match (geometry.first(), geometry.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Err(CalcError::EmptyLayup),
    };
    let last = &layers[layers.len() - 1];
    let z_top_mm = first_geo.lever_arm_mm.abs() + first.thickness_mm() / 2.0;
    let z_bottom_mm = last_geo.lever_arm_mm.abs() + last.thickness_mm() / 2.0;

    // Net area, inertia (Steiner) and AEeff over active layers
    let mut active_area_mm2 = 0.0;
    let mut moment_of_inertia_mm4 = 0.0;
    let mut ae_eff = 0.0;
    for (layer, geo) in layers.iter().zip(&geometry) {
        if !layer.is_active() {
            continue;
        }
        let n = stiffness_ratio(layer, reference_modulus);
        let t = layer.thickness_mm();
        let area = rectangular_area(STRIP_WIDTH_MM, t);

        active_area_mm2 += n * area;
        moment_of_inertia_mm4 += n * rectangular_moment_of_inertia(STRIP_WIDTH_MM, t);
        moment_of_inertia_mm4 += n * parallel_axis_term(area, geo.lever_arm_mm);
        ae_eff += layer.material().e0_mean * t;
    }

    let props = EffectiveProperties {
        reference_modulus,
        thickness_mm,
        center_of_gravity_mm: cog,
        z_top_mm,
        z_bottom_mm,
        active_area_mm2,
        moment_of_inertia_mm4,
        ae_eff,
        section_modulus_top_mm3: moment_of_inertia_mm4 / z_top_mm,
        section_modulus_bottom_mm3: moment_of_inertia_mm4 / z_bottom_mm,
        radius_of_inertia_mm: radius_of_gyration(moment_of_inertia_mm4, active_area_mm2),
        bending_stiffness_nmm2: reference_modulus * moment_of_inertia_mm4,
        axial_stiffness_n: ae_eff * STRIP_WIDTH_MM,
        torsional_constant_mm4: rectangular_torsion_constant(STRIP_WIDTH_MM, thickness_mm),
        torsional_modulus_mm3: rectangular_torsion_modulus(STRIP_WIDTH_MM, thickness_mm),
    };

    log::debug!(
        "section properties: {} layers, CoG = {:.2} mm, A = {:.0} mm², I = {:.0} mm⁴",
        layers.len(),
        props.center_of_gravity_mm,
        props.active_area_mm2,
        props.moment_of_inertia_mm4
    );

    Ok((props, geometry))
}
