//! # Layer Stresses
//!
//! Stress fields of a layer stack under section forces acting on the 1 m
//! strip. All functions are stateless: they read the precomputed properties
//! and return fresh arrays, so repeated calls with different forces never
//! influence each other.
//!
//! ## Formulas
//!
//! ```text
//! σ_N,i  = N · E_i / AEeff                 (0° layers, N per mm of width)
//! σ_M,ip = (E_i/E_ref) · M / W_net,ip      W_net,ip = I / d_ip
//! τ_jp   = V · Q_jp / (I · b)
//! ```
//!
//! Units: N in kN/m, M in kN·m/m, V in kN/m; stresses in N/mm².

use serde::{Deserialize, Serialize};

use crate::calculations::layer::Layer;
use crate::calculations::properties::{stiffness_ratio, EffectiveProperties, LayerGeometry};
use crate::calculations::static_moment::StaticMomentProfile;
use crate::units::{KiloNewtonMeters, KiloNewtons, NewtonMillimeters, Newtons, STRIP_WIDTH_MM};

/// Points on the neutral axis closer than this have no finite section modulus (mm)
const NEUTRAL_AXIS_TOLERANCE_MM: f64 = 1e-9;

/// Axial stresses per layer, split by sign (N/mm²)
///
/// Exactly one of the two entries of a layer is non-zero for a non-zero
/// force; 90° layers report zero in both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalStresses {
    /// Tension stress per layer (positive)
    pub tension: Vec<f64>,
    /// Compression stress per layer (negative)
    pub compression: Vec<f64>,
}

/// Net section modulus I / |d| at the top, middle and bottom of every layer.
///
/// 90° layers and points lying on the neutral axis report `None`.
/// The sign of the entry follows the lever arm (negative above the CoG).
pub fn net_section_moduli(
    layers: &[Layer],
    props: &EffectiveProperties,
    geometry: &[LayerGeometry],
) -> Vec<[Option<f64>; 3]> {
    layers
        .iter()
        .zip(geometry)
        .map(|(layer, geo)| {
            if !layer.is_active() {
                return [None; 3];
            }
            geo.point_lever_arms(layer.thickness_mm()).map(|d| {
                if d.abs() < NEUTRAL_AXIS_TOLERANCE_MM {
                    None
                } else {
                    Some(props.moment_of_inertia_mm4 / d)
                }
            })
        })
        .collect()
}

/// Axial stress in every layer under a normal force (kN per metre of panel).
///
/// Positive force is tension.
pub fn normal_stresses(layers: &[Layer], props: &EffectiveProperties, normal_kn: f64) -> NormalStresses {
    let force_n: Newtons = KiloNewtons(normal_kn).into();
    let force_per_mm = force_n.value() / STRIP_WIDTH_MM;

    let mut tension = Vec::with_capacity(layers.len());
    let mut compression = Vec::with_capacity(layers.len());

    for layer in layers {
        if !layer.is_active() {
            tension.push(0.0);
            compression.push(0.0);
            continue;
        }

        let sigma = force_per_mm * layer.material().e0_mean / props.ae_eff;
        if normal_kn > 0.0 {
            tension.push(sigma);
            compression.push(0.0);
        } else {
            tension.push(0.0);
            compression.push(sigma);
        }
    }

    NormalStresses { tension, compression }
}

/// Bending stress at the top, middle and bottom of every layer under a
/// moment (kN·m per metre of panel). Positive moment puts the bottom fibre in
/// tension; 90° layers report zeros.
pub fn bending_stresses(
    layers: &[Layer],
    props: &EffectiveProperties,
    geometry: &[LayerGeometry],
    moment_knm: f64,
) -> Vec<[f64; 3]> {
    let moment: NewtonMillimeters = KiloNewtonMeters(moment_knm).into();

    layers
        .iter()
        .zip(geometry)
        .map(|(layer, geo)| {
            if !layer.is_active() {
                return [0.0; 3];
            }
            let n = stiffness_ratio(layer, props.reference_modulus);
            // σ = n·M / (I/d), written without the division by W so points on
            // the neutral axis give exactly zero
            geo.point_lever_arms(layer.thickness_mm())
                .map(|d| n * moment.value() * d / props.moment_of_inertia_mm4)
        })
        .collect()
}

/// Shear stress at every point of the static-moment profile under a shear
/// force (kN per metre of panel). The result mirrors the profile layout,
/// `[layer][point]`.
pub fn shear_stresses(props: &EffectiveProperties, profile: &StaticMomentProfile, shear_kn: f64) -> Vec<Vec<f64>> {
    let shear: Newtons = KiloNewtons(shear_kn).into();
    let denominator = props.moment_of_inertia_mm4 * STRIP_WIDTH_MM;

    profile
        .layers
        .iter()
        .map(|layer| {
            layer
                .points
                .iter()
                .map(|p| shear.value() * p.static_moment_mm3 / denominator)
                .collect()
        })
        .collect()
}
