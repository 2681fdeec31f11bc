//! # Characteristic Capacities
//!
//! Weakest-link capacities of the 1 m strip: every active layer (and every
//! stress point within it) proposes the section force at which it reaches its
//! characteristic strength, and the smallest proposal governs.
//!
//! ```text
//! N_t,k = min_i ft,0,k,i · AEeff / E_i                    (kN/m)
//! N_c,k = min_i fc,0,k,i · AEeff / E_i                    (kN/m)
//! M_k   = min_ip |E_ref/E_i · fm,k,i · W_net,ip|          (kN·m/m)
//! V_k   = min_jp f_jp · I · b / Q_jp                      (kN/m)
//!         f = fv,k for 0° layers, fr,k (rolling shear) for 90° layers
//! ```
//!
//! Points with no finite proposal (on the neutral axis for bending, Q = 0
//! for shear) are skipped.

use serde::{Deserialize, Serialize};

use crate::calculations::layer::Layer;
use crate::calculations::properties::{stiffness_ratio, EffectiveProperties, LayerGeometry};
use crate::calculations::static_moment::StaticMomentProfile;
use crate::calculations::stresses::net_section_moduli;
use crate::units::{KiloNewtonMeters, KiloNewtons, NewtonMillimeters, Newtons, STRIP_WIDTH_MM};

/// Static moments below this fraction of the section's peak Q are treated as zero
const STATIC_MOMENT_RELATIVE_TOLERANCE: f64 = 1e-9;

/// Characteristic section capacities per metre of panel width.
///
/// ## JSON Example
///
/// ```json
/// {
///   "tension_kn": 1160.0,
///   "compression_kn": 1680.0,
///   "bending_knm": 55.47,
///   "shear_kn": 95.33
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capacities {
    /// Tension capacity N_t,k (kN/m)
    pub tension_kn: f64,
    /// Compression capacity N_c,k (kN/m)
    pub compression_kn: f64,
    /// Bending capacity M_k (kN·m/m)
    pub bending_knm: f64,
    /// Shear capacity V_k, including rolling shear of cross layers (kN/m)
    pub shear_kn: f64,
}

/// Smallest of the proposals, ignoring non-finite ones
fn governing(proposals: impl Iterator<Item = f64>) -> f64 {
    proposals.filter(|v| v.is_finite()).fold(f64::INFINITY, f64::min)
}

/// Axial capacity for a per-layer strength selector
fn axial_capacity(layers: &[Layer], props: &EffectiveProperties, strength: impl Fn(&Layer) -> f64) -> f64 {
    // strength · AEeff / E is a force per mm of width (N/mm)
    let per_mm = governing(
        layers
            .iter()
            .filter(|l| l.is_active())
            .map(|l| strength(l) * props.ae_eff / l.material().e0_mean),
    );
    KiloNewtons::from(Newtons(per_mm * STRIP_WIDTH_MM)).value()
}

/// Characteristic tension capacity (kN/m)
pub fn tension_capacity(layers: &[Layer], props: &EffectiveProperties) -> f64 {
    axial_capacity(layers, props, |l| l.material().ft0k)
}

/// Characteristic compression capacity (kN/m)
pub fn compression_capacity(layers: &[Layer], props: &EffectiveProperties) -> f64 {
    axial_capacity(layers, props, |l| l.material().fc0k)
}

/// Characteristic bending capacity (kN·m/m)
pub fn bending_capacity(layers: &[Layer], props: &EffectiveProperties, geometry: &[LayerGeometry]) -> f64 {
    let moduli = net_section_moduli(layers, props, geometry);

    let moment_nmm = governing(layers.iter().zip(&moduli).flat_map(|(layer, w)| {
        let n = stiffness_ratio(layer, props.reference_modulus);
        let fmk = layer.material().fmk;
        w.iter().flatten().map(move |w| (fmk * w / n).abs())
    }));

    KiloNewtonMeters::from(NewtonMillimeters(moment_nmm)).value()
}

/// Characteristic shear capacity (kN/m)
///
/// 0° layers are checked against fv,k at every profile point, 90° layers
/// against their rolling shear strength fr,k at the transmitted Q.
pub fn shear_capacity(layers: &[Layer], props: &EffectiveProperties, profile: &StaticMomentProfile) -> f64 {
    let stiffness = props.moment_of_inertia_mm4 * STRIP_WIDTH_MM;
    let cutoff = profile.max_static_moment_mm3() * STATIC_MOMENT_RELATIVE_TOLERANCE;

    let force_n = governing(layers.iter().zip(&profile.layers).flat_map(|(layer, lp)| {
        let strength = if layer.is_active() {
            layer.material().fvk
        } else {
            layer.material().frk
        };
        lp.points
            .iter()
            .map(|p| p.static_moment_mm3.abs())
            .filter(move |q| *q > cutoff)
            .map(move |q| strength * stiffness / q)
    }));

    KiloNewtons::from(Newtons(force_n)).value()
}

/// All four characteristic capacities of a stack.
pub fn compute(
    layers: &[Layer],
    props: &EffectiveProperties,
    geometry: &[LayerGeometry],
    profile: &StaticMomentProfile,
) -> Capacities {
    let capacities = Capacities {
        tension_kn: tension_capacity(layers, props),
        compression_kn: compression_capacity(layers, props),
        bending_knm: bending_capacity(layers, props, geometry),
        shear_kn: shear_capacity(layers, props, profile),
    };

    log::debug!(
        "capacities: Nt,k = {:.1} kN/m, Nc,k = {:.1} kN/m, Mk = {:.2} kNm/m, Vk = {:.1} kN/m",
        capacities.tension_kn,
        capacities.compression_kn,
        capacities.bending_knm,
        capacities.shear_kn
    );

    capacities
}
