//! # Static Moment Profile
//!
//! First moment of area Q(z) of the active material above depth z, taken
//! about the global centre of gravity. Shear stress follows as
//! `τ = V·Q / (I·b)`.
//!
//! ## Algorithm
//!
//! Layers are processed top to bottom, carrying the last Q value down:
//!
//! - **0° layer**: points at the top (the carried value), the middle and the
//!   bottom, plus one at the centre of gravity when it lies strictly inside
//!   the layer away from mid-depth. Middle, bottom and CoG values come from a
//!   transient partial stack (everything above plus the cut fraction of this
//!   layer, orientations unchanged):
//!   `Q = (CoG − CoG_partial) · A_partial`.
//! - **90° layer**: a single point holding the carried value. Cross layers add
//!   no area in this direction, they only pass Q on (rolling shear).
//!
//! Q is an integral of area, so the value at the top of a layer always equals
//! the value at the bottom of the layer above.
//!
//! Every partial stack is built from at most `index + 1` layers and is
//! dropped after yielding one value, so the number of partial stacks is
//! bounded by three per layer.

use serde::{Deserialize, Serialize};

use crate::calculations::layer::{Layer, Orientation};
use crate::calculations::properties::{sub_stack_centroid, EffectiveProperties, LayerGeometry};

/// Geometric tolerance for "the CoG lies inside this layer" (mm)
const DEPTH_TOLERANCE_MM: f64 = 1e-9;

/// Where in its layer a profile point sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointPosition {
    /// Top face of a 0° layer
    Top,
    /// Global centre of gravity, inside a 0° layer
    CenterOfGravity,
    /// Mid-thickness of a 0° layer
    Middle,
    /// Bottom face of a 0° layer
    Bottom,
    /// Value passed through a 90° layer
    Continuity,
}

/// One point of the static-moment profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub position: PointPosition,
    /// Depth below the top fibre (mm)
    pub depth_mm: f64,
    /// Stiffness-weighted first moment of area (mm³)
    pub static_moment_mm3: f64,
}

/// Profile points of one layer, ordered by depth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerProfile {
    /// Layer index, top layer = 0
    pub layer: usize,
    pub orientation: Orientation,
    pub points: Vec<ProfilePoint>,
}

impl LayerProfile {
    /// Q at the top of the layer (mm³)
    pub fn first_value(&self) -> f64 {
        self.points.first().map_or(0.0, |p| p.static_moment_mm3)
    }

    /// Q at the bottom of the layer (mm³)
    pub fn last_value(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.static_moment_mm3)
    }

    /// Raw Q values in point order (mm³)
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.static_moment_mm3).collect()
    }
}

/// Static-moment profile of a whole stack, one entry per layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticMomentProfile {
    pub layers: Vec<LayerProfile>,
}

impl StaticMomentProfile {
    /// Nested Q values, `[layer][point]` (mm³)
    pub fn values(&self) -> Vec<Vec<f64>> {
        self.layers.iter().map(LayerProfile::values).collect()
    }

    /// Largest |Q| anywhere in the section (mm³)
    pub fn max_static_moment_mm3(&self) -> f64 {
        self.layers
            .iter()
            .flat_map(|l| l.points.iter())
            .map(|p| p.static_moment_mm3.abs())
            .fold(0.0, f64::max)
    }
}

/// Build the profile. Returns it together with the number of partial stacks
/// that were evaluated.
pub(crate) fn compute(
    layers: &[Layer],
    props: &EffectiveProperties,
    geometry: &[LayerGeometry],
) -> (StaticMomentProfile, usize) {
    let cog = props.center_of_gravity_mm;
    let e_ref = props.reference_modulus;
    let mut sub_stacks = 0usize;

    let mut q_at = |index: usize, fraction: f64| -> f64 {
        sub_stacks += 1;
        sub_stack_centroid(layers, index, fraction, e_ref)
            .map_or(0.0, |c| (cog - c.depth_mm) * c.active_area_mm2)
    };

    let mut profile = Vec::with_capacity(layers.len());
    let mut carried = 0.0;

    for (index, (layer, geo)) in layers.iter().zip(geometry).enumerate() {
        let points = if layer.is_active() {
            let mut points = Vec::with_capacity(4);
            points.push(ProfilePoint {
                position: PointPosition::Top,
                depth_mm: geo.top_mm,
                static_moment_mm3: carried,
            });

            let cog_inside = cog > geo.top_mm + DEPTH_TOLERANCE_MM
                && cog < geo.bottom_mm - DEPTH_TOLERANCE_MM
                && (cog - geo.center_mm).abs() > DEPTH_TOLERANCE_MM;
            let cog_point = if cog_inside {
                let fraction = (cog - geo.top_mm) / layer.thickness_mm();
                Some(ProfilePoint {
                    position: PointPosition::CenterOfGravity,
                    depth_mm: cog,
                    static_moment_mm3: q_at(index, fraction),
                })
            } else {
                None
            };

            let middle = ProfilePoint {
                position: PointPosition::Middle,
                depth_mm: geo.center_mm,
                static_moment_mm3: q_at(index, 0.5),
            };
            let bottom = ProfilePoint {
                position: PointPosition::Bottom,
                depth_mm: geo.bottom_mm,
                static_moment_mm3: q_at(index, 1.0),
            };

            match cog_point {
                Some(p) if p.depth_mm < middle.depth_mm => points.extend([p, middle, bottom]),
                Some(p) => points.extend([middle, p, bottom]),
                None => points.extend([middle, bottom]),
            }
            points
        } else {
            vec![ProfilePoint {
                position: PointPosition::Continuity,
                depth_mm: geo.top_mm,
                static_moment_mm3: carried,
            }]
        };

        let layer_profile = LayerProfile {
            layer: index,
            orientation: layer.orientation(),
            points,
        };
        carried = layer_profile.last_value();
        profile.push(layer_profile);
    }

    log::debug!(
        "static moment profile: {} layers, {} partial stacks evaluated",
        layers.len(),
        sub_stacks
    );

    (StaticMomentProfile { layers: profile }, sub_stacks)
}
