//! # Cross-Section Property Formulas
//!
//! Closed-form geometric formulas for rectangular lamellae and panel strips.
//! The layered-section calculators combine these with stiffness ratios; the
//! formulas themselves know nothing about orientation or material.
//!
//! ## Notation
//!
//! - `b` = Width of the rectangle (panel strip width)
//! - `h` = Height of the rectangle (lamella or panel thickness)
//! - `A` = Area, `I` = second moment of area, `r` = radius of gyration
//! - `d` = Distance between an element's own centroid and the reference axis
//!
//! ## References
//!
//! - Wallner-Novak M. et al., CLT structural design I, proHOLZ 2018
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 10.7 (torsion)

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Calculate cross-sectional area for rectangular section
///
/// # Formula
/// A = b × h
///
/// # Example
/// ```rust
/// use clt_core::equations::section::rectangular_area;
///
/// // 40 mm lamella over a 1 m strip
/// let a = rectangular_area(1000.0, 40.0);
/// assert!((a - 40_000.0).abs() < 1e-9);
/// ```
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Calculate moment of inertia of a rectangle about its own centroidal axis
///
/// ```text
///     ┌─────────────────────┐
///   h │ ═══════════════════ │ ← own axis at h/2
///     └─────────────────────┘
///                b
/// ```
///
/// # Formula
/// I = bh³/12
///
/// # Example
/// ```rust
/// use clt_core::equations::section::rectangular_moment_of_inertia;
///
/// let i = rectangular_moment_of_inertia(1000.0, 40.0);
/// // I = 1000 × 40³ / 12 = 5 333 333 mm⁴
/// assert!((i - 5_333_333.333).abs() < 0.01);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Steiner (parallel-axis) contribution of an element offset from the reference axis
///
/// # Formula
/// ΔI = A × d²
///
/// # Example
/// ```rust
/// use clt_core::equations::section::parallel_axis_term;
///
/// // 40 mm top lamella, centroid 40 mm above the panel centroid
/// let di = parallel_axis_term(40_000.0, -40.0);
/// assert!((di - 64_000_000.0).abs() < 1e-6);
/// ```
#[inline]
pub fn parallel_axis_term(area: f64, d: f64) -> f64 {
    area * d.powi(2)
}

/// First moment of area of the upper half of a rectangle about its centroid
///
/// This is the peak static moment of a homogeneous rectangle, reached at
/// mid-depth.
///
/// # Formula
/// Q_max = b × (h/2) × (h/4) = bh²/8
///
/// # Example
/// ```rust
/// use clt_core::equations::section::rectangular_max_static_moment;
///
/// let q = rectangular_max_static_moment(1000.0, 100.0);
/// assert!((q - 1_250_000.0).abs() < 1e-6);
/// ```
#[inline]
pub fn rectangular_max_static_moment(b: f64, h: f64) -> f64 {
    b * h.powi(2) / 8.0
}

/// Calculate radius of gyration from inertia and area
///
/// # Formula
/// r = √(I/A)
///
/// Returns 0 for a non-positive area.
#[inline]
pub fn radius_of_gyration(i: f64, a: f64) -> f64 {
    if a <= 0.0 {
        return 0.0;
    }
    (i / a).sqrt()
}

// =============================================================================
// TORSION OF A SOLID RECTANGLE
// =============================================================================

/// Saint-Venant coefficient c1 for a rectangle with side ratio `r = long/short`
///
/// # Formula
/// c1 = 1/3 × (1 − 0.63/r + 0.052/r⁵)
#[inline]
fn torsion_c1(ratio: f64) -> f64 {
    (1.0 / 3.0) * (1.0 - 0.63 / ratio + 0.052 / ratio.powi(5))
}

/// Stress coefficient c2 for a rectangle with side ratio `r = long/short`
///
/// # Formula
/// c2 = 1 − 0.65/(1 + r³)
#[inline]
fn torsion_c2(ratio: f64) -> f64 {
    1.0 - 0.65 / (1.0 + ratio.powi(3))
}

/// Orders two rectangle sides as (long, short)
#[inline]
fn long_short(a: f64, b: f64) -> (f64, f64) {
    if a >= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Torsion constant of a solid rectangle
///
/// # Formula
/// I_T = c1 × long × short³
///
/// # Example
/// ```rust
/// use clt_core::equations::section::rectangular_torsion_constant;
///
/// // Thin strip: approaches long × short³ / 3
/// let it = rectangular_torsion_constant(1000.0, 10.0);
/// assert!((it / (1000.0 * 1000.0 / 3.0) - 0.994).abs() < 0.01);
/// ```
pub fn rectangular_torsion_constant(b: f64, h: f64) -> f64 {
    let (long, short) = long_short(b, h);
    if short <= 0.0 {
        return 0.0;
    }
    torsion_c1(long / short) * long * short.powi(3)
}

/// Torsional section modulus of a solid rectangle (τ_max = T / W_T)
///
/// # Formula
/// W_T = c1/c2 × long × short²
pub fn rectangular_torsion_modulus(b: f64, h: f64) -> f64 {
    let (long, short) = long_short(b, h);
    if short <= 0.0 {
        return 0.0;
    }
    let ratio = long / short;
    torsion_c1(ratio) / torsion_c2(ratio) * long * short.powi(2)
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.01;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 0.001
    }

    #[test]
    fn test_rectangular_moment_of_inertia() {
        // 120 mm panel: I = 1000 × 120³ / 12 = 144e6
        let i = rectangular_moment_of_inertia(1000.0, 120.0);
        assert!(approx_eq(i, 144.0e6), "I = {} (expected 144e6)", i);
    }

    #[test]
    fn test_steiner_sum_matches_solid_rectangle() {
        // Two 50 mm halves about the common centroid rebuild the 100 mm rectangle
        let half = rectangular_moment_of_inertia(1000.0, 50.0)
            + parallel_axis_term(rectangular_area(1000.0, 50.0), 25.0);
        let full = rectangular_moment_of_inertia(1000.0, 100.0);
        assert!(approx_eq(2.0 * half, full), "2×half = {}, full = {}", 2.0 * half, full);
    }

    #[test]
    fn test_radius_of_gyration() {
        let i = rectangular_moment_of_inertia(1000.0, 120.0);
        let a = rectangular_area(1000.0, 120.0);
        let r = radius_of_gyration(i, a);
        let expected = 120.0 / (12.0_f64).sqrt();
        assert!(approx_eq(r, expected), "r = {} (expected {})", r, expected);
        assert_eq!(radius_of_gyration(i, 0.0), 0.0);
    }

    #[test]
    fn test_square_torsion() {
        // Square: c1 = 0.1406 (Roark: K = 0.1406 a⁴)
        let it = rectangular_torsion_constant(100.0, 100.0);
        assert!((it / 1.0e8 - 0.1406).abs() < 0.002, "I_T = {}", it);

        // Square: W_T = 0.208 a³
        let wt = rectangular_torsion_modulus(100.0, 100.0);
        assert!((wt / 1.0e6 - 0.208).abs() < 0.003, "W_T = {}", wt);
    }

    #[test]
    fn test_torsion_is_orientation_agnostic() {
        let a = rectangular_torsion_constant(1000.0, 120.0);
        let b = rectangular_torsion_constant(120.0, 1000.0);
        assert!(approx_eq(a, b));
        assert_eq!(rectangular_torsion_modulus(0.0, 100.0), 0.0);
    }
}
