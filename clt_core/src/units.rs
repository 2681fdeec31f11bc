//! # Unit Types
//!
//! Type-safe wrappers for the SI units used at the panel-design boundary.
//! They are plain f64 newtypes: JSON stays clean (just numbers) and the
//! conversions between the user-facing units (kN, kN·m) and the base units the
//! section formulas work in (N, N·mm) are written once, here.
//!
//! ## Conventions
//!
//! All section quantities refer to a panel strip of [`STRIP_WIDTH_MM`]:
//! - Length: millimetres (mm)
//! - Force per strip: kilonewtons (kN), newtons (N)
//! - Moment per strip: kilonewton-metres (kN·m), newton-millimetres (N·mm)
//! - Stress: N/mm² (= MPa)
//!
//! ## Example
//!
//! ```rust
//! use clt_core::units::{KiloNewtonMeters, NewtonMillimeters};
//!
//! let m = KiloNewtonMeters(12.5);
//! let m_nmm: NewtonMillimeters = m.into();
//! assert_eq!(m_nmm.0, 12.5e6);
//! ```

use serde::{Deserialize, Serialize};

/// Width of the reference panel strip every section property is computed for (1 m).
pub const STRIP_WIDTH_MM: f64 = 1000.0;

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

impl From<KiloNewtonMeters> for NewtonMillimeters {
    fn from(knm: KiloNewtonMeters) -> Self {
        NewtonMillimeters(knm.0 * 1.0e6)
    }
}

impl From<NewtonMillimeters> for KiloNewtonMeters {
    fn from(nmm: NewtonMillimeters) -> Self {
        KiloNewtonMeters(nmm.0 / 1.0e6)
    }
}

// ============================================================================
// Raw Values
// ============================================================================

macro_rules! impl_value {
    ($($type:ty),*) => {
        $(
            impl $type {
                /// Get the raw f64 value
                pub fn value(self) -> f64 {
                    self.0
                }
            }
        )*
    };
}

impl_value!(Newtons, KiloNewtons, NewtonMillimeters, KiloNewtonMeters);
