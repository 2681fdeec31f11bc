//! # Lamella Materials
//!
//! The section engine never looks materials up by grade: grade catalogs live
//! with the caller. What the engine needs from a lamella material is a handful
//! of scalar properties, expressed by the [`LamellaStrength`] capability trait.
//! Solid timber boards, glued-laminated lamellae and panel products all plug
//! in the same way, and the engine never branches on which one it got.
//!
//! [`LamellaMaterial`] is the plain, serializable record the engine stores per
//! layer. Any `LamellaStrength` implementor can be snapshotted into one.
//!
//! ## Example
//!
//! ```rust
//! use clt_core::materials::{LamellaMaterial, LamellaStrength};
//!
//! // C24 boards as commonly used for CLT lamellae (N/mm²)
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
//! assert_eq!(c24.e0_mean(), 11_000.0);
//! assert!(c24.validate("materials[0]").is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Scalar properties a lamella material must expose to the section engine.
///
/// All values in N/mm². Strengths are characteristic (5 % fractile) values.
pub trait LamellaStrength {
    /// Mean modulus of elasticity parallel to grain, E0,mean
    fn e0_mean(&self) -> f64;
    /// Characteristic tension strength parallel to grain, ft,0,k
    fn ft0k(&self) -> f64;
    /// Characteristic compression strength parallel to grain, fc,0,k
    fn fc0k(&self) -> f64;
    /// Characteristic bending strength, fm,k
    fn fmk(&self) -> f64;
    /// Characteristic shear strength, fv,k
    fn fvk(&self) -> f64;
    /// Characteristic rolling shear strength, fr,k
    fn frk(&self) -> f64;
}

/// Material record stored on every layer.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "C24",
///   "e0_mean": 11000.0,
///   "ft0k": 14.5,
///   "fc0k": 21.0,
///   "fmk": 24.0,
///   "fvk": 4.0,
///   "frk": 1.1
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LamellaMaterial {
    /// Display name (grade or product designation)
    #[serde(default)]
    pub name: String,
    /// E0,mean (N/mm²)
    pub e0_mean: f64,
    /// ft,0,k (N/mm²)
    pub ft0k: f64,
    /// fc,0,k (N/mm²)
    pub fc0k: f64,
    /// fm,k (N/mm²)
    pub fmk: f64,
    /// fv,k (N/mm²)
    pub fvk: f64,
    /// fr,k (N/mm²)
    pub frk: f64,
}

impl LamellaMaterial {
    /// Snapshot any material exposing the strength capability.
    pub fn from_strength(name: impl Into<String>, source: &impl LamellaStrength) -> Self {
        Self {
            name: name.into(),
            e0_mean: source.e0_mean(),
            ft0k: source.ft0k(),
            fc0k: source.fc0k(),
            fmk: source.fmk(),
            fvk: source.fvk(),
            frk: source.frk(),
        }
    }

    /// Check the values are usable by the section engine.
    ///
    /// The modulus must be strictly positive (it divides every stiffness
    /// ratio); strengths must be finite and non-negative.
    pub fn validate(&self, field: &str) -> CalcResult<()> {
        if !self.e0_mean.is_finite() || self.e0_mean <= 0.0 {
            return Err(CalcError::invalid_input(
                format!("{}.e0_mean", field),
                self.e0_mean.to_string(),
                "Modulus of elasticity must be positive",
            ));
        }

        let strengths = [
            ("ft0k", self.ft0k),
            ("fc0k", self.fc0k),
            ("fmk", self.fmk),
            ("fvk", self.fvk),
            ("frk", self.frk),
        ];
        for (name, value) in strengths {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(
                    format!("{}.{}", field, name),
                    value.to_string(),
                    "Characteristic strength must be a non-negative number",
                ));
            }
        }

        Ok(())
    }

    /// Get display name for this material
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "unnamed"
        } else {
            &self.name
        }
    }
}

impl LamellaStrength for LamellaMaterial {
    fn e0_mean(&self) -> f64 {
        self.e0_mean
    }

    fn ft0k(&self) -> f64 {
        self.ft0k
    }

    fn fc0k(&self) -> f64 {
        self.fc0k
    }

    fn fmk(&self) -> f64 {
        self.fmk
    }

    fn fvk(&self) -> f64 {
        self.fvk
    }

    fn frk(&self) -> f64 {
        self.frk
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// C24 board properties used across the crate's tests
    pub(crate) fn c24() -> LamellaMaterial {
        LamellaMaterial {
            name: "C24".to_string(),
            e0_mean: 11_000.0,
            ft0k: 14.5,
            fc0k: 21.0,
            fmk: 24.0,
            fvk: 4.0,
            frk: 1.1,
        }
    }

    /// Lower grade used to build mixed layups
    pub(crate) fn c16() -> LamellaMaterial {
        LamellaMaterial {
            name: "C16".to_string(),
            e0_mean: 8_000.0,
            ft0k: 8.5,
            fc0k: 17.0,
            fmk: 16.0,
            fvk: 3.2,
            frk: 1.0,
        }
    }

    struct Glulam;

    impl LamellaStrength for Glulam {
        fn e0_mean(&self) -> f64 {
            11_500.0
        }
        fn ft0k(&self) -> f64 {
            19.2
        }
        fn fc0k(&self) -> f64 {
            24.0
        }
        fn fmk(&self) -> f64 {
            24.0
        }
        fn fvk(&self) -> f64 {
            3.5
        }
        fn frk(&self) -> f64 {
            1.2
        }
    }

    #[test]
    fn test_snapshot_from_capability() {
        let mat = LamellaMaterial::from_strength("GL24h", &Glulam);
        assert_eq!(mat.e0_mean, 11_500.0);
        assert_eq!(mat.frk, 1.2);
        assert_eq!(mat.display_name(), "GL24h");
    }

    #[test]
    fn test_validate_rejects_zero_modulus() {
        let mut mat = c24();
        mat.e0_mean = 0.0;
        let err = mat.validate("materials[2]").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("materials[2].e0_mean"));
    }

    #[test]
    fn test_validate_rejects_negative_strength() {
        let mut mat = c16();
        mat.fvk = -1.0;
        assert!(mat.validate("materials[0]").is_err());
    }

    #[test]
    fn test_name_defaults_when_missing() {
        let json = r#"{"e0_mean":11000.0,"ft0k":14.5,"fc0k":21.0,"fmk":24.0,"fvk":4.0,"frk":1.1}"#;
        let mat: LamellaMaterial = serde_json::from_str(json).unwrap();
        assert_eq!(mat.display_name(), "unnamed");
    }
}
