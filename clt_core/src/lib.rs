//! # clt_core - Cross-Laminated Timber Section Engine
//!
//! `clt_core` computes the cross-section behaviour of layered timber panels
//! analysed as a 1000 mm wide strip: stiffness-weighted section properties,
//! the first-moment-of-area profile through the depth, normal, bending and
//! shear stresses, and characteristic capacities. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: A validated layer stack is immutable; queries are pure
//! - **JSON-First**: All input and result types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No I/O**: File handling belongs to the callers
//!
//! ## Quick Start
//!
//! ```rust
//! use clt_core::{LayerStack, LamellaMaterial};
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
//! let stack = LayerStack::new(&[40.0, 40.0, 40.0], &[0, 90, 0], &vec![c24; 3]).unwrap();
//! let capacities = stack.capacities();
//! assert!(capacities.shear_kn > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Layer stacks, section properties, stresses and capacities
//! - [`equations`] - Closed-form section formulas
//! - [`materials`] - Lamella material records
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    calculate, Capacities, CltLayup, CltSectionInput, CltSectionResult, EffectiveProperties, Layer, LayerStack,
    Orientation, SectionForces, StaticMomentProfile,
};
pub use errors::{CalcError, CalcResult};
pub use materials::{LamellaMaterial, LamellaStrength};
pub use units::STRIP_WIDTH_MM;
