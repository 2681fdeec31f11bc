//! # Structural Engineering Equations
//!
//! Closed-form formulas shared by the layered-section calculators. Keeping
//! them in one place makes them easy to verify against references.
//!
//! ## Modules
//!
//! - [`section`] - Rectangle properties (A, I, Steiner term, Q, r, torsion)
//!
//! ## Sign Conventions
//!
//! - **Depth**: Measured downward from the top fibre of the panel
//! - **Lever arm**: Positive below the centre of gravity
//! - **Moment**: Positive causes tension on the bottom fibre (sagging)
//! - **Normal force**: Positive in tension

pub mod section;

pub use section::{
    parallel_axis_term,
    radius_of_gyration,
    rectangular_area,
    rectangular_max_static_moment,
    rectangular_moment_of_inertia,
    rectangular_torsion_constant,
    rectangular_torsion_modulus,
};
