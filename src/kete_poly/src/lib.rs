//! # kete Polynomial Roots
//! Complex roots of polynomials by Newton iteration and deflation.
//!
//! A single root is located with Newton's method from a random starting point in the
//! complex plane, the polynomial is divided by that root, and the process repeats
//! until only a linear term remains, which is solved directly.
//!
//! Coefficients are always given in ascending order, index 0 being the constant term.
//!
//! ```
//!     use kete_poly::prelude::*;
//!
//!     // x^2 - 5x + 6 = (x - 2)(x - 3)
//!     let poly = Polynomial::try_from([6.0, -5.0, 1.0].as_slice()).unwrap();
//!     let roots = poly.roots().unwrap();
//!     assert_eq!(roots.len(), 2);
//!     for root in roots {
//!         assert!(poly.evaluate(root).norm() < 1e-8);
//!     }
//! ```
//!
//! All random draws go through a caller supplied [`rand::Rng`], so seeded generators
//! give reproducible results.

pub mod config;
pub mod errors;
pub mod polynomial;
pub mod roots;

/// Common useful imports
pub mod prelude {
    pub use crate::config::NewtonConfig;
    pub use crate::errors::{RootError, RootResult};
    pub use crate::polynomial::{Polynomial, deflate, deflate_with_remainder, derivative, evaluate};
    pub use crate::roots::{find_all_roots, find_one_root, find_one_root_from};
    pub use num_complex::Complex64;
}
