//! Tunable parameters of the Newton root search.
//
// BSD 3-Clause License
//
// Copyright (c) 2026, Dar Dahlen
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use serde::{Deserialize, Serialize};

/// Parameters controlling the Newton root search and deflation.
///
/// The [`Default`] values are the ones used by [`crate::polynomial::Polynomial::roots`].
///
/// ```
///     use kete_poly::config::NewtonConfig;
///     let config = NewtonConfig::default()
///         .with_max_iterations(200)
///         .with_tolerance(1e-8);
///     assert_eq!(config.max_iterations, 200);
///     assert_eq!(config.flat_derivative, 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewtonConfig {
    /// Maximum number of Newton iterations per root, derivative restarts included.
    pub max_iterations: usize,

    /// A point is accepted as a root once `|f(x)|` is strictly below this value.
    pub tolerance: f64,

    /// Derivative magnitude below which a Newton step is not taken and the current
    /// point is randomly perturbed instead.
    pub flat_derivative: f64,

    /// Half width of the square around the origin where starting points are drawn.
    pub start_radius: f64,

    /// Half width of the square of random offsets applied when the derivative is flat.
    pub restart_radius: f64,

    /// If set, every deflation must leave a remainder with magnitude at most this.
    pub remainder_tolerance: Option<f64>,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-10,
            flat_derivative: 1e-12,
            start_radius: 1.0,
            restart_radius: 0.5,
            remainder_tolerance: None,
        }
    }
}

impl NewtonConfig {
    /// Set the maximum number of iterations per root.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance on `|f(x)|`.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the derivative magnitude which triggers a random restart.
    #[must_use]
    pub fn with_flat_derivative(mut self, flat_derivative: f64) -> Self {
        self.flat_derivative = flat_derivative;
        self
    }

    /// Set the half width of the starting square.
    #[must_use]
    pub fn with_start_radius(mut self, start_radius: f64) -> Self {
        self.start_radius = start_radius;
        self
    }

    /// Set the half width of the restart perturbation.
    #[must_use]
    pub fn with_restart_radius(mut self, restart_radius: f64) -> Self {
        self.restart_radius = restart_radius;
        self
    }

    /// Require each deflation remainder to be no larger than the given magnitude.
    #[must_use]
    pub fn with_remainder_tolerance(mut self, remainder_tolerance: f64) -> Self {
        self.remainder_tolerance = Some(remainder_tolerance);
        self
    }
}
