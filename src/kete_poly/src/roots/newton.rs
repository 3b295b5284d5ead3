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

use num_complex::Complex64;
use rand::Rng;
use tracing::{debug, trace, warn};

use crate::config::NewtonConfig;
use crate::errors::{RootError, RootResult};
use crate::polynomial::{derivative, evaluate};

/// Point drawn uniformly from the square `[-radius, radius]` x `[-radius, radius]`.
///
/// # Errors
/// [`RootError::NonFinite`] if the radius is NaN or infinite.
fn random_point<R>(rng: &mut R, radius: f64) -> RootResult<Complex64>
where
    R: Rng + ?Sized,
{
    if !radius.is_finite() {
        Err(RootError::NonFinite)?;
    }
    let radius = radius.abs();
    let re = rng.random_range(-radius..=radius);
    let im = rng.random_range(-radius..=radius);
    Ok(Complex64::new(re, im))
}

/// Find a single root of a polynomial using Newton's method from a random start.
///
/// The starting point is drawn uniformly from the square of half width
/// [`NewtonConfig::start_radius`] centered on the origin, after which this behaves
/// exactly as [`find_one_root_from`].
///
/// ```
///     use kete_poly::prelude::*;
///     use rand::SeedableRng;
///
///     let mut rng = rand::rngs::StdRng::seed_from_u64(42);
///     // x^2 + 4
///     let coef = [Complex64::new(4.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)];
///     let root = find_one_root(&coef, &NewtonConfig::default(), &mut rng).unwrap();
///     assert!(evaluate(&coef, root).norm() < 1e-10);
///     assert!((root.im.abs() - 2.0).abs() < 1e-9);
/// ```
///
/// # Errors
/// [`RootError::NonFinite`] if [`NewtonConfig::start_radius`] is not finite, otherwise
/// see [`find_one_root_from`].
pub fn find_one_root<R>(
    coefficients: &[Complex64],
    config: &NewtonConfig,
    rng: &mut R,
) -> RootResult<Complex64>
where
    R: Rng + ?Sized,
{
    let start = random_point(rng, config.start_radius)?;
    find_one_root_from(coefficients, start, config, rng)
}

/// Find a single root of a polynomial using Newton's method from the given start.
///
/// Each iteration first checks for convergence, `|f(x)| < tolerance`, returning
/// immediately if met. If the derivative magnitude is below
/// [`NewtonConfig::flat_derivative`] the Newton step is skipped, and `x` is instead
/// moved by a random offset drawn from the square of half width
/// [`NewtonConfig::restart_radius`]. These restarts count against the iteration budget.
///
/// # Errors
///
/// [`RootError`] may be returned in the following cases:
///     - Fewer than 2 coefficients were provided.
///     - Any evaluation of the polynomial is non-finite.
///     - A random restart was needed but [`NewtonConfig::restart_radius`] is not finite.
///     - Failed to converge within [`NewtonConfig::max_iterations`] iterations.
pub fn find_one_root_from<R>(
    coefficients: &[Complex64],
    start: Complex64,
    config: &NewtonConfig,
    rng: &mut R,
) -> RootResult<Complex64>
where
    R: Rng + ?Sized,
{
    if coefficients.len() < 2 {
        Err(RootError::Degree {
            len: coefficients.len(),
        })?;
    }
    let der = derivative(coefficients);
    let mut x = start;

    for iteration in 0..config.max_iterations {
        let f_eval = evaluate(coefficients, x);
        if !f_eval.is_finite() {
            Err(RootError::NonFinite)?;
        }
        if f_eval.norm() < config.tolerance {
            trace!(iteration, root = %x, "Newton iteration converged");
            return Ok(x);
        }

        let d_eval = evaluate(&der, x);

        // Flat tangent, step is undefined so jump somewhere nearby.
        if d_eval.norm() < config.flat_derivative {
            debug!(iteration, position = %x, "Derivative collapsed, perturbing");
            x += random_point(rng, config.restart_radius)?;
            continue;
        }

        x -= f_eval / d_eval;
    }

    warn!(
        max_iterations = config.max_iterations,
        last = %x,
        "Newton iteration failed to converge"
    );
    Err(RootError::Iterations {
        iterations: config.max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn real(coef: &[f64]) -> Vec<Complex64> {
        coef.iter().map(|&c| Complex64::new(c, 0.0)).collect()
    }

    #[test]
    fn test_find_one_root() {
        let mut rng = StdRng::seed_from_u64(1);
        let coef = real(&[-1.0, 0.0, 1.0]);
        let config = NewtonConfig::default();

        for _ in 0..20 {
            let root = find_one_root(&coef, &config, &mut rng).unwrap();
            assert!(evaluate(&coef, root).norm() < config.tolerance);
            let dist = (root - 1.0).norm().min((root + 1.0).norm());
            assert!(dist < 1e-9);
        }
    }

    #[test]
    fn test_random_point_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = random_point(&mut rng, 0.5).unwrap();
            assert!(p.re.abs() <= 0.5 && p.im.abs() <= 0.5);
        }
        assert_eq!(random_point(&mut rng, 0.0), Ok(Complex64::new(0.0, 0.0)));
        assert_eq!(random_point(&mut rng, f64::NAN), Err(RootError::NonFinite));
        assert_eq!(random_point(&mut rng, f64::INFINITY), Err(RootError::NonFinite));
    }

    #[test]
    fn test_non_finite_radius() {
        let mut rng = StdRng::seed_from_u64(15);
        let coef = real(&[-1.0, 0.0, 1.0]);
        let zero = Complex64::new(0.0, 0.0);

        for radius in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let config = NewtonConfig::default().with_start_radius(radius);
            let res = find_one_root(&coef, &config, &mut rng);
            assert_eq!(res, Err(RootError::NonFinite));

            // start at the critical point so a restart is required
            let config = NewtonConfig::default().with_restart_radius(radius);
            let res = find_one_root_from(&coef, zero, &config, &mut rng);
            assert_eq!(res, Err(RootError::NonFinite));
        }
    }

    #[test]
    fn test_no_iterations() {
        let mut rng = StdRng::seed_from_u64(2);
        let coef = real(&[1.0, 0.0, 0.0, 0.0, 0.0, 1.0]);

        for max_iterations in [0, 1] {
            let config = NewtonConfig::default()
                .with_max_iterations(max_iterations)
                .with_tolerance(0.0);
            let res = find_one_root(&coef, &config, &mut rng);
            assert_eq!(
                res,
                Err(RootError::Iterations {
                    iterations: max_iterations
                })
            );
        }
    }

    #[test]
    fn test_already_converged() {
        let mut rng = StdRng::seed_from_u64(3);
        // x^3, start exactly on the root
        let coef = real(&[0.0, 0.0, 0.0, 1.0]);
        let zero = Complex64::new(0.0, 0.0);
        let config = NewtonConfig::default();

        let root = find_one_root_from(&coef, zero, &config, &mut rng).unwrap();
        assert_eq!(root, zero);

        // an empty budget never checks convergence
        let config = config.with_max_iterations(0);
        let res = find_one_root_from(&coef, zero, &config, &mut rng);
        assert_eq!(res, Err(RootError::Iterations { iterations: 0 }));
    }

    #[test]
    fn test_derivative_collapse() {
        let mut rng = StdRng::seed_from_u64(4);
        // x^2 - 1 has a critical point at 0
        let coef = real(&[-1.0, 0.0, 1.0]);
        let zero = Complex64::new(0.0, 0.0);
        let config = NewtonConfig::default();

        let root = find_one_root_from(&coef, zero, &config, &mut rng).unwrap();
        assert!(evaluate(&coef, root).norm() < config.tolerance);

        // the restart consumes the only iteration
        let config = config.with_max_iterations(1);
        let res = find_one_root_from(&coef, zero, &config, &mut rng);
        assert_eq!(res, Err(RootError::Iterations { iterations: 1 }));
    }

    #[test]
    fn test_always_flat() {
        let mut rng = StdRng::seed_from_u64(5);
        let coef = real(&[-1.0, 0.0, 1.0]);
        let config = NewtonConfig::default()
            .with_flat_derivative(f64::INFINITY)
            .with_max_iterations(50);

        let res = find_one_root(&coef, &config, &mut rng);
        assert_eq!(res, Err(RootError::Iterations { iterations: 50 }));
    }

    #[test]
    fn test_bad_input() {
        let mut rng = StdRng::seed_from_u64(6);
        let config = NewtonConfig::default();

        let res = find_one_root(&real(&[1.0]), &config, &mut rng);
        assert_eq!(res, Err(RootError::Degree { len: 1 }));

        let res = find_one_root(&real(&[f64::NAN, 1.0]), &config, &mut rng);
        assert_eq!(res, Err(RootError::NonFinite));
    }
}
