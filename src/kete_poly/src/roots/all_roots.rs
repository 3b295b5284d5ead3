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
use tracing::debug;

use super::newton::find_one_root;
use crate::config::NewtonConfig;
use crate::errors::{RootError, RootResult};
use crate::polynomial::{deflate_with_remainder, validate};

/// Find all roots of a polynomial by Newton iteration and deflation.
///
/// One root is found with [`find_one_root`], the polynomial is divided by it, and this
/// repeats until a linear polynomial remains, which is solved directly. The returned
/// roots are in the order they were found, one per degree, repeated roots appear
/// multiple times.
///
/// Deflation errors accumulate, so later roots are less accurate than earlier ones.
/// Setting [`NewtonConfig::remainder_tolerance`] rejects deflations by poor roots.
///
/// ```
///     use kete_poly::prelude::*;
///     use rand::SeedableRng;
///
///     let mut rng = rand::rngs::StdRng::seed_from_u64(42);
///     // x^5 + 1
///     let coef: Vec<_> = [1.0, 0.0, 0.0, 0.0, 0.0, 1.0]
///         .iter()
///         .map(|&c| Complex64::new(c, 0.0))
///         .collect();
///     let roots = find_all_roots(&coef, &NewtonConfig::default(), &mut rng).unwrap();
///     assert_eq!(roots.len(), 5);
///     for root in roots {
///         assert!((root.norm() - 1.0).abs() < 1e-6);
///     }
/// ```
///
/// # Errors
///
/// [`RootError`] may be returned in the following cases:
///     - Fewer than 2 coefficients, a zero leading coefficient, or non-finite values.
///     - Any single root search failed, no partial results are kept.
///     - A deflation remainder exceeded [`NewtonConfig::remainder_tolerance`].
///
/// A fresh call draws new random starting points. When retrying on failure, a
/// [`RootError::NonFinite`] raised mid iteration should be treated the same as
/// [`RootError::Iterations`], since both come from an unlucky search path. A
/// non-finite coefficient or radius fails again on every retry.
pub fn find_all_roots<R>(
    coefficients: &[Complex64],
    config: &NewtonConfig,
    rng: &mut R,
) -> RootResult<Vec<Complex64>>
where
    R: Rng + ?Sized,
{
    validate(coefficients)?;

    let mut working = coefficients.to_vec();
    let mut roots = Vec::with_capacity(working.len() - 1);

    while working.len() > 2 {
        let root = find_one_root(&working, config, rng)?;
        let (quotient, remainder) = deflate_with_remainder(&working, root);

        if let Some(tol) = config.remainder_tolerance {
            let remainder = remainder.norm();
            if remainder > tol {
                Err(RootError::Remainder { remainder })?;
            }
        }
        debug!(
            degree = quotient.len() - 1,
            root = %root,
            remainder = remainder.norm(),
            "Deflated polynomial"
        );

        roots.push(root);
        working = quotient;
    }

    // Leading coefficient is carried unchanged through deflation, so it is nonzero.
    if let &[c0, c1] = working.as_slice() {
        roots.push(-c0 / c1);
    }
    Ok(roots)
}
