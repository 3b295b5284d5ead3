//! # Polynomials
//! Evaluation, differentiation and deflation of complex polynomials.
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

use std::ops::Index;

use num_complex::Complex64;
use rand::Rng;

use crate::config::NewtonConfig;
use crate::errors::{RootError, RootResult};
use crate::roots::find_all_roots;

/// Evaluate a polynomial at `x` using Horner's method.
///
/// Coefficients are in ascending order, index 0 being the constant term. An empty
/// slice evaluates to zero everywhere.
///
/// ```
///     use kete_poly::polynomial::evaluate;
///     use num_complex::Complex64;
///
///     // x^2 + 1
///     let coef = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)];
///     assert!(evaluate(&coef, Complex64::new(0.0, 1.0)).norm() < 1e-15);
///     assert!((evaluate(&coef, Complex64::new(2.0, 0.0)).re - 5.0).abs() < 1e-15);
/// ```
#[must_use]
pub fn evaluate(coefficients: &[Complex64], x: Complex64) -> Complex64 {
    coefficients
        .iter()
        .rev()
        .fold(Complex64::new(0.0, 0.0), |acc, &coef| acc * x + coef)
}

/// Coefficients of the first derivative of the polynomial.
///
/// The result has one fewer coefficient than the input, a constant polynomial has an
/// empty derivative.
#[must_use]
pub fn derivative(coefficients: &[Complex64]) -> Vec<Complex64> {
    coefficients
        .iter()
        .enumerate()
        .skip(1)
        .map(|(power, &coef)| coef * power as f64)
        .collect()
}

/// Divide the polynomial by `(x - root)` using synthetic division.
///
/// Returns the quotient, which has one fewer coefficient than the input, along with
/// the remainder. The remainder is equal to the polynomial evaluated at `root`.
///
/// ```
///     use kete_poly::polynomial::deflate_with_remainder;
///     use num_complex::Complex64;
///
///     // x^2 - 5x + 6 divided by (x - 1) is (x - 4) with remainder 2.
///     let coef: Vec<_> = [6.0, -5.0, 1.0].iter().map(|&c| Complex64::new(c, 0.0)).collect();
///     let (quotient, remainder) = deflate_with_remainder(&coef, Complex64::new(1.0, 0.0));
///     assert_eq!(quotient, vec![Complex64::new(-4.0, 0.0), Complex64::new(1.0, 0.0)]);
///     assert_eq!(remainder, Complex64::new(2.0, 0.0));
/// ```
#[must_use]
pub fn deflate_with_remainder(
    coefficients: &[Complex64],
    root: Complex64,
) -> (Vec<Complex64>, Complex64) {
    let Some((&leading, _)) = coefficients.split_last() else {
        return (Vec::new(), Complex64::new(0.0, 0.0));
    };
    let degree = coefficients.len() - 1;

    // leading coefficient carries down unchanged
    let mut quotient = vec![leading; degree];
    for idx in (0..degree.saturating_sub(1)).rev() {
        quotient[idx] = coefficients[idx + 1] + root * quotient[idx + 1];
    }

    let remainder = match quotient.first() {
        Some(&first) => coefficients[0] + root * first,
        None => leading,
    };
    (quotient, remainder)
}

/// Divide the polynomial by `(x - root)`, discarding the remainder.
///
/// `root` is assumed to be a root of the polynomial. No check is made, an inaccurate
/// root leaves its error in the quotient. See [`deflate_with_remainder`] for a version
/// which exposes the remainder.
#[must_use]
pub fn deflate(coefficients: &[Complex64], root: Complex64) -> Vec<Complex64> {
    deflate_with_remainder(coefficients, root).0
}

/// Check that coefficients describe a polynomial of degree at least 1.
///
/// # Errors
/// [`RootError::Degree`] if fewer than 2 coefficients are given,
/// [`RootError::NonFinite`] if any coefficient is NaN or infinite, and
/// [`RootError::ZeroLeadingCoefficient`] if the final coefficient is zero.
pub(crate) fn validate(coefficients: &[Complex64]) -> RootResult<()> {
    let len = coefficients.len();
    if len < 2 {
        Err(RootError::Degree { len })?;
    }
    if !coefficients.iter().all(|coef| coef.is_finite()) {
        Err(RootError::NonFinite)?;
    }
    let leading = coefficients[len - 1];
    if leading.re == 0.0 && leading.im == 0.0 {
        Err(RootError::ZeroLeadingCoefficient)?;
    }
    Ok(())
}

/// Polynomial with complex coefficients in ascending order.
///
/// Construction guarantees at least 2 finite coefficients with a nonzero leading
/// coefficient, so the degree is at least 1 and every polynomial has roots.
///
/// Construction hints:
///
/// A `Vec<Complex64>` is taken without copying, slices are copied. Real coefficients
/// may be given as a slice of `f64`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial(Box<[Complex64]>);

impl Polynomial {
    /// Degree of the polynomial, always at least 1.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.0.len() - 1
    }

    /// Coefficients in ascending order.
    #[must_use]
    pub fn coefficients(&self) -> &[Complex64] {
        &self.0
    }

    /// Evaluate the polynomial at `x`.
    #[must_use]
    pub fn evaluate(&self, x: Complex64) -> Complex64 {
        evaluate(&self.0, x)
    }

    /// Coefficients of the first derivative.
    #[must_use]
    pub fn derivative(&self) -> Vec<Complex64> {
        derivative(&self.0)
    }

    /// Find all roots using the default [`NewtonConfig`] and the thread local random
    /// number generator.
    ///
    /// # Errors
    /// Fails if any single root search does not converge, see [`find_all_roots`].
    pub fn roots(&self) -> RootResult<Vec<Complex64>> {
        self.roots_with(&NewtonConfig::default(), &mut rand::rng())
    }

    /// Find all roots using the provided configuration and random number generator.
    ///
    /// # Errors
    /// Fails if any single root search does not converge, see [`find_all_roots`].
    pub fn roots_with<R>(&self, config: &NewtonConfig, rng: &mut R) -> RootResult<Vec<Complex64>>
    where
        R: Rng + ?Sized,
    {
        find_all_roots(&self.0, config, rng)
    }
}

impl TryFrom<Vec<Complex64>> for Polynomial {
    type Error = RootError;

    fn try_from(value: Vec<Complex64>) -> Result<Self, Self::Error> {
        validate(&value)?;
        Ok(Self(value.into_boxed_slice()))
    }
}

impl TryFrom<&[Complex64]> for Polynomial {
    type Error = RootError;

    fn try_from(value: &[Complex64]) -> Result<Self, Self::Error> {
        validate(value)?;
        Ok(Self(value.into()))
    }
}

impl TryFrom<&[f64]> for Polynomial {
    type Error = RootError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        value
            .iter()
            .map(|&coef| Complex64::new(coef, 0.0))
            .collect::<Vec<_>>()
            .try_into()
    }
}

impl Index<usize> for Polynomial {
    type Output = Complex64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn real(coef: &[f64]) -> Vec<Complex64> {
        coef.iter().map(|&c| Complex64::new(c, 0.0)).collect()
    }

    #[test]
    fn test_evaluate() {
        // x^5 + 1
        let coef = real(&[1.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(evaluate(&coef, Complex64::new(-1.0, 0.0)), Complex64::new(0.0, 0.0));
        assert_eq!(evaluate(&coef, Complex64::new(2.0, 0.0)), Complex64::new(33.0, 0.0));

        // i^5 + 1 = i + 1
        let val = evaluate(&coef, Complex64::new(0.0, 1.0));
        assert!((val - Complex64::new(1.0, 1.0)).norm() < 1e-15);

        assert_eq!(evaluate(&[], Complex64::new(3.0, 0.0)), Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_derivative() {
        let coef = real(&[1.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(derivative(&coef), real(&[0.0, 0.0, 0.0, 0.0, 5.0]));

        let coef = real(&[6.0, -5.0, 1.0]);
        assert_eq!(derivative(&coef), real(&[-5.0, 2.0]));

        assert!(derivative(&real(&[3.0])).is_empty());
        assert!(derivative(&[]).is_empty());
    }

    #[test]
    fn test_deflate() {
        // (x - 2)(x - 3)
        let coef = real(&[6.0, -5.0, 1.0]);
        assert_eq!(deflate(&coef, Complex64::new(2.0, 0.0)), real(&[-3.0, 1.0]));
        assert_eq!(deflate(&coef, Complex64::new(3.0, 0.0)), real(&[-2.0, 1.0]));

        let (quotient, remainder) = deflate_with_remainder(&coef, Complex64::new(3.0, 0.0));
        assert_eq!(quotient, real(&[-2.0, 1.0]));
        assert_eq!(remainder, Complex64::new(0.0, 0.0));

        // x^2 + 1 divided by (x - i) is (x + i)
        let coef = real(&[1.0, 0.0, 1.0]);
        let (quotient, remainder) = deflate_with_remainder(&coef, Complex64::new(0.0, 1.0));
        assert_eq!(quotient, vec![Complex64::new(0.0, 1.0), Complex64::new(1.0, 0.0)]);
        assert!(remainder.norm() < 1e-15);
    }

    #[test]
    fn test_deflate_remainder_matches_evaluate() {
        let coef = real(&[2.0, -1.0, 0.5, 3.0, -4.0]);
        let x = Complex64::new(0.3, -0.7);
        let (quotient, remainder) = deflate_with_remainder(&coef, x);
        assert_eq!(quotient.len(), 4);
        assert!((remainder - evaluate(&coef, x)).norm() < 1e-12);
    }

    #[test]
    fn test_deflate_short() {
        let (quotient, remainder) = deflate_with_remainder(&real(&[4.0]), Complex64::new(1.0, 0.0));
        assert!(quotient.is_empty());
        assert_eq!(remainder, Complex64::new(4.0, 0.0));

        let (quotient, remainder) = deflate_with_remainder(&[], Complex64::new(1.0, 0.0));
        assert!(quotient.is_empty());
        assert_eq!(remainder, Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_polynomial_construction() {
        let poly = Polynomial::try_from([1.0, 0.0, 0.0, 0.0, 0.0, 1.0].as_slice()).unwrap();
        assert_eq!(poly.degree(), 5);
        assert_eq!(poly[5], Complex64::new(1.0, 0.0));
        assert_eq!(poly.derivative(), real(&[0.0, 0.0, 0.0, 0.0, 5.0]));

        let poly: Polynomial = real(&[4.0, -2.0]).try_into().unwrap();
        assert_eq!(poly.degree(), 1);
        assert_eq!(poly.coefficients(), real(&[4.0, -2.0]).as_slice());
    }

    #[test]
    fn test_polynomial_bad() {
        let poly = Polynomial::try_from([1.0].as_slice());
        assert_eq!(poly, Err(RootError::Degree { len: 1 }));

        let poly = Polynomial::try_from(Vec::<Complex64>::new());
        assert_eq!(poly, Err(RootError::Degree { len: 0 }));

        let poly = Polynomial::try_from([1.0, 2.0, 0.0].as_slice());
        assert_eq!(poly, Err(RootError::ZeroLeadingCoefficient));

        let poly = Polynomial::try_from([f64::NAN, 1.0].as_slice());
        assert_eq!(poly, Err(RootError::NonFinite));
    }
}
