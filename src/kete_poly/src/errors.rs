//! Errors raised while searching for roots.
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

/// Error type for polynomial root finding.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum RootError {
    /// Maximum number of iterations reached without convergence.
    #[error("Newton iteration did not converge within {iterations} iterations")]
    Iterations {
        /// Size of the iteration budget which was exhausted.
        iterations: usize,
    },

    /// Polynomial has too few coefficients to have a root.
    #[error("Polynomial must have at least 2 coefficients, found {len}")]
    Degree {
        /// Number of coefficients provided.
        len: usize,
    },

    /// Highest order coefficient is zero, so the degree is not what it claims.
    #[error("Leading coefficient of the polynomial is zero")]
    ZeroLeadingCoefficient,

    /// Non-finite value encountered in the coefficients or during evaluation.
    #[error("Non-finite value encountered during evaluation")]
    NonFinite,

    /// Division by a root left a remainder larger than allowed.
    #[error("Deflation remainder of magnitude {remainder} exceeds the allowed tolerance")]
    Remainder {
        /// Magnitude of the remainder.
        remainder: f64,
    },
}

/// Result type for root finding operations.
pub type RootResult<T> = Result<T, RootError>;
