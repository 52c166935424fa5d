/////////////////////////////////////////////////////////////////////////////////////////////
//
// Declares the invalid-argument errors returned by the segment kernel evaluator.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Errors returned when evaluator inputs violate their preconditions.
//!
//! Every variant is an invalid-argument condition detected once, at the
//! evaluator boundary, before any integration takes place. Collinear query
//! points are not errors: their contribution is defined to be zero.

use thiserror::Error;

/// Result type for fallible kernel operations.
pub type ConvolutionResult<T> = Result<T, ConvolutionError>;

/// Invalid-argument conditions rejected by the segment kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvolutionError {
    /// The smoothing scale must be strictly positive.
    #[error("invalid argument: sigma must be strictly positive, got {0}")]
    NonPositiveSigma(f64),

    /// The two segment endpoints coincide (after rescaling by sigma).
    #[error("invalid argument: segment endpoints coincide at ({x}, {y})")]
    CoincidentEndpoints { x: f64, y: f64 },

    /// An input coordinate, weight or sigma is NaN or infinite.
    #[error("invalid argument: `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// Endpoint weights are radius-like and cannot be negative.
    #[error("invalid argument: weight `{name}` must be non-negative, got {value}")]
    NegativeWeight { name: &'static str, value: f64 },

    /// The kernel exponent has no supported closed form.
    #[error(
        "invalid argument: kernel exponent {exponent} is outside the supported range [{min}, {max}]"
    )]
    UnsupportedExponent { exponent: u32, min: u32, max: u32 },
}

impl ConvolutionError {
    /// Returns `true` for errors caused by caller-supplied arguments.
    ///
    /// This holds for every current variant.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ConvolutionError::NonPositiveSigma(_)
                | ConvolutionError::CoincidentEndpoints { .. }
                | ConvolutionError::NonFinite { .. }
                | ConvolutionError::NegativeWeight { .. }
                | ConvolutionError::UnsupportedExponent { .. }
        )
    }
}

/// Rejects NaN and infinite values.
#[inline]
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> ConvolutionResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::debug!(argument = name, value, "rejecting non-finite argument");
        Err(ConvolutionError::NonFinite { name, value })
    }
}

/// Rejects non-finite or non-positive smoothing scales.
#[inline]
pub(crate) fn ensure_sigma(sigma: f64) -> ConvolutionResult<f64> {
    let sigma = ensure_finite("sigma", sigma)?;
    if sigma > 0.0 {
        Ok(sigma)
    } else {
        tracing::debug!(sigma, "rejecting non-positive sigma");
        Err(ConvolutionError::NonPositiveSigma(sigma))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equator::assert;

    #[test]
    fn messages_carry_offending_values() {
        let err = ConvolutionError::NonPositiveSigma(-2.5);
        assert!(err.to_string() == "invalid argument: sigma must be strictly positive, got -2.5");

        let err = ConvolutionError::NegativeWeight {
            name: "b_radius",
            value: -1.0,
        };
        core::assert!(err.to_string().contains("b_radius"));
    }

    #[test]
    fn every_variant_is_an_invalid_argument() {
        let errors = [
            ConvolutionError::NonPositiveSigma(0.0),
            ConvolutionError::CoincidentEndpoints { x: 1.0, y: 1.0 },
            ConvolutionError::NonFinite {
                name: "p_x",
                value: f64::NAN,
            },
            ConvolutionError::NegativeWeight {
                name: "a_radius",
                value: -0.1,
            },
            ConvolutionError::UnsupportedExponent {
                exponent: 1,
                min: 2,
                max: 12,
            },
        ];
        for err in errors {
            core::assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn sigma_checks() {
        assert!(ensure_sigma(0.5) == Ok(0.5));
        assert!(ensure_sigma(0.0) == Err(ConvolutionError::NonPositiveSigma(0.0)));
        core::assert!(matches!(
            ensure_sigma(f64::INFINITY),
            Err(ConvolutionError::NonFinite { name: "sigma", .. })
        ));
    }
}
