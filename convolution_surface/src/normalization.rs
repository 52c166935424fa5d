/////////////////////////////////////////////////////////////////////////////////////////////
//
// Computes the normalization constant of the power-inverse kernel.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::config::ensure_exponent;
use crate::error::{ensure_sigma, ConvolutionResult};
use convolution_surface_utils::constants::MIN_KERNEL_EXPONENT;
use std::f64::consts::PI;

/// Returns the normalization constant of the power-inverse kernel of exponent `i`
/// at smoothing scale `sigma`.
///
/// This is `sigma^i * ∫ (1 + x^2)^(-i/2) dx` over the real line, with closed forms
/// `sigma^2 * pi` for `i = 2` and `2 * sigma^3` for `i = 3`. Higher exponents
/// reduce by two at each step via
/// `N(i) = sigma^2 * (i - 3) / (i - 2) * N(i - 2)`.
///
/// ### Errors
/// - [`ConvolutionError::UnsupportedExponent`] if `i` lies outside
///   `MIN_KERNEL_EXPONENT..=MAX_KERNEL_EXPONENT`. Below 2 the reduction never
///   reaches a base case.
/// - [`ConvolutionError::NonPositiveSigma`] or [`ConvolutionError::NonFinite`]
///   for a bad `sigma`.
///
/// [`ConvolutionError::UnsupportedExponent`]: crate::ConvolutionError::UnsupportedExponent
/// [`ConvolutionError::NonPositiveSigma`]: crate::ConvolutionError::NonPositiveSigma
/// [`ConvolutionError::NonFinite`]: crate::ConvolutionError::NonFinite
///
/// # Examples
///
/// ```
/// use convolution_surface::normalization_factor;
///
/// assert_eq!(normalization_factor(3, 1.0).unwrap(), 2.0);
/// assert!(normalization_factor(1, 1.0).is_err());
/// ```
pub fn normalization_factor(i: u32, sigma: f64) -> ConvolutionResult<f64> {
    let i = ensure_exponent(i)?;
    let sigma = ensure_sigma(sigma)?;
    Ok(normalization_factor_unchecked(i, sigma))
}

/// Recursive reduction behind [`normalization_factor`]. Requires a supported
/// exponent, which also bounds the recursion depth.
pub(crate) fn normalization_factor_unchecked(i: u32, sigma: f64) -> f64 {
    debug_assert!(i >= MIN_KERNEL_EXPONENT);

    match i {
        2 => sigma * sigma * PI,
        3 => sigma * sigma * sigma * 2.0,
        _ => {
            let i_f = i as f64;
            sigma * sigma * (i_f - 3.0) / (i_f - 2.0) * normalization_factor_unchecked(i - 2, sigma)
        }
    }
}
