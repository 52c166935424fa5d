/////////////////////////////////////////////////////////////////////////////////////////////
//
// Generates binomial coefficients used to expand the interpolated segment weight.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::constants::MAX_BINOMIAL_DEGREE;

/// Returns the `n + 1` coefficients of `(x + y)^n`, in ascending power of `y`.
///
/// Uses the multiplicative recurrence `c[k + 1] = c[k] * (n - k) / (k + 1)`.
/// The product is always formed before the division: `c[k] * (n - k)` is a
/// multiple of `k + 1`, so the integer division is exact only in that order.
///
/// # Panics
/// If `n > MAX_BINOMIAL_DEGREE`, where the intermediate product no longer fits
/// in a `u64`.
///
/// # Examples
///
/// ```
/// use convolution_surface_utils::binomial_expansion;
///
/// assert_eq!(binomial_expansion(2), vec![1, 2, 1]);
/// assert_eq!(binomial_expansion(4), vec![1, 4, 6, 4, 1]);
/// ```
pub fn binomial_expansion(n: u32) -> Vec<u64> {
    assert!(
        n <= MAX_BINOMIAL_DEGREE,
        "binomial degree {n} exceeds {MAX_BINOMIAL_DEGREE}"
    );

    let n = n as u64;
    let mut coeff = Vec::with_capacity(n as usize + 1);
    coeff.push(1u64);

    for k in 0..n {
        let product = coeff[k as usize] * (n - k);
        debug_assert!(product % (k + 1) == 0);
        coeff.push(product / (k + 1));
    }

    coeff
}
