/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines exponent limits and defaults for the power-inverse segment kernel.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Exponent limits and defaults for the power-inverse segment kernel.

/// Kernel exponent used when none is configured. The falloff is `1 / r^3`.
pub const DEFAULT_KERNEL_EXPONENT: u32 = 3;

/// Smallest exponent with a closed-form normalization (`sigma^2 * pi`).
pub const MIN_KERNEL_EXPONENT: u32 = 2;

/// Largest exponent accepted by the evaluator.
///
/// The recursive integral family has been checked against numerical quadrature
/// well inside this range; beyond it the boundary terms lose precision quickly.
pub const MAX_KERNEL_EXPONENT: u32 = 12;

/// Largest degree for which every intermediate `coeff[k] * (n - k)` of
/// [`crate::binomial_expansion`] fits in a `u64`.
pub const MAX_BINOMIAL_DEGREE: u32 = 62;
