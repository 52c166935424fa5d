/////////////////////////////////////////////////////////////////////////////////////////////
//
// Exposes the public API and high-level documentation for analytic convolution surface
// kernels over weighted skeleton segments.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Analytic convolution surface kernels for weighted segments.
//!
//! A convolution surface is the level set of a density field obtained by
//! convolving a kernel along a skeleton. For a skeleton made of line segments
//! whose weight (radius) varies linearly between the endpoints, the integral of
//! a power-inverse kernel along each segment has a closed form.
//!
//! This crate evaluates that closed form for one segment and one query point:
//!
//! - [`power_inverse_convolution`] - the recursive family of line integrals
//!   `|AB| ∫₀¹ tᵏ / |P - X(t)|ⁱ dt`, reduced to a logarithm or a pair of
//!   arctangents.
//! - [`normalization_factor`] - the kernel integral used to normalize the density.
//! - [`PowerInverseKernel`] - combines the two with a binomial expansion of the
//!   interpolated weight.
//! - [`get_integral_at_point`] - the flat, nine-scalar entry point using the
//!   exponent-3 kernel.
//!
//! Summing contributions over a skeleton, sampling grids and iso-surfacing are
//! left to the caller. Every function is pure, so evaluations can run
//! concurrently without coordination.
//!
//! # Examples
//!
//! ```
//! use convolution_surface::{
//!     KernelFromParams, KernelParams, PowerInverseKernel, SegmentKernel, WeightedSegment,
//! };
//! use convolution_surface_utils::Point2;
//!
//! let params = KernelParams::builder().sigma(2.0).build()?;
//! let kernel = PowerInverseKernel::from_params(&params)?;
//!
//! // Weight grows from 0.5 to 1.5 along the segment.
//! let segment = WeightedSegment::new(Point2::new(0.0, 0.0), 0.5, Point2::new(4.0, 0.0), 1.5);
//!
//! let near = kernel.evaluate(&segment, Point2::new(2.0, 1.0))?;
//! let far = kernel.evaluate(&segment, Point2::new(2.0, 5.0))?;
//! assert!(near > far && far > 0.0);
//!
//! // Points on the segment's line contribute nothing.
//! assert_eq!(kernel.evaluate(&segment, Point2::new(6.0, 0.0))?, 0.0);
//! # Ok::<(), convolution_surface::ConvolutionError>(())
//! ```
//!
//! # Precision
//! Query points very close to an endpoint (but off the segment's line) produce
//! large magnitudes from the `|AP|^(2 - i)` boundary terms. These are returned
//! unmodified.
pub mod config;

mod convolution;

mod error;

mod kernel;

mod normalization;

mod segment;

pub use {
    config::{KernelParams, KernelParamsBuilder},
    convolution::power_inverse_convolution,
    error::{ConvolutionError, ConvolutionResult},
    kernel::{get_integral_at_point, KernelFromParams, PowerInverseKernel, SegmentKernel},
    normalization::normalization_factor,
    segment::WeightedSegment,
};
