/////////////////////////////////////////////////////////////////////////////////////////////
//
// Re-exports geometry primitives, binomial helpers, and kernel constants used by the
// convolution_surface crate.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! # Utilities for the `convolution_surface` crate
//!
//! Small, dependency-light building blocks shared by the segment kernel:
//!
//! - [`Point2`] and the planar vector helpers [`vect`], [`dot`], [`cross`], [`dist2`]
//!   and [`dist`].
//! - [`binomial_expansion`], the coefficient table used to expand the linearly
//!   interpolated segment weight.
//! - Kernel exponent limits in [`constants`].
mod binomial;
mod geometry;

pub mod constants;

pub use {
    binomial::binomial_expansion,
    geometry::{Point2, cross, dist, dist2, dot, vect},
};
