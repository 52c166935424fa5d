/////////////////////////////////////////////////////////////////////////////////////////////
//
// Provides parameter and builder types for configuring the power-inverse segment kernel.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Provides parameter and builder types for configuring the power-inverse segment kernel.
use crate::error::{ensure_sigma, ConvolutionError, ConvolutionResult};
use convolution_surface_utils::constants::{
    DEFAULT_KERNEL_EXPONENT, MAX_KERNEL_EXPONENT, MIN_KERNEL_EXPONENT,
};
use serde::{Deserialize, Serialize};

/// Parameters of the power-inverse segment kernel.
///
/// ### Default Values
/// - `exponent`: `3`
/// - `sigma`: `1.0`
///
/// Missing fields take their defaults when deserializing, so a partial
/// configuration such as `{"sigma": 4.0}` is accepted. Deserialized values
/// are not checked until [`KernelParams::validate`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelParams {
    /// Power of the inverse-distance falloff. The kernel decays as `1 / r^exponent`
    /// and the segment weight enters the integrand as `weight^(exponent - 1)`.
    ///
    /// Only `3` is used by the flat [`crate::get_integral_at_point`] entry point.
    pub exponent: u32,

    /// Smoothing scale. All coordinates and weights are divided by `sigma` before
    /// integration, and the result is divided by the kernel normalization for
    /// this `sigma`. Larger values spread and flatten the field.
    pub sigma: f64,
}

impl Default for KernelParams {
    fn default() -> Self {
        KernelParams {
            exponent: DEFAULT_KERNEL_EXPONENT,
            sigma: 1.0,
        }
    }
}

impl KernelParams {
    /// Begins building a [`KernelParams`] instance from the defaults.
    pub fn builder() -> KernelParamsBuilder {
        KernelParamsBuilder {
            exponent: DEFAULT_KERNEL_EXPONENT,
            sigma: 1.0,
        }
    }

    /// Checks that the exponent is supported and that sigma is finite and positive.
    pub fn validate(&self) -> ConvolutionResult<()> {
        ensure_exponent(self.exponent)?;
        ensure_sigma(self.sigma)?;
        Ok(())
    }
}

/// Builder for [`KernelParams`] that starts from the defaults.
#[derive(Debug, Clone, Copy)]
pub struct KernelParamsBuilder {
    exponent: u32,
    sigma: f64,
}

impl KernelParamsBuilder {
    /// Sets the kernel exponent.
    pub fn exponent(mut self, v: u32) -> Self {
        self.exponent = v;
        self
    }

    /// Sets the smoothing scale.
    pub fn sigma(mut self, v: f64) -> Self {
        self.sigma = v;
        self
    }

    /// Finalises the builder, rejecting unsupported values.
    pub fn build(self) -> ConvolutionResult<KernelParams> {
        let params = KernelParams {
            exponent: self.exponent,
            sigma: self.sigma,
        };
        params.validate()?;
        Ok(params)
    }
}

pub(crate) fn ensure_exponent(exponent: u32) -> ConvolutionResult<u32> {
    if (MIN_KERNEL_EXPONENT..=MAX_KERNEL_EXPONENT).contains(&exponent) {
        Ok(exponent)
    } else {
        tracing::debug!(exponent, "rejecting unsupported kernel exponent");
        Err(ConvolutionError::UnsupportedExponent {
            exponent,
            min: MIN_KERNEL_EXPONENT,
            max: MAX_KERNEL_EXPONENT,
        })
    }
}
