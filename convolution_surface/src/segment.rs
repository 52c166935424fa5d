/////////////////////////////////////////////////////////////////////////////////////////////
//
// Defines the weighted skeleton segment and its validation, rescaling, and ordering.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::error::{ensure_finite, ConvolutionError, ConvolutionResult};
use convolution_surface_utils::{dist2, Point2};
use serde::{Deserialize, Serialize};

/// A skeleton segment whose weight varies linearly from `a_weight` at `a` to
/// `b_weight` at `b`.
///
/// Weights are radius-like: they scale the influence of the segment and must
/// be non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightedSegment {
    pub a: Point2,
    pub a_weight: f64,
    pub b: Point2,
    pub b_weight: f64,
}

impl WeightedSegment {
    pub fn new(a: Point2, a_weight: f64, b: Point2, b_weight: f64) -> Self {
        Self {
            a,
            a_weight,
            b,
            b_weight,
        }
    }

    /// Checks that every coordinate and weight is finite, that both weights are
    /// non-negative, and that the endpoints are distinct.
    pub fn validate(&self) -> ConvolutionResult<()> {
        ensure_finite("a_x", self.a.x)?;
        ensure_finite("a_y", self.a.y)?;
        ensure_finite("a_radius", self.a_weight)?;
        ensure_finite("b_x", self.b.x)?;
        ensure_finite("b_y", self.b.y)?;
        ensure_finite("b_radius", self.b_weight)?;

        ensure_non_negative("a_radius", self.a_weight)?;
        ensure_non_negative("b_radius", self.b_weight)?;

        self.ensure_distinct_endpoints()
    }

    /// Divides both endpoints and both weights by `sigma`.
    pub fn scaled_by_inverse(&self, sigma: f64) -> Self {
        Self {
            a: self.a.scaled_by_inverse(sigma),
            a_weight: self.a_weight / sigma,
            b: self.b.scaled_by_inverse(sigma),
            b_weight: self.b_weight / sigma,
        }
    }

    /// Returns the segment oriented so that weight does not decrease from `a` to `b`.
    ///
    /// Equal weights put the lexicographically smaller endpoint (by `x`, then
    /// `y`) first, so a segment and its reverse always order identically.
    pub fn ordered_by_weight(&self) -> Self {
        let swap = if self.a_weight == self.b_weight {
            (self.b.x, self.b.y) < (self.a.x, self.a.y)
        } else {
            self.a_weight > self.b_weight
        };

        if swap {
            self.reversed()
        } else {
            *self
        }
    }

    /// Swaps the two endpoints along with their weights.
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            a_weight: self.b_weight,
            b: self.a,
            b_weight: self.a_weight,
        }
    }

    /// Weight at `a` (`tau_0`) and its change along the segment (`delta_tau`),
    /// after [`Self::ordered_by_weight`].
    pub fn weight_ramp(&self) -> (f64, f64) {
        let tau_0 = self.a_weight.min(self.b_weight);
        let delta_tau = (self.a_weight - self.b_weight).abs();
        (tau_0, delta_tau)
    }

    pub(crate) fn ensure_distinct_endpoints(&self) -> ConvolutionResult<()> {
        if dist2(self.a, self.b) > 0.0 {
            Ok(())
        } else {
            tracing::debug!(x = self.a.x, y = self.a.y, "rejecting zero-length segment");
            Err(ConvolutionError::CoincidentEndpoints {
                x: self.a.x,
                y: self.a.y,
            })
        }
    }
}

fn ensure_non_negative(name: &'static str, value: f64) -> ConvolutionResult<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        tracing::debug!(argument = name, value, "rejecting negative weight");
        Err(ConvolutionError::NegativeWeight { name, value })
    }
}
