/////////////////////////////////////////////////////////////////////////////////////////////
//
// Implements the power-inverse segment kernel and the per-point density evaluator.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use crate::{
    config::{ensure_exponent, KernelParams},
    convolution::power_inverse_convolution,
    error::{ensure_finite, ensure_sigma, ConvolutionResult},
    normalization::normalization_factor_unchecked,
    segment::WeightedSegment,
};
use convolution_surface_utils::{binomial_expansion, Point2};

/// Evaluates the density contributed by one weighted segment at a query point.
pub trait SegmentKernel {
    fn evaluate(&self, segment: &WeightedSegment, p: Point2) -> ConvolutionResult<f64>;
}

/// Converts a shared [`KernelParams`] configuration into a concrete kernel type.
pub trait KernelFromParams: Sized {
    /// Constructs `Self` from a set of kernel parameters, validating them first.
    fn from_params(p: &KernelParams) -> ConvolutionResult<Self>;
}

/// Power-inverse convolution kernel: the line integral of
/// `weight(t)^(i - 1) / |P - X(t)|^i` along a segment, normalized by the kernel
/// integral for the configured `sigma`.
#[derive(Clone, Debug, PartialEq)]
pub struct PowerInverseKernel {
    // user inputs
    exponent: u32,
    sigma: f64,

    // derived (computed once)
    coefficients: Vec<u64>, // binomial coefficients of degree exponent - 1
    normalization: f64,     // normalization_factor(exponent, sigma)
}

impl PowerInverseKernel {
    /// Creates a kernel with the given exponent and smoothing scale.
    pub fn new(exponent: u32, sigma: f64) -> ConvolutionResult<Self> {
        let exponent = ensure_exponent(exponent)?;
        let sigma = ensure_sigma(sigma)?;

        Ok(Self {
            exponent,
            sigma,
            coefficients: binomial_expansion(exponent - 1),
            normalization: normalization_factor_unchecked(exponent, sigma),
        })
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// The constant the dimensionless integral is divided by.
    pub fn normalization(&self) -> f64 {
        self.normalization
    }

    /// Returns the line integral in sigma units, before normalization.
    ///
    /// Coordinates and weights are divided by `sigma`, the segment is oriented
    /// from its lighter to its heavier endpoint, and the weight power
    /// `(tau_0 + delta_tau * t)^(i - 1)` is expanded binomially so that each
    /// term is one member of the [`power_inverse_convolution`] family.
    ///
    /// This value is unchanged when every coordinate, both weights and `sigma`
    /// are scaled by the same positive factor.
    pub fn dimensionless_integral(
        &self,
        segment: &WeightedSegment,
        p: Point2,
    ) -> ConvolutionResult<f64> {
        segment.validate()?;
        ensure_finite("p_x", p.x)?;
        ensure_finite("p_y", p.y)?;

        let scaled = segment.scaled_by_inverse(self.sigma).ordered_by_weight();
        // Distinct endpoints can still collapse once divided by a huge sigma.
        scaled.ensure_distinct_endpoints()?;
        let p = p.scaled_by_inverse(self.sigma);

        let (tau_0, delta_tau) = scaled.weight_ramp();
        let i = self.exponent;

        let mut val = 0.0;
        for (k, &coeff) in self.coefficients.iter().enumerate() {
            let k = k as u32;
            let convolution = power_inverse_convolution(k, i, scaled.a, scaled.b, p);
            val += coeff as f64
                * delta_tau.powi(k as i32)
                * tau_0.powi((i - k - 1) as i32)
                * convolution;
        }

        Ok(val)
    }
}

impl SegmentKernel for PowerInverseKernel {
    /// Returns the density contributed by `segment` at `p`.
    ///
    /// Collinear query points contribute exactly `0.0`. Query points extremely
    /// close to an endpoint produce large magnitudes; these are returned as-is.
    fn evaluate(&self, segment: &WeightedSegment, p: Point2) -> ConvolutionResult<f64> {
        let density = self.dimensionless_integral(segment, p)? / self.normalization;
        tracing::trace!(
            exponent = self.exponent,
            sigma = self.sigma,
            density,
            "evaluated segment density"
        );
        Ok(density)
    }
}

impl KernelFromParams for PowerInverseKernel {
    fn from_params(p: &KernelParams) -> ConvolutionResult<Self> {
        Self::new(p.exponent, p.sigma)
    }
}

/// Returns the density at `(p_x, p_y)` contributed by the segment from
/// `(a_x, a_y)` with weight `a_radius` to `(b_x, b_y)` with weight `b_radius`,
/// using the exponent-3 power-inverse kernel at smoothing scale `sigma`.
///
/// ### Errors
/// An invalid-argument [`ConvolutionError`](crate::ConvolutionError) if `sigma <= 0`,
/// the endpoints coincide, a weight is negative, or any input is not finite.
///
/// # Examples
///
/// ```
/// use convolution_surface::get_integral_at_point;
///
/// let density = get_integral_at_point(0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.5, 1.0, 1.0)?;
/// assert!((density - 1.0 / 5f64.sqrt()).abs() < 1e-12);
/// # Ok::<(), convolution_surface::ConvolutionError>(())
/// ```
#[allow(clippy::too_many_arguments)]
pub fn get_integral_at_point(
    a_x: f64,
    a_y: f64,
    a_radius: f64,
    b_x: f64,
    b_y: f64,
    b_radius: f64,
    p_x: f64,
    p_y: f64,
    sigma: f64,
) -> ConvolutionResult<f64> {
    let params = KernelParams::builder().sigma(sigma).build()?;
    let kernel = PowerInverseKernel::from_params(&params)?;

    let segment = WeightedSegment::new(
        Point2::new(a_x, a_y),
        a_radius,
        Point2::new(b_x, b_y),
        b_radius,
    );
    kernel.evaluate(&segment, Point2::new(p_x, p_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvolutionError;
    use crate::normalization::normalization_factor;
    use approx::assert_relative_eq;
    use convolution_surface_utils::{dist, vect};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_segment(rng: &mut StdRng) -> (WeightedSegment, Point2) {
        loop {
            let a = Point2::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0));
            let b = Point2::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0));
            let p = Point2::new(rng.random_range(-8.0..8.0), rng.random_range(-8.0..8.0));
            if dist(a, b) > 0.5 {
                let segment = WeightedSegment::new(
                    a,
                    rng.random_range(0.0..3.0),
                    b,
                    rng.random_range(0.0..3.0),
                );
                return (segment, p);
            }
        }
    }

    /// Simpson's rule for `|AB| ∫₀¹ (tau_0 + delta_tau t)^(i-1) / |P - X(t)|^i dt`
    /// in sigma units.
    fn reference_integral(i: u32, segment: &WeightedSegment, p: Point2, sigma: f64) -> f64 {
        let s = segment.scaled_by_inverse(sigma);
        let p = p.scaled_by_inverse(sigma);
        let ab = vect(s.a, s.b);
        let f = |t: f64| {
            let x = Point2::new(s.a.x + t * ab.x, s.a.y + t * ab.y);
            let weight = s.a_weight + (s.b_weight - s.a_weight) * t;
            weight.powi(i as i32 - 1) / dist(x, p).powi(i as i32)
        };

        let n = 20_000;
        let h = 1.0 / n as f64;
        let mut sum = f(0.0) + f(1.0);
        for j in 1..n {
            let w = if j % 2 == 1 { 4.0 } else { 2.0 };
            sum += w * f(j as f64 * h);
        }
        dist(s.a, s.b) * sum * h / 3.0
    }

    #[test]
    fn equal_weights_above_unit_segment() {
        let first = get_integral_at_point(0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.5, 1.0, 1.0).unwrap();
        let second = get_integral_at_point(0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.5, 1.0, 1.0).unwrap();

        assert!(first.is_finite() && first > 0.0);
        assert_eq!(first.to_bits(), second.to_bits());
        // ∫ dx / (x^2 + 1)^(3/2) over [-1/2, 1/2] is 2 / √5, halved by the normalization.
        assert_relative_eq!(first, 1.0 / 5f64.sqrt(), max_relative = 1e-14);
    }

    #[test]
    fn density_decays_away_from_segment() {
        let near = get_integral_at_point(0.0, 0.0, 0.1, 10.0, 0.0, 0.1, 5.0, 100.0, 1.0).unwrap();
        let far = get_integral_at_point(0.0, 0.0, 0.1, 10.0, 0.0, 0.1, 5.0, 200.0, 1.0).unwrap();
        let farther = get_integral_at_point(0.0, 0.0, 0.1, 10.0, 0.0, 0.1, 5.0, 400.0, 1.0).unwrap();

        assert!(near > 0.0 && near < 1e-6);
        assert!(far < near && farther < far);
    }

    #[test]
    fn density_vanishes_as_sigma_grows() {
        let mut previous = f64::INFINITY;
        for sigma in [1.0, 10.0, 100.0, 1000.0] {
            let density = get_integral_at_point(0.0, 0.0, 1.0, 1.0, 0.0, 2.0, 0.5, 1.0, sigma).unwrap();
            assert!(density > 0.0 && density < previous);
            previous = density;
        }
        assert!(previous < 1e-8);
    }

    #[test]
    fn swapping_endpoints_with_weights_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(7);
        let kernel = PowerInverseKernel::new(3, 1.5).unwrap();

        for _ in 0..200 {
            let (segment, p) = random_segment(&mut rng);
            let forward = kernel.evaluate(&segment, p).unwrap();
            let backward = kernel.evaluate(&segment.reversed(), p).unwrap();
            assert_relative_eq!(forward, backward, max_relative = 1e-9, epsilon = 1e-300);
        }
    }

    #[test]
    fn swapping_unequal_weights_is_bit_identical() {
        let forward = get_integral_at_point(0.0, 0.0, 0.5, 3.0, 1.0, 2.0, 1.0, 2.0, 1.0).unwrap();
        let backward = get_integral_at_point(3.0, 1.0, 2.0, 0.0, 0.0, 0.5, 1.0, 2.0, 1.0).unwrap();
        assert_eq!(forward.to_bits(), backward.to_bits());
    }

    #[test]
    fn dimensionless_integral_is_scale_invariant() {
        let mut rng = StdRng::seed_from_u64(11);
        let sigma = 0.8;

        for c in [2.0, 3.0, 0.1] {
            let kernel = PowerInverseKernel::new(3, sigma).unwrap();
            let scaled_kernel = PowerInverseKernel::new(3, c * sigma).unwrap();

            for _ in 0..50 {
                let (segment, p) = random_segment(&mut rng);
                let scaled_segment = WeightedSegment::new(
                    Point2::new(c * segment.a.x, c * segment.a.y),
                    c * segment.a_weight,
                    Point2::new(c * segment.b.x, c * segment.b.y),
                    c * segment.b_weight,
                );
                let scaled_p = Point2::new(c * p.x, c * p.y);

                let base = kernel.dimensionless_integral(&segment, p).unwrap();
                let scaled = scaled_kernel.dimensionless_integral(&scaled_segment, scaled_p).unwrap();
                assert_relative_eq!(base, scaled, max_relative = 1e-9, epsilon = 1e-300);

                // The returned density carries the sigma^-3 of the normalization.
                let density = kernel.evaluate(&segment, p).unwrap();
                let scaled_density = scaled_kernel.evaluate(&scaled_segment, scaled_p).unwrap();
                assert_relative_eq!(
                    scaled_density,
                    density / (c * c * c),
                    max_relative = 1e-9,
                    epsilon = 1e-300
                );
            }
        }
    }

    #[test]
    fn matches_quadrature_for_supported_exponents() {
        let segment = WeightedSegment::new(Point2::new(-1.0, 0.5), 0.4, Point2::new(2.0, -0.5), 1.7);
        let p = Point2::new(0.3, 2.1);
        let sigma = 1.25;

        for exponent in 2..=6 {
            let kernel = PowerInverseKernel::new(exponent, sigma).unwrap();
            let reference = reference_integral(exponent, &segment, p, sigma);

            assert_relative_eq!(
                kernel.dimensionless_integral(&segment, p).unwrap(),
                reference,
                max_relative = 1e-8
            );
            assert_relative_eq!(
                kernel.evaluate(&segment, p).unwrap(),
                reference / normalization_factor(exponent, sigma).unwrap(),
                max_relative = 1e-8
            );
        }
    }

    #[test]
    fn collinear_query_contributes_nothing() {
        assert_eq!(
            get_integral_at_point(0.0, 0.0, 1.0, 1.0, 0.0, 2.0, 2.0, 0.0, 1.0).unwrap(),
            0.0
        );
        assert_eq!(
            get_integral_at_point(0.0, 0.0, 1.0, 1.0, 0.0, 2.0, 0.0, 0.0, 1.0).unwrap(),
            0.0
        );
    }

    #[test]
    fn rounded_collinear_query_contributes_nothing() {
        for (p_x, p_y) in [(0.7, 2.1), (1.1, 3.3)] {
            let density = get_integral_at_point(0.0, 0.0, 1.0, 0.1, 0.3, 2.0, p_x, p_y, 1.0).unwrap();
            assert_eq!(density, 0.0);

            let kernel = PowerInverseKernel::new(5, 0.3).unwrap();
            let segment = WeightedSegment::new(Point2::new(0.0, 0.0), 1.0, Point2::new(0.1, 0.3), 2.0);
            assert_eq!(kernel.evaluate(&segment, Point2::new(p_x, p_y)).unwrap(), 0.0);
        }
    }

    #[test]
    fn swapping_equal_weights_is_bit_identical() {
        let mut rng = StdRng::seed_from_u64(13);
        let kernel = PowerInverseKernel::new(4, 0.9).unwrap();

        for _ in 0..100 {
            let (segment, p) = random_segment(&mut rng);
            let segment = WeightedSegment { b_weight: segment.a_weight, ..segment };
            let forward = kernel.evaluate(&segment, p).unwrap();
            let backward = kernel.evaluate(&segment.reversed(), p).unwrap();
            assert_eq!(forward.to_bits(), backward.to_bits());
        }
    }

    #[test]
    fn zero_weights_contribute_nothing() {
        assert_eq!(
            get_integral_at_point(0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.5, 1.0, 1.0).unwrap(),
            0.0
        );
    }

    #[test]
    fn from_params_uses_configured_values() {
        let params = KernelParams::builder().exponent(4).sigma(2.0).build().unwrap();
        let kernel = PowerInverseKernel::from_params(&params).unwrap();
        assert_eq!(kernel.exponent(), 4);
        assert_eq!(kernel.sigma(), 2.0);
        assert_relative_eq!(kernel.normalization(), normalization_factor(4, 2.0).unwrap());

        let invalid = KernelParams {
            exponent: 13,
            sigma: 1.0,
        };
        assert!(PowerInverseKernel::from_params(&invalid).is_err());
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        assert_eq!(
            get_integral_at_point(0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.5, 1.0, 0.0),
            Err(ConvolutionError::NonPositiveSigma(0.0))
        );
        assert_eq!(
            get_integral_at_point(0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.5, 1.0, -2.0),
            Err(ConvolutionError::NonPositiveSigma(-2.0))
        );
        assert_eq!(
            get_integral_at_point(1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0),
            Err(ConvolutionError::CoincidentEndpoints { x: 1.0, y: 1.0 })
        );
        assert_eq!(
            get_integral_at_point(0.0, 0.0, -1.0, 1.0, 0.0, 1.0, 0.5, 1.0, 1.0),
            Err(ConvolutionError::NegativeWeight {
                name: "a_radius",
                value: -1.0
            })
        );
        assert!(matches!(
            get_integral_at_point(0.0, 0.0, 1.0, 1.0, 0.0, 1.0, f64::NAN, 1.0, 1.0),
            Err(ConvolutionError::NonFinite { name: "p_x", .. })
        ));
        assert!(matches!(
            get_integral_at_point(0.0, f64::INFINITY, 1.0, 1.0, 0.0, 1.0, 0.5, 1.0, 1.0),
            Err(ConvolutionError::NonFinite { name: "a_y", .. })
        ));
        assert!(matches!(
            get_integral_at_point(0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.5, 1.0, f64::NAN),
            Err(ConvolutionError::NonFinite { name: "sigma", .. })
        ));
    }

    #[test]
    fn endpoints_collapsing_under_huge_sigma_are_rejected() {
        let kernel = PowerInverseKernel::new(3, f64::MAX).unwrap();
        // 1 / f64::MAX is subnormal, so the squared length underflows to zero.
        let segment = WeightedSegment::new(Point2::new(0.0, 0.0), 1.0, Point2::new(1.0, 0.0), 1.0);
        assert!(segment.validate().is_ok());
        assert!(matches!(
            kernel.evaluate(&segment, Point2::new(0.0, 1.0)),
            Err(ConvolutionError::CoincidentEndpoints { .. })
        ));
    }
}
