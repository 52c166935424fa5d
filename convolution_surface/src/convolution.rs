/////////////////////////////////////////////////////////////////////////////////////////////
//
// Implements the closed-form recursive line integrals of the power-inverse kernel.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

//! Closed-form line integrals of the power-inverse kernel along a segment.
//!
//! For a segment `A -> B` and a query point `P`, the family
//!
//! ```text
//! I(k, i) = |AB| * ∫₀¹ tᵏ / |P - (A + t·AB)|ⁱ dt
//! ```
//!
//! is evaluated by reduction of order: every branch trades the exponent `i`
//! (or the moment `k`) for a simpler member of the family plus boundary terms
//! evaluated at the two endpoints, down to the closed forms `I(0, 1)` (a
//! logarithm) and `I(0, 2)` (a pair of arctangents).

use convolution_surface_utils::{cross, dist, dist2, dot, vect, Point2};

/// Relative size of `|AB × AP|` below which `P` is treated as lying on the
/// segment's line. A few ulps absorbs the rounding of non-representable inputs.
const COLLINEAR_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Geometric quantities shared by every member of the integral family for one
/// `(A, B, P)` configuration.
#[derive(Clone, Copy, Debug)]
struct SegmentFrame {
    /// `|AB|`
    len: f64,
    /// `|AB|^2`
    len2: f64,
    /// `|AP|`
    dist_ap: f64,
    /// `|AP|^2`
    dist_ap2: f64,
    /// `|BP|`
    dist_bp: f64,
    /// `AB · AP`
    ab_ap: f64,
    /// `BA · BP`
    ba_bp: f64,
    /// `|AB|^2 |AP|^2 - (AB · AP)^2`, four times the squared area of triangle ABP.
    discriminant: f64,
}

impl SegmentFrame {
    #[inline]
    fn new(a: Point2, b: Point2, p: Point2) -> Self {
        let len2 = dist2(a, b);
        let dist_ap2 = dist2(a, p);
        let ab = vect(a, b);
        let ap = vect(a, p);
        let ab_ap = dot(ab, ap);
        // Equal to len2 * dist_ap2 - ab_ap^2, without the cancellation.
        let area = cross(ab, ap);

        Self {
            len: dist(a, b),
            len2,
            dist_ap: dist(a, p),
            dist_ap2,
            dist_bp: dist(b, p),
            ab_ap,
            ba_bp: dot(vect(b, a), vect(b, p)),
            discriminant: area * area,
        }
    }

    /// `P` lies on the line through `A` and `B` (or `A = B`, or `P = A`), up to
    /// rounding of the inputs.
    #[inline]
    fn is_degenerate(&self) -> bool {
        self.discriminant <= COLLINEAR_TOLERANCE * COLLINEAR_TOLERANCE * self.len2 * self.dist_ap2
    }

    /// `I(0, 1)`, the logarithm of `(|AB||BP| + BA·BP) / (|AB||AP| - AB·AP)`.
    ///
    /// Each side is rewritten through the discriminant whenever its direct
    /// form would subtract nearly equal terms.
    fn log_ratio(&self) -> f64 {
        let numerator = if self.ba_bp >= 0.0 {
            self.len * self.dist_bp + self.ba_bp
        } else {
            self.discriminant / (self.len * self.dist_bp - self.ba_bp)
        };
        let denominator = if self.ab_ap <= 0.0 {
            self.len * self.dist_ap - self.ab_ap
        } else {
            self.discriminant / (self.len * self.dist_ap + self.ab_ap)
        };

        if numerator > 0.0 && denominator > 0.0 {
            (numerator / denominator).ln()
        } else {
            tracing::trace!(numerator, denominator, "logarithm argument collapsed to zero");
            0.0
        }
    }

    /// Evaluates `I(k, i)`. Assumes a positive discriminant.
    fn integral(&self, k: u32, i: u32) -> f64 {
        debug_assert!(i >= 1 && k < i, "invalid integral index ({k}, {i})");

        let i_f = i as f64;
        let k_f = k as f64;

        match (k, i) {
            (0, 1) => self.log_ratio(),
            (0, 2) => {
                let root = self.discriminant.sqrt();
                ((self.ba_bp / root).atan() + (self.ab_ap / root).atan()) * self.len / root
            }
            (0, _) => {
                self.len / (i_f - 2.0) / self.discriminant
                    * ((i_f - 3.0) * self.len * self.integral(0, i - 2)
                        + self.ba_bp / self.dist_bp.powi(i as i32 - 2)
                        + self.ab_ap / self.dist_ap.powi(i as i32 - 2))
            }
            (1, 2) => {
                self.ab_ap / self.len2 * self.integral(0, 2)
                    + (self.dist_bp / self.dist_ap).ln() / self.len
            }
            (1, _) => {
                let power = 2 - i as i32;
                self.ab_ap / self.len2 * self.integral(0, i)
                    + (self.dist_bp.powi(power) - self.dist_ap.powi(power)) / self.len / (2.0 - i_f)
            }
            (k, i) if k == i - 1 => {
                self.ab_ap / self.len2 * self.integral(i - 2, i)
                    + self.integral(i - 3, i - 2) / self.len2
                    + self.dist_bp.powi(2 - i as i32) / (2.0 - i_f) / self.len
            }
            (k, i) => {
                // 1 < k < i - 1. The rational coefficients use real division.
                let denom = i_f - k_f - 1.0;
                (i_f - 2.0 * k_f) / denom * self.ab_ap / self.len2 * self.integral(k - 1, i)
                    + (k_f - 1.0) / denom * self.dist_ap2 / self.len2 * self.integral(k - 2, i)
                    - self.dist_bp.powi(2 - i as i32) / self.len / denom
            }
        }
    }
}

/// Evaluates `|AB| * ∫₀¹ tᵏ / |P - (A + t·AB)|ⁱ dt` in closed form.
///
/// Returns `0.0` whenever the discriminant
/// `dist2(A, B) * dist2(A, P) - dot(AB, AP)^2` vanishes relative to
/// `dist2(A, B) * dist2(A, P)`, i.e. when `P` is collinear with the segment
/// (including `P` at an endpoint, and up to rounding of the coordinates) or `A = B`.
/// The contribution of such configurations is defined to vanish.
///
/// ### Preconditions
/// - `i >= 1` and `k < i` (debug-asserted).
/// - `A != B`; callers are expected to have rejected zero-length segments.
///
/// ### Precision
/// When `P` approaches an endpoint without being collinear, the boundary terms
/// grow like `|AP|^(2 - i)` and the result can become very large. No clamping
/// is applied. Just outside the tolerance band around the segment's line,
/// the higher-order terms cancel heavily and only finiteness is guaranteed.
///
/// # Examples
///
/// ```
/// use convolution_surface::power_inverse_convolution;
/// use convolution_surface_utils::Point2;
///
/// let a = Point2::new(0.0, 0.0);
/// let b = Point2::new(1.0, 0.0);
///
/// // Collinear with the segment: no contribution.
/// assert_eq!(power_inverse_convolution(0, 3, a, b, Point2::new(2.0, 0.0)), 0.0);
///
/// // Off the line: a finite, positive integral.
/// let v = power_inverse_convolution(0, 3, a, b, Point2::new(0.5, 1.0));
/// assert!(v.is_finite() && v > 0.0);
/// ```
pub fn power_inverse_convolution(k: u32, i: u32, a: Point2, b: Point2, p: Point2) -> f64 {
    let frame = SegmentFrame::new(a, b, p);

    if frame.is_degenerate() {
        tracing::trace!(
            discriminant = frame.discriminant,
            "query point collinear with segment, contribution vanishes"
        );
        return 0.0;
    }

    frame.integral(k, i)
}
