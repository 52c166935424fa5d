/////////////////////////////////////////////////////////////////////////////////////////////
//
// Implements the planar point type and vector helpers used by the segment kernel.
//
// Created on: 19 Oct 2026     Author: Daniel Owen
//
// Copyright (c) 2025, Maptek Pty Ltd. All rights reserved. Licensed under the MIT License.
//
/////////////////////////////////////////////////////////////////////////////////////////////

use serde::{Deserialize, Serialize};

/// A point (or displacement vector) in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Divides both coordinates by `scale`.
    ///
    /// Uses division rather than multiplication by the reciprocal so that
    /// rescaled coordinates are exact whenever `scale` is a power of two.
    #[inline(always)]
    pub fn scaled_by_inverse(self, scale: f64) -> Self {
        Self {
            x: self.x / scale,
            y: self.y / scale,
        }
    }

    /// Returns `true` if both coordinates are finite.
    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point2 {
    fn from(v: [f64; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

/// Returns the displacement vector `b - a`.
///
/// # Examples
///
/// ```
/// use convolution_surface_utils::{Point2, vect};
///
/// let v = vect(Point2::new(1.0, 2.0), Point2::new(4.0, 6.0));
/// assert_eq!(v, Point2::new(3.0, 4.0));
/// ```
#[inline(always)]
pub fn vect(a: Point2, b: Point2) -> Point2 {
    Point2::new(b.x - a.x, b.y - a.y)
}

/// Returns the scalar product of two vectors.
#[inline(always)]
pub fn dot(a: Point2, b: Point2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Returns the z component of the cross product of two planar vectors.
///
/// Its magnitude is twice the area of the triangle the vectors span.
#[inline(always)]
pub fn cross(a: Point2, b: Point2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns the squared euclidean distance between two points.
#[inline(always)]
pub fn dist2(a: Point2, b: Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

/// Calculates the euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use convolution_surface_utils::{Point2, dist};
///
/// let d = dist(Point2::new(1.0, 2.0), Point2::new(4.0, 6.0));
/// assert_eq!(d, 5.0);
/// ```
#[inline(always)]
pub fn dist(a: Point2, b: Point2) -> f64 {
    dist2(a, b).sqrt()
}
