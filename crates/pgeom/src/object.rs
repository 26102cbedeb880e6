//! Projective objects and their coordinate algebra
//!
//! Points and lines of the projective plane are both 1-dimensional subspaces of K³,
//! stored as a homogeneous coordinate triple.
//! The same operations serve both kinds:
//! the cross product of two points is the line through them (join)
//! and the cross product of two lines is the point they share (meet).
//!
//! Coordinates are compared projectively: `[1, 2, 3]` and `[2, 4, 6]`
//! are the same object.
//! The all-zero triple is the distinguished NaN object.
//! It results from joining a point with itself (or meeting a line with itself)
//! and is equal only to another NaN object.

use crate::error::{GeomError, Result};
use crate::scalar::Ring;

/// 1st term of the cross product
#[inline]
pub fn cross0<K: Ring>(v: &[K; 3], w: &[K; 3]) -> K {
    v[1].clone() * w[2].clone() - w[1].clone() * v[2].clone()
}

/// 2nd term of the cross product (before its sign flip)
#[inline]
pub fn cross1<K: Ring>(v: &[K; 3], w: &[K; 3]) -> K {
    v[0].clone() * w[2].clone() - w[0].clone() * v[2].clone()
}

/// 3rd term of the cross product
#[inline]
pub fn cross2<K: Ring>(v: &[K; 3], w: &[K; 3]) -> K {
    v[0].clone() * w[1].clone() - w[0].clone() * v[1].clone()
}

/// Cross product `v × w`
///
/// The middle term is negated so that points and lines
/// share a single, duality-consistent product.
#[inline]
pub fn cross<K: Ring>(v: &[K; 3], w: &[K; 3]) -> [K; 3] {
    [cross0(v, w), -cross1(v, w), cross2(v, w)]
}

/// Dot product `v · w`
#[inline]
pub fn dot<K: Ring>(v: &[K; 3], w: &[K; 3]) -> K {
    let [x1, y1, z1] = v.clone();
    let [x2, y2, z2] = w.clone();
    x1 * x2 + y1 * y2 + z1 * z2
}

/// Dot product of the (0, 1) components
#[inline]
pub fn dot1<K: Ring>(v: &[K; 3], w: &[K; 3]) -> K {
    v[0].clone() * w[0].clone() + v[1].clone() * w[1].clone()
}

/// Dot product of the (0, 2) components
#[inline]
pub fn dot2<K: Ring>(v: &[K; 3], w: &[K; 3]) -> K {
    v[0].clone() * w[0].clone() + v[2].clone() * w[2].clone()
}

/// `λ·v + μ·w`, componentwise
pub fn plucker_coords<K: Ring>(lambda: K, v: &[K; 3], mu: K, w: &[K; 3]) -> [K; 3] {
    let [x1, y1, z1] = v.clone();
    let [x2, y2, z2] = w.clone();
    [
        lambda.clone() * x1 + mu.clone() * x2,
        lambda.clone() * y1 + mu.clone() * y2,
        lambda * z1 + mu * z2,
    ]
}

/// Whether every coordinate is zero
#[inline]
pub fn is_zero_coords<K: Ring>(v: &[K; 3]) -> bool {
    v.iter().all(Ring::is_zero)
}

/// Projective equality of two coordinate triples
///
/// Non-zero triples are equal when their cross product vanishes.
/// The all-zero triple is equal only to itself.
#[inline]
pub fn projective_eq<K: Ring>(v: &[K; 3], w: &[K; 3]) -> bool {
    match (is_zero_coords(v), is_zero_coords(w)) {
        (false, false) => is_zero_coords(&cross(v, w)),
        (v_nan, w_nan) => v_nan && w_nan,
    }
}

/// A point or line of the projective plane
///
/// This trait is usually derived with
/// [`#[derive(ProjectiveObject)]`](pgeom_macros::ProjectiveObject),
/// which also provides projective `PartialEq`
/// and `*` as the raw join / meet.
///
/// Each kind names its dual, and the dual of the dual is the kind itself:
/// the dual of [Point](crate::primitives::Point) is [Line](crate::primitives::Line)
/// and vice-versa.
pub trait ProjectiveObject: Clone + PartialEq {
    /// The coefficient type of the coordinates
    type Scalar: Ring;

    /// The dual kind of object
    type Dual: ProjectiveObject<Scalar = Self::Scalar, Dual = Self>;

    /// The homogeneous coordinates
    fn coords(&self) -> &[Self::Scalar; 3];

    /// Construct from homogeneous coordinates
    fn from_coords(coords: [Self::Scalar; 3]) -> Self;

    /// The dot product with a dual object
    #[inline]
    fn dot(&self, other: &Self::Dual) -> Self::Scalar {
        dot(self.coords(), other.coords())
    }

    /// Join of two points, or meet of two lines
    ///
    /// Coincident operands produce the NaN object.
    /// See [try_cross](ProjectiveObject::try_cross) for a checked version.
    #[inline]
    fn cross(&self, other: &Self) -> Self::Dual {
        <Self::Dual as ProjectiveObject>::from_coords(cross(self.coords(), other.coords()))
    }

    /// Join of two points, or meet of two lines,
    /// failing with [GeomError::Degenerate] when the operands coincide
    fn try_cross(&self, other: &Self) -> Result<Self::Dual> {
        let result = self.cross(other);
        if result.is_nan() {
            Err(GeomError::Degenerate)
        } else {
            Ok(result)
        }
    }

    /// Whether this is the all-zero NaN object
    #[inline]
    fn is_nan(&self) -> bool {
        is_zero_coords(self.coords())
    }

    /// A dual object that is generally not incident with `self`
    ///
    /// The coordinates are reinterpreted as the dual kind.
    /// This is incident with `self` only when the coordinates are isotropic
    /// (`x0² + x1² + x2² = 0`), which callers must tolerate.
    #[inline]
    fn aux(&self) -> Self::Dual {
        <Self::Dual as ProjectiveObject>::from_coords(self.coords().clone())
    }

    /// Whether `self` lies on (or passes through) `other`
    #[inline]
    fn incident(&self, other: &Self::Dual) -> bool {
        self.dot(other).is_zero()
    }
}

/// The Plücker combination `λ·v + μ·w`
///
/// Varying `λ` and `μ` sweeps every object of the pencil (or range) through `v` and `w`.
///
/// ```
/// use pgeom::prelude::*;
///
/// let p = Point::new(1, 2, 3);
/// let q = Point::new(4, 5, 6);
/// let r = plucker(2, &p, 3, &q);
/// assert!(coincident(&p, &q, &r));
/// ```
pub fn plucker<O: ProjectiveObject>(lambda: O::Scalar, v: &O, mu: O::Scalar, w: &O) -> O {
    O::from_coords(plucker_coords(lambda, v.coords(), mu, w.coords()))
}
