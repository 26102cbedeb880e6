//! Incidence, perspectivity and cross-ratio in the projective plane
//!
//! Everything here is written once for any [ProjectiveObject],
//! so each function has a dual reading:
//! [coincident] asks whether three points are collinear,
//! or whether three lines are concurrent.

use crate::error::{GeomError, Result};
use crate::object::{cross0, cross1, plucker, ProjectiveObject};
use crate::scalar::{Quotient, Ratio, Ring};

/// A triangle (three points) or trilateral (three lines)
pub type Triple<T> = (T, T, T);

/// Whether `o` lies on (or passes through) `d`
#[inline]
pub fn incident<O: ProjectiveObject>(o: &O, d: &O::Dual) -> bool {
    o.incident(d)
}

/// Whether three points are collinear, or three lines are concurrent
///
/// Two coincident arguments count as coincident with anything.
pub fn coincident<O: ProjectiveObject>(p: &O, q: &O, r: &O) -> bool {
    r.incident(&p.cross(q))
}

/// Whether every object in `objs` is incident with `l`
pub fn coincident_all<'a, O, I>(l: &O::Dual, objs: I) -> bool
where
    O: ProjectiveObject + 'a,
    I: IntoIterator<Item = &'a O>,
{
    objs.into_iter().all(|o| o.incident(l))
}

/// Apply `f` to each pair of a triple, in the order `(2, 3), (1, 3), (1, 2)`
///
/// The i-th result is "opposite" the i-th element.
pub fn tri_func<T, R>(f: impl Fn(&T, &T) -> R, tri: &Triple<T>) -> Triple<R> {
    let (a1, a2, a3) = tri;
    (f(a2, a3), f(a1, a3), f(a1, a2))
}

/// The trilateral of a triangle, or the triangle of a trilateral
///
/// ```
/// use pgeom::prelude::*;
/// use pgeom::proj_plane::tri_dual;
///
/// let tri = (Point::new(1, 0, 1), Point::new(0, 1, 1), Point::new(0, 0, 1));
/// let (l1, _, _) = tri_dual(&tri);
/// assert!(tri.1.incident(&l1) && tri.2.incident(&l1));
/// ```
pub fn tri_dual<O: ProjectiveObject>(tri: &Triple<O>) -> Triple<O::Dual> {
    tri_func(|a, b| a.cross(b), tri)
}

/// Whether two triangles (or trilaterals) are in perspective
///
/// The lines joining corresponding vertices `A-D`, `B-E`, `C-F`
/// must pass through a common center.
pub fn persp<O: ProjectiveObject>(tri1: &Triple<O>, tri2: &Triple<O>) -> bool {
    let (a, b, c) = tri1;
    let (d, e, f) = tri2;
    let o = a.cross(d).cross(&b.cross(e));
    o.incident(&c.cross(f))
}

/// `(a/b) / (c/d)`
///
/// Integral coefficients give an exact [Fraction](crate::fraction::Fraction),
/// see [Ratio::ratio_ratio].
pub fn ratio_ratio<K: Ratio>(a: K, b: K, c: K, d: K) -> Quotient<K> {
    K::ratio_ratio(a, b, c, d)
}

/// The ratio of ratios of `A` and `B` measured against the dual objects `l` and `m`
pub fn x_ratio<O>(a: &O, b: &O, l: &O::Dual, m: &O::Dual) -> Quotient<O::Scalar>
where
    O: ProjectiveObject,
    O::Scalar: Ratio,
{
    ratio_ratio(a.dot(l), a.dot(m), b.dot(l), b.dot(m))
}

/// Cross-ratio `R(A, B; C, D)` of four collinear points (or four concurrent lines)
///
/// ```
/// use pgeom::prelude::*;
/// use pgeom::fraction::Fraction;
/// use pgeom::proj_plane::{cross_ratio, harm_conj};
///
/// let a = Point::new(1, 2, 3);
/// let b = Point::new(4, 5, 6);
/// let c = plucker(2, &a, 3, &b);
/// let d = harm_conj(&a, &b, &c);
/// assert_eq!(cross_ratio(&a, &b, &c, &d), Fraction::from(-1));
/// ```
pub fn cross_ratio<O>(a: &O, b: &O, c: &O, d: &O) -> Quotient<O::Scalar>
where
    O: ProjectiveObject,
    O::Scalar: Ratio,
{
    let o = c.cross(d).aux();
    x_ratio(a, b, &o.cross(c), &o.cross(d))
}

/// Cross-ratio computed from a projection onto a coordinate plane
///
/// Projects along the first coordinate axis,
/// or along the second when `A` and `B` coincide in that projection.
/// Agrees with [cross_ratio] for collinear arguments.
pub fn cross_ratio_projected<O>(a: &O, b: &O, c: &O, d: &O) -> Quotient<O::Scalar>
where
    O: ProjectiveObject,
    O::Scalar: Ratio,
{
    let (a, b, c, d) = (a.coords(), b.coords(), c.coords(), d.coords());
    let proj: fn(&[O::Scalar; 3], &[O::Scalar; 3]) -> O::Scalar = if cross0(a, b).is_zero() {
        cross1
    } else {
        cross0
    };
    ratio_ratio(proj(a, c), proj(a, d), proj(b, c), proj(b, d))
}

/// The harmonic conjugate of `C` with respect to `A` and `B`
///
/// `C` must lie on the line `AB`; this is not checked.
/// See [checked_harm_conj].
pub fn harm_conj<O: ProjectiveObject>(a: &O, b: &O, c: &O) -> O {
    let lc = c.cross(&a.cross(b).aux());
    plucker(b.dot(&lc), a, a.dot(&lc), b)
}

/// [harm_conj], failing with [GeomError::NotCollinear]
/// when `C` is not on the line `AB`
pub fn checked_harm_conj<O: ProjectiveObject>(a: &O, b: &O, c: &O) -> Result<O> {
    if coincident(a, b, c) {
        Ok(harm_conj(a, b, c))
    } else {
        Err(GeomError::NotCollinear)
    }
}

/// Whether `D` is the harmonic conjugate of `C` with respect to `A` and `B`
pub fn is_harmonic<O>(a: &O, b: &O, c: &O, d: &O) -> bool
where
    O: ProjectiveObject,
    O::Scalar: Ratio,
{
    cross_ratio(a, b, c, d) == <Quotient<O::Scalar> as Ring>::from_integer(-1)
}

/// A projective involution with a mirror and a center
///
/// For a mirror line `m` and a center point `o` not on it,
/// [apply](Involution::apply) maps points to points
/// and [apply_dual](Involution::apply_dual) maps lines to lines.
/// The roles swap when the mirror is a point and the center a line.
/// Applying either map twice gives back the original object.
#[derive(Clone, Debug)]
pub struct Involution<O: ProjectiveObject> {
    mirror: O,
    center: O::Dual,
    c: O::Scalar,
}

impl<O: ProjectiveObject> Involution<O> {
    pub fn new(mirror: O, center: O::Dual) -> Involution<O> {
        let c = mirror.dot(&center);
        Involution { mirror, center, c }
    }

    pub fn mirror(&self) -> &O {
        &self.mirror
    }

    pub fn center(&self) -> &O::Dual {
        &self.center
    }

    pub fn apply(&self, p: &O::Dual) -> O::Dual {
        let mu = <O::Scalar as Ring>::from_integer(-2) * p.dot(&self.mirror);
        plucker(self.c.clone(), p, mu, &self.center)
    }

    pub fn apply_dual(&self, l: &O) -> O {
        let mu = <O::Scalar as Ring>::from_integer(-2) * l.dot(&self.center);
        plucker(self.c.clone(), l, mu, &self.mirror)
    }
}

/// Whether Pappus's theorem holds for two collinear triples
///
/// With `A, B, C` on one line and `D, E, F` on another,
/// the cross-joins `AE∩BD`, `AF∩CD` and `BF∩CE` are collinear.
pub fn check_pappus<O: ProjectiveObject>(co1: &Triple<O>, co2: &Triple<O>) -> bool {
    let (a, b, c) = co1;
    let (d, e, f) = co2;
    let g = a.cross(e).cross(&b.cross(d));
    let h = a.cross(f).cross(&c.cross(d));
    let i = b.cross(f).cross(&c.cross(e));
    coincident(&g, &h, &i)
}

/// Whether Desargues's theorem holds for two triangles
///
/// Two triangles are in perspective from a point
/// exactly when their trilaterals are in perspective from a line.
pub fn check_desargues<O: ProjectiveObject>(tri1: &Triple<O>, tri2: &Triple<O>) -> bool {
    let b1 = persp(tri1, tri2);
    let b2 = persp(&tri_dual(tri1), &tri_dual(tri2));
    b1 == b2
}
