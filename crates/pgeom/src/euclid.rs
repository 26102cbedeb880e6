//! Euclidean rational trigonometry in homogeneous coordinates
//!
//! The line at infinity is fixed at `[0 : 0 : 1]`:
//! a point `[x : y : z]` is the Euclidean point `(x/z, y/z)`
//! and a line `[a : b : c]` has normal direction `(a, b)`.
//! Distances and angles are replaced by their squares,
//! quadrance and spread, which stay exact over the rationals.
//!
//! ```
//! use pgeom::prelude::*;
//! use pgeom::euclid::{quadrance, spread};
//! use pgeom::fraction::Fraction;
//!
//! let a = Point::new(0, 0, 1);
//! let b = Point::new(3, 4, 1);
//! assert_eq!(quadrance(&a, &b), Fraction::from(25));
//!
//! // A 45 degree angle has spread 1/2
//! let l = Line::new(0, 1, 0);
//! let m = Line::new(1, -1, 0);
//! assert_eq!(spread(&l, &m), Fraction::new(1, 2));
//! ```

use crate::object::{cross2, dot1, plucker, ProjectiveObject};
use crate::primitives::{Line, Point};
use crate::proj_plane::{tri_func, Involution, Triple};
use crate::scalar::{sq, Quotient, Ratio, Ring};
#[cfg(feature = "std")]
use crate::scalar::ToF64;

/// The point at infinity in the normal direction of `l`
pub fn fb<K: Ring>(l: &Line<K>) -> Point<K> {
    Point::new(l[0].clone(), l[1].clone(), K::zero())
}

pub fn is_perpendicular<K: Ring>(l: &Line<K>, m: &Line<K>) -> bool {
    dot1(l.coords(), m.coords()).is_zero()
}

pub fn is_parallel<K: Ring>(l: &Line<K>, m: &Line<K>) -> bool {
    cross2(l.coords(), m.coords()).is_zero()
}

/// The line through `a` perpendicular to `l`
pub fn altitude<K: Ring>(a: &Point<K>, l: &Line<K>) -> Line<K> {
    a * &fb(l)
}

pub fn tri_altitude<K: Ring>(tri: &Triple<Point<K>>) -> Triple<Line<K>> {
    let (a1, a2, a3) = tri;
    (
        altitude(a1, &(a2 * a3)),
        altitude(a2, &(a3 * a1)),
        altitude(a3, &(a1 * a2)),
    )
}

pub fn orthocenter<K: Ring>(tri: &Triple<Point<K>>) -> Point<K> {
    let (a1, a2, a3) = tri;
    let t1 = altitude(a1, &(a2 * a3));
    let t2 = altitude(a2, &(a1 * a3));
    t1 * t2
}

/// Reflection in the line `m`
///
/// ```
/// use pgeom::prelude::*;
/// use pgeom::euclid::reflect;
///
/// let tau = reflect(&Line::new(1, 0, 0)); // the y axis
/// assert_eq!(tau.apply(&Point::new(2, 5, 1)), Point::new(-2, 5, 1));
/// ```
pub fn reflect<K: Ring>(m: &Line<K>) -> Involution<Line<K>> {
    Involution::new(m.clone(), fb(m))
}

pub fn midpoint<K: Ring>(a: &Point<K>, b: &Point<K>) -> Point<K> {
    plucker(b[2].clone(), a, a[2].clone(), b)
}

/// The midpoint of the side opposite each vertex,
/// in the order `(2, 3), (1, 3), (1, 2)`
pub fn tri_midpoint<K: Ring>(tri: &Triple<Point<K>>) -> Triple<Point<K>> {
    tri_func(midpoint, tri)
}

/// Squared Euclidean distance between two points
pub fn quadrance<K: Ratio>(a1: &Point<K>, a2: &Point<K>) -> Quotient<K> {
    let quad1 = |x1: &K, z1: &K, x2: &K, z2: &K| {
        sq(K::ratio(x1.clone(), z1.clone()) - K::ratio(x2.clone(), z2.clone()))
    };
    quad1(&a1[0], &a1[2], &a2[0], &a2[2]) + quad1(&a1[1], &a1[2], &a2[1], &a2[2])
}

fn sbase<K: Ratio>(l1: &Line<K>, l2: &Line<K>, d: K) -> Quotient<K> {
    K::ratio(d.clone(), dot1(l1.coords(), l1.coords())) * K::ratio(d, dot1(l2.coords(), l2.coords()))
}

/// Squared sine of the angle between two lines
pub fn spread<K: Ratio>(l1: &Line<K>, l2: &Line<K>) -> Quotient<K> {
    sbase(l1, l2, cross2(l1.coords(), l2.coords()))
}

/// Squared cosine of the angle between two lines, `1 - spread`
pub fn cross_s<K: Ratio>(l1: &Line<K>, l2: &Line<K>) -> Quotient<K> {
    sbase(l1, l2, dot1(l1.coords(), l2.coords()))
}

pub fn tri_quadrance<K: Ratio>(triangle: &Triple<Point<K>>) -> Triple<Quotient<K>> {
    tri_func(quadrance, triangle)
}

pub fn tri_spread<K: Ratio>(trilateral: &Triple<Line<K>>) -> Triple<Quotient<K>> {
    tri_func(spread, trilateral)
}

/// A point on the unit circle, from the rational parametrization
/// `((λ² - μ²) / (λ² + μ²), 2λμ / (λ² + μ²))`
pub fn uc_point<K: Ring>(lambda: K, mu: K) -> Point<K> {
    let lambda2 = sq(lambda.clone());
    let mu2 = sq(mu.clone());
    Point::new(
        lambda2.clone() - mu2.clone(),
        K::from_integer(2) * lambda * mu,
        lambda2 + mu2,
    )
}

/// Euclidean distance, leaving exact arithmetic
#[cfg(feature = "std")]
pub fn distance<K>(a: &Point<K>, b: &Point<K>) -> f64
where
    K: Ratio,
    Quotient<K>: ToF64,
{
    quadrance(a, b).to_f64().sqrt()
}

/// The acute angle between two lines in radians, leaving exact arithmetic
#[cfg(feature = "std")]
pub fn angle<K>(l: &Line<K>, m: &Line<K>) -> f64
where
    K: Ratio,
    Quotient<K>: ToF64,
{
    spread(l, m).to_f64().sqrt().asin()
}

/// Archimedes's function, `4ab - (a + b - c)²`
///
/// For the quadrances of a triangle this is 16 times its squared area,
/// and it vanishes exactly when the three points are collinear.
pub fn archimedes<Q: Ring>(a: &Q, b: &Q, c: &Q) -> Q {
    Q::from_integer(4) * a.clone() * b.clone() - sq(a.clone() + b.clone() - c.clone())
}

/// Cyclic quadrilateral quadrea terms `(m, p)` for quadrances `a, b, c, d`
///
/// With `t1 = 4ab` and `t2 = 4cd`,
/// `m = t1 + t2 - (a + b - c - d)²` and `p = m² - 4·t1·t2`.
pub fn cqq<Q: Ring>(a: &Q, b: &Q, c: &Q, d: &Q) -> (Q, Q) {
    let four = Q::from_integer(4);
    let t1 = four.clone() * a.clone() * b.clone();
    let t2 = four.clone() * c.clone() * d.clone();
    let m = (t1.clone() + t2.clone()) - sq(a.clone() + b.clone() - c.clone() - d.clone());
    let p = sq(m.clone()) - four * t1 * t2;
    (m, p)
}

/// Ptolemy's theorem for the six quadrances `(Q12, Q23, Q34, Q14, Q13, Q24)`
/// of four points
///
/// Holds when the four points lie on a common circle.
pub fn ptolemy<Q: Ring>(quad: &(Q, Q, Q, Q, Q, Q)) -> bool {
    let (q12, q23, q34, q14, q13, q24) = quad.clone();
    archimedes(&(q12 * q34), &(q23 * q14), &(q13 * q24)).is_zero()
}
