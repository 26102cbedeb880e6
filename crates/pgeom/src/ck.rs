//! Cayley–Klein geometries
//!
//! A Cayley–Klein geometry is the projective plane together with a polarity,
//! a map sending each point to a line (its polar) and each line to a point (its pole).
//! Perpendicularity, altitudes, reflections and the measures
//! (quadrance between points, spread between lines) all follow from the polarity.
//!
//! To define a geometry, implement [Polarity] for both points and lines,
//! [Measure] for both (usually by calling [polar_measure]),
//! and opt into the derived operations with an empty `impl CayleyKlein`.
//! [Elliptic] and [Hyperbolic] are provided,
//! as is [PerspEuclid](crate::persp::PerspEuclid)
//! which places the line at infinity anywhere in the plane.
//!
//! ```
//! use pgeom::prelude::*;
//! use pgeom::ck::{check_sine_law, Hyperbolic};
//! use pgeom::proj_plane::tri_dual;
//!
//! let ck = Hyperbolic;
//! let triangle = (Point::new(1, 3, 1), Point::new(4, 2, 1), Point::new(1, 1, -1));
//! let trilateral = tri_dual(&triangle);
//! let q = ck.tri_quadrance(&triangle);
//! let s = ck.tri_spread(&trilateral);
//! assert!(check_sine_law(&q, &s));
//! ```

use crate::object::ProjectiveObject;
use crate::primitives::{Line, Point};
use crate::proj_plane::{tri_dual, x_ratio, Involution, Triple};
use crate::scalar::{sq, Quotient, Ratio, Ring};

/// The pole / polar map of a geometry
pub trait Polarity<O: ProjectiveObject> {
    fn perp(&self, o: &O) -> O::Dual;
}

/// The fundamental measure between two objects of the same kind
///
/// Between points this is the quadrance, between lines the spread.
pub trait Measure<O: ProjectiveObject>: Polarity<O> {
    type Output: Ring;
    fn measure(&self, a1: &O, a2: &O) -> Self::Output;
}

/// The measure induced by a polarity alone,
/// `1 - x_ratio(a1, a2, perp(a2), perp(a1))`
pub fn polar_measure<C, O>(ck: &C, a1: &O, a2: &O) -> Quotient<O::Scalar>
where
    C: Polarity<O> + ?Sized,
    O: ProjectiveObject,
    O::Scalar: Ratio,
{
    <Quotient<O::Scalar> as Ring>::one() - x_ratio(a1, a2, &ck.perp(a2), &ck.perp(a1))
}

/// Operations common to every Cayley–Klein geometry
///
/// All of these are provided; implementing types only supply
/// [Polarity] and [Measure].
pub trait CayleyKlein {
    /// Whether `m` passes through the pole of `l`
    fn is_perpendicular<O>(&self, l: &O, m: &O) -> bool
    where
        Self: Polarity<O>,
        O: ProjectiveObject,
    {
        m.incident(&self.perp(l))
    }

    /// The line through `p` perpendicular to `l`
    fn altitude<O>(&self, p: &O, l: &O::Dual) -> O::Dual
    where
        Self: Polarity<O::Dual>,
        O: ProjectiveObject,
    {
        p.cross(&self.perp(l))
    }

    /// The three altitudes of a triangle
    fn tri_altitude<O>(&self, tri: &Triple<O>) -> Triple<O::Dual>
    where
        Self: Polarity<O::Dual>,
        O: ProjectiveObject,
    {
        let (l1, l2, l3) = tri_dual(tri);
        let (a1, a2, a3) = tri;
        (
            self.altitude(a1, &l1),
            self.altitude(a2, &l2),
            self.altitude(a3, &l3),
        )
    }

    /// The common point of the altitudes of a triangle
    fn orthocenter<O>(&self, tri: &Triple<O>) -> O
    where
        Self: Polarity<O::Dual>,
        O: ProjectiveObject,
    {
        let (a1, a2, a3) = tri;
        let t1 = self.altitude(a1, &a2.cross(a3));
        let t2 = self.altitude(a2, &a1.cross(a3));
        t1.cross(&t2)
    }

    /// Reflection in `m`
    fn reflect<O>(&self, m: &O) -> Involution<O>
    where
        Self: Polarity<O>,
        O: ProjectiveObject,
    {
        Involution::new(m.clone(), self.perp(m))
    }

    /// The measure opposite each element of a triple,
    /// in the order `(2, 3), (1, 3), (1, 2)`
    fn tri_measure<O>(&self, tri: &Triple<O>) -> Triple<<Self as Measure<O>>::Output>
    where
        Self: Measure<O>,
        O: ProjectiveObject,
    {
        let (a1, a2, a3) = tri;
        (
            self.measure(a2, a3),
            self.measure(a1, a3),
            self.measure(a1, a2),
        )
    }

    fn quadrance<K>(&self, p: &Point<K>, q: &Point<K>) -> <Self as Measure<Point<K>>>::Output
    where
        Self: Measure<Point<K>>,
        K: Ring,
    {
        self.measure(p, q)
    }

    fn spread<K>(&self, l: &Line<K>, m: &Line<K>) -> <Self as Measure<Line<K>>>::Output
    where
        Self: Measure<Line<K>>,
        K: Ring,
    {
        self.measure(l, m)
    }

    fn tri_quadrance<K>(&self, triangle: &Triple<Point<K>>) -> Triple<<Self as Measure<Point<K>>>::Output>
    where
        Self: Measure<Point<K>>,
        K: Ring,
    {
        self.tri_measure(triangle)
    }

    fn tri_spread<K>(&self, trilateral: &Triple<Line<K>>) -> Triple<<Self as Measure<Line<K>>>::Output>
    where
        Self: Measure<Line<K>>,
        K: Ring,
    {
        self.tri_measure(trilateral)
    }
}

/// Elliptic geometry, whose polarity reinterprets the coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Elliptic;

impl<O: ProjectiveObject> Polarity<O> for Elliptic {
    fn perp(&self, o: &O) -> O::Dual {
        o.aux()
    }
}

impl<O> Measure<O> for Elliptic
where
    O: ProjectiveObject,
    O::Scalar: Ratio,
{
    type Output = Quotient<O::Scalar>;

    fn measure(&self, a1: &O, a2: &O) -> Quotient<O::Scalar> {
        polar_measure(self, a1, a2)
    }
}

impl CayleyKlein for Elliptic {}

/// Hyperbolic geometry, whose polarity negates the last coordinate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hyperbolic;

impl<O: ProjectiveObject> Polarity<O> for Hyperbolic {
    fn perp(&self, o: &O) -> O::Dual {
        let [x, y, z] = o.coords().clone();
        <O::Dual as ProjectiveObject>::from_coords([x, y, -z])
    }
}

impl<O> Measure<O> for Hyperbolic
where
    O: ProjectiveObject,
    O::Scalar: Ratio,
{
    type Output = Quotient<O::Scalar>;

    fn measure(&self, a1: &O, a2: &O) -> Quotient<O::Scalar> {
        polar_measure(self, a1, a2)
    }
}

impl CayleyKlein for Hyperbolic {}

/// Whether the quadrances and spreads of a triangle are proportional,
/// `s1 / q1 = s2 / q2 = s3 / q3`
pub fn check_sine_law<Q: Ring>(q: &Triple<Q>, s: &Triple<Q>) -> bool {
    let (q1, q2, q3) = q.clone();
    let (s1, s2, s3) = s.clone();
    s1.clone() * q2.clone() == s2.clone() * q1 && s2 * q3 == s3 * q2
}

/// The triple quad formula residual,
/// `(q1 + q2 + q3)² - 2(q1² + q2² + q3²) - 4·q1·q2·q3`
///
/// This vanishes for three collinear points in the elliptic and hyperbolic planes.
pub fn check_cross_tqf<Q: Ring>(q: &Triple<Q>) -> Q {
    let (q1, q2, q3) = q.clone();
    let two = Q::from_integer(2);
    let four = Q::from_integer(4);
    sq(q1.clone() + q2.clone() + q3.clone())
        - two * (sq(q1.clone()) + sq(q2.clone()) + sq(q3.clone()))
        - four * q1 * q2 * q3
}

/// The cross law residual,
/// `(s1·s2·q3 - (s1 + s2 + s3) + 2)² - 4(1 - s1)(1 - s2)(1 - s3)`
///
/// This vanishes when `q3` is the quadrance opposite the spread `s3`.
/// The dual reading holds with quadrances and spreads exchanged.
pub fn check_cross_law<Q: Ring>(s: &Triple<Q>, q3: Q) -> Q {
    let (s1, s2, s3) = s.clone();
    let one = Q::one();
    let two = Q::from_integer(2);
    let four = Q::from_integer(4);
    sq(s1.clone() * s2.clone() * q3 - (s1.clone() + s2.clone() + s3.clone()) + two)
        - four * (one.clone() - s1) * (one.clone() - s2) * (one - s3)
}
