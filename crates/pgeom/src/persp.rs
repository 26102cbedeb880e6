//! Euclidean geometry seen in perspective
//!
//! [PerspEuclid] is a Cayley–Klein geometry in which the line at infinity
//! is an arbitrary line `l_infty`, and the circular points at infinity
//! are `Ire ± i·Iim`. With `l_infty = [0 : 0 : 1]`, `Ire = [1 : 0 : 0]`
//! and `Iim = [0 : 1 : 0]` this is ordinary Euclidean geometry.
//!
//! ```
//! use pgeom::prelude::*;
//! use pgeom::persp::PerspEuclid;
//! use pgeom::fraction::Fraction;
//!
//! let ck = PerspEuclid::new(Point::new(0, 1, 1), Point::new(1, 0, 0), Line::new(0, -1, 1));
//! let a = Point::new(1, -2, 3);
//! assert_eq!(ck.quadrance(&a, &a), Fraction::from(0));
//! ```

use crate::ck::{CayleyKlein, Measure, Polarity};
use crate::object::{plucker, ProjectiveObject};
use crate::primitives::{Line, Point};
use crate::proj_plane::{tri_func, Triple};
use crate::scalar::{sq, Quotient, Ratio, Ring};

/// The squared "size" of an object relative to the absolute of a [PerspEuclid] plane
pub trait Omega<O: ProjectiveObject> {
    fn omega(&self, o: &O) -> O::Scalar;
}

/// Euclidean geometry with a movable line at infinity
#[derive(Clone, Debug, PartialEq)]
pub struct PerspEuclid<K: Ring> {
    i_re: Point<K>,
    i_im: Point<K>,
    l_infty: Line<K>,
}

impl<K: Ring> PerspEuclid<K> {
    /// Construct from the real and imaginary parts of the circular points,
    /// and the line at infinity
    pub fn new(i_re: Point<K>, i_im: Point<K>, l_infty: Line<K>) -> PerspEuclid<K> {
        PerspEuclid { i_re, i_im, l_infty }
    }

    pub fn i_re(&self) -> &Point<K> {
        &self.i_re
    }

    pub fn i_im(&self) -> &Point<K> {
        &self.i_im
    }

    pub fn l_infty(&self) -> &Line<K> {
        &self.l_infty
    }

    /// Whether `l` and `m` meet on the line at infinity
    pub fn is_parallel(&self, l: &Line<K>, m: &Line<K>) -> bool {
        self.l_infty.incident(&l.cross(m))
    }

    /// The midpoint of `a` and `b`
    ///
    /// This is the harmonic conjugate, with respect to `a` and `b`,
    /// of the point where `ab` meets the line at infinity.
    pub fn midpoint(&self, a: &Point<K>, b: &Point<K>) -> Point<K> {
        let alpha = a.dot(&self.l_infty);
        let beta = b.dot(&self.l_infty);
        plucker(beta, a, alpha, b)
    }

    /// The midpoint of the side opposite each vertex,
    /// in the order `(2, 3), (1, 3), (1, 2)`
    pub fn tri_midpoint(&self, tri: &Triple<Point<K>>) -> Triple<Point<K>> {
        tri_func(|a, b| self.midpoint(a, b), tri)
    }
}

impl<K: Ring> Polarity<Point<K>> for PerspEuclid<K> {
    fn perp(&self, _: &Point<K>) -> Line<K> {
        self.l_infty.clone()
    }
}

impl<K: Ring> Polarity<Line<K>> for PerspEuclid<K> {
    fn perp(&self, l: &Line<K>) -> Point<K> {
        let alpha = l.dot(&self.i_re);
        let beta = l.dot(&self.i_im);
        plucker(alpha, &self.i_re, beta, &self.i_im)
    }
}

impl<K: Ring> Omega<Point<K>> for PerspEuclid<K> {
    fn omega(&self, p: &Point<K>) -> K {
        sq(p.dot(&self.l_infty))
    }
}

impl<K: Ring> Omega<Line<K>> for PerspEuclid<K> {
    fn omega(&self, l: &Line<K>) -> K {
        sq(l.dot(&self.i_re)) + sq(l.dot(&self.i_im))
    }
}

impl<K, O> Measure<O> for PerspEuclid<K>
where
    K: Ratio,
    O: ProjectiveObject<Scalar = K>,
    PerspEuclid<K>: Polarity<O> + Omega<O> + Omega<O::Dual>,
{
    type Output = Quotient<K>;

    fn measure(&self, a1: &O, a2: &O) -> Quotient<K> {
        let omg = <Self as Omega<O::Dual>>::omega(self, &a1.cross(a2));
        let den = <Self as Omega<O>>::omega(self, a1) * <Self as Omega<O>>::omega(self, a2);
        K::ratio(omg, den)
    }
}

impl<K: Ring> CayleyKlein for PerspEuclid<K> {}
