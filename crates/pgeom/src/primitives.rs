//! Points and lines of the projective plane

use crate::error::Result;
use crate::object::ProjectiveObject;
use crate::ops::{Join, Meet};
use crate::scalar::Ring;

/// A point `[x : y : z]`
///
/// In the Euclidean chart, `[x : y : 1]` is the point `(x, y)`
/// and `[x : y : 0]` is the point at infinity in direction `(x, y)`.
#[derive(Clone, Copy, Debug, pgeom_macros::ProjectiveObject)]
#[dual(Line)]
pub struct Point<K> {
    coords: [K; 3],
}

/// A line `[a : b : c]`, the set of points with `a·x + b·y + c·z = 0`
///
/// `[0 : 0 : 1]` is the Euclidean line at infinity.
#[derive(Clone, Copy, Debug, pgeom_macros::ProjectiveObject)]
#[dual(Point)]
pub struct Line<K> {
    coords: [K; 3],
}

impl<K> Point<K> {
    pub const fn new(x: K, y: K, z: K) -> Point<K> {
        Point { coords: [x, y, z] }
    }

    pub fn into_coords(self) -> [K; 3] {
        self.coords
    }
}

impl<K> Line<K> {
    pub const fn new(a: K, b: K, c: K) -> Line<K> {
        Line { coords: [a, b, c] }
    }

    pub fn into_coords(self) -> [K; 3] {
        self.coords
    }
}

/// The line through `p` and `q`, or [Degenerate](crate::error::GeomError::Degenerate)
/// if they are the same point
pub fn join<K: Ring>(p: &Point<K>, q: &Point<K>) -> Result<Line<K>> {
    p.try_cross(q)
}

/// The point on both `l` and `m`, or [Degenerate](crate::error::GeomError::Degenerate)
/// if they are the same line
pub fn meet<K: Ring>(l: &Line<K>, m: &Line<K>) -> Result<Point<K>> {
    l.try_cross(m)
}

impl<K: Ring> Join<Point<K>> for Point<K> {
    type Output = Result<Line<K>>;
    fn join(self, r: Point<K>) -> Result<Line<K>> {
        join(&self, &r)
    }
}

impl<K: Ring> Join<&Point<K>> for &Point<K> {
    type Output = Result<Line<K>>;
    fn join(self, r: &Point<K>) -> Result<Line<K>> {
        join(self, r)
    }
}

impl<K: Ring> Meet<Line<K>> for Line<K> {
    type Output = Result<Point<K>>;
    fn meet(self, r: Line<K>) -> Result<Point<K>> {
        meet(&self, &r)
    }
}

impl<K: Ring> Meet<&Line<K>> for &Line<K> {
    type Output = Result<Point<K>>;
    fn meet(self, r: &Line<K>) -> Result<Point<K>> {
        meet(self, r)
    }
}
