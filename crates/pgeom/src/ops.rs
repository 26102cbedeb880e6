//! Checked geometric operations
//!
//! These traits are implemented for [Point](crate::primitives::Point)
//! and [Line](crate::primitives::Line) and their references.
//! Unlike the `*` operator, which returns the all-zero NaN object
//! for coincident operands, they report the degenerate case as
//! [GeomError::Degenerate](crate::error::GeomError::Degenerate).

/// The line through two points
///
/// ```
/// use pgeom::prelude::*;
/// use pgeom::GeomError;
///
/// let p1 = Point::new(1, 2, 1);
/// let p2 = Point::new(3, 5, 1);
/// let l = p1.clone().join(p2).unwrap();
/// assert!(p1.incident(&l));
///
/// // Homogeneous scaling doesn't matter, so these are the same point
/// let p3 = Point::new(2, 4, 2);
/// assert_eq!(p1.join(p3), Err(GeomError::Degenerate));
/// ```
pub trait Join<T> {
    type Output;
    fn join(self, r: T) -> Self::Output;
}

/// The point shared by two lines
///
/// Parallel lines meet at a point at infinity,
/// so the only failure is two coincident lines.
///
/// ```
/// use pgeom::prelude::*;
///
/// let l1 = Line::new(1, 0, -2); // x = 2
/// let l2 = Line::new(0, 1, -3); // y = 3
/// assert_eq!(l1.meet(l2).unwrap(), Point::new(2, 3, 1));
/// ```
pub trait Meet<T> {
    type Output;
    fn meet(self, r: T) -> Self::Output;
}
