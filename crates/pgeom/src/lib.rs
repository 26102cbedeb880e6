#![cfg_attr(not(feature = "std"), no_std)]

//! pgeom is a library for exact projective geometry in the plane.
//!
//! Points and lines are stored in [homogeneous coordinates](https://en.wikipedia.org/wiki/Homogeneous_coordinates),
//! so that points at infinity need no special treatment
//! and joining two points or meeting two lines never divides.
//! Every theorem of the projective plane has a dual,
//! and pgeom writes each operation once for any [ProjectiveObject](object::ProjectiveObject),
//! so it works with points and lines interchangeably.
//!
//! On top of the projective plane, pgeom implements
//! [rational trigonometry](https://en.wikipedia.org/wiki/Rational_trigonometry):
//! distances and angles are replaced by quadrance and spread,
//! which are rational functions of the coordinates.
//! Geometries are defined by a polarity in the [Cayley–Klein](ck) framework,
//! with [elliptic](ck::Elliptic), [hyperbolic](ck::Hyperbolic)
//! and [perspective Euclidean](persp::PerspEuclid) geometry provided,
//! as well as a dedicated [Euclidean](euclid) module.
//!
//! pgeom is generic over the [scalar] datatype.
//! Integer coordinates (including `BigInt`) give exact results,
//! with quotients represented as a [Fraction](fraction::Fraction).
//! Floating point and complex coordinates are also supported.
//!
//! ```
//! use pgeom::prelude::*;
//! use pgeom::proj_plane::tri_dual;
//!
//! let triangle = (Point::<i32>::new(1, 3, 1), Point::new(4, 2, 1), Point::new(1, 1, -1));
//! let trilateral = tri_dual(&triangle);
//!
//! let ck = Elliptic;
//! let (q1, q2, q3) = ck.tri_quadrance(&triangle);
//! let (s1, s2, s3) = ck.tri_spread(&trilateral);
//!
//! // The spread law
//! assert_eq!(s1 * q2.clone(), s2.clone() * q1);
//! assert_eq!(s2 * q3, s3 * q2);
//! ```
//!
//! pgeom is `no_std`-compatible with the `std` feature disabled.
//! The optional `bigint` and `complex` features add coefficient support
//! for `num_bigint::BigInt` and `num_complex::Complex`.

// Allows the derive macro to name this crate from within it
extern crate self as pgeom;

pub use pgeom_macros::ProjectiveObject;

pub mod scalar;
pub mod fraction;
pub mod error;
pub mod object;
pub mod ops;
pub mod primitives;
pub mod proj_plane;
pub mod ck;
pub mod persp;
pub mod euclid;

pub use error::{GeomError, Result};

/// The most commonly used types and traits
pub mod prelude {
    pub use crate::ck::{CayleyKlein, Elliptic, Hyperbolic, Measure, Polarity};
    pub use crate::object::{plucker, ProjectiveObject};
    pub use crate::ops::{Join, Meet};
    pub use crate::primitives::{join, meet, Line, Point};
    pub use crate::proj_plane::{coincident, incident, Involution};
    pub use crate::scalar::{Ratio, Ring};
}

mod test;
