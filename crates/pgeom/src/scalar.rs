//! Traits that govern the coefficient datatype used by pgeom
//!
//! Incidence, join and meet are built from sums and products only,
//! so the coefficient datatype needs only be a [Ring] for most functionality to work.
//! Measurements (quadrance, spread, cross-ratio) are quotients,
//! and the [Ratio] trait decides how a quotient is represented:
//! exactly, as a [Fraction], for [Integral] coefficients,
//! or directly, for coefficients that are already a field.

use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::fraction::Fraction;

/// A coefficient datatype which is closed under addition and multiplication.
///
/// see <https://en.wikipedia.org/wiki/Ring_(mathematics)>
///
/// `Ring` is implemented for `f32`, `f64`, `i8` through `i128`, [Fraction],
/// and (behind the `bigint` and `complex` features) `BigInt` and `Complex`.
///
/// Unlike a purely numeric library, `Ring` does not require `Copy`,
/// so that arbitrary-precision integers can be used as coordinates.
/// Equality is required since incidence is decided by comparing against zero.
pub trait Ring:
    Clone
    + PartialEq
    + Neg<Output = Self>
    + Add<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sub<Self, Output = Self>
{
    /// The additive identity
    fn zero() -> Self {
        Self::from_integer(0)
    }

    /// The multiplicative identity
    fn one() -> Self {
        Self::from_integer(1)
    }

    /// Construct an integer scalar
    fn from_integer(i: isize) -> Self;

    /// Whether this is the additive identity
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// A ring with exact division and remainder, such as the integers.
///
/// Quotients of `Integral` coefficients are represented exactly as a [Fraction]
/// instead of being computed by (truncating) division.
pub trait Integral: Ring + Ord + Div<Self, Output = Self> + Rem<Self, Output = Self> {
    /// Computes the absolute value
    fn abs(self) -> Self {
        if self < Self::zero() {
            -self
        } else {
            self
        }
    }
}

/// A coefficient datatype whose quotients can be formed.
///
/// This is the capability that separates exact from direct division.
/// For integers, `Output` is [`Fraction<Self>`](Fraction);
/// for fields (floats, complex numbers, fractions) `Output` is `Self`.
///
/// ## Division by zero
///
/// `ratio()` never panics. A zero denominator produces the
/// [Fraction] infinity or indeterminate sentinel,
/// or the IEEE infinity / NaN for floating point types.
pub trait Ratio: Ring {
    /// The datatype of a quotient
    type Output: Ring;

    /// The quotient `numerator / denominator`
    fn ratio(numerator: Self, denominator: Self) -> <Self as Ratio>::Output;

    /// The ratio of ratios `(a / b) / (c / d)`
    ///
    /// Fields compute `(a * d) / (b * c)` directly.
    /// [Integral] types instead divide the two reduced fractions `a / b` and `c / d`.
    fn ratio_ratio(a: Self, b: Self, c: Self, d: Self) -> <Self as Ratio>::Output {
        Self::ratio(a * d, b * c)
    }
}

/// The datatype of a quotient of `K`
pub type Quotient<K> = <K as Ratio>::Output;

/// A scalar datatype that can be approximated by an `f64`.
///
/// Only used where a real number must leave exact arithmetic,
/// e.g. [distance](crate::euclid::distance) and [angle](crate::euclid::angle).
pub trait ToF64 {
    fn to_f64(&self) -> f64;
}

/// Computes `a * a`
#[inline]
pub fn sq<T: Clone + Mul<T, Output = T>>(a: T) -> T {
    a.clone() * a
}

/// Greatest common divisor
///
/// `gcd(0, n) = |n|` and `gcd(m, 0) = |m|`, so `gcd(0, 0) = 0`.
pub fn gcd<Z: Integral>(m: Z, n: Z) -> Z {
    let (mut a, mut b) = (m, n);
    while !b.is_zero() {
        let r = a % b.clone();
        a = b;
        b = r;
    }
    a.abs()
}

/// Least common multiple
///
/// Returns zero if either argument is zero.
pub fn lcm<Z: Integral>(m: Z, n: Z) -> Z {
    if m.is_zero() || n.is_zero() {
        return Z::zero();
    }
    let common = gcd(m.clone(), n.clone());
    (m.abs() / common) * n.abs()
}

macro_rules! impl_for_float {
    ($type:ident) => {
        impl Ring for $type {
            fn from_integer(i: isize) -> $type {
                i as $type
            }
        }

        impl Ratio for $type {
            type Output = $type;

            // This is not NaN-free
            fn ratio(numerator: $type, denominator: $type) -> $type {
                numerator / denominator
            }
        }

        impl ToF64 for $type {
            fn to_f64(&self) -> f64 {
                *self as f64
            }
        }
    };
}

impl_for_float!(f32);
impl_for_float!(f64);

macro_rules! impl_for_int {
    ($type:ident) => {
        impl Ring for $type {
            fn from_integer(i: isize) -> $type {
                i.try_into().expect("Integer out of range")
            }
        }

        impl Integral for $type {}

        impl Ratio for $type {
            type Output = Fraction<$type>;

            fn ratio(numerator: $type, denominator: $type) -> Fraction<$type> {
                Fraction::new(numerator, denominator)
            }

            fn ratio_ratio(a: $type, b: $type, c: $type, d: $type) -> Fraction<$type> {
                Fraction::new(a, b) / Fraction::new(c, d)
            }
        }

        impl ToF64 for $type {
            fn to_f64(&self) -> f64 {
                *self as f64
            }
        }
    };
}

impl_for_int!(i8);
impl_for_int!(i16);
impl_for_int!(i32);
impl_for_int!(i64);
impl_for_int!(i128);
impl_for_int!(isize);

#[cfg(feature = "bigint")]
mod bigint {
    use super::{Integral, Ratio, Ring, ToF64};
    use crate::fraction::Fraction;
    use num_bigint::BigInt;
    use num_traits::ToPrimitive;

    impl Ring for BigInt {
        fn from_integer(i: isize) -> BigInt {
            BigInt::from(i)
        }
    }

    impl Integral for BigInt {}

    impl Ratio for BigInt {
        type Output = Fraction<BigInt>;

        fn ratio(numerator: BigInt, denominator: BigInt) -> Fraction<BigInt> {
            Fraction::new(numerator, denominator)
        }

        fn ratio_ratio(a: BigInt, b: BigInt, c: BigInt, d: BigInt) -> Fraction<BigInt> {
            Fraction::new(a, b) / Fraction::new(c, d)
        }
    }

    impl ToF64 for BigInt {
        fn to_f64(&self) -> f64 {
            ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
        }
    }
}

#[cfg(feature = "complex")]
mod complex {
    use super::{Ratio, Ring};
    use num_complex::Complex;

    macro_rules! impl_for_complex {
        ($type:ident) => {
            impl Ring for Complex<$type> {
                fn from_integer(i: isize) -> Complex<$type> {
                    Complex::new(i as $type, 0.)
                }
            }

            impl Ratio for Complex<$type> {
                type Output = Complex<$type>;

                fn ratio(numerator: Complex<$type>, denominator: Complex<$type>) -> Complex<$type> {
                    numerator / denominator
                }
            }
        };
    }

    impl_for_complex!(f32);
    impl_for_complex!(f64);
}
