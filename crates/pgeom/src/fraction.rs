//! Exact fractions over an [Integral] coefficient type
//!
//! A [Fraction] is kept in lowest terms with a non-negative denominator.
//! Zero denominators are allowed and meaningful:
//!
//! | value     | normalized form |
//! |-----------|-----------------|
//! | `+inf`    | `1/0`           |
//! | `-inf`    | `-1/0`          |
//! | `NaN`     | `0/0`           |
//!
//! These sentinels compose algebraically instead of panicking,
//! e.g. `inf * 0 = NaN`, `p / 0 = inf`, `inf - inf = NaN`.
//!
//! Fractions are totally ordered as `-inf < (finite values) < +inf < NaN`,
//! and `NaN` is equal to itself but to nothing else.
//!
//! ```
//! use pgeom::fraction::Fraction;
//!
//! let p = Fraction::new(3, 4);
//! assert_eq!(p, Fraction::new(-30, -40));
//! assert_eq!(p.clone() + Fraction::new(5, 6), Fraction::new(19, 12));
//! assert!(Fraction::new(1, 0) > p);
//! assert!((Fraction::new(1, 0) * Fraction::new(0, 1)).is_nan());
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::scalar::{gcd, Integral, Ratio, Ring, ToF64};

/// A normalized `numerator / denominator` pair
#[derive(Clone, Debug, Hash)]
pub struct Fraction<Z> {
    numer: Z,
    denom: Z,
}

impl<Z: Integral> Fraction<Z> {
    /// Construct a fraction in lowest terms
    pub fn new(numer: Z, denom: Z) -> Fraction<Z> {
        let (numer, denom) = if denom < Z::zero() {
            (-numer, -denom)
        } else {
            (numer, denom)
        };
        let common = gcd(numer.clone(), denom.clone());
        if common.is_zero() || common == Z::one() {
            // Already reduced, or 0/0 which stays as-is
            return Fraction { numer, denom };
        }
        Fraction {
            numer: numer / common.clone(),
            denom: denom / common,
        }
    }

    /// The indeterminate form `0/0`
    pub fn nan() -> Fraction<Z> {
        Fraction {
            numer: Z::zero(),
            denom: Z::zero(),
        }
    }

    /// Positive infinity `1/0`
    pub fn infinity() -> Fraction<Z> {
        Fraction {
            numer: Z::one(),
            denom: Z::zero(),
        }
    }

    pub fn numer(&self) -> &Z {
        &self.numer
    }

    pub fn denom(&self) -> &Z {
        &self.denom
    }

    /// Decompose into `(numerator, denominator)`
    pub fn into_parts(self) -> (Z, Z) {
        (self.numer, self.denom)
    }

    pub fn is_nan(&self) -> bool {
        self.numer.is_zero() && self.denom.is_zero()
    }

    /// True for `+inf` and `-inf`
    pub fn is_infinite(&self) -> bool {
        self.denom.is_zero() && !self.numer.is_zero()
    }

    pub fn abs(self) -> Fraction<Z> {
        Fraction {
            numer: self.numer.abs(),
            denom: self.denom,
        }
    }

    /// `1 / self`, with `1/0 = inf` and `1/NaN = NaN`
    pub fn recip(self) -> Fraction<Z> {
        Fraction::new(self.denom, self.numer)
    }

    /// Three-way comparison against a bare coefficient
    ///
    /// The denominator is non-negative, so `numer / denom <=> rhs`
    /// is `numer <=> denom * rhs` without building a second fraction.
    /// `NaN` compares greater than every coefficient.
    pub fn cmp_integer(&self, rhs: &Z) -> Ordering {
        if self.is_nan() {
            return Ordering::Greater;
        }
        self.numer.cmp(&(self.denom.clone() * rhs.clone()))
    }

    /// Whether this fraction equals the bare coefficient `rhs`
    pub fn eq_integer(&self, rhs: &Z) -> bool {
        self.denom == Z::one() && self.numer == *rhs
    }
}

impl<Z: Integral> Default for Fraction<Z> {
    fn default() -> Fraction<Z> {
        Fraction {
            numer: Z::zero(),
            denom: Z::one(),
        }
    }
}

impl<Z: Integral> From<Z> for Fraction<Z> {
    fn from(numer: Z) -> Fraction<Z> {
        Fraction {
            numer,
            denom: Z::one(),
        }
    }
}

impl<Z: Integral> PartialEq for Fraction<Z> {
    fn eq(&self, rhs: &Fraction<Z>) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}

impl<Z: Integral> Eq for Fraction<Z> {}

impl<Z: Integral> PartialOrd for Fraction<Z> {
    fn partial_cmp(&self, rhs: &Fraction<Z>) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl<Z: Integral> Ord for Fraction<Z> {
    fn cmp(&self, rhs: &Fraction<Z>) -> Ordering {
        match (self.is_nan(), rhs.is_nan()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }
        // Also orders -1/0 before 1/0
        if self.denom == rhs.denom {
            return self.numer.cmp(&rhs.numer);
        }
        (self.numer.clone() * rhs.denom.clone()).cmp(&(self.denom.clone() * rhs.numer.clone()))
    }
}

impl<Z: Integral> Neg for Fraction<Z> {
    type Output = Fraction<Z>;
    fn neg(self) -> Fraction<Z> {
        Fraction {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl<Z: Integral> Add for Fraction<Z> {
    type Output = Fraction<Z>;
    fn add(self, rhs: Fraction<Z>) -> Fraction<Z> {
        if self.denom == rhs.denom {
            return Fraction::new(self.numer + rhs.numer, self.denom);
        }
        let numer = rhs.denom.clone() * self.numer + self.denom.clone() * rhs.numer;
        Fraction::new(numer, self.denom * rhs.denom)
    }
}

impl<Z: Integral> Sub for Fraction<Z> {
    type Output = Fraction<Z>;
    fn sub(self, rhs: Fraction<Z>) -> Fraction<Z> {
        self + (-rhs)
    }
}

/// `gcd(m, n)`, or one when both are zero
fn common_factor<Z: Integral>(m: &Z, n: &Z) -> Z {
    let g = gcd(m.clone(), n.clone());
    if g.is_zero() {
        Z::one()
    } else {
        g
    }
}

impl<Z: Integral> Mul for Fraction<Z> {
    type Output = Fraction<Z>;
    fn mul(self, rhs: Fraction<Z>) -> Fraction<Z> {
        // Cancel across before multiplying to keep the products small
        let g1 = common_factor(&self.numer, &rhs.denom);
        let g2 = common_factor(&rhs.numer, &self.denom);
        Fraction::new(
            (self.numer / g1.clone()) * (rhs.numer / g2.clone()),
            (self.denom / g2) * (rhs.denom / g1),
        )
    }
}

impl<Z: Integral> Div for Fraction<Z> {
    type Output = Fraction<Z>;
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Fraction<Z>) -> Fraction<Z> {
        self * rhs.recip()
    }
}

macro_rules! impl_assign_op {
    ($assign_trait:ident, $assign_fn:ident, $op_trait:ident, $op_fn:ident) => {
        impl<Z: Integral> $assign_trait for Fraction<Z> {
            fn $assign_fn(&mut self, rhs: Fraction<Z>) {
                *self = $op_trait::$op_fn(self.clone(), rhs);
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, Add, add);
impl_assign_op!(SubAssign, sub_assign, Sub, sub);
impl_assign_op!(MulAssign, mul_assign, Mul, mul);
impl_assign_op!(DivAssign, div_assign, Div, div);

impl<Z: Integral> Ring for Fraction<Z> {
    fn zero() -> Fraction<Z> {
        Fraction::default()
    }

    fn one() -> Fraction<Z> {
        Fraction::from(Z::one())
    }

    fn from_integer(i: isize) -> Fraction<Z> {
        Fraction::from(Z::from_integer(i))
    }
}

impl<Z: Integral> Ratio for Fraction<Z> {
    type Output = Fraction<Z>;

    fn ratio(numerator: Fraction<Z>, denominator: Fraction<Z>) -> Fraction<Z> {
        numerator / denominator
    }
}

impl<Z: ToF64> ToF64 for Fraction<Z> {
    fn to_f64(&self) -> f64 {
        self.numer.to_f64() / self.denom.to_f64()
    }
}

impl<Z: fmt::Display> fmt::Display for Fraction<Z> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}
