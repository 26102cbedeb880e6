#![cfg(all(test, feature = "std"))]

use crate::ck::{check_cross_law, check_cross_tqf, check_sine_law, polar_measure};
use crate::error::GeomError;
use crate::euclid;
use crate::fraction::Fraction;
use crate::object::cross;
use crate::persp::PerspEuclid;
use crate::prelude::*;
use crate::proj_plane::*;
use crate::scalar::{Integral, Quotient};

macro_rules! assert_close {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                assert!(
                    (*left_val).is_close(*right_val),
                    "{:?} !~= {:?}",
                    left_val,
                    right_val
                );
            }
        }
    };
}

trait IsClose {
    fn is_close(self, rhs: Self) -> bool;
}

impl IsClose for f64 {
    fn is_close(self, rhs: f64) -> bool {
        (self - rhs).abs() < 1e-5
    }
}

fn unitized(v: &[f64; 3]) -> [f64; 3] {
    let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    [v[0] / norm, v[1] / norm, v[2] / norm]
}

impl IsClose for Point<f64> {
    fn is_close(self, rhs: Self) -> bool {
        // Homogeneous scaling doesn't matter, so compare directions
        let c = cross(&unitized(self.coords()), &unitized(rhs.coords()));
        c.iter().all(|x| x.abs() < 1e-5)
    }
}

fn frac<Z: Integral>(n: Z, d: Z) -> Fraction<Z> {
    Fraction::new(n, d)
}

/// A Cayley–Klein geometry whose absolute conic is `-2x² + y² - 2z² = 0`
struct MyCk;

impl<K: Ring> Polarity<Point<K>> for MyCk {
    fn perp(&self, v: &Point<K>) -> Line<K> {
        let two = K::from_integer(2);
        Line::new(
            -(two.clone() * v[0].clone()),
            v[1].clone(),
            -(two * v[2].clone()),
        )
    }
}

impl<K: Ring> Polarity<Line<K>> for MyCk {
    fn perp(&self, v: &Line<K>) -> Point<K> {
        Point::new(-v[0].clone(), K::from_integer(2) * v[1].clone(), -v[2].clone())
    }
}

impl<K: Ratio> Measure<Point<K>> for MyCk {
    type Output = Quotient<K>;
    fn measure(&self, a1: &Point<K>, a2: &Point<K>) -> Quotient<K> {
        polar_measure(self, a1, a2)
    }
}

impl<K: Ratio> Measure<Line<K>> for MyCk {
    type Output = Quotient<K>;
    fn measure(&self, a1: &Line<K>, a2: &Line<K>) -> Quotient<K> {
        polar_measure(self, a1, a2)
    }
}

impl CayleyKlein for MyCk {}

/// Checks that hold in every Cayley–Klein geometry with a non-degenerate absolute
fn chk_ck<C>(ck: &C, triangle: &Triple<Point<i64>>) -> Triple<Fraction<i64>>
where
    C: CayleyKlein
        + Measure<Point<i64>, Output = Fraction<i64>>
        + Measure<Line<i64>, Output = Fraction<i64>>,
{
    let (a1, a2, a3) = triangle.clone();
    let trilateral = tri_dual(triangle);
    let (l1, _, _) = trilateral.clone();

    // Altitudes
    {
        let (t1, t2, t3) = ck.tri_altitude(triangle);
        assert!(ck.is_perpendicular(&l1, &t1));
        assert!(coincident(&t1, &t2, &t3));

        let o = ck.orthocenter(triangle);
        assert!(o.incident(&t3));
        assert_eq!(o, t1 * t2);

        // a1 is the orthocenter of the triangle formed by the orthocenter and the other two points
        assert_eq!(ck.orthocenter(&(o, a2.clone(), a3.clone())), a1);
    }

    // Reflection is an involution
    {
        let tau = ck.reflect(&l1);
        assert_eq!(tau.apply(&tau.apply(&a1)), a1);
        assert_ne!(tau.apply(&a1), a1);
    }

    let q = ck.tri_quadrance(triangle);
    let s = ck.tri_spread(&trilateral);

    // Spread law, cross law and its dual
    {
        assert!(check_sine_law(&q, &s));
        assert_eq!(check_cross_law(&s, q.2.clone()), Fraction::from(0));
        assert_eq!(check_cross_law(&q, s.2.clone()), Fraction::from(0));
    }

    // Triple quad formula for collinear points
    {
        let a4 = plucker(2, &a1, 3, &a2);
        let qc = ck.tri_quadrance(&(a1.clone(), a2.clone(), a4));
        assert_eq!(check_cross_tqf(&qc), Fraction::from(0));
        assert_ne!(check_cross_tqf(&q), Fraction::from(0));
    }

    q
}

#[test]
fn test_fraction() {
    let p = frac::<i64>(3, 4);
    let q = frac(5, 6);
    let inf = frac(1, 0);
    let nan = frac(0, 0);
    let zero = frac(0, 1);

    assert_eq!(p, frac(30, 40));
    assert_eq!(p, frac(-3, -4));
    assert_eq!(p.clone() + q.clone(), frac(19, 12));
    assert_eq!(p.clone() - q.clone(), frac(-1, 12));
    assert_eq!(p.clone() * q.clone(), frac(5, 8));
    assert_eq!(p.clone() / q.clone(), frac(9, 10));
    assert_eq!(*frac(6, -8).numer(), -3);
    assert_eq!(*frac(6, -8).denom(), 4);

    // Lowest terms with a positive denominator, whatever the common factor
    for k in [1i64, -1, 2, -3, 7, -12, 1000] {
        let f = frac(-3 * k, 4 * k);
        assert_eq!((*f.numer(), *f.denom()), (-3, 4));
        assert_eq!(frac(3 * k, 4 * k), p);
        assert_eq!(frac(k, 0), if k > 0 { inf.clone() } else { -inf.clone() });
    }

    // Ordering
    assert!(-inf.clone() < zero);
    assert!(zero < inf);
    assert!(inf < nan);
    assert!(frac::<i64>(-1, 2) < frac(1, 3));
    assert_eq!(p.cmp_integer(&1), core::cmp::Ordering::Less);
    assert!(frac(8, 4).eq_integer(&2));

    // Infinity and NaN compose without panicking
    assert_eq!(inf, inf.clone() * p.clone());
    assert_eq!(inf, inf.clone() * inf.clone());
    assert_eq!(-inf.clone(), inf.clone() * -p.clone());
    assert_eq!(inf, p.clone() / zero.clone());
    assert_eq!(inf, inf.clone() / zero.clone());
    assert_eq!(inf, inf.clone() + inf.clone());
    assert_eq!(nan, nan.clone());
    assert_eq!(nan, inf.clone() * zero.clone());
    assert_eq!(nan, -inf.clone() * zero.clone());
    assert_eq!(nan, inf.clone() / inf.clone());
    assert_eq!(nan, nan.clone() * zero.clone());
    assert_eq!(nan, inf.clone() - inf.clone());
    assert_ne!(nan, zero);
    assert!(nan.is_nan() && inf.is_infinite() && !p.is_infinite());

    assert_eq!(frac::<i64>(-3, 4).to_string(), "-3/4");
    assert_close!(crate::scalar::ToF64::to_f64(&p), 0.75);
}

#[test]
fn test_gcd() {
    use crate::scalar::{gcd, lcm};
    assert_eq!(gcd(12, 18), 6);
    assert_eq!(gcd(-12, 18), 6);
    assert_eq!(gcd(0, -5), 5);
    assert_eq!(gcd(0, 0), 0);
    assert_eq!(lcm(4, 6), 12);
    assert_eq!(lcm(0, 6), 0);
}

#[test]
fn test_join_meet() {
    let p = Point::new(1, 3, 2);
    let q = Point::new(-2, 1, -1);

    // Join & meet are exception-free with `*`
    {
        let l = &p * &q;
        assert!(p.incident(&l) && q.incident(&l));
        assert!(l.incident(&p));

        // Joining a point with itself gives the NaN line
        let nan = &p * &p;
        assert!(nan.is_nan());
        assert_eq!(nan, Line::new(0, 0, 0));
        assert_ne!(nan, l);
        assert_eq!(p, Point::new(-2, -6, -4));
    }

    // ...and report the degenerate case when checked
    {
        let l = join(&p, &q).unwrap();
        let m = Line::new(1, 1, 1);
        let r = meet(&l, &m).unwrap();
        assert!(r.incident(&l) && r.incident(&m));
        assert_eq!(join(&p, &Point::new(2, 6, 4)), Err(GeomError::Degenerate));
        assert_eq!(m.clone().meet(m), Err(GeomError::Degenerate));
        assert_eq!((&p).join(&q), Ok(l));
    }

    // Parallel lines meet at infinity
    {
        let l = Line::new(1, -1, 0);
        let m = Line::new(1, -1, 3);
        assert_eq!(meet(&l, &m).unwrap(), Point::new(1, 1, 0));
    }

    assert_eq!(GeomError::Degenerate.to_string(), "degenerate join or meet of coincident objects");
}

#[test]
fn test_incidence() {
    let l = Line::new(1, -1, 0);
    let pts = [Point::new(1, 1, 1), Point::new(2, 2, 1), Point::new(3, 3, 5)];
    assert!(coincident_all(&l, &pts));
    assert!(!coincident_all(&l, &[Point::new(1, 1, 1), Point::new(1, 2, 1)]));
    assert!(coincident(&pts[0], &pts[1], &pts[2]));

    // Dually, three lines through a point are concurrent
    let o = Point::new(1, 2, 1);
    let (l1, l2, l3) = (
        &o * &Point::new(0, 0, 1),
        &o * &Point::new(1, 0, 0),
        &o * &Point::new(3, -1, 2),
    );
    assert!(coincident(&l1, &l2, &l3));
    assert!(incident(&o, &l3));
}

#[test]
fn test_harmonic() {
    let a: Point<i64> = Point::new(1, 2, 3);
    let b = Point::new(4, 5, 6);
    let c = plucker(2, &a, 3, &b);
    let d = harm_conj(&a, &b, &c);
    assert_eq!(d, Point::new(10, 11, 12));
    assert!(coincident(&a, &b, &d));

    assert_eq!(cross_ratio(&a, &b, &c, &d), frac(-1, 1));
    assert_eq!(cross_ratio_projected(&a, &b, &c, &d), frac(-1, 1));
    assert!(is_harmonic(&a, &b, &c, &d));
    assert!(!is_harmonic(&a, &b, &c, &plucker(1, &a, 1, &b)));

    // The harmonic conjugate of the harmonic conjugate is the original point
    assert_eq!(harm_conj(&a, &b, &d), c);

    // Checked variant
    assert_eq!(checked_harm_conj(&a, &b, &c), Ok(d));
    assert_eq!(
        checked_harm_conj(&a, &b, &Point::new(0, 0, 1)),
        Err(GeomError::NotCollinear)
    );

    // Projected cross-ratio falls back to the second coordinate plane
    {
        let a = Point::new(1, 0, 1);
        let b = Point::new(1, 0, 2);
        let c = plucker(1, &a, 2, &b);
        let d = harm_conj(&a, &b, &c);
        assert_eq!(d, Point::new(1, 0, 3));
        assert_eq!(cross_ratio_projected(&a, &b, &c, &d), frac(-1, 1));
    }

    // Dually, for four concurrent lines
    {
        let l = Line::new(1, 2, 3);
        let m = Line::new(4, 5, 6);
        let n = plucker(2, &l, 3, &m);
        assert!(is_harmonic(&l, &m, &n, &harm_conj(&l, &m, &n)));
    }
}

#[test]
fn test_involution() {
    let m = Line::new(1, 2, 3);
    let o = Point::new(4, -5, 6);
    let tau = Involution::new(m.clone(), o.clone());

    let p = Point::new(7, 1, -2);
    let tp = tau.apply(&p);
    assert_ne!(tp, p);
    assert_eq!(tau.apply(&tp), p);

    // Points on the mirror, and the center itself, are fixed
    let on_mirror = Point::new(1, 1, -1);
    assert!(on_mirror.incident(&m));
    assert_eq!(tau.apply(&on_mirror), on_mirror);
    assert_eq!(tau.apply(&o), o);

    // p, its image, and the center are collinear
    assert!(coincident(&p, &tp, &o));

    let l = Line::new(2, -1, 5);
    assert_eq!(tau.apply_dual(&tau.apply_dual(&l)), l);
    assert_eq!(tau.mirror(), &m);
    assert_eq!(tau.center(), &o);
}

#[test]
fn test_desargues() {
    let a = Point::new(1, 2, 3);
    let b = Point::new(4, -5, 6);
    let c = Point::new(-7, 8, 9);
    let o = Point::new(2, 1, 1);
    let d = plucker(1, &o, 2, &a);
    let e = plucker(1, &o, -1, &b);
    let f = plucker(3, &o, 1, &c);

    let tri1 = (a, b, c);
    let tri2 = (d, e, f);
    assert!(persp(&tri1, &tri2));
    assert!(persp(&tri_dual(&tri1), &tri_dual(&tri2)));
    assert!(check_desargues(&tri1, &tri2));

    // Not in perspective from a point, nor from a line
    let tri3 = (tri2.0.clone(), tri2.1.clone(), Point::new(5, 1, -2));
    assert!(!persp(&tri1, &tri3));
    assert!(!persp(&tri_dual(&tri1), &tri_dual(&tri3)));
    assert!(check_desargues(&tri1, &tri3));
}

#[test]
fn test_pappus() {
    let a = Point::new(1, 0, 1);
    let b = Point::new(0, 1, 1);
    let co1 = (a.clone(), b.clone(), plucker(1, &a, 2, &b));

    let p1 = Point::new(2, 1, 1);
    let p2 = Point::new(1, 3, 2);
    let co2 = (p1.clone(), p2.clone(), plucker(3, &p1, -1, &p2));
    assert!(check_pappus(&co1, &co2));
}

#[test]
fn test_ratio_ratio() {
    assert_eq!(ratio_ratio(1, 2, 3, 4), frac(2, 3));
    assert_eq!(ratio_ratio(1., 2., 3., 4.), 2. / 3.);

    // Each half is reduced before dividing
    let big = 4_000_000_000i64;
    assert_eq!(ratio_ratio(big, big, big, big), frac(1, 1));
    assert_eq!(ratio_ratio(big, 3, big, 7), frac(7, 3));
    assert_eq!(
        ratio_ratio(214245000i64, 2217435750000, -214245000, 2217435750000),
        frac(-1, 1)
    );

    // Zero denominators
    assert_eq!(ratio_ratio(1, 1, 0, -1), frac(1, 0));
    assert_eq!(ratio_ratio(-1, 1, 0, 1), frac(-1, 0));
    assert!(ratio_ratio::<i32>(0, 1, 0, 1).is_nan());
}

#[test]
fn test_cross_ratio_large() {
    // Dot products of the order of 10^5 to 10^6 with 32 bit coefficients
    let a: Point<i32> = Point::new(1, 2, 3);
    let b = Point::new(4, 5, 6);
    let c = plucker(2, &a, 3, &b);
    let d = harm_conj(&a, &b, &c);
    assert_eq!(cross_ratio(&a, &b, &c, &d), frac(-1, 1));
    assert!(is_harmonic(&a, &b, &c, &d));

    // Harmonic pencil of altitudes, with dot products beyond 10^12
    let triangle: Triple<Point<i64>> = (Point::new(1, 3, 1), Point::new(4, 2, 1), Point::new(4, -3, 1));
    let (t1, t2, t3) = euclid::tri_altitude(&triangle);
    let t4 = harm_conj(&t1, &t2, &t3);
    assert_eq!(cross_ratio(&t1, &t2, &t3, &t4), frac(-1, 1));
    assert!(is_harmonic(&t1, &t2, &t3, &t4));

    // A point far from the origin is at zero quadrance from itself
    let p: Point<i64> = Point::new(100000, 0, 0);
    assert_eq!(Elliptic.quadrance(&p, &p), frac(0, 1));
    assert_eq!(Hyperbolic.quadrance(&p, &p), frac(0, 1));
    let l: Line<i64> = Line::new(0, 100000, 100000);
    assert_eq!(Elliptic.spread(&l, &l), frac(0, 1));
}

fn chk_perp_perp<C>(ck: &C)
where
    C: Polarity<Point<i64>> + Polarity<Line<i64>>,
{
    let pts: [Point<i64>; 3] = [Point::new(1, 3, 1), Point::new(4, 2, 1), Point::new(-7, 0, 5)];
    for p in &pts {
        let l = <C as Polarity<Point<i64>>>::perp(ck, p);
        assert_eq!(&<C as Polarity<Line<i64>>>::perp(ck, &l), p);
    }
    let lines: [Line<i64>; 3] = [Line::new(1, -1, 0), Line::new(2, 5, -3), Line::new(0, 0, 1)];
    for l in &lines {
        let p = <C as Polarity<Line<i64>>>::perp(ck, l);
        assert_eq!(&<C as Polarity<Point<i64>>>::perp(ck, &p), l);
    }
}

#[test]
fn test_perp_perp() {
    chk_perp_perp(&Elliptic);
    chk_perp_perp(&Hyperbolic);
    chk_perp_perp(&MyCk);
}

#[test]
fn test_elliptic() {
    let triangle = (Point::new(1, 3, 1), Point::new(4, 2, 1), Point::new(1, 1, -1));
    let q = chk_ck(&Elliptic, &triangle);
    assert_eq!(q, (frac(38, 63), frac(8, 11), frac(10, 21)));

    // The quadrance between a point and itself is zero
    assert_eq!(Elliptic.quadrance(&triangle.0, &triangle.0), frac(0, 1));
}

#[test]
fn test_hyperbolic() {
    let triangle = (Point::new(1, 3, 1), Point::new(4, 2, 1), Point::new(1, 1, -1));
    let q = chk_ck(&Hyperbolic, &triangle);
    assert_eq!(q, (frac(-30, 19), frac(-16, 9), frac(10, 19)));

    let (l1, l2, _) = tri_dual(&triangle);
    assert_eq!(Hyperbolic.spread(&l1, &l2), frac(-49, 120));
}

#[test]
fn test_custom_ck() {
    let triangle = (Point::new(1, 3, 1), Point::new(4, 2, 1), Point::new(1, 1, -1));
    let q = chk_ck(&MyCk, &triangle);
    assert_eq!(q, (frac(37, 45), frac(8, 5), frac(83, 75)));
}

#[test]
#[cfg(feature = "bigint")]
fn test_ck_bigint() {
    use num_bigint::BigInt;

    let pt = |x: i64, y: i64, z: i64| Point::new(BigInt::from(x), BigInt::from(y), BigInt::from(z));
    let triangle = (pt(1, 3, 1), pt(4, 2, 1), pt(1, 1, -1));
    let trilateral = tri_dual(&triangle);

    let q = Elliptic.tri_quadrance(&triangle);
    let s = Elliptic.tri_spread(&trilateral);
    assert!(check_sine_law(&q, &s));
    assert_eq!(q.0, Fraction::new(BigInt::from(38), BigInt::from(63)));
}

#[test]
fn test_ck_float() {
    use approx::assert_abs_diff_eq;

    let triangle = (
        Point::new(1., 3., 1.),
        Point::new(4., 2., 1.),
        Point::new(1., 1., -1.),
    );
    let (q1, q2, q3) = Hyperbolic.tri_quadrance(&triangle);
    assert_abs_diff_eq!(q1, -30. / 19., epsilon = 1e-12);
    assert_abs_diff_eq!(q2, -16. / 9., epsilon = 1e-12);
    assert_abs_diff_eq!(q3, 10. / 19., epsilon = 1e-12);

    let (l1, _, _) = tri_dual(&triangle);
    let tau = Elliptic.reflect(&l1);
    assert_close!(tau.apply(&tau.apply(&triangle.0)), triangle.0);
}

#[test]
fn test_persp_euclid() {
    let ck: PerspEuclid<i64> =
        PerspEuclid::new(Point::new(0, 1, 1), Point::new(1, 0, 0), Line::new(0, -1, 1));

    // Triangle in general position
    {
        let triangle: Triple<Point<i64>> =
            (Point::new(1, -2, 3), Point::new(4, 3, 6), Point::new(-7, 1, 2));
        let trilateral = tri_dual(&triangle);
        let (a1, a2, a3) = triangle.clone();
        let (l1, _, _) = trilateral.clone();

        let (t1, t2, t3) = ck.tri_altitude(&triangle);
        assert!(ck.is_perpendicular(&t1, &l1));
        assert!(coincident(&t1, &t2, &t3));

        let o = ck.orthocenter(&triangle);
        assert_eq!(o, t2 * t3);
        assert_eq!(ck.orthocenter(&(o, a2.clone(), a3.clone())), a1);

        let tau = ck.reflect(&l1);
        assert_eq!(tau.apply(&tau.apply(&a1)), a1);

        let q = ck.tri_quadrance(&triangle);
        let s = ck.tri_spread(&trilateral);
        assert_eq!(q, (frac(625, 9), frac(269, 5), frac(146, 45)));
        assert!(check_sine_law(&q, &s));
        assert!(check_sine_law(&s, &q));

        assert_eq!(ck.quadrance(&a1, &a1), frac(0, 1));
        assert_eq!(ck.spread(&l1, &l1), frac(0, 1));

        // The midpoint is equidistant from both ends
        let m = ck.midpoint(&a1, &a2);
        assert_eq!(ck.quadrance(&a1, &m), ck.quadrance(&m, &a2));
    }

    // Medians and the triple quad formula
    {
        let triangle: Triple<Point<i64>> =
            (Point::new(-1, 0, 3), Point::new(4, -2, 1), Point::new(3, -1, 1));
        let (a1, a2, a3) = triangle.clone();
        let (l1, l2, l3) = tri_dual(&triangle);

        assert!(!ck.is_parallel(&l1, &l2));
        assert!(!ck.is_parallel(&l2, &l3));

        let (m1, m2, m3) = ck.tri_midpoint(&triangle);
        assert!(coincident(&(&a1 * &m1), &(&a2 * &m2), &(&a3 * &m3)));

        let (q1, q2, q3) = ck.tri_quadrance(&triangle);
        let two = frac(2, 1);
        let tqf = crate::scalar::sq(q1.clone() + q2.clone() + q3.clone())
            - two * (q1.clone() * q1.clone() + q2.clone() * q2.clone() + q3.clone() * q3.clone());
        assert_eq!(tqf, euclid::archimedes(&q1, &q2, &q3));

        // Archimedes's function vanishes for collinear points
        let a4 = plucker(2, &a1, 3, &a2);
        let (q1, q2, q3) = ck.tri_quadrance(&(a1, a2, a4));
        assert_eq!(euclid::archimedes(&q1, &q2, &q3), frac(0, 1));
    }

    assert_eq!(ck.i_re(), &Point::new(0, 1, 1));
    assert_eq!(ck.i_im(), &Point::new(1, 0, 0));
}

#[test]
fn test_euclid() {
    let triangle: Triple<Point<i64>> = (Point::new(1, 3, 1), Point::new(4, 2, 1), Point::new(4, -3, 1));
    let trilateral = tri_dual(&triangle);
    let (a1, a2, a3) = triangle.clone();
    let (l1, l2, l3) = trilateral.clone();

    // Altitudes
    {
        let (t1, t2, t3) = euclid::tri_altitude(&triangle);
        assert!(euclid::is_perpendicular(&t1, &l1));
        assert_eq!(euclid::spread(&t1, &l1), frac(1, 1));
        assert_eq!(cross_ratio(&t1, &t2, &t3, &harm_conj(&t1, &t2, &t3)), frac(-1, 1));

        let o = euclid::orthocenter(&triangle);
        assert_eq!(o, Point::new(6, 3, 1));
        assert!(o.incident(&t1));
        assert_eq!(euclid::orthocenter(&(o, a2.clone(), a3.clone())), a1);
    }

    // Measures
    {
        let q = euclid::tri_quadrance(&triangle);
        let s = euclid::tri_spread(&trilateral);
        assert_eq!(q, (frac(25, 1), frac(45, 1), frac(10, 1)));
        assert_eq!(s, (frac(1, 2), frac(9, 10), frac(1, 5)));
        assert!(check_sine_law(&q, &s));

        // Cross plus spread is one
        let c3 = euclid::cross_s(&l1, &l2);
        assert_eq!(c3, frac(4, 5));
        assert_eq!(c3 + s.2.clone(), frac(1, 1));

        // Triple spread formula
        assert_eq!(check_cross_tqf(&s), frac(0, 1));

        // Triple quad formula for collinear points
        let a4 = plucker(3, &a1, 4, &a2);
        let (q1, q2, q3) = euclid::tri_quadrance(&(a1.clone(), a2.clone(), a4));
        assert_eq!(euclid::archimedes(&q1, &q2, &q3), frac(0, 1));

        // Archimedes's function is 16 times the squared area
        assert_eq!(euclid::archimedes(&q.0, &q.1, &q.2), frac(900, 1));
    }

    // Parallel lines
    {
        assert!(euclid::is_parallel(&Line::new(1, 2, 3), &Line::new(-2, -4, 7)));
        assert!(!euclid::is_parallel(&l1, &l3));
    }

    // Midpoints and medians
    {
        let (m1, m2, m3) = euclid::tri_midpoint(&triangle);
        assert_eq!(m1, Point::new(8, -1, 2));
        assert_eq!(euclid::midpoint(&a1, &a2), Point::new(5, 5, 2));
        assert!(coincident(&(&a1 * &m1), &(&a2 * &m2), &(&a3 * &m3)));
    }

    // Reflection
    {
        let tau = euclid::reflect(&l1);
        assert_eq!(tau.apply(&a1), Point::new(7, 3, 1));
        assert_eq!(tau.apply(&tau.apply(&a1)), a1);
        assert_eq!(tau.apply(&a2), a2);
    }
}

#[test]
fn test_euclid_float() {
    let a = Point::new(1., 2., 1.);
    let b = Point::new(4., 6., 1.);
    assert_close!(euclid::distance(&a, &b), 5.);
    assert_close!(euclid::distance(&Point::new(0, 0, 1), &Point::new(6, 8, 2)), 5.);

    let l = Line::new(0., 1., 0.);
    let m = Line::new(1., -1., 0.);
    assert_close!(euclid::angle(&l, &m), core::f64::consts::FRAC_PI_4);

    let tau = euclid::reflect(&Line::new(1., -1., 0.));
    assert_close!(tau.apply(&Point::new(3., 1., 1.)), Point::new(1., 3., 1.));
}

#[test]
fn test_ptolemy() {
    let pts = [
        euclid::uc_point(1, 0),
        euclid::uc_point(3, 4),
        euclid::uc_point(-1, 2),
        euclid::uc_point(0, 1),
    ];
    assert_eq!(pts[1], Point::new(-7, 24, 25));

    let q = |i: usize, j: usize| euclid::quadrance(&pts[i], &pts[j]);
    let quad = (q(0, 1), q(1, 2), q(2, 3), q(0, 3), q(0, 2), q(1, 3));
    assert_eq!(quad.0, frac(64, 25));
    assert!(euclid::ptolemy(&quad));

    // Move a point off the circle
    let off = Point::new(1, 1, 1);
    let q = |a: &Point<i64>, b: &Point<i64>| euclid::quadrance(a, b);
    let quad = (
        q(&pts[0], &pts[1]),
        q(&pts[1], &pts[2]),
        q(&pts[2], &off),
        q(&pts[0], &off),
        q(&pts[0], &pts[2]),
        q(&pts[1], &off),
    );
    assert!(!euclid::ptolemy(&quad));

    let (m, p) = euclid::cqq(&frac(1, 1), &frac(1, 1), &frac(1, 1), &frac(1, 1));
    assert_eq!(m, frac(8, 1));
    assert_eq!(p, frac(0, 1));
}

#[test]
#[cfg(feature = "complex")]
fn test_complex() {
    use num_complex::Complex;

    let zero = Complex::new(0., 0.);
    let one = Complex::new(1., 0.);
    let i = Complex::new(0., 1.);

    // The circular points are isotropic, so `aux` is incident with them
    let circ = Point::new(one, i, zero);
    assert!(circ.incident(&circ.aux()));
    assert!(!Point::new(one, one, zero).incident(&Point::new(one, one, zero).aux()));

    // Both circular points lie on the line at infinity
    let conj = Point::new(one, -i, zero);
    assert_eq!(circ.clone() * conj, Line::new(zero, zero, one));
}
