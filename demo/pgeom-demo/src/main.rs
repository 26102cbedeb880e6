//! pgeom demo
//!
//! Checks a few classical theorems with exact arithmetic and logs the results.
//! Run with `RUST_LOG=debug` to also see the intermediate objects.

use num_bigint::BigInt;
use pgeom::ck::{check_cross_law, check_sine_law, Hyperbolic};
use pgeom::euclid;
use pgeom::prelude::*;
use pgeom::proj_plane::{check_desargues, persp, tri_dual, Triple};

fn bigint_point(x: i64, y: i64, z: i64) -> Point<BigInt> {
    Point::new(BigInt::from(x), BigInt::from(y), BigInt::from(z))
}

fn hyperbolic_laws() -> pgeom::Result<()> {
    let triangle = (bigint_point(1, 3, 1), bigint_point(4, 2, 1), bigint_point(1, 1, -1));
    let (a1, a2, a3) = &triangle;
    let trilateral = (join(a2, a3)?, join(a1, a3)?, join(a1, a2)?);
    log::debug!("trilateral: {}, {}, {}", trilateral.0, trilateral.1, trilateral.2);

    let ck = Hyperbolic;
    let q = ck.tri_quadrance(&triangle);
    let s = ck.tri_spread(&trilateral);
    log::info!("hyperbolic quadrances: {}, {}, {}", q.0, q.1, q.2);
    log::info!("hyperbolic spreads: {}, {}, {}", s.0, s.1, s.2);
    log::info!("spread law holds: {}", check_sine_law(&q, &s));
    log::info!("cross law residual: {}", check_cross_law(&s, q.2.clone()));

    let o = ck.orthocenter(&triangle);
    log::info!("orthocenter: {}", o);
    Ok(())
}

fn ptolemy() {
    let pts = [
        euclid::uc_point(1, 0),
        euclid::uc_point(3, 4),
        euclid::uc_point(-1, 2),
        euclid::uc_point(0, 1),
    ];
    for p in &pts {
        log::debug!("point on the unit circle: {}", p);
    }
    let q = |i: usize, j: usize| euclid::quadrance::<i64>(&pts[i], &pts[j]);
    let quad = (q(0, 1), q(1, 2), q(2, 3), q(0, 3), q(0, 2), q(1, 3));
    log::info!(
        "quadrances: {}, {}, {}, {}, {}, {}",
        quad.0,
        quad.1,
        quad.2,
        quad.3,
        quad.4,
        quad.5
    );
    log::info!("Ptolemy's theorem holds: {}", euclid::ptolemy(&quad));
}

fn desargues() {
    let o = Point::new(2, 1, 1);
    let tri1: Triple<Point<i64>> = (Point::new(1, 2, 3), Point::new(4, -5, 6), Point::new(-7, 8, 9));
    let tri2 = (
        plucker(1, &o, 2, &tri1.0),
        plucker(1, &o, -1, &tri1.1),
        plucker(3, &o, 1, &tri1.2),
    );
    log::info!("in perspective from a point: {}", persp(&tri1, &tri2));
    log::info!(
        "in perspective from a line: {}",
        persp(&tri_dual(&tri1), &tri_dual(&tri2))
    );
    log::info!("Desargues's theorem holds: {}", check_desargues(&tri1, &tri2));
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        let default = if cfg!(debug_assertions) { "debug" } else { "info" };
        std::env::set_var("RUST_LOG", default);
    }

    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    if let Err(e) = hyperbolic_laws() {
        log::error!("hyperbolic laws: {}", e);
    }
    ptolemy();
    desargues();
}
