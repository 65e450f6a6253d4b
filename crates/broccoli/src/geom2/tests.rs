use super::*;
use crate::errors::GeomError;
use nalgebra::{matrix, vector};
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn complex_multiplication_and_powers() {
    let i = vector![0.0, 1.0];
    assert_eq!(i.by(&i), vector![-1.0, 0.0]);
    assert_eq!(vector![0.0, 2.0].power(2), vector![-4.0, 0.0]);
    assert_eq!(vector![3.0, -7.0].power(0), vector![1.0, 0.0]);
    let z = vector![1.0, 1.0];
    assert_eq!(z.power(3), z.by(&z).by(&z));
    // z^-2 · z^2 = 1
    let w = vector![0.5, -2.0];
    let one = w.power(-2).by(&w.power(2));
    assert!((one - vector![1.0, 0.0]).norm() < 1e-12);
}

#[test]
fn rotations() {
    let p = vector![1.0, 0.0];
    let q = p.rotate_about_origin(FRAC_PI_2);
    assert!((q - vector![0.0, 1.0]).norm() < 1e-15);
    let r = vector![2.0, 1.0].rotate_about(&vector![1.0, 1.0], PI);
    assert!((r - vector![0.0, 1.0]).norm() < 1e-15);
}

#[test]
fn angles_signed_and_unsigned() {
    let a = vector![1.0, 0.0];
    let b = vector![0.0, 3.0];
    assert!((a.angle_between(&b) - FRAC_PI_2).abs() < 1e-15);
    assert!((a.directed_angle_between(&b) - FRAC_PI_2).abs() < 1e-15);
    assert!((b.directed_angle_between(&a) + FRAC_PI_2).abs() < 1e-15);
    // parallel vectors: clamped acos stays finite
    let c = vector![0.1, 0.3];
    assert!(c.angle_between(&(c * 3.0)).abs() < 1e-7);
}

#[test]
fn between_vectors_sector() {
    let p = vector![1.0, 0.0];
    let q = vector![0.0, 1.0];
    assert!(vector![1.0, 1.0].between_vectors(&p, &q));
    assert!(!vector![-1.0, 1.0].between_vectors(&p, &q));
    assert!(!vector![1.0, -0.5].between_vectors(&p, &q));
}

#[test]
fn parallel_checks_are_exact() {
    assert!(vector![2.0, 4.0].parallel_with(&vector![1.0, 2.0]));
    assert!(vector![-3.0, 0.0].parallel_with(&vector![1.0, 0.0]));
    assert!(vector![0.0, 5.0].parallel_with(&vector![0.0, -1.0]));
    assert!(!vector![0.0, 0.0].parallel_with(&vector![1.0, 0.0]));
    assert!(!vector![1.0, 0.0].parallel_with(&vector![0.0, 0.0]));
    assert_eq!(vector![2.0, 4.0].parallel_multiplier(&vector![1.0, 2.0]), 2.0);
    assert_eq!(vector![0.0, -3.0].parallel_multiplier(&vector![0.0, 1.0]), -3.0);
}

#[test]
fn distances() {
    let a = vector![1.0, 2.0];
    let b = vector![4.0, -2.0];
    assert_eq!(a.distance_from(&b), 5.0);
    assert_eq!(a.manhattan_distance_from(&b), 7.0);
    assert_eq!(a.chebyshev_distance_from(&b), 4.0);
}

#[test]
fn sum_and_polar() {
    let s = sum([vector![1.0, 2.0], vector![3.0, 4.0], vector![-1.0, 0.5]]);
    assert_eq!(s, vector![3.0, 6.5]);
    assert_eq!(sum(Vec::<Point>::new()), origin());
    assert!((from_polar(2.0, PI) - vector![-2.0, 0.0]).norm() < 1e-15);
    assert_eq!(from_real(4.5), vector![4.5, 0.0]);
}

#[test]
fn solve_and_singular() {
    let m = matrix![2.0, 0.0; 0.0, 4.0];
    assert_eq!(solve2(m, vector![2.0, 2.0]).unwrap(), vector![1.0, 0.5]);
    let s = matrix![1.0, 2.0; 2.0, 4.0];
    assert!(matches!(
        solve2(s, vector![1.0, 1.0]),
        Err(GeomError::SingularMatrix { .. })
    ));
    assert!(inverse2(s).is_err());
}

#[test]
fn line_normalization_and_sides() {
    // 2x - y + 1 = 0  ->  y = 2x + 1
    let l = Line::new(2.0, -1.0, 1.0).unwrap();
    assert_eq!((l.a, l.b, l.c), (2.0, -1.0, 1.0));
    let scaled = Line::new(4.0, -2.0, 2.0).unwrap();
    assert!(l.coincides_with(&scaled));
    let v = Line::new(3.0, 0.0, -6.0).unwrap();
    assert_eq!((v.a, v.b, v.c), (-1.0, 0.0, 2.0));
    assert!(matches!(
        Line::new(0.0, 0.0, 1.0),
        Err(GeomError::DegenerateLine { .. })
    ));

    let diag = Line::through(vector![0.0, 0.0], vector![1.0, 1.0]);
    assert!(diag.same_side(vector![0.0, 1.0], vector![-3.0, 5.0]));
    assert!(!diag.same_side(vector![0.0, 1.0], vector![1.0, 0.0]));
    // on the line is on neither side
    assert!(!diag.same_side(vector![2.0, 2.0], vector![0.0, 1.0]));
}

#[test]
fn line_intersections() {
    let diag = Line::through(vector![0.0, 0.0], vector![1.0, 1.0]);
    let vertical = Line::through(vector![2.0, -5.0], vector![2.0, 7.0]);
    let p = diag.intersection(&vertical).unwrap();
    assert!((p - vector![2.0, 2.0]).norm() < 1e-12);
    let parallel = Line::through(vector![0.0, 1.0], vector![1.0, 2.0]);
    assert_eq!(diag.intersection(&parallel), Err(GeomError::NoIntersection));
}

#[test]
fn circle_measures_and_samples() {
    let c = Circle::new(vector![1.0, -1.0], 2.0);
    assert!((c.circumference() - 4.0 * PI).abs() < 1e-12);
    assert!((c.area() - 4.0 * PI).abs() < 1e-12);
    let pts = c.sample_points(4);
    assert_eq!(pts.len(), 4);
    assert!((pts[0] - vector![3.0, -1.0]).norm() < 1e-12);
    assert!((pts[1] - vector![1.0, 1.0]).norm() < 1e-12);
    for p in pts {
        assert!((p.distance_from(&c.centre) - 2.0).abs() < 1e-12);
    }
}
