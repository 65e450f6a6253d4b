use super::*;
use crate::colour::{Colour, Palette};
use crate::errors::FractalError;
use crate::geom2::Point;
use crate::shapes::{Primitive, Recorder};
use nalgebra::vector;
use proptest::prelude::*;

fn poly(c: &[f64]) -> ComplexPolynomial {
    ComplexPolynomial::new(c.to_vec()).unwrap()
}

#[test]
fn identity_and_square_maps() {
    assert_eq!(poly(&[0.0, 1.0]).evaluate_at(vector![2.0, 0.0]), vector![2.0, 0.0]);
    assert_eq!(poly(&[0.0, 0.0, 1.0]).evaluate_at(vector![0.0, 2.0]), vector![-4.0, 0.0]);
    assert_eq!(poly(&[1.0, 1.0]).evaluate_at(2.0), vector![3.0, 0.0]);
    // 1 + z + z^2 at i is i
    assert_eq!(poly(&[1.0, 1.0, 1.0]).evaluate_at(vector![0.0, 1.0]), vector![0.0, 1.0]);
}

#[test]
fn degree_counts_trailing_zeros() {
    assert_eq!(poly(&[3.0]).degree(), 0);
    assert_eq!(poly(&[0.0, 1.0, 0.0]).degree(), 2);
    assert!(matches!(
        ComplexPolynomial::new(vec![]),
        Err(FractalError::InvalidConfiguration { .. })
    ));
}

#[test]
fn display_matches_hand_written_form() {
    let cases: &[(&[f64], &str)] = &[
        (&[0.0, 1.0], "z"),
        (&[0.0, 0.0, 1.0], "z^2"),
        (&[1.0, 0.0, -2.0, 1.0], "z^3 - 2z^2 + 1"),
        (&[0.0, 2.5, 0.0, -1.0], "-z^3 + 2.5z"),
        (&[0.0, 0.0, -2.0], "-2z^2"),
        (&[-3.0], "-3"),
        (&[0.0, 0.0], "0"),
        (
            &[1.0, 1.0, 1.0, 1.0, -1.0, 1.0, -1.0],
            "-z^6 + z^5 - z^4 + z^3 + z^2 + z + 1",
        ),
    ];
    for (c, want) in cases {
        assert_eq!(poly(c).to_string(), *want);
    }
}

#[test]
fn parsing_skips_non_numbers() {
    let p: ComplexPolynomial = " 1 x 2\t-0.5 NaN ".parse().unwrap();
    assert_eq!(p.coefficients(), &[1.0, 2.0, -0.5]);
    let d: ComplexPolynomial = DEFAULT_COEFFICIENTS.parse().unwrap();
    assert_eq!(d.degree(), 6);
    assert!("".parse::<ComplexPolynomial>().is_err());
    assert!("a b c".parse::<ComplexPolynomial>().is_err());
}

#[test]
fn circle_image_is_closed() {
    let p = poly(&[1.0, 0.0, 0.0, 0.0, 1.0]);
    let segs = circle_image_segments(&p, 1.5, DEFAULT_SAMPLES).unwrap();
    assert_eq!(segs.len(), DEFAULT_SAMPLES);
    assert_eq!(segs[0].start, segs[segs.len() - 1].end);
    for w in segs.windows(2) {
        assert_eq!(w[0].end, w[1].start);
    }
    assert_eq!(segs[0].start, vector![1.0 + 1.5f64.powi(4), 0.0]);
}

#[test]
fn circle_image_rejects_bad_input() {
    let p = poly(&[0.0, 1.0]);
    for (r, n) in [(1.0, 0), (-1.0, 10), (f64::NAN, 10), (f64::INFINITY, 10)] {
        assert!(circle_image_segments(&p, r, n).is_err(), "r = {r}, n = {n}");
    }
    // radius 0 collapses to a point but is allowed
    let segs = circle_image_segments(&p, 0.0, 4).unwrap();
    assert!(segs.iter().all(|s| s.start == Point::zeros() && s.end == Point::zeros()));
}

#[test]
fn segment_colours_cycle_through_palette() {
    let cfg = CircleImageCfg {
        samples: 10,
        palette: vec![Colour::RED, Colour::GREEN, Colour::BLUE],
        thickness: 3.0,
    };
    let mut rec = Recorder::new();
    let n = draw_circle_image(&poly(&[0.0, 1.0]), 2.0, &cfg, &mut rec).unwrap();
    assert_eq!(n, 10);
    assert_eq!(rec.len(), 10);
    for (i, call) in rec.calls.iter().enumerate() {
        match &call.primitives[..] {
            [Primitive::Stroke {
                colour,
                thickness,
                closed,
                path,
            }] => {
                assert_eq!(*colour, cfg.palette[i % 3]);
                assert_eq!(*thickness, 3.0);
                assert!(!*closed);
                assert_eq!(path.len(), 2);
            }
            other => panic!("expected a single stroke, got {other:?}"),
        }
    }

    let empty = CircleImageCfg {
        palette: vec![],
        ..cfg
    };
    assert!(draw_circle_image(&poly(&[0.0, 1.0]), 2.0, &empty, &mut rec).is_err());
    assert_eq!(rec.len(), 10);
}

#[test]
fn default_scheme_resolves_to_five_colours() {
    let cfg = CircleImageCfg::default();
    assert_eq!(cfg.palette, Palette::standard().scheme("black purple blue red white"));
    assert_eq!(cfg.palette.len(), 5);
    assert_eq!(cfg.samples, 400);
}

#[test]
fn radius_driver_bounces() {
    // speed 200 makes the step exactly 1
    let mut d = RadiusDriver::new(200.0, 3.0);
    let radii: Vec<f64> = (0..10).map(|_| d.tick()).collect();
    assert_eq!(radii, vec![1.0, 2.0, 3.0, 2.0, 1.0, 0.0, 1.0, 2.0, 3.0, 2.0]);

    let mut d = RadiusDriver::default();
    let step = 5.0 / 3.0 / 1000.0;
    assert!((d.tick() - step).abs() < 1e-15);
    let mut turned = 0;
    let mut last = d.direction;
    for _ in 0..10_000 {
        let r = d.tick();
        assert!(r > -2.0 * step && r < d.max_radius + 2.0 * step);
        if d.direction != last {
            turned += 1;
            last = d.direction;
        }
    }
    assert!(turned >= 2);
}

#[test]
fn driven_radii_stay_sampleable_past_the_trough() {
    // 3600 ticks per period at the default speed; rounding drifts below zero at the trough
    let p: ComplexPolynomial = DEFAULT_COEFFICIENTS.parse().unwrap();
    let mut d = RadiusDriver::default();
    let mut bounced = false;
    for frame in 0..4000 {
        let r = d.tick();
        assert!(r >= 0.0, "frame {frame}: radius {r}");
        bounced |= r == 0.0;
        let segs = circle_image_segments(&p, r, DEFAULT_SAMPLES).unwrap();
        assert_eq!(segs.len(), DEFAULT_SAMPLES);
    }
    assert!(bounced);
    assert_eq!(d.direction, 1.0);
}

proptest! {
    #[test]
    fn sampled_images_always_close(
        coeffs in prop::collection::vec(-3.0..3.0f64, 1..8),
        radius in 0.0..4.0f64,
        samples in 1usize..200,
    ) {
        let p = ComplexPolynomial::new(coeffs).unwrap();
        let segs = circle_image_segments(&p, radius, samples).unwrap();
        prop_assert_eq!(segs.len(), samples);
        prop_assert_eq!(segs[0].start, segs[samples - 1].end);
    }
}
