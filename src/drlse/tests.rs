use super::*;
use crate::error::Error;
use crate::field::laplacian_wrap;
use crate::image::ImageF32;

/// `c` everywhere, `-c` inside the half-open window.
fn square_lsf(w: usize, h: usize, x0: usize, x1: usize, y0: usize, y1: usize, c: f32) -> ImageF32 {
    ImageF32::from_fn(w, h, |x, y| {
        if (x0..x1).contains(&x) && (y0..y1).contains(&y) {
            -c
        } else {
            c
        }
    })
}

#[test]
fn neumann_bound_is_idempotent() {
    let f = ImageF32::from_fn(9, 7, |x, y| ((x * 31 + y * 17) % 11) as f32 - 5.0);
    let once = neumann_bound(&f).unwrap();
    let twice = neumann_bound(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn double_well_on_flat_field_reduces_to_laplacian() {
    let phi = ImageF32::filled(12, 10, 2.0);
    let reg = distance_regularization(&phi, Potential::DoubleWell);
    let lap = laplacian_wrap(&phi);
    assert_eq!(reg, lap);
    assert!(reg.data.iter().all(|&v| v == 0.0));
}

#[test]
fn single_well_on_flat_field_is_zero() {
    let phi = ImageF32::filled(6, 6, -1.0);
    let reg = distance_regularization(&phi, Potential::SingleWell);
    assert!(reg.data.iter().all(|&v| v == 0.0));
    assert!(curvature(&phi).data.iter().all(|&v| v == 0.0));
}

#[test]
fn potential_parsing_rejects_unknown_selector() {
    assert_eq!("single-well".parse::<Potential>(), Ok(Potential::SingleWell));
    assert_eq!("double-well".parse::<Potential>(), Ok(Potential::DoubleWell));
    assert_eq!(
        "triple-well".parse::<Potential>(),
        Err(Error::InvalidPotential("triple-well".into()))
    );

    let parsed: std::result::Result<EvolutionParams, _> =
        serde_json::from_str(r#"{"potential": "quadruple-well"}"#);
    assert!(parsed.is_err(), "unknown potential must not deserialize");

    let parsed: EvolutionParams = serde_json::from_str(r#"{"potential": "single-well"}"#).unwrap();
    assert_eq!(parsed.potential, Potential::SingleWell);
    assert_eq!(parsed.timestep, 2.0);
}

#[test]
fn solver_rejects_invalid_parameters() {
    let err = DrlseSolver::new(EvolutionParams::default().with_epsilon(0.0)).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { name: "epsilon", .. }));

    let err = DrlseSolver::new(EvolutionParams::default().with_timestep(-1.0)).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { name: "timestep", .. }));
}

#[test]
fn solver_rejects_mismatched_edge_indicator() {
    let solver = DrlseSolver::new(EvolutionParams::default()).unwrap();
    let phi = ImageF32::filled(10, 10, 2.0);
    let g = EdgeIndicator::uniform(10, 12, 1.0).unwrap();
    assert_eq!(
        solver.step(&phi, &g, 1, 0.0).unwrap_err(),
        Error::ShapeMismatch {
            expected: (10, 10),
            actual: (10, 12)
        }
    );
}

#[test]
fn stays_bounded_with_operational_parameters() {
    let _ = env_logger::builder().is_test(true).try_init();
    let timestep = 2.0;
    let params = EvolutionParams::default()
        .with_timestep(timestep)
        .with_weights(0.2 / timestep, 10.0, 2.0)
        .with_iterations(30, 20, 10);
    let solver = DrlseSolver::new(params).unwrap();

    let phi0 = square_lsf(48, 40, 12, 36, 10, 30, 2.0);
    let g = EdgeIndicator::uniform(48, 40, 1.0).unwrap();
    let phi = solver.evolve(&phi0, &g).unwrap();

    assert!(phi.all_finite(), "phi contains non-finite samples");
    let max_abs = phi.max_abs();
    assert!(max_abs < 1e3, "phi grew to {max_abs}");
}

#[test]
fn square_keeps_sign_pattern_after_single_well_pass() {
    let phi0 = square_lsf(200, 200, 90, 110, 90, 110, 2.0);
    let g = EdgeIndicator::uniform(200, 200, 0.5).unwrap();

    let phi = drlse_edge(&phi0, &g, 10.0, 0.1, 2.0, 2.0, 20, Potential::SingleWell, 0.0).unwrap();

    assert!(phi.get(100, 100) < 0.0, "centre became {}", phi.get(100, 100));
    for (x, y) in [(0, 0), (199, 0), (0, 199), (199, 199), (20, 180)] {
        assert!(phi.get(x, y) > 0.0, "corner ({x}, {y}) became {}", phi.get(x, y));
    }
    // The contour moved a little but the square is still there.
    assert!(phi.get(95, 100) < 0.0);
    assert!(phi.get(80, 100) > 0.0);
    assert_ne!(phi, phi0);
}

#[test]
fn drlse_edge_uses_the_alpha_it_is_given() {
    let phi0 = square_lsf(40, 40, 14, 26, 14, 26, 2.0);
    let g = EdgeIndicator::uniform(40, 40, 1.0).unwrap();
    let params = EvolutionParams::default()
        .with_timestep(2.0)
        .with_weights(0.1, 5.0, -1.5)
        .with_epsilon(1.5)
        .with_potential(Potential::DoubleWell);
    let solver = DrlseSolver::new(params).unwrap();

    let shrinking = drlse_edge(&phi0, &g, 5.0, 0.1, 1.5, 2.0, 8, Potential::DoubleWell, -1.5).unwrap();
    assert_eq!(shrinking, solver.step(&phi0, &g, 8, -1.5).unwrap());

    let still = drlse_edge(&phi0, &g, 5.0, 0.1, 1.5, 2.0, 8, Potential::DoubleWell, 0.0).unwrap();
    assert_eq!(still, solver.step(&phi0, &g, 8, 0.0).unwrap());
    assert_ne!(shrinking, still);

    let err = drlse_edge(&phi0, &g, 5.0, 0.1, 0.0, 2.0, 8, Potential::DoubleWell, 0.0).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { name: "epsilon", .. }));
}

#[test]
fn evolve_equals_flat_iteration_count() {
    let params = EvolutionParams::default().with_iterations(2, 3, 0);
    let solver = DrlseSolver::new(params).unwrap();
    let phi0 = square_lsf(30, 30, 8, 22, 8, 22, 2.0);
    let g = EdgeIndicator::from_image(&ImageF32::from_fn(30, 30, |x, y| {
        if (6..24).contains(&x) && (6..24).contains(&y) {
            180.0
        } else {
            0.0
        }
    }))
    .unwrap();

    let evolved = solver.evolve(&phi0, &g).unwrap();
    let stepped = solver.step(&phi0, &g, 6, solver.params().alpha).unwrap();
    assert_eq!(evolved, stepped);

    // Zero refinement iterations leave phi as it is.
    assert_eq!(solver.refine(&evolved, &g).unwrap(), evolved);
}

#[test]
fn divergence_guard_reports_runaway_growth() {
    let phi0 = ImageF32::from_fn(16, 16, |x, y| if (x + y) % 2 == 0 { 1.0 } else { -1.0 });
    let g = EdgeIndicator::uniform(16, 16, 1.0).unwrap();
    let params = EvolutionParams::default()
        .with_timestep(2.0)
        .with_weights(5.0, 0.0, 0.0)
        .with_potential(Potential::SingleWell)
        .with_divergence_bound(Some(1e3));
    let solver = DrlseSolver::new(params).unwrap();

    match solver.step(&phi0, &g, 50, 0.0) {
        Err(Error::Diverged { iteration, max_abs }) => {
            assert!(iteration <= 50);
            assert!(max_abs.is_nan() || max_abs > 1e3);
        }
        other => panic!("expected divergence, got {other:?}"),
    }
}
