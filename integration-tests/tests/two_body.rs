//! Sun–Earth orbit integrated with every method.

use approx::assert_relative_eq;
use titan_core::{State, Vector, functions::NewtonianGravity};
use titan_integration_tests::{Planet, sun_earth};
use titan_solvers::{Action, Event, Method, Solver, SolverConfig, Status};

const DAY: f64 = 86_400.0;
const YEAR: f64 = 365.256_363 * DAY;

fn orbital_radius(state: &State<Planet>) -> f64 {
    let bodies = state.bodies();
    (bodies[1].position - bodies[0].position).norm()
}

#[test]
fn every_method_produces_the_same_schedule() {
    let gravity = NewtonianGravity::default();
    let initial = sun_earth();

    for method in Method::ALL {
        let solution = method.solve(&gravity, &initial, 30.0 * DAY, DAY).unwrap();

        assert_eq!(solution.status, Status::Complete, "{method}");
        assert_eq!(solution.history.len(), 31, "{method}");
        assert!(solution.history.iter().all(|s| s.len() == 2));
        assert_eq!(solution.history[5].bodies()[1].name, "earth");
    }
}

#[test]
fn higher_order_methods_hold_the_orbit() {
    let gravity = NewtonianGravity::default();
    let initial = sun_earth();
    let radius = orbital_radius(&initial);

    for method in [Method::RungeKutta4, Method::VelocityVerlet] {
        let solution = method.solve(&gravity, &initial, YEAR, DAY / 4.0).unwrap();

        for state in &solution.history {
            let drift = (orbital_radius(state) - radius).abs() / radius;
            assert!(drift < 1e-3, "{method} drifted {drift}");
        }
    }
}

#[test]
fn euler_spirals_outward() {
    let gravity = NewtonianGravity::default();
    let initial = sun_earth();
    let radius = orbital_radius(&initial);

    let solution = Method::Euler.solve(&gravity, &initial, YEAR, DAY).unwrap();

    assert!(orbital_radius(solution.last().unwrap()) > radius);
}

#[test]
fn earth_completes_one_orbit() {
    let gravity = NewtonianGravity::default();
    let initial = sun_earth();
    let start = initial.bodies()[1].position - initial.bodies()[0].position;

    let solution = Method::RungeKutta4
        .solve(&gravity, &initial, YEAR, DAY / 8.0)
        .unwrap();
    let last = solution.last().unwrap();
    let end = last.bodies()[1].position - last.bodies()[0].position;

    // The schedule stops within a step of one full period.
    assert!((end - start).norm() / start.norm() < 1e-2);
    assert_relative_eq!(end.z, 0.0);
}

#[test]
fn configured_run_matches_direct_solve() {
    let gravity = NewtonianGravity::default();
    let initial = sun_earth();
    let config = SolverConfig::from_toml_str(&format!(
        "method = \"verlet\"\nstep_size = {DAY}\nfinal_time = {}",
        10.0 * DAY
    ))
    .unwrap();

    let configured = config.run(&gravity, &initial);
    let direct = Method::VelocityVerlet
        .solve(&gravity, &initial, 10.0 * DAY, DAY)
        .unwrap();

    assert_eq!(configured, direct);
}

#[test]
fn observer_sees_every_state_and_can_stop() {
    let gravity = NewtonianGravity::default();
    let mut times = Vec::new();

    let solution = Method::Euler
        .solve_observed(
            &gravity,
            &sun_earth(),
            10.0 * DAY,
            DAY,
            |event: &Event<'_, Planet>| {
                times.push(event.time());
                (event.step == 3).then_some(Action::StopEarly)
            },
        )
        .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 3);
    assert_eq!(times, vec![0.0, DAY, 2.0 * DAY, 3.0 * DAY]);
}

#[test]
fn sun_barely_moves() {
    let gravity = NewtonianGravity::default();

    let solution = Method::VelocityVerlet
        .solve(&gravity, &sun_earth(), 30.0 * DAY, DAY)
        .unwrap();

    let sun = &solution.last().unwrap().bodies()[0];
    assert!(sun.position.norm() < 1e6);
    assert!(sun.velocity.norm() > 0.0);
    assert_eq!(solution.history[0].bodies()[0].position, Vector::zeros());
}
