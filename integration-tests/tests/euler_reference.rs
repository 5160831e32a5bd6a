//! The `dy/dt = y`, `y(0) = 1` reference scenario with a caller-defined body.

use approx::assert_relative_eq;
use titan_core::{Body, State, functions::Exponential};
use titan_integration_tests::{Planet, unit_planet_state};
use titan_solvers::{Error, Euler, Solver, Status};

#[test]
fn step_from_one() {
    let next = Euler.step(&Exponential::default(), 0.0, &unit_planet_state(), 0.2);

    assert_relative_eq!(next.bodies()[0].position().x, 1.2, epsilon = 0.1);
    assert_eq!(next.bodies()[0].name, "probe");
}

#[test]
fn solve_over_zero_point_eight() {
    let results = Euler
        .solve(&Exponential::default(), &unit_planet_state(), 0.8, 0.2)
        .expect("valid interval");

    assert_eq!(results.status, Status::Complete);
    assert_eq!(results.history.len(), 5);

    let expected = [1.0, 1.2, 1.44, 1.728, 2.0736];
    for (state, (x, t)) in results
        .history
        .iter()
        .zip(expected.into_iter().zip([0.0, 0.2, 0.4, 0.6, 0.8]))
    {
        assert_relative_eq!(state.bodies()[0].position().x, x, epsilon = 1e-12);
        assert_relative_eq!(state.time(), t, epsilon = 1e-12);
    }
}

#[test]
fn each_value_is_one_point_two_times_the_previous() {
    let results = Euler
        .solve(&Exponential::default(), &unit_planet_state(), 2.0, 0.2)
        .unwrap();

    for pair in results.history.windows(2) {
        let ratio = pair[1].bodies()[0].position.x / pair[0].bodies()[0].position.x;
        assert_relative_eq!(ratio, 1.2, epsilon = 1e-12);
    }
}

#[test]
fn trajectory_length_for_exact_multiples() {
    for (tf, h, expected) in [(1.0, 0.1, 11), (0.8, 0.2, 5), (3.0, 0.5, 7), (0.0, 0.3, 1)] {
        let results = Euler
            .solve(&Exponential::default(), &unit_planet_state(), tf, h)
            .unwrap();

        assert_eq!(results.history.len(), expected, "tf = {tf}, h = {h}");
        assert_relative_eq!(results.last().unwrap().time(), tf);
    }
}

#[test]
fn partial_final_step_is_dropped() {
    let results = Euler
        .solve(&Exponential::default(), &unit_planet_state(), 0.5, 0.2)
        .unwrap();

    assert_eq!(results.history.len(), 3);
    assert_relative_eq!(results.last().unwrap().time(), 0.4);
}

#[test]
fn input_state_is_unchanged() {
    let initial = unit_planet_state();
    let snapshot = initial.clone();

    let _ = Euler.step(&Exponential::default(), 0.0, &initial, 0.2);
    let _ = Euler.solve(&Exponential::default(), &initial, 0.8, 0.2);

    assert_eq!(initial, snapshot);
}

#[test]
fn empty_system() {
    let empty: State<Planet> = State::new(Vec::new());

    assert!(Euler.step(&Exponential::default(), 0.0, &empty, 0.2).is_empty());

    let results = Euler.solve(&Exponential::default(), &empty, 0.8, 0.2).unwrap();
    assert_eq!(results.history.len(), 5);
    assert!(results.history.iter().all(State::is_empty));
}

#[test]
fn validation_errors() {
    let state = unit_planet_state();
    let function = Exponential::default();

    assert_eq!(
        Euler.solve(&function, &state, 0.8, 0.0).unwrap_err(),
        Error::InvalidStepSize(0.0)
    );
    assert_eq!(
        Euler.solve(&function, &state, 0.8, -0.2).unwrap_err(),
        Error::InvalidStepSize(-0.2)
    );
    assert_eq!(
        Euler.solve(&function, &state, -0.8, 0.2).unwrap_err(),
        Error::InvalidInterval(-0.8)
    );
}
