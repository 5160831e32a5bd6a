use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use titan_core::{Body, OdeFunction, State};

use crate::{Euler, RungeKutta4, Solver, VelocityVerlet};

/// A solver chosen at runtime.
///
/// Dispatches to the matching method, so configuration and callers can pick
/// an integrator by name without the solve loop knowing which one runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Method {
    #[default]
    Euler,
    RungeKutta4,
    VelocityVerlet,
}

/// Error returned when parsing an unrecognized method name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown method `{0}`, expected one of: {names}", names = Method::NAMES.join(", "))]
pub struct UnknownMethod(pub String);

impl Method {
    /// Every available method.
    pub const ALL: [Method; 3] = [Method::Euler, Method::RungeKutta4, Method::VelocityVerlet];

    /// Accepted names, canonical names first.
    pub const NAMES: [&'static str; 6] = [
        "euler",
        "rk4",
        "velocity-verlet",
        "forward-euler",
        "runge-kutta-4",
        "verlet",
    ];
}

impl Solver for Method {
    fn name(&self) -> &'static str {
        match self {
            Method::Euler => Euler.name(),
            Method::RungeKutta4 => RungeKutta4.name(),
            Method::VelocityVerlet => VelocityVerlet.name(),
        }
    }

    fn order(&self) -> usize {
        match self {
            Method::Euler => Euler.order(),
            Method::RungeKutta4 => RungeKutta4.order(),
            Method::VelocityVerlet => VelocityVerlet.order(),
        }
    }

    fn step<B, F>(&self, function: &F, time: f64, state: &State<B>, h: f64) -> State<B>
    where
        B: Body,
        F: OdeFunction<B>,
    {
        match self {
            Method::Euler => Euler.step(function, time, state, h),
            Method::RungeKutta4 => RungeKutta4.step(function, time, state, h),
            Method::VelocityVerlet => VelocityVerlet.step(function, time, state, h),
        }
    }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" | "forward-euler" => Ok(Method::Euler),
            "rk4" | "runge-kutta-4" => Ok(Method::RungeKutta4),
            "velocity-verlet" | "verlet" => Ok(Method::VelocityVerlet),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Method {
    type Error = UnknownMethod;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Method> for String {
    fn from(method: Method) -> Self {
        method.to_string()
    }
}
