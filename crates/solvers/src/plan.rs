use crate::Error;

/// Relative tolerance for treating `final_time / step_size` as an integer.
const MULTIPLE_TOLERANCE: f64 = 1e-9;

/// A validated fixed-step schedule over `[0, final_time]`.
///
/// The plan is fully determined up front, so invalid inputs are rejected here
/// before any stepping begins.
///
/// When `final_time` is not a multiple of `step_size` the schedule stops at
/// the last multiple not exceeding it; no partial final step is taken. Ratios
/// within a relative `1e-9` of an integer count as exact, so `0.8 / 0.2`
/// plans four steps even though the quotient is not exactly `4.0` in binary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPlan {
    step_size: f64,
    final_time: f64,
    steps: usize,
    exact: bool,
}

impl StepPlan {
    /// Validates a step size and final time and computes the step count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStepSize`] if `step_size` is not finite and
    /// strictly positive, otherwise [`Error::InvalidInterval`] if
    /// `final_time` is not finite and non-negative.
    pub fn new(final_time: f64, step_size: f64) -> Result<Self, Error> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(Error::InvalidStepSize(step_size));
        }
        if !final_time.is_finite() || final_time < 0.0 {
            return Err(Error::InvalidInterval(final_time));
        }

        let ratio = final_time / step_size;
        let nearest = ratio.round();
        let exact = (ratio - nearest).abs() <= MULTIPLE_TOLERANCE * nearest.max(1.0);

        // Non-negative and finite; `as` saturates for absurd ratios.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = (if exact { nearest } else { ratio.floor() }) as usize;

        Ok(Self {
            step_size,
            final_time,
            steps,
            exact,
        })
    }

    /// Returns the number of steps to take.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the number of states in the trajectory, including the initial one.
    ///
    /// Saturates at `usize::MAX` for schedules too long to count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.saturating_add(1)
    }

    /// Returns `false`; a plan always contains the initial state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    #[must_use]
    pub fn final_time(&self) -> f64 {
        self.final_time
    }

    /// Returns `true` if the schedule ends exactly at `final_time`.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// Returns the time of state `k`.
    ///
    /// Times are computed as `k * step_size` rather than accumulated, so
    /// they do not drift over long runs. The last state of an exact plan is
    /// stamped with `final_time` itself. The initial state is always at `0`.
    #[must_use]
    pub fn time_at(&self, k: usize) -> f64 {
        if k == 0 {
            return 0.0;
        }
        if self.exact && k == self.steps {
            return self.final_time;
        }

        #[allow(clippy::cast_precision_loss)]
        let k = k as f64;
        k * self.step_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn exact_multiple() {
        let plan = StepPlan::new(0.8, 0.2).unwrap();

        assert_eq!(plan.steps(), 4);
        assert_eq!(plan.len(), 5);
        assert!(plan.is_exact());
        assert_eq!(plan.time_at(4), 0.8);
        assert_relative_eq!(plan.time_at(2), 0.4);
    }

    #[test]
    fn truncates_to_last_full_step() {
        let plan = StepPlan::new(0.5, 0.2).unwrap();

        assert_eq!(plan.steps(), 2);
        assert!(!plan.is_exact());
        assert_relative_eq!(plan.time_at(2), 0.4);
    }

    #[test]
    fn zero_final_time_is_a_single_state() {
        let plan = StepPlan::new(0.0, 0.1).unwrap();

        assert_eq!(plan.steps(), 0);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.time_at(0), 0.0);
    }

    #[test]
    fn many_small_steps_do_not_lose_a_step() {
        let plan = StepPlan::new(1.0, 0.001).unwrap();

        assert_eq!(plan.steps(), 1000);
        assert_eq!(plan.time_at(1000), 1.0);
    }

    #[test]
    fn tiny_final_time_starts_at_zero() {
        let plan = StepPlan::new(1e-12, 0.1).unwrap();

        assert_eq!(plan.steps(), 0);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.time_at(0), 0.0);
    }

    #[test]
    fn huge_ratio_saturates() {
        let plan = StepPlan::new(1e300, 1e-300).unwrap();

        assert_eq!(plan.steps(), usize::MAX);
        assert_eq!(plan.len(), usize::MAX);
        assert_eq!(plan.time_at(0), 0.0);
    }

    #[test]
    fn rejects_bad_step_size() {
        assert_eq!(StepPlan::new(1.0, 0.0), Err(Error::InvalidStepSize(0.0)));
        assert_eq!(StepPlan::new(1.0, -0.1), Err(Error::InvalidStepSize(-0.1)));
        assert_eq!(
            StepPlan::new(1.0, f64::INFINITY),
            Err(Error::InvalidStepSize(f64::INFINITY))
        );
        assert!(matches!(
            StepPlan::new(1.0, f64::NAN),
            Err(Error::InvalidStepSize(_))
        ));
    }

    #[test]
    fn rejects_negative_interval() {
        assert_eq!(StepPlan::new(-1.0, 0.1), Err(Error::InvalidInterval(-1.0)));
    }

    #[test]
    fn step_size_is_checked_first() {
        assert_eq!(StepPlan::new(-1.0, 0.0), Err(Error::InvalidStepSize(0.0)));
    }
}
