//! Built-in sample workouts printed by the CLI

use crate::models::{AnyWorkout, Running, Swimming, Walking};
use std::time::Duration;

/// Shared athlete weight for all samples, kg
pub const SAMPLE_WEIGHT: f64 = 85.0;

/// The three sample workouts, in print order: swimming, walking, running
pub fn sample_workouts() -> Vec<AnyWorkout> {
    vec![
        Swimming::new(2000, Duration::from_secs(90 * 60), SAMPLE_WEIGHT, 50.0, 40).into(),
        Walking::new(
            20000,
            Duration::from_secs(3 * 3600 + 45 * 60),
            SAMPLE_WEIGHT,
            185.0,
        )
        .into(),
        Running::new(5000, Duration::from_secs(30 * 60), SAMPLE_WEIGHT).into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutKind;

    #[test]
    fn test_sample_order() {
        let kinds: Vec<WorkoutKind> = sample_workouts().iter().map(|w| w.kind()).collect();
        assert_eq!(
            kinds,
            vec![WorkoutKind::Swimming, WorkoutKind::Walking, WorkoutKind::Running]
        );
    }

    #[test]
    fn test_samples_satisfy_preconditions() {
        for workout in sample_workouts() {
            assert!(workout.check_preconditions().is_ok());
        }
    }
}
