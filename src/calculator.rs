//! Distance, mean speed and calorie calculations for each workout kind
//!
//! Every kind shares the action-based distance. Mean speed and calories are
//! picked per kind: swimming measures speed from pool laps, and each kind has
//! its own energy expenditure formula. Inputs are never validated here; a
//! zero duration produces infinite or NaN results rather than an error.

use crate::error::CalculationError;
use crate::models::{
    AnyWorkout, Running, SummaryReport, Swimming, Walking, Workout, MIN_IN_HOUR, M_IN_KM,
};
use tracing::debug;

/// Running: speed multiplier
pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
/// Running: speed shift
pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

/// Walking: weight multiplier
pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
/// Walking: speed/height multiplier
pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
/// km/h to m/s
pub const KMH_IN_MSEC: f64 = 0.278;
/// Centimetres in a metre
pub const CM_IN_M: f64 = 100.0;

/// Swimming: speed shift
pub const SWIMMING_CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
/// Swimming: weight multiplier
pub const SWIMMING_CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Capability shared by all workout kinds
pub trait CaloriesCalculator {
    /// Base record of the workout
    fn workout(&self) -> &Workout;

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64;

    /// Energy expenditure in kcal
    fn calories(&self) -> f64;

    /// Distance in km, from action count and per-action length
    fn distance(&self) -> f64 {
        action_distance(self.workout())
    }

    /// Snapshot of all computed metrics
    fn summary(&self) -> SummaryReport {
        let workout = self.workout();
        SummaryReport {
            training_type: workout.training_type.clone(),
            duration: workout.duration,
            distance_km: self.distance(),
            speed_kmh: self.mean_speed(),
            calories: self.calories(),
        }
    }
}

/// Distance in km covered by `action` steps or strokes
pub fn action_distance(workout: &Workout) -> f64 {
    f64::from(workout.action) * workout.len_step / M_IN_KM
}

/// Distance divided by duration in hours
pub fn action_mean_speed(workout: &Workout) -> f64 {
    action_distance(workout) / workout.duration_hours()
}

/// Running calories
/// kcal = (18 × speed + 1.79) × weight / 1000 × hours × 60
pub fn running_calories(mean_speed: f64, weight: f64, hours: f64) -> f64 {
    (CALORIES_MEAN_SPEED_MULTIPLIER * mean_speed + CALORIES_MEAN_SPEED_SHIFT) * weight / M_IN_KM
        * hours
        * MIN_IN_HOUR
}

/// Walking calories
/// kcal = (0.035 × weight + (speed_mps² / height_m) × 0.029 × weight) × hours × 60
pub fn walking_calories(mean_speed: f64, weight: f64, height_cm: f64, hours: f64) -> f64 {
    let speed_mps = mean_speed * KMH_IN_MSEC;
    let height_m = height_cm / CM_IN_M;

    (CALORIES_WEIGHT_MULTIPLIER * weight
        + (speed_mps.powi(2) / height_m) * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
        * hours
        * MIN_IN_HOUR
}

/// Swimming speed from pool length and lap count
pub fn pool_mean_speed(length_pool: f64, count_pool: u32, hours: f64) -> f64 {
    length_pool * f64::from(count_pool) / M_IN_KM / hours
}

/// Swimming calories
/// kcal = (speed + 1.1) × 2 × weight × hours
pub fn swimming_calories(mean_speed: f64, weight: f64, hours: f64) -> f64 {
    (mean_speed + SWIMMING_CALORIES_MEAN_SPEED_SHIFT)
        * SWIMMING_CALORIES_WEIGHT_MULTIPLIER
        * weight
        * hours
}

impl CaloriesCalculator for Running {
    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn mean_speed(&self) -> f64 {
        action_mean_speed(&self.workout)
    }

    fn calories(&self) -> f64 {
        running_calories(
            self.mean_speed(),
            self.workout.weight,
            self.workout.duration_hours(),
        )
    }
}

impl CaloriesCalculator for Walking {
    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn mean_speed(&self) -> f64 {
        action_mean_speed(&self.workout)
    }

    fn calories(&self) -> f64 {
        walking_calories(
            self.mean_speed(),
            self.workout.weight,
            self.height,
            self.workout.duration_hours(),
        )
    }
}

impl CaloriesCalculator for Swimming {
    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn mean_speed(&self) -> f64 {
        pool_mean_speed(self.length_pool, self.count_pool, self.workout.duration_hours())
    }

    fn calories(&self) -> f64 {
        swimming_calories(
            self.mean_speed(),
            self.workout.weight,
            self.workout.duration_hours(),
        )
    }
}

impl AnyWorkout {
    /// Formula implementation for this workout's kind
    pub fn calculator(&self) -> &dyn CaloriesCalculator {
        match self {
            AnyWorkout::Running(r) => r,
            AnyWorkout::Walking(w) => w,
            AnyWorkout::Swimming(s) => s,
        }
    }

    /// Report the first input that would make the formulas non-finite or
    /// meaningless. Calculation does not call this.
    pub fn check_preconditions(&self) -> Result<(), CalculationError> {
        let workout = self.base();
        let calculation = format!("{:?} summary", self.kind()).to_lowercase();

        if workout.duration.is_zero() {
            return Err(CalculationError::DivisionByZero {
                calculation,
                parameter: "duration".to_string(),
            });
        }

        if !(workout.weight > 0.0) {
            return Err(CalculationError::InvalidParameter {
                calculation,
                parameter: "weight".to_string(),
                value: workout.weight.to_string(),
            });
        }

        match self {
            AnyWorkout::Walking(w) if w.height == 0.0 => Err(CalculationError::DivisionByZero {
                calculation,
                parameter: "height".to_string(),
            }),
            AnyWorkout::Walking(w) if !(w.height > 0.0) => {
                Err(CalculationError::InvalidParameter {
                    calculation,
                    parameter: "height".to_string(),
                    value: w.height.to_string(),
                })
            }
            AnyWorkout::Swimming(s) if !(s.length_pool > 0.0) => {
                Err(CalculationError::InvalidParameter {
                    calculation,
                    parameter: "length_pool".to_string(),
                    value: s.length_pool.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl CaloriesCalculator for AnyWorkout {
    fn workout(&self) -> &Workout {
        self.base()
    }

    fn mean_speed(&self) -> f64 {
        self.calculator().mean_speed()
    }

    fn calories(&self) -> f64 {
        self.calculator().calories()
    }

    fn distance(&self) -> f64 {
        self.calculator().distance()
    }

    fn summary(&self) -> SummaryReport {
        self.calculator().summary()
    }
}

/// Entry point used by the CLI and reports
pub struct WorkoutCalculator;

impl WorkoutCalculator {
    /// Compute the summary for one workout
    pub fn summarize(workout: &AnyWorkout) -> SummaryReport {
        let summary = workout.summary();

        debug!(
            kind = ?workout.kind(),
            distance_km = summary.distance_km,
            speed_kmh = summary.speed_kmh,
            calories = summary.calories,
            "Computed workout summary"
        );

        if !summary.calories.is_finite() || !summary.speed_kmh.is_finite() {
            debug!(kind = ?workout.kind(), "Summary contains non-finite values");
        }

        summary
    }

    /// Compute summaries for several workouts, preserving order
    pub fn summarize_all(workouts: &[AnyWorkout]) -> Vec<SummaryReport> {
        workouts.iter().map(Self::summarize).collect()
    }
}
