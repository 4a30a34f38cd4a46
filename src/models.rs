use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_HOUR: f64 = 60.0;

/// Distance covered by one running or walking step, in metres
pub const LEN_STEP: f64 = 0.65;

/// Distance covered by one swimming stroke, in metres
pub const SWIMMING_LEN_STEP: f64 = 1.38;

/// Workout types supported by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl WorkoutKind {
    /// Label printed in reports for this kind of workout
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Бег",
            WorkoutKind::Walking => "Ходьба",
            WorkoutKind::Swimming => "Плавание",
        }
    }

    /// Default distance per action (step or stroke), in metres
    pub fn default_step_length(&self) -> f64 {
        match self {
            WorkoutKind::Running | WorkoutKind::Walking => LEN_STEP,
            WorkoutKind::Swimming => SWIMMING_LEN_STEP,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Data shared by every workout type
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    /// Label shown in the report
    pub training_type: String,

    /// Number of actions performed (steps or strokes)
    pub action: u32,

    /// Distance per action in metres
    pub len_step: f64,

    /// Total duration of the workout, must be non-zero
    pub duration: Duration,

    /// Athlete weight in kilograms
    pub weight: f64,
}

impl Workout {
    pub fn new(
        training_type: impl Into<String>,
        action: u32,
        len_step: f64,
        duration: Duration,
        weight: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            action,
            len_step,
            duration,
            weight,
        }
    }

    /// Duration expressed in hours
    pub fn duration_hours(&self) -> f64 {
        self.duration.as_secs_f64() / 3600.0
    }

    /// Duration expressed in minutes
    pub fn duration_minutes(&self) -> f64 {
        self.duration.as_secs_f64() / 60.0
    }
}

/// Running workout, no extra data beyond the base record
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub workout: Workout,
}

impl Running {
    pub fn new(action: u32, duration: Duration, weight: f64) -> Self {
        Self {
            workout: Workout::new(
                WorkoutKind::Running.label(),
                action,
                WorkoutKind::Running.default_step_length(),
                duration,
                weight,
            ),
        }
    }
}

/// Walking workout
#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    pub workout: Workout,

    /// Athlete height in centimetres, must be positive
    pub height: f64,
}

impl Walking {
    pub fn new(action: u32, duration: Duration, weight: f64, height: f64) -> Self {
        Self {
            workout: Workout::new(
                WorkoutKind::Walking.label(),
                action,
                WorkoutKind::Walking.default_step_length(),
                duration,
                weight,
            ),
            height,
        }
    }
}

/// Pool swimming workout
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub workout: Workout,

    /// Pool length in metres
    pub length_pool: f64,

    /// Number of pool lengths swum
    pub count_pool: u32,
}

impl Swimming {
    pub fn new(
        action: u32,
        duration: Duration,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Self {
        Self {
            workout: Workout::new(
                WorkoutKind::Swimming.label(),
                action,
                WorkoutKind::Swimming.default_step_length(),
                duration,
                weight,
            ),
            length_pool,
            count_pool,
        }
    }
}

/// Any supported workout, tagged by kind
#[derive(Debug, Clone, PartialEq)]
pub enum AnyWorkout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl AnyWorkout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            AnyWorkout::Running(_) => WorkoutKind::Running,
            AnyWorkout::Walking(_) => WorkoutKind::Walking,
            AnyWorkout::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    /// Base record shared by all variants
    pub fn base(&self) -> &Workout {
        match self {
            AnyWorkout::Running(r) => &r.workout,
            AnyWorkout::Walking(w) => &w.workout,
            AnyWorkout::Swimming(s) => &s.workout,
        }
    }
}

impl From<Running> for AnyWorkout {
    fn from(value: Running) -> Self {
        AnyWorkout::Running(value)
    }
}

impl From<Walking> for AnyWorkout {
    fn from(value: Walking) -> Self {
        AnyWorkout::Walking(value)
    }
}

impl From<Swimming> for AnyWorkout {
    fn from(value: Swimming) -> Self {
        AnyWorkout::Swimming(value)
    }
}

/// Computed metrics for a single workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Workout label
    pub training_type: String,

    /// Workout duration
    #[serde(rename = "duration_minutes", with = "minutes_serde")]
    pub duration: Duration,

    /// Distance in kilometres
    pub distance_km: f64,

    /// Mean speed in km/h
    pub speed_kmh: f64,

    /// Energy expenditure in kcal
    pub calories: f64,
}

impl SummaryReport {
    pub fn duration_minutes(&self) -> f64 {
        self.duration.as_secs_f64() / 60.0
    }
}

// Durations travel as fractional minutes
mod minutes_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(duration.as_secs_f64() / 60.0)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let minutes = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(minutes * 60.0).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(WorkoutKind::Running.label(), "Бег");
        assert_eq!(WorkoutKind::Walking.label(), "Ходьба");
        assert_eq!(WorkoutKind::Swimming.label(), "Плавание");
        assert_eq!(WorkoutKind::Swimming.to_string(), "Плавание");
    }

    #[test]
    fn test_constructors_use_kind_step_length() {
        let running = Running::new(5000, Duration::from_secs(30 * 60), 85.0);
        assert_eq!(running.workout.len_step, LEN_STEP);
        assert_eq!(running.workout.training_type, "Бег");

        let swimming = Swimming::new(2000, Duration::from_secs(90 * 60), 85.0, 50.0, 40);
        assert_eq!(swimming.workout.len_step, SWIMMING_LEN_STEP);
    }

    #[test]
    fn test_duration_conversions() {
        let workout = Workout::new("Ходьба", 0, LEN_STEP, Duration::from_secs(3 * 3600 + 45 * 60), 85.0);
        assert_eq!(workout.duration_hours(), 3.75);
        assert_eq!(workout.duration_minutes(), 225.0);
    }

    #[test]
    fn test_any_workout_kind_and_base() {
        let walking: AnyWorkout = Walking::new(100, Duration::from_secs(60), 70.0, 170.0).into();
        assert_eq!(walking.kind(), WorkoutKind::Walking);
        assert_eq!(walking.base().action, 100);
    }

    #[test]
    fn test_summary_report_serializes_minutes() {
        let report = SummaryReport {
            training_type: "Бег".to_string(),
            duration: Duration::from_secs(30 * 60),
            distance_km: 3.25,
            speed_kmh: 6.5,
            calories: 302.9145,
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"duration_minutes\":30.0"));

        let back: SummaryReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.duration, report.duration);
    }
}
