//! Presentation helpers for parsed and stored days.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad category of a workout day, inferred from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    Strength,
    Cardio,
    #[serde(rename = "hiit")]
    Hiit,
    Cycling,
    Rest,
    Running,
    Yoga,
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Hiit => "hiit",
            Self::Cycling => "cycling",
            Self::Rest => "rest",
            Self::Running => "running",
            Self::Yoga => "yoga",
        };
        f.write_str(s)
    }
}

/// Keyword checks in priority order. The first hit wins.
const KEYWORDS: &[(&str, WorkoutType)] = &[
    ("strength", WorkoutType::Strength),
    ("weight", WorkoutType::Strength),
    ("cardio", WorkoutType::Cardio),
    ("hiit", WorkoutType::Hiit),
    ("cycling", WorkoutType::Cycling),
    ("rest", WorkoutType::Rest),
    ("running", WorkoutType::Running),
    ("yoga", WorkoutType::Yoga),
];

/// Classify a day by case-insensitive keyword match on its name.
///
/// Names with no keyword are treated as strength days.
pub fn classify_workout(name: &str) -> WorkoutType {
    let folded = name.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| folded.contains(keyword))
        .map_or(WorkoutType::Strength, |(_, kind)| *kind)
}

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Weekday a day number lands on when day 1 is a Monday.
pub fn weekday_name(day_number: u32) -> Option<&'static str> {
    let index = day_number.checked_sub(1)? % 7;
    WEEKDAYS.get(index as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_follows_keyword_priority() {
        assert_eq!(classify_workout("Upper Body Strength"), WorkoutType::Strength);
        assert_eq!(classify_workout("Bodyweight Circuit"), WorkoutType::Strength);
        assert_eq!(classify_workout("Light Cardio"), WorkoutType::Cardio);
        assert_eq!(classify_workout("HIIT Finisher"), WorkoutType::Hiit);
        assert_eq!(classify_workout("Indoor Cycling"), WorkoutType::Cycling);
        assert_eq!(classify_workout("Active Rest"), WorkoutType::Rest);
        assert_eq!(classify_workout("Tempo Running"), WorkoutType::Running);
        assert_eq!(classify_workout("Yoga Flow"), WorkoutType::Yoga);
        // "cardio" is checked before "rest".
        assert_eq!(classify_workout("Rest or light cardio"), WorkoutType::Cardio);
    }

    #[test]
    fn unknown_names_default_to_strength() {
        assert_eq!(classify_workout("Push Day"), WorkoutType::Strength);
        assert_eq!(classify_workout(""), WorkoutType::Strength);
    }

    #[test]
    fn weekday_wraps_every_seven_days() {
        assert_eq!(weekday_name(1), Some("Monday"));
        assert_eq!(weekday_name(7), Some("Sunday"));
        assert_eq!(weekday_name(8), Some("Monday"));
        assert_eq!(weekday_name(0), None);
    }

    #[test]
    fn workout_type_display_matches_serde() {
        let json = serde_json::to_value(WorkoutType::Hiit).unwrap();
        assert_eq!(json, "hiit");
        assert_eq!(WorkoutType::Hiit.to_string(), "hiit");
    }
}
