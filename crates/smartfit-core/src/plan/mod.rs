//! Workout plan text: segmentation, sections, exercises, and display helpers.

pub mod display;
pub mod exercises;
mod patterns;
pub mod parser;
pub mod sections;
pub mod segment;
pub mod types;

pub use display::{WorkoutType, classify_workout, weekday_name};
pub use exercises::extract_exercises;
pub use parser::parse_plan;
pub use sections::{Sections, extract_sections};
pub use segment::{DayBlock, DayHeaderMatch, FALLBACK_DAY_TITLE, find_day_headers, segment_days};
pub use types::{ParsedDay, ParsedExercise, ParsedPlan};
