//! Plain-text rendering of parsed days for terminal output.

use std::fmt;

use smartfit_core::plan::{ParsedDay, classify_workout, weekday_name};

/// Displays one day as an indented block.
///
/// ```text
/// Day 1 (Monday): Upper Body [strength]
///   Warm-up: 5 minutes rowing
///   1. Bench Press  4 x 6
///      Keep shoulder blades pinned.
/// ```
pub struct DayView<'a>(pub &'a ParsedDay);

impl fmt::Display for DayView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.0;

        write!(f, "Day {}", day.day_number)?;
        if let Some(weekday) = weekday_name(day.day_number) {
            write!(f, " ({weekday})")?;
        }
        writeln!(f, ": {} [{}]", day.name, classify_workout(&day.name))?;

        if let Some(warm_up) = &day.warm_up {
            write_section(f, "Warm-up", warm_up)?;
        }

        if day.exercises.is_empty() {
            writeln!(f, "  (no exercises)")?;
        }
        for (i, exercise) in day.exercises.iter().enumerate() {
            writeln!(
                f,
                "  {}. {}  {} x {}",
                i + 1,
                exercise.name,
                exercise.sets,
                exercise.reps
            )?;
            if !exercise.description.is_empty() {
                writeln!(f, "     {}", exercise.description)?;
            }
        }

        if let Some(cool_down) = &day.cool_down {
            write_section(f, "Cool-down", cool_down)?;
        }
        if let Some(notes) = &day.notes {
            write_section(f, "Notes", notes)?;
        }
        Ok(())
    }
}

/// Print every day, separated by blank lines.
pub fn print_days(days: &[ParsedDay]) {
    for (i, day) in days.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", DayView(day));
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, label: &str, content: &str) -> fmt::Result {
    let mut lines = content.lines();
    if let Some(first) = lines.next() {
        writeln!(f, "  {label}: {first}")?;
    }
    for line in lines {
        writeln!(f, "    {line}")?;
    }
    Ok(())
}
