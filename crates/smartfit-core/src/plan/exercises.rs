//! Exercise extraction from the non-section text of a day block.
//!
//! A single pass over the lines drives a two-state machine: either no
//! exercise is open, or one is open and collecting description lines.

use tracing::trace;

use super::patterns;
use super::types::ParsedExercise;

/// Scanner state between lines.
#[derive(Debug)]
enum Scan {
    NoCurrentExercise,
    HasCurrentExercise(ParsedExercise),
}

/// What a single line is, as far as the scanner cares.
enum Line {
    Blank,
    Skip,
    Header(ParsedExercise),
    Text(String),
}

/// Names that look like exercise headers but label commentary instead.
fn is_label_name(name: &str) -> bool {
    let folded = name.to_lowercase();
    folded.contains("note")
        || folded.contains("tip")
        || folded.contains("important")
        || folded == "warm-up"
        || folded == "cool-down"
}

fn classify(line: &str) -> Line {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if patterns::is_day_header(trimmed) {
        return Line::Skip;
    }
    if let Some(header) = patterns::exercise_header(trimmed) {
        if is_label_name(&header.name) {
            trace!(name = %header.name, "skipping label-like header");
            return Line::Skip;
        }
        return Line::Header(ParsedExercise {
            name: header.name,
            description: String::new(),
            sets: header.sets,
            reps: header.reps,
        });
    }
    Line::Text(patterns::strip_list_marker(trimmed).trim().to_string())
}

/// Extract exercises from `text` in order of appearance.
///
/// Lines before the first exercise header that are not headers themselves
/// are dropped. That covers section labels such as a repeated `NOTES:` left
/// in place by the section extractor; once an exercise is open they are
/// ordinary description text. Every exercise header must carry sets and reps; no default
/// is invented for a line that lacks them.
pub fn extract_exercises(text: &str) -> Vec<ParsedExercise> {
    let mut exercises = Vec::new();
    let mut state = Scan::NoCurrentExercise;

    for line in text.lines() {
        state = match (state, classify(line)) {
            (state, Line::Blank | Line::Skip) => state,
            (Scan::NoCurrentExercise, Line::Header(next)) => Scan::HasCurrentExercise(next),
            (Scan::NoCurrentExercise, Line::Text(_)) => Scan::NoCurrentExercise,
            (Scan::HasCurrentExercise(done), Line::Header(next)) => {
                exercises.push(done);
                Scan::HasCurrentExercise(next)
            }
            (Scan::HasCurrentExercise(mut current), Line::Text(extra)) => {
                if !extra.is_empty() {
                    if !current.description.is_empty() {
                        current.description.push(' ');
                    }
                    current.description.push_str(&extra);
                }
                Scan::HasCurrentExercise(current)
            }
        };
    }

    if let Scan::HasCurrentExercise(last) = state {
        exercises.push(last);
    }

    exercises
}
