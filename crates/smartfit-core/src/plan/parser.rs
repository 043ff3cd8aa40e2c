//! Plan text parser.
//!
//! Turns free-form generated text into a [`ParsedPlan`]:
//! - The text is split into day blocks at `Day N:` headers.
//! - Each block has its warm-up, cool-down and notes sections cut out.
//! - The rest is scanned for `<name> - N sets x M reps` exercise lines.
//!
//! Parsing never fails. Text without any day header yields a single
//! empty "Full Body Workout" day rather than an error.

use tracing::debug;

use super::exercises::extract_exercises;
use super::sections::extract_sections;
use super::segment::{DayBlock, segment_days};
use super::types::{ParsedDay, ParsedPlan};

/// Parse generated plan text into days.
///
/// The result always holds at least one day. Days appear in source order
/// with their day numbers as written.
pub fn parse_plan(text: &str) -> ParsedPlan {
    let plan: ParsedPlan = segment_days(text).into_iter().map(parse_block).collect();

    debug!(
        days = plan.len(),
        exercises = plan.iter().map(|d| d.exercises.len()).sum::<usize>(),
        "parsed plan text"
    );
    plan
}

fn parse_block(block: DayBlock<'_>) -> ParsedDay {
    // Without a day header nothing in the text is attributed to a day.
    if block.synthetic {
        return ParsedDay {
            day_number: block.day_number,
            name: block.title,
            exercises: Vec::new(),
            warm_up: None,
            cool_down: None,
            notes: None,
        };
    }

    let sections = extract_sections(block.text);
    let exercises = extract_exercises(&sections.remainder);
    let name = if block.title.is_empty() {
        format!("Day {}", block.day_number)
    } else {
        block.title
    };

    ParsedDay {
        day_number: block.day_number,
        name,
        exercises,
        warm_up: sections.warm_up,
        cool_down: sections.cool_down,
        notes: sections.notes,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::segment::FALLBACK_DAY_TITLE;

    const THREE_DAY_PLAN: &str = "\
Here is your 3-day program.

Day 1: Upper Body
WARM-UP:
5 minutes rowing
Band pull-aparts

Bench Press - 4 sets x 6-8 reps
Keep shoulder blades pinned.
Barbell Row - 4 sets x 8 reps

COOL-DOWN: Chest stretch

Day 2: Lower Body
Barbell Squat - 3 sets x 8-12 reps
Romanian Deadlift: 3 sets x 10 reps
NOTES: Rest 90 seconds between sets.

Day 3 - Conditioning
Kettlebell Swing - 5 sets x 15 reps
";

    #[test]
    fn parses_each_day_in_order() {
        let plan = parse_plan(THREE_DAY_PLAN);
        assert_eq!(plan.len(), 3);

        let numbers: Vec<u32> = plan.iter().map(|d| d.day_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);

        let names: Vec<&str> = plan.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Upper Body", "Lower Body", "Conditioning"]);
    }

    #[test]
    fn day_one_sections_and_exercises() {
        let plan = parse_plan(THREE_DAY_PLAN);
        let day = &plan[0];

        assert_eq!(
            day.warm_up.as_deref(),
            Some("5 minutes rowing\nBand pull-aparts")
        );
        assert_eq!(day.cool_down.as_deref(), Some("Chest stretch"));
        assert!(day.notes.is_none());

        assert_eq!(day.exercises.len(), 2);
        assert_eq!(day.exercises[0].name, "Bench Press");
        assert_eq!(day.exercises[0].sets, 4);
        assert_eq!(day.exercises[0].reps, 6);
        assert_eq!(day.exercises[0].description, "Keep shoulder blades pinned.");
        assert_eq!(day.exercises[1].name, "Barbell Row");
    }

    #[test]
    fn warm_up_text_never_leaks_into_exercises() {
        let text = "Day 1: Legs\nWARM-UP:\nBodyweight Squat - 2 sets x 10 reps\n\nBack Squat - 5 sets x 5 reps";
        let plan = parse_plan(text);
        let names: Vec<&str> = plan[0].exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Back Squat"]);
        assert_eq!(
            plan[0].warm_up.as_deref(),
            Some("Bodyweight Squat - 2 sets x 10 reps")
        );
    }

    #[test]
    fn notes_belong_to_their_own_day() {
        let plan = parse_plan(THREE_DAY_PLAN);
        assert_eq!(
            plan[1].notes.as_deref(),
            Some("Rest 90 seconds between sets.")
        );
        assert!(plan[2].notes.is_none());
        assert_eq!(plan[1].exercises.len(), 2);
    }

    #[test]
    fn text_without_headers_becomes_empty_full_body_day() {
        let plan = parse_plan(
            "WARM-UP: Jog\n\nGoblet Squat - 3 sets x 12 reps\nPush Up - 3 sets x 15 reps",
        );
        assert_eq!(
            plan,
            vec![ParsedDay {
                day_number: 1,
                name: FALLBACK_DAY_TITLE.to_string(),
                exercises: Vec::new(),
                warm_up: None,
                cool_down: None,
                notes: None,
            }]
        );
    }

    #[test]
    fn mid_line_headers_start_new_days() {
        let text = "Week 1 - Day 1: Push\nBench - 3 sets x 5 reps\nMonday, Day 2: Pull\nRow - 3 sets x 8 reps";
        let plan = parse_plan(text);

        let days: Vec<(u32, &str)> = plan.iter().map(|d| (d.day_number, d.name.as_str())).collect();
        assert_eq!(days, vec![(1, "Push"), (2, "Pull")]);
        assert_eq!(plan[0].exercises[0].name, "Bench");
        assert_eq!(plan[1].exercises.len(), 1);
        assert_eq!(plan[1].exercises[0].name, "Row");
        assert_eq!(plan[1].exercises[0].reps, 8);
    }

    #[test]
    fn unparseable_text_yields_one_empty_day() {
        let plan = parse_plan("I'm sorry, I can't help with that right now.");
        assert_eq!(plan.len(), 1);
        assert!(plan[0].exercises.is_empty());
    }

    #[test]
    fn empty_title_falls_back_to_day_number() {
        let plan = parse_plan("Day 4:\nPlank - 3 sets x 1 rep");
        assert_eq!(plan[0].name, "Day 4");
    }

    #[test]
    fn day_numbers_are_kept_as_written() {
        let plan = parse_plan("Day 2: B\nDay 2: B again\nDay 7: C");
        let numbers: Vec<u32> = plan.iter().map(|d| d.day_number).collect();
        assert_eq!(numbers, vec![2, 2, 7]);
    }

    #[test]
    fn parsing_is_deterministic() {
        assert_eq!(parse_plan(THREE_DAY_PLAN), parse_plan(THREE_DAY_PLAN));
    }
}
