//! Patterns recognised in generated plan text.
//!
//! Day headers are found anywhere in the text, so `Week 1 - Day 1: Push`
//! counts. The other patterns are matched against a single line, with
//! leading markdown decoration (`#`, `*`, `>`, `-` list markers) tolerated
//! so that `**WARM-UP:**` is recognised.

use std::sync::LazyLock;

use regex::Regex;

/// The word `day` + optional spaces + digits + `:` or `-` + title to end of line.
static DAY_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bday[ \t]*(\d+)[ \t]*[:\-][ \t]*([^\n\r]*)").unwrap());

/// `<name>` + `:` or `-` + `N set(s)` + `x`/`×` + `N[-M] rep(s)`.
static EXERCISE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(.+?)[ \t]*[:\-–—][ \t]*(\d+)[ \t]*sets?[ \t]*[x×][ \t]*(\d+)(?:[ \t]*[\-–][ \t]*(\d+))?[ \t]*reps?\b",
    )
    .unwrap()
});

/// `WARM-UP:`, `COOL-DOWN:` or `NOTES:`, any case, each optionally followed
/// by a parenthetical such as `(optional)` before the colon.
static SECTION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[\s#*>_]*(warm-up|cool-down|notes)(?:[ \t]*\([^)\n]*\))?[ \t]*\**[ \t]*:[ \t*]*(.*)$",
    )
    .unwrap()
});

/// Any all-caps label such as `FOCUS:` or `COOL-DOWN:`. Case-sensitive.
static CAPS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s#*>_]*[A-Z][A-Z0-9 \-()]*\**:").unwrap());

/// Bullet or numbered-list prefix.
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*(?:[-*•+]|\d+[.)])[ \t]+").unwrap());

/// A day header found in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DayHeaderHit {
    /// Byte offset of the `day` word.
    pub start: usize,
    pub day_number: u32,
    pub title: String,
}

/// A recognised exercise header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExerciseHeaderLine {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
}

/// Which labelled section a line opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SectionKind {
    WarmUp,
    CoolDown,
    Notes,
}

/// Every non-overlapping day header in `text`, left to right.
///
/// Day 0 and numbers that overflow `u32` do not count.
pub(crate) fn day_headers(text: &str) -> impl Iterator<Item = DayHeaderHit> + '_ {
    DAY_HEADER.captures_iter(text).filter_map(|caps| {
        let start = caps.get(0)?.start();
        let day_number: u32 = caps[1].parse().ok().filter(|n| *n >= 1)?;
        Some(DayHeaderHit {
            start,
            day_number,
            title: clean_title(&caps[2]),
        })
    })
}

pub(crate) fn is_day_header(line: &str) -> bool {
    day_headers(line).next().is_some()
}

/// Match an exercise header after stripping list markers and emphasis.
///
/// Returns `None` when the name is empty, or when sets or reps is zero or
/// not representable.
pub(crate) fn exercise_header(line: &str) -> Option<ExerciseHeaderLine> {
    let line = strip_list_marker(line).replace("**", "");
    let caps = EXERCISE_HEADER.captures(&line)?;

    let name = caps[1]
        .trim()
        .trim_matches(|c: char| c == '*' || c == '_')
        .trim();
    if name.is_empty() {
        return None;
    }
    let sets: u32 = caps[2].parse().ok().filter(|n| *n >= 1)?;
    let reps: u32 = caps[3].parse().ok().filter(|n| *n >= 1)?;

    Some(ExerciseHeaderLine {
        name: name.to_string(),
        sets,
        reps,
    })
}

/// Match a section label, returning its kind and any text after the colon.
pub(crate) fn section_label(line: &str) -> Option<(SectionKind, &str)> {
    let caps = SECTION_LABEL.captures(line)?;
    let label = caps.get(1)?.as_str().to_ascii_lowercase();
    let kind = if label == "warm-up" {
        SectionKind::WarmUp
    } else if label == "cool-down" {
        SectionKind::CoolDown
    } else {
        SectionKind::Notes
    };
    let rest = caps.get(2).map_or("", |m| m.as_str()).trim();
    Some((kind, rest))
}

pub(crate) fn is_section_label(line: &str) -> bool {
    SECTION_LABEL.is_match(line)
}

pub(crate) fn is_caps_label(line: &str) -> bool {
    CAPS_LABEL.is_match(line)
}

pub(crate) fn strip_list_marker(line: &str) -> &str {
    match LIST_MARKER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

fn clean_title(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c: char| c == '*' || c == '_' || c.is_whitespace())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_header(text: &str) -> Option<DayHeaderHit> {
        day_headers(text).next()
    }

    #[test]
    fn day_header_variants() {
        let h = first_header("Day 1: Upper Body").unwrap();
        assert_eq!((h.start, h.day_number), (0, 1));
        assert_eq!(h.title, "Upper Body");

        let h = first_header("DAY 12 - Legs & Core").unwrap();
        assert_eq!(h.day_number, 12);
        assert_eq!(h.title, "Legs & Core");

        let h = first_header("day3:Cardio").unwrap();
        assert_eq!(h.day_number, 3);
        assert_eq!(h.title, "Cardio");

        let h = first_header("## **Day 2: Pull**").unwrap();
        assert_eq!((h.start, h.day_number), (5, 2));
        assert_eq!(h.title, "Pull");
    }

    #[test]
    fn day_headers_match_mid_line() {
        let h = first_header("Week 1 - Day 1: Push").unwrap();
        assert_eq!((h.start, h.day_number), (9, 1));
        assert_eq!(h.title, "Push");

        let h = first_header("Monday, Day 2: Pull").unwrap();
        assert_eq!((h.start, h.day_number), (8, 2));
        assert_eq!(h.title, "Pull");

        let h = first_header("Rest on day 3: take it easy").unwrap();
        assert_eq!(h.day_number, 3);
        assert_eq!(h.title, "take it easy");
    }

    #[test]
    fn title_stops_at_line_end() {
        let hits: Vec<DayHeaderHit> = day_headers("Day 1: Push\r\nDay 2: Pull Day 3: Legs\n").collect();
        let titles: Vec<&str> = hits.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["Push", "Pull Day 3: Legs"]);
        assert_eq!(hits[1].start, 13);
    }

    #[test]
    fn day_header_rejects_non_headers() {
        assert!(first_header("Day one: Push").is_none());
        assert!(first_header("Day 1 Push").is_none());
        assert!(first_header("Saturday 1: Long run").is_none());
        assert!(first_header("Day 0: Warm-up week").is_none());
        assert!(first_header("Day 99999999999: Forever").is_none());
    }

    #[test]
    fn exercise_header_takes_lower_bound_of_range() {
        let e = exercise_header("Barbell Squat - 3 sets x 8-12 reps").unwrap();
        assert_eq!(e.name, "Barbell Squat");
        assert_eq!(e.sets, 3);
        assert_eq!(e.reps, 8);
    }

    #[test]
    fn exercise_header_variants() {
        let e = exercise_header("Push Up: 1 set × 20 rep").unwrap();
        assert_eq!((e.name.as_str(), e.sets, e.reps), ("Push Up", 1, 20));

        let e = exercise_header("T-Bar Row - 4 SETS X 10 REPS").unwrap();
        assert_eq!(e.name, "T-Bar Row");

        let e = exercise_header("1. **Bench Press** - 4 sets x 6–8 reps").unwrap();
        assert_eq!((e.name.as_str(), e.sets, e.reps), ("Bench Press", 4, 6));

        let e = exercise_header("- Lunges: 3 sets x 12 reps per leg").unwrap();
        assert_eq!(e.name, "Lunges");
    }

    #[test]
    fn exercise_header_rejects_missing_numbers() {
        assert!(exercise_header("Plank - hold for 60 seconds").is_none());
        assert!(exercise_header("Deadlift - 3 sets").is_none());
        assert!(exercise_header("Deadlift - sets x reps").is_none());
        assert!(exercise_header("Deadlift - 0 sets x 5 reps").is_none());
        assert!(exercise_header("Deadlift - 3 sets x 0 reps").is_none());
        assert!(exercise_header(": 3 sets x 5 reps").is_none());
    }

    #[test]
    fn section_labels() {
        assert_eq!(
            section_label("WARM-UP:"),
            Some((SectionKind::WarmUp, ""))
        );
        assert_eq!(
            section_label("**Cool-Down:** 5 min stretch"),
            Some((SectionKind::CoolDown, "5 min stretch"))
        );
        assert_eq!(
            section_label("NOTES (optional):"),
            Some((SectionKind::Notes, ""))
        );
        assert_eq!(section_label("notes: hydrate"), Some((SectionKind::Notes, "hydrate")));
        assert_eq!(
            section_label("WARM-UP (5-10 minutes):"),
            Some((SectionKind::WarmUp, ""))
        );
        assert!(section_label("Warm-up sets are light").is_none());
        assert!(section_label("Barbell Squat - 3 sets x 5 reps").is_none());
    }

    #[test]
    fn caps_label_is_case_sensitive() {
        assert!(is_caps_label("FOCUS: hypertrophy"));
        assert!(is_caps_label("COOL-DOWN:"));
        assert!(is_caps_label("WARM-UP (5-10 MIN):"));
        assert!(!is_caps_label("Focus: hypertrophy"));
        assert!(!is_caps_label("Barbell Squat - 3 sets x 5 reps"));
    }

    #[test]
    fn list_markers() {
        assert_eq!(strip_list_marker("- Keep your back flat"), "Keep your back flat");
        assert_eq!(strip_list_marker("2) Row"), "Row");
        assert_eq!(strip_list_marker("Row"), "Row");
        assert_eq!(strip_list_marker("-5 degrees"), "-5 degrees");
    }
}
