//! Labelled sections inside a day block.
//!
//! A section opens on a `WARM-UP:`, `COOL-DOWN:` or `NOTES:` line and runs
//! until the next blank line or the next label line. Captured lines are
//! cut out of the block so the exercise scan never sees them.

use super::patterns::{self, SectionKind};

/// Sections captured from one day block, plus whatever text is left.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub warm_up: Option<String>,
    pub cool_down: Option<String>,
    pub notes: Option<String>,
    /// Block text with every captured span removed, lines joined by `\n`.
    pub remainder: String,
}

/// A captured section: the line range it covers and its trimmed content.
struct Span {
    start: usize,
    end: usize,
    content: Option<String>,
}

/// Extract the warm-up, cool-down and notes sections from `block`.
///
/// Only the first occurrence of each label is captured. A later repeat of
/// the same label stays in the remainder.
pub fn extract_sections(block: &str) -> Sections {
    let lines: Vec<&str> = block.lines().collect();

    let warm_up = capture(&lines, SectionKind::WarmUp);
    let cool_down = capture(&lines, SectionKind::CoolDown);
    let notes = capture(&lines, SectionKind::Notes);

    let mut removed = vec![false; lines.len()];
    for span in [&warm_up, &cool_down, &notes].into_iter().flatten() {
        removed[span.start..span.end].fill(true);
    }

    let remainder = lines
        .iter()
        .zip(&removed)
        .filter(|(_, gone)| !**gone)
        .map(|(line, _)| *line)
        .collect::<Vec<_>>()
        .join("\n");

    Sections {
        warm_up: warm_up.and_then(|s| s.content),
        cool_down: cool_down.and_then(|s| s.content),
        notes: notes.and_then(|s| s.content),
        remainder,
    }
}

fn capture(lines: &[&str], kind: SectionKind) -> Option<Span> {
    let (start, rest) = lines.iter().enumerate().find_map(|(i, line)| {
        patterns::section_label(line)
            .filter(|(k, _)| *k == kind)
            .map(|(_, rest)| (i, rest))
    })?;

    let mut captured: Vec<&str> = Vec::new();
    if !rest.is_empty() {
        captured.push(rest);
    }

    let mut end = start + 1;
    while let Some(line) = lines.get(end) {
        if ends_section(line) {
            break;
        }
        captured.push(line.trim());
        end += 1;
    }

    let content = captured.join("\n").trim().to_string();
    Some(Span {
        start,
        end,
        content: (!content.is_empty()).then_some(content),
    })
}

fn ends_section(line: &str) -> bool {
    line.trim().is_empty() || patterns::is_caps_label(line) || patterns::is_section_label(line)
}
