//! Day segmentation: split generated text into one block per day header.

use tracing::debug;

use super::patterns;

/// Title given to the single block produced when no day header is found.
pub const FALLBACK_DAY_TITLE: &str = "Full Body Workout";

/// One day header found in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHeaderMatch {
    /// Parsed day number, at least 1.
    pub day_number: u32,
    /// Header title with surrounding whitespace and emphasis removed.
    pub title: String,
    /// Byte offset where the header's `day` word begins.
    pub start_offset: usize,
}

/// The text belonging to one day, header included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBlock<'a> {
    pub day_number: u32,
    pub title: String,
    pub text: &'a str,
    /// Set on the single block made up when the text has no day header.
    pub synthetic: bool,
}

/// Find every non-overlapping day header in `text`, left to right.
///
/// A header need not start its line: `Week 1 - Day 1: Push` yields a
/// match starting at `Day`.
pub fn find_day_headers(text: &str) -> Vec<DayHeaderMatch> {
    patterns::day_headers(text)
        .map(|hit| DayHeaderMatch {
            day_number: hit.day_number,
            title: hit.title,
            start_offset: hit.start,
        })
        .collect()
}

/// Split `text` into day blocks in order of appearance.
///
/// Each block runs from its header to the next header, the last one to the
/// end of the text. Text before the first header belongs to no block. When
/// there are no headers at all, the whole text becomes a single block
/// numbered 1 and titled [`FALLBACK_DAY_TITLE`].
pub fn segment_days(text: &str) -> Vec<DayBlock<'_>> {
    let headers = find_day_headers(text);

    if headers.is_empty() {
        debug!("no day headers found, using a single full-body day");
        return vec![DayBlock {
            day_number: 1,
            title: FALLBACK_DAY_TITLE.to_string(),
            text,
            synthetic: true,
        }];
    }

    let ends = headers
        .iter()
        .skip(1)
        .map(|h| h.start_offset)
        .chain(std::iter::once(text.len()));

    let blocks: Vec<DayBlock<'_>> = headers
        .iter()
        .zip(ends)
        .map(|(header, end)| DayBlock {
            day_number: header.day_number,
            title: header.title.clone(),
            text: &text[header.start_offset..end],
            synthetic: false,
        })
        .collect();

    debug!(days = blocks.len(), "segmented plan text");
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_headers_yields_one_full_body_block() {
        let text = "Do some squats and then stretch.";
        let blocks = segment_days(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].day_number, 1);
        assert_eq!(blocks[0].title, FALLBACK_DAY_TITLE);
        assert_eq!(blocks[0].text, text);
        assert!(blocks[0].synthetic);
    }

    #[test]
    fn empty_text_yields_one_block() {
        let blocks = segment_days("");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text, "");
    }

    #[test]
    fn blocks_span_header_to_next_header() {
        let text = "Intro line\nDay 1: Push\nBench - 3 sets x 5 reps\nDay 2: Pull\nRow - 3 sets x 8 reps\n";
        let blocks = segment_days(text);
        assert_eq!(blocks.len(), 2);

        assert_eq!(blocks[0].day_number, 1);
        assert_eq!(blocks[0].title, "Push");
        assert!(!blocks[0].synthetic);
        assert_eq!(blocks[0].text, "Day 1: Push\nBench - 3 sets x 5 reps\n");

        assert_eq!(blocks[1].day_number, 2);
        assert_eq!(blocks[1].title, "Pull");
        assert_eq!(blocks[1].text, "Day 2: Pull\nRow - 3 sets x 8 reps\n");
    }

    #[test]
    fn offsets_point_at_header_lines() {
        let text = "Plan\r\nDay 1: A\r\nstuff\r\nDay 2: B";
        let headers = find_day_headers(text);
        assert_eq!(headers.len(), 2);
        assert_eq!(&text[headers[0].start_offset..][..8], "Day 1: A");
        assert_eq!(&text[headers[1].start_offset..], "Day 2: B");
        assert_eq!(headers[0].title, "A");
    }

    #[test]
    fn headers_in_the_middle_of_a_line_split_blocks() {
        let text = "Week 1 - Day 1: Push\nBench - 3 sets x 5 reps\nMonday, Day 2: Pull\nRow - 3 sets x 8 reps";
        let headers = find_day_headers(text);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].start_offset, 9);
        assert_eq!(&text[headers[1].start_offset..][..11], "Day 2: Pull");

        let blocks = segment_days(text);
        let titles: Vec<&str> = blocks.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Push", "Pull"]);
        assert!(blocks[0].text.starts_with("Day 1: Push\nBench"));
        assert_eq!(blocks[1].text, "Day 2: Pull\nRow - 3 sets x 8 reps");
    }

    #[test]
    fn duplicates_and_order_are_preserved() {
        let text = "Day 3: Legs\nDay 1: Push\nDay 1: Push again\n";
        let numbers: Vec<u32> = segment_days(text).iter().map(|b| b.day_number).collect();
        assert_eq!(numbers, vec![3, 1, 1]);
    }
}
