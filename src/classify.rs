use crate::colors::Tag;

/// Prefixes of WvTest summary and section lines
const SUMMARY_PREFIXES: [&str; 2] = ["WvTest:", "Testing \""];

/// A line together with the tag it was classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub text: &'a str,
    pub tag: Option<Tag>,
}

impl<'a> ClassifiedLine<'a> {
    pub fn new(text: &'a str) -> Self {
        ClassifiedLine {
            text,
            tag: classify(text),
        }
    }
}

/// Decide which color, if any, a line of WvTest output gets.
///
/// `!` lines are individual check results and are judged by their last
/// token. `WvTest:` and `Testing "` lines are informational unless they
/// mention `failure` without the literal `0 failures`.
pub fn classify(line: &str) -> Option<Tag> {
    if line.starts_with('!') {
        return match line.split_whitespace().next_back() {
            Some("ok") => Some(Tag::Success),
            Some("FAILED") => Some(Tag::Failure),
            _ => None,
        };
    }

    if SUMMARY_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
        if line.contains("failure") && !line.contains("0 failures") {
            return Some(Tag::Failure);
        }
        return Some(Tag::Info);
    }

    None
}
