//! Podcast script parsing.
//!
//! A script is line oriented. Every line that starts with a known speaker
//! label, a colon and at least one whitespace character becomes a
//! [`Segment`]; everything else (narration, markdown, stray headings from the
//! text generator) is dropped.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static SPEAKER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(LEARNER|EXPERT):\s+(.+)$").expect("speaker line pattern is valid")
});

/// The two voices of a podcast episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Speaker {
    Learner,
    Expert,
}

impl Speaker {
    pub const ALL: [Speaker; 2] = [Speaker::Learner, Speaker::Expert];

    /// Label as it appears at the start of a script line
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::Learner => "LEARNER",
            Speaker::Expert => "EXPERT",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "LEARNER" => Some(Speaker::Learner),
            "EXPERT" => Some(Speaker::Expert),
            _ => None,
        }
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One speaker turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub speaker: Speaker,
    pub text: String,
}

/// Parse a script into speaker segments, in appearance order.
///
/// Returns an empty vector when no line matches; deciding whether that is an
/// error is left to the caller.
pub fn parse_script(script: &str) -> Vec<Segment> {
    script
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<Segment> {
    let captures = SPEAKER_LINE.captures(line)?;
    let speaker = Speaker::from_label(captures.get(1)?.as_str())?;
    let text = captures.get(2)?.as_str().trim();

    if text.is_empty() {
        return None;
    }

    Some(Segment {
        speaker,
        text: text.to_string(),
    })
}
