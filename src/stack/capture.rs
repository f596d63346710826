// Fri Jan 16 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;
use std::backtrace::Backtrace;

static FRAME_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\d+: (.+)$").expect("frame header pattern is valid and should always compile")
});

static FRAME_LOCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*at (.+)$").expect("frame location pattern is valid and should always compile")
});

const CRATE_PREFIX: &str = concat!(env!("CARGO_CRATE_NAME"), "::");

/// Produces the raw frame lines for the current call point, outermost call last.
pub trait StackSource {
    fn capture(&self) -> Vec<String>;
}

/// Captures through `std::backtrace` and rewrites frames as
/// `at function (file:line:column)` lines. Capture machinery is dropped so
/// the first line is the outermost call into this crate.
pub struct BacktraceSource;

impl StackSource for BacktraceSource {
    fn capture(&self) -> Vec<String> {
        let trace = Backtrace::force_capture().to_string();
        let frames = skip_capture_frames(read_backtrace(&trace));

        log::debug!("captured {} raw stack frames", frames.len());

        frames.iter().map(RawFrame::to_line).collect()
    }
}

/// Replays a fixed set of lines.
#[derive(Debug, Clone, Default)]
pub struct FixedStack {
    lines: Vec<String>,
}

impl FixedStack {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl StackSource for FixedStack {
    fn capture(&self) -> Vec<String> {
        self.lines.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RawFrame {
    function: String,
    location: Option<String>,
}

impl RawFrame {
    fn to_line(&self) -> String {
        match self.location {
            Some(ref location) => format!("    at {} ({})", self.function, location),
            None => format!("    at {} (native)", self.function),
        }
    }

    fn name(&self) -> &str {
        self.function.trim_start_matches('<')
    }

    fn in_crate(&self) -> bool {
        self.name().starts_with(CRATE_PREFIX)
    }

    fn is_machinery(&self) -> bool {
        let name = self.name();
        name.starts_with("std::backtrace") || name.starts_with("backtrace::") || self.in_crate()
    }
}

fn read_backtrace(text: &str) -> Vec<RawFrame> {
    let mut frames: Vec<RawFrame> = Vec::new();

    for line in text.lines() {
        if let Some(caps) = FRAME_HEADER.captures(line) {
            frames.push(RawFrame {
                function: caps[1].trim().to_string(),
                location: None,
            });
        } else if let Some(caps) = FRAME_LOCATION.captures(line) {
            if let Some(frame) = frames.last_mut() {
                if frame.location.is_none() {
                    frame.location = Some(caps[1].trim().to_string());
                }
            }
        }
    }

    frames
}

fn skip_capture_frames(frames: Vec<RawFrame>) -> Vec<RawFrame> {
    let run = frames.iter().take_while(|f| f.is_machinery()).count();
    let start = frames[..run]
        .iter()
        .rposition(RawFrame::in_crate)
        .unwrap_or(run);

    frames.into_iter().skip(start).collect()
}
