// Fri Jan 16 2026 - Alex

use super::frame::StackFrame;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static FRAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:\s*at )?",
        r"(?:(new) )?",
        r"(?:(.*?) \()?",
        r"(?:eval at ([^ ]+) \((.+?):(\d+):(\d+)\), )?",
        r"(?:(.+?):(\d+):(\d+)|(native))",
        r"(\)?)$",
    ))
    .expect("frame pattern is valid and should always compile")
});

static METHOD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.*?) \[as (.*?)\]$").expect("method pattern is valid and should always compile")
});

const DEFAULT_INTERNALS: &[&str] = &[
    r"\(/rustc/[0-9a-f]+/",
    r"^\s*at <?(?:std|core|alloc)::",
    r"^\s*at <unknown> ",
    r"^\s*at (?:__libc_start_\w*|_start|__scrt_common_main_seh|BaseThreadInitThunk|RtlUserThreadStart|main) \(native\)$",
];

/// Turns raw `at function (file:line:column)` lines into [`StackFrame`]s.
pub struct StackParser {
    cwd: Option<String>,
    internals: Vec<Regex>,
}

impl StackParser {
    pub fn new() -> Self {
        let internals = DEFAULT_INTERNALS
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect();

        Self {
            cwd: None,
            internals,
        }
    }

    pub fn with_cwd(mut self, cwd: &Path) -> Self {
        let cwd = cwd.to_string_lossy().replace('\\', "/");
        self.cwd = Some(cwd.trim_end_matches('/').to_string());
        self
    }

    pub fn with_internals(mut self, internals: Vec<Regex>) -> Self {
        self.internals = internals;
        self
    }

    pub fn without_internals(mut self) -> Self {
        self.internals.clear();
        self
    }

    pub fn is_internal(&self, line: &str) -> bool {
        self.internals.iter().any(|re| re.is_match(line))
    }

    pub fn parse_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<StackFrame> {
        let mut frames = Vec::with_capacity(lines.len());

        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            if self.is_internal(line) {
                log::trace!("skipping internal frame: {}", line.trim());
                continue;
            }
            match self.parse_line(line) {
                Some(frame) => frames.push(frame),
                None => log::trace!("dropping malformed frame: {}", line.trim()),
            }
        }

        frames
    }

    pub fn parse_line(&self, line: &str) -> Option<StackFrame> {
        let caps = FRAME_PATTERN.captures(line.trim_end())?;

        let group = |i: usize| caps.get(i).map(|m| m.as_str());
        let number = |i: usize| group(i).and_then(|s| s.parse::<u32>().ok());

        let mut function = group(2).map(str::to_string);
        let mut file = group(7).map(str::to_string);
        let close_paren = group(11) == Some(")");

        if close_paren {
            if let Some(ref mut path) = file {
                balance_parens(path, &mut function);
            }
        }

        let mut method = None;
        if let Some(ref name) = function {
            if let Some(m) = METHOD_PATTERN.captures(name) {
                method = Some(m[2].to_string());
                function = Some(m[1].to_string());
            }
        }

        let mut frame = StackFrame {
            line: number(8),
            column: number(9),
            file: file.map(|f| self.normalize_file(&f)),
            native: group(10).is_some(),
            constructor: group(1).is_some(),
            ..StackFrame::default()
        };

        if let Some(origin) = group(3) {
            frame.eval_origin = Some(origin.to_string());
            frame.eval_file = group(4).map(|f| self.normalize_file(f));
            frame.eval_line = number(5);
            frame.eval_column = number(6);
        }

        frame.function = function.filter(|f| !f.is_empty());
        frame.method = method.filter(|m| Some(m) != frame.function.as_ref());

        Some(frame)
    }

    fn normalize_file(&self, file: &str) -> String {
        let file = file.strip_prefix("file://").unwrap_or(file).replace('\\', "/");

        match self.cwd {
            Some(ref cwd) if !cwd.is_empty() => match file.strip_prefix(&format!("{}/", cwd)) {
                Some(relative) => relative.to_string(),
                None => file,
            },
            _ => file,
        }
    }
}

impl Default for StackParser {
    fn default() -> Self {
        Self::new()
    }
}

// "asdf) [as foo] (xyz.rs" means the function really is "... (asdf) [as foo]"
// and the file is "xyz.rs".
fn balance_parens(file: &mut String, function: &mut Option<String>) {
    let bytes = file.as_bytes();
    let mut closes: i32 = 0;
    let mut split = None;

    for i in (1..bytes.len()).rev() {
        if bytes[i] == b')' {
            closes += 1;
        } else if bytes[i] == b'(' && bytes[i - 1] == b' ' {
            closes -= 1;
            if closes == -1 {
                split = Some(i);
                break;
            }
        }
    }

    if let Some(i) = split {
        let before = file[..i - 1].to_string();
        let after = file[i + 1..].to_string();
        let name = function.get_or_insert_with(String::new);
        name.push_str(&format!(" ({}", before));
        *file = after;
    }
}

pub fn parse_frames<S: AsRef<str>>(lines: &[S]) -> Vec<StackFrame> {
    StackParser::new().parse_lines(lines)
}
