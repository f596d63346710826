// Wed Jan 15 2026 - Alex

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use std::cell::Cell;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// Colors drawn from when colorizing words.
pub const PALETTE: [TerminalColor; 14] = [
    TerminalColor::Red,
    TerminalColor::Green,
    TerminalColor::BrightRed,
    TerminalColor::Yellow,
    TerminalColor::Blue,
    TerminalColor::BrightGreen,
    TerminalColor::Magenta,
    TerminalColor::Cyan,
    TerminalColor::BrightYellow,
    TerminalColor::White,
    TerminalColor::BrightBlue,
    TerminalColor::BrightMagenta,
    TerminalColor::BrightCyan,
    TerminalColor::BrightWhite,
];

impl TerminalColor {
    pub fn name(&self) -> &'static str {
        match self {
            TerminalColor::Black => "black",
            TerminalColor::Red => "red",
            TerminalColor::Green => "green",
            TerminalColor::Yellow => "yellow",
            TerminalColor::Blue => "blue",
            TerminalColor::Magenta => "magenta",
            TerminalColor::Cyan => "cyan",
            TerminalColor::White => "white",
            TerminalColor::BrightBlack => "gray",
            TerminalColor::BrightRed => "redBright",
            TerminalColor::BrightGreen => "greenBright",
            TerminalColor::BrightYellow => "yellowBright",
            TerminalColor::BrightBlue => "blueBright",
            TerminalColor::BrightMagenta => "magentaBright",
            TerminalColor::BrightCyan => "cyanBright",
            TerminalColor::BrightWhite => "whiteBright",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name {
            "black" => TerminalColor::Black,
            "red" => TerminalColor::Red,
            "green" => TerminalColor::Green,
            "yellow" => TerminalColor::Yellow,
            "blue" => TerminalColor::Blue,
            "magenta" => TerminalColor::Magenta,
            "cyan" => TerminalColor::Cyan,
            "white" => TerminalColor::White,
            "gray" | "grey" | "blackBright" => TerminalColor::BrightBlack,
            "redBright" => TerminalColor::BrightRed,
            "greenBright" => TerminalColor::BrightGreen,
            "yellowBright" => TerminalColor::BrightYellow,
            "blueBright" => TerminalColor::BrightBlue,
            "magentaBright" => TerminalColor::BrightMagenta,
            "cyanBright" => TerminalColor::BrightCyan,
            "whiteBright" => TerminalColor::BrightWhite,
            _ => return None,
        };
        Some(color)
    }

    /// SGR foreground parameter, e.g. 31 for red.
    pub fn fg_code(&self) -> u8 {
        match self {
            TerminalColor::Black => 30,
            TerminalColor::Red => 31,
            TerminalColor::Green => 32,
            TerminalColor::Yellow => 33,
            TerminalColor::Blue => 34,
            TerminalColor::Magenta => 35,
            TerminalColor::Cyan => 36,
            TerminalColor::White => 37,
            TerminalColor::BrightBlack => 90,
            TerminalColor::BrightRed => 91,
            TerminalColor::BrightGreen => 92,
            TerminalColor::BrightYellow => 93,
            TerminalColor::BrightBlue => 94,
            TerminalColor::BrightMagenta => 95,
            TerminalColor::BrightCyan => 96,
            TerminalColor::BrightWhite => 97,
        }
    }
}

impl fmt::Display for TerminalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    fg: Option<TerminalColor>,
    bold: bool,
    italic: bool,
    underline: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: TerminalColor) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && !self.bold && !self.italic && !self.underline
    }
}

/// Applies terminal styles. A disabled styler passes text through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    pub fn ansi() -> Self {
        Self { enabled: true }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn detect() -> Self {
        let enabled = atty::is(atty::Stream::Stdout)
            && colored::control::SHOULD_COLORIZE.should_colorize();
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wraps `text` in one SGR sequence and a reset. Always emits escapes
    /// when enabled, whatever the terminal or `NO_COLOR` say.
    pub fn paint(&self, text: &str, style: Style) -> String {
        if !self.enabled || style.is_plain() {
            return text.to_string();
        }

        let mut codes = Vec::with_capacity(4);
        if style.bold {
            codes.push("1".to_string());
        }
        if style.italic {
            codes.push("3".to_string());
        }
        if style.underline {
            codes.push("4".to_string());
        }
        if let Some(color) = style.fg {
            codes.push(color.fg_code().to_string());
        }

        format!("\x1b[{}m{}\x1b[0m", codes.join(";"), text)
    }

    pub fn color(&self, text: &str, color: TerminalColor) -> String {
        self.paint(text, Style::new().fg(color))
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, Style::new().bold())
    }

    pub fn italic(&self, text: &str) -> String {
        self.paint(text, Style::new().italic())
    }

    pub fn underline(&self, text: &str) -> String {
        self.paint(text, Style::new().underline())
    }
}

impl Default for Styler {
    fn default() -> Self {
        Self::detect()
    }
}

pub trait ColorSource {
    fn pick(&self, palette: &[TerminalColor]) -> TerminalColor;
}

pub struct RandomColors;

impl ColorSource for RandomColors {
    fn pick(&self, palette: &[TerminalColor]) -> TerminalColor {
        if palette.is_empty() {
            return TerminalColor::White;
        }
        palette[rand::thread_rng().gen_range(0..palette.len())]
    }
}

/// Walks the palette in order, wrapping around.
#[derive(Debug, Default)]
pub struct SequenceColors {
    next: Cell<usize>,
}

impl SequenceColors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(index: usize) -> Self {
        Self {
            next: Cell::new(index),
        }
    }
}

impl ColorSource for SequenceColors {
    fn pick(&self, palette: &[TerminalColor]) -> TerminalColor {
        if palette.is_empty() {
            return TerminalColor::White;
        }
        let index = self.next.get();
        self.next.set(index.wrapping_add(1));
        palette[index % palette.len()]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedColor(pub TerminalColor);

impl ColorSource for FixedColor {
    fn pick(&self, _palette: &[TerminalColor]) -> TerminalColor {
        self.0
    }
}

/// Splits `sentence` into alternating runs, flagging whitespace runs.
pub fn tokens(sentence: &str) -> Vec<(&str, bool)> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (i, c) in sentence.char_indices() {
        let ws = c.is_whitespace();
        if let Some(prev) = current {
            if prev != ws {
                parts.push((&sentence[start..i], prev));
                start = i;
            }
        }
        current = Some(ws);
    }

    if let Some(prev) = current {
        parts.push((&sentence[start..], prev));
    }

    parts
}

pub fn paint_words<F>(sentence: &str, mut paint: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut out = String::with_capacity(sentence.len());

    for (part, is_space) in tokens(sentence) {
        if is_space {
            out.push_str(part);
        } else {
            out.push_str(&paint(part));
        }
    }

    out
}

pub fn colorize(sentence: &str, colors: &dyn ColorSource, styler: &Styler) -> String {
    paint_words(sentence, |word| styler.color(word, colors.pick(&PALETTE)))
}

static ANSI_SEQUENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1b\[[0-9;]*m").expect("ansi pattern is valid and should always compile")
});

pub fn strip_styles(text: &str) -> String {
    ANSI_SEQUENCE.replace_all(text, "").into_owned()
}
