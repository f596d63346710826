// Fri Jan 16 2026 - Alex

use super::error::ReportResult;
use super::ErrorReport;
use crate::output::structured::StructuredFormatter;
use crate::ui::terminal::color::{self, ColorSource, Style, Styler, PALETTE};
use crate::ui::terminal::ConsoleSink;
use crate::utils::string::StringUtils;
use serde_json::Value;

/// Draws a report. The default is [`crate::ui::errors::ReportRenderer`];
/// any `Fn(&mut RenderContext) -> ReportResult<()>` can stand in for it.
pub trait Renderer {
    fn render(&self, ctx: &mut RenderContext<'_>) -> ReportResult<()>;
}

impl<F> Renderer for F
where
    F: Fn(&mut RenderContext<'_>) -> ReportResult<()>,
{
    fn render(&self, ctx: &mut RenderContext<'_>) -> ReportResult<()> {
        self(ctx)
    }
}

/// The text helpers handed to renderers.
#[derive(Clone, Copy)]
pub struct Transforms<'a> {
    styler: Styler,
    colors: &'a dyn ColorSource,
    width: usize,
}

impl<'a> Transforms<'a> {
    pub fn new(styler: Styler, colors: &'a dyn ColorSource, width: usize) -> Self {
        Self {
            styler,
            colors,
            width,
        }
    }

    pub fn styler(&self) -> Styler {
        self.styler
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn wrap(&self, text: &str) -> String {
        StringUtils::wrap(text, self.width)
    }

    pub fn indent(&self, text: &str, padding: isize) -> String {
        StringUtils::indent(text, padding)
    }

    pub fn colorize(&self, sentence: &str) -> String {
        color::colorize(sentence, self.colors, &self.styler)
    }

    /// Per-word colors on top of `base`.
    pub fn colorize_styled(&self, sentence: &str, base: Style) -> String {
        color::paint_words(sentence, |word| {
            self.styler.paint(word, base.fg(self.colors.pick(&PALETTE)))
        })
    }

    pub fn format_structured(&self, value: &Value) -> String {
        StructuredFormatter::new().format(value)
    }
}

pub struct RenderContext<'a> {
    report: &'a ErrorReport,
    transforms: Transforms<'a>,
    console: &'a mut dyn ConsoleSink,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        report: &'a ErrorReport,
        transforms: Transforms<'a>,
        console: &'a mut dyn ConsoleSink,
    ) -> Self {
        Self {
            report,
            transforms,
            console,
        }
    }

    pub fn report(&self) -> &'a ErrorReport {
        self.report
    }

    pub fn transforms(&self) -> Transforms<'a> {
        self.transforms
    }

    pub fn print(&mut self, line: &str) -> ReportResult<()> {
        self.console.write_line(line)?;
        Ok(())
    }

    pub fn blank(&mut self) -> ReportResult<()> {
        self.print("")
    }
}
