// Wed Jan 15 2026 - Alex

use crate::report::context::{RenderContext, Renderer, Transforms};
use crate::report::error::ReportResult;
use crate::report::{ErrorReport, Message};
use crate::stack::{LocationStyle, StackFrame};
use crate::ui::terminal::color::{Style, TerminalColor};
use crate::ui::theme::Glyphs;

/// Default report layout: name banner, messages, stack, code, exit code.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportRenderer;

impl ReportRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_name(&self, ctx: &mut RenderContext<'_>) -> ReportResult<()> {
        let report = ctx.report();
        let name = match report.name() {
            Some(name) => name,
            None => return Ok(()),
        };

        let style = Style::new().bold().underline().fg(TerminalColor::Red);
        let banner = ctx.transforms().styler().paint(name, style);

        ctx.print(&format!("{} {}", report.glyphs().banner, banner))
    }

    fn render_messages(&self, ctx: &mut RenderContext<'_>) -> ReportResult<()> {
        let report = ctx.report();
        let t = ctx.transforms();
        let last = report.messages().len().saturating_sub(1);

        for (i, message) in report.messages().iter().enumerate() {
            match message {
                Message::Text(text) => {
                    let mut block = t.wrap(text);
                    if report.name().is_some() {
                        block = t.indent(&block, 2);
                    }
                    if report.colorize() {
                        block = t.colorize(&block);
                    }
                    ctx.print(&block)?;
                }
                Message::Structured(value) => {
                    if i != 0 {
                        ctx.blank()?;
                    }
                    ctx.print(&t.indent(&t.format_structured(value), 2))?;
                    if i != last {
                        ctx.blank()?;
                    }
                }
                Message::Scalar(value) => ctx.print(&format!("  {}", value))?,
            }
        }

        Ok(())
    }

    fn render_stack(&self, ctx: &mut RenderContext<'_>) -> ReportResult<()> {
        let report = ctx.report();
        let t = ctx.transforms();

        ctx.blank()?;

        if let LocationStyle::Unrecognized(name) = report.location_style() {
            log::debug!("unrecognized location style '{}', skipping stack frames", name);
        }

        for frame in report.frames() {
            if let Some(line) = self.render_frame(frame, report, &t) {
                ctx.print(&line)?;
            }
        }

        Ok(())
    }

    /// One `→ key: value ...` line, or `None` when the style is unrecognized.
    pub fn render_frame(
        &self,
        frame: &StackFrame,
        report: &ErrorReport,
        t: &Transforms<'_>,
    ) -> Option<String> {
        Self::format_frame(frame, report.location_style(), report.colorize(), report.glyphs(), t)
    }

    pub fn format_frame(
        frame: &StackFrame,
        style: &LocationStyle,
        colorize: bool,
        glyphs: &Glyphs,
        t: &Transforms<'_>,
    ) -> Option<String> {
        let styler = t.styler();
        let fields = frame.layout(style)?;

        let body = fields
            .iter()
            .map(|(key, value)| {
                let value = if colorize {
                    t.colorize_styled(value, Style::new().italic())
                } else {
                    styler.italic(value)
                };
                format!("{}: {}", styler.bold(key), value)
            })
            .collect::<Vec<_>>()
            .join(" ");

        Some(t.indent(&format!("{} {}", glyphs.arrow, body), 2))
    }

    fn render_code(&self, ctx: &mut RenderContext<'_>) -> ReportResult<()> {
        let report = ctx.report();
        let code = match report.code() {
            Some(code) => code,
            None => return Ok(()),
        };
        let t = ctx.transforms();

        let mut style = Style::new().underline();
        if report.colorize() {
            style = style.fg(TerminalColor::BrightBlack);
        }

        ctx.blank()?;
        ctx.print(&t.indent(&t.styler().paint(code, style), 2))
    }

    fn render_exit_code(&self, ctx: &mut RenderContext<'_>) -> ReportResult<()> {
        let report = ctx.report();
        let status = match report.exit_code() {
            Some(status) => status,
            None => return Ok(()),
        };

        let label = if report.colorize() {
            ctx.transforms().styler().color("Exit code:", TerminalColor::Yellow)
        } else {
            "Exit code:".to_string()
        };

        ctx.blank()?;
        ctx.print(&format!("{} {} {}", report.glyphs().exit, label, status))
    }
}

impl Renderer for ReportRenderer {
    fn render(&self, ctx: &mut RenderContext<'_>) -> ReportResult<()> {
        self.render_name(ctx)?;
        self.render_messages(ctx)?;
        self.render_stack(ctx)?;
        self.render_code(ctx)?;
        self.render_exit_code(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::terminal::color::{strip_styles, SequenceColors, Styler};

    fn frame_line(style: &str, colorize: bool, styler: Styler) -> String {
        let colors = SequenceColors::new();
        let t = Transforms::new(styler, &colors, 80);
        let frame = StackFrame::at("index.ts", 3, 1);
        ReportRenderer::format_frame(&frame, &LocationStyle::parse(style), colorize, &Glyphs::unicode(), &t)
            .unwrap()
    }

    #[test]
    fn test_frame_line_label() {
        assert_eq!(
            frame_line("label", false, Styler::plain()),
            "  → line: 3 column: 1 file: index.ts"
        );
    }

    #[test]
    fn test_frame_line_coords() {
        assert_eq!(frame_line("coords", false, Styler::plain()), "  → file: index.ts:3:1");
    }

    #[test]
    fn test_frame_line_full() {
        assert_eq!(
            frame_line("full", false, Styler::plain()),
            "  → line: 3 column: 1 file: index.ts:3:1"
        );
    }

    #[test]
    fn test_styled_frame_keeps_visible_text() {
        for colorize in [true, false] {
            let line = frame_line("full", colorize, Styler::ansi());
            assert!(line.contains("\x1b[1mline\x1b[0m"));
            assert_eq!(strip_styles(&line), "  → line: 3 column: 1 file: index.ts:3:1");
        }
    }

    #[test]
    fn test_colorized_frame_values_get_word_colors() {
        let line = frame_line("coords", true, Styler::ansi());
        assert_eq!(
            line,
            "  → \x1b[1mfile\x1b[0m: \x1b[3;31mindex.ts:3:1\x1b[0m"
        );
    }

    #[test]
    fn test_unrecognized_style_skips_frame() {
        let colors = SequenceColors::new();
        let t = Transforms::new(Styler::plain(), &colors, 80);
        let frame = StackFrame::at("index.ts", 3, 1);
        let line = ReportRenderer::format_frame(
            &frame,
            &LocationStyle::parse("nope"),
            true,
            &Glyphs::unicode(),
            &t,
        );
        assert!(line.is_none());
    }
}
