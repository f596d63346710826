// Fri Jan 16 2026 - Alex

pub mod context;
pub mod error;
pub mod message;

pub use context::{RenderContext, Renderer, Transforms};
pub use error::{ReportError, ReportResult};
pub use message::{messages_from_error, Message};

use crate::config::{ExitStatus, ReportConfig, Settings};
use crate::stack::{BacktraceSource, LocationStyle, StackFrame, StackParser, StackSource};
use crate::ui::errors::{ProcessControl, SystemProcess};
use crate::ui::terminal::color::{ColorSource, RandomColors, Styler};
use crate::ui::terminal::{default_wrap_width, ConsoleSink, Terminal};
use crate::ui::theme::Glyphs;
use error::value_type;
use serde_json::Value;
use std::fmt;

/// Collaborators a report talks to while it is built.
pub struct Environment {
    stack: Box<dyn StackSource>,
    console: Box<dyn ConsoleSink>,
    process: Box<dyn ProcessControl>,
    colors: Box<dyn ColorSource>,
    styler: Styler,
    width: usize,
}

impl Environment {
    /// Real backtraces, stdout, process exit and random colors.
    pub fn system() -> Self {
        Self {
            stack: Box::new(BacktraceSource),
            console: Box::new(Terminal::new()),
            process: Box::new(SystemProcess),
            colors: Box::new(RandomColors),
            styler: Styler::detect(),
            width: default_wrap_width(),
        }
    }

    pub fn with_stack<S: StackSource + 'static>(mut self, stack: S) -> Self {
        self.stack = Box::new(stack);
        self
    }

    pub fn with_console<C: ConsoleSink + 'static>(mut self, console: C) -> Self {
        self.console = Box::new(console);
        self
    }

    pub fn with_process<P: ProcessControl + 'static>(mut self, process: P) -> Self {
        self.process = Box::new(process);
        self
    }

    pub fn with_colors<C: ColorSource + 'static>(mut self, colors: C) -> Self {
        self.colors = Box::new(colors);
        self
    }

    pub fn with_styler(mut self, styler: Styler) -> Self {
        self.styler = styler;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::system()
    }
}

/// One error event: its messages, metadata and the call stack captured when
/// it was created.
pub struct ErrorReport {
    messages: Vec<Message>,
    name: Option<String>,
    code: Option<String>,
    exit_code: Option<ExitStatus>,
    auto_exit: bool,
    colorize: bool,
    location_style: LocationStyle,
    glyphs: Glyphs,
    frames: Vec<StackFrame>,
    renderer: Box<dyn Renderer>,
}

impl ErrorReport {
    /// Builds, prints and (unless `autoExit` is off) exits.
    pub fn new<I>(messages: I, config: ReportConfig) -> ReportResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        Self::with_environment(messages, config, &mut Environment::system())
    }

    pub fn with_environment<I>(
        messages: I,
        config: ReportConfig,
        env: &mut Environment,
    ) -> ReportResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        let messages = messages.into_iter().map(Into::into).collect();
        let report = Self::capture(messages, config.resolve(), env.stack.as_ref());

        report.render(env)?;

        if report.auto_exit {
            env.process.exit(report.exit_code.as_ref());
        }

        Ok(report)
    }

    /// Loosely typed entry point. `messages` must be an array and `config`,
    /// when given, an object.
    pub fn from_json(messages: Value, config: Option<Value>) -> ReportResult<Self> {
        Self::from_json_with_environment(messages, config, &mut Environment::system())
    }

    pub fn from_json_with_environment(
        messages: Value,
        config: Option<Value>,
        env: &mut Environment,
    ) -> ReportResult<Self> {
        let items = match messages {
            Value::Array(items) => items,
            other => {
                return Err(ReportError::InvalidArgument(format!(
                    "messages must be of type 'array', received '{}'",
                    value_type(&other)
                )))
            }
        };

        let config = match config {
            Some(ref value) => ReportConfig::from_value(value)?,
            None => ReportConfig::default(),
        };

        Self::with_environment(items, config, env)
    }

    /// Captures and parses the stack without printing anything. The first
    /// frame is the point of construction and is dropped.
    pub fn capture(messages: Vec<Message>, settings: Settings, stack: &dyn StackSource) -> Self {
        let mut parser = StackParser::new();
        if let Some(ref cwd) = settings.cwd {
            parser = parser.with_cwd(cwd);
        }

        let mut frames = parser.parse_lines(&stack.capture());
        if !frames.is_empty() {
            frames.remove(0);
        }

        log::debug!(
            "report built with {} messages and {} frames",
            messages.len(),
            frames.len()
        );

        Self {
            messages,
            name: settings.name,
            code: settings.code,
            exit_code: settings.exit_code,
            auto_exit: settings.auto_exit,
            colorize: settings.colorize,
            location_style: settings.location_style,
            glyphs: settings.glyphs,
            frames,
            renderer: settings.renderer,
        }
    }

    /// Runs the configured renderer against `env`'s console. Never exits.
    pub fn render(&self, env: &mut Environment) -> ReportResult<()> {
        let transforms = Transforms::new(env.styler, env.colors.as_ref(), env.width);
        let mut ctx = RenderContext::new(self, transforms, env.console.as_mut());
        self.renderer.render(&mut ctx)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn exit_code(&self) -> Option<&ExitStatus> {
        self.exit_code.as_ref()
    }

    pub fn auto_exit(&self) -> bool {
        self.auto_exit
    }

    pub fn colorize(&self) -> bool {
        self.colorize
    }

    pub fn location_style(&self) -> &LocationStyle {
        &self.location_style
    }

    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }
}

impl fmt::Debug for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorReport")
            .field("messages", &self.messages)
            .field("name", &self.name)
            .field("code", &self.code)
            .field("exit_code", &self.exit_code)
            .field("auto_exit", &self.auto_exit)
            .field("colorize", &self.colorize)
            .field("location_style", &self.location_style)
            .field("frames", &self.frames.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::FixedStack;
    use crate::ui::errors::RecordingProcess;
    use crate::ui::terminal::color::{strip_styles, FixedColor, SequenceColors, TerminalColor};
    use crate::ui::terminal::MemoryConsole;
    use serde_json::json;

    const STACK: [&str; 3] = [
        "    at sweet_error::report::ErrorReport::new (src/report/mod.rs:101:9)",
        "    at main (index.ts:3:1)",
        "    at run (lib/worker.js:12:4)",
    ];

    fn test_env(stack: FixedStack) -> (Environment, MemoryConsole, RecordingProcess) {
        let console = MemoryConsole::new();
        let process = RecordingProcess::new();
        let env = Environment::system()
            .with_stack(stack)
            .with_console(console.clone())
            .with_process(process.clone())
            .with_colors(SequenceColors::new())
            .with_styler(Styler::plain())
            .with_width(80);
        (env, console, process)
    }

    fn quiet() -> ReportConfig {
        ReportConfig::new()
            .with_colorize(false)
            .with_auto_exit(false)
            .with_cwd("/work".into())
    }

    #[test]
    fn test_named_text_report() {
        let (mut env, console, process) = test_env(FixedStack::new(STACK));
        let report =
            ErrorReport::with_environment(["Something broke"], quiet().with_name("MyError"), &mut env)
                .unwrap();

        assert_eq!(
            console.lines(),
            vec![
                "🔴 MyError",
                "  Something broke",
                "",
                "  → line: 3 column: 1 file: index.ts function: main",
                "  → line: 12 column: 4 file: lib/worker.js function: run",
            ]
        );
        assert_eq!(report.frames().len(), 2);
        assert_eq!(process.call_count(), 0);
    }

    #[test]
    fn test_single_structured_message_has_no_padding_lines() {
        let (mut env, console, _) = test_env(FixedStack::empty());
        ErrorReport::from_json_with_environment(
            json!([{"a": 1}]),
            Some(json!({"colorizeEnabled": false, "autoExit": false})),
            &mut env,
        )
        .unwrap();

        assert_eq!(console.output(), "  {\n    a: 1,\n  }\n");
    }

    #[test]
    fn test_structured_between_text_is_padded() {
        let (mut env, console, _) = test_env(FixedStack::empty());
        ErrorReport::with_environment(
            vec![Message::text("before"), Message::from(json!([1])), Message::text("after")],
            quiet(),
            &mut env,
        )
        .unwrap();

        assert_eq!(
            console.lines(),
            vec!["before", "", "  [\n    1,\n  ]", "", "after", ""]
        );
    }

    #[test]
    fn test_scalar_messages_are_indented() {
        let (mut env, console, _) = test_env(FixedStack::empty());
        ErrorReport::from_json_with_environment(
            json!([42, true]),
            Some(json!({"colorize": false, "autoExit": false})),
            &mut env,
        )
        .unwrap();

        assert_eq!(console.lines(), vec!["  42", "  true", ""]);
    }

    #[test]
    fn test_code_and_exit_code_blocks() {
        let (mut env, console, _) = test_env(FixedStack::empty());
        ErrorReport::with_environment(
            ["Disk full"],
            quiet()
                .with_name("IoError")
                .with_code("IoError.DiskFull")
                .with_exit_code(3)
                .with_glyphs(Glyphs::ascii()),
            &mut env,
        )
        .unwrap();

        assert_eq!(
            console.lines(),
            vec![
                "[x] IoError",
                "  Disk full",
                "",
                "",
                "  IoError.DiskFull",
                "",
                "[!] Exit code: 3",
            ]
        );
    }

    #[test]
    fn test_auto_exit_calls_process_once() {
        let (mut env, _, process) = test_env(FixedStack::empty());
        ErrorReport::with_environment(
            ["fatal"],
            ReportConfig::new().with_exit_code("SIGTERM"),
            &mut env,
        )
        .unwrap();

        assert_eq!(process.calls(), vec![Some(ExitStatus::Signal("SIGTERM".to_string()))]);
    }

    #[test]
    fn test_auto_exit_without_exit_code() {
        let (mut env, _, process) = test_env(FixedStack::empty());
        ErrorReport::with_environment(["fatal"], ReportConfig::new(), &mut env).unwrap();
        assert_eq!(process.calls(), vec![None]);
    }

    #[test]
    fn test_first_frame_is_discarded() {
        let (mut env, _, _) = test_env(FixedStack::new(STACK));
        let report = ErrorReport::with_environment(["x"], quiet(), &mut env).unwrap();

        assert_eq!(report.frames()[0].function.as_deref(), Some("main"));
        assert!(report
            .frames()
            .iter()
            .all(|f| f.file.as_deref() != Some("src/report/mod.rs")));
    }

    #[test]
    fn test_render_is_idempotent() {
        let console = MemoryConsole::new();
        let mut env = Environment::system()
            .with_stack(FixedStack::new(STACK))
            .with_console(console.clone())
            .with_process(RecordingProcess::new())
            .with_colors(FixedColor(TerminalColor::Cyan))
            .with_styler(Styler::ansi())
            .with_width(40);
        let report = ErrorReport::with_environment(
            ["a fairly long message that will need to wrap across lines"],
            ReportConfig::new().with_name("Oops").with_auto_exit(false),
            &mut env,
        )
        .unwrap();
        let first = console.output();

        console.clear();
        report.render(&mut env).unwrap();

        assert!(first.contains("\x1b[36m"));
        assert_eq!(console.output(), first);
    }

    #[test]
    fn test_colorized_output_strips_to_plain() {
        let plain = MemoryConsole::new();
        let mut env = Environment::system()
            .with_stack(FixedStack::new(STACK))
            .with_console(plain.clone())
            .with_styler(Styler::plain());
        let report = ErrorReport::with_environment(
            ["Something broke"],
            quiet().with_name("MyError").with_colorize(true),
            &mut env,
        )
        .unwrap();

        let styled = MemoryConsole::new();
        let mut env = Environment::system()
            .with_console(styled.clone())
            .with_colors(SequenceColors::new())
            .with_styler(Styler::ansi());
        report.render(&mut env).unwrap();

        assert!(styled.output().contains("\x1b[31m"));
        assert_eq!(strip_styles(&styled.output()), plain.output());
    }

    #[test]
    fn test_banner_is_red_without_colorize() {
        let (env, console, _) = test_env(FixedStack::empty());
        let mut env = env.with_styler(Styler::ansi());
        ErrorReport::with_environment(["Something broke"], quiet().with_name("MyError"), &mut env)
            .unwrap();

        assert_eq!(
            console.lines(),
            vec!["🔴 \x1b[1;4;31mMyError\x1b[0m", "  Something broke", ""]
        );
    }

    #[test]
    fn test_custom_renderer_receives_report() {
        let (mut env, console, _) = test_env(FixedStack::new(STACK));
        let config = quiet()
            .with_name("Custom")
            .with_logger_fn(|ctx: &mut RenderContext<'_>| {
                let report = ctx.report();
                let t = ctx.transforms();
                let line = format!(
                    "{}|{}|{}",
                    report.name().unwrap_or("-"),
                    report.messages().len(),
                    report.frames().len()
                );
                ctx.print(&t.indent(&line, 4))
            });
        ErrorReport::with_environment(["one", "two"], config, &mut env).unwrap();

        assert_eq!(console.lines(), vec!["    Custom|2|2"]);
    }

    #[test]
    fn test_unrecognized_style_prints_no_frames() {
        let (mut env, console, _) = test_env(FixedStack::new(STACK));
        ErrorReport::with_environment(["x"], quiet().with_location_style("diagonal"), &mut env)
            .unwrap();
        assert_eq!(console.lines(), vec!["x", ""]);
    }

    #[test]
    fn test_coords_style_report() {
        let (mut env, console, _) = test_env(FixedStack::new(STACK));
        ErrorReport::with_environment(["x"], quiet().with_location_style("coords"), &mut env)
            .unwrap();
        assert_eq!(console.lines()[2], "  → file: index.ts:3:1 function: main");
    }

    #[test]
    fn test_rejects_non_array_messages() {
        let (mut env, console, process) = test_env(FixedStack::new(STACK));
        let err = ErrorReport::from_json_with_environment(json!("oops"), None, &mut env)
            .unwrap_err();

        assert!(matches!(err, ReportError::InvalidArgument(_)));
        assert!(err.to_string().contains("'string'"));
        assert!(console.lines().is_empty());
        assert_eq!(process.call_count(), 0);
    }

    #[test]
    fn test_rejects_logger_in_json_config() {
        let (mut env, console, process) = test_env(FixedStack::empty());
        let err = ErrorReport::from_json_with_environment(
            json!(["x"]),
            Some(json!({"logger": "console.log"})),
            &mut env,
        )
        .unwrap_err();

        assert!(matches!(err, ReportError::InvalidArgument(_)));
        assert!(console.lines().is_empty());
        assert_eq!(process.call_count(), 0);
    }

    #[test]
    fn test_empty_messages_print_stack_only() {
        let (mut env, console, _) = test_env(FixedStack::new(STACK));
        ErrorReport::with_environment(Vec::<Message>::new(), quiet(), &mut env).unwrap();
        assert_eq!(console.lines().len(), 3);
        assert_eq!(console.lines()[0], "");
    }
}
