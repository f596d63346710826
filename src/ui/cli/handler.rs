// Wed Jan 15 2026 - Alex

use super::args::Args;
use crate::config::{ExitStatus, ReportConfig};
use crate::report::{Environment, ErrorReport, Message};
use crate::ui::terminal::color::Styler;
use crate::ui::theme::Glyphs;
use crate::utils::logging::LoggingUtils;
use anyhow::Context;
use serde_json::Value;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_logging(&args)?;
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let messages = self.build_messages(&args)?;
        let config = self.build_config(&args)?;
        let mut env = self.build_environment(&args);

        ErrorReport::with_environment(messages, config, &mut env)?;
        Ok(())
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        LoggingUtils::init_logger(LoggingUtils::level_from_str(&args.log_level));
        Ok(())
    }

    pub fn build_messages(&self, args: &Args) -> anyhow::Result<Vec<Message>> {
        if !args.json {
            return Ok(args.messages.iter().map(|m| Message::text(m.as_str())).collect());
        }

        args.messages
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                serde_json::from_str::<Value>(raw)
                    .map(Message::from)
                    .with_context(|| format!("Message {} is not valid JSON", i + 1))
            })
            .collect()
    }

    /// Options file first, command-line flags on top.
    pub fn build_config(&self, args: &Args) -> anyhow::Result<ReportConfig> {
        let mut config = match args.config {
            Some(ref path) => ReportConfig::load(path)
                .with_context(|| format!("Failed to load config: {:?}", path))?,
            None => ReportConfig::new(),
        };

        if let Some(ref name) = args.name {
            config = config.with_name(name);
        }
        if let Some(ref code) = args.code {
            config = config.with_code(code);
        }
        if let Some(ref exit_code) = args.exit_code {
            config = config.with_exit_code(ExitStatus::parse(exit_code));
        }
        if let Some(ref style) = args.location_style {
            config = config.with_location_style(style.as_str());
        }
        if args.no_color {
            config = config.with_colorize(false);
        }
        if args.no_exit {
            config = config.with_auto_exit(false);
        }
        if args.ascii {
            config = config.with_glyphs(Glyphs::ascii());
        }

        Ok(config)
    }

    pub fn build_environment(&self, args: &Args) -> Environment {
        let mut env = Environment::system();

        if args.plain {
            env = env.with_styler(Styler::plain());
        }
        if let Some(width) = args.width {
            env = env.with_width(width);
        }

        env
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::LocationStyle;
    use clap::Parser;
    use serde_json::json;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["sweet-error"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_text_messages() {
        let messages = CommandHandler::new()
            .build_messages(&args(&["first", "second"]))
            .unwrap();
        assert_eq!(messages, vec![Message::text("first"), Message::text("second")]);
    }

    #[test]
    fn test_json_messages() {
        let messages = CommandHandler::new()
            .build_messages(&args(&["--json", "{\"a\":1}", "\"plain\"", "7"]))
            .unwrap();

        assert_eq!(
            messages,
            vec![
                Message::Structured(json!({"a": 1})),
                Message::text("plain"),
                Message::Scalar("7".to_string()),
            ]
        );
    }

    #[test]
    fn test_bad_json_message() {
        let err = CommandHandler::new()
            .build_messages(&args(&["--json", "{oops"]))
            .unwrap_err();
        assert!(err.to_string().contains("Message 1"));
    }

    #[test]
    fn test_flags_become_config() {
        let settings = CommandHandler::new()
            .build_config(&args(&[
                "--name", "MyError", "--code", "E1", "--exit-code", "4", "--no-color", "--no-exit",
                "--location-style", "full", "--ascii",
            ]))
            .unwrap()
            .resolve();

        assert_eq!(settings.name.as_deref(), Some("MyError"));
        assert_eq!(settings.code.as_deref(), Some("E1"));
        assert_eq!(settings.exit_code, Some(ExitStatus::Code(4)));
        assert!(!settings.colorize);
        assert!(!settings.auto_exit);
        assert_eq!(settings.location_style, LocationStyle::Full);
        assert_eq!(settings.glyphs, Glyphs::ascii());
    }

    #[test]
    fn test_environment_width_override() {
        let env = CommandHandler::new().build_environment(&args(&["--width", "33", "--plain"]));
        assert_eq!(env.width(), 33);
    }
}
