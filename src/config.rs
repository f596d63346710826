// Tue Jan 13 2026 - Alex

use crate::report::error::{value_type, ReportError, ReportResult};
use crate::report::Renderer;
use crate::ui::errors::ReportRenderer;
use crate::ui::theme::Glyphs;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub use crate::stack::LocationStyle;

/// Exit value of a report: a plain code or a signal name such as `SIGTERM`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawExitStatus")]
pub enum ExitStatus {
    Code(i32),
    Signal(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawExitStatus {
    Code(i32),
    Name(String),
}

impl From<RawExitStatus> for ExitStatus {
    fn from(raw: RawExitStatus) -> Self {
        match raw {
            RawExitStatus::Code(code) => ExitStatus::Code(code),
            RawExitStatus::Name(name) => ExitStatus::parse(&name),
        }
    }
}

impl ExitStatus {
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<i32>() {
            Ok(code) => ExitStatus::Code(code),
            Err(_) => ExitStatus::Signal(value.trim().to_string()),
        }
    }
}

impl From<i32> for ExitStatus {
    fn from(code: i32) -> Self {
        ExitStatus::Code(code)
    }
}

impl From<&str> for ExitStatus {
    fn from(value: &str) -> Self {
        ExitStatus::parse(value)
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitStatus::Code(code) => write!(f, "{}", code),
            ExitStatus::Signal(name) => f.write_str(name),
        }
    }
}

/// Caller-facing options. Every field is optional; [`ReportConfig::resolve`]
/// fills in the defaults.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    pub name: Option<String>,
    pub code: Option<String>,
    pub exit_code: Option<ExitStatus>,
    pub auto_exit: Option<bool>,
    #[serde(alias = "colorizeEnabled")]
    pub colorize: Option<bool>,
    pub location_style: Option<LocationStyle>,
    pub cwd: Option<PathBuf>,
    #[serde(skip)]
    pub glyphs: Option<Glyphs>,
    #[serde(skip)]
    pub logger: Option<Box<dyn Renderer>>,
}

/// Fully-populated configuration a report is built from.
pub struct Settings {
    pub name: Option<String>,
    pub code: Option<String>,
    pub exit_code: Option<ExitStatus>,
    pub auto_exit: bool,
    pub colorize: bool,
    pub location_style: LocationStyle,
    pub cwd: Option<PathBuf>,
    pub glyphs: Glyphs,
    pub renderer: Box<dyn Renderer>,
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.code = Some(code.to_string());
        self
    }

    pub fn with_exit_code(mut self, status: impl Into<ExitStatus>) -> Self {
        self.exit_code = Some(status.into());
        self
    }

    pub fn with_auto_exit(mut self, auto_exit: bool) -> Self {
        self.auto_exit = Some(auto_exit);
        self
    }

    pub fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = Some(colorize);
        self
    }

    pub fn with_location_style(mut self, style: impl Into<LocationStyle>) -> Self {
        self.location_style = Some(style.into());
        self
    }

    pub fn with_cwd(mut self, cwd: PathBuf) -> Self {
        self.cwd = Some(cwd);
        self
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = Some(glyphs);
        self
    }

    pub fn with_logger<R: Renderer + 'static>(mut self, renderer: R) -> Self {
        self.logger = Some(Box::new(renderer));
        self
    }

    pub fn with_logger_fn<F>(self, render: F) -> Self
    where
        F: Fn(&mut crate::report::RenderContext<'_>) -> ReportResult<()> + 'static,
    {
        self.with_logger(render)
    }

    /// Reads options from loosely typed input. A `logger` entry is rejected
    /// since JSON cannot carry a renderer.
    pub fn from_value(value: &Value) -> ReportResult<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }

        let map = value.as_object().ok_or_else(|| {
            ReportError::InvalidArgument(format!(
                "config must be of type 'object', received '{}'",
                value_type(value)
            ))
        })?;

        if let Some(logger) = map.get("logger") {
            if !logger.is_null() {
                return Err(ReportError::InvalidArgument(format!(
                    "config.logger must be a renderer, received '{}'",
                    value_type(logger)
                )));
            }
        }

        serde_json::from_value(value.clone())
            .map_err(|e| ReportError::InvalidArgument(format!("invalid config: {}", e)))
    }

    pub fn load(path: &Path) -> ReportResult<Self> {
        let content = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;
        Self::from_value(&value)
    }

    pub fn resolve(self) -> Settings {
        let settings = Settings {
            name: self.name.filter(|n| !n.is_empty()),
            code: self.code.filter(|c| !c.is_empty()),
            exit_code: self.exit_code,
            auto_exit: self.auto_exit.unwrap_or(true),
            colorize: self.colorize.unwrap_or(true),
            location_style: self.location_style.unwrap_or_default(),
            cwd: self.cwd.or_else(|| std::env::current_dir().ok()),
            glyphs: self.glyphs.unwrap_or_default(),
            renderer: self
                .logger
                .unwrap_or_else(|| Box::new(ReportRenderer::new())),
        };

        log::debug!(
            "resolved report settings: style={} colorize={} auto_exit={}",
            settings.location_style,
            settings.colorize,
            settings.auto_exit
        );

        settings
    }
}
