// Tue Jan 15 2026 - Alex

pub mod config;
pub mod output;
pub mod report;
pub mod stack;
pub mod ui;
pub mod utils;

pub use config::{ExitStatus, ReportConfig, Settings};
pub use output::format_structured;
pub use report::{
    messages_from_error, Environment, ErrorReport, Message, RenderContext, Renderer, ReportError,
    ReportResult, Transforms,
};
pub use stack::{LocationStyle, StackFrame};
pub use ui::errors::ReportRenderer;
pub use ui::terminal::color::{colorize, strip_styles};
pub use utils::string::{indent, wrap};
