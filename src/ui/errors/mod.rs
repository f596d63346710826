// Wed Jan 15 2026 - Alex

pub mod display;
pub mod handler;

pub use display::ReportRenderer;
pub use handler::{exit_code_for, signal_number, ProcessControl, RecordingProcess, SystemProcess, DEFAULT_EXIT_CODE};
