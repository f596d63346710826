// Tue Jan 13 2026 - Alex

pub mod logging;
pub mod string;

pub use logging::LoggingUtils;
pub use string::{indent, wrap, StringUtils};
