// Wed Jan 15 2026 - Alex

pub mod cli;
pub mod errors;
pub mod terminal;
pub mod theme;

pub use cli::{Args, CommandHandler};
pub use errors::ReportRenderer;
pub use terminal::{ConsoleSink, MemoryConsole, Terminal};
pub use theme::Glyphs;
