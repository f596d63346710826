// Fri Jan 16 2026 - Alex

pub mod capture;
pub mod frame;
pub mod parser;

pub use capture::{BacktraceSource, FixedStack, StackSource};
pub use frame::{LocationStyle, StackFrame};
pub use parser::{parse_frames, StackParser};
