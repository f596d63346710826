// Tue Jan 13 2026 - Alex

pub mod structured;

pub use structured::{format_structured, StructuredFormatter};
