//! Driving Adapters
//!
//! Entry points that drive the application:
//! - JSON lines over stdin/stdout

pub mod json_lines;
