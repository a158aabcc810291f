//! Terminal front-end
//!
//! Bridges line-oriented user input to the session service and renders the
//! result after every change.

pub mod commands;
pub mod session;

pub use commands::{help_text, parse_line, SessionCommand};
pub use session::{run_session, OutputFormat, SessionOptions};
