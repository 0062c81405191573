//! LSP protocol feature implementations.
//!
//! This module provides implementations for LSP features:
//! - Hover information for WinAPI function names
//! - Completion of WinAPI function names
//! - Signature help inside WinAPI calls

mod completion;
mod hover;
mod scan;
mod signature_help;

pub use completion::completion_at_position;
pub use hover::{describe, hover_at_position};
pub use signature_help::signature_help_at_position;
