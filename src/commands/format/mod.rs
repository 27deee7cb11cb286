//! Shared output formatting helpers for commands
//!
//! Provides common patterns for JSON status messages, Records headers and
//! step lines used by more than one command.

pub mod records;
pub mod status;

pub use records::{outcome_record, print_records_header, step_record};
pub use status::{human_step_line, print_json_status};
