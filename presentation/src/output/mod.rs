//! Output formatting for meeting resolutions

pub mod console;
pub mod formatter;
