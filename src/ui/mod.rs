//! Text rendering of session output and console input

pub mod console;
pub mod stats_panel;

pub use console::{Command, HELP};
pub use stats_panel::{render_lines, render_points, render_table};
