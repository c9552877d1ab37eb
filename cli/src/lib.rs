pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod mark;

// Re-export commonly used items
pub use args::Args;
pub use colors::ColorScheme;
pub use display::{display_analysis_info, display_separation, display_statistics, format_runs};
pub use json_output::create_json_output;
pub use mark::mark_separations;
