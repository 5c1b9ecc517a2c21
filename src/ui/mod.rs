//! Terminal user interface: progress bars, prompts, and styled output.
//!
//! Everything here is glue around the core; the core itself never prints.

pub mod display;
pub mod progress;
pub mod prompt;

pub use display::{print_banner, show_batch_summary, show_rejections, show_selection, show_success};
pub use progress::PercentBar;
