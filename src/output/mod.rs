//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output and the interactive path prompt
//! - Progress bars
//! - Statistics reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{
    clean_path_input, print_banner, print_config_summary, print_error, print_info,
    print_success, print_warning, prompt_export_root,
};
pub use progress::{create_item_bar, create_spinner};
pub use stats::{print_plan, print_run_stats};
