//! Terminal output formatting
//!
//! Display utilities for the line-based mode and the score command.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_score_result, print_statistics, print_summary, print_turn,
};
