mod engine;
mod report;

pub use engine::*;
pub use report::{format_outcome_summary, format_results};
