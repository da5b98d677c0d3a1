pub mod config;
pub mod result_summary;
pub mod types;
