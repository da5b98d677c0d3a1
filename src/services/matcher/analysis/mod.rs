pub mod scoring;
pub mod strategies;
