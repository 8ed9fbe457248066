pub mod config;
pub mod report;
pub mod rule;
pub mod scoring;
pub mod selection;
