pub mod config;
pub mod dataset;
pub mod display;
pub mod error;
pub mod persist;
pub mod pipeline;
pub mod source;
