pub mod batch;
pub mod cli;
pub mod client;
pub mod config;
pub mod engine;
pub mod error;
pub mod read;
pub mod render;
