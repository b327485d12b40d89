//! Benchmark client for the Fibonacci device.

pub mod app;
pub mod benchmark;
pub mod config;
pub mod errors;
pub mod logging;
