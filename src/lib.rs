// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod bulletin;
pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod extract;
pub mod fetch;
pub mod gui;
pub mod pipeline;
pub mod progress;
pub mod series;
pub mod store;
