// src/gui/components/mod.rs
pub mod chart;
pub mod series_table;
