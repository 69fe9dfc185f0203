//! CSRD Climate Dataset Library
//!
//! This library provides the core modules for the Norrland Stål AB synthetic
//! emissions dataset and its chart renderer.
//!
//! Module organization:
//! - `emissions`: data model, series generation, aggregation, workbook I/O
//! - `charts`: the three static chart renderers
//! - `config`: report configuration (company profile, seed, output paths)
//! - `pipeline`: shared generator / visualizer pipelines

pub mod charts;
pub mod config;
pub mod emissions;
pub mod pipeline;
