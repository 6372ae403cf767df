//! Binary gene × pathway incidence matrices from KEGG pathway and gene lists

pub mod catalog;
pub mod config;
pub mod error;
pub mod matrix;
pub mod output;
pub mod totals;
pub mod types;
