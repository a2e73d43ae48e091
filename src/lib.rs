//! # Indicheck - Indicator Database Validation
//!
//! Indicheck validates the fixed set of tabular files that together describe
//! a hierarchical indicator model: indicator descriptions, parent/child
//! composition, numeric values, temporal references, scenarios, legends and
//! dictionaries.
//!
//! ## Overview
//!
//! A dataset directory is loaded into raw tables, each table is wrapped in a
//! typed sheet model that verifies its structure and cleans its data, and a
//! catalog of independent content checks runs over the cleaned models. Every
//! check appends its findings to a single [`report::ValidationReport`]; a
//! failure in one sheet never stops the others from being checked.
//!
//! ## Modules
//!
//! - [`loader`] - Directory scanning and CSV/XLSX reading into raw tables
//! - [`model`] - Typed per-sheet wrappers with the structure/cleaning lifecycle
//! - [`graph`] - Adjacency-list digraph used by the hierarchy checks
//! - [`checks`] - Content validators (hierarchy, legends, cross-sheet)
//! - [`report`] - Named-check registry collecting errors and warnings
//! - [`runner`] - The sequential validation pipeline
//! - [`render`] - Terminal and JSON rendering of a finished report
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use indicheck::config::CheckConfig;
//! use indicheck::runner;
//!
//! let config = CheckConfig::default();
//! let report = runner::run(Path::new("dataset/"), &config)
//!     .expect("Failed to run validation");
//!
//! println!("{} errors, {} warnings", report.total_errors(), report.total_warnings());
//! ```

// Re-export all public modules
pub mod checks;
pub mod cli;
pub mod config;
pub mod context;
pub mod fixed;
pub mod graph;
pub mod loader;
pub mod model;
pub mod render;
pub mod report;
pub mod runner;
pub mod table;

/// Sheet file name constants for the dataset directory layout.
pub mod sheets {
    /// Indicator descriptions: `descricao.csv`
    pub const DESCRIPTION: &str = "descricao";
    /// Parent/child composition edges: `composicao.csv`
    pub const COMPOSITION: &str = "composicao";
    /// Numeric indicator values: `valores.csv`
    pub const VALUES: &str = "valores";
    /// Temporal references: `referencia_temporal.csv`
    pub const TEMPORAL: &str = "referencia_temporal";
    /// Proportionality matrix: `proporcionalidades.csv`
    pub const PROPORTIONALITY: &str = "proporcionalidades";
    /// Scenario definitions: `cenarios.csv`
    pub const SCENARIOS: &str = "cenarios";
    /// Legend ranges: `legenda.csv`
    pub const LEGEND: &str = "legenda";
    /// Spellcheck word list: `dicionario.csv`
    pub const DICTIONARY: &str = "dicionario";

    /// Sheets that must be present for a dataset to validate.
    pub const REQUIRED: &[&str] = &[DESCRIPTION, COMPOSITION, VALUES, TEMPORAL];
    /// Sheets that may be absent.
    pub const OPTIONAL: &[&str] = &[PROPORTIONALITY, SCENARIOS, LEGEND, DICTIONARY];
}

/// Sentinel cell value meaning "data unavailable".
pub const UNAVAILABLE: &str = "DI";

/// Reserved separator character. Cells may not contain it; the report
/// renderer uses it to join row lists.
pub const RESERVED_SEPARATOR: char = '|';
