//! Shared validation context derived from the optional sheets.
//!
//! Several checks change behavior depending on whether scenarios or legends
//! exist at all. That knowledge is computed once by the runner and passed
//! by reference; validators never re-read other sheets to find out.

/// Facts about the dataset that cross-cut individual sheets.
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    /// The scenarios sheet exists and has at least one row.
    pub scenarios_present: bool,
    /// The legend sheet exists and has at least one row.
    pub legend_present: bool,
    /// Cleaned scenario symbols, in sheet order (duplicates preserved).
    pub scenario_symbols: Vec<i64>,
}

impl ValidationContext {
    /// True when `symbol` names a declared scenario.
    pub fn is_scenario_symbol(&self, symbol: i64) -> bool {
        self.scenario_symbols.contains(&symbol)
    }
}
