//! Typed per-sheet wrappers over raw tables.
//!
//! Every sheet model follows the same lifecycle: init (cell-level sanity),
//! pre-process (dynamic column resolution), verify structure (expected vs
//! actual columns), clean data (type coercion with row drops), post-process
//! (derived defaults). [`SheetBase`] carries the shared state and the
//! generic steps; each submodule adds its sheet's schema and cleaning.

// Submodules, one per sheet
mod composition;
mod description;
mod dictionary;
mod legend;
mod proportionality;
mod scenarios;
mod temporal;
mod values;

pub use composition::{CompositionEdge, CompositionModel};
pub use description::{DescriptionModel, IndicatorRecord};
pub use dictionary::DictionaryModel;
pub use legend::{LegendModel, LegendRow};
pub use proportionality::ProportionalityModel;
pub use scenarios::{ScenarioModel, ScenarioRecord};
pub use temporal::{TemporalModel, TemporalReference};
pub use values::{ValueColumnId, ValueModel};

use regex::Regex;
use std::sync::OnceLock;

use crate::table::{HeaderKind, RawTable};
use crate::RESERVED_SEPARATOR;

/// Immutable column layout of one sheet.
#[derive(Debug, Clone, Copy)]
pub struct SheetSchema {
    pub name: &'static str,
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
    /// Whether columns matching the `CODE-YEAR[-SCENARIO]` pattern are
    /// legal on this sheet and excluded from the "unexpected" set.
    pub allows_value_columns: bool,
}

/// Every sheet schema, in catalog order.
pub fn all_schemas() -> [&'static SheetSchema; 8] {
    [
        &description::SCHEMA,
        &composition::SCHEMA,
        &values::SCHEMA,
        &temporal::SCHEMA,
        &scenarios::SCHEMA,
        &legend::SCHEMA,
        &proportionality::SCHEMA,
        &dictionary::SCHEMA,
    ]
}

/// Pattern for dynamic value column ids: `CODE-YEAR` or `CODE-YEAR-SCENARIO`.
pub fn value_column_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+)-(\d{4})(?:-(\d+))?$").unwrap())
}

/// Shared state and generic lifecycle steps of a sheet model.
#[derive(Debug, Clone)]
pub struct SheetBase {
    pub table: RawTable,
    pub structural_errors: Vec<String>,
    pub cleaning_errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl SheetBase {
    pub fn new(table: RawTable) -> Self {
        SheetBase {
            table,
            structural_errors: Vec::new(),
            cleaning_errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// 1-based row number of a data row index, counting the header row(s).
    pub fn row_number(&self, index: usize) -> usize {
        let offset = match self.table.header_kind {
            HeaderKind::Single => 2,
            HeaderKind::Double => 3,
        };
        index + offset
    }

    /// Cell-level structural sanity, run before any schema interpretation.
    ///
    /// Rejects cells containing the reserved separator and flags unnamed
    /// columns that nonetheless carry data.
    pub fn init(&mut self) {
        if !self.table.read_succeeded {
            return;
        }

        let offset = self.row_number(0);
        for (idx, row) in self.table.rows.iter().enumerate() {
            for cell in row.iter().flatten() {
                if cell.contains(RESERVED_SEPARATOR) {
                    self.structural_errors.push(format!(
                        "row {}: cell '{}' contains the reserved character '{}'",
                        idx + offset,
                        cell,
                        RESERVED_SEPARATOR
                    ));
                }
            }
        }

        // A row with more filled cells than named columns means an unnamed
        // header is hiding real data. Data rows align to the second header
        // row on double-header sheets.
        let headers = match self.table.header_kind {
            HeaderKind::Single => &self.table.columns,
            HeaderKind::Double => &self.table.sub_columns,
        };
        let named = headers.iter().filter(|c| !is_unnamed_header(c)).count();
        let overflowing: Vec<usize> = self
            .table
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| RawTable::filled_cells(row) > named)
            .map(|(idx, _)| idx + offset)
            .collect();
        if !overflowing.is_empty() {
            self.structural_errors.push(format!(
                "unnamed column carries values in rows {}",
                join_numbers(&overflowing)
            ));
        }
    }

    /// Diff expected vs actual columns. Missing required columns are
    /// errors, unexpected ones warnings. Dynamic value columns are excluded
    /// from "unexpected" when the schema allows them.
    pub fn verify_structure(&mut self, schema: &SheetSchema) {
        if !self.table.read_succeeded {
            return;
        }

        for &required in schema.required {
            if !self.table.has_column(required) {
                self.structural_errors
                    .push(format!("missing required column '{}'", required));
            }
        }

        for column in &self.table.columns {
            if is_unnamed_header(column) {
                continue; // already handled by init
            }
            let expected = schema.required.contains(&column.as_str())
                || schema.optional.contains(&column.as_str())
                || (schema.allows_value_columns && value_column_pattern().is_match(column));
            if !expected {
                self.warnings
                    .push(format!("unexpected column '{}'", column));
            }
        }
    }

    /// True only when the file exists, was read, has data, and produced no
    /// structural or cleaning errors. Dependent checks short-circuit on
    /// false so they never see malformed input.
    pub fn sanity_check_passed(&self) -> bool {
        self.table.exists
            && self.table.read_succeeded
            && !self.table.is_empty()
            && self.structural_errors.is_empty()
            && self.cleaning_errors.is_empty()
    }
}

/// Whether a header cell is effectively unnamed. Spreadsheet exports write
/// `Unnamed: N` for blank headers; CSVs just leave them empty.
pub fn is_unnamed_header(header: &str) -> bool {
    header.is_empty() || header.starts_with("Unnamed:")
}

/// Why a cell failed integer coercion.
#[derive(Debug, PartialEq, Eq)]
enum IntError {
    NotNumeric,
    NotInteger,
}

/// Parse a cell as an integer, tolerating a decimal separator with an
/// all-zero fraction (`"3"`, `"3.0"` and `"3,000"` all mean 3).
fn parse_integer(text: &str) -> Result<i64, IntError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(IntError::NotNumeric);
    }

    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut parts = body.splitn(2, |c| c == '.' || c == ',');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next();

    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IntError::NotNumeric);
    }
    if let Some(frac) = frac_part {
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IntError::NotNumeric);
        }
        if frac.bytes().any(|b| b != b'0') {
            return Err(IntError::NotInteger);
        }
    }

    int_part
        .parse::<i64>()
        .map(|v| sign * v)
        .map_err(|_| IntError::NotNumeric)
}

/// Clean one integer column of a table.
///
/// Returns the per-row parsed values (`None` where the cell was empty or
/// dropped) and the cleaning errors. Row numbers in messages are 1-based
/// and offset past the header row.
pub fn clean_integer_column(
    base: &SheetBase,
    column: &str,
    min: Option<i64>,
    required: bool,
) -> (Vec<Option<i64>>, Vec<String>) {
    let mut errors = Vec::new();
    let cells = match base.table.column(column) {
        Some(cells) => cells,
        None => return (vec![None; base.table.rows.len()], errors),
    };

    let values = cells
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let row = base.row_number(idx);
            let text = match cell {
                Some(text) => text,
                None => {
                    if required {
                        errors.push(format!("column '{}' row {}: empty cell", column, row));
                    }
                    return None;
                }
            };
            match parse_integer(text) {
                Ok(value) => {
                    if let Some(min) = min {
                        if value < min {
                            errors.push(format!(
                                "column '{}' row {}: value {} is below the minimum {}",
                                column, row, value, min
                            ));
                            return None;
                        }
                    }
                    Some(value)
                }
                Err(IntError::NotInteger) => {
                    errors.push(format!(
                        "column '{}' row {}: '{}' is not an integer",
                        column, row, text
                    ));
                    None
                }
                Err(IntError::NotNumeric) => {
                    errors.push(format!(
                        "column '{}' row {}: '{}' is not a number",
                        column, row, text
                    ));
                    None
                }
            }
        })
        .collect();

    (values, errors)
}

/// Join row numbers for messages: `4, 7, 12`.
pub fn join_numbers(numbers: &[usize]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
