//! The `valores` sheet: an `id` column plus one dynamic column per
//! indicator/year (and optionally scenario) combination.

use crate::model::{value_column_pattern, SheetBase, SheetSchema};
use crate::table::RawTable;
use crate::UNAVAILABLE;

pub const SCHEMA: SheetSchema = SheetSchema {
    name: crate::sheets::VALUES,
    required: &["id"],
    optional: &[],
    allows_value_columns: true,
};

/// A parsed `CODE-YEAR[-SCENARIO]` column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueColumnId {
    /// The header exactly as written.
    pub name: String,
    pub code: u32,
    pub year: u16,
    pub scenario: Option<u16>,
}

impl ValueColumnId {
    /// Parse a header against the dynamic column pattern.
    pub fn parse(header: &str) -> Option<Self> {
        let captures = value_column_pattern().captures(header)?;
        Some(ValueColumnId {
            name: header.to_string(),
            code: captures[1].parse().ok()?,
            year: captures[2].parse().ok()?,
            scenario: match captures.get(3) {
                Some(m) => Some(m.as_str().parse().ok()?),
                None => None,
            },
        })
    }
}

#[derive(Debug, Clone)]
pub struct ValueModel {
    pub base: SheetBase,
    /// Well-formed dynamic columns, in header order.
    pub columns: Vec<ValueColumnId>,
}

impl ValueModel {
    pub fn from_table(table: RawTable) -> Self {
        let mut base = SheetBase::new(table);
        base.init();
        base.verify_structure(&SCHEMA);

        let columns: Vec<ValueColumnId> = base
            .table
            .columns
            .iter()
            .filter_map(|header| ValueColumnId::parse(header))
            .collect();

        let errors = Self::clean_cells(&base, &columns);
        base.cleaning_errors.extend(errors);

        ValueModel { base, columns }
    }

    /// Every cell of a value column must be numeric (comma or dot decimal
    /// separator), the unavailable-data sentinel, or empty. Offending cells
    /// are reported; the row stays available for referential checks.
    fn clean_cells(base: &SheetBase, columns: &[ValueColumnId]) -> Vec<String> {
        let mut errors = Vec::new();
        for column in columns {
            let cells = match base.table.column(&column.name) {
                Some(cells) => cells,
                None => continue,
            };
            for (idx, cell) in cells.iter().enumerate() {
                let text = match cell {
                    Some(text) => text.trim(),
                    None => continue,
                };
                if text == UNAVAILABLE || is_numeric(text) {
                    continue;
                }
                errors.push(format!(
                    "column '{}' row {}: '{}' is neither a number nor '{}'",
                    column.name,
                    base.row_number(idx),
                    text,
                    UNAVAILABLE
                ));
            }
        }
        errors
    }

    pub fn sanity_check_passed(&self) -> bool {
        self.base.sanity_check_passed()
    }

    /// Distinct indicator codes that have at least one value column.
    pub fn codes_with_values(&self) -> Vec<u32> {
        let mut codes: Vec<u32> = self.columns.iter().map(|c| c.code).collect();
        codes.sort_unstable();
        codes.dedup();
        codes
    }
}

/// Plain decimal with optional sign and one `.` or `,` separator.
fn is_numeric(text: &str) -> bool {
    let body = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);
    let mut parts = body.splitn(2, |c| c == '.' || c == ',');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next().unwrap_or("0");
    !int_part.is_empty()
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && !frac_part.is_empty()
        && frac_part.bytes().all(|b| b.is_ascii_digit())
}
