//! The `legenda` sheet: labeled color ranges, grouped by legend code.
//!
//! The model only does structural work and keeps cells as written. Typing
//! the cells (integer codes, fixed-point bounds) belongs to the legend
//! interval validator, whose dtype step reports offenders with row numbers
//! instead of silently dropping them here.

use crate::model::{SheetBase, SheetSchema};
use crate::table::RawTable;

pub const SCHEMA: SheetSchema = SheetSchema {
    name: crate::sheets::LEGEND,
    required: &["codigo", "etiqueta", "cor", "minimo", "maximo", "ordem"],
    optional: &[],
    allows_value_columns: false,
};

/// One legend row, cells as written in the sheet.
#[derive(Debug, Clone, Default)]
pub struct LegendRow {
    /// 1-based sheet row number, for messages.
    pub row: usize,
    pub code: Option<String>,
    pub label: Option<String>,
    pub color: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub order: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LegendModel {
    pub base: SheetBase,
    pub rows: Vec<LegendRow>,
}

impl LegendModel {
    pub fn from_table(table: RawTable) -> Self {
        let mut base = SheetBase::new(table);
        base.init();
        base.verify_structure(&SCHEMA);

        let cell = |name: &str, idx: usize| -> Option<String> {
            base.table
                .column(name)
                .and_then(|col| col.get(idx).copied().flatten().map(str::to_string))
        };

        let rows = (0..base.table.rows.len())
            .map(|idx| LegendRow {
                row: base.row_number(idx),
                code: cell("codigo", idx),
                label: cell("etiqueta", idx),
                color: cell("cor", idx),
                min: cell("minimo", idx),
                max: cell("maximo", idx),
                order: cell("ordem", idx),
            })
            .collect();

        LegendModel { base, rows }
    }

    pub fn sanity_check_passed(&self) -> bool {
        self.base.sanity_check_passed()
    }
}
