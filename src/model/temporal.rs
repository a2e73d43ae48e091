//! The `referencia_temporal` sheet: the years (or labeled moments) value
//! columns may refer to.

use crate::model::{clean_integer_column, SheetBase, SheetSchema};
use crate::table::RawTable;

pub const SCHEMA: SheetSchema = SheetSchema {
    name: crate::sheets::TEMPORAL,
    required: &["nome", "descricao", "simbolo"],
    optional: &[],
    allows_value_columns: false,
};

#[derive(Debug, Clone)]
pub struct TemporalReference {
    /// 1-based sheet row number, for messages.
    pub row: usize,
    pub name: String,
    pub description: String,
    pub symbol: i64,
}

#[derive(Debug, Clone)]
pub struct TemporalModel {
    pub base: SheetBase,
    pub references: Vec<TemporalReference>,
}

impl TemporalModel {
    pub fn from_table(table: RawTable) -> Self {
        let mut base = SheetBase::new(table);
        base.init();
        base.verify_structure(&SCHEMA);

        let (symbols, errors) = clean_integer_column(&base, "simbolo", None, true);
        base.cleaning_errors.extend(errors);

        let references = collect_named_rows(&base, &symbols)
            .into_iter()
            .map(|(row, name, description, symbol)| TemporalReference {
                row,
                name,
                description,
                symbol,
            })
            .collect();

        TemporalModel { base, references }
    }

    pub fn sanity_check_passed(&self) -> bool {
        self.base.sanity_check_passed()
    }

    pub fn symbols(&self) -> Vec<i64> {
        self.references.iter().map(|r| r.symbol).collect()
    }
}

/// Shared row shape of the temporal and scenario sheets: `nome`,
/// `descricao` and a cleaned integer `simbolo`.
pub(super) fn collect_named_rows(
    base: &SheetBase,
    symbols: &[Option<i64>],
) -> Vec<(usize, String, String, i64)> {
    let text = |name: &str, idx: usize| -> String {
        base.table
            .column(name)
            .and_then(|col| col.get(idx).copied().flatten().map(str::to_string))
            .unwrap_or_default()
    };

    (0..base.table.rows.len())
        .filter_map(|idx| {
            let symbol = symbols.get(idx).copied().flatten()?;
            Some((
                base.row_number(idx),
                text("nome", idx),
                text("descricao", idx),
                symbol,
            ))
        })
        .collect()
}
