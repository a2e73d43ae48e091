//! The `cenarios` sheet: projection scenarios referenced by value columns
//! and by the description sheet's `cenario` column.

use crate::model::temporal::collect_named_rows;
use crate::model::{clean_integer_column, SheetBase, SheetSchema};
use crate::table::RawTable;

pub const SCHEMA: SheetSchema = SheetSchema {
    name: crate::sheets::SCENARIOS,
    required: &["nome", "descricao", "simbolo"],
    optional: &[],
    allows_value_columns: false,
};

#[derive(Debug, Clone)]
pub struct ScenarioRecord {
    /// 1-based sheet row number, for messages.
    pub row: usize,
    pub name: String,
    pub description: String,
    pub symbol: i64,
}

#[derive(Debug, Clone)]
pub struct ScenarioModel {
    pub base: SheetBase,
    pub scenarios: Vec<ScenarioRecord>,
}

impl ScenarioModel {
    pub fn from_table(table: RawTable) -> Self {
        let mut base = SheetBase::new(table);
        base.init();
        base.verify_structure(&SCHEMA);

        let (symbols, errors) = clean_integer_column(&base, "simbolo", None, true);
        base.cleaning_errors.extend(errors);

        let scenarios = collect_named_rows(&base, &symbols)
            .into_iter()
            .map(|(row, name, description, symbol)| ScenarioRecord {
                row,
                name,
                description,
                symbol,
            })
            .collect();

        ScenarioModel { base, scenarios }
    }

    pub fn sanity_check_passed(&self) -> bool {
        self.base.sanity_check_passed()
    }

    pub fn symbols(&self) -> Vec<i64> {
        self.scenarios.iter().map(|s| s.symbol).collect()
    }
}
