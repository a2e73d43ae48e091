//! The `descricao` sheet: one row per indicator.

use crate::context::ValidationContext;
use crate::model::{clean_integer_column, SheetBase, SheetSchema};
use crate::table::RawTable;

pub const SCHEMA: SheetSchema = SheetSchema {
    name: crate::sheets::DESCRIPTION,
    required: &[
        "codigo",
        "nivel",
        "nome_simples",
        "nome_completo",
        "desc_simples",
        "desc_completa",
    ],
    optional: &["cenario", "legenda", "ordem", "relacao", "unidade"],
    allows_value_columns: false,
};

/// A cleaned description row.
#[derive(Debug, Clone)]
pub struct IndicatorRecord {
    /// 1-based sheet row number (header included), for messages.
    pub row: usize,
    pub code: u32,
    pub level: u32,
    pub simple_name: String,
    pub complete_name: String,
    pub simple_desc: String,
    pub complete_desc: String,
    pub scenario: Option<i64>,
    pub legend: Option<u32>,
    pub order: Option<u32>,
    pub relation: i64,
    pub unit: String,
}

/// Typed wrapper over the description sheet.
#[derive(Debug, Clone)]
pub struct DescriptionModel {
    pub base: SheetBase,
    /// Rows that survived cleaning, in sheet order.
    pub records: Vec<IndicatorRecord>,
}

impl DescriptionModel {
    pub fn from_table(table: RawTable, ctx: &ValidationContext) -> Self {
        let mut base = SheetBase::new(table);
        base.init();

        // pre-process: the scenario column is dynamic. Its presence without
        // a scenarios sheet is itself a structural defect.
        if base.table.has_column("cenario") && !ctx.scenarios_present {
            base.structural_errors.push(
                "column 'cenario' is present but the dataset has no scenarios sheet".to_string(),
            );
        }

        base.verify_structure(&SCHEMA);

        let records = Self::clean(&mut base);
        DescriptionModel { base, records }
    }

    fn clean(base: &mut SheetBase) -> Vec<IndicatorRecord> {
        let (codes, errors) = clean_integer_column(base, "codigo", Some(1), true);
        base.cleaning_errors.extend(errors);
        let (levels, errors) = clean_integer_column(base, "nivel", Some(1), true);
        base.cleaning_errors.extend(errors);
        let (scenarios, errors) = clean_integer_column(base, "cenario", None, false);
        base.cleaning_errors.extend(errors);
        let (legends, errors) = clean_integer_column(base, "legenda", Some(1), false);
        base.cleaning_errors.extend(errors);
        let (orders, errors) = clean_integer_column(base, "ordem", Some(1), false);
        base.cleaning_errors.extend(errors);
        let (relations, errors) = clean_integer_column(base, "relacao", None, false);
        base.cleaning_errors.extend(errors);

        let text = |name: &str, idx: usize| -> String {
            base.table
                .column(name)
                .and_then(|col| col.get(idx).copied().flatten().map(str::to_string))
                .unwrap_or_default()
        };

        let mut records = Vec::new();
        for idx in 0..base.table.rows.len() {
            // A row without a usable code or level cannot participate in
            // any downstream analysis; it was already reported above.
            let (code, level) = match (codes[idx], levels[idx]) {
                (Some(code), Some(level)) => (code as u32, level as u32),
                _ => continue,
            };

            records.push(IndicatorRecord {
                row: base.row_number(idx),
                code,
                level,
                simple_name: text("nome_simples", idx),
                complete_name: text("nome_completo", idx),
                simple_desc: text("desc_simples", idx),
                complete_desc: text("desc_completa", idx),
                scenario: scenarios[idx],
                legend: legends[idx].map(|v| v as u32),
                order: orders[idx].map(|v| v as u32),
                // post-process: documented defaults
                relation: relations[idx].unwrap_or(1),
                unit: text("unidade", idx),
            });
        }
        records
    }

    pub fn sanity_check_passed(&self) -> bool {
        self.base.sanity_check_passed()
    }

    /// All cleaned codes in sheet order.
    pub fn codes(&self) -> Vec<u32> {
        self.records.iter().map(|r| r.code).collect()
    }

    pub fn find(&self, code: u32) -> Option<&IndicatorRecord> {
        self.records.iter().find(|r| r.code == code)
    }

    /// The level-1 root indicator, when exactly one exists.
    pub fn root(&self) -> Option<&IndicatorRecord> {
        let mut roots = self.records.iter().filter(|r| r.level == 1);
        match (roots.next(), roots.next()) {
            (Some(root), None) => Some(root),
            _ => None,
        }
    }
}
