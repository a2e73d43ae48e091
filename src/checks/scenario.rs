//! Scenario sheet content checks.

use std::collections::BTreeMap;

use crate::checks::Findings;
use crate::model::{join_numbers, ScenarioModel};

/// Scenario symbols must be unique across the sheet. One error per
/// duplicated value, listing every row that carries it.
pub fn check_symbols_unique(scenarios: &ScenarioModel) -> Findings {
    let mut by_symbol: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    for scenario in &scenarios.scenarios {
        by_symbol.entry(scenario.symbol).or_default().push(scenario.row);
    }

    let errors = by_symbol
        .into_iter()
        .filter(|(_, rows)| rows.len() > 1)
        .map(|(symbol, rows)| {
            format!(
                "duplicate scenario symbol {} (rows {})",
                symbol,
                join_numbers(&rows)
            )
        })
        .collect();

    (errors, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScenarioModel;
    use crate::table::{HeaderKind, RawTable};

    fn scenarios(symbols: &[&str]) -> ScenarioModel {
        let table = RawTable {
            exists: true,
            read_succeeded: true,
            header_kind: HeaderKind::Single,
            columns: vec![
                "nome".to_string(),
                "descricao".to_string(),
                "simbolo".to_string(),
            ],
            sub_columns: Vec::new(),
            rows: symbols
                .iter()
                .map(|s| {
                    vec![
                        Some(format!("scenario {}", s)),
                        Some("d".to_string()),
                        Some(s.to_string()),
                    ]
                })
                .collect(),
        };
        ScenarioModel::from_table(table)
    }

    #[test]
    fn test_unique_symbols_pass() {
        let (errors, _) = check_symbols_unique(&scenarios(&["1", "2", "3"]));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_duplicate_symbol_reported_once() {
        let (errors, _) = check_symbols_unique(&scenarios(&["1", "2", "2", "3"]));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("symbol 2"));
        assert!(errors[0].contains("rows 3, 4"));
    }
}
